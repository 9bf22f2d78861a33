// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The ingestion boundary in front of a [`LedgerStore`], plus the ledger view
//! queries (search, ordering, recent activity).

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{RawTransaction, Transaction};
use crate::store::LedgerStore;
use crate::validation::validate;

/// Wraps a store so every mutation is validated first and logged.
///
/// Validation runs before the store is touched, so a rejected request leaves
/// the ledger unchanged.
#[derive(Debug)]
pub struct Ledger<S> {
    store: S,
}

impl<S: LedgerStore> Ledger<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    pub fn all(&self) -> LedgerResult<Vec<Transaction>> {
        let txs = self.store.list()?;
        tracing::debug!(count = txs.len(), "listed transactions");
        Ok(txs)
    }

    pub fn find(&self, id: &str) -> LedgerResult<Transaction> {
        let id = parse_id(id)?;
        self.store.get(id)?.ok_or(LedgerError::NotFound(id))
    }

    pub fn add(&mut self, raw: &RawTransaction) -> LedgerResult<Transaction> {
        let candidate = validate(raw).inspect_err(|e| {
            tracing::warn!(error = %e, "rejected new transaction");
        })?;
        let tx = self.store.create(candidate)?;
        tracing::info!(id = tx.id, amount = %tx.amount, category = %tx.category, "created transaction");
        Ok(tx)
    }

    pub fn update(&mut self, id: &str, raw: &RawTransaction) -> LedgerResult<Transaction> {
        let id = parse_id(id)?;
        let candidate = validate(raw).inspect_err(|e| {
            tracing::warn!(id, error = %e, "rejected transaction update");
        })?;
        let tx = self
            .store
            .replace(id, candidate)?
            .ok_or(LedgerError::NotFound(id))?;
        tracing::info!(id, "replaced transaction");
        Ok(tx)
    }

    pub fn remove(&mut self, id: &str) -> LedgerResult<i64> {
        let id = parse_id(id)?;
        if !self.store.delete(id)? {
            return Err(LedgerError::NotFound(id));
        }
        tracing::info!(id, "deleted transaction");
        Ok(id)
    }
}

pub fn parse_id(s: &str) -> LedgerResult<i64> {
    s.trim()
        .parse::<i64>()
        .map_err(|_| LedgerError::InvalidId(s.to_string()))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "oldest" => Ok(SortOrder::Asc),
            "desc" | "newest" => Ok(SortOrder::Desc),
            other => Err(format!("Invalid order '{}', expected asc or desc", other)),
        }
    }
}

/// Case-insensitive substring match on description or category.
pub fn search<'a>(transactions: &'a [Transaction], term: &str) -> Vec<&'a Transaction> {
    let needle = term.trim().to_lowercase();
    transactions
        .iter()
        .filter(|t| {
            needle.is_empty()
                || t.category.to_lowercase().contains(&needle)
                || t
                    .description
                    .as_deref()
                    .is_some_and(|d| d.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Stable sort by date; same-day entries keep their incoming order.
pub fn sort_by_date(transactions: &mut [&Transaction], order: SortOrder) {
    match order {
        SortOrder::Asc => transactions.sort_by(|a, b| a.date.cmp(&b.date)),
        SortOrder::Desc => transactions.sort_by(|a, b| b.date.cmp(&a.date)),
    }
}

/// The `n` newest transactions.
pub fn recent(transactions: &[Transaction], n: usize) -> Vec<&Transaction> {
    let mut all: Vec<&Transaction> = transactions.iter().collect();
    sort_by_date(&mut all, SortOrder::Desc);
    all.truncate(n);
    all
}
