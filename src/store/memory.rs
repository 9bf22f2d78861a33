// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeMap;

use crate::error::LedgerResult;
use crate::models::{NewTransaction, Transaction};
use crate::store::LedgerStore;

/// In-memory ledger, handy for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: BTreeMap<i64, Transaction>,
    last_id: i64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl LedgerStore for MemoryStore {
    fn list(&self) -> LedgerResult<Vec<Transaction>> {
        Ok(self.records.values().cloned().collect())
    }

    fn get(&self, id: i64) -> LedgerResult<Option<Transaction>> {
        Ok(self.records.get(&id).cloned())
    }

    fn create(&mut self, candidate: NewTransaction) -> LedgerResult<Transaction> {
        self.last_id += 1;
        let tx = candidate.with_id(self.last_id);
        self.records.insert(tx.id, tx.clone());
        Ok(tx)
    }

    fn replace(&mut self, id: i64, candidate: NewTransaction) -> LedgerResult<Option<Transaction>> {
        match self.records.get_mut(&id) {
            Some(slot) => {
                *slot = candidate.with_id(id);
                Ok(Some(slot.clone()))
            }
            None => Ok(None),
        }
    }

    fn delete(&mut self, id: i64) -> LedgerResult<bool> {
        Ok(self.records.remove(&id).is_some())
    }
}
