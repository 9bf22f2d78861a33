// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{NewTransaction, Transaction, TransactionType};
use crate::store::LedgerStore;
use crate::validation::validate_amount;

const SELECT_COLUMNS: &str = "SELECT id, date, amount, category, description, type FROM transactions";

/// Ledger backed by the `transactions` table.
///
/// Amounts are stored as decimal text so nothing passes through a float.
#[derive(Debug)]
pub struct SqliteStore<'c> {
    conn: &'c Connection,
}

type RawRow = (i64, String, String, String, Option<String>, String);

impl<'c> SqliteStore<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }

    pub fn connection(&self) -> &Connection {
        self.conn
    }
}

fn read_row(r: &Row<'_>) -> rusqlite::Result<RawRow> {
    Ok((
        r.get(0)?,
        r.get(1)?,
        r.get(2)?,
        r.get(3)?,
        r.get(4)?,
        r.get(5)?,
    ))
}

fn decode((id, date, amount, category, description, kind): RawRow) -> LedgerResult<Transaction> {
    let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
        .map_err(|e| LedgerError::Corrupt(format!("transaction {}: date '{}': {}", id, date, e)))?;
    // Rows written outside the ledger get the same amount bounds as new input.
    let amount = validate_amount(&amount).map_err(|e| {
        LedgerError::Corrupt(format!("transaction {}: amount '{}': {}", id, amount, e))
    })?;
    let r#type = kind
        .parse::<TransactionType>()
        .map_err(|e| LedgerError::Corrupt(format!("transaction {}: {}", id, e)))?;
    Ok(Transaction {
        id,
        amount,
        category,
        date,
        description,
        r#type,
    })
}

impl LedgerStore for SqliteStore<'_> {
    fn list(&self) -> LedgerResult<Vec<Transaction>> {
        let mut stmt = self.conn.prepare(&format!("{} ORDER BY id", SELECT_COLUMNS))?;
        let rows = stmt.query_map([], read_row)?;
        let mut out = Vec::new();
        for row in rows {
            out.push(decode(row?)?);
        }
        Ok(out)
    }

    fn get(&self, id: i64) -> LedgerResult<Option<Transaction>> {
        let raw = self
            .conn
            .query_row(
                &format!("{} WHERE id=?1", SELECT_COLUMNS),
                params![id],
                read_row,
            )
            .optional()?;
        raw.map(decode).transpose()
    }

    fn create(&mut self, candidate: NewTransaction) -> LedgerResult<Transaction> {
        self.conn.execute(
            "INSERT INTO transactions(date, amount, category, description, type)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                candidate.date.to_string(),
                candidate.amount.to_string(),
                candidate.category,
                candidate.description,
                candidate.r#type.as_str(),
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        Ok(candidate.with_id(id))
    }

    fn replace(&mut self, id: i64, candidate: NewTransaction) -> LedgerResult<Option<Transaction>> {
        let changed = self.conn.execute(
            "UPDATE transactions SET date=?1, amount=?2, category=?3, description=?4, type=?5
             WHERE id=?6",
            params![
                candidate.date.to_string(),
                candidate.amount.to_string(),
                candidate.category,
                candidate.description,
                candidate.r#type.as_str(),
                id,
            ],
        )?;
        if changed == 0 {
            return Ok(None);
        }
        Ok(Some(candidate.with_id(id)))
    }

    fn delete(&mut self, id: i64) -> LedgerResult<bool> {
        let removed = self
            .conn
            .execute("DELETE FROM transactions WHERE id=?1", params![id])?;
        Ok(removed > 0)
    }
}
