// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Ledger storage backends.
//!
//! Both backends hand out owned snapshots on reads, so an aggregation over
//! `list()` never observes a later write.

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::error::LedgerResult;
use crate::models::{NewTransaction, Transaction};

/// Read/write access to the raw transaction records.
///
/// Absence is reported through `Option`/`bool`; `Err` is reserved for the
/// backend itself failing.
pub trait LedgerStore {
    /// All transactions, ordered by id.
    fn list(&self) -> LedgerResult<Vec<Transaction>>;

    fn get(&self, id: i64) -> LedgerResult<Option<Transaction>>;

    /// Stores `candidate` under a fresh id. Ids are never reused.
    fn create(&mut self, candidate: NewTransaction) -> LedgerResult<Transaction>;

    /// Replaces every field of transaction `id`; `None` if it does not exist.
    fn replace(&mut self, id: i64, candidate: NewTransaction) -> LedgerResult<Option<Transaction>>;

    /// Returns `true` if the transaction existed and was removed.
    fn delete(&mut self, id: i64) -> LedgerResult<bool>;
}
