// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use ledgerlens::db;
use ledgerlens::error::LedgerError;
use ledgerlens::models::{NewTransaction, TransactionType};
use ledgerlens::store::{LedgerStore, MemoryStore, SqliteStore};
use rusqlite::params;

fn candidate(amount: &str, category: &str, day: u32) -> NewTransaction {
    NewTransaction {
        amount: amount.parse().unwrap(),
        category: category.to_string(),
        date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
        description: Some("note, with \"quotes\"".to_string()),
        r#type: TransactionType::Expense,
    }
}

fn exercise<S: LedgerStore>(store: &mut S) {
    let a = store.create(candidate("125.50", "Food & Dining", 5)).unwrap();
    let b = store.create(candidate("9", "Pets", 6)).unwrap();
    assert!(b.id > a.id);

    let listed = store.list().unwrap();
    assert_eq!(listed, vec![a.clone(), b.clone()]);
    assert_eq!(store.get(a.id).unwrap().unwrap().amount.to_string(), "125.50");
    assert_eq!(store.get(999).unwrap(), None);

    let replaced = store
        .replace(a.id, candidate("1", "Travel", 7))
        .unwrap()
        .unwrap();
    assert_eq!(replaced.id, a.id);
    assert_eq!(store.get(a.id).unwrap(), Some(replaced));
    assert_eq!(store.replace(999, candidate("1", "Travel", 7)).unwrap(), None);

    assert!(store.delete(b.id).unwrap());
    assert!(!store.delete(b.id).unwrap());
    let c = store.create(candidate("3", "Health", 8)).unwrap();
    assert!(c.id > b.id);
    assert_eq!(store.list().unwrap().len(), 2);
}

#[test]
fn memory_store_contract() {
    let mut store = MemoryStore::new();
    exercise(&mut store);
}

#[test]
fn sqlite_store_contract() {
    let conn = db::open_in_memory().unwrap();
    let mut store = SqliteStore::new(&conn);
    exercise(&mut store);
}

#[test]
fn sqlite_store_reports_corrupt_rows() {
    let conn = db::open_in_memory().unwrap();
    conn.execute(
        "INSERT INTO transactions(date, amount, category, description, type) VALUES (?1,?2,?3,NULL,?4)",
        params!["2024-01-01", "twelve", "Shopping", "expense"],
    )
    .unwrap();
    let store = SqliteStore::new(&conn);
    let err = store.list().unwrap_err();
    assert!(matches!(err, LedgerError::Corrupt(_)));
    assert_eq!(err.status_code(), 500);
    assert!(!err.is_client_error());
    assert!(!err.public_message().contains("twelve"));

    let count: i64 = store
        .connection()
        .query_row("SELECT COUNT(*) FROM transactions", [], |r| r.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn sqlite_store_rejects_out_of_range_amounts() {
    let conn = db::open_in_memory().unwrap();
    conn.execute(
        "INSERT INTO transactions(date, amount, category, description, type) VALUES (?1,?2,?3,NULL,?4)",
        params!["2024-01-01", "1000000000000000000000000000", "Shopping", "expense"],
    )
    .unwrap();
    let store = SqliteStore::new(&conn);
    assert!(matches!(store.get(1), Err(LedgerError::Corrupt(_))));
}
