// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! CSV exchange format: `Date,Amount,Category,Description,Type`.
//!
//! The description column is always quoted; the exporter never reorders its
//! input.

use chrono::NaiveDate;
use csv::ReaderBuilder;
use serde::Deserialize;

use crate::error::LedgerResult;
use crate::models::{RawTransaction, Transaction};

pub const CSV_HEADER: &str = "Date,Amount,Category,Description,Type";
pub const CSV_MIME: &str = "text/csv";

pub fn to_csv<'a, I>(transactions: I) -> String
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let rows: Vec<String> = transactions.into_iter().map(csv_line).collect();
    format!("{}\n{}", CSV_HEADER, rows.join("\n"))
}

fn csv_line(t: &Transaction) -> String {
    format!(
        "{},{},{},{},{}",
        t.date.format("%Y-%m-%d"),
        t.amount,
        quote_if_needed(&t.category),
        quote(t.description.as_deref().unwrap_or_default()),
        t.r#type
    )
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

fn quote_if_needed(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        quote(field)
    } else {
        field.to_string()
    }
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Amount")]
    amount: String,
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Description", default)]
    description: String,
    #[serde(rename = "Type")]
    kind: String,
}

/// Reads the exporter's format back into unvalidated records.
pub fn from_csv(text: &str) -> LedgerResult<Vec<RawTransaction>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes());
    let mut out = Vec::new();
    for row in rdr.deserialize::<CsvRow>() {
        let row = row?;
        out.push(RawTransaction {
            amount: row.amount,
            category: row.category,
            date: row.date,
            description: Some(row.description).filter(|d| !d.is_empty()),
            kind: row.kind,
        });
    }
    Ok(out)
}

/// File name for a dashboard export scoped to one month.
pub fn dashboard_filename(month: NaiveDate) -> String {
    format!("expenses-{}.csv", month.format("%Y-%m"))
}

/// File name for a ledger export taken on `date`.
pub fn ledger_filename(date: NaiveDate) -> String {
    format!("expenses-{}.csv", date.format("%Y-%m-%d"))
}
