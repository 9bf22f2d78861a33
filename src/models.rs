// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Expense,
    Income,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Expense => "expense",
            TransactionType::Income => "income",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "expense" => Ok(TransactionType::Expense),
            "income" => Ok(TransactionType::Income),
            other => Err(format!(
                "Invalid type '{}', expected 'expense' or 'income'",
                other
            )),
        }
    }
}

/// One ledger entry as handed out by a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub amount: Decimal,
    pub category: String,
    pub date: NaiveDate,
    pub description: Option<String>,
    pub r#type: TransactionType,
}

impl Transaction {
    pub fn is_expense(&self) -> bool {
        self.r#type == TransactionType::Expense
    }

    pub fn is_income(&self) -> bool {
        self.r#type == TransactionType::Income
    }
}

/// A validated candidate, everything but the store-assigned id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTransaction {
    pub amount: Decimal,
    pub category: String,
    pub date: NaiveDate,
    pub description: Option<String>,
    pub r#type: TransactionType,
}

impl NewTransaction {
    pub fn with_id(self, id: i64) -> Transaction {
        Transaction {
            id,
            amount: self.amount,
            category: self.category,
            date: self.date,
            description: self.description,
            r#type: self.r#type,
        }
    }
}

/// Unvalidated input, shaped like the JSON body of a create/replace request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTransaction {
    pub amount: String,
    pub category: String,
    pub date: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    pub name: &'static str,
    pub color: &'static str,      // chart color
    pub background: &'static str, // icon background
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryStyle {
    pub color: &'static str,
    pub background: &'static str,
    pub icon: &'static str,
}
