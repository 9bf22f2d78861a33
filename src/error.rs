// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Failures at the ingestion and storage boundary.
///
/// The aggregation engine never produces these; empty ledgers, unknown
/// categories and zero denominators all have defined results instead.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("{field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },
    #[error("Invalid transaction id '{0}'")]
    InvalidId(String),
    #[error("Transaction {0} not found")]
    NotFound(i64),
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Corrupt record: {0}")]
    Corrupt(String),
}

pub type LedgerResult<T> = Result<T, LedgerError>;

impl LedgerError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        LedgerError::Validation {
            field,
            message: message.into(),
        }
    }

    /// Whether the caller caused this error (bad input or unknown id).
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            LedgerError::Validation { .. } | LedgerError::InvalidId(_) | LedgerError::NotFound(_)
        )
    }

    /// The HTTP status a thin web wrapper would answer with.
    pub fn status_code(&self) -> u16 {
        match self {
            LedgerError::Validation { .. } | LedgerError::InvalidId(_) => 400,
            LedgerError::NotFound(_) => 404,
            LedgerError::Database(_)
            | LedgerError::Csv(_)
            | LedgerError::Io(_)
            | LedgerError::Corrupt(_) => 500,
        }
    }

    /// Text that is safe to show the user; internal failures stay generic.
    pub fn public_message(&self) -> String {
        if self.is_client_error() {
            self.to_string()
        } else {
            "Unexpected failure while accessing the ledger".to_string()
        }
    }
}
