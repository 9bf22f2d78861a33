// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Persistent key/value settings stored next to the ledger.

use anyhow::{anyhow, Result};
use rusqlite::{params, Connection, OptionalExtension};

use crate::interval::RangeSelector;

pub const CURRENCY_KEY: &str = "currency";
pub const DEFAULT_RANGE_KEY: &str = "default_range";
pub const KEYS: [&str; 2] = [CURRENCY_KEY, DEFAULT_RANGE_KEY];

const DEFAULT_CURRENCY: &str = "USD";
const DEFAULT_RANGE: RangeSelector = RangeSelector::ThisMonth;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub currency: String,
    pub default_range: RangeSelector,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.to_string(),
            default_range: DEFAULT_RANGE,
        }
    }
}

impl Settings {
    /// Stored settings with defaults filled in for anything unset.
    pub fn load(conn: &Connection) -> Result<Self> {
        let mut s = Settings::default();
        if let Some(ccy) = get(conn, CURRENCY_KEY)? {
            s.currency = ccy;
        }
        if let Some(range) = get(conn, DEFAULT_RANGE_KEY)? {
            s.default_range = range.parse().map_err(|e: String| anyhow!(e))?;
        }
        Ok(s)
    }
}

pub fn get(conn: &Connection, key: &str) -> Result<Option<String>> {
    let v: Option<String> = conn
        .query_row("SELECT value FROM settings WHERE key=?1", params![key], |r| {
            r.get(0)
        })
        .optional()?;
    Ok(v)
}

/// Validates and stores a setting, returning the normalized value.
pub fn set(conn: &Connection, key: &str, value: &str) -> Result<String> {
    let value = normalize(key, value)?;
    conn.execute(
        "INSERT INTO settings(key, value) VALUES(?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value=excluded.value",
        params![key, value],
    )?;
    tracing::info!(key, value = %value, "updated setting");
    Ok(value)
}

fn normalize(key: &str, value: &str) -> Result<String> {
    let value = value.trim();
    match key {
        CURRENCY_KEY => {
            if value.len() != 3 || !value.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(anyhow!(
                    "Invalid currency '{}', expected a 3-letter code",
                    value
                ));
            }
            Ok(value.to_ascii_uppercase())
        }
        DEFAULT_RANGE_KEY => {
            let sel: RangeSelector = value.parse().map_err(|e: String| anyhow!(e))?;
            Ok(sel.to_string())
        }
        other => Err(anyhow!(
            "Unknown setting '{}', expected one of {}",
            other,
            KEYS.join(", ")
        )),
    }
}
