// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{NewTransaction, RawTransaction, TransactionType};

/// Amounts must stay below this many whole units.
pub const MAX_AMOUNT_UNITS: i64 = 1_000_000_000_000;
/// Most decimal places an amount may carry.
pub const MAX_AMOUNT_SCALE: u32 = 2;

const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];

/// Checks every field of `raw` and produces a candidate the stores accept.
///
/// Fields are checked in form order (amount, category, date, type) and the
/// first failure is reported.
pub fn validate(raw: &RawTransaction) -> LedgerResult<NewTransaction> {
    let amount = validate_amount(&raw.amount)?;
    let category = validate_category(&raw.category)?;
    let date = validate_date(&raw.date)?;
    let r#type = validate_type(&raw.kind)?;
    let description = raw
        .description
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    Ok(NewTransaction {
        amount,
        category,
        date,
        description,
        r#type,
    })
}

pub fn validate_amount(s: &str) -> LedgerResult<Decimal> {
    let s = s.trim();
    if s.is_empty() {
        return Err(LedgerError::validation("amount", "Amount is required"));
    }
    let amount = s.parse::<Decimal>().map_err(|_| {
        LedgerError::validation("amount", format!("Amount '{}' is not a number", s))
    })?;
    if amount <= Decimal::ZERO {
        return Err(LedgerError::validation(
            "amount",
            "Amount must be a positive number",
        ));
    }
    if amount >= Decimal::from(MAX_AMOUNT_UNITS) {
        return Err(LedgerError::validation(
            "amount",
            format!("Amount must be less than {}", MAX_AMOUNT_UNITS),
        ));
    }
    if amount.normalize().scale() > MAX_AMOUNT_SCALE {
        return Err(LedgerError::validation(
            "amount",
            format!("Amount can have at most {} decimal places", MAX_AMOUNT_SCALE),
        ));
    }
    Ok(amount)
}

pub fn validate_category(s: &str) -> LedgerResult<String> {
    let s = s.trim();
    if s.is_empty() {
        return Err(LedgerError::validation("category", "Category is required"));
    }
    Ok(s.to_string())
}

/// Accepts a plain date or a date-time; only the calendar date as written is
/// kept, no timezone shifting.
pub fn validate_date(s: &str) -> LedgerResult<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return Err(LedgerError::validation("date", "Date is required"));
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(d);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.naive_local().date());
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|dt| dt.date())
        .ok_or_else(|| {
            LedgerError::validation("date", format!("Invalid date '{}', expected YYYY-MM-DD", s))
        })
}

pub fn validate_type(s: &str) -> LedgerResult<TransactionType> {
    if s.trim().is_empty() {
        return Err(LedgerError::validation("type", "Type is required"));
    }
    s.parse::<TransactionType>()
        .map_err(|msg| LedgerError::validation("type", msg))
}
