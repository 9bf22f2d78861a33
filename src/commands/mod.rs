// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod categories;
pub mod exporter;
pub mod importer;
pub mod reports;
pub mod seed;
pub mod settings;
pub mod transactions;

use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use rusqlite::Connection;
use rust_decimal::Decimal;

use crate::config::Settings;
use crate::interval::{self, Interval, RangeSelector};
use crate::ledger::Ledger;
use crate::models::Transaction;
use crate::store::SqliteStore;
use crate::utils::{fmt_money, parse_date, parse_month};

/// What every handler needs: the open database, the reference date and the
/// stored settings.
#[derive(Debug)]
pub struct Ctx<'c> {
    pub conn: &'c Connection,
    pub today: NaiveDate,
    pub settings: Settings,
}

impl<'c> Ctx<'c> {
    pub fn new(conn: &'c Connection, today: NaiveDate) -> Result<Self> {
        Ok(Self {
            conn,
            today,
            settings: Settings::load(conn)?,
        })
    }

    /// Uses `--as-of` when given, otherwise the local calendar date.
    pub fn from_matches(conn: &'c Connection, m: &clap::ArgMatches) -> Result<Self> {
        let today = match m.get_one::<String>("as-of") {
            Some(s) => parse_date(s)?,
            None => chrono::Local::now().date_naive(),
        };
        Self::new(conn, today)
    }

    pub fn ledger(&self) -> Ledger<SqliteStore<'c>> {
        Ledger::new(SqliteStore::new(self.conn))
    }

    pub fn snapshot(&self) -> Result<Vec<Transaction>> {
        Ok(self.ledger().all()?)
    }

    pub fn money(&self, d: &Decimal) -> String {
        fmt_money(d, &self.settings.currency)
    }

    /// `--month` if present, else `--range`, else the configured default range.
    pub fn interval(&self, sub: &clap::ArgMatches) -> Result<Interval> {
        if let Some(month) = self.month(sub)? {
            return Ok(Interval::month_of(month));
        }
        Ok(interval::resolve(self.selector(sub)?, self.today))
    }

    pub fn selector(&self, sub: &clap::ArgMatches) -> Result<RangeSelector> {
        match sub.try_get_one::<String>("range").ok().flatten() {
            Some(s) => s.parse().map_err(|e: String| anyhow!(e)),
            None => Ok(self.settings.default_range),
        }
    }

    pub fn month(&self, sub: &clap::ArgMatches) -> Result<Option<NaiveDate>> {
        sub.try_get_one::<String>("month")
            .ok()
            .flatten()
            .map(|s| parse_month(s))
            .transpose()
    }
}
