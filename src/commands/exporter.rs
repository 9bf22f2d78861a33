// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};

use crate::commands::Ctx;
use crate::export::{dashboard_filename, ledger_filename, to_csv};
use crate::interval::Interval;
use crate::ledger::{search, sort_by_date, SortOrder};
use crate::models::Transaction;

pub fn handle(ctx: &Ctx<'_>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("csv", sub)) => export_csv(ctx, sub),
        _ => Ok(()),
    }
}

/// Builds the file name and contents without touching the filesystem.
///
/// With `--month` this is the dashboard export: that month only, in ledger
/// order unless `--order` is given. Without it, the whole ledger (optionally
/// searched) sorted by date, newest first by default.
pub fn render(ctx: &Ctx<'_>, sub: &clap::ArgMatches) -> Result<(String, String)> {
    let all = ctx.snapshot()?;
    let order = sub
        .get_one::<String>("order")
        .map(|s| s.parse::<SortOrder>().map_err(|e| anyhow!(e)))
        .transpose()?;
    let term = sub.get_one::<String>("search").map(String::as_str).unwrap_or("");

    let month = ctx.month(sub)?;
    let (name, scoped): (String, Vec<Transaction>) = match month {
        Some(month) => {
            let iv = Interval::month_of(month);
            let txs = all.into_iter().filter(|t| iv.contains(t.date)).collect();
            (dashboard_filename(month), txs)
        }
        None => (ledger_filename(ctx.today), all),
    };
    let mut rows = search(&scoped, term);
    let order = match month {
        Some(_) => order,
        None => Some(order.unwrap_or_default()),
    };
    if let Some(o) = order {
        sort_by_date(&mut rows, o);
    }
    Ok((name, to_csv(rows)))
}

fn export_csv(ctx: &Ctx<'_>, sub: &clap::ArgMatches) -> Result<()> {
    let (default_name, body) = render(ctx, sub)?;
    let out = sub
        .get_one::<String>("out")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(default_name));
    std::fs::write(&out, body).with_context(|| format!("Write {}", out.display()))?;
    tracing::info!(path = %out.display(), "exported transactions");
    println!("Exported transactions to {}", out.display());
    Ok(())
}
