// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::Ctx;
use crate::export::from_csv;
use crate::ledger::Ledger;
use crate::store::SqliteStore;
use anyhow::{Context, Result};

pub fn handle(ctx: &Ctx<'_>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("csv", sub)) => import_csv(ctx, sub).map(|_| ()),
        _ => Ok(()),
    }
}

/// Imports every row or none: the first rejected row rolls back the batch.
/// Returns the number of rows written.
pub fn import_csv(ctx: &Ctx<'_>, sub: &clap::ArgMatches) -> Result<usize> {
    let path = sub
        .get_one::<String>("path")
        .map(|p| p.trim())
        .unwrap_or_default();
    let text =
        std::fs::read_to_string(path).with_context(|| format!("Open CSV {}", path))?;
    let rows = from_csv(&text).with_context(|| format!("Parse CSV {}", path))?;

    let tx = ctx.conn.unchecked_transaction()?;
    {
        let mut ledger = Ledger::new(SqliteStore::new(&tx));
        for (i, raw) in rows.iter().enumerate() {
            // Header is line 1.
            ledger
                .add(raw)
                .with_context(|| format!("Row {} of {}", i + 2, path))?;
        }
    }
    tx.commit()?;
    tracing::info!(path, count = rows.len(), "imported transactions");
    println!("Imported {} transactions from {}", rows.len(), path);
    Ok(rows.len())
}
