// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::categories;
use crate::commands::Ctx;
use crate::interval::Interval;
use crate::ledger::{search, sort_by_date, SortOrder};
use crate::models::{RawTransaction, Transaction};
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::{anyhow, Result};
use serde::Serialize;

pub fn handle(ctx: &Ctx<'_>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(ctx, sub)?,
        Some(("list", sub)) => list(ctx, sub)?,
        Some(("show", sub)) => show(ctx, sub)?,
        Some(("edit", sub)) => edit(ctx, sub)?,
        Some(("rm", sub)) => remove(ctx, sub)?,
        _ => {}
    }
    Ok(())
}

/// Collects the form fields as typed; validation happens in the ledger.
pub fn raw_from_args(sub: &clap::ArgMatches) -> RawTransaction {
    let field = |name: &str| sub.get_one::<String>(name).cloned().unwrap_or_default();
    RawTransaction {
        amount: field("amount"),
        category: field("category"),
        date: field("date"),
        description: sub.get_one::<String>("description").cloned(),
        kind: field("type"),
    }
}

fn add(ctx: &Ctx<'_>, sub: &clap::ArgMatches) -> Result<()> {
    let raw = raw_from_args(sub);
    let tx = ctx.ledger().add(&raw)?;
    if !categories::is_known(&tx.category) {
        println!("Note: '{}' is not a known category", tx.category);
    }
    println!(
        "Recorded {} #{}: {} on {} ({})",
        tx.r#type,
        tx.id,
        ctx.money(&tx.amount),
        tx.date,
        tx.category
    );
    Ok(())
}

fn show(ctx: &Ctx<'_>, sub: &clap::ArgMatches) -> Result<()> {
    let id = id_arg(sub)?;
    let tx = ctx.ledger().find(id)?;
    let row = TransactionRow::new(&tx);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &row)? {
        println!("{}", render_rows(&[row]));
    }
    Ok(())
}

fn edit(ctx: &Ctx<'_>, sub: &clap::ArgMatches) -> Result<()> {
    let id = id_arg(sub)?;
    let raw = raw_from_args(sub);
    let tx = ctx.ledger().update(id, &raw)?;
    println!("Updated #{}: {} on {} ({})", tx.id, ctx.money(&tx.amount), tx.date, tx.category);
    Ok(())
}

fn remove(ctx: &Ctx<'_>, sub: &clap::ArgMatches) -> Result<()> {
    let id = ctx.ledger().remove(id_arg(sub)?)?;
    println!("Deleted transaction #{}", id);
    Ok(())
}

fn id_arg(sub: &clap::ArgMatches) -> Result<&str> {
    sub.get_one::<String>("id")
        .map(String::as_str)
        .ok_or_else(|| anyhow!("missing transaction id"))
}

fn list(ctx: &Ctx<'_>, sub: &clap::ArgMatches) -> Result<()> {
    let data = query_rows(ctx, sub)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        if data.is_empty() {
            let msg = if sub.get_one::<String>("search").is_some() {
                "No transactions match your search."
            } else {
                "No transactions found. Add some expenses to get started."
            };
            println!("{}", msg);
        } else {
            println!("{}", render_rows(&data));
        }
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct TransactionRow {
    pub id: i64,
    pub date: String,
    pub amount: String,
    pub category: String,
    pub description: String,
    pub r#type: String,
    pub icon: &'static str,
}

impl TransactionRow {
    pub fn new(t: &Transaction) -> Self {
        Self {
            id: t.id,
            date: t.date.to_string(),
            amount: t.amount.to_string(),
            category: t.category.clone(),
            description: t.description.clone().unwrap_or_default(),
            r#type: t.r#type.to_string(),
            icon: categories::lookup(&t.category).icon,
        }
    }

    /// Income shows as `+`, expenses as `-`.
    pub fn signed_amount(&self) -> String {
        if self.r#type == "income" {
            format!("+{}", self.amount)
        } else {
            format!("-{}", self.amount)
        }
    }
}

fn render_rows(rows: &[TransactionRow]) -> comfy_table::Table {
    let data = rows
        .iter()
        .map(|r| {
            vec![
                r.id.to_string(),
                r.date.clone(),
                r.description.clone(),
                r.category.clone(),
                r.icon.to_string(),
                r.signed_amount(),
            ]
        })
        .collect();
    pretty_table(&["ID", "Date", "Description", "Category", "Icon", "Amount"], data)
}

/// The ledger view: optional month scope, search, date order, limit.
pub fn query_rows(ctx: &Ctx<'_>, sub: &clap::ArgMatches) -> Result<Vec<TransactionRow>> {
    let all = ctx.snapshot()?;
    let scoped: Vec<Transaction> = match ctx.month(sub)? {
        Some(month) => {
            let iv = Interval::month_of(month);
            all.into_iter().filter(|t| iv.contains(t.date)).collect()
        }
        None => all,
    };
    let term = sub.get_one::<String>("search").map(String::as_str).unwrap_or("");
    let mut hits = search(&scoped, term);
    let order = match sub.get_one::<String>("order") {
        Some(s) => s.parse::<SortOrder>().map_err(|e| anyhow!(e))?,
        None => SortOrder::default(),
    };
    sort_by_date(&mut hits, order);
    if let Some(limit) = sub.get_one::<usize>("limit") {
        hits.truncate(*limit);
    }
    tracing::debug!(count = hits.len(), "listing transactions");
    Ok(hits.into_iter().map(TransactionRow::new).collect())
}
