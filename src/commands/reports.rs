// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::analytics::{self, Bucket, CategoryTotal, MonthlySummary, Overview};
use crate::commands::Ctx;
use crate::interval::{first_of_month, Interval};
use crate::utils::{fmt_signed_percent, maybe_print_json, pretty_table};
use anyhow::{bail, Result};

pub fn handle(ctx: &Ctx<'_>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => summary(ctx, sub)?,
        Some(("categories", sub)) => categories(ctx, sub)?,
        Some(("series", sub)) => series(ctx, sub)?,
        Some(("overview", sub)) => overview(ctx, sub)?,
        _ => {}
    }
    Ok(())
}

/// The dashboard month: `--month`, or the month of the reference date.
/// Months after the reference date's month are refused.
pub fn summary_data(ctx: &Ctx<'_>, sub: &clap::ArgMatches) -> Result<MonthlySummary> {
    let month = ctx.month(sub)?.unwrap_or_else(|| first_of_month(ctx.today));
    if month > first_of_month(ctx.today) {
        bail!("Cannot report on {}, it is after {}", month.format("%Y-%m"), ctx.today);
    }
    let current = Interval::month_of(month);
    let prior = current.previous_month();
    let txs = ctx.snapshot()?;
    Ok(analytics::summarize(&txs, &current, &prior))
}

fn summary(ctx: &Ctx<'_>, sub: &clap::ArgMatches) -> Result<()> {
    let s = summary_data(ctx, sub)?;
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &s)? {
        return Ok(());
    }
    let change = |p: i64| {
        if p == 0 {
            "no change".to_string()
        } else {
            format!("{} vs last month", fmt_signed_percent(p))
        }
    };
    let rows = vec![
        vec![
            "Total spent".to_string(),
            ctx.money(&s.spent.current),
            change(s.spent.percent_change),
        ],
        vec![
            "Total income".to_string(),
            ctx.money(&s.income.current),
            change(s.income.percent_change),
        ],
        vec![
            "Remaining budget".to_string(),
            ctx.money(&s.budget.remaining_budget),
            format!("{}% used, {}", s.budget.budget_utilization, s.budget.level.label()),
        ],
        vec![
            "Monthly savings".to_string(),
            ctx.money(&s.budget.savings),
            format!("{}% of income", s.budget.savings_rate),
        ],
    ];
    println!("{}", s.current.start.format("%B %Y"));
    println!("{}", pretty_table(&["Metric", "Amount", "Change"], rows));
    Ok(())
}

pub fn category_data(ctx: &Ctx<'_>, sub: &clap::ArgMatches) -> Result<Vec<CategoryTotal>> {
    let interval = ctx.interval(sub)?;
    let txs = ctx.snapshot()?;
    Ok(analytics::by_category(&txs, &interval))
}

fn categories(ctx: &Ctx<'_>, sub: &clap::ArgMatches) -> Result<()> {
    let data = category_data(ctx, sub)?;
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        return Ok(());
    }
    if data.is_empty() {
        println!("No expenses in this period.");
        return Ok(());
    }
    let rows = data
        .iter()
        .map(|c| {
            vec![
                c.category.clone(),
                ctx.money(&c.total),
                format!("{}%", c.percentage),
                c.style.color.to_string(),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["Category", "Spent", "Share", "Color"], rows));
    Ok(())
}

pub fn series_data(ctx: &Ctx<'_>, sub: &clap::ArgMatches) -> Result<Vec<Bucket>> {
    let interval = ctx.interval(sub)?;
    let txs = ctx.snapshot()?;
    Ok(analytics::series(&txs, &interval, interval.granularity))
}

fn series(ctx: &Ctx<'_>, sub: &clap::ArgMatches) -> Result<()> {
    let data = series_data(ctx, sub)?;
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        return Ok(());
    }
    let rows = data
        .iter()
        .map(|b| {
            vec![
                b.label.clone(),
                format!("{:.2}", b.expense_total),
                format!("{:.2}", b.income_total),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["Period", "Expenses", "Income"], rows));
    Ok(())
}

pub fn overview_data(ctx: &Ctx<'_>, sub: &clap::ArgMatches) -> Result<Overview> {
    let interval = ctx.interval(sub)?;
    let txs = ctx.snapshot()?;
    Ok(analytics::overview(&txs, &interval))
}

fn overview(ctx: &Ctx<'_>, sub: &clap::ArgMatches) -> Result<()> {
    let o = overview_data(ctx, sub)?;
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &o)? {
        return Ok(());
    }
    let top = match &o.top_category {
        Some(t) => format!("{} {} ({}% of total)", t.category, ctx.money(&t.total), t.share),
        None => "No data".to_string(),
    };
    let rows = vec![
        vec![
            "Period".to_string(),
            format!(
                "{} - {}",
                o.interval.start.format("%b %-d, %Y"),
                o.interval.end.format("%b %-d, %Y")
            ),
        ],
        vec!["Total expenses".to_string(), ctx.money(&o.total_spent)],
        vec!["Top category".to_string(), top],
        vec![
            "Average monthly".to_string(),
            ctx.money(&o.average_monthly_spend),
        ],
    ];
    println!("{}", pretty_table(&["Metric", "Value"], rows));
    Ok(())
}
