// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::Days;

use crate::commands::Ctx;
use crate::models::RawTransaction;

/// (amount, category, days before today, description, type)
const SAMPLES: [(&str, &str, u64, &str, &str); 5] = [
    ("125.50", "Food & Dining", 3, "Grocery Shopping", "expense"),
    ("1200.00", "Housing", 10, "Rent Payment", "expense"),
    ("4500.00", "Work", 15, "Salary Deposit", "income"),
    ("68.35", "Food & Dining", 2, "Restaurant Dinner", "expense"),
    ("95.40", "Utilities", 5, "Electricity Bill", "expense"),
];

pub fn sample_transactions(ctx: &Ctx<'_>) -> Vec<RawTransaction> {
    SAMPLES
        .iter()
        .map(|(amount, category, ago, description, kind)| {
            let date = ctx.today.checked_sub_days(Days::new(*ago)).unwrap_or(ctx.today);
            RawTransaction {
                amount: amount.to_string(),
                category: category.to_string(),
                date: date.to_string(),
                description: Some(description.to_string()),
                kind: kind.to_string(),
            }
        })
        .collect()
}

/// Inserts the samples into an empty ledger; returns how many were added.
pub fn seed(ctx: &Ctx<'_>) -> Result<usize> {
    let mut ledger = ctx.ledger();
    if !ledger.all()?.is_empty() {
        tracing::debug!("ledger not empty, skipping seed");
        return Ok(0);
    }
    let samples = sample_transactions(ctx);
    for raw in &samples {
        ledger.add(raw)?;
    }
    Ok(samples.len())
}

pub fn handle(ctx: &Ctx<'_>) -> Result<()> {
    match seed(ctx)? {
        0 => println!("Ledger already has transactions; nothing seeded"),
        n => println!("Seeded {} sample transactions", n),
    }
    Ok(())
}
