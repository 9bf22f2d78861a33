// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Derived metrics over a ledger snapshot.
//!
//! Every function here is a pure computation over `&[Transaction]`: nothing
//! is cached, nothing fails. Empty input, unknown categories and zero
//! denominators all produce zero or empty results.
//!
//! Percentages are whole numbers rounded half toward positive infinity
//! (see [`crate::utils::round_half_up`]).

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::categories;
use crate::interval::{first_of_month, last_of_month, Granularity, Interval};
use crate::models::{CategoryStyle, Transaction, TransactionType};
use crate::utils::percent_of;

pub const DAY_LABEL_FORMAT: &str = "%b %-d";
pub const MONTH_LABEL_FORMAT: &str = "%b %y";

/// Utilization above this is flagged as critical.
pub const CRITICAL_UTILIZATION: i64 = 90;
/// Utilization above this is flagged as a warning.
pub const WARNING_UTILIZATION: i64 = 70;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Decimal,
    pub percentage: i64,
    pub style: CategoryStyle,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bucket {
    pub label: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub expense_total: Decimal,
    pub income_total: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Delta {
    pub current: Decimal,
    pub prior: Decimal,
    /// 0 also means "no prior baseline".
    pub percent_change: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UtilizationLevel {
    OnTrack,
    Warning,
    Critical,
}

impl UtilizationLevel {
    pub fn from_utilization(percent: i64) -> Self {
        if percent > CRITICAL_UTILIZATION {
            UtilizationLevel::Critical
        } else if percent > WARNING_UTILIZATION {
            UtilizationLevel::Warning
        } else {
            UtilizationLevel::OnTrack
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UtilizationLevel::OnTrack => "on track",
            UtilizationLevel::Warning => "warning",
            UtilizationLevel::Critical => "critical",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BudgetSummary {
    pub spent: Decimal,
    pub income: Decimal,
    pub remaining_budget: Decimal,
    pub budget_utilization: i64,
    pub savings: Decimal,
    pub savings_rate: i64,
    pub level: UtilizationLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthlySummary {
    pub current: Interval,
    pub prior: Interval,
    pub spent: Delta,
    pub income: Delta,
    pub budget: BudgetSummary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopCategory {
    pub category: String,
    pub total: Decimal,
    pub share: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Overview {
    pub interval: Interval,
    pub total_spent: Decimal,
    pub top_category: Option<TopCategory>,
    pub average_monthly_spend: Decimal,
}

pub fn in_interval<'a>(
    transactions: &'a [Transaction],
    interval: &'a Interval,
) -> impl Iterator<Item = &'a Transaction> + 'a {
    transactions.iter().filter(move |t| interval.contains(t.date))
}

pub fn total(transactions: &[Transaction], interval: &Interval, kind: TransactionType) -> Decimal {
    in_interval(transactions, interval)
        .filter(|t| t.r#type == kind)
        .map(|t| t.amount)
        .sum()
}

/// Expense totals per category, largest first, zero totals dropped.
///
/// Ties are broken by registry order, then by name, so unregistered
/// categories come after registered ones with the same total.
pub fn by_category(transactions: &[Transaction], interval: &Interval) -> Vec<CategoryTotal> {
    let mut totals: Vec<(&str, Decimal)> = categories::all_names()
        .map(|name| (name, Decimal::ZERO))
        .collect();
    let mut slots: HashMap<&str, usize> = totals
        .iter()
        .enumerate()
        .map(|(i, (name, _))| (*name, i))
        .collect();

    for t in in_interval(transactions, interval).filter(|t| t.is_expense()) {
        let slot = *slots.entry(t.category.as_str()).or_insert_with(|| {
            totals.push((t.category.as_str(), Decimal::ZERO));
            totals.len() - 1
        });
        totals[slot].1 += t.amount;
    }

    let grand_total: Decimal = totals.iter().map(|(_, v)| *v).sum();

    let mut out: Vec<CategoryTotal> = totals
        .into_iter()
        .filter(|(_, v)| !v.is_zero())
        .map(|(name, total)| CategoryTotal {
            category: name.to_string(),
            total,
            percentage: percent_of(total, grand_total),
            style: categories::lookup(name),
        })
        .collect();
    out.sort_by(|a, b| {
        b.total
            .cmp(&a.total)
            .then_with(|| tie_key(&a.category).cmp(&tie_key(&b.category)))
    });
    out
}

fn tie_key(name: &str) -> (usize, &str) {
    (categories::position(name).unwrap_or(usize::MAX), name)
}

/// A dense series: one bucket per day or per first-of-month in `interval`,
/// emitted even when nothing happened in it.
///
/// Month buckets cover their whole calendar month.
pub fn series(
    transactions: &[Transaction],
    interval: &Interval,
    granularity: Granularity,
) -> Vec<Bucket> {
    let mut buckets: Vec<Bucket> = match granularity {
        Granularity::Day => interval
            .days()
            .into_iter()
            .map(|d| empty_bucket(d, d, DAY_LABEL_FORMAT))
            .collect(),
        Granularity::Month => interval
            .months()
            .into_iter()
            .map(|m| empty_bucket(m, last_of_month(m), MONTH_LABEL_FORMAT))
            .collect(),
    };

    let by_start: BTreeMap<NaiveDate, usize> = buckets
        .iter()
        .enumerate()
        .map(|(i, b)| (b.start, i))
        .collect();

    for t in transactions {
        let Some((_, &i)) = by_start.range(..=t.date).next_back() else {
            continue;
        };
        let bucket = &mut buckets[i];
        if t.date > bucket.end {
            continue;
        }
        match t.r#type {
            TransactionType::Expense => bucket.expense_total += t.amount,
            TransactionType::Income => bucket.income_total += t.amount,
        }
    }
    buckets
}

fn empty_bucket(start: NaiveDate, end: NaiveDate, label_format: &str) -> Bucket {
    Bucket {
        label: start.format(label_format).to_string(),
        start,
        end,
        expense_total: Decimal::ZERO,
        income_total: Decimal::ZERO,
    }
}

/// Period-over-period change; exactly 0 whenever `prior` is not positive.
pub fn delta(current: Decimal, prior: Decimal) -> Delta {
    Delta {
        current,
        prior,
        percent_change: percent_of(current - prior, prior),
    }
}

/// Income left after spending, never below zero.
pub fn remaining_budget(income: Decimal, spent: Decimal) -> Decimal {
    (income - spent).max(Decimal::ZERO)
}

/// Share of income spent. Not clamped: overspending reports above 100.
pub fn budget_utilization(income: Decimal, spent: Decimal) -> i64 {
    percent_of(spent, income)
}

/// Amount saved this period, never below zero.
///
/// Same formula as [`remaining_budget`] today; the two are reported
/// separately.
pub fn savings(income: Decimal, spent: Decimal) -> Decimal {
    (income - spent).max(Decimal::ZERO)
}

pub fn savings_rate(income: Decimal, spent: Decimal) -> i64 {
    percent_of(savings(income, spent), income)
}

pub fn budget_summary(income: Decimal, spent: Decimal) -> BudgetSummary {
    let utilization = budget_utilization(income, spent);
    BudgetSummary {
        spent,
        income,
        remaining_budget: remaining_budget(income, spent),
        budget_utilization: utilization,
        savings: savings(income, spent),
        savings_rate: savings_rate(income, spent),
        level: UtilizationLevel::from_utilization(utilization),
    }
}

/// Dashboard cards for `current` compared with `prior`.
pub fn summarize(
    transactions: &[Transaction],
    current: &Interval,
    prior: &Interval,
) -> MonthlySummary {
    let spent = total(transactions, current, TransactionType::Expense);
    let income = total(transactions, current, TransactionType::Income);
    let prior_spent = total(transactions, prior, TransactionType::Expense);
    let prior_income = total(transactions, prior, TransactionType::Income);

    MonthlySummary {
        current: *current,
        prior: *prior,
        spent: delta(spent, prior_spent),
        income: delta(income, prior_income),
        budget: budget_summary(income, spent),
    }
}

/// Headline spending figures for the analytics view.
///
/// The monthly average only counts months that had any spending.
pub fn overview(transactions: &[Transaction], interval: &Interval) -> Overview {
    let mut per_month: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    for t in in_interval(transactions, interval).filter(|t| t.is_expense()) {
        *per_month.entry(first_of_month(t.date)).or_insert(Decimal::ZERO) += t.amount;
    }
    let total_spent: Decimal = per_month.values().copied().sum();
    let active_months = per_month.values().filter(|v| !v.is_zero()).count();
    let average_monthly_spend = if active_months == 0 {
        Decimal::ZERO
    } else {
        (total_spent / Decimal::from(active_months)).round_dp(2)
    };

    let top_category = by_category(transactions, interval)
        .into_iter()
        .next()
        .map(|top| TopCategory {
            share: percent_of(top.total, total_spent),
            category: top.category,
            total: top.total,
        });

    Overview {
        interval: *interval,
        total_spent,
        top_category,
        average_monthly_spend,
    }
}
