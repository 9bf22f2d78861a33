// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use ledgerlens::analytics::{self, UtilizationLevel};
use ledgerlens::categories::{self, DEFAULT_STYLE};
use ledgerlens::interval::{self, Granularity, Interval, RangeSelector};
use ledgerlens::models::{Transaction, TransactionType};
use ledgerlens::utils::{percent_of, round_half_up};
use rust_decimal::Decimal;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn tx(id: i64, amount: &str, category: &str, date: &str, kind: TransactionType) -> Transaction {
    Transaction {
        id,
        amount: dec(amount),
        category: category.to_string(),
        date: d(date),
        description: None,
        r#type: kind,
    }
}

fn expense(id: i64, amount: &str, category: &str, date: &str) -> Transaction {
    tx(id, amount, category, date, TransactionType::Expense)
}

fn income(id: i64, amount: &str, category: &str, date: &str) -> Transaction {
    tx(id, amount, category, date, TransactionType::Income)
}

fn january_ledger() -> Vec<Transaction> {
    vec![
        expense(1, "100", "Food & Dining", "2024-01-05"),
        expense(2, "50", "Food & Dining", "2024-01-10"),
        income(3, "3000", "Work", "2024-01-01"),
    ]
}

#[test]
fn january_breakdown_and_summary() {
    let txs = january_ledger();
    let jan = Interval::month_of(d("2024-01-15"));

    let cats = analytics::by_category(&txs, &jan);
    assert_eq!(cats.len(), 1);
    assert_eq!(cats[0].category, "Food & Dining");
    assert_eq!(cats[0].total, dec("150"));
    assert_eq!(cats[0].percentage, 100);
    assert_eq!(cats[0].style, categories::lookup("Food & Dining"));

    let s = analytics::summarize(&txs, &jan, &jan.previous_month());
    assert_eq!(s.spent.current, dec("150"));
    assert_eq!(s.income.current, dec("3000"));
    assert_eq!(s.budget.remaining_budget, dec("2850"));
    assert_eq!(s.budget.budget_utilization, 5);
    assert_eq!(s.budget.savings, dec("2850"));
    assert_eq!(s.budget.savings_rate, 95);
    assert_eq!(s.budget.level, UtilizationLevel::OnTrack);
    // December is empty, so there is no baseline.
    assert_eq!(s.spent.percent_change, 0);
    assert_eq!(s.prior.start, d("2023-12-01"));
    assert_eq!(s.prior.end, d("2023-12-31"));
}

#[test]
fn month_over_month_halving_is_minus_fifty() {
    let txs = vec![
        expense(1, "200", "Shopping", "2024-02-10"),
        expense(2, "100", "Shopping", "2024-03-04"),
    ];
    let march = Interval::month_of(d("2024-03-01"));
    let s = analytics::summarize(&txs, &march, &march.previous_month());
    assert_eq!(s.spent.prior, dec("200"));
    assert_eq!(s.spent.current, dec("100"));
    assert_eq!(s.spent.percent_change, -50);
}

#[test]
fn unknown_category_is_kept_with_default_style() {
    let txs = vec![expense(1, "20", "Pets", "2024-01-03")];
    let cats = analytics::by_category(&txs, &Interval::month_of(d("2024-01-01")));
    assert_eq!(cats.len(), 1);
    assert_eq!(cats[0].category, "Pets");
    assert_eq!(cats[0].total, dec("20"));
    assert_eq!(cats[0].percentage, 100);
    assert_eq!(cats[0].style, DEFAULT_STYLE);
    assert!(cats.iter().all(|c| c.category != "Other"));
}

#[test]
fn percentages_sum_within_rounding_tolerance() {
    let txs = vec![
        expense(1, "1", "Shopping", "2024-01-02"),
        expense(2, "1", "Housing", "2024-01-02"),
        expense(3, "1", "Travel", "2024-01-02"),
    ];
    let cats = analytics::by_category(&txs, &Interval::month_of(d("2024-01-01")));
    let sum: i64 = cats.iter().map(|c| c.percentage).sum();
    assert!((99..=101).contains(&sum), "sum was {}", sum);

    let txs = vec![
        expense(1, "2", "Shopping", "2024-01-02"),
        expense(2, "1", "Housing", "2024-01-02"),
        expense(3, "3.5", "Travel", "2024-01-02"),
        expense(4, "0.25", "Pets", "2024-01-02"),
    ];
    let cats = analytics::by_category(&txs, &Interval::month_of(d("2024-01-01")));
    let sum: i64 = cats.iter().map(|c| c.percentage).sum();
    assert!((99..=101).contains(&sum), "sum was {}", sum);
}

#[test]
fn empty_period_has_no_breakdown() {
    let txs = vec![
        income(1, "500", "Work", "2024-01-02"),
        expense(2, "10", "Shopping", "2023-12-31"),
    ];
    let cats = analytics::by_category(&txs, &Interval::month_of(d("2024-01-01")));
    assert!(cats.is_empty());
    assert!(analytics::by_category(&[], &Interval::month_of(d("2024-01-01"))).is_empty());
}

#[test]
fn ties_follow_registry_then_name() {
    let txs = vec![
        expense(1, "10", "Pets", "2024-01-02"),
        expense(2, "10", "Other", "2024-01-02"),
        expense(3, "10", "Shopping", "2024-01-02"),
        expense(4, "10", "Food & Dining", "2024-01-02"),
        expense(5, "10", "Garden", "2024-01-02"),
        expense(6, "30", "Travel", "2024-01-03"),
    ];
    let cats = analytics::by_category(&txs, &Interval::month_of(d("2024-01-01")));
    let names: Vec<&str> = cats.iter().map(|c| c.category.as_str()).collect();
    assert_eq!(
        names,
        ["Travel", "Food & Dining", "Shopping", "Other", "Garden", "Pets"]
    );
    assert_eq!(cats[0].percentage, 38);
    assert_eq!(cats[1].percentage, 13);
}

#[test]
fn delta_without_baseline_is_zero() {
    for x in ["0", "1", "250.75"] {
        assert_eq!(analytics::delta(dec(x), Decimal::ZERO).percent_change, 0);
    }
    assert_eq!(analytics::delta(dec("150"), dec("100")).percent_change, 50);
}

#[test]
fn rounding_goes_half_toward_positive_infinity() {
    assert_eq!(round_half_up(dec("2.5")), 3);
    assert_eq!(round_half_up(dec("-50.5")), -50);
    assert_eq!(round_half_up(dec("-0.5")), 0);
    assert_eq!(round_half_up(dec("33.3333")), 33);
    assert_eq!(analytics::delta(dec("99"), dec("200")).percent_change, -50);
    assert_eq!(percent_of(dec("1"), dec("8")), 13);
    assert_eq!(percent_of(dec("5"), Decimal::ZERO), 0);
    assert_eq!(percent_of(dec("5"), dec("-10")), 0);
}

#[test]
fn utilization_is_unclamped_but_remaining_is_not() {
    let s = analytics::budget_summary(dec("100"), dec("150"));
    assert_eq!(s.budget_utilization, 150);
    assert_eq!(s.remaining_budget, Decimal::ZERO);
    assert_eq!(s.savings, Decimal::ZERO);
    assert_eq!(s.savings_rate, 0);
    assert_eq!(s.level, UtilizationLevel::Critical);

    let s = analytics::budget_summary(Decimal::ZERO, dec("40"));
    assert_eq!(s.budget_utilization, 0);
    assert_eq!(s.savings_rate, 0);
    assert_eq!(s.remaining_budget, Decimal::ZERO);
}

#[test]
fn utilization_and_savings_rate_stay_in_range_when_not_overspent() {
    let income = dec("1000");
    for spent in ["0", "1", "333.33", "700", "999.99", "1000"] {
        let s = analytics::budget_summary(income, dec(spent));
        assert!((0..=100).contains(&s.budget_utilization));
        assert!((0..=100).contains(&s.savings_rate));
    }
}

#[test]
fn utilization_levels() {
    assert_eq!(UtilizationLevel::from_utilization(70), UtilizationLevel::OnTrack);
    assert_eq!(UtilizationLevel::from_utilization(71), UtilizationLevel::Warning);
    assert_eq!(UtilizationLevel::from_utilization(90), UtilizationLevel::Warning);
    assert_eq!(UtilizationLevel::from_utilization(91), UtilizationLevel::Critical);
}

#[test]
fn daily_series_is_dense() {
    let txs = vec![
        expense(1, "12.5", "Shopping", "2024-02-03"),
        expense(2, "7.5", "Housing", "2024-02-03"),
        income(3, "40", "Work", "2024-02-05"),
        expense(4, "99", "Shopping", "2024-01-31"),
    ];
    let iv = interval::resolve(RangeSelector::ThisMonth, d("2024-02-10"));
    let buckets = analytics::series(&txs, &iv, Granularity::Day);
    assert_eq!(buckets.len(), 10);
    assert_eq!(buckets[0].label, "Feb 1");
    assert_eq!(buckets[2].expense_total, dec("20"));
    assert_eq!(buckets[4].income_total, dec("40"));
    assert_eq!(buckets[1].expense_total, Decimal::ZERO);
    let spent: Decimal = buckets.iter().map(|b| b.expense_total).sum();
    assert_eq!(spent, dec("20"));
}

#[test]
fn monthly_series_covers_whole_months() {
    let txs = vec![
        expense(1, "10", "Shopping", "2024-02-01"),
        expense(2, "5", "Shopping", "2024-02-29"),
        expense(3, "8", "Travel", "2024-04-30"),
        expense(4, "1", "Travel", "2024-01-31"),
    ];
    let iv = interval::resolve(RangeSelector::Last3Months, d("2024-05-15"));
    let buckets = analytics::series(&txs, &iv, iv.granularity);
    let labels: Vec<&str> = buckets.iter().map(|b| b.label.as_str()).collect();
    assert_eq!(labels, ["Feb 24", "Mar 24", "Apr 24", "May 24"]);
    assert_eq!(buckets[0].expense_total, dec("15"));
    assert_eq!(buckets[0].end, d("2024-02-29"));
    assert_eq!(buckets[1].expense_total, Decimal::ZERO);
    assert_eq!(buckets[2].expense_total, dec("8"));
}

#[test]
fn series_length_matches_calendar_units_for_every_selector() {
    let cases = [
        (RangeSelector::Last7Days, "2024-03-03", 7),
        (RangeSelector::Last7Days, "2024-01-01", 7),
        (RangeSelector::ThisMonth, "2024-02-29", 29),
        (RangeSelector::ThisMonth, "2023-03-31", 31),
        (RangeSelector::ThisMonth, "2024-07-01", 1),
        (RangeSelector::Last3Months, "2024-05-15", 4),
        (RangeSelector::Last3Months, "2024-03-31", 4),
        (RangeSelector::ThisYear, "2024-03-15", 13),
        (RangeSelector::Last12Months, "2024-03-15", 13),
        (RangeSelector::Last12Months, "2024-12-31", 12),
    ];
    for (sel, reference, expected) in cases {
        let iv = interval::resolve(sel, d(reference));
        let buckets = analytics::series(&[], &iv, iv.granularity);
        assert_eq!(buckets.len(), expected, "{} at {}", sel, reference);
    }
}

#[test]
fn largest_accepted_amounts_do_not_overflow() {
    let big = "999999999999.99";
    let txs: Vec<Transaction> = (1..=50)
        .map(|i| expense(i, big, "Shopping", "2024-01-10"))
        .chain(std::iter::once(income(51, "0.01", "Work", "2024-01-02")))
        .collect();
    let jan = Interval::month_of(d("2024-01-01"));

    let cats = analytics::by_category(&txs, &jan);
    assert_eq!(cats[0].percentage, 100);

    let s = analytics::summarize(&txs, &jan, &jan.previous_month());
    assert_eq!(s.spent.current, dec(big) * Decimal::from(50));
    assert!(s.budget.budget_utilization > 100);
    assert_eq!(s.budget.level, UtilizationLevel::Critical);
    assert_eq!(s.budget.remaining_budget, Decimal::ZERO);

    let series = analytics::series(&txs, &jan, Granularity::Day);
    assert_eq!(series[9].expense_total, s.spent.current);
}

#[test]
fn huge_ratios_saturate_instead_of_wrapping() {
    assert_eq!(round_half_up(Decimal::MAX), i64::MAX);
    assert_eq!(round_half_up(Decimal::MIN), i64::MIN);
    assert_eq!(percent_of(Decimal::MAX, dec("0.01")), i64::MAX);

    let s = analytics::budget_summary(dec("0.01"), dec("1000000000000000000"));
    assert_eq!(s.budget_utilization, i64::MAX);
    assert_eq!(s.level, UtilizationLevel::Critical);
}

#[test]
fn overview_reports_top_category_and_active_month_average() {
    let txs = vec![
        expense(1, "100", "Housing", "2024-01-05"),
        expense(2, "50", "Shopping", "2024-01-10"),
        expense(3, "30", "Housing", "2024-03-02"),
        income(4, "3000", "Work", "2024-02-01"),
    ];
    let iv = interval::resolve(RangeSelector::ThisYear, d("2024-03-20"));
    let o = analytics::overview(&txs, &iv);
    assert_eq!(o.total_spent, dec("180"));
    assert_eq!(o.average_monthly_spend, dec("90"));
    let top = o.top_category.unwrap();
    assert_eq!(top.category, "Housing");
    assert_eq!(top.total, dec("130"));
    assert_eq!(top.share, 72);

    let empty = analytics::overview(&[], &iv);
    assert_eq!(empty.total_spent, Decimal::ZERO);
    assert_eq!(empty.average_monthly_spend, Decimal::ZERO);
    assert!(empty.top_category.is_none());
}
