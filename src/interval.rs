// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Range selectors and the concrete date intervals they resolve to.
//!
//! Day-granularity ranges are computed with exact day subtraction.
//! Month-granularity ranges subtract a fixed day count from the reference
//! date and then snap to the first of that month, so `last-3-months` spans
//! three or four calendar months depending on where the reference date falls.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Day,
    Month,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RangeSelector {
    Last7Days,
    ThisMonth,
    Last3Months,
    ThisYear,
    Last12Months,
}

impl RangeSelector {
    pub const ALL: [RangeSelector; 5] = [
        RangeSelector::Last7Days,
        RangeSelector::ThisMonth,
        RangeSelector::Last3Months,
        RangeSelector::ThisYear,
        RangeSelector::Last12Months,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RangeSelector::Last7Days => "last-7-days",
            RangeSelector::ThisMonth => "this-month",
            RangeSelector::Last3Months => "last-3-months",
            RangeSelector::ThisYear => "this-year",
            RangeSelector::Last12Months => "last-12-months",
        }
    }

    pub fn granularity(&self) -> Granularity {
        match self {
            RangeSelector::Last7Days | RangeSelector::ThisMonth => Granularity::Day,
            RangeSelector::Last3Months | RangeSelector::ThisYear | RangeSelector::Last12Months => {
                Granularity::Month
            }
        }
    }
}

impl fmt::Display for RangeSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RangeSelector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        RangeSelector::ALL
            .into_iter()
            .find(|sel| sel.as_str() == wanted)
            .ok_or_else(|| {
                let names: Vec<&str> = RangeSelector::ALL.iter().map(|s| s.as_str()).collect();
                format!("Unknown range '{}', expected one of {}", s, names.join(", "))
            })
    }
}

/// Inclusive calendar range with the bucketing unit for charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub granularity: Granularity,
}

impl Interval {
    /// Builds an interval, swapping the bounds if they arrive reversed.
    pub fn new(start: NaiveDate, end: NaiveDate, granularity: Granularity) -> Self {
        if start <= end {
            Self { start, end, granularity }
        } else {
            Self { start: end, end: start, granularity }
        }
    }

    /// The whole calendar month containing `date`, bucketed by day.
    pub fn month_of(date: NaiveDate) -> Self {
        Self::new(first_of_month(date), last_of_month(date), Granularity::Day)
    }

    /// The full calendar month before the one `self` starts in.
    pub fn previous_month(&self) -> Self {
        let prior = first_of_month(self.start) - Duration::days(1);
        Self::month_of(prior)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Every calendar day in the interval.
    pub fn days(&self) -> Vec<NaiveDate> {
        self.start.iter_days().take_while(|d| *d <= self.end).collect()
    }

    /// Every first-of-month that falls inside the interval.
    pub fn months(&self) -> Vec<NaiveDate> {
        let mut out = Vec::new();
        let mut cursor = if self.start.day() == 1 {
            self.start
        } else {
            next_month(self.start)
        };
        while cursor <= self.end {
            out.push(cursor);
            cursor = next_month(cursor);
        }
        out
    }
}

pub fn resolve(selector: RangeSelector, reference: NaiveDate) -> Interval {
    let start = match selector {
        RangeSelector::Last7Days => reference - Duration::days(6),
        RangeSelector::ThisMonth => first_of_month(reference),
        RangeSelector::Last3Months => first_of_month(reference - Duration::days(90)),
        RangeSelector::ThisYear | RangeSelector::Last12Months => {
            first_of_month(reference - Duration::days(365))
        }
    };
    Interval::new(start, reference, selector.granularity())
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.day0()))
}

pub fn last_of_month(date: NaiveDate) -> NaiveDate {
    next_month(date) - Duration::days(1)
}

fn next_month(date: NaiveDate) -> NaiveDate {
    first_of_month(date) + Months::new(1)
}
