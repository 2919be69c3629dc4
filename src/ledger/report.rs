//! Read models derived from the ledger for dashboards and reports.

use chrono::NaiveDate;
use serde::Serialize;

/// Spend attributed to one category within a month.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategorySpend {
    /// The referenced id, even when it no longer resolves to a category.
    pub category_id: String,
    pub name: String,
    pub icon: String,
    pub color: String,
    pub amount: f64,
    /// Share of the month's total, in percent; `0.0` when the total is zero.
    pub percentage: f64,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub amount: f64,
    pub is_today: bool,
}

/// A month's total next to the previous month's.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct MonthComparison {
    pub current: f64,
    pub previous: f64,
    /// `(current - previous) / previous * 100`, or `0.0` without prior spend.
    pub change_percentage: f64,
}

impl MonthComparison {
    pub fn new(current: f64, previous: f64) -> Self {
        let change_percentage = if previous > 0.0 {
            (current - previous) / previous * 100.0
        } else {
            0.0
        };
        Self {
            current,
            previous,
            change_percentage,
        }
    }
}
