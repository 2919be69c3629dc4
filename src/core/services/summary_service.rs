//! Aggregation helpers for monthly totals, category attribution, and daily charts.

use std::collections::HashMap;

use chrono::{Days, NaiveDate};

use crate::core::services::{CategoryService, ExpenseService};
use crate::ledger::{calendar, CategorySpend, DailyTotal, LedgerState, MonthComparison};

/// Pure read-side computations over a [`LedgerState`] snapshot.
pub struct SummaryService;

impl SummaryService {
    /// Sum of amounts dated in the given zero-based month; `0.0` when there are none.
    pub fn total_by_month(state: &LedgerState, year: i32, month: u32) -> f64 {
        state
            .expenses
            .iter()
            .filter(|expense| calendar::in_month(expense.date, year, month))
            .map(|expense| expense.amount)
            .sum()
    }

    /// Per-category spend for the month, largest first.
    ///
    /// Unresolvable category ids keep their id but borrow the fallback category's
    /// name, icon, and color.
    pub fn category_breakdown(state: &LedgerState, year: i32, month: u32) -> Vec<CategorySpend> {
        let totals = Self::totals_by_category(state, year, month);
        let month_total: f64 = totals.iter().map(|(_, amount)| amount).sum();
        let mut breakdown: Vec<CategorySpend> = totals
            .into_iter()
            .map(|(category_id, amount)| {
                let category = CategoryService::resolve(state, &category_id);
                CategorySpend {
                    category_id,
                    name: category.name,
                    icon: category.icon,
                    color: category.color,
                    amount,
                    percentage: if month_total > 0.0 {
                        amount / month_total * 100.0
                    } else {
                        0.0
                    },
                }
            })
            .collect();
        breakdown.sort_by(|a, b| b.amount.total_cmp(&a.amount));
        breakdown
    }

    /// The category with the strictly greatest spend in the month; earlier ids win ties.
    pub fn top_category(state: &LedgerState, year: i32, month: u32) -> Option<CategorySpend> {
        Self::category_breakdown(state, year, month)
            .into_iter()
            .next()
            .filter(|spend| spend.amount > 0.0)
    }

    /// One entry per day of the zero-based month; empty for an invalid month.
    pub fn daily_totals(
        state: &LedgerState,
        year: i32,
        month: u32,
        today: NaiveDate,
    ) -> Vec<DailyTotal> {
        let Some((first, last)) = calendar::month_bounds(year, month) else {
            return Vec::new();
        };
        let per_day = Self::totals_by_day(state);
        first
            .iter_days()
            .take_while(|day| *day <= last)
            .map(|date| DailyTotal {
                date,
                amount: per_day.get(&date).copied().unwrap_or(0.0),
                is_today: date == today,
            })
            .collect()
    }

    /// The `days` days ending at `today`, oldest first.
    pub fn trailing_daily_totals(state: &LedgerState, today: NaiveDate, days: u32) -> Vec<DailyTotal> {
        let per_day = Self::totals_by_day(state);
        (0..days)
            .rev()
            .filter_map(|offset| today.checked_sub_days(Days::new(u64::from(offset))))
            .map(|date| DailyTotal {
                date,
                amount: per_day.get(&date).copied().unwrap_or(0.0),
                is_today: date == today,
            })
            .collect()
    }

    /// The month's total against the previous calendar month's.
    pub fn month_comparison(state: &LedgerState, year: i32, month: u32) -> MonthComparison {
        let (prev_year, prev_month) = calendar::previous_month(year, month);
        MonthComparison::new(
            Self::total_by_month(state, year, month),
            Self::total_by_month(state, prev_year, prev_month),
        )
    }

    /// Category totals for the month in first-seen order.
    fn totals_by_category(state: &LedgerState, year: i32, month: u32) -> Vec<(String, f64)> {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut totals: Vec<(String, f64)> = Vec::new();
        for expense in ExpenseService::by_month(state, year, month) {
            match index.get(&expense.category) {
                Some(&slot) => totals[slot].1 += expense.amount,
                None => {
                    index.insert(expense.category.clone(), totals.len());
                    totals.push((expense.category, expense.amount));
                }
            }
        }
        totals
    }

    fn totals_by_day(state: &LedgerState) -> HashMap<NaiveDate, f64> {
        let mut per_day = HashMap::new();
        for expense in &state.expenses {
            *per_day.entry(expense.date).or_insert(0.0) += expense.amount;
        }
        per_day
    }
}
