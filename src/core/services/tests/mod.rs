mod summary_service_tests;

use chrono::{NaiveDate, TimeZone, Utc};

use crate::ledger::{Expense, LedgerState, NewExpense};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Pushes an expense to the back, as if it had been recorded before everything present.
fn push_expense(state: &mut LedgerState, amount: f64, category: &str, on: NaiveDate) -> Expense {
    let created = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let expense = Expense::from_draft(NewExpense::new(amount, category, on), created);
    state.expenses.push(expense.clone());
    expense
}
