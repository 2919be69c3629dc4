//! Business logic helpers for expense records.

use chrono::{DateTime, NaiveDate, Utc};

use crate::ledger::{calendar, Expense, ExpensePatch, LedgerState, NewExpense};

/// Stateless operations over the expense sequence of a [`LedgerState`].
///
/// The sequence is kept newest-first: new records are inserted at the front.
pub struct ExpenseService;

impl ExpenseService {
    /// Records a new expense created at `now` and returns a copy of it.
    pub fn add(state: &mut LedgerState, draft: NewExpense, now: DateTime<Utc>) -> Expense {
        let expense = Expense::from_draft(draft, now);
        state.expenses.insert(0, expense.clone());
        expense
    }

    /// Merges `patch` into the matching expense. Returns `None` when no record matches.
    pub fn update(state: &mut LedgerState, id: &str, patch: ExpensePatch) -> Option<Expense> {
        let expense = state.expenses.iter_mut().find(|expense| expense.id == id)?;
        expense.apply(patch);
        Some(expense.clone())
    }

    /// Removes the matching expense, returning whether anything was removed.
    pub fn remove(state: &mut LedgerState, id: &str) -> bool {
        let before = state.expenses.len();
        state.expenses.retain(|expense| expense.id != id);
        state.expenses.len() != before
    }

    pub fn find<'a>(state: &'a LedgerState, id: &str) -> Option<&'a Expense> {
        state.expenses.iter().find(|expense| expense.id == id)
    }

    /// Expenses dated in the given zero-based month, in canonical order.
    pub fn by_month(state: &LedgerState, year: i32, month: u32) -> Vec<Expense> {
        state
            .expenses
            .iter()
            .filter(|expense| calendar::in_month(expense.date, year, month))
            .cloned()
            .collect()
    }

    /// Expenses dated within `start..=end`, in canonical order.
    pub fn by_date_range(state: &LedgerState, start: NaiveDate, end: NaiveDate) -> Vec<Expense> {
        state
            .expenses
            .iter()
            .filter(|expense| start <= expense.date && expense.date <= end)
            .cloned()
            .collect()
    }

    /// The `limit` most recently recorded expenses.
    pub fn recent(state: &LedgerState, limit: usize) -> Vec<Expense> {
        state.expenses.iter().take(limit).cloned().collect()
    }
}
