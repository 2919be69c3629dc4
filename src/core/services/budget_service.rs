//! Budget configuration and monthly status classification.

use crate::core::services::SummaryService;
use crate::ledger::{Budget, BudgetPatch, BudgetStatus, LedgerState};

pub struct BudgetService;

impl BudgetService {
    /// Merges `patch` into the global budget and returns the result.
    pub fn update(state: &mut LedgerState, patch: BudgetPatch) -> Budget {
        state.budget.apply(patch);
        state.budget
    }

    /// Spend, share of limit, remaining amount, and classification for a zero-based month.
    ///
    /// Always evaluated against the current budget, so changing the budget
    /// reclassifies past months too.
    pub fn status(state: &LedgerState, year: i32, month: u32) -> BudgetStatus {
        let total = SummaryService::total_by_month(state, year, month);
        BudgetStatus::from_total(&state.budget, total)
    }
}
