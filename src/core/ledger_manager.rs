use chrono::NaiveDate;
use tracing::{debug, info};

use crate::core::clock::{Clock, SystemClock};
use crate::core::persistence::{self, PersistFailureSink, WriteThrough, DEFAULT_STORAGE_KEY};
use crate::core::services::{BudgetService, CategoryService, ExpenseService, SummaryService};
use crate::ledger::{
    Budget, BudgetPatch, BudgetStatus, Category, CategoryPatch, CategorySpend, DailyTotal,
    Expense, ExpensePatch, LedgerState, MonthComparison, NewCategory, NewExpense,
};
use crate::storage::KeyValueStore;

/// Facade that owns the ledger aggregate and keeps the store in sync with it.
///
/// Every effective mutation is followed by a write of the whole aggregate; write
/// failures are reported to the configured sink and never reach the caller.
/// Reads hand out shared slices or owned copies only.
pub struct LedgerManager {
    state: LedgerState,
    persistence: WriteThrough,
    clock: Box<dyn Clock>,
}

impl LedgerManager {
    /// Opens the ledger stored under the default key, or starts fresh.
    pub fn open<S: KeyValueStore + 'static>(store: S) -> Self {
        Self::open_with_key(store, DEFAULT_STORAGE_KEY)
    }

    pub fn open_with_key<S: KeyValueStore + 'static>(store: S, key: &str) -> Self {
        let state = persistence::load_state(&store, key);
        info!(
            key,
            expenses = state.expenses.len(),
            categories = state.categories.len(),
            "ledger opened"
        );
        Self {
            state,
            persistence: WriteThrough::new(Box::new(store), key),
            clock: Box::new(SystemClock),
        }
    }

    pub fn with_clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_failure_sink<F: PersistFailureSink + 'static>(mut self, sink: F) -> Self {
        self.persistence.set_sink(Box::new(sink));
        self
    }

    // --- mutations -------------------------------------------------------

    /// Records a new expense at the front of the sequence.
    pub fn add_expense(&mut self, draft: NewExpense) -> Expense {
        let expense = ExpenseService::add(&mut self.state, draft, self.clock.now());
        debug!(id = %expense.id, amount = expense.amount, "expense added");
        self.commit();
        expense
    }

    /// Merges `patch` into the matching expense; `None` (and no write) when it does not exist.
    /// An empty patch returns the expense unchanged without writing.
    pub fn update_expense(&mut self, id: &str, patch: ExpensePatch) -> Option<Expense> {
        if patch.is_empty() {
            return self.expense_by_id(id);
        }
        let updated = ExpenseService::update(&mut self.state, id, patch);
        if updated.is_some() {
            self.commit();
        }
        updated
    }

    pub fn delete_expense(&mut self, id: &str) {
        if ExpenseService::remove(&mut self.state, id) {
            debug!(id, "expense deleted");
            self.commit();
        }
    }

    pub fn add_category(&mut self, draft: NewCategory) -> Category {
        let category = CategoryService::add(&mut self.state, draft);
        debug!(id = %category.id, name = %category.name, "category added");
        self.commit();
        category
    }

    pub fn update_category(&mut self, id: &str, patch: CategoryPatch) -> Option<Category> {
        if patch.is_empty() {
            return self.category_by_id(id);
        }
        let updated = CategoryService::update(&mut self.state, id, patch);
        if updated.is_some() {
            self.commit();
        }
        updated
    }

    /// Removes the category; expenses referencing it keep the now-dangling id.
    pub fn delete_category(&mut self, id: &str) {
        if CategoryService::remove(&mut self.state, id) {
            debug!(id, "category deleted");
            self.commit();
        }
    }

    pub fn update_budget(&mut self, patch: BudgetPatch) -> Budget {
        if patch.is_empty() {
            return self.state.budget;
        }
        let budget = BudgetService::update(&mut self.state, patch);
        self.commit();
        budget
    }

    /// Restores the first-run state: no expenses, default categories, default budget.
    pub fn clear_all_data(&mut self) {
        self.state = LedgerState::default();
        info!("ledger reset to defaults");
        self.commit();
    }

    // --- queries ---------------------------------------------------------

    pub fn expenses(&self) -> &[Expense] {
        &self.state.expenses
    }

    pub fn categories(&self) -> &[Category] {
        &self.state.categories
    }

    pub fn budget(&self) -> Budget {
        self.state.budget
    }

    /// Owned copy of the whole aggregate.
    pub fn snapshot(&self) -> LedgerState {
        self.state.clone()
    }

    pub fn expense_by_id(&self, id: &str) -> Option<Expense> {
        ExpenseService::find(&self.state, id).cloned()
    }

    pub fn expenses_by_month(&self, year: i32, month: u32) -> Vec<Expense> {
        ExpenseService::by_month(&self.state, year, month)
    }

    pub fn expenses_by_date_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<Expense> {
        ExpenseService::by_date_range(&self.state, start, end)
    }

    pub fn total_by_month(&self, year: i32, month: u32) -> f64 {
        SummaryService::total_by_month(&self.state, year, month)
    }

    pub fn category_by_id(&self, id: &str) -> Option<Category> {
        CategoryService::find(&self.state, id).cloned()
    }

    pub fn category_or_fallback(&self, id: &str) -> Category {
        CategoryService::resolve(&self.state, id)
    }

    pub fn budget_status(&self, year: i32, month: u32) -> BudgetStatus {
        BudgetService::status(&self.state, year, month)
    }

    pub fn category_breakdown(&self, year: i32, month: u32) -> Vec<CategorySpend> {
        SummaryService::category_breakdown(&self.state, year, month)
    }

    pub fn top_category(&self, year: i32, month: u32) -> Option<CategorySpend> {
        SummaryService::top_category(&self.state, year, month)
    }

    pub fn daily_totals(&self, year: i32, month: u32) -> Vec<DailyTotal> {
        SummaryService::daily_totals(&self.state, year, month, self.clock.today())
    }

    pub fn trailing_daily_totals(&self, days: u32) -> Vec<DailyTotal> {
        SummaryService::trailing_daily_totals(&self.state, self.clock.today(), days)
    }

    pub fn month_comparison(&self, year: i32, month: u32) -> MonthComparison {
        SummaryService::month_comparison(&self.state, year, month)
    }

    pub fn recent_expenses(&self, limit: usize) -> Vec<Expense> {
        ExpenseService::recent(&self.state, limit)
    }

    pub fn dangling_references(&self) -> Vec<String> {
        CategoryService::dangling_references(&self.state)
    }

    // --- persistence -----------------------------------------------------

    pub fn storage_key(&self) -> &str {
        self.persistence.key()
    }

    /// Number of failed writes since the ledger was opened.
    pub fn persist_failures(&self) -> usize {
        self.persistence.failures()
    }

    /// Re-writes the current aggregate, e.g. after the store recovered from a failure.
    pub fn flush(&mut self) -> bool {
        self.persistence.persist(&self.state)
    }

    fn commit(&mut self) {
        self.persistence.persist(&self.state);
    }
}
