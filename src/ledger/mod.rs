//! Ledger domain models, persistence-friendly types, and helpers.

pub mod amount;
pub mod budget;
pub mod calendar;
pub mod category;
pub mod expense;
pub mod report;
pub mod state;
pub mod validation;

pub use budget::{Budget, BudgetLevel, BudgetPatch, BudgetStatus};
pub use category::{default_categories, Category, CategoryPatch, NewCategory, FALLBACK_CATEGORY_ID};
pub use expense::{Expense, ExpensePatch, NewExpense};
pub use state::{LedgerState, LoadReport};
pub use report::{CategorySpend, DailyTotal, MonthComparison};
