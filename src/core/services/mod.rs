pub mod budget_service;
pub mod category_service;
pub mod expense_service;
pub mod summary_service;

pub use budget_service::BudgetService;
pub use category_service::CategoryService;
pub use expense_service::ExpenseService;
pub use summary_service::SummaryService;

#[cfg(test)]
mod tests;
