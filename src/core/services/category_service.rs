//! Business logic helpers for category management.

use std::collections::HashSet;

use crate::ledger::{Category, CategoryPatch, LedgerState, NewCategory};

/// Stateless operations over the category list of a [`LedgerState`].
///
/// Categories are referenced by expenses only weakly: removing one never touches
/// the expenses that point at it.
pub struct CategoryService;

impl CategoryService {
    /// Appends a new category with a generated id.
    pub fn add(state: &mut LedgerState, draft: NewCategory) -> Category {
        let category = Category::from_draft(draft);
        state.categories.push(category.clone());
        category
    }

    pub fn update(state: &mut LedgerState, id: &str, patch: CategoryPatch) -> Option<Category> {
        let category = state
            .categories
            .iter_mut()
            .find(|category| category.id == id)?;
        category.apply(patch);
        Some(category.clone())
    }

    pub fn remove(state: &mut LedgerState, id: &str) -> bool {
        let before = state.categories.len();
        state.categories.retain(|category| category.id != id);
        state.categories.len() != before
    }

    /// First category with the given id.
    pub fn find<'a>(state: &'a LedgerState, id: &str) -> Option<&'a Category> {
        state.categories.iter().find(|category| category.id == id)
    }

    /// The category with the given id, or [`Category::fallback`] when it does not resolve.
    pub fn resolve(state: &LedgerState, id: &str) -> Category {
        Self::find(state, id)
            .cloned()
            .unwrap_or_else(Category::fallback)
    }

    /// Describes every expense whose category id no longer resolves.
    pub fn dangling_references(state: &LedgerState) -> Vec<String> {
        let known: HashSet<&str> = state
            .categories
            .iter()
            .map(|category| category.id.as_str())
            .collect();
        state
            .expenses
            .iter()
            .filter(|expense| !known.contains(expense.category.as_str()))
            .map(|expense| {
                format!(
                    "expense {} references missing category {}",
                    expense.id, expense.category
                )
            })
            .collect()
    }
}
