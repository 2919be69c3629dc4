use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{amount, calendar::serde_date};

/// A single spending event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    #[serde(with = "amount")]
    pub amount: f64,
    /// Weak reference to [`super::Category::id`]; may dangle after a category delete.
    pub category: String,
    #[serde(with = "serde_date")]
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Materialises a draft with a fresh identifier and the given creation time.
    pub fn from_draft(draft: NewExpense, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            amount: draft.amount,
            category: draft.category,
            date: draft.date,
            notes: draft.notes,
            created_at,
        }
    }

    /// Merges the present fields of `patch`; `id` and `created_at` are never touched.
    pub fn apply(&mut self, patch: ExpensePatch) {
        if let Some(amount) = patch.amount {
            self.amount = amount;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(notes) = patch.notes {
            self.notes = notes;
        }
    }
}

/// Caller-supplied fields for a new expense.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    pub amount: f64,
    pub category: String,
    pub date: NaiveDate,
    pub notes: Option<String>,
}

impl NewExpense {
    pub fn new(amount: f64, category: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            amount,
            category: category.into(),
            date,
            notes: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Partial update for an [`Expense`]. `None` leaves a field unchanged.
///
/// `notes` distinguishes "leave as is" (`None`) from "clear" (`Some(None)`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpensePatch {
    pub amount: Option<f64>,
    pub category: Option<String>,
    pub date: Option<NaiveDate>,
    pub notes: Option<Option<String>>,
}

impl ExpensePatch {
    pub fn amount(amount: f64) -> Self {
        Self {
            amount: Some(amount),
            ..Self::default()
        }
    }

    pub fn category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            ..Self::default()
        }
    }

    pub fn date(date: NaiveDate) -> Self {
        Self {
            date: Some(date),
            ..Self::default()
        }
    }

    pub fn notes(notes: impl Into<String>) -> Self {
        Self {
            notes: Some(Some(notes.into())),
            ..Self::default()
        }
    }

    pub fn clear_notes() -> Self {
        Self {
            notes: Some(None),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.amount.is_none()
            && self.category.is_none()
            && self.date.is_none()
            && self.notes.is_none()
    }
}
