use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{
    amount,
    budget::Budget,
    category::{default_categories, Category},
    expense::Expense,
};
use crate::errors::{LedgerError, Result};

/// The aggregate root persisted as one record: expenses, categories, and the budget.
///
/// `expenses` is kept newest-first; `categories` is kept in display order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LedgerState {
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default = "default_categories")]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub budget: Budget,
}

impl Default for LedgerState {
    fn default() -> Self {
        Self {
            expenses: Vec::new(),
            categories: default_categories(),
            budget: Budget::default(),
        }
    }
}

/// Outcome of decoding a stored payload, including any parts that had to be discarded.
#[derive(Debug, Clone)]
pub struct LoadReport {
    pub state: LedgerState,
    pub warnings: Vec<String>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

impl LedgerState {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Strict decode; any malformed part fails the whole payload.
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Lenient decode that salvages whatever is still valid.
    ///
    /// Each section defaults on its own when missing, `null`, or of the wrong shape.
    /// Malformed expenses or categories are dropped one by one while their siblings
    /// are kept, and a malformed budget field falls back without its sibling. Fails only when the payload is not a JSON object at all.
    pub fn recover(raw: &str) -> Result<LoadReport> {
        let root: Value = serde_json::from_str(raw)?;
        let Value::Object(mut root) = root else {
            return Err(LedgerError::Storage(
                "stored ledger is not a JSON object".into(),
            ));
        };
        let mut warnings = Vec::new();

        let expenses = match root.remove("expenses") {
            None | Some(Value::Null) => Vec::new(),
            Some(section) => {
                recover_records::<Expense>("expenses", section, &mut warnings).unwrap_or_default()
            }
        };
        let categories = match root.remove("categories") {
            None | Some(Value::Null) => default_categories(),
            Some(section) => recover_records::<Category>("categories", section, &mut warnings)
                .unwrap_or_else(default_categories),
        };
        let budget = match root.remove("budget") {
            None | Some(Value::Null) => Budget::default(),
            Some(Value::Object(fields)) => recover_budget(fields, &mut warnings),
            Some(_) => {
                warnings.push("budget reset to defaults: expected an object".into());
                Budget::default()
            }
        };

        Ok(LoadReport {
            state: LedgerState {
                expenses,
                categories,
                budget,
            },
            warnings,
        })
    }
}

fn recover_budget(mut fields: Map<String, Value>, warnings: &mut Vec<String>) -> Budget {
    let mut budget = Budget::default();
    let slots = [
        ("monthlyLimit", &mut budget.monthly_limit),
        ("alertThreshold", &mut budget.alert_threshold),
    ];
    for (name, slot) in slots {
        let Some(raw) = fields.remove(name) else {
            continue;
        };
        match amount::deserialize(raw) {
            Ok(value) => *slot = value,
            Err(err) => warnings.push(format!("budget.{name} reset to default: {err}")),
        }
    }
    budget
}

/// Decodes an array section record by record. Returns `None` when the section is not an array.
fn recover_records<T: DeserializeOwned>(
    section_name: &str,
    section: Value,
    warnings: &mut Vec<String>,
) -> Option<Vec<T>> {
    let Value::Array(items) = section else {
        warnings.push(format!("{section_name} reset to defaults: expected an array"));
        return None;
    };
    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<T>(item) {
            Ok(record) => records.push(record),
            Err(err) => warnings.push(format!("{section_name}[{index}] skipped: {err}")),
        }
    }
    Some(records)
}
