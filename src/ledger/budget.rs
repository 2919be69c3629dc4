use std::fmt;

use serde::{Deserialize, Serialize};

use super::amount;

pub const DEFAULT_MONTHLY_LIMIT: f64 = 10_000.0;
pub const DEFAULT_ALERT_THRESHOLD: f64 = 80.0;

/// The single global spending ceiling applied to every calendar month.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Budget {
    #[serde(with = "amount")]
    pub monthly_limit: f64,
    /// Percentage of `monthly_limit` at which the warning state begins.
    #[serde(with = "amount")]
    pub alert_threshold: f64,
}

impl Default for Budget {
    fn default() -> Self {
        Self {
            monthly_limit: DEFAULT_MONTHLY_LIMIT,
            alert_threshold: DEFAULT_ALERT_THRESHOLD,
        }
    }
}

impl Budget {
    pub fn new(monthly_limit: f64, alert_threshold: f64) -> Self {
        Self {
            monthly_limit,
            alert_threshold,
        }
    }

    pub fn apply(&mut self, patch: BudgetPatch) {
        if let Some(limit) = patch.monthly_limit {
            self.monthly_limit = limit;
        }
        if let Some(threshold) = patch.alert_threshold {
            self.alert_threshold = threshold;
        }
    }

    /// Share of the limit consumed by `total`, in percent.
    ///
    /// A non-positive limit yields `0.0` for zero spend and `f64::INFINITY` otherwise.
    pub fn percentage_of(&self, total: f64) -> f64 {
        if self.monthly_limit > 0.0 {
            total / self.monthly_limit * 100.0
        } else if total > 0.0 {
            f64::INFINITY
        } else {
            0.0
        }
    }

    /// Classifies a percentage; `Danger` wins over `Warning` when both apply.
    pub fn classify(&self, percentage: f64) -> BudgetLevel {
        if percentage >= 100.0 {
            BudgetLevel::Danger
        } else if percentage >= self.alert_threshold {
            BudgetLevel::Warning
        } else {
            BudgetLevel::Safe
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BudgetPatch {
    pub monthly_limit: Option<f64>,
    pub alert_threshold: Option<f64>,
}

impl BudgetPatch {
    pub fn monthly_limit(limit: f64) -> Self {
        Self {
            monthly_limit: Some(limit),
            alert_threshold: None,
        }
    }

    pub fn alert_threshold(threshold: f64) -> Self {
        Self {
            monthly_limit: None,
            alert_threshold: Some(threshold),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.monthly_limit.is_none() && self.alert_threshold.is_none()
    }
}

/// Tri-state classification of a month's spend against the budget.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BudgetLevel {
    Safe,
    Warning,
    Danger,
}

impl fmt::Display for BudgetLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BudgetLevel::Safe => "safe",
            BudgetLevel::Warning => "warning",
            BudgetLevel::Danger => "danger",
        };
        f.write_str(label)
    }
}

/// Budget usage for one month.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct BudgetStatus {
    pub total: f64,
    pub percentage: f64,
    /// `monthly_limit - total`; negative once the limit is exceeded.
    pub remaining: f64,
    pub status: BudgetLevel,
}

impl BudgetStatus {
    pub fn from_total(budget: &Budget, total: f64) -> Self {
        let percentage = budget.percentage_of(total);
        Self {
            total,
            percentage,
            remaining: budget.monthly_limit - total,
            status: budget.classify(percentage),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_boundaries() {
        let budget = Budget::new(1000.0, 80.0);
        let level = |total: f64| BudgetStatus::from_total(&budget, total).status;
        assert_eq!(level(799.0), BudgetLevel::Safe);
        assert_eq!(level(800.0), BudgetLevel::Warning);
        assert_eq!(level(999.0), BudgetLevel::Warning);
        assert_eq!(level(1000.0), BudgetLevel::Danger);
        assert_eq!(level(1001.0), BudgetLevel::Danger);
    }

    #[test]
    fn danger_takes_priority_at_full_threshold() {
        let budget = Budget::new(500.0, 100.0);
        assert_eq!(
            BudgetStatus::from_total(&budget, 500.0).status,
            BudgetLevel::Danger
        );
    }

    #[test]
    fn remaining_goes_negative_when_overspent() {
        let status = BudgetStatus::from_total(&Budget::new(1000.0, 80.0), 1250.0);
        assert_eq!(status.remaining, -250.0);
        assert_eq!(status.percentage, 125.0);
    }

    #[test]
    fn zero_limit_is_defined() {
        let budget = Budget::new(0.0, 80.0);
        let idle = BudgetStatus::from_total(&budget, 0.0);
        assert_eq!(idle.percentage, 0.0);
        assert_eq!(idle.status, BudgetLevel::Safe);

        let spent = BudgetStatus::from_total(&budget, 1.0);
        assert!(spent.percentage.is_infinite());
        assert_eq!(spent.status, BudgetLevel::Danger);
        assert_eq!(spent.remaining, -1.0);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let budget: Budget = serde_json::from_str(r#"{"alertThreshold": 65}"#).unwrap();
        assert_eq!(budget.monthly_limit, DEFAULT_MONTHLY_LIMIT);
        assert_eq!(budget.alert_threshold, 65.0);
    }

    #[test]
    fn partial_patch_keeps_limit() {
        let mut budget = Budget::default();
        budget.apply(BudgetPatch::alert_threshold(90.0));
        assert_eq!(budget.monthly_limit, DEFAULT_MONTHLY_LIMIT);
        assert_eq!(budget.alert_threshold, 90.0);
    }
}
