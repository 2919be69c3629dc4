//! Optional input checks mirroring what the entry forms enforce.
//!
//! The ledger itself stores whatever it is given; callers that want to reject bad
//! input before it reaches the ledger use these helpers.

use crate::errors::{LedgerError, Result};

/// Parses a user-entered amount, requiring a finite value greater than zero.
pub fn parse_amount(input: &str) -> Result<f64> {
    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| LedgerError::InvalidInput(format!("`{}` is not a number", input.trim())))?;
    validate_amount(value)
}

pub fn validate_amount(value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(LedgerError::InvalidInput(
            "amount must be greater than zero".into(),
        ))
    }
}

pub fn validate_budget_limit(limit: f64) -> Result<f64> {
    if limit.is_finite() && limit > 0.0 {
        Ok(limit)
    } else {
        Err(LedgerError::InvalidInput(
            "monthly limit must be greater than zero".into(),
        ))
    }
}

/// Returns the trimmed name, rejecting blank input.
pub fn validate_category_name(name: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        Err(LedgerError::InvalidInput("category name is required".into()))
    } else {
        Ok(trimmed.to_string())
    }
}
