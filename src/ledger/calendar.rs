//! Calendar helpers shared by the model and the month-based queries.
//!
//! Months are addressed as `(year, month)` with a zero-based month (`0` = January),
//! decomposed through [`Datelike::month0`] everywhere.

use chrono::{DateTime, Datelike, NaiveDate, Utc};

/// Splits a date into its `(year, zero-based month)` pair.
pub fn month_of(date: NaiveDate) -> (i32, u32) {
    (date.year(), date.month0())
}

/// Returns `true` when `date` falls in the given zero-based month.
pub fn in_month(date: NaiveDate, year: i32, month: u32) -> bool {
    month_of(date) == (year, month)
}

/// First and last calendar day of a zero-based month, or `None` when out of range.
pub fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month.checked_add(1)?, 1)?;
    let (next_year, next_month) = next_month(year, month);
    let last = NaiveDate::from_ymd_opt(next_year, next_month + 1, 1)?.pred_opt()?;
    Some((first, last))
}

/// Number of days in a zero-based month; `0` for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    month_bounds(year, month)
        .map(|(_, last)| last.day())
        .unwrap_or(0)
}

pub fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month == 0 {
        (year.saturating_sub(1), 11)
    } else {
        (year, month - 1)
    }
}

pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month >= 11 {
        (year.saturating_add(1), 0)
    } else {
        (year, month + 1)
    }
}

/// Parses a stored expense date.
///
/// Accepts a plain `YYYY-MM-DD` date or an RFC 3339 timestamp, which is reduced to
/// its UTC calendar date.
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(trimmed)
        .ok()
        .map(|stamp| stamp.with_timezone(&Utc).date_naive())
}

/// Serde adapter persisting dates as `YYYY-MM-DD` while tolerating timestamps on read.
pub mod serde_date {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&date.format("%Y-%m-%d"))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_calendar_date(&raw)
            .ok_or_else(|| de::Error::custom(format!("invalid calendar date `{raw}`")))
    }
}
