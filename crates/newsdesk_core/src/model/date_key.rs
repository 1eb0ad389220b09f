//! Date key extraction.
//!
//! # Responsibility
//! - Parse article date text into a totally ordered `(year, month, day)` key.
//! - Report malformed input explicitly, never a best-effort key.
//!
//! # Invariants
//! - Ordering is lexicographic on `(year, month, day)`.
//! - A comma selects the `Month DD, YYYY` form; everything else is read as
//!   `DD-Mon-YY` with a single-digit day zero-padded first.
//! - Two-digit years always map to `2000 + YY`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

static LONG_FORM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\S+)\s+(\S+),\s*(\S+)$").expect("valid long date regex"));
static SHORT_FORM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([^-\s]+)-([^-\s]+)-([^-\s]+)$").expect("valid short date regex"));

const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

const SHORT_YEAR_BASE: i32 = 2000;

/// Comparable sort key derived from an article date.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct DateKey {
    pub year: i32,
    /// 1-based month.
    pub month: u8,
    pub day: u8,
}

impl DateKey {
    pub fn new(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }
}

impl Display for DateKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Why a date text was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateParseReason {
    /// Text matches neither supported layout.
    UnrecognizedFormat,
    UnknownMonth(String),
    InvalidDay(String),
    InvalidYear(String),
    DayOutOfRange(u8),
}

impl Display for DateParseReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedFormat => {
                write!(f, "expected `Month DD, YYYY` or `DD-Mon-YY`")
            }
            Self::UnknownMonth(name) => write!(f, "unknown month `{name}`"),
            Self::InvalidDay(value) => write!(f, "invalid day `{value}`"),
            Self::InvalidYear(value) => write!(f, "invalid year `{value}`"),
            Self::DayOutOfRange(day) => write!(f, "day {day} is outside 1..=31"),
        }
    }
}

/// Date text could not be turned into a [`DateKey`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateParseError {
    /// Original, untrimmed input.
    pub input: String,
    pub reason: DateParseReason,
}

impl DateParseError {
    fn new(input: &str, reason: DateParseReason) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }
}

impl Display for DateParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "failed to parse date `{}`: {}", self.input, self.reason)
    }
}

impl Error for DateParseError {}

/// Extracts the sort key from article date text.
///
/// Supported layouts:
/// - `January 15, 2016` (full month name or three-letter abbreviation)
/// - `08-Dec-17` and `8-Dec-17`
///
/// Two-letter month tokens such as `Ja` are rejected in both layouts.
///
/// # Errors
/// - `UnrecognizedFormat` when neither layout matches.
/// - `UnknownMonth` when the month name is not an English month.
/// - `InvalidDay`/`InvalidYear` for non-numeric or wrongly sized numerals.
/// - `DayOutOfRange` for day `0` or above `31`.
pub fn extract_date_key(text: &str) -> Result<DateKey, DateParseError> {
    let trimmed = text.trim();
    let fail = |reason| DateParseError::new(text, reason);

    if trimmed.contains(',') {
        let caps = LONG_FORM_RE
            .captures(trimmed)
            .ok_or_else(|| fail(DateParseReason::UnrecognizedFormat))?;
        let month = lookup_month(&caps[1])
            .ok_or_else(|| fail(DateParseReason::UnknownMonth(caps[1].to_string())))?;
        let day = parse_digits(&caps[2], 1, 2)
            .ok_or_else(|| fail(DateParseReason::InvalidDay(caps[2].to_string())))?;
        let year = parse_digits(&caps[3], 4, 4)
            .ok_or_else(|| fail(DateParseReason::InvalidYear(caps[3].to_string())))?;
        return build_key(year as i32, month, day).map_err(fail);
    }

    let padded = if trimmed.as_bytes().get(1) == Some(&b'-') {
        format!("0{trimmed}")
    } else {
        trimmed.to_string()
    };
    let caps = SHORT_FORM_RE
        .captures(&padded)
        .ok_or_else(|| fail(DateParseReason::UnrecognizedFormat))?;
    let day = parse_digits(&caps[1], 2, 2)
        .ok_or_else(|| fail(DateParseReason::InvalidDay(caps[1].to_string())))?;
    let month = lookup_month(&caps[2])
        .ok_or_else(|| fail(DateParseReason::UnknownMonth(caps[2].to_string())))?;
    let year = parse_digits(&caps[3], 2, 2)
        .ok_or_else(|| fail(DateParseReason::InvalidYear(caps[3].to_string())))?;
    build_key(SHORT_YEAR_BASE + year as i32, month, day).map_err(fail)
}

/// Three-letter uppercase abbreviation for a 1-based month, `UNK` otherwise.
pub fn month_abbreviation(month: u8) -> &'static str {
    const ABBREVIATIONS: [&str; 12] = [
        "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
    ];
    match month {
        1..=12 => ABBREVIATIONS[usize::from(month) - 1],
        _ => "UNK",
    }
}

fn build_key(year: i32, month: u8, day: u32) -> Result<DateKey, DateParseReason> {
    // `parse_digits` caps day at two digits, so this cast cannot truncate.
    let day = day as u8;
    // Only 1..=31 is checked; per-month validity (`Feb 30`) is not enforced.
    if !(1..=31).contains(&day) {
        return Err(DateParseReason::DayOutOfRange(day));
    }
    Ok(DateKey::new(year, month, day))
}

fn lookup_month(name: &str) -> Option<u8> {
    let lowered = name.to_ascii_lowercase();
    MONTH_NAMES
        .iter()
        .position(|full| *full == lowered || (lowered.len() == 3 && full.starts_with(&lowered)))
        .map(|index| index as u8 + 1)
}

fn parse_digits(value: &str, min_len: usize, max_len: usize) -> Option<u32> {
    if value.len() < min_len || value.len() > max_len {
        return None;
    }
    if !value.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::{extract_date_key, lookup_month, month_abbreviation, DateKey, DateParseReason};

    #[test]
    fn lookup_month_accepts_full_and_short_names() {
        assert_eq!(lookup_month("January"), Some(1));
        assert_eq!(lookup_month("dec"), Some(12));
        assert_eq!(lookup_month("SEP"), Some(9));
        assert_eq!(lookup_month("Ja"), None);
        assert_eq!(lookup_month("Janu"), None);
    }

    #[test]
    fn single_digit_day_is_zero_padded() {
        assert_eq!(extract_date_key("1-Jan-17").unwrap(), DateKey::new(2017, 1, 1));
    }

    #[test]
    fn long_form_without_space_after_comma_is_accepted() {
        assert_eq!(
            extract_date_key("March 3,2016").unwrap(),
            DateKey::new(2016, 3, 3)
        );
    }

    #[test]
    fn day_zero_is_rejected() {
        let err = extract_date_key("00-Jan-17").unwrap_err();
        assert_eq!(err.reason, DateParseReason::DayOutOfRange(0));
    }

    #[test]
    fn month_abbreviation_handles_out_of_range() {
        assert_eq!(month_abbreviation(1), "JAN");
        assert_eq!(month_abbreviation(12), "DEC");
        assert_eq!(month_abbreviation(13), "UNK");
    }
}
