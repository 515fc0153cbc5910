//! `MM/DD/YYYY` date handling for range queries.
//!
//! Order dates are stored as the raw strings found in the input and parsed on
//! demand, so a malformed stored date only surfaces when a range query runs.

use crate::error::LedgerError;
use chrono::NaiveDate;

/// The only date layout the ledger understands.
pub const DATE_FORMAT: &str = "%m/%d/%Y";

/// Parses a `MM/DD/YYYY` date. Month and day may be one or two digits, the
/// year must be exactly four.
pub fn parse_order_date(value: &str) -> Result<NaiveDate, LedgerError> {
    let malformed = || LedgerError::DateFormat {
        value: value.to_string(),
    };

    // chrono skips leading whitespace and accepts short years
    if value.trim() != value {
        return Err(malformed());
    }
    match value.rsplit('/').next() {
        Some(year) if year.len() == 4 && year.bytes().all(|b| b.is_ascii_digit()) => {}
        _ => return Err(malformed()),
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| malformed())
}

/// Returns `true` when `value` would be accepted by [`parse_order_date`].
///
/// Front ends use this to reject bad input before issuing a range query.
pub fn is_valid_date(value: &str) -> bool {
    parse_order_date(value).is_ok()
}

/// An inclusive `[start, end]` window of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Parses both bounds. Fails on the first bound that is not `MM/DD/YYYY`.
    pub fn parse(start: &str, end: &str) -> Result<Self, LedgerError> {
        Ok(Self::new(parse_order_date(start)?, parse_order_date(end)?))
    }

    /// Inclusive on both ends. An inverted range contains nothing.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}
