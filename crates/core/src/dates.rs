//! Submitted-date conversion.
//!
//! Form dates arrive as `YYYY-MM-DD` strings, the shape the rule table's
//! date pattern enforces. Converting them to real dates is where
//! calendar-invalid values are finally rejected.

use chrono::NaiveDate;

use crate::error::CoreError;

/// Parse a submitted `YYYY-MM-DD` date string.
pub fn parse_form_date(text: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map_err(|_| CoreError::InvalidDate(text.to_string()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
