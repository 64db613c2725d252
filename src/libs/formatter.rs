//! Formatting helpers for dates and spans.
//!
//! Dates are always rendered through a configurable `strftime` pattern, the
//! default being `%d/%m/%Y`. Spans read as `"X years, Y months, Z days"`.
//!
//! ```rust
//! use chrono::NaiveDate;
//! use tenure::libs::date_diff::DateDifference;
//! use tenure::libs::formatter::{format_date, format_difference};
//!
//! let date = NaiveDate::from_ymd_opt(2021, 4, 10).unwrap();
//! assert_eq!(format_date(date, "%d/%m/%Y"), "10/04/2021");
//! assert_eq!(format_difference(&DateDifference::new(0, 3, 0)), "0 years, 3 months, 0 days");
//! ```

use crate::libs::aggregator::Contribution;
use crate::libs::date_diff::DateDifference;
use crate::libs::record::IntervalRecord;
use chrono::NaiveDate;
use serde::Serialize;

/// Placeholder shown for records that add no time.
pub const NOTHING_COUNTED: &str = "-";

pub fn format_date(date: NaiveDate, format: &str) -> String {
    date.format(format).to_string()
}

pub fn format_difference(difference: &DateDifference) -> String {
    difference.to_string()
}

/// A record with every field pre-formatted for a table row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormattedRecord {
    pub number: usize,
    pub key: String,
    pub start: String,
    pub end: String,
    pub category: String,
}

impl FormattedRecord {
    pub fn new(number: usize, record: &IntervalRecord, date_format: &str) -> Self {
        Self {
            number,
            key: record.key().to_string(),
            start: format_date(record.start(), date_format),
            end: format_date(record.end(), date_format),
            category: record.category().to_string(),
        }
    }
}

/// A clipped contribution, pre-formatted for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormattedContribution {
    pub category: String,
    pub counted_from: String,
    pub end: String,
    pub counted: String,
}

impl FormattedContribution {
    pub fn new(contribution: &Contribution, date_format: &str) -> Self {
        let counted = contribution
            .difference
            .as_ref()
            .map_or_else(|| NOTHING_COUNTED.to_string(), format_difference);
        let counted_from = if contribution.difference.is_some() {
            format_date(contribution.effective_start, date_format)
        } else {
            NOTHING_COUNTED.to_string()
        };

        Self {
            category: contribution.category.to_string(),
            counted_from,
            end: format_date(contribution.end, date_format),
            counted,
        }
    }
}
