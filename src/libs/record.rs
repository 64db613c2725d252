//! Interval records: the unit of input for aggregation.
//!
//! A record is built from a [`RecordDraft`], which holds raw form input.
//! Validation happens once, at construction. An [`IntervalRecord`] in hand
//! always has a 6-digit key and `start <= end`, so the aggregator never
//! re-checks it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Required length of a record key.
pub const KEY_LENGTH: usize = 6;

/// Default input format for dates typed into forms and record files.
pub const DEFAULT_INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Errors raised while validating record input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("Please fill in all fields")]
    MissingFields,

    #[error("Key `{0}` must be exactly 6 digits")]
    InvalidKey(String),

    #[error("Date `{value}` does not match the format `{format}`")]
    InvalidDate { value: String, format: String },

    #[error("Category `{0}` is not recognised (expected `active` or `leave`)")]
    InvalidCategory(String),

    #[error("Start date {start} cannot be after end date {end}")]
    StartAfterEnd { start: NaiveDate, end: NaiveDate },
}

/// Opaque record identifier, unique within one [`IdGenerator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecordId(u64);

impl RecordId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hands out strictly increasing [`RecordId`]s.
///
/// A counter replaces the wall-clock timestamp, so ids stay unique no matter
/// how fast records are created.
#[derive(Debug, Default)]
pub struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn next_id(&mut self) -> RecordId {
        let id = RecordId(self.next.max(1));
        self.next = id.0 + 1;
        id
    }
}

/// A 6-digit numeric record key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RecordKey(String);

impl RecordKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for RecordKey {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() == KEY_LENGTH && s.chars().all(|c| c.is_ascii_digit()) {
            Ok(RecordKey(s.to_string()))
        } else {
            Err(RecordError::InvalidKey(s.to_string()))
        }
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Status tracked by a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// In service.
    Active,
    /// On licensed absence.
    Leave,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Active, Category::Leave];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Active => "Active",
            Category::Leave => "Leave",
        }
    }
}

impl FromStr for Category {
    type Err = RecordError;

    /// Accepts names as well as the numeric form values `1` (active) and `2` (leave).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" | "1" => Ok(Category::Active),
            "leave" | "2" => Ok(Category::Leave),
            _ => Err(RecordError::InvalidCategory(s.to_string())),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A validated, immutable interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntervalRecord {
    id: RecordId,
    key: RecordKey,
    start: NaiveDate,
    end: NaiveDate,
    category: Category,
}

impl IntervalRecord {
    /// Builds a record, rejecting intervals that run backwards.
    pub fn new(id: RecordId, key: RecordKey, start: NaiveDate, end: NaiveDate, category: Category) -> Result<Self, RecordError> {
        if start > end {
            return Err(RecordError::StartAfterEnd { start, end });
        }
        Ok(Self {
            id,
            key,
            start,
            end,
            category,
        })
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    pub fn key(&self) -> &RecordKey {
        &self.key
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Turns the record back into form input, for edit-by-replacement.
    pub fn to_draft(&self, input_date_format: &str) -> RecordDraft {
        RecordDraft {
            key: Some(self.key.to_string()),
            start: Some(self.start.format(input_date_format).to_string()),
            end: Some(self.end.format(input_date_format).to_string()),
            category: Some(self.category.label().to_lowercase()),
        }
    }
}

/// Unvalidated record input, as typed into a form or read from a file row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDraft {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

/// Validated draft fields, waiting for an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidDraft {
    pub key: RecordKey,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub category: Category,
}

impl ValidDraft {
    pub fn into_record(self, id: RecordId) -> Result<IntervalRecord, RecordError> {
        IntervalRecord::new(id, self.key, self.start, self.end, self.category)
    }
}

impl RecordDraft {
    pub fn new(key: &str, start: &str, end: &str, category: &str) -> Self {
        Self {
            key: Some(key.to_string()),
            start: Some(start.to_string()),
            end: Some(end.to_string()),
            category: Some(category.to_string()),
        }
    }

    /// Checks the draft in form order: presence, key shape, dates, ordering.
    pub fn validate(&self, input_date_format: &str) -> Result<ValidDraft, RecordError> {
        let (key, start, end, category) = match (
            non_empty(&self.key),
            non_empty(&self.start),
            non_empty(&self.end),
            non_empty(&self.category),
        ) {
            (Some(k), Some(s), Some(e), Some(c)) => (k, s, e, c),
            _ => return Err(RecordError::MissingFields),
        };

        let key: RecordKey = key.parse()?;
        let start = parse_date(start, input_date_format)?;
        let end = parse_date(end, input_date_format)?;
        let category: Category = category.parse()?;

        if start > end {
            return Err(RecordError::StartAfterEnd { start, end });
        }

        Ok(ValidDraft { key, start, end, category })
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

pub fn parse_date(value: &str, format: &str) -> Result<NaiveDate, RecordError> {
    NaiveDate::parse_from_str(value.trim(), format).map_err(|_| RecordError::InvalidDate {
        value: value.to_string(),
        format: format.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_generator_is_monotonic() {
        let mut ids = IdGenerator::new();
        let a = ids.next_id();
        let b = ids.next_id();
        let c = ids.next_id();
        assert!(a < b && b < c);
    }

    #[test]
    fn test_default_id_generator_starts_at_one() {
        let mut ids = IdGenerator::default();
        assert_eq!(ids.next_id().value(), 1);
        assert_eq!(ids.next_id().value(), 2);
    }

    #[test]
    fn test_key_shape() {
        assert!("000001".parse::<RecordKey>().is_ok());
        assert!("12345".parse::<RecordKey>().is_err());
        assert!("1234567".parse::<RecordKey>().is_err());
        assert!("12a456".parse::<RecordKey>().is_err());
        assert!("١٢٣٤٥٦".parse::<RecordKey>().is_err());
    }

    #[test]
    fn test_category_parsing() {
        assert_eq!("active".parse::<Category>().unwrap(), Category::Active);
        assert_eq!("Leave".parse::<Category>().unwrap(), Category::Leave);
        assert_eq!("1".parse::<Category>().unwrap(), Category::Active);
        assert_eq!("2".parse::<Category>().unwrap(), Category::Leave);
        assert!("sick".parse::<Category>().is_err());
    }
}
