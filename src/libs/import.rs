//! Batch input of records from CSV or JSON files.
//!
//! The format is chosen by file extension:
//!
//! - **CSV** (`.csv`): header row `key,start,end,category`
//! - **JSON** (`.json`): an array of `{ "key", "start", "end", "category" }`
//!
//! Every row goes through the same validation as interactive input. The
//! first invalid row aborts the import and is reported with its 1-based
//! row number.

use crate::libs::record::{IdGenerator, IntervalRecord, RecordDraft, RecordError, ValidDraft};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Unsupported record file `{0}` (expected .csv or .json)")]
    UnsupportedFormat(String),

    #[error("Failed to read record file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Row {row}: {source}")]
    InvalidRow {
        row: usize,
        #[source]
        source: RecordError,
    },
}

/// Input file formats for [`load_records`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportFormat {
    Csv,
    Json,
}

impl ImportFormat {
    pub fn from_path(path: &Path) -> Result<Self, ImportError> {
        match path.extension().and_then(|e| e.to_str()).map(str::to_lowercase).as_deref() {
            Some("csv") => Ok(ImportFormat::Csv),
            Some("json") => Ok(ImportFormat::Json),
            _ => Err(ImportError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Reads and validates every record in `path`.
pub fn load_records(path: &Path, input_date_format: &str, ids: &mut IdGenerator) -> Result<Vec<IntervalRecord>, ImportError> {
    let drafts = read_drafts(path)?;
    build_records(&drafts, input_date_format, ids)
}

/// Reads the raw rows of `path` without validating them.
pub fn read_drafts(path: &Path) -> Result<Vec<RecordDraft>, ImportError> {
    let format = ImportFormat::from_path(path)?;
    let file = File::open(path)?;

    let drafts: Vec<RecordDraft> = match format {
        ImportFormat::Csv => read_csv(file)?,
        ImportFormat::Json => serde_json::from_reader(BufReader::new(file))?,
    };
    tracing::debug!(path = %path.display(), rows = drafts.len(), "read record file");
    Ok(drafts)
}

fn read_csv(file: File) -> Result<Vec<RecordDraft>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(file);
    reader.deserialize().collect()
}

/// Validates every draft, stopping at the first invalid row.
pub fn validate_drafts(drafts: &[RecordDraft], input_date_format: &str) -> Result<Vec<ValidDraft>, ImportError> {
    drafts
        .iter()
        .enumerate()
        .map(|(index, draft)| {
            draft
                .validate(input_date_format)
                .map_err(|source| ImportError::InvalidRow { row: index + 1, source })
        })
        .collect()
}

/// Validates drafts in order and assigns ids.
pub fn build_records(drafts: &[RecordDraft], input_date_format: &str, ids: &mut IdGenerator) -> Result<Vec<IntervalRecord>, ImportError> {
    let valid = validate_drafts(drafts, input_date_format)?;
    valid
        .into_iter()
        .enumerate()
        .map(|(index, draft)| {
            draft
                .into_record(ids.next_id())
                .map_err(|source| ImportError::InvalidRow { row: index + 1, source })
        })
        .collect()
}
