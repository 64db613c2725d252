//! In-memory record list owned by a session.
//!
//! The store is the single mutable owner of the records. Aggregation only
//! ever sees a borrowed snapshot of it. Nothing is written to disk: a
//! session's records disappear with the session.

use crate::libs::aggregator::{self, AggregateResult, Contribution};
use crate::libs::record::{IdGenerator, IntervalRecord, RecordDraft, RecordError, RecordId, ValidDraft};

#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<IntervalRecord>,
    ids: IdGenerator,
}

impl RecordStore {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            ids: IdGenerator::new(),
        }
    }

    /// Validates `draft` and appends the resulting record.
    pub fn add(&mut self, draft: &RecordDraft, input_date_format: &str) -> Result<RecordId, RecordError> {
        let valid = draft.validate(input_date_format)?;
        self.insert(valid)
    }

    /// Appends an already validated draft under a fresh id.
    pub fn insert(&mut self, valid: ValidDraft) -> Result<RecordId, RecordError> {
        let record = valid.into_record(self.ids.next_id())?;
        let id = record.id();
        tracing::debug!(record = %id, key = %record.key(), "record added");
        self.records.push(record);
        Ok(id)
    }

    pub fn get(&self, id: RecordId) -> Option<&IntervalRecord> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Removes a record. Unknown ids are a no-op and return `None`.
    pub fn delete(&mut self, id: RecordId) -> Option<IntervalRecord> {
        let position = self.records.iter().position(|r| r.id() == id)?;
        tracing::debug!(record = %id, "record deleted");
        Some(self.records.remove(position))
    }

    /// Edit is delete + re-add: removes the record and hands back its fields
    /// as a pre-filled draft.
    pub fn take_for_edit(&mut self, id: RecordId, input_date_format: &str) -> Option<RecordDraft> {
        self.delete(id).map(|record| record.to_draft(input_date_format))
    }

    /// Drops every record and returns how many were removed.
    pub fn clear(&mut self) -> usize {
        let count = self.records.len();
        self.records.clear();
        tracing::debug!(count, "records cleared");
        count
    }

    /// Records in insertion order.
    pub fn records(&self) -> &[IntervalRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn aggregate(&self) -> AggregateResult {
        aggregator::aggregate(&self.records)
    }

    pub fn contributions(&self) -> Vec<Contribution> {
        aggregator::contributions(&self.records)
    }
}
