//! Overlap-aware aggregation of interval records.
//!
//! Records are walked in start order while tracking the furthest end seen so
//! far. Each interval's start is clipped to that furthest end, so time that
//! was already counted is never counted again. The clipped span is measured
//! with [`DateDifference::between`] and summed into the record's category
//! without carrying. Both totals are then normalized (30-day months,
//! 12-month years).
//!
//! Clipping is shared across categories: once a date has been counted as
//! active it is not counted again as leave, and the reverse also holds.
//!
//! ## Usage
//!
//! ```rust
//! use tenure::libs::aggregator::Aggregate;
//! use tenure::libs::record::IntervalRecord;
//!
//! fn totals(records: &[IntervalRecord]) {
//!     let result = records.aggregate();
//!     println!("{} / {}", result.active, result.leave);
//! }
//! ```

use crate::libs::date_diff::DateDifference;
use crate::libs::record::{Category, IntervalRecord, RecordId};
use chrono::NaiveDate;
use serde::Serialize;

/// Normalized per-category totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AggregateResult {
    pub active: DateDifference,
    pub leave: DateDifference,
}

impl AggregateResult {
    pub fn get(&self, category: Category) -> DateDifference {
        match category {
            Category::Active => self.active,
            Category::Leave => self.leave,
        }
    }

    fn slot(&mut self, category: Category) -> &mut DateDifference {
        match category {
            Category::Active => &mut self.active,
            Category::Leave => &mut self.leave,
        }
    }
}

/// What one record adds to its category after overlap clipping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contribution {
    pub id: RecordId,
    pub category: Category,
    pub start: NaiveDate,
    /// Start after clipping to the furthest end counted before this record.
    pub effective_start: NaiveDate,
    pub end: NaiveDate,
    /// `None` when the record is empty or fully covered by earlier records.
    pub difference: Option<DateDifference>,
}

impl Contribution {
    pub fn is_clipped(&self) -> bool {
        self.effective_start != self.start
    }
}

/// Computes the clipped contribution of every record, in start order.
///
/// The input is left untouched; sorting happens on a copy of the references.
/// Ties on `start` keep their input order.
pub fn contributions(records: &[IntervalRecord]) -> Vec<Contribution> {
    let mut sorted: Vec<&IntervalRecord> = records.iter().collect();
    sorted.sort_by_key(|r| r.start());

    let mut furthest_end: Option<NaiveDate> = None;
    let mut result = Vec::with_capacity(sorted.len());

    for record in sorted {
        let effective_start = match furthest_end {
            Some(end) => record.start().max(end),
            None => record.start(),
        };

        let difference = if effective_start < record.end() {
            DateDifference::between(effective_start, record.end()).ok()
        } else {
            None
        };

        if effective_start != record.start() {
            tracing::debug!(
                record = %record.id(),
                start = %record.start(),
                effective_start = %effective_start,
                end = %record.end(),
                "clipped overlapping interval"
            );
        }

        furthest_end = Some(furthest_end.map_or(record.end(), |end| end.max(record.end())));

        result.push(Contribution {
            id: record.id(),
            category: record.category(),
            start: record.start(),
            effective_start,
            end: record.end(),
            difference,
        });
    }

    result
}

/// Sums the clipped contributions per category and normalizes both totals.
pub fn aggregate(records: &[IntervalRecord]) -> AggregateResult {
    let mut totals = AggregateResult::default();
    for contribution in contributions(records) {
        if let Some(difference) = contribution.difference {
            *totals.slot(contribution.category) += difference;
        }
    }

    let result = AggregateResult {
        active: totals.active.normalized(),
        leave: totals.leave.normalized(),
    };
    tracing::debug!(records = records.len(), active = %result.active, leave = %result.leave, "aggregated records");
    result
}

/// Aggregation over any collection of records.
pub trait Aggregate {
    fn aggregate(&self) -> AggregateResult;
    fn contributions(&self) -> Vec<Contribution>;
}

impl Aggregate for [IntervalRecord] {
    fn aggregate(&self) -> AggregateResult {
        aggregate(self)
    }

    fn contributions(&self) -> Vec<Contribution> {
        contributions(self)
    }
}

impl Aggregate for Vec<IntervalRecord> {
    fn aggregate(&self) -> AggregateResult {
        aggregate(self)
    }

    fn contributions(&self) -> Vec<Contribution> {
        contributions(self)
    }
}
