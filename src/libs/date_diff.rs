//! Calendar-aware year/month/day differences between two dates.
//!
//! A [`DateDifference`] is a calendar-relative duration, not a count of
//! elapsed days: "1 month" between January 15 and February 15 is 31 days,
//! between February 15 and March 15 it is 28 or 29.
//!
//! The subtraction borrows the way people count on a calendar:
//!   • day underflow borrows the length of the month preceding the end date
//!   • month underflow borrows twelve months from the years
//!   • leap years are honoured through [`calendar::days_in_month`]
//!
//! A short February can leave the days negative after one borrow
//! (January 31 to March 1 is `1 - 31 + 28`). January is then borrowed too,
//! so the span becomes 0 months and 29 days. Both cases are undone by
//! [`DateDifference::apply_to`], which rolls a start day that is missing from
//! the target month into the following month.
//!
//! Summing differences is componentwise; [`DateDifference::normalized`]
//! then applies the 30-day month / 12-month year carry used for totals.

use crate::libs::calendar;
use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};
use thiserror::Error;

/// Days carried into one month during normalization.
pub const DAYS_PER_MONTH: u32 = 30;

/// Months carried into one year during normalization.
pub const MONTHS_PER_YEAR: u32 = 12;

/// Errors raised when computing a [`DateDifference`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// The interval runs backwards.
    #[error("start date {start} is after end date {end}")]
    StartAfterEnd { start: NaiveDate, end: NaiveDate },
}

/// A (years, months, days) span between two calendar dates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateDifference {
    pub years: u32,
    pub months: u32,
    pub days: u32,
}

impl DateDifference {
    pub fn new(years: u32, months: u32, days: u32) -> Self {
        Self { years, months, days }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    pub fn is_zero(&self) -> bool {
        self.years == 0 && self.months == 0 && self.days == 0
    }

    /// Computes the raw calendar difference from `start` to `end`.
    ///
    /// The result is not normalized: every component stays in its natural
    /// calendar range (months < 12, days < 31).
    ///
    /// # Errors
    ///
    /// Returns [`DateError::StartAfterEnd`] when `start > end`. A reversed
    /// interval never produces a negative or wrapped span.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chrono::NaiveDate;
    /// use tenure::libs::date_diff::DateDifference;
    ///
    /// let start = NaiveDate::from_ymd_opt(2024, 2, 28).unwrap();
    /// let end = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    /// assert_eq!(DateDifference::between(start, end)?, DateDifference::new(0, 0, 2));
    /// # Ok::<(), tenure::libs::date_diff::DateError>(())
    /// ```
    pub fn between(start: NaiveDate, end: NaiveDate) -> Result<Self, DateError> {
        if start > end {
            return Err(DateError::StartAfterEnd { start, end });
        }

        let mut years = end.year() - start.year();
        let mut months = end.month() as i32 - start.month() as i32;
        let mut days = end.day() as i32 - start.day() as i32;

        // Fix day underflow
        if days < 0 {
            months -= 1;
            days += calendar::days_in_previous_month(end) as i32;

            // Only February is short enough to get here
            if days < 0 {
                months -= 1;
                let (year, month) = calendar::previous_month(end.year(), end.month());
                let (year, month) = calendar::previous_month(year, month);
                days += calendar::days_in_month(year, month) as i32;
            }
        }

        // Fix month underflow
        if months < 0 {
            years -= 1;
            months += 12;
        }

        Ok(Self {
            years: years as u32,
            months: months as u32,
            days: days as u32,
        })
    }

    /// Carries excess days into months (÷30), then excess months into years (÷12).
    ///
    /// This is the fixed-length approximation applied to aggregated totals,
    /// not calendar arithmetic.
    ///
    /// ```rust
    /// use tenure::libs::date_diff::DateDifference;
    ///
    /// assert_eq!(DateDifference::new(0, 0, 65).normalized(), DateDifference::new(0, 2, 5));
    /// ```
    pub fn normalized(self) -> Self {
        let mut result = self;
        if result.days >= DAYS_PER_MONTH {
            result.months += result.days / DAYS_PER_MONTH;
            result.days %= DAYS_PER_MONTH;
        }
        if result.months >= MONTHS_PER_YEAR {
            result.years += result.months / MONTHS_PER_YEAR;
            result.months %= MONTHS_PER_YEAR;
        }
        result
    }

    /// Advances `start` by this span: whole months first, then days.
    ///
    /// A start day missing from the target month rolls over into the next
    /// one (March 31 + 1 month is May 1). This is the inverse of
    /// [`DateDifference::between`]. Returns `None` past chrono's date range.
    ///
    /// ```rust
    /// use chrono::NaiveDate;
    /// use tenure::libs::date_diff::DateDifference;
    ///
    /// let start = NaiveDate::from_ymd_opt(2021, 3, 31).unwrap();
    /// let end = DateDifference::new(0, 1, 29).apply_to(start);
    /// assert_eq!(end, NaiveDate::from_ymd_opt(2021, 5, 30));
    /// ```
    pub fn apply_to(&self, start: NaiveDate) -> Option<NaiveDate> {
        let month_index = i64::from(start.year()) * 12
            + i64::from(start.month0())
            + i64::from(self.years) * 12
            + i64::from(self.months);
        let year = i32::try_from(month_index.div_euclid(12)).ok()?;
        let month = u32::try_from(month_index.rem_euclid(12)).ok()? + 1;

        let offset = u64::from(start.day() - 1) + u64::from(self.days);
        NaiveDate::from_ymd_opt(year, month, 1)?.checked_add_days(Days::new(offset))
    }
}

impl Add for DateDifference {
    type Output = DateDifference;

    /// Componentwise sum, no carrying.
    fn add(self, rhs: Self) -> Self::Output {
        DateDifference {
            years: self.years + rhs.years,
            months: self.months + rhs.months,
            days: self.days + rhs.days,
        }
    }
}

impl AddAssign for DateDifference {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl fmt::Display for DateDifference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} year{}, {} month{}, {} day{}",
            self.years,
            plural(self.years),
            self.months,
            plural(self.months),
            self.days,
            plural(self.days)
        )
    }
}

fn plural(n: u32) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}
