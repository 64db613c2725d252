//! Gregorian calendar helpers.
//!
//! Chrono has no year/month/day difference of its own (nothing like
//! Python's `relativedelta`), so the borrow rules used by
//! [`DateDifference`](crate::libs::date_diff::DateDifference) need the
//! month lengths spelled out here.

use chrono::{Datelike, NaiveDate};

/// Leap-year rule (Gregorian):
///   - divisible by 4 → leap year
///   - except divisible by 100 → not leap year
///   - except divisible by 400 → leap year
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns the number of days in a given year/month (handles leap years).
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 30, // chrono never hands out other months; keeps the function total
    }
}

/// The (year, month) before `year`/`month`. January steps back to December.
pub fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

/// Length of the month immediately preceding `date`'s month.
///
/// January borrows from December of the previous year.
pub fn days_in_previous_month(date: NaiveDate) -> u32 {
    let (year, month) = previous_month(date.year(), date.month());
    days_in_month(year, month)
}
