//! Tenure - how long a member stayed before departing
//!
//! Tenure is measured in whole calendar days between the member's join date
//! and the departure date. Dates carry no time component, so the difference
//! is already the floor of the elapsed days.

use chrono::{NaiveDate, Utc};
use std::fmt;

/// Days in a display month
const DAYS_PER_MONTH: i64 = 30;

/// Current calendar date in UTC
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Whole days between joining and departing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tenure {
    days: i64,
}

impl Tenure {
    /// Tenure from a raw day count
    #[inline]
    pub const fn from_days(days: i64) -> Self {
        Self { days }
    }

    /// Tenure between a join date and a departure date.
    ///
    /// Negative when the departure predates the join date; the value is
    /// stored as computed.
    pub fn between(join_date: NaiveDate, departed_at: NaiveDate) -> Self {
        Self {
            days: departed_at.signed_duration_since(join_date).num_days(),
        }
    }

    /// Tenure for a departure whose member may be unknown.
    ///
    /// A missing join date falls back to today, which yields a tenure near zero.
    pub fn for_departure(join_date: Option<NaiveDate>, departed_at: NaiveDate) -> Self {
        Self::between(join_date.unwrap_or_else(today), departed_at)
    }

    /// Day count
    #[inline]
    pub const fn days(&self) -> i64 {
        self.days
    }

    /// Day count clamped into a 32-bit column
    pub fn days_i32(&self) -> i32 {
        i32::try_from(self.days).unwrap_or(if self.days < 0 { i32::MIN } else { i32::MAX })
    }

    /// Whole 30-day months
    #[inline]
    pub const fn months(&self) -> i64 {
        self.days / DAYS_PER_MONTH
    }
}

impl fmt::Display for Tenure {
    /// Coarse label for listings: months once a month has passed, days before that
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let months = self.months();
        if months > 0 {
            write!(f, "{months} months")
        } else {
            write!(f, "{} days", self.days)
        }
    }
}
