//! # Date utilities
//!
//! This module yields utilities for parsing dates of the form YYYY-MM-DD and for enumerating
//! every hour of an inclusive range of calendar dates.
//!

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;

/// The format dates are expected to be supplied in.
pub const YMD_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalendarError {
    #[error("the supplied string {0:?} is not a date of the form YYYY-MM-DD")]
    InvalidDate(String),
    #[error("the calendar range ends on {end} which is before its start on {start}")]
    EndBeforeStart { start: NaiveDate, end: NaiveDate },
}

/// Parses a string of the form YYYY-MM-DD into a date.
pub fn parse_ymd(date_ymd: &str) -> Result<NaiveDate, CalendarError> {
    NaiveDate::parse_from_str(date_ymd, YMD_FORMAT)
        .map_err(|_| CalendarError::InvalidDate(date_ymd.to_string()))
}

/// An inclusive range of calendar dates.
///
/// Both bounds contribute all 24 of their hours, so the range from 2024-01-01 to 2024-01-02
/// covers 48 hourly timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl CalendarRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, CalendarError> {
        if end < start {
            return Err(CalendarError::EndBeforeStart { start, end });
        }
        Ok(Self { start, end })
    }

    /// Builds a range from two strings of the form YYYY-MM-DD.
    pub fn from_ymd(start: &str, end: &str) -> Result<Self, CalendarError> {
        Self::new(parse_ymd(start)?, parse_ymd(end)?)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// The number of calendar days covered, bounds included.
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    pub fn contains(&self, timestamp: &NaiveDateTime) -> bool {
        let date = timestamp.date();
        self.start <= date && date <= self.end
    }

    /// Produces every hourly timestamp of the range in chronological order, starting at midnight
    /// of the first day and ending at 23:00 of the last.
    pub fn hourly_timestamps(&self) -> impl Iterator<Item = NaiveDateTime> {
        let first = self.start.and_time(NaiveTime::MIN);
        (0..self.num_days() * 24).map(move |offset| first + Duration::hours(offset))
    }
}
