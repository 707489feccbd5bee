// This module buckets timestamps by their hour of the day.
use std::ops::RangeInclusive;

use chrono::{NaiveDateTime, Timelike};

pub const HOURS_PER_DAY: usize = 24;

/// The number of timestamps falling in each hour of the day.
///
/// Every hour from 0 to 23 is present, hours without any timestamps have a count of zero.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HourlyCounts {
    counts: [usize; HOURS_PER_DAY],
}

impl HourlyCounts {
    /// The hours of the day in ascending order.
    pub fn hours() -> RangeInclusive<u32> {
        0..=(HOURS_PER_DAY as u32 - 1)
    }

    /// The count for the given hour. Hours beyond 23 never occur and yield zero.
    pub fn count(&self, hour: u32) -> usize {
        self.counts.get(hour as usize).copied().unwrap_or(0)
    }

    /// The counts ordered by hour, position i holding the count of hour i.
    pub fn values(&self) -> &[usize] {
        &self.counts[..]
    }

    /// (hour, count) pairs for every hour of the day in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, usize)> + '_ {
        Self::hours().zip(self.counts.iter().copied())
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// The hour with the highest count, the earliest one on ties. None if nothing was counted.
    pub fn peak_hour(&self) -> Option<u32> {
        self.iter()
            .filter(|(_, count)| *count > 0)
            .fold(None, |best, (hour, count)| match best {
                Some((_, best_count)) if best_count >= count => best,
                _ => Some((hour, count)),
            })
            .map(|(hour, _)| hour)
    }
}

/// Counts the given timestamps by hour of the day. The order of the timestamps is irrelevant.
pub fn aggregate_by_hour<'a, I>(timestamps: I) -> HourlyCounts
where
    I: IntoIterator<Item = &'a NaiveDateTime>,
{
    let mut counts = [0usize; HOURS_PER_DAY];
    for timestamp in timestamps {
        // hour() is always below 24.
        counts[timestamp.hour() as usize] += 1;
    }
    HourlyCounts { counts }
}
