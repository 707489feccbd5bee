// This module contains the parameters a synthesis run is driven by, together with their defaults.
use common_utils::date_utils::CalendarRange;

use crate::error::WindowError;

/// A named range of hours of the day, bounds included, during which tweets are plausible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityWindow {
    name: String,
    first_hour: u32,
    last_hour: u32,
}

impl ActivityWindow {
    const LAST_HOUR_OF_DAY: u32 = 23;

    pub fn new<S: Into<String>>(
        name: S,
        first_hour: u32,
        last_hour: u32,
    ) -> Result<Self, WindowError> {
        let name = name.into();
        for hour in [first_hour, last_hour].iter().copied() {
            if hour > Self::LAST_HOUR_OF_DAY {
                return Err(WindowError::HourOutOfRange(hour));
            }
        }
        if first_hour > last_hour {
            return Err(WindowError::Inverted {
                name,
                first_hour,
                last_hour,
            });
        }
        Ok(Self {
            name,
            first_hour,
            last_hour,
        })
    }

    /// A window covering exactly one hour of the day.
    pub fn single_hour<S: Into<String>>(name: S, hour: u32) -> Result<Self, WindowError> {
        Self::new(name, hour, hour)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contains(&self, hour: u32) -> bool {
        self.first_hour <= hour && hour <= self.last_hour
    }

    /// Commuting to work, lunch break, commuting home and the rest of the evening until bed.
    pub fn defaults() -> Vec<ActivityWindow> {
        let window = |name: &str, first_hour, last_hour| Self {
            name: name.to_string(),
            first_hour,
            last_hour,
        };
        vec![
            window("morning commute", 7, 9),
            window("lunch", 12, 12),
            window("evening commute", 17, 19),
            window("evening", 20, 23),
        ]
    }
}

/// Everything needed to synthesise a sample of tweet timestamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisConfig {
    /// Seed of the pseudo-random generator. The same seed always yields the same sample.
    pub seed: u64,
    /// The calendar dates, both included, tweets may fall on.
    pub calendar: CalendarRange,
    /// An hour is a candidate when it falls in at least one of these.
    pub windows: Vec<ActivityWindow>,
    /// The number of distinct timestamps to draw.
    pub sample_size: usize,
}

impl SynthesisConfig {
    pub const DEFAULT_SEED: u64 = 42;
    /// Around 150 tweets in a month.
    pub const DEFAULT_SAMPLE_SIZE: usize = 150;
    pub const DEFAULT_START: &'static str = "2024-01-01";
    pub const DEFAULT_END: &'static str = "2024-01-31";

    /// January 2024.
    ///
    /// # Panics
    /// Only if DEFAULT_START and DEFAULT_END stop being dates of the form YYYY-MM-DD in order.
    pub fn default_calendar() -> CalendarRange {
        CalendarRange::from_ymd(Self::DEFAULT_START, Self::DEFAULT_END)
            .expect("the default calendar bounds are valid dates in order")
    }
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            seed: Self::DEFAULT_SEED,
            calendar: Self::default_calendar(),
            windows: ActivityWindow::defaults(),
            sample_size: Self::DEFAULT_SAMPLE_SIZE,
        }
    }
}
