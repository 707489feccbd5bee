use super::*;

/// Every hour of a calendar range falling in at least one activity window, in chronological order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidatePool {
    timestamps: Vec<NaiveDateTime>,
}

impl CandidatePool {
    pub fn build(calendar: &CalendarRange, windows: &[ActivityWindow]) -> Self {
        let timestamps = calendar
            .hourly_timestamps()
            .filter(|timestamp| {
                let hour = timestamp.hour();
                windows.iter().any(|window| window.contains(hour))
            })
            .collect();
        Self { timestamps }
    }

    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    pub fn contains(&self, timestamp: &NaiveDateTime) -> bool {
        // chronological order is kept from the calendar enumeration
        self.timestamps.binary_search(timestamp).is_ok()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NaiveDateTime> {
        self.timestamps.iter()
    }

    /// Draws `sample_size` distinct timestamps uniformly at random.
    ///
    /// Fails without consuming any randomness if the pool holds fewer than `sample_size` timestamps.
    pub fn sample<T: Rng>(
        &self,
        sample_size: usize,
        rng: &mut T,
    ) -> Result<SampledTimestamps, SynthesisError> {
        if sample_size > self.len() {
            return Err(SynthesisError::InsufficientPool {
                requested: sample_size,
                available: self.len(),
            });
        }
        let timestamps = self
            .timestamps
            .choose_multiple(rng, sample_size)
            .copied()
            .collect();
        Ok(SampledTimestamps { timestamps })
    }
}
