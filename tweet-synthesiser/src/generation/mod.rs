use chrono::{NaiveDateTime, Timelike};
use rand::prelude::*;
use rand_pcg::Pcg64;

use common_utils::date_utils::CalendarRange;

use crate::{
    configuration::{ActivityWindow, SynthesisConfig},
    error::SynthesisError,
};

pub mod candidate_pool;

pub use candidate_pool::CandidatePool;

/// Distinct timestamps drawn from a candidate pool. Their order carries no meaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampledTimestamps {
    timestamps: Vec<NaiveDateTime>,
}

impl SampledTimestamps {
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NaiveDateTime> {
        self.timestamps.iter()
    }

    pub fn into_vec(self) -> Vec<NaiveDateTime> {
        self.timestamps
    }
}

impl<'a> IntoIterator for &'a SampledTimestamps {
    type Item = &'a NaiveDateTime;
    type IntoIter = std::slice::Iter<'a, NaiveDateTime>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Synthesises the timestamps described by the configuration using a PCG generator seeded with `config.seed`.
pub fn generate(config: &SynthesisConfig) -> Result<SampledTimestamps, SynthesisError> {
    let mut rng = Pcg64::seed_from_u64(config.seed);
    generate_with_rng(config, &mut rng)
}

/// Synthesises the timestamps described by the configuration, drawing randomness from the given generator.
/// The seed of the configuration is not used.
pub fn generate_with_rng<T: Rng>(
    config: &SynthesisConfig,
    rng: &mut T,
) -> Result<SampledTimestamps, SynthesisError> {
    let pool = CandidatePool::build(&config.calendar, &config.windows);
    tracing::debug!(
        pool_size = pool.len(),
        calendar_days = config.calendar.num_days(),
        windows = ?config
            .windows
            .iter()
            .map(ActivityWindow::name)
            .collect::<Vec<_>>(),
        "built candidate pool"
    );
    pool.sample(config.sample_size, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use std::collections::HashSet;

    fn lunch_only_config(sample_size: usize) -> SynthesisConfig {
        SynthesisConfig {
            seed: 7,
            calendar: CalendarRange::from_ymd("2024-01-01", "2024-01-02").unwrap(),
            windows: vec![ActivityWindow::single_hour("lunch", 12).unwrap()],
            sample_size,
        }
    }

    #[test]
    fn sample_has_requested_size_of_distinct_pool_members() {
        let config = SynthesisConfig::default();
        let pool = CandidatePool::build(&config.calendar, &config.windows);
        let sampled = generate(&config).unwrap();
        assert_eq!(150, sampled.len());
        let distinct: HashSet<&NaiveDateTime> = sampled.iter().collect();
        assert_eq!(150, distinct.len());
        assert!(sampled.iter().all(|timestamp| pool.contains(timestamp)));
    }

    #[test]
    fn same_seed_same_sample() {
        let config = SynthesisConfig::default();
        assert_eq!(generate(&config).unwrap(), generate(&config).unwrap());
        let mut rng = Pcg64::seed_from_u64(config.seed);
        assert_eq!(
            generate(&config).unwrap(),
            generate_with_rng(&config, &mut rng).unwrap()
        );
    }

    #[test]
    fn different_seeds_different_samples() {
        let config = SynthesisConfig::default();
        let other = SynthesisConfig {
            seed: 43,
            ..config.clone()
        };
        assert_ne!(generate(&config).unwrap(), generate(&other).unwrap());
    }

    #[test]
    fn whole_lunch_pool_can_be_drawn() {
        let mut sampled = generate(&lunch_only_config(2)).unwrap().into_vec();
        sampled.sort();
        let expected: Vec<NaiveDateTime> = ["2024-01-01 12:00:00", "2024-01-02 12:00:00"]
            .iter()
            .map(|x| NaiveDateTime::parse_from_str(x, "%Y-%m-%d %H:%M:%S").unwrap())
            .collect();
        assert_eq!(expected, sampled);
    }

    #[test]
    fn oversized_sample_is_rejected() {
        assert_eq!(
            Err(SynthesisError::InsufficientPool {
                requested: 3,
                available: 2
            }),
            generate(&lunch_only_config(3))
        );
        let one_day = SynthesisConfig {
            calendar: CalendarRange::from_ymd("2024-01-01", "2024-01-01").unwrap(),
            sample_size: 100_000,
            ..SynthesisConfig::default()
        };
        assert_eq!(
            Err(SynthesisError::InsufficientPool {
                requested: 100_000,
                available: 11
            }),
            generate(&one_day)
        );
    }

    #[test]
    fn mocked_randomness_still_yields_valid_sample() {
        let config = SynthesisConfig {
            sample_size: 20,
            ..SynthesisConfig::default()
        };
        let pool = CandidatePool::build(&config.calendar, &config.windows);
        let first = generate_with_rng(&config, &mut StepRng::new(0, 1)).unwrap();
        let second = generate_with_rng(&config, &mut StepRng::new(0, 1)).unwrap();
        assert_eq!(first, second);
        assert_eq!(20, first.iter().collect::<HashSet<_>>().len());
        assert!(first.iter().all(|timestamp| pool.contains(timestamp)));
    }

    #[test]
    fn sampled_hours_follow_the_windows() {
        let config = SynthesisConfig::default();
        let sampled = generate(&config).unwrap();
        assert!(sampled
            .iter()
            .all(|x| config.windows.iter().any(|window| window.contains(x.hour()))));
    }
}
