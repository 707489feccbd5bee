use anyhow::{Context, Result};
use rand::Rng;

pub mod configuration;
pub mod error;
pub mod generation;

use configuration::SynthesisConfig;
use hourly_stats::{
    aggregating::HourlyCounts,
    rendering::{BarChartRenderer, ChartLabels},
};

/// Synthesises a sample of tweet timestamps, counts them by hour of the day and renders the resulting distribution.
///
/// The randomness is drawn from `rng`. Callers wanting the run described by `config.seed` should seed it with that value.
pub fn run<T: Rng, R: BarChartRenderer>(
    config: &SynthesisConfig,
    labels: ChartLabels,
    rng: &mut T,
    renderer: &mut R,
) -> Result<HourlyCounts> {
    tracing::info!(
        seed = config.seed,
        sample_size = config.sample_size,
        start = %config.calendar.start(),
        end = %config.calendar.end(),
        "synthesising tweet timestamps"
    );
    let sampled_timestamps = generation::generate_with_rng(config, rng)
        .with_context(|| "The synthesis of tweet timestamps failed")?;
    tracing::info!(
        sampled = sampled_timestamps.len(),
        "synthetic timestamps ready, drawing the hourly distribution"
    );
    hourly_stats::run(&sampled_timestamps, labels, renderer)
}
