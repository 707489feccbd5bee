use anyhow::{Context, Result};
use hourly_stats::rendering::{ChartLabels, TextBarChart};
use rand::prelude::*;
use rand_pcg::Pcg64;
use tracing_subscriber::EnvFilter;
use tweet_synthesiser::configuration::SynthesisConfig;

// Log lines go to stderr so that the chart on stdout stays readable.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Draws the hourly distribution of a month of synthetic tweets following a daily routine:
/// 150 tweets in January 2024 with seed 42.
fn main() -> Result<()> {
    init_tracing();
    let config = SynthesisConfig::default();
    let mut rng = Pcg64::seed_from_u64(config.seed);
    let stdout = std::io::stdout();
    let mut renderer = TextBarChart::new(stdout.lock());
    let counts = tweet_synthesiser::run(&config, ChartLabels::default(), &mut rng, &mut renderer)
        .with_context(|| "The hourly distribution of synthetic tweets could not be produced")?;
    tracing::info!(total = counts.total(), "done");

    Ok(())
}
