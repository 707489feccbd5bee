use anyhow::{Context, Result};
use chrono::NaiveDateTime;

pub mod aggregating;
pub mod rendering;

use aggregating::HourlyCounts;
use rendering::{BarChart, BarChartRenderer, ChartLabels};

/// Counts the given timestamps by hour of the day and hands the resulting histogram to the renderer.
///
/// The returned counts are the ones that were drawn. A renderer failing to display the chart aborts the run.
pub fn run<'a, I, R>(timestamps: I, labels: ChartLabels, renderer: &mut R) -> Result<HourlyCounts>
where
    I: IntoIterator<Item = &'a NaiveDateTime>,
    R: BarChartRenderer,
{
    let counts = aggregating::aggregate_by_hour(timestamps);
    tracing::info!(
        total = counts.total(),
        peak_hour = ?counts.peak_hour(),
        "aggregated timestamps by hour"
    );
    let chart = BarChart::hourly(&counts, labels);
    renderer
        .render_bar_chart(&chart)
        .with_context(|| "The hourly distribution could not be displayed")?;
    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    // Keeps every chart it is asked to draw.
    #[derive(Default)]
    struct RecordingRenderer {
        charts: Vec<BarChart>,
    }

    impl BarChartRenderer for RecordingRenderer {
        fn render_bar_chart(&mut self, chart: &BarChart) -> Result<()> {
            self.charts.push(chart.clone());
            Ok(())
        }
    }

    struct FailingRenderer;

    impl BarChartRenderer for FailingRenderer {
        fn render_bar_chart(&mut self, _chart: &BarChart) -> Result<()> {
            anyhow::bail!("no display available")
        }
    }

    fn timestamps() -> Vec<NaiveDateTime> {
        (1..=3)
            .map(|day| {
                NaiveDate::from_ymd_opt(2024, 1, day)
                    .unwrap()
                    .and_hms_opt(8, 0, 0)
                    .unwrap()
            })
            .collect()
    }

    #[test]
    fn renderer_receives_the_hourly_counts() {
        let mut renderer = RecordingRenderer::default();
        let counts = run(&timestamps(), ChartLabels::default(), &mut renderer).unwrap();
        assert_eq!(1, renderer.charts.len());
        let chart = &renderer.charts[0];
        assert_eq!(counts.values(), &chart.values[..]);
        assert_eq!(3, chart.values[8]);
        assert_eq!(ChartLabels::default(), chart.labels);
    }

    #[test]
    fn rendering_faults_abort_the_run() {
        assert!(run(&timestamps(), ChartLabels::default(), &mut FailingRenderer).is_err());
    }
}
