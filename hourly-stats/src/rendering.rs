// This module contains functionality related to formatting and drawing bar charts of hourly counts.
use std::{
    fmt::{Display, Formatter},
    io::{BufWriter, Write},
};

use anyhow::{bail, Context, Result};
use itertools::Itertools;

use crate::aggregating::HourlyCounts;

/// The fixed texts surrounding a chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartLabels {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
}

impl Default for ChartLabels {
    fn default() -> Self {
        Self {
            title: "Realistic Synthetic Hourly Distribution of Tweets (Patterned Behavior)"
                .to_string(),
            x_label: "Hour of the Day (00:00 to 23:59 EST)".to_string(),
            y_label: "Number of Tweets (Synthetic Data)".to_string(),
        }
    }
}

/// A bar chart where the i'th value belongs to the i'th category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarChart {
    pub categories: Vec<u32>,
    pub values: Vec<usize>,
    pub labels: ChartLabels,
}

impl BarChart {
    /// One bar per hour of the day, hours 0 to 23 in ascending order.
    pub fn hourly(counts: &HourlyCounts, labels: ChartLabels) -> Self {
        let (categories, values) = counts.iter().unzip();
        Self {
            categories,
            values,
            labels,
        }
    }
}

/// Something capable of displaying a bar chart.
pub trait BarChartRenderer {
    fn render_bar_chart(&mut self, chart: &BarChart) -> Result<()>;
}

/// The number of characters used for the longest bar unless told otherwise.
pub const DEFAULT_BAR_WIDTH: usize = 50;

/// Wider requests are capped to this many characters.
pub const MAX_BAR_WIDTH: usize = 200;

/// Draws bar charts as text, one row per category, onto the given writer.
pub struct TextBarChart<W: Write> {
    buf_writer: BufWriter<W>,
    bar_width: usize,
}

impl<W: Write> TextBarChart<W> {
    pub fn new(writer: W) -> Self {
        Self::with_bar_width(writer, DEFAULT_BAR_WIDTH)
    }

    pub fn with_bar_width(writer: W, bar_width: usize) -> Self {
        Self {
            buf_writer: BufWriter::new(writer),
            bar_width: bar_width.clamp(1, MAX_BAR_WIDTH),
        }
    }
}

impl<W: Write> BarChartRenderer for TextBarChart<W> {
    fn render_bar_chart(&mut self, chart: &BarChart) -> Result<()> {
        if chart.categories.len() != chart.values.len() {
            bail!(
                "The chart has {} categories but {} values",
                chart.categories.len(),
                chart.values.len()
            );
        }
        let bar_width = self.bar_width;
        let max_value = chart.values.iter().copied().max().unwrap_or(0);
        let label_width = chart
            .categories
            .iter()
            .map(|category| format!("{:02}", category).len())
            .max()
            .unwrap_or(2);
        let rule = format!(
            "{}-+-{}",
            "-".repeat(label_width),
            "-".repeat(bar_width + max_value.to_string().len() + 1)
        );

        let header = vec![
            chart.labels.title.clone(),
            String::new(),
            format!("{} (longest bar = {})", chart.labels.y_label, max_value),
            rule.clone(),
        ];
        let rows = chart
            .categories
            .iter()
            .zip_eq(chart.values.iter())
            .map(|(category, value)| {
                BarRow::new(*category, *value, max_value, bar_width, label_width)
                    .to_string()
            });
        let footer = vec![rule, chart.labels.x_label.clone()];

        write_records(
            &mut self.buf_writer,
            header.into_iter().chain(rows).chain(footer),
        )
        .with_context(|| format!("Failed to draw the chart \"{}\"", chart.labels.title))
    }
}

// A single line of a text bar chart: the category, its bar and its value.
struct BarRow {
    category: u32,
    value: usize,
    bar_length: usize,
    label_width: usize,
}

impl BarRow {
    const BAR: &'static str = "█";

    fn new(
        category: u32,
        value: usize,
        max_value: usize,
        bar_width: usize,
        label_width: usize,
    ) -> Self {
        Self {
            category,
            value,
            bar_length: scaled_bar_length(value, max_value, bar_width),
            label_width,
        }
    }
}

impl Display for BarRow {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:>width$} | {}",
            format!("{:02}", self.category),
            Self::BAR.repeat(self.bar_length),
            width = self.label_width
        )?;
        if self.bar_length > 0 {
            write!(f, " ")?;
        }
        write!(f, "{}", self.value)
    }
}

// The number of characters of a bar, relative to the longest bar. Non-zero values always get at least one.
fn scaled_bar_length(value: usize, max_value: usize, bar_width: usize) -> usize {
    if value == 0 || max_value == 0 {
        return 0;
    }
    // bar_width never exceeds MAX_BAR_WIDTH, so the widened product fits for any count
    let (value, max_value, bar_width) = (value as u128, max_value as u128, bar_width as u128);
    (((value * bar_width + max_value / 2) / max_value) as usize).max(1)
}

// Write items from an iterator, one line per item, and flush once everything is written.
fn write_records<W: Write, Record: Display, I: IntoIterator<Item = Record>>(
    buf_writer: &mut BufWriter<W>,
    record_iterator: I,
) -> Result<()> {
    for record in record_iterator {
        writeln!(buf_writer, "{}", record)
            .with_context(|| format!("Failed to write line: {} into the BufWriter", record))?;
    }
    buf_writer
        .flush()
        .with_context(|| "Failed flushing all bytes".to_string())?;
    Ok(())
}
