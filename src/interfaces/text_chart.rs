use crate::domain::ports::ChartRenderer;
use crate::domain::report::ComparisonChart;
use std::io::{self, Write};

const DEFAULT_WIDTH: usize = 40;

/// Horizontal bar chart for terminals.
///
/// Write errors are kept and surfaced by `finish`, since the renderer
/// interface itself cannot fail.
pub struct TextChartRenderer<W: Write> {
    out: W,
    width: usize,
    error: Option<io::Error>,
}

impl<W: Write> TextChartRenderer<W> {
    pub fn new(out: W) -> Self {
        Self::with_width(out, DEFAULT_WIDTH)
    }

    pub fn with_width(out: W, width: usize) -> Self {
        Self {
            out,
            width: width.max(1),
            error: None,
        }
    }

    pub fn finish(self) -> io::Result<W> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.out),
        }
    }

    fn bar_length(&self, value: f64, y_max: f64) -> usize {
        if y_max <= 0.0 || value <= 0.0 {
            return 0;
        }
        ((value / y_max) * self.width as f64).round() as usize
    }

    fn write_chart(&mut self, chart: &ComparisonChart) -> io::Result<()> {
        let label_width = chart
            .bars
            .iter()
            .map(|b| b.label.chars().count())
            .max()
            .unwrap_or(0);

        writeln!(
            self.out,
            "Price Range Comparison ({}, axis 0 to {})",
            chart.y_label, chart.y_max
        )?;
        for bar in &chart.bars {
            let len = self.bar_length(bar.value, chart.y_max);
            writeln!(
                self.out,
                "{:<label_width$} | {:<width$} {}",
                bar.label,
                "█".repeat(len),
                bar.value_label(),
                width = self.width,
            )?;
        }
        self.out.flush()
    }
}

impl<W: Write> ChartRenderer for TextChartRenderer<W> {
    fn render_chart(&mut self, chart: &ComparisonChart) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = self.write_chart(chart) {
            self.error = Some(e);
        }
    }
}
