use crate::domain::report::ComparisonChart;

/// Draws the price comparison chart on some surface (egui plot, terminal...).
pub trait ChartRenderer {
    fn render_chart(&mut self, chart: &ComparisonChart);
}
