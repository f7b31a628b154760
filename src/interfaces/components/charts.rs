use crate::domain::ports::ChartRenderer;
use crate::domain::report::ComparisonChart;
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;
use egui_plot::{Bar, BarChart, Plot, PlotBounds, PlotPoint, Text};

const CHART_HEIGHT: f32 = 320.0;

/// Draws the comparison chart as an egui_plot bar chart.
pub struct PlotChartRenderer<'a> {
    ui: &'a mut egui::Ui,
}

impl<'a> PlotChartRenderer<'a> {
    pub fn new(ui: &'a mut egui::Ui) -> Self {
        Self { ui }
    }
}

impl ChartRenderer for PlotChartRenderer<'_> {
    fn render_chart(&mut self, chart: &ComparisonChart) {
        let categories: Vec<String> = chart.categories().iter().map(|c| c.to_string()).collect();
        let right_edge = chart.bars.len() as f64 - 0.4;
        let y_max = chart.y_max;

        let bars: Vec<Bar> = chart
            .bars
            .iter()
            .enumerate()
            .map(|(i, bar)| {
                Bar::new(i as f64, bar.value)
                    .name(bar.label)
                    .fill(DesignSystem::color(bar.color))
                    .width(0.6)
            })
            .collect();

        Plot::new("price_comparison")
            .height(CHART_HEIGHT)
            .y_axis_label(chart.y_label)
            .show_grid([false, true])
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .x_axis_formatter(move |mark, _range| {
                // Only whole positions carry a category.
                let idx = mark.value.round();
                if (mark.value - idx).abs() > f64::EPSILON || idx < 0.0 {
                    return String::new();
                }
                categories.get(idx as usize).cloned().unwrap_or_default()
            })
            .show(self.ui, |plot_ui| {
                plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                    [-0.6, 0.0],
                    [right_edge, y_max],
                ));
                plot_ui.bar_chart(BarChart::new("Selling price", bars));

                for (i, bar) in chart.bars.iter().enumerate() {
                    let top = bar.value.max(0.0) + 0.2;
                    plot_ui.text(
                        Text::new(
                            bar.label,
                            PlotPoint::new(i as f64, top),
                            egui::RichText::new(bar.value_label())
                                .size(12.0)
                                .color(DesignSystem::TEXT_PRIMARY),
                        )
                        .anchor(egui::Align2::CENTER_BOTTOM),
                    );
                }
            });
    }
}
