use crate::application::system::Application;
use crate::domain::ports::ChartRenderer;
use crate::infrastructure::assets::LogoAsset;
use crate::interfaces::components::car_form_panel::render_car_form;
use crate::interfaces::components::card::Card;
use crate::interfaces::components::charts::PlotChartRenderer;
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::view_models::{CarForm, PredictionViewModel};
use eframe::egui;

pub enum AppState {
    Ready(Box<Application>),
    /// The model could not be loaded; the page only explains why.
    StartupFailed { message: String },
}

pub struct PricePredictorApp {
    state: AppState,
    form: CarForm,
    predictions: PredictionViewModel,
}

impl PricePredictorApp {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            form: CarForm::default(),
            predictions: PredictionViewModel::default(),
        }
    }

    fn render_header(ui: &mut egui::Ui, logo: Option<&LogoAsset>) {
        match logo {
            Some(LogoAsset::Loaded { uri, bytes }) => {
                ui.add(
                    egui::Image::from_bytes(uri.clone(), egui::load::Bytes::Shared(bytes.clone()))
                        .max_width(DesignSystem::LOGO_WIDTH),
                );
            }
            Some(missing) => {
                if let Some(warning) = missing.warning() {
                    ui.label(egui::RichText::new(format!("⚠ {}", warning)).color(DesignSystem::WARNING));
                }
            }
            None => {}
        }

        ui.add_space(DesignSystem::SPACING_SMALL);
        ui.heading(
            egui::RichText::new("🚗 Car Selling Price Predictor")
                .size(26.0)
                .strong()
                .color(DesignSystem::TEXT_PRIMARY),
        );
        ui.label(
            egui::RichText::new("Enter the car details below to predict its estimated selling price.")
                .color(DesignSystem::TEXT_SECONDARY),
        );
        ui.add_space(DesignSystem::SPACING_MEDIUM);
    }

    fn render_ready(&mut self, ui: &mut egui::Ui) {
        let AppState::Ready(app) = &self.state else {
            return;
        };

        Self::render_header(ui, Some(&app.logo));

        let clicked = Card::new()
            .title("Car Details")
            .show(ui, |ui| render_car_form(ui, &mut self.form))
            .inner;

        let snapshot = self.form.snapshot();
        if clicked {
            let result = app.service.predict(&snapshot);
            self.predictions.record(snapshot, result);
        }

        let Some(outcome) = self.predictions.current(&snapshot) else {
            return;
        };

        ui.add_space(DesignSystem::SPACING_MEDIUM);
        let (accent, report) = match &outcome.result {
            Ok(report) => (DesignSystem::SUCCESS, Some(report)),
            Err(_) => (DesignSystem::DANGER, None),
        };
        Card::new().accent(accent).show(ui, |ui| {
            ui.label(
                egui::RichText::new(outcome.message())
                    .size(16.0)
                    .strong()
                    .color(accent),
            );
        });

        if let Some(report) = report {
            ui.add_space(DesignSystem::SPACING_LARGE);
            ui.label(
                egui::RichText::new("📊 Price Range Comparison")
                    .size(20.0)
                    .strong()
                    .color(DesignSystem::TEXT_PRIMARY),
            );
            ui.add_space(DesignSystem::SPACING_SMALL);
            PlotChartRenderer::new(ui).render_chart(&report.chart);
        }
    }

    fn render_failure(ui: &mut egui::Ui, message: &str) {
        Self::render_header(ui, None);
        Card::new()
            .title("Model unavailable")
            .accent(DesignSystem::DANGER)
            .show(ui, |ui| {
                ui.label(
                    egui::RichText::new("❌ The prediction model could not be loaded.")
                        .strong()
                        .color(DesignSystem::DANGER),
                );
                ui.add_space(DesignSystem::SPACING_SMALL);
                ui.label(egui::RichText::new(message).monospace().color(DesignSystem::TEXT_SECONDARY));
            });
    }
}

impl eframe::App for PricePredictorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(DesignSystem::theme());

        egui::CentralPanel::default()
            .frame(DesignSystem::main_frame())
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.vertical_centered(|ui| {
                            ui.set_max_width(DesignSystem::CONTENT_WIDTH);
                            let failure = match &self.state {
                                AppState::StartupFailed { message } => Some(message.clone()),
                                AppState::Ready(_) => None,
                            };
                            match failure {
                                Some(message) => Self::render_failure(ui, &message),
                                None => self.render_ready(ui),
                            }
                        });
                    });
            });
    }
}
