use carprice::application::system::Application;
use carprice::config::Config;
use carprice::interfaces::app::{AppState, PricePredictorApp};

use tracing::{Level, error, info};
use tracing_subscriber::prelude::*;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .pretty();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .init();

    info!("Starting Car Price Predictor...");

    // The page still opens on failure, showing the reason instead of the form.
    let state = match Config::from_env().and_then(Application::build) {
        Ok(app) => {
            info!(
                "Model ready: {} ({})",
                app.service.model_name(),
                app.service.model_version()
            );
            AppState::Ready(Box::new(app))
        }
        Err(e) => {
            error!("Failed to start: {:#}", e);
            AppState::StartupFailed {
                message: format!("{:#}", e),
            }
        }
    };

    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([760.0, 900.0])
            .with_title("Car Price Predictor"),
        ..Default::default()
    };

    eframe::run_native(
        "Car Price Predictor",
        native_options,
        Box::new(|cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(PricePredictorApp::new(state)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Eframe error: {}", e))?;

    Ok(())
}
