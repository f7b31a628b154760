use anyhow::Context;
use carprice::application::system::Application;
use carprice::config::Config;
use carprice::domain::car::{CarDetails, FuelType, PreviousOwners, SellerType, Transmission};
use carprice::domain::errors::PredictionError;
use carprice::domain::report::PriceReport;
use carprice::interfaces::text_chart::TextChartRenderer;
use clap::Parser;
use serde::Serialize;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;

/// Estimate a used car's selling price from the command line.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Current ex-showroom price, in lakhs
    #[arg(long)]
    present_price: f64,

    /// Kilometres driven
    #[arg(long)]
    kms_driven: u64,

    /// Number of previous owners (0-3)
    #[arg(long, default_value = "0")]
    owner: PreviousOwners,

    /// Age of the car in years
    #[arg(long, allow_negative_numbers = true)]
    age: i32,

    /// petrol, diesel or cng
    #[arg(long, default_value = "petrol")]
    fuel_type: FuelType,

    /// dealer or individual
    #[arg(long, default_value = "dealer")]
    seller_type: SellerType,

    /// manual or automatic
    #[arg(long, default_value = "manual")]
    transmission: Transmission,

    /// Model artifact to load instead of CARPRICE_MODEL_PATH
    #[arg(long)]
    model: Option<PathBuf>,

    /// Print the report as JSON instead of text
    #[arg(long)]
    json: bool,
}

impl Args {
    fn details(&self) -> CarDetails {
        CarDetails {
            present_price: self.present_price,
            kms_driven: self.kms_driven,
            owners: self.owner,
            age_years: self.age,
            fuel_type: self.fuel_type,
            seller_type: self.seller_type,
            transmission: self.transmission,
        }
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    model: &'a str,
    version: &'a str,
    input: &'a CarDetails,
    report: &'a PriceReport,
}

fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::WARN.into()),
        )
        .init();

    let args = Args::parse();

    let mut config = Config::from_env()?;
    if let Some(model) = &args.model {
        config.model_path = model.clone();
    }
    let app = Application::build(config)?;
    let details = args.details();

    let result = if args.json {
        app.service.predict(&details)
    } else {
        let mut renderer = TextChartRenderer::new(io::stdout().lock());
        let result = app.service.predict_and_render(&details, &mut renderer);
        drop(renderer.finish().context("Failed to write chart")?);
        result
    };

    match result {
        Ok(report) if args.json => {
            let out = JsonReport {
                model: app.service.model_name(),
                version: app.service.model_version(),
                input: &details,
                report: &report,
            };
            println!("{}", serde_json::to_string_pretty(&out)?);
            Ok(ExitCode::SUCCESS)
        }
        Ok(report) => {
            println!();
            println!("💰 {}", report.headline());
            Ok(ExitCode::SUCCESS)
        }
        Err(PredictionError::Rejected(e)) => {
            eprintln!("❌ {}", e);
            Ok(ExitCode::from(2))
        }
        Err(e) => Err(e.into()),
    }
}
