//! Headless prediction client.
//!
//! Submits one request through the same controller the desktop form uses,
//! suitable for scripting against the prediction service.
//!
//! # Usage
//! ```sh
//! cargo run --bin predict -- \
//!     --fixed-rate-2y-95 4.5 --fixed-rate-2y-75 4.2 --tracker 3.9 \
//!     --variable 4.0 --libor 5.1 --gov-bond 3.5 --date 2024-06-01
//! ```
//!
//! # Environment Variables
//! - `PREDICT_URL` - Prediction service endpoint (default: http://127.0.0.1:5000/predict)

use anyhow::{Context, Result};
use clap::Parser;
use ratecast::application::controller::PredictionController;
use ratecast::config::Config;
use ratecast::domain::prediction::{format_metric, format_rate};
use ratecast::infrastructure::client::HttpPredictionService;
use tracing::{Level, info};
use tracing_subscriber::prelude::*;
use url::Url;

#[derive(Parser, Debug)]
#[command(name = "predict", about = "Submit one mortgage-rate prediction request")]
struct Args {
    /// Fixed 2y rate, 95% LTV
    #[arg(long)]
    fixed_rate_2y_95: String,

    /// Fixed 2y rate, 75% LTV
    #[arg(long)]
    fixed_rate_2y_75: String,

    /// Tracker rate
    #[arg(long)]
    tracker: String,

    /// Variable rate
    #[arg(long)]
    variable: String,

    /// 3-month LIBOR
    #[arg(long)]
    libor: String,

    /// 10y government bond yield
    #[arg(long)]
    gov_bond: String,

    /// Prediction date (YYYY-MM-DD)
    #[arg(long)]
    date: String,

    /// Override the prediction service endpoint
    #[arg(long)]
    url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false).pretty();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::WARN.into()))
        .with(stdout_layer)
        .init();

    let args = Args::parse();

    let mut config = Config::from_env()?;
    if let Some(raw) = &args.url {
        config.predict_url = Url::parse(raw).with_context(|| format!("Invalid --url: {}", raw))?;
    }
    info!("Prediction service endpoint: {}", config.predict_url);

    let service = HttpPredictionService::new(config.predict_url.clone());

    let mut controller = PredictionController::new();
    controller.update_field("Fixed_Rate_2y_95", &args.fixed_rate_2y_95);
    controller.update_field("Fixed_Rate_2y_75", &args.fixed_rate_2y_75);
    controller.update_field("Tracker", &args.tracker);
    controller.update_field("Variable", &args.variable);
    controller.update_field("LIBOR", &args.libor);
    controller.update_field("Gov_Bond", &args.gov_bond);
    controller.update_date(&args.date);

    controller.submit(&service).await;

    let state = controller.state();
    if let Some(result) = &state.prediction {
        println!("Decision Tree Prediction: {}", format_rate(result.tree_prediction));
        println!("Prophet Prediction:       {}", format_rate(result.prophet_prediction));
        println!("Combined Rate:            {}", format_rate(result.combined_rate));
        println!();
        println!("Decision Tree Model Metrics");
        println!("  MSE:      {}", format_metric(result.tree_metrics.mse));
        println!("  MAE:      {}", format_metric(result.tree_metrics.mae));
        println!("  R² Score: {}", format_metric(result.tree_metrics.r2));
        Ok(())
    } else {
        let message = state
            .error
            .clone()
            .unwrap_or_else(|| "Submission produced no outcome".to_string());
        anyhow::bail!(message)
    }
}
