use ratecast::application::controller::{SubmitEvent, run_submission};
use ratecast::config::Config;
use ratecast::domain::prediction::RequestPayload;
use ratecast::infrastructure::client::HttpPredictionService;
use ratecast::interfaces::ui::FormApp;

use tracing::{Level, info};
use tracing_subscriber::prelude::*;

fn main() -> anyhow::Result<()> {
    // Load env (before reading any configuration)
    dotenvy::dotenv().ok();

    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false).pretty();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .init();

    info!("Ratecast {} starting...", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env()?;
    info!("Prediction service endpoint: {}", config.predict_url);

    // Submission bridge: the UI thread hands validated payloads to a
    // background runtime and receives terminal events back each frame.
    let (submit_tx, submit_rx) = crossbeam_channel::unbounded::<RequestPayload>();
    let (event_tx, event_rx) = crossbeam_channel::unbounded::<SubmitEvent>();

    let endpoint = config.predict_url.clone();
    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("Failed to build Tokio runtime");

        rt.block_on(async move {
            info!("Network worker started.");
            let service = HttpPredictionService::new(endpoint);

            while let Ok(payload) = submit_rx.recv() {
                let event = run_submission(&service, payload).await;
                if event_tx.send(event).is_err() {
                    break;
                }
            }
        });
    });

    // Run UI (blocks main thread)
    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([460.0, 760.0])
            .with_title("Mortgage Rate Predictor"),
        ..Default::default()
    };

    eframe::run_native(
        "Mortgage Rate Predictor",
        native_options,
        Box::new(|_cc| Ok(Box::new(FormApp::new(submit_tx, event_rx)))),
    )
    .map_err(|e| anyhow::anyhow!("Eframe error: {}", e))?;

    Ok(())
}
