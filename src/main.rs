mod config;
mod engine;
mod error;
mod model;
mod ui;

use eframe::egui;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::engine::llm_client::{CompletionClient, OpenAiClient};

fn main() -> eframe::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let backend = connect().map_err(|e| {
        error!(error = %e, "story generation unavailable");
        format!("{e:#}")
    });
    let settings = ui::settings_io::load_settings();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Storytelling with AI")
            .with_inner_size([1100.0, 780.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Storytelling with AI",
        options,
        Box::new(move |_cc| Ok(Box::new(ui::app::StoryApp::new(backend, settings)))),
    )
}

/// Resolves the credential and builds the completion client once per process.
fn connect() -> anyhow::Result<Box<dyn CompletionClient>> {
    let config = AppConfig::from_env()?;
    info!(
        base_url = %config.base_url,
        timeout_secs = config.request_timeout.as_secs(),
        "configuration loaded"
    );

    let client = OpenAiClient::new(&config)?;
    Ok(Box::new(client))
}
