#![cfg(not(target_arch = "wasm32"))]

use std::path::PathBuf;

use clap::Parser;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::error::DashError;
use crate::settings::DashboardSettings;
use crate::store::{DatasetSource, Store};
use crate::create_app;

/// Explore launch records by site and payload mass.
#[derive(Parser, Debug)]
#[command(name = "launch-dash", version)]
pub struct Args {
    /// CSV or JSON launch records; the bundled sample when omitted
    #[arg(long, env = "LAUNCH_DASH_DATASET")]
    pub dataset: Option<PathBuf>,
    /// Settings file; ./dashboard.json is used when present
    #[arg(long)]
    pub settings: Option<PathBuf>,
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Entry point used by the native executable.
pub fn run(args: Args) -> Result<(), DashError> {
    let mut settings = DashboardSettings::resolve(args.settings.as_deref())?;
    if let Some(path) = args.dataset {
        settings.dataset = Some(path);
    }

    let source = settings
        .dataset
        .clone()
        .map_or(DatasetSource::Bundled, DatasetSource::File);
    let session = source.open()?;
    tracing::info!(%source, "starting dashboard");

    let title = settings.window_title.clone();
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title.clone())
            .with_inner_size([960.0, 1000.0]),
        ..Default::default()
    };
    let store = Store::new(session, source, settings);

    eframe::run_native(
        &title,
        native_options,
        Box::new(|cc| Ok(Box::new(create_app(cc, store)))),
    )?;
    Ok(())
}
