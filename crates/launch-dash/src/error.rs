use launch_records::DatasetError;

use crate::settings::SettingsError;

/// Reasons the dashboard refuses to start.
#[derive(thiserror::Error, Debug)]
pub enum DashError {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error("cannot start dashboard: {0}")]
    Dataset(#[from] DatasetError),
    #[error("window failed: {0}")]
    Ui(#[from] eframe::Error),
}
