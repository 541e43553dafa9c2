use std::path::PathBuf;

/// Malformed or empty source data. Fatal: a dashboard cannot start
/// without a valid dataset.
#[derive(thiserror::Error, Debug)]
pub enum DatasetError {
    #[error("dataset has no rows")]
    Empty,
    #[error("record {record}: payload mass {payload_kg} kg is negative")]
    NegativePayload { record: usize, payload_kg: f64 },
    #[error("record {record}: payload mass is not a finite number")]
    NonFinitePayload { record: usize },
    #[error("record {record}: launch site is empty")]
    EmptySite { record: usize },
    #[error("record {record}: outcome class {value} is neither 0 nor 1")]
    InvalidOutcome { record: usize, value: i64 },
    #[error("unsupported dataset format {0:?}, expected .csv or .json")]
    UnsupportedFormat(PathBuf),
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse CSV dataset: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to parse JSON dataset: {0}")]
    Json(#[from] serde_json::Error),
}

/// A control input received an out-of-domain value. Recoverable: the
/// control state is left exactly as it was.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("unknown launch site {0:?}")]
    UnknownSite(String),
    #[error("payload range [{low}, {high}] is inverted")]
    InvertedRange { low: f64, high: f64 },
    #[error("payload range [{low}, {high}] is outside [{min}, {max}]")]
    OutOfBounds {
        low: f64,
        high: f64,
        min: f64,
        max: f64,
    },
    #[error("payload range bounds must be finite numbers")]
    NonFinite,
}
