//! Reading launch records from CSV or JSON exports.
//!
//! Only the launch site, payload mass, booster category and `class`
//! columns are read; any other column is ignored.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::error::DatasetError;
use crate::record::{Outcome, Row};

/// One record as it appears in the export, before validation.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "Launch Site")]
    pub launch_site: String,
    #[serde(rename = "Payload Mass (kg)")]
    pub payload_mass_kg: f64,
    #[serde(rename = "Booster Version Category")]
    pub booster_version_category: String,
    pub class: i64,
}

impl RawRecord {
    /// `record` is the 1-based position used in error messages.
    fn into_row(self, record: usize) -> Result<Row, DatasetError> {
        let outcome = Outcome::from_class(self.class).ok_or(
            DatasetError::InvalidOutcome {
                record,
                value: self.class,
            },
        )?;
        Ok(Row::new(
            self.launch_site.trim(),
            self.payload_mass_kg,
            self.booster_version_category.trim(),
            outcome,
        ))
    }
}

fn into_rows(
    records: impl IntoIterator<Item = Result<RawRecord, DatasetError>>,
) -> Result<Vec<Row>, DatasetError> {
    records
        .into_iter()
        .enumerate()
        .map(|(i, record)| record?.into_row(i + 1))
        .collect()
}

pub fn read_csv<R: Read>(reader: R) -> Result<Vec<Row>, DatasetError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let rows = into_rows(
        reader
            .deserialize::<RawRecord>()
            .map(|r| r.map_err(DatasetError::from)),
    )?;
    tracing::debug!(rows = rows.len(), "read CSV records");
    Ok(rows)
}

/// Reads a JSON array of records keyed like the CSV headers.
pub fn read_json<R: Read>(reader: R) -> Result<Vec<Row>, DatasetError> {
    let records: Vec<RawRecord> = serde_json::from_reader(reader)?;
    let rows = into_rows(records.into_iter().map(Ok))?;
    tracing::debug!(rows = rows.len(), "read JSON records");
    Ok(rows)
}

/// Pick the reader from the file extension.
pub fn read_path(path: &Path) -> Result<Vec<Row>, DatasetError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("csv") => read_csv(std::fs::File::open(path)?),
        Some("json") => read_json(std::fs::File::open(path)?),
        _ => Err(DatasetError::UnsupportedFormat(path.to_path_buf())),
    }
}
