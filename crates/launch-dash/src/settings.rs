use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings file picked up from the working directory when no explicit
/// `--settings` path is given.
pub const DEFAULT_SETTINGS_FILE: &str = "dashboard.json";

/// Common slider metadata so bounds live in one place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderRange {
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

impl SliderRange {
    pub const fn new(min: f32, max: f32, step: f32) -> Self {
        Self { min, max, step }
    }
}

pub const PIE_DIAMETER_RANGE: SliderRange =
    SliderRange::new(120.0, 600.0, 10.0);
pub const POINT_RADIUS_RANGE: SliderRange =
    SliderRange::new(1.0, 12.0, 0.5);

#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("failed to read settings {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse settings {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardSettings {
    /// CSV or JSON export to open; the bundled sample when unset.
    pub dataset: Option<PathBuf>,
    pub window_title: String,
    /// Granularity of the payload range slider, in kilograms.
    pub payload_step_kg: f64,
    pub pie_diameter: f32,
    pub point_radius: f32,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            dataset: None,
            window_title: "SpaceX Launch Records Dashboard".to_owned(),
            payload_step_kg: 1000.0,
            pie_diameter: 320.0,
            point_radius: 4.0,
        }
    }
}

impl DashboardSettings {
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let raw = std::fs::read_to_string(path).map_err(|source| {
            SettingsError::Read {
                path: path.to_path_buf(),
                source,
            }
        })?;
        let mut settings: Self =
            serde_json::from_str(&raw).map_err(|source| {
                SettingsError::Parse {
                    path: path.to_path_buf(),
                    source,
                }
            })?;
        settings.sanitize();
        Ok(settings)
    }

    /// Explicit file if given, otherwise `dashboard.json` when present,
    /// otherwise defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, SettingsError> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let fallback = Path::new(DEFAULT_SETTINGS_FILE);
                if fallback.exists() {
                    Self::load(fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Keep widget sizes inside their slider ranges and the payload step
    /// positive.
    fn sanitize(&mut self) {
        if !(self.payload_step_kg.is_finite() && self.payload_step_kg > 0.0) {
            tracing::warn!(
                step = self.payload_step_kg,
                "invalid payload step, using default"
            );
            self.payload_step_kg = Self::default().payload_step_kg;
        }
        self.pie_diameter = self
            .pie_diameter
            .clamp(PIE_DIAMETER_RANGE.min, PIE_DIAMETER_RANGE.max);
        self.point_radius = self
            .point_radius
            .clamp(POINT_RADIUS_RANGE.min, POINT_RADIUS_RANGE.max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn partial_file_keeps_defaults_for_missing_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dashboard.json");
        std::fs::write(&path, r#"{ "dataset": "launches.csv" }"#).unwrap();

        let settings = DashboardSettings::load(&path).unwrap();
        assert_eq!(settings.dataset, Some(PathBuf::from("launches.csv")));
        assert_eq!(settings.payload_step_kg, 1000.0);
        assert_eq!(
            settings.window_title,
            DashboardSettings::default().window_title
        );
    }

    #[test]
    fn out_of_range_values_are_sanitized() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dashboard.json");
        std::fs::write(
            &path,
            r#"{ "payload_step_kg": -5.0, "pie_diameter": 5000.0,
                 "point_radius": 0.0 }"#,
        )
        .unwrap();

        let settings = DashboardSettings::load(&path).unwrap();
        assert_eq!(settings.payload_step_kg, 1000.0);
        assert_eq!(settings.pie_diameter, PIE_DIAMETER_RANGE.max);
        assert_eq!(settings.point_radius, POINT_RADIUS_RANGE.min);
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dashboard.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            DashboardSettings::load(&path),
            Err(SettingsError::Parse { .. })
        ));
    }

    #[test]
    fn explicit_missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        assert!(matches!(
            DashboardSettings::resolve(Some(&missing)),
            Err(SettingsError::Read { .. })
        ));
    }
}
