use std::fmt;
use std::path::{Path, PathBuf};

use launch_records::{
    DatasetError, PieView, ScatterView, Session, SiteSelection,
    ValidationError, ViewUpdate, source,
};

use crate::palette::BoosterPalette;
use crate::settings::DashboardSettings;
use crate::versioned::Versioned;

/// Sample export shipped with the dashboard.
pub const BUNDLED_DATASET: &str =
    include_str!("../assets/spacex_launch_dash.csv");

/// Where the current dataset came from.
#[derive(Debug, Clone, PartialEq)]
pub enum DatasetSource {
    Bundled,
    File(PathBuf),
}

impl DatasetSource {
    pub fn open(&self) -> Result<Session, DatasetError> {
        let rows = match self {
            DatasetSource::Bundled => {
                source::read_csv(BUNDLED_DATASET.as_bytes())?
            }
            DatasetSource::File(path) => source::read_path(path)?,
        };
        Session::initialize(rows)
    }
}

impl fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetSource::Bundled => f.write_str("bundled sample"),
            DatasetSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Everything the dashboard renders from. View snapshots are the last
/// ones handed over by the session; their versions drive the display
/// caches.
pub struct Store {
    pub session: Session,
    pub source: DatasetSource,
    pub pie: Versioned<PieView>,
    pub scatter: Versioned<ScatterView>,
    pub booster_palette: BoosterPalette,
    pub settings: DashboardSettings,
    pub error_message: Option<String>,
}

impl Store {
    pub fn new(
        session: Session,
        source: DatasetSource,
        settings: DashboardSettings,
    ) -> Self {
        Self {
            pie: Versioned::new(session.pie().clone()),
            scatter: Versioned::new(session.scatter().clone()),
            booster_palette: BoosterPalette::from_dataset(session.dataset()),
            session,
            source,
            settings,
            error_message: None,
        }
    }

    /// Take over the views a control change produced. Views missing from
    /// `update` keep their snapshot and version.
    fn apply(&mut self, update: ViewUpdate) {
        if let Some(pie) = update.pie {
            self.pie.set(pie);
        }
        if let Some(scatter) = update.scatter {
            self.scatter.set(scatter);
        }
    }

    pub fn select_site(
        &mut self,
        site: SiteSelection,
    ) -> Result<(), ValidationError> {
        let update = self.session.on_site_changed(site)?;
        self.apply(update);
        Ok(())
    }

    pub fn set_payload_range(
        &mut self,
        low: f64,
        high: f64,
    ) -> Result<(), ValidationError> {
        let update = self.session.on_payload_range_changed(low, high)?;
        self.apply(update);
        Ok(())
    }

    /// Swap in a new dataset. On failure the current session is kept.
    pub fn load_dataset(&mut self, path: &Path) -> Result<(), DatasetError> {
        let source = DatasetSource::File(path.to_path_buf());
        let session = source.open()?;
        tracing::info!(%source, "dataset replaced");

        self.booster_palette = BoosterPalette::from_dataset(session.dataset());
        self.pie.set(session.pie().clone());
        self.scatter.set(session.scatter().clone());
        self.session = session;
        self.source = source;
        Ok(())
    }
}
