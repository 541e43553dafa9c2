use std::sync::Arc;

use crate::control::{ControlState, Input};
use crate::dataset::Dataset;
use crate::dependency::{DependencyGraph, ViewId};
use crate::error::{DatasetError, ValidationError};
use crate::pie::{PieView, compute_pie};
use crate::record::{Row, SiteSelection};
use crate::scatter::{ScatterView, compute_scatter};

/// Views recomputed by one control change. `None` means the view was
/// not affected and its previous snapshot is still current.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewUpdate {
    pub pie: Option<PieView>,
    pub scatter: Option<ScatterView>,
}

impl ViewUpdate {
    pub fn is_empty(&self) -> bool {
        self.pie.is_none() && self.scatter.is_none()
    }
}

/// One dashboard session: a shared read-only dataset, this session's
/// control state, and the last snapshot of each view.
#[derive(Debug, Clone)]
pub struct Session {
    dataset: Arc<Dataset>,
    control: ControlState,
    graph: DependencyGraph,
    pie: PieView,
    scatter: ScatterView,
}

impl Session {
    /// Validate `rows` and compute both initial views.
    pub fn initialize(rows: Vec<Row>) -> Result<Self, DatasetError> {
        let dataset = Dataset::load(rows)?;
        Ok(Self::with_dataset(Arc::new(dataset)))
    }

    /// Start a session over a dataset that other sessions may share.
    pub fn with_dataset(dataset: Arc<Dataset>) -> Self {
        let control = ControlState::new(&dataset);
        let pie = compute_pie(&dataset, control.site());
        let scatter =
            compute_scatter(&dataset, control.site(), control.payload_range());
        tracing::info!(
            rows = dataset.len(),
            scatter_points = scatter.points.len(),
            "session started"
        );
        Self {
            dataset,
            control,
            graph: DependencyGraph::new(),
            pie,
            scatter,
        }
    }

    pub fn dataset(&self) -> &Arc<Dataset> {
        &self.dataset
    }

    pub fn control(&self) -> &ControlState {
        &self.control
    }

    pub fn pie(&self) -> &PieView {
        &self.pie
    }

    pub fn scatter(&self) -> &ScatterView {
        &self.scatter
    }

    pub fn on_site_changed(
        &mut self,
        site: SiteSelection,
    ) -> Result<ViewUpdate, ValidationError> {
        let changed = self
            .control
            .set_site(&self.dataset, site)
            .inspect_err(|e| tracing::warn!("site change rejected: {e}"))?;
        Ok(self.recompute(&changed))
    }

    pub fn on_payload_range_changed(
        &mut self,
        low: f64,
        high: f64,
    ) -> Result<ViewUpdate, ValidationError> {
        let changed = self
            .control
            .set_payload_range(&self.dataset, low, high)
            .inspect_err(|e| {
                tracing::warn!("payload range change rejected: {e}")
            })?;
        Ok(self.recompute(&changed))
    }

    /// Recompute each view that depends on a changed input, once, in
    /// graph order.
    fn recompute(&mut self, changed: &[Input]) -> ViewUpdate {
        let affected = self.graph.affected(changed);
        if affected.is_empty() {
            return ViewUpdate::default();
        }
        tracing::debug!(?changed, ?affected, "recomputing views");

        let mut update = ViewUpdate::default();
        for view in affected {
            match view {
                ViewId::Pie => {
                    self.pie = compute_pie(&self.dataset, self.control.site());
                    update.pie = Some(self.pie.clone());
                }
                ViewId::Scatter => {
                    self.scatter = compute_scatter(
                        &self.dataset,
                        self.control.site(),
                        self.control.payload_range(),
                    );
                    update.scatter = Some(self.scatter.clone());
                }
            }
        }
        update
    }
}
