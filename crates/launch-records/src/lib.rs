pub mod control;
pub mod dataset;
pub mod dependency;
pub mod error;
pub mod pie;
pub mod record;
pub mod scatter;
pub mod session;
pub mod source;

pub use control::{ControlState, Input};
pub use dataset::Dataset;
pub use dependency::{DependencyGraph, ViewId};
pub use error::{DatasetError, ValidationError};
pub use pie::{PieLabel, PieSlice, PieView, compute_pie};
pub use record::{
    BoosterCategory, Outcome, PayloadRange, Row, SiteId, SiteSelection,
};
pub use scatter::{ScatterPoint, ScatterView, compute_scatter};
pub use session::{Session, ViewUpdate};
