use crate::dataset::Dataset;
use crate::record::{BoosterCategory, Outcome, PayloadRange, SiteSelection};

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub payload_kg: f64,
    pub outcome: Outcome,
    pub booster: BoosterCategory,
}

/// Rows of the selected site inside the payload range, in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterView {
    pub selection: SiteSelection,
    pub range: PayloadRange,
    pub points: Vec<ScatterPoint>,
}

impl ScatterView {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

pub fn compute_scatter(
    dataset: &Dataset,
    selection: &SiteSelection,
    range: PayloadRange,
) -> ScatterView {
    let points = dataset
        .rows_for(selection)
        .filter(|row| range.contains(row.payload_kg))
        .map(|row| ScatterPoint {
            payload_kg: row.payload_kg,
            outcome: row.outcome,
            booster: row.booster.clone(),
        })
        .collect();

    ScatterView {
        selection: selection.clone(),
        range,
        points,
    }
}
