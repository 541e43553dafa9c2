use std::collections::HashMap;

use crate::dataset::Dataset;
use crate::record::{Outcome, SiteId, SiteSelection};

/// What a pie slice counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PieLabel {
    /// Successful launches of one site (the `ALL` view).
    Site(SiteId),
    /// Launches of the selected site with this outcome.
    Outcome(Outcome),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieSlice {
    pub label: PieLabel,
    pub count: usize,
}

/// Aggregate counts for the pie chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieView {
    pub selection: SiteSelection,
    pub slices: Vec<PieSlice>,
}

impl PieView {
    pub fn total(&self) -> usize {
        self.slices.iter().map(|s| s.count).sum()
    }
}

/// For `ALL`: successful launches per site, in first-seen site order,
/// keeping sites without successes. For one site: failure and success
/// counts, in that order, both always present.
pub fn compute_pie(dataset: &Dataset, selection: &SiteSelection) -> PieView {
    let slices = match selection {
        SiteSelection::All => successes_by_site(dataset),
        SiteSelection::Site(_) => {
            let mut counts = [0usize; 2];
            for row in dataset.rows_for(selection) {
                counts[row.outcome as usize] += 1;
            }
            Outcome::ALL
                .iter()
                .map(|&outcome| PieSlice {
                    label: PieLabel::Outcome(outcome),
                    count: counts[outcome as usize],
                })
                .collect()
        }
    };

    PieView {
        selection: selection.clone(),
        slices,
    }
}

fn successes_by_site(dataset: &Dataset) -> Vec<PieSlice> {
    let mut successes: HashMap<&SiteId, usize> = HashMap::new();
    for row in dataset.rows() {
        let count = successes.entry(&row.site).or_default();
        if row.outcome.is_success() {
            *count += 1;
        }
    }

    dataset
        .sites()
        .iter()
        .map(|site| PieSlice {
            label: PieLabel::Site(site.clone()),
            count: successes.get(site).copied().unwrap_or(0),
        })
        .collect()
}
