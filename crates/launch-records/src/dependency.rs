use std::collections::BTreeSet;

use crate::control::Input;

/// Derived views. Declaration order is the recompute order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ViewId {
    Pie,
    Scatter,
}

const DEPENDENCIES: &[(Input, &[ViewId])] = &[
    (Input::Site, &[ViewId::Pie, ViewId::Scatter]),
    (Input::PayloadRange, &[ViewId::Scatter]),
];

/// Static mapping from control inputs to the views that read them.
#[derive(Debug, Clone)]
pub struct DependencyGraph {
    table: &'static [(Input, &'static [ViewId])],
}

impl Default for DependencyGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self {
            table: DEPENDENCIES,
        }
    }

    /// Views that read `input`.
    pub fn dependents(&self, input: Input) -> &'static [ViewId] {
        self.table
            .iter()
            .find(|(i, _)| *i == input)
            .map(|(_, views)| *views)
            .unwrap_or(&[])
    }

    /// Union of the dependents of every changed input, each view once,
    /// pie before scatter.
    pub fn affected(&self, changed: &[Input]) -> Vec<ViewId> {
        changed
            .iter()
            .flat_map(|input| self.dependents(*input).iter().copied())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn site_affects_both_views() {
        let graph = DependencyGraph::new();
        assert_eq!(
            graph.affected(&[Input::Site]),
            vec![ViewId::Pie, ViewId::Scatter]
        );
    }

    #[test]
    fn payload_range_affects_only_scatter() {
        let graph = DependencyGraph::new();
        assert_eq!(graph.affected(&[Input::PayloadRange]), vec![ViewId::Scatter]);
    }

    #[test]
    fn union_is_deduplicated_and_ordered() {
        let graph = DependencyGraph::new();
        assert_eq!(
            graph.affected(&[Input::PayloadRange, Input::Site]),
            vec![ViewId::Pie, ViewId::Scatter]
        );
        assert!(graph.affected(&[]).is_empty());
    }
}
