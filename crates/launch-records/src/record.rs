use std::fmt;

/// Identifier of a launch site as it appears in the source data.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SiteId(String);

impl SiteId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Booster version category, used to group scatter points.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoosterCategory(String);

impl BoosterCategory {
    pub fn new(category: impl Into<String>) -> Self {
        Self(category.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BoosterCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Launch outcome. Declaration order is the pie chart order for a
/// single site: failures first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    pub const ALL: [Outcome; 2] = [Outcome::Failure, Outcome::Success];

    /// The 0/1 class flag used by the source data.
    pub fn class(self) -> u8 {
        match self {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }

    pub fn from_class(class: i64) -> Option<Self> {
        match class {
            0 => Some(Outcome::Failure),
            1 => Some(Outcome::Success),
            _ => None,
        }
    }

    pub fn is_success(self) -> bool {
        self == Outcome::Success
    }
}

/// One immutable launch record.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub site: SiteId,
    pub payload_kg: f64,
    pub booster: BoosterCategory,
    pub outcome: Outcome,
}

impl Row {
    pub fn new(
        site: impl Into<String>,
        payload_kg: f64,
        booster: impl Into<String>,
        outcome: Outcome,
    ) -> Self {
        Self {
            site: SiteId::new(site),
            payload_kg,
            booster: BoosterCategory::new(booster),
            outcome,
        }
    }
}

/// Site filter value: either every site or exactly one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum SiteSelection {
    #[default]
    All,
    Site(SiteId),
}

impl SiteSelection {
    pub fn site(id: impl Into<String>) -> Self {
        SiteSelection::Site(SiteId::new(id))
    }

    pub fn matches(&self, site: &SiteId) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(selected) => selected == site,
        }
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteSelection::All => f.write_str("ALL"),
            SiteSelection::Site(id) => id.fmt(f),
        }
    }
}

/// Closed payload interval `[low, high]` in kilograms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Inclusive at both ends.
    pub fn contains(&self, payload_kg: f64) -> bool {
        self.low <= payload_kg && payload_kg <= self.high
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_class_flags() {
        assert_eq!(Outcome::from_class(0), Some(Outcome::Failure));
        assert_eq!(Outcome::from_class(1), Some(Outcome::Success));
        assert_eq!(Outcome::from_class(2), None);
        assert_eq!(Outcome::Success.class(), 1);
        assert!(Outcome::Failure < Outcome::Success);
    }

    #[test]
    fn payload_range_is_inclusive() {
        let range = PayloadRange::new(500.0, 1500.0);
        assert!(range.contains(500.0));
        assert!(range.contains(1500.0));
        assert!(!range.contains(499.9));
        assert!(!range.contains(1500.1));
    }

    #[test]
    fn all_selection_matches_every_site() {
        let site = SiteId::new("KSC LC-39A");
        assert!(SiteSelection::All.matches(&site));
        assert!(SiteSelection::site("KSC LC-39A").matches(&site));
        assert!(!SiteSelection::site("VAFB SLC-4E").matches(&site));
    }
}
