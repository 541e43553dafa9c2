use std::collections::HashSet;

use crate::error::DatasetError;
use crate::record::{PayloadRange, Row, SiteId, SiteSelection};

/// Immutable, validated set of launch records with its domain bounds
/// cached at load time.
#[derive(Debug, Clone)]
pub struct Dataset {
    rows: Vec<Row>,
    /// Distinct sites in first-seen order.
    sites: Vec<SiteId>,
    min_payload: f64,
    max_payload: f64,
}

impl Dataset {
    pub fn load(rows: Vec<Row>) -> Result<Self, DatasetError> {
        if rows.is_empty() {
            return Err(DatasetError::Empty);
        }

        let mut sites = Vec::new();
        let mut seen = HashSet::new();
        let mut min_payload = f64::INFINITY;
        let mut max_payload = f64::NEG_INFINITY;

        for (i, row) in rows.iter().enumerate() {
            let record = i + 1;
            if !row.payload_kg.is_finite() {
                return Err(DatasetError::NonFinitePayload { record });
            }
            if row.payload_kg < 0.0 {
                return Err(DatasetError::NegativePayload {
                    record,
                    payload_kg: row.payload_kg,
                });
            }
            if row.site.as_str().trim().is_empty() {
                return Err(DatasetError::EmptySite { record });
            }

            min_payload = min_payload.min(row.payload_kg);
            max_payload = max_payload.max(row.payload_kg);
            if seen.insert(row.site.clone()) {
                sites.push(row.site.clone());
            }
        }

        tracing::info!(
            rows = rows.len(),
            sites = sites.len(),
            min_payload,
            max_payload,
            "dataset loaded"
        );

        Ok(Self {
            rows,
            sites,
            min_payload,
            max_payload,
        })
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Rows of one site, or every row for [`SiteSelection::All`], in
    /// source order.
    pub fn rows_for<'a>(
        &'a self,
        selection: &'a SiteSelection,
    ) -> impl Iterator<Item = &'a Row> + 'a {
        self.rows.iter().filter(move |row| selection.matches(&row.site))
    }

    /// Never zero: `load` rejects an empty row set.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn sites(&self) -> &[SiteId] {
        &self.sites
    }

    pub fn contains_site(&self, site: &SiteId) -> bool {
        self.sites.contains(site)
    }

    /// Selection widget options: the `ALL` sentinel followed by each site.
    pub fn site_options(&self) -> Vec<SiteSelection> {
        std::iter::once(SiteSelection::All)
            .chain(self.sites.iter().cloned().map(SiteSelection::Site))
            .collect()
    }

    pub fn min_payload(&self) -> f64 {
        self.min_payload
    }

    pub fn max_payload(&self) -> f64 {
        self.max_payload
    }

    pub fn payload_bounds(&self) -> PayloadRange {
        PayloadRange::new(self.min_payload, self.max_payload)
    }
}
