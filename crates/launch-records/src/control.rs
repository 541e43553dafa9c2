use crate::dataset::Dataset;
use crate::error::ValidationError;
use crate::record::{PayloadRange, SiteSelection};

/// A user-adjustable parameter that derived views depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Input {
    Site,
    PayloadRange,
}

/// Current value of every control input of one dashboard session.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlState {
    site: SiteSelection,
    payload_range: PayloadRange,
}

impl ControlState {
    /// Every site, full payload range.
    pub fn new(dataset: &Dataset) -> Self {
        Self {
            site: SiteSelection::All,
            payload_range: dataset.payload_bounds(),
        }
    }

    pub fn site(&self) -> &SiteSelection {
        &self.site
    }

    pub fn payload_range(&self) -> PayloadRange {
        self.payload_range
    }

    /// Select a site. Returns the inputs that changed, which is empty
    /// when `site` is already selected.
    pub fn set_site(
        &mut self,
        dataset: &Dataset,
        site: SiteSelection,
    ) -> Result<Vec<Input>, ValidationError> {
        if let SiteSelection::Site(id) = &site
            && !dataset.contains_site(id)
        {
            return Err(ValidationError::UnknownSite(id.to_string()));
        }
        if self.site == site {
            return Ok(Vec::new());
        }
        self.site = site;
        Ok(vec![Input::Site])
    }

    /// Set the payload filter. Out-of-domain values are rejected, never
    /// clamped.
    pub fn set_payload_range(
        &mut self,
        dataset: &Dataset,
        low: f64,
        high: f64,
    ) -> Result<Vec<Input>, ValidationError> {
        let range = validate_range(dataset, low, high)?;
        if self.payload_range == range {
            return Ok(Vec::new());
        }
        self.payload_range = range;
        Ok(vec![Input::PayloadRange])
    }
}

fn validate_range(
    dataset: &Dataset,
    low: f64,
    high: f64,
) -> Result<PayloadRange, ValidationError> {
    if !low.is_finite() || !high.is_finite() {
        return Err(ValidationError::NonFinite);
    }
    if low > high {
        return Err(ValidationError::InvertedRange { low, high });
    }
    let bounds = dataset.payload_bounds();
    if low < bounds.low || high > bounds.high {
        return Err(ValidationError::OutOfBounds {
            low,
            high,
            min: bounds.low,
            max: bounds.high,
        });
    }
    Ok(PayloadRange::new(low, high))
}
