use std::path::PathBuf;

use launch_records::SiteSelection;

use crate::effects::Effect;
use crate::store::Store;

/// Actions that can be dispatched to modify the dashboard state
#[derive(Debug, Clone)]
pub enum Action {
    // Control Inputs
    /// Pick one launch site, or every site
    SelectSite { site: SiteSelection },
    /// Move the payload range handles
    SetPayloadRange { low: f64, high: f64 },
    /// Restore the payload filter to the dataset bounds
    ResetPayloadRange,

    // File Operations
    /// Replace the dataset with the contents of a file
    LoadDataset { path: PathBuf },
    /// Clear any error message
    ClearErrorMessage,
}

/// Apply a single action to modify the store state
pub fn update(store: &mut Store, action: Action) -> Vec<Effect> {
    match action {
        // Control Inputs
        Action::SelectSite { site } => {
            if let Err(e) = store.select_site(site) {
                store.error_message = Some(e.to_string());
            }
            vec![]
        }
        Action::SetPayloadRange { low, high } => {
            if let Err(e) = store.set_payload_range(low, high) {
                store.error_message = Some(e.to_string());
            }
            vec![]
        }
        Action::ResetPayloadRange => {
            let bounds = store.session.dataset().payload_bounds();
            if let Err(e) = store.set_payload_range(bounds.low, bounds.high)
            {
                store.error_message = Some(e.to_string());
            }
            vec![]
        }

        // File Operations
        Action::LoadDataset { path } => {
            vec![Effect::LoadDataset { path }]
        }
        Action::ClearErrorMessage => {
            store.error_message = None;
            vec![]
        }
    }
}
