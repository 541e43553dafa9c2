use crate::store::Store;
use std::path::PathBuf;

/// Deferred effects that must run outside the main reducer (e.g., file IO)
#[derive(Debug, Clone)]
pub enum Effect {
    /// Read a dataset from disk and start a fresh session on it
    LoadDataset { path: PathBuf },
}

/// Execute a single effect against the store
pub fn run(store: &mut Store, effect: Effect) {
    match effect {
        Effect::LoadDataset { path } => {
            if let Err(e) = store.load_dataset(&path) {
                tracing::error!(path = %path.display(), "dataset load failed: {e}");
                store.error_message = Some(e.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::DashboardSettings;
    use crate::store::DatasetSource;
    use launch_records::SiteSelection;

    fn bundled_store() -> Store {
        let source = DatasetSource::Bundled;
        Store::new(source.open().unwrap(), source, DashboardSettings::default())
    }

    #[test]
    fn loading_a_file_replaces_the_session() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("launches.json");
        std::fs::write(
            &path,
            r#"[
                {"Launch Site": "LZ-1", "Payload Mass (kg)": 100.0,
                 "Booster Version Category": "B5", "class": 1},
                {"Launch Site": "LZ-2", "Payload Mass (kg)": 300.0,
                 "Booster Version Category": "B5", "class": 0}
            ]"#,
        )
        .unwrap();

        let mut store = bundled_store();
        store
            .select_site(SiteSelection::site("KSC LC-39A"))
            .unwrap();
        let pie_version = store.pie.version();

        run(&mut store, Effect::LoadDataset { path: path.clone() });

        assert!(store.error_message.is_none());
        assert_eq!(store.source, DatasetSource::File(path));
        assert_eq!(store.session.control().site(), &SiteSelection::All);
        assert_eq!(store.session.dataset().len(), 2);
        assert_eq!(store.pie.version(), pie_version + 1);
        assert_eq!(store.scatter.get().points.len(), 2);
    }

    #[test]
    fn failed_load_keeps_the_current_session() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.json");
        std::fs::write(&path, "[]").unwrap();

        let mut store = bundled_store();
        let rows = store.session.dataset().len();

        run(&mut store, Effect::LoadDataset { path });

        assert_eq!(
            store.error_message.as_deref(),
            Some("dataset has no rows")
        );
        assert_eq!(store.source, DatasetSource::Bundled);
        assert_eq!(store.session.dataset().len(), rows);
    }
}
