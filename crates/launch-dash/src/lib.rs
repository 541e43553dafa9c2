pub mod actions;
pub mod app;
pub mod cache;
pub mod controls;
pub mod effects;
pub mod error;
pub mod native;
pub mod palette;
pub mod pie_chart;
pub mod scatter_chart;
pub mod settings;
pub mod state;
pub mod store;
pub mod versioned;
pub mod web;

pub use error::DashError;
pub use settings::DashboardSettings;
pub use store::{DatasetSource, Store};

use eframe::egui;

/// Build the egui app around an already validated store.
pub fn create_app(cc: &eframe::CreationContext<'_>, store: Store) -> app::Dashboard {
    cc.egui_ctx.set_visuals(egui::Visuals::light());
    app::Dashboard::new(state::State::new(store))
}
