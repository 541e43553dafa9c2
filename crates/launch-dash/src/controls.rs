use eframe::egui;
use launch_records::SiteSelection;

use crate::actions::Action;
use crate::store::Store;

pub fn site_label(selection: &SiteSelection) -> String {
    match selection {
        SiteSelection::All => "All Sites".to_owned(),
        SiteSelection::Site(site) => site.to_string(),
    }
}

/// Options whose label contains `query`, ignoring case. An empty query
/// keeps every option.
pub fn matching_sites(
    options: Vec<SiteSelection>,
    query: &str,
) -> Vec<SiteSelection> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return options;
    }
    options
        .into_iter()
        .filter(|option| site_label(option).to_lowercase().contains(&query))
        .collect()
}

/// Searchable launch site dropdown. Returns the action for a picked
/// option.
pub fn site_dropdown(ui: &mut egui::Ui, store: &Store) -> Option<Action> {
    let current = store.session.control().site();
    let query_id = egui::Id::new("site-dropdown-query");
    let mut query: String =
        ui.data_mut(|d| d.get_temp(query_id)).unwrap_or_default();
    let mut picked = None;

    ui.horizontal(|ui| {
        ui.label("Launch site:");
        egui::ComboBox::from_id_salt("site-dropdown")
            .selected_text(site_label(current))
            .width(240.0)
            .show_ui(ui, |ui| {
                ui.add(
                    egui::TextEdit::singleline(&mut query)
                        .hint_text("Select a launch site"),
                );
                ui.separator();
                let options = matching_sites(
                    store.session.dataset().site_options(),
                    &query,
                );
                if options.is_empty() {
                    ui.weak("No matching site");
                }
                for option in options {
                    let label = site_label(&option);
                    if ui.selectable_label(&option == current, label).clicked()
                    {
                        picked = Some(Action::SelectSite { site: option });
                    }
                }
            });
    });

    if picked.is_some() {
        query.clear();
    }
    ui.data_mut(|d| d.insert_temp(query_id, query));
    picked
}

/// Two-handle payload range slider. The handles are bounded by the
/// dataset and by each other.
pub fn payload_slider(ui: &mut egui::Ui, store: &Store) -> Option<Action> {
    let bounds = store.session.dataset().payload_bounds();
    let current = store.session.control().payload_range();
    let step = store.settings.payload_step_kg;

    let mut low = current.low;
    let mut high = current.high;
    let mut moved = false;
    let mut reset = false;

    ui.label("Payload range (Kg):");
    ui.horizontal(|ui| {
        moved |= ui
            .add(
                egui::Slider::new(&mut low, bounds.low..=current.high)
                    .step_by(step)
                    .text("min"),
            )
            .changed();
        moved |= ui
            .add(
                egui::Slider::new(&mut high, current.low..=bounds.high)
                    .step_by(step)
                    .text("max"),
            )
            .changed();
        reset = ui.button("Reset").clicked();
    });

    if reset {
        return Some(Action::ResetPayloadRange);
    }
    if !moved {
        return None;
    }
    let low = low.clamp(bounds.low, current.high);
    let high = high.clamp(current.low, bounds.high);
    Some(Action::SetPayloadRange { low, high })
}
