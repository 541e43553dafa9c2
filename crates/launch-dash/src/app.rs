use eframe::egui;

use crate::actions::Action;
use crate::state::State;
use crate::{controls, pie_chart, scatter_chart};

pub struct Dashboard {
    state: State,
}

impl Dashboard {
    pub fn new(state: State) -> Self {
        Self { state }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn menu_bar(&self, ctx: &egui::Context, actions: &mut Vec<Action>) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open dataset…").clicked() {
                        ui.close();
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Launch records", &["csv", "json"])
                            .pick_file()
                        {
                            actions.push(Action::LoadDataset { path });
                        }
                    }
                });
                ui.separator();
                ui.label(
                    egui::RichText::new(self.state.store.source.to_string())
                        .weak(),
                );
            });
        });
    }

    #[cfg(target_arch = "wasm32")]
    fn menu_bar(&self, _ctx: &egui::Context, _actions: &mut Vec<Action>) {}

    fn error_window(&self, ctx: &egui::Context, actions: &mut Vec<Action>) {
        if let Some(error) = &self.state.store.error_message {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(error);
                    if ui.button("OK").clicked() {
                        actions.push(Action::ClearErrorMessage);
                    }
                });
        }
    }
}

impl eframe::App for Dashboard {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut actions = Vec::new();

        self.menu_bar(ctx, &mut actions);
        self.error_window(ctx, &mut actions);

        let (store, pie, scatter) = self.state.charts();
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading(
                        egui::RichText::new("SpaceX Launch Records Dashboard")
                            .size(32.0),
                    );
                });
                ui.add_space(12.0);

                actions.extend(controls::site_dropdown(ui, store));
                ui.add_space(12.0);
                pie_chart::show(ui, pie, store.settings.pie_diameter);
                ui.add_space(12.0);

                actions.extend(controls::payload_slider(ui, store));
                ui.add_space(12.0);
                scatter_chart::show(ui, scatter, store.settings.point_radius);
            });
        });

        if actions.is_empty() {
            return;
        }
        for action in actions {
            self.state.dispatch(action);
        }
        self.state.flush_actions();
        self.state.flush_effects();
        ctx.request_repaint();
    }
}
