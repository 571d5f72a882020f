use std::path::PathBuf;

use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct NameCohortsApp {
    pub state: AppState,
}

impl NameCohortsApp {
    /// Start the viewer, optionally loading a dataset right away.
    pub fn new(dataset: Option<PathBuf>) -> Self {
        let mut state = AppState::default();
        if let Some(path) = dataset {
            state.open_dataset(&path);
        }
        Self { state }
    }
}

impl eframe::App for NameCohortsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: charts and ranking ----
        egui::SidePanel::left("chart_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::cohort_plot(ui, &self.state);
        });
    }
}
