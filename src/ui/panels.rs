use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – chart list and ranking table
// ---------------------------------------------------------------------------

/// Render the left panel: one entry per chart, then the selected chart's ranking.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Charts");
    ui.separator();

    if state.charts.is_empty() {
        ui.label("No dataset loaded.");
        return;
    }

    let titles: Vec<String> = state.charts.iter().map(|c| c.title.clone()).collect();

    ScrollArea::vertical()
        .id_salt("chart_list")
        .max_height(ui.available_height() * 0.5)
        .auto_shrink([false, true])
        .show(ui, |ui: &mut Ui| {
            for (i, title) in titles.iter().enumerate() {
                if ui.selectable_label(state.selected == i, title).clicked() {
                    state.select_chart(i);
                }
            }
        });

    ui.separator();
    ui.strong("Ranking");
    ranking_table(ui, state);
}

/// Rank, name (in its series colour) and births within the ranked range.
fn ranking_table(ui: &mut Ui, state: &AppState) {
    let Some(chart) = state.selected_chart() else {
        return;
    };

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto())
        .column(Column::remainder())
        .column(Column::auto())
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("#");
            });
            header.col(|ui| {
                ui.strong("Name");
            });
            header.col(|ui| {
                ui.strong("Births");
            });
        })
        .body(|mut body| {
            for (rank, series) in chart.series.iter().enumerate() {
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        ui.label(format!("{}", rank + 1));
                    });
                    row.col(|ui| {
                        let mut text = RichText::new(&series.name);
                        if let Some(cm) = &state.color_map {
                            text = text.color(cm.color_for(&series.name));
                        }
                        ui.label(text);
                    });
                    row.col(|ui| {
                        ui.label(series.total.to_string());
                    });
                });
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open dataset…").clicked() {
                open_dataset_dialog(state);
                ui.close_menu();
            }
            if ui.button("Load cohorts…").clicked() {
                open_config_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if state.loading {
            ui.spinner();
        }

        if let Some(summary) = &state.summary {
            ui.label(format!(
                "{} names, {} births, {} charts",
                summary.names, summary.births, summary.charts
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_dataset_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open name statistics")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.open_dataset(&path);
    }
}

pub fn open_config_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Load cohort configuration")
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        state.open_config(&path);
    }
}
