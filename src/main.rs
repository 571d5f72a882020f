mod app;
mod color;
mod config;
mod data;
mod report;
mod state;
mod ui;

use app::NameCohortsApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    // Optional dataset path; otherwise File → Open dataset….
    let dataset = std::env::args_os().nth(1).map(std::path::PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Name Cohorts – Popular Names by Generation",
        options,
        Box::new(|_cc| Ok(Box::new(NameCohortsApp::new(dataset)))),
    )
}
