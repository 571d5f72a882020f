use std::path::Path;

use crate::color::ColorMap;
use crate::config::ReportConfig;
use crate::data::classify::SuffixClassifier;
use crate::data::loader::load_file;
use crate::data::model::Aggregate;
use crate::report::{Chart, ReportSummary, build_report};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset as read from disk (None until user loads a file).
    pub dataset: Option<Aggregate>,

    /// Report settings; replaced by File → Load cohorts….
    pub config: ReportConfig,

    /// Charts produced by the last report run.
    pub charts: Vec<Chart>,

    /// Counts from the last report run.
    pub summary: Option<ReportSummary>,

    /// Index into `charts` of the chart on screen.
    pub selected: usize,

    /// Colours for the selected chart's series.
    pub color_map: Option<ColorMap>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether a file loading operation is in progress.
    pub loading: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            config: ReportConfig::default(),
            charts: Vec::new(),
            summary: None,
            selected: 0,
            color_map: None,
            status_message: None,
            loading: false,
        }
    }
}

impl AppState {
    /// Load a dataset from disk and build the report; errors land in the status bar.
    pub fn open_dataset(&mut self, path: &Path) {
        self.loading = true;
        match load_file(path, &SuffixClassifier) {
            Ok(dataset) => {
                self.dataset = Some(dataset);
                self.rebuild_report();
            }
            Err(e) => self.report_error("Failed to load file", &e),
        }
        self.loading = false;
    }

    /// Replace the report settings and rebuild the report if data is loaded.
    pub fn open_config(&mut self, path: &Path) {
        match ReportConfig::load(path) {
            Ok(config) => {
                log::info!("Loaded report config from {}", path.display());
                self.config = config;
                self.rebuild_report();
            }
            Err(e) => self.report_error("Failed to load config", &e),
        }
    }

    /// Run the pipeline on the loaded dataset with the current settings.
    pub fn rebuild_report(&mut self) {
        let Some(dataset) = &self.dataset else {
            return;
        };
        let mut charts = Vec::new();
        match build_report(dataset, &self.config, &mut charts) {
            Ok(summary) => {
                self.charts = charts;
                self.summary = Some(summary);
                self.status_message = None;
                self.select_chart(0);
            }
            Err(e) => {
                self.charts.clear();
                self.summary = None;
                self.color_map = None;
                self.report_error("Failed to build report", &anyhow::Error::from(e));
            }
        }
    }

    /// Show the chart at `index` and rebuild its colours.
    pub fn select_chart(&mut self, index: usize) {
        self.selected = index;
        self.color_map = self.charts.get(index).map(ColorMap::for_chart);
    }

    /// The chart on screen, if any.
    pub fn selected_chart(&self) -> Option<&Chart> {
        self.charts.get(self.selected)
    }

    fn report_error(&mut self, what: &str, e: &anyhow::Error) {
        log::error!("{what}: {e:#}");
        self.status_message = Some(format!("Error: {e:#}"));
    }
}
