/// egui rendering of the report: menu bar, chart list, chart plot.
pub mod panels;
pub mod plot;
