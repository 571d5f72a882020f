use eframe::egui::{Color32, Stroke, Ui};
use egui_plot::{Legend, Line, Plot, PlotPoints, Polygon};

use crate::color::HIGHLIGHT;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Cohort plot (central panel)
// ---------------------------------------------------------------------------

/// Render the selected chart: one line per name, the generation shaded.
pub fn cohort_plot(ui: &mut Ui, state: &AppState) {
    let Some(chart) = state.selected_chart() else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a names file to view cohorts  (File → Open dataset…)");
        });
        return;
    };

    let y_max = state.config.share_axis_max;
    let (first, last) = match (chart.years.first(), chart.years.last()) {
        (Some(&first), Some(&last)) => (first as f64, last as f64),
        _ => (0.0, 1.0),
    };

    ui.heading(&chart.title);

    Plot::new(("cohort_plot", state.selected))
        .legend(Legend::default())
        .x_axis_label("Year")
        .y_axis_label("Share of births")
        .y_axis_formatter(|mark, _range| format!("{:.0}%", mark.value * 100.0))
        .include_x(first)
        .include_x(last)
        .include_y(0.0)
        .include_y(y_max)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            if let Some((from, to)) = chart.highlight {
                let band = PlotPoints::new(vec![
                    [from as f64, 0.0],
                    [from as f64, y_max],
                    [to as f64, y_max],
                    [to as f64, 0.0],
                ]);
                plot_ui.polygon(
                    Polygon::new(band)
                        .fill_color(HIGHLIGHT)
                        .stroke(Stroke::NONE),
                );
            }

            for series in &chart.series {
                let color = state
                    .color_map
                    .as_ref()
                    .map(|cm| cm.color_for(&series.name))
                    .unwrap_or(Color32::LIGHT_BLUE);

                let points: PlotPoints = chart
                    .years
                    .iter()
                    .zip(series.values.iter())
                    .map(|(&year, &share)| [year as f64, share])
                    .collect();

                let line = Line::new(points)
                    .name(&series.name)
                    .color(color)
                    .width(2.0);

                plot_ui.line(line);
            }
        });
}
