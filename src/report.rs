use crate::config::{Generation, ReportConfig};
use crate::data::error::{PipelineError, PipelineResult};
use crate::data::filter::{filter_names, filter_years};
use crate::data::merge::merge_multinames;
use crate::data::model::{Aggregate, Category};
use crate::data::normalize::add_normalized;
use crate::data::partition::partition_by_category;
use crate::data::rank::{by_peak_share, by_total, top_n};

// ---------------------------------------------------------------------------
// Chart – what the rendering sink receives
// ---------------------------------------------------------------------------

/// One plotted name.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// Display name (`Jan`, not `JAN`).
    pub name: String,
    /// Yearly shares aligned with [`Chart::years`].
    pub values: Vec<f64>,
    /// Births within the range the name was ranked on.
    pub total: u64,
}

/// A finished chart: series in rank order plus labels.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub title: String,
    pub years: Vec<i32>,
    pub series: Vec<Series>,
    /// Interval to shade, `[from, to)`.
    pub highlight: Option<(i32, i32)>,
}

/// Receives charts as the report is built.
pub trait ChartSink {
    fn render(&mut self, chart: Chart);
}

impl ChartSink for Vec<Chart> {
    fn render(&mut self, chart: Chart) {
        self.push(chart);
    }
}

/// Counts reported back to the caller once the report is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReportSummary {
    pub names: usize,
    pub births: u64,
    pub charts: usize,
}

/// `JAN` → `Jan`: keep the first character, lowercase the rest.
pub fn display_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_string() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

// ---------------------------------------------------------------------------
// Report builder
// ---------------------------------------------------------------------------

/// Run the whole pipeline on a freshly loaded dataset and render every chart.
///
/// floor filter → merge → prune → partition → per sex: normalize, one chart
/// per generation, one all-time chart → peak-share chart over both sexes.
pub fn build_report(
    dataset: &Aggregate,
    config: &ReportConfig,
    sink: &mut dyn ChartSink,
) -> PipelineResult<ReportSummary> {
    let mut data = filter_years(dataset, config.year_floor, i32::MAX)?;
    merge_multinames(&mut data)?;
    filter_names(&mut data)?;

    let mut summary = ReportSummary {
        names: data.len(),
        births: data.grand_total,
        charts: 0,
    };

    for (category, mut partition) in partition_by_category(&data)? {
        if partition.is_empty() {
            log::warn!("Skipping {}: no names", category.label());
            continue;
        }
        if !normalize_or_skip(&mut partition, category.label())? {
            continue;
        }
        summary.charts += run_cohorts(&partition, category, config, sink)?;
        summary.charts += render_all_time(&partition, category, config, sink)?;
    }

    if normalize_or_skip(&mut data, "all names")? {
        summary.charts += render_peak_share(&data, config, sink)?;
    }

    log::info!(
        "Report built: {} names, {} births, {} charts",
        summary.names,
        summary.births,
        summary.charts
    );
    Ok(summary)
}

/// Normalize `aggregate`, turning a degenerate range into `Ok(false)`.
fn normalize_or_skip(aggregate: &mut Aggregate, what: &str) -> PipelineResult<bool> {
    match add_normalized(aggregate) {
        Ok(()) => Ok(true),
        Err(err @ PipelineError::DegenerateRange { .. }) => {
            log::warn!("Skipping {what}: {err}");
            Ok(false)
        }
        Err(err) => Err(err),
    }
}

// ---------------------------------------------------------------------------
// Cohort driver
// ---------------------------------------------------------------------------

/// Render one chart per configured generation for a single sex.
///
/// `partition` must already be normalized: the ranked names are plotted over
/// its full year range with the generation shaded. Returns the number of
/// charts rendered.
pub fn run_cohorts(
    partition: &Aggregate,
    category: Category,
    config: &ReportConfig,
    sink: &mut dyn ChartSink,
) -> PipelineResult<usize> {
    let mut rendered = 0;
    for generation in &config.generations {
        let title = format!("{} — {}", generation.name, category.label());
        let Some(cohort) = cohort_slice(partition, generation, &title)? else {
            continue;
        };

        let ranked = top_n(&cohort, config.cohort_top_n, by_total);
        let series = ranked
            .iter()
            .map(|name| share_series(partition, name, cohort.names[name.as_str()].total))
            .collect::<PipelineResult<Vec<_>>>()?;

        sink.render(Chart {
            title,
            years: partition.years.clone(),
            series,
            highlight: Some((generation.year_from, generation.year_to)),
        });
        rendered += 1;
    }
    Ok(rendered)
}

/// Filter and normalize the generation's years, or `None` if they hold no births.
fn cohort_slice(
    partition: &Aggregate,
    generation: &Generation,
    title: &str,
) -> PipelineResult<Option<Aggregate>> {
    let mut cohort = filter_years(partition, generation.year_from, generation.year_to)?;
    Ok(normalize_or_skip(&mut cohort, title)?.then_some(cohort))
}

fn share_series(aggregate: &Aggregate, name: &str, total: u64) -> PipelineResult<Series> {
    let values = aggregate
        .names
        .get(name)
        .and_then(|record| record.normalized_frequencies.clone())
        .ok_or_else(|| PipelineError::NotNormalized {
            name: name.to_string(),
        })?;
    Ok(Series {
        name: display_name(name),
        values,
        total,
    })
}

// ---------------------------------------------------------------------------
// Overview charts
// ---------------------------------------------------------------------------

fn render_all_time(
    partition: &Aggregate,
    category: Category,
    config: &ReportConfig,
    sink: &mut dyn ChartSink,
) -> PipelineResult<usize> {
    if config.overview_top_n == 0 {
        return Ok(0);
    }
    let series = top_n(partition, config.overview_top_n, by_total)
        .iter()
        .map(|name| share_series(partition, name, partition.names[name.as_str()].total))
        .collect::<PipelineResult<Vec<_>>>()?;
    sink.render(Chart {
        title: format!("All time — {}", category.label()),
        years: partition.years.clone(),
        series,
        highlight: None,
    });
    Ok(1)
}

fn render_peak_share(
    data: &Aggregate,
    config: &ReportConfig,
    sink: &mut dyn ChartSink,
) -> PipelineResult<usize> {
    if config.peak_top_n == 0 {
        return Ok(0);
    }
    let series = top_n(data, config.peak_top_n, by_peak_share)
        .iter()
        .map(|name| share_series(data, name, data.names[name.as_str()].total))
        .collect::<PipelineResult<Vec<_>>>()?;
    sink.render(Chart {
        title: "Peak share — All".to_string(),
        years: data.years.clone(),
        series,
        highlight: None,
    });
    Ok(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::fixtures::aggregate;

    fn dataset() -> Aggregate {
        aggregate(
            &[1920, 1921, 1922, 1923, 1924],
            &[
                ("JAN", &[50, 10, 10, 10, 10], Category::Male),
                ("JAN KAREL", &[0, 0, 0, 0, 5], Category::Male),
                ("PETR", &[9, 9, 20, 30, 30], Category::Male),
                ("TOMAS", &[0, 0, 0, 0, 0], Category::Male),
                ("EVA", &[40, 30, 5, 5, 5], Category::Female),
                ("JANA", &[1, 1, 30, 40, 50], Category::Female),
            ],
        )
    }

    fn config() -> ReportConfig {
        ReportConfig {
            year_floor: 1921,
            generations: vec![
                Generation::new("Early", 1921, 1923),
                Generation::new("Late", 1923, 1925),
                Generation::new("Future", 2050, 2060),
            ],
            cohort_top_n: 1,
            overview_top_n: 5,
            peak_top_n: 2,
            share_axis_max: 0.5,
        }
    }

    #[test]
    fn display_name_lowercases_tail() {
        assert_eq!(display_name("JAN"), "Jan");
        assert_eq!(display_name("JAN-KAREL"), "Jan-karel");
        assert_eq!(display_name("ŠÁRKA"), "Šárka");
        assert_eq!(display_name(""), "");
    }

    #[test]
    fn builds_every_chart() {
        let mut charts: Vec<Chart> = Vec::new();
        let summary = build_report(&dataset(), &config(), &mut charts).unwrap();

        // TOMAS pruned, JAN KAREL merged into JAN.
        assert_eq!(summary.names, 4);
        // 2 generations x 2 sexes (Future skipped) + 2 all-time + peak share.
        assert_eq!(summary.charts, 7);
        assert_eq!(charts.len(), 7);

        let titles: Vec<&str> = charts.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Early — Men",
                "Late — Men",
                "All time — Men",
                "Early — Women",
                "Late — Women",
                "All time — Women",
                "Peak share — All",
            ]
        );
    }

    #[test]
    fn cohort_chart_ranks_within_generation_and_plots_full_range() {
        let mut charts: Vec<Chart> = Vec::new();
        build_report(&dataset(), &config(), &mut charts).unwrap();

        let early = &charts[0];
        assert_eq!(early.years, vec![1921, 1922, 1923, 1924]);
        assert_eq!(early.highlight, Some((1921, 1923)));
        // 1921-1922: PETR 29 beats JAN 20.
        assert_eq!(early.series.len(), 1);
        assert_eq!(early.series[0].name, "Petr");
        assert_eq!(early.series[0].total, 29);
        assert_eq!(early.series[0].values.len(), 4);

        let late_women = &charts[4];
        assert_eq!(late_women.series[0].name, "Jana");
        assert_eq!(late_women.series[0].total, 90);
    }

    #[test]
    fn merged_name_appears_in_all_time_chart() {
        let mut charts: Vec<Chart> = Vec::new();
        build_report(&dataset(), &config(), &mut charts).unwrap();

        let all_time_men = &charts[2];
        let jan = all_time_men.series.iter().find(|s| s.name == "Jan").unwrap();
        assert_eq!(jan.total, 45);
        assert!(all_time_men.series.iter().all(|s| s.name != "Tomas"));
    }

    #[test]
    fn run_cohorts_requires_normalized_partition() {
        let partition = aggregate(&[1921, 1922], &[("JAN", &[1, 1], Category::Male)]);
        let mut charts: Vec<Chart> = Vec::new();
        let result = run_cohorts(&partition, Category::Male, &config(), &mut charts);
        assert_eq!(
            result,
            Err(PipelineError::NotNormalized {
                name: "JAN".to_string()
            })
        );
    }

    #[test]
    fn degenerate_partition_is_skipped() {
        let only_men = aggregate(&[1921, 1922], &[("JAN", &[1, 1], Category::Male)]);
        let mut charts: Vec<Chart> = Vec::new();
        let summary = build_report(&only_men, &config(), &mut charts).unwrap();
        assert!(charts.iter().all(|c| !c.title.ends_with("Women")));
        assert_eq!(summary.charts, charts.len());
    }
}
