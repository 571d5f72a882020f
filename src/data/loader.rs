use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use indexmap::IndexMap;

use super::classify::Classifier;
use super::model::{Aggregate, Category, NameRecord, check_consistent, check_years};

/// First cell of the row carrying the year labels.
pub const YEAR_HEADER: &str = "JMÉNO";
/// First cell of the row carrying the per-year and grand totals.
pub const TOTALS_ROW: &str = "SOUČET";

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a name-statistics CSV file and classify every name.
pub fn load_file(path: &Path, classifier: &dyn Classifier) -> Result<Aggregate> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening {}", path.display()))?;
    load_reader(file, classifier).with_context(|| format!("loading {}", path.display()))
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout, no header record, rows of equal width:
///
/// ```text
/// JMÉNO,  1925, 1926, …, <ignored>, <ignored>
/// SOUČET, 4012, 4120, …, <ignored>, <grand total>
/// JAN,    310,  298,  …, <ignored>, <name total>
/// ```
///
/// Cells between the first and the last two columns are per-year values.
/// The result already satisfies the rollup invariant.
pub fn load_reader<R: Read>(input: R, classifier: &dyn Classifier) -> Result<Aggregate> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);

    let mut years: Option<Vec<i32>> = None;
    let mut totals: Option<(Vec<u64>, u64)> = None;
    let mut names: IndexMap<String, NameRecord> = IndexMap::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        let label = record.get(0).unwrap_or("").trim();
        if label.is_empty() {
            continue;
        }
        if record.len() < 3 {
            bail!("CSV row {row_no} ('{label}'): expected at least 3 columns, got {}", record.len());
        }
        let values: Vec<&str> = record.iter().skip(1).take(record.len() - 3).collect();
        let last = record.get(record.len() - 1).unwrap_or("");

        match label {
            YEAR_HEADER => {
                let parsed = values
                    .iter()
                    .map(|v| parse_cell::<i32>(v, row_no, "year"))
                    .collect::<Result<Vec<_>>>()?;
                check_years(&parsed).with_context(|| format!("CSV row {row_no}"))?;
                years = Some(parsed);
            }
            TOTALS_ROW => {
                let year_totals = parse_counts(&values, row_no)?;
                let grand_total = parse_cell::<u64>(last, row_no, "grand total")?;
                totals = Some((year_totals, grand_total));
            }
            name => {
                let frequencies = parse_counts(&values, row_no)?;
                let declared = parse_cell::<u64>(last, row_no, "name total")?;

                let code = classifier.classify(name);
                let category = Category::from_code(name, &code)?;
                let record = NameRecord::new(frequencies, category);
                if record.total != declared {
                    bail!(
                        "CSV row {row_no}: '{name}' declares total {declared} \
                         but its yearly counts sum to {}",
                        record.total
                    );
                }
                if names.insert(name.to_string(), record).is_some() {
                    bail!("CSV row {row_no}: duplicate name '{name}'");
                }
            }
        }
    }

    let years = years.with_context(|| format!("missing '{YEAR_HEADER}' header row"))?;
    let (year_totals, grand_total) =
        totals.with_context(|| format!("missing '{TOTALS_ROW}' totals row"))?;

    let aggregate = Aggregate {
        years,
        year_totals,
        grand_total,
        names,
    };
    check_consistent(&aggregate).context("dataset totals do not reconcile")?;

    log::info!(
        "Loaded {} names over {:?}, {} births",
        aggregate.len(),
        aggregate.year_span(),
        aggregate.grand_total
    );
    Ok(aggregate)
}

fn parse_counts(values: &[&str], row: usize) -> Result<Vec<u64>> {
    values
        .iter()
        .map(|v| parse_cell::<u64>(v, row, "count"))
        .collect()
}

fn parse_cell<T: std::str::FromStr>(cell: &str, row: usize, what: &str) -> Result<T> {
    cell.trim()
        .parse::<T>()
        .ok()
        .with_context(|| format!("Row {row}: '{cell}' is not a valid {what}"))
}
