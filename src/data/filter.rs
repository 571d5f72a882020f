use std::ops::Range;

use super::error::PipelineResult;
use super::model::{Aggregate, check_consistent};

// ---------------------------------------------------------------------------
// Year-range filter
// ---------------------------------------------------------------------------

/// Index range of `years` covering `[year_from, year_to)`, clamped to the data.
///
/// Offsets are taken relative to the first year, so a range that starts
/// before the data or ends after it is cut down instead of rejected. An
/// inverted or disjoint range comes back empty.
fn year_slice(years: &[i32], year_from: i32, year_to: i32) -> Range<usize> {
    let Some(&first) = years.first() else {
        return 0..0;
    };
    let clamp = |year: i32| -> usize {
        let offset = i64::from(year) - i64::from(first);
        offset.clamp(0, years.len() as i64) as usize
    };
    let start = clamp(year_from);
    let end = clamp(year_to).max(start);
    start..end
}

/// Return a copy of `aggregate` restricted to the years in `[year_from, year_to)`.
///
/// Year totals are sliced as they are; the grand total and every name total
/// are recomputed from the sliced vectors. Derived shares are dropped.
pub fn filter_years(aggregate: &Aggregate, year_from: i32, year_to: i32) -> PipelineResult<Aggregate> {
    let range = year_slice(&aggregate.years, year_from, year_to);

    let years = aggregate.years[range.clone()].to_vec();
    let year_totals = aggregate.year_totals[range.clone()].to_vec();
    let grand_total = year_totals.iter().sum();

    let names = aggregate
        .names
        .iter()
        .map(|(name, record)| {
            let mut record = record.clone();
            record.frequencies = record.frequencies[range.clone()].to_vec();
            record.total = record.frequencies.iter().sum();
            record.clear_shares();
            (name.clone(), record)
        })
        .collect();

    let filtered = Aggregate {
        years,
        year_totals,
        grand_total,
        names,
    };
    log::debug!(
        "filtered years [{year_from}, {year_to}) -> {} years, {} births",
        filtered.years.len(),
        filtered.grand_total
    );

    check_consistent(&filtered)?;
    Ok(filtered)
}

// ---------------------------------------------------------------------------
// Zero-pruner
// ---------------------------------------------------------------------------

/// Drop every name with a zero total and recompute the rollups in place.
pub fn filter_names(aggregate: &mut Aggregate) -> PipelineResult<()> {
    let before = aggregate.names.len();
    aggregate.names.retain(|_, record| record.total > 0);
    aggregate.recompute_rollups();
    for record in aggregate.names.values_mut() {
        record.clear_shares();
    }
    log::debug!(
        "pruned {} zero-total names, {} left",
        before - aggregate.names.len(),
        aggregate.names.len()
    );

    check_consistent(aggregate)
}
