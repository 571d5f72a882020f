use super::error::{PipelineError, PipelineResult};
use super::model::Aggregate;

/// Attach per-year and overall birth shares to every name, in place.
///
/// Fails with [`PipelineError::DegenerateRange`] before touching any record
/// when a year or the whole range has no births. Recomputes from the raw
/// counts each time, so repeated calls give the same result.
pub fn add_normalized(aggregate: &mut Aggregate) -> PipelineResult<()> {
    if let Some(i) = aggregate.year_totals.iter().position(|&total| total == 0) {
        return Err(PipelineError::DegenerateRange {
            year: aggregate.years.get(i).copied(),
        });
    }
    if aggregate.grand_total == 0 {
        return Err(PipelineError::DegenerateRange { year: None });
    }

    let grand_total = aggregate.grand_total as f64;
    for record in aggregate.names.values_mut() {
        let shares = record
            .frequencies
            .iter()
            .zip(&aggregate.year_totals)
            .map(|(&count, &total)| count as f64 / total as f64)
            .collect();
        record.normalized_frequencies = Some(shares);
        record.normalized_total = Some(record.total as f64 / grand_total);
    }
    log::debug!("normalized {} names over {} years", aggregate.names.len(), aggregate.years.len());
    Ok(())
}
