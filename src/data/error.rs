use thiserror::Error;

// ---------------------------------------------------------------------------
// PipelineError – everything a transform can report
// ---------------------------------------------------------------------------

/// Failures raised by the aggregate transforms.
///
/// `Invariant`, `Misaligned`, `NonContiguousYears` and `Unconserved` point at
/// a defect in the input or a transform and must abort the run.
/// `DegenerateRange` is recoverable: a caller may skip the offending year
/// range instead of publishing meaningless shares.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    #[error(
        "rollups do not reconcile: year totals sum to {year_sum}, \
         name totals sum to {name_sum}, grand total is {grand_total}"
    )]
    Invariant {
        year_sum: u64,
        name_sum: u64,
        grand_total: u64,
    },

    #[error("{what} has {found} values but there are {expected} years")]
    Misaligned {
        what: String,
        expected: usize,
        found: usize,
    },

    /// Years are consecutive and strictly increasing.
    #[error("year labels must be contiguous: {previous} is followed by {next}")]
    NonContiguousYears { previous: i32, next: i32 },

    /// Partitioning lost or invented births.
    #[error("partitions hold {found} births but the split aggregate holds {expected}")]
    Unconserved { expected: u64, found: u64 },

    #[error("no births recorded in {}, shares are undefined", describe_range(.year))]
    DegenerateRange { year: Option<i32> },

    #[error("classifier returned unknown category '{code}' for name '{name}'")]
    UnknownCategory { name: String, code: String },

    #[error("name '{name}' has no normalized frequencies")]
    NotNormalized { name: String },
}

fn describe_range(year: &Option<i32>) -> String {
    match year {
        Some(year) => year.to_string(),
        None => "the selected range".to_string(),
    }
}

pub type PipelineResult<T> = Result<T, PipelineError>;
