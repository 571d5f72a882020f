use std::fmt;

use indexmap::IndexMap;

use super::error::{PipelineError, PipelineResult};

// ---------------------------------------------------------------------------
// Category – the closed set a classifier may assign
// ---------------------------------------------------------------------------

/// Grammatical gender of a given name.
///
/// Ordered so that partitions come out in a stable order (`Male` first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Male,
    Female,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Male, Category::Female];

    /// Map a classifier code onto the closed set.
    pub fn from_code(name: &str, code: &str) -> PipelineResult<Self> {
        match code {
            "m" => Ok(Category::Male),
            "w" | "f" => Ok(Category::Female),
            other => Err(PipelineError::UnknownCategory {
                name: name.to_string(),
                code: other.to_string(),
            }),
        }
    }

    /// Plural label used in chart titles.
    pub fn label(self) -> &'static str {
        match self {
            Category::Male => "Men",
            Category::Female => "Women",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// NameRecord – one row of the dataset
// ---------------------------------------------------------------------------

/// Per-name counts aligned with [`Aggregate::years`].
#[derive(Debug, Clone, PartialEq)]
pub struct NameRecord {
    /// Births per year.
    pub frequencies: Vec<u64>,
    /// Sum of `frequencies`.
    pub total: u64,
    /// Assigned once at load time.
    pub category: Category,
    /// `frequencies[i] / year_totals[i]`, filled by the normalizer.
    pub normalized_frequencies: Option<Vec<f64>>,
    /// `total / grand_total`, filled by the normalizer.
    pub normalized_total: Option<f64>,
}

impl NameRecord {
    pub fn new(frequencies: Vec<u64>, category: Category) -> Self {
        let total = frequencies.iter().sum();
        NameRecord {
            frequencies,
            total,
            category,
            normalized_frequencies: None,
            normalized_total: None,
        }
    }

    /// Drop derived shares once the counts or rollups they refer to change.
    pub fn clear_shares(&mut self) {
        self.normalized_frequencies = None;
        self.normalized_total = None;
    }

    /// Highest yearly share, if shares were computed.
    pub fn peak_share(&self) -> Option<f64> {
        self.normalized_frequencies
            .as_ref()
            .map(|shares| shares.iter().copied().fold(0.0, f64::max))
    }
}

// ---------------------------------------------------------------------------
// Aggregate – the dataset at one pipeline stage
// ---------------------------------------------------------------------------

/// Counts by name and year, plus the rollups derived from them.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregate {
    /// Strictly increasing, contiguous year labels.
    pub years: Vec<i32>,
    /// Births per year over all names.
    pub year_totals: Vec<u64>,
    /// Sum of `year_totals`.
    pub grand_total: u64,
    /// Insertion-ordered; rank ties fall back to this order.
    pub names: IndexMap<String, NameRecord>,
}

impl Aggregate {
    /// Build an aggregate whose rollups are recomputed from `names`.
    pub fn from_names(years: Vec<i32>, names: IndexMap<String, NameRecord>) -> Self {
        let year_totals = sum_frequencies(years.len(), names.values());
        let grand_total = year_totals.iter().sum();
        Aggregate {
            years,
            year_totals,
            grand_total,
            names,
        }
    }

    /// Recompute `year_totals` and `grand_total` from the current names.
    pub fn recompute_rollups(&mut self) {
        self.year_totals = sum_frequencies(self.years.len(), self.names.values());
        self.grand_total = self.year_totals.iter().sum();
    }

    /// Number of names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the aggregate holds no names.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// First and last year, if any.
    pub fn year_span(&self) -> Option<(i32, i32)> {
        Some((*self.years.first()?, *self.years.last()?))
    }
}

/// Index-wise sum of the frequencies of `records`.
fn sum_frequencies<'a>(len: usize, records: impl Iterator<Item = &'a NameRecord>) -> Vec<u64> {
    let mut totals = vec![0; len];
    for record in records {
        for (slot, count) in totals.iter_mut().zip(&record.frequencies) {
            *slot += count;
        }
    }
    totals
}

// ---------------------------------------------------------------------------
// Invariant checker
// ---------------------------------------------------------------------------

/// Verify that all rollups of `aggregate` reconcile.
///
/// Every vector must be aligned with `years`, the year totals must sum to the
/// grand total, and so must the name totals.
pub fn check_consistent(aggregate: &Aggregate) -> PipelineResult<()> {
    check_years(&aggregate.years)?;
    let expected = aggregate.years.len();
    if aggregate.year_totals.len() != expected {
        return Err(PipelineError::Misaligned {
            what: "year totals".to_string(),
            expected,
            found: aggregate.year_totals.len(),
        });
    }
    for (name, record) in &aggregate.names {
        if record.frequencies.len() != expected {
            return Err(PipelineError::Misaligned {
                what: format!("name '{name}'"),
                expected,
                found: record.frequencies.len(),
            });
        }
    }

    let year_sum: u64 = aggregate.year_totals.iter().sum();
    let name_sum: u64 = aggregate.names.values().map(|r| r.total).sum();
    if year_sum != aggregate.grand_total || name_sum != aggregate.grand_total {
        return Err(PipelineError::Invariant {
            year_sum,
            name_sum,
            grand_total: aggregate.grand_total,
        });
    }
    Ok(())
}

/// Year labels must step by exactly one: filtering slices by offset from the
/// first year.
pub fn check_years(years: &[i32]) -> PipelineResult<()> {
    match years.windows(2).find(|w| w[0].checked_add(1) != Some(w[1])) {
        Some(w) => Err(PipelineError::NonContiguousYears {
            previous: w[0],
            next: w[1],
        }),
        None => Ok(()),
    }
}

// ---------------------------------------------------------------------------
// Test fixtures
// ---------------------------------------------------------------------------

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// Aggregate built from `(name, frequencies, category)` rows.
    pub fn aggregate(years: &[i32], rows: &[(&str, &[u64], Category)]) -> Aggregate {
        let names = rows
            .iter()
            .map(|(name, freqs, category)| {
                (name.to_string(), NameRecord::new(freqs.to_vec(), *category))
            })
            .collect();
        Aggregate::from_names(years.to_vec(), names)
    }

    /// The two-year scenario with a hyphenated variant.
    pub fn jan_eva() -> Aggregate {
        aggregate(
            &[1925, 1926],
            &[
                ("Jan", &[10, 20], Category::Male),
                ("Jan-Karel", &[0, 5], Category::Male),
                ("Eva", &[30, 30], Category::Female),
            ],
        )
    }
}
