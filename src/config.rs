use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Generations
// ---------------------------------------------------------------------------

/// A named birth cohort covering `[year_from, year_to)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Generation {
    pub name: String,
    pub year_from: i32,
    pub year_to: i32,
}

impl Generation {
    pub fn new(name: &str, year_from: i32, year_to: i32) -> Self {
        Generation {
            name: name.to_string(),
            year_from,
            year_to,
        }
    }
}

// ---------------------------------------------------------------------------
// Report configuration
// ---------------------------------------------------------------------------

/// Everything the report builder needs besides the dataset.
///
/// A JSON file may override any subset of the fields:
///
/// ```json
/// { "year_floor": 1950, "cohort_top_n": 3 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Years before this are dropped before merging.
    pub year_floor: i32,
    pub generations: Vec<Generation>,
    /// Names charted per generation.
    pub cohort_top_n: usize,
    /// Names charted in the all-time chart of each sex.
    pub overview_top_n: usize,
    /// Names charted by peak yearly share.
    pub peak_top_n: usize,
    /// Upper bound of the share axis (0.16 = 16 %).
    pub share_axis_max: f64,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            year_floor: 1925,
            generations: vec![
                Generation::new("Silent Generation", 1925, 1945),
                Generation::new("Baby Boomers", 1945, 1963),
                Generation::new("Generation X", 1963, 1980),
                Generation::new("Generation Y", 1980, 1998),
                Generation::new("Generation Z", 2000, 2017),
            ],
            cohort_top_n: 4,
            overview_top_n: 5,
            peak_top_n: 10,
            share_axis_max: 0.16,
        }
    }
}

impl ReportConfig {
    /// Read a JSON configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config: ReportConfig = serde_json::from_str(&text).context("parsing report config")?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that cannot produce a chart.
    pub fn validate(&self) -> Result<()> {
        if self.cohort_top_n == 0 {
            bail!("cohort_top_n must be at least 1");
        }
        for generation in &self.generations {
            if generation.year_from >= generation.year_to {
                bail!(
                    "generation '{}' has an empty range {}..{}",
                    generation.name,
                    generation.year_from,
                    generation.year_to
                );
            }
        }
        if !(self.share_axis_max > 0.0) {
            bail!("share_axis_max must be positive");
        }
        Ok(())
    }
}
