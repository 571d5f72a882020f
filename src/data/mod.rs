/// Data layer: the aggregate, its loader and the transforms over it.
///
/// Architecture:
/// ```text
///   names.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse rows, classify names → Aggregate
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐   ┌──────────┐   ┌──────────┐
///   │  filter   │ → │  merge    │ → │  filter   │  year floor, variants, zero names
///   └──────────┘   └──────────┘   └──────────┘
///        │
///        ▼
///   ┌───────────┐   ┌───────────┐   ┌──────────┐
///   │ partition  │ → │ normalize  │ → │  rank     │  per sex, per generation
///   └───────────┘   └───────────┘   └──────────┘
/// ```
///
/// Every transform ends with [`model::check_consistent`].

pub mod classify;
pub mod error;
pub mod filter;
pub mod loader;
pub mod merge;
pub mod model;
pub mod normalize;
pub mod partition;
pub mod rank;

#[cfg(test)]
mod properties;
