//! Property tests: every transform keeps the rollups reconciled.

use proptest::prelude::*;

use super::filter::{filter_names, filter_years};
use super::merge::merge_multinames;
use super::model::{Aggregate, Category, NameRecord, check_consistent};
use super::normalize::add_normalized;
use super::partition::partition_by_category;
use super::rank::{by_total, top_n};

const FIRST_YEAR: i32 = 1950;
const BASES: &[&str] = &["ANNA", "EVA", "JAN", "PETR"];
const SUFFIXES: &[&str] = &["", "A", " KAREL", "-MARIE", " MARIE-LUISA"];

fn arb_aggregate() -> impl Strategy<Value = Aggregate> {
    (1usize..8)
        .prop_flat_map(|n_years| {
            let row = (
                prop::sample::select(BASES),
                prop::sample::select(SUFFIXES),
                prop::collection::vec(0u64..40, n_years),
                any::<bool>(),
            );
            (Just(n_years), prop::collection::vec(row, 0..12))
        })
        .prop_map(|(n_years, rows)| {
            let years = (0..n_years as i32).map(|i| FIRST_YEAR + i).collect();
            let names = rows
                .into_iter()
                .map(|(base, suffix, freqs, male)| {
                    let category = if male { Category::Male } else { Category::Female };
                    (format!("{base}{suffix}"), NameRecord::new(freqs, category))
                })
                .collect();
            Aggregate::from_names(years, names)
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn pipeline_preserves_invariant(
        agg in arb_aggregate(),
        from in 1945i32..1960,
        len in 0i32..10,
    ) {
        let mut data = filter_years(&agg, from, from + len).unwrap();
        prop_assert!(check_consistent(&data).is_ok());
        merge_multinames(&mut data).unwrap();
        prop_assert!(check_consistent(&data).is_ok());
        filter_names(&mut data).unwrap();
        prop_assert!(check_consistent(&data).is_ok());
        prop_assert!(data.names.values().all(|r| r.total > 0));
        for partition in partition_by_category(&data).unwrap().values() {
            prop_assert!(check_consistent(partition).is_ok());
        }
    }

    #[test]
    fn full_range_filter_is_identity(agg in arb_aggregate()) {
        let last = *agg.years.last().unwrap();
        let filtered = filter_years(&agg, FIRST_YEAR, last + 1).unwrap();
        prop_assert_eq!(filtered, agg);
    }

    #[test]
    fn partition_conserves_births(agg in arb_aggregate()) {
        let parts = partition_by_category(&agg).unwrap();
        let total: u64 = parts.values().map(|p| p.grand_total).sum();
        prop_assert_eq!(total, agg.grand_total);

        let count: usize = parts.values().map(|p| p.len()).sum();
        prop_assert_eq!(count, agg.len());
        for name in agg.names.keys() {
            let owners = parts.values().filter(|p| p.names.contains_key(name)).count();
            prop_assert_eq!(owners, 1);
        }
    }

    #[test]
    fn merge_never_expands(agg in arb_aggregate()) {
        let mut merged = agg.clone();
        merge_multinames(&mut merged).unwrap();
        prop_assert!(merged.len() <= agg.len());
        prop_assert_eq!(merged.grand_total, agg.grand_total);
        prop_assert_eq!(&merged.year_totals, &agg.year_totals);
    }

    #[test]
    fn shares_are_bounded(agg in arb_aggregate()) {
        let mut agg = agg;
        prop_assume!(agg.year_totals.iter().all(|&t| t > 0));
        add_normalized(&mut agg).unwrap();

        for (i, &year_total) in agg.year_totals.iter().enumerate() {
            let counted: u64 = agg.names.values().map(|r| r.frequencies[i]).sum();
            prop_assert_eq!(counted, year_total);
            for record in agg.names.values() {
                let share = record.normalized_frequencies.as_ref().unwrap()[i];
                prop_assert!((0.0..=1.0).contains(&share));
            }
        }
    }

    #[test]
    fn ranking_is_sorted_subset(agg in arb_aggregate(), n in 0usize..15) {
        let ranked = top_n(&agg, n, by_total);
        prop_assert_eq!(ranked.len(), n.min(agg.len()));
        for pair in ranked.windows(2) {
            prop_assert!(agg.names[&pair[0]].total >= agg.names[&pair[1]].total);
        }
        for name in &ranked {
            prop_assert!(agg.names.contains_key(name));
        }
    }
}
