use std::collections::BTreeMap;

use indexmap::IndexMap;

use super::error::{PipelineError, PipelineResult};
use super::model::{Aggregate, Category, NameRecord, check_consistent};

/// Split `aggregate` into one independent aggregate per [`Category`].
///
/// Every category of the closed set gets an entry, possibly empty. Names keep
/// their relative order, rollups are recomputed per partition and derived
/// shares are dropped.
pub fn partition_by_category(aggregate: &Aggregate) -> PipelineResult<BTreeMap<Category, Aggregate>> {
    let mut buckets: BTreeMap<Category, IndexMap<String, NameRecord>> =
        Category::ALL.iter().map(|&c| (c, IndexMap::new())).collect();

    for (name, record) in &aggregate.names {
        let mut record = record.clone();
        record.clear_shares();
        buckets
            .entry(record.category)
            .or_default()
            .insert(name.clone(), record);
    }

    let partitions: BTreeMap<Category, Aggregate> = buckets
        .into_iter()
        .map(|(category, names)| (category, Aggregate::from_names(aggregate.years.clone(), names)))
        .collect();

    for (category, partition) in &partitions {
        check_consistent(partition)?;
        log::debug!(
            "partition {category}: {} names, {} births",
            partition.len(),
            partition.grand_total
        );
    }

    let split_total: u64 = partitions.values().map(|p| p.grand_total).sum();
    if split_total != aggregate.grand_total {
        return Err(PipelineError::Unconserved {
            expected: aggregate.grand_total,
            found: split_total,
        });
    }
    Ok(partitions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::merge::merge_multinames;
    use crate::data::model::fixtures::{aggregate, jan_eva};

    #[test]
    fn splits_merged_scenario() {
        let mut agg = jan_eva();
        merge_multinames(&mut agg).unwrap();
        let parts = partition_by_category(&agg).unwrap();

        let male = &parts[&Category::Male];
        let female = &parts[&Category::Female];
        assert_eq!(male.grand_total, 35);
        assert_eq!(male.year_totals, vec![10, 25]);
        assert_eq!(female.grand_total, 60);
        assert_eq!(female.year_totals, vec![30, 30]);
    }

    #[test]
    fn names_are_disjoint_and_complete() {
        let agg = jan_eva();
        let parts = partition_by_category(&agg).unwrap();

        let mut seen: Vec<&String> = parts.values().flat_map(|p| p.names.keys()).collect();
        seen.sort();
        let mut expected: Vec<&String> = agg.names.keys().collect();
        expected.sort();
        assert_eq!(seen, expected);
        assert!(parts.values().all(|p| p.years == agg.years));
    }

    #[test]
    fn missing_category_yields_empty_partition() {
        let agg = aggregate(&[2001, 2002], &[("TOMAS", &[1, 1], Category::Male)]);
        let parts = partition_by_category(&agg).unwrap();

        let female = &parts[&Category::Female];
        assert!(female.is_empty());
        assert_eq!(female.year_totals, vec![0, 0]);
        assert_eq!(female.grand_total, 0);
    }

    #[test]
    fn keeps_relative_order() {
        let agg = aggregate(
            &[2001],
            &[
                ("ZDENEK", &[1], Category::Male),
                ("ALENA", &[1], Category::Female),
                ("ADAM", &[1], Category::Male),
            ],
        );
        let parts = partition_by_category(&agg).unwrap();
        let male: Vec<&str> = parts[&Category::Male].names.keys().map(String::as_str).collect();
        assert_eq!(male, vec!["ZDENEK", "ADAM"]);
    }
}
