use indexmap::IndexMap;

use super::error::PipelineResult;
use super::model::{Aggregate, NameRecord, check_consistent};

/// Whether `name` is a variant of the group led by `leader`.
///
/// A variant is the leader followed by a space (`JAN KAREL`) or a hyphen
/// (`JAN-KAREL`).
fn joins_group(name: &str, leader: &str) -> bool {
    let before_space = name.split(' ').next().unwrap_or(name);
    let before_hyphen = name.split('-').next().unwrap_or(name);
    before_space == leader || before_hyphen == leader
}

/// Fold multi-word and hyphenated names into their base name, in place.
///
/// Names are walked in lexicographic order. The first name of a run becomes
/// the group key and keeps its category; following variants add their counts
/// to it. When the bare base never appears on its own, the first variant in
/// sort order leads the group.
pub fn merge_multinames(aggregate: &mut Aggregate) -> PipelineResult<()> {
    let before = aggregate.names.len();
    let mut sorted: Vec<(String, NameRecord)> =
        std::mem::take(&mut aggregate.names).into_iter().collect();
    sorted.sort_by(|(a, _), (b, _)| a.cmp(b));

    let mut merged: IndexMap<String, NameRecord> = IndexMap::with_capacity(sorted.len());
    let mut group: Option<(String, NameRecord)> = None;

    for (name, record) in sorted {
        let joins = matches!(&group, Some((leader, _)) if joins_group(&name, leader));
        match group.as_mut() {
            Some((_, acc)) if joins => {
                acc.total += record.total;
                for (slot, count) in acc.frequencies.iter_mut().zip(&record.frequencies) {
                    *slot += count;
                }
            }
            _ => {
                if let Some((leader, acc)) = group.replace((name, record)) {
                    merged.insert(leader, acc);
                }
            }
        }
    }
    if let Some((leader, acc)) = group {
        merged.insert(leader, acc);
    }

    for record in merged.values_mut() {
        record.clear_shares();
    }
    aggregate.names = merged;
    log::debug!("merged {before} names into {}", aggregate.names.len());

    check_consistent(aggregate)
}
