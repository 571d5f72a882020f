use super::model::{Aggregate, NameRecord};

/// Return the `n` highest-scoring names, best first.
///
/// The sort is stable, so names with equal scores keep the aggregate's
/// insertion order. NaN scores rank after every other score.
pub fn top_n<F>(aggregate: &Aggregate, n: usize, score_fn: F) -> Vec<String>
where
    F: Fn(&str, &NameRecord) -> f64,
{
    let mut scored: Vec<(&String, f64)> = aggregate
        .names
        .iter()
        .map(|(name, record)| (name, score_fn(name, record)))
        .collect();
    scored.sort_by(|(_, a), (_, b)| match (a.is_nan(), b.is_nan()) {
        (false, false) => b.total_cmp(a),
        (a_nan, b_nan) => a_nan.cmp(&b_nan),
    });
    scored.into_iter().take(n).map(|(name, _)| name.clone()).collect()
}

/// Score by raw birth count.
pub fn by_total(_name: &str, record: &NameRecord) -> f64 {
    record.total as f64
}

/// Score by the highest yearly share; names without shares score zero.
pub fn by_peak_share(_name: &str, record: &NameRecord) -> f64 {
    record.peak_share().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Category;
    use crate::data::model::fixtures::{aggregate, jan_eva};
    use crate::data::normalize::add_normalized;

    #[test]
    fn ranks_by_total() {
        assert_eq!(top_n(&jan_eva(), 2, by_total), vec!["Eva", "Jan"]);
    }

    #[test]
    fn n_larger_than_names_returns_all() {
        assert_eq!(top_n(&jan_eva(), 10, by_total).len(), 3);
        assert!(top_n(&jan_eva(), 0, by_total).is_empty());
    }

    #[test]
    fn ties_keep_insertion_order() {
        let agg = aggregate(
            &[2010],
            &[
                ("TEREZA", &[5], Category::Female),
                ("ADELA", &[5], Category::Female),
                ("KLARA", &[9], Category::Female),
                ("BARBORA", &[5], Category::Female),
            ],
        );
        assert_eq!(
            top_n(&agg, 4, by_total),
            vec!["KLARA", "TEREZA", "ADELA", "BARBORA"]
        );
    }

    #[test]
    fn peak_share_scoring() {
        let mut agg = aggregate(
            &[1950, 1951],
            &[
                ("STEADY", &[40, 40], Category::Male),
                ("SPIKE", &[0, 50], Category::Male),
                ("REST", &[60, 10], Category::Male),
            ],
        );
        add_normalized(&mut agg).unwrap();
        // STEADY 80 births peaks at 0.4, SPIKE 50 births peaks at 0.5.
        assert_eq!(top_n(&agg, 1, by_total), vec!["STEADY"]);
        assert_eq!(top_n(&agg, 2, by_peak_share), vec!["REST", "SPIKE"]);
    }

    #[test]
    fn custom_scorer_sees_the_name() {
        let by_length = |name: &str, _: &NameRecord| name.len() as f64;
        assert_eq!(top_n(&jan_eva(), 1, by_length), vec!["Jan-Karel"]);
    }

    #[test]
    fn nan_scores_rank_last() {
        let undefined = |_: &str, _: &NameRecord| f64::NAN;
        assert_eq!(top_n(&jan_eva(), 3, undefined), vec!["Jan", "Jan-Karel", "Eva"]);

        let eva_undefined = |name: &str, record: &NameRecord| {
            if name == "Eva" {
                f64::NAN
            } else {
                record.total as f64
            }
        };
        assert_eq!(top_n(&jan_eva(), 1, eva_undefined), vec!["Jan"]);
        assert_eq!(
            top_n(&jan_eva(), 3, eva_undefined),
            vec!["Jan", "Jan-Karel", "Eva"]
        );

        let negative_nan = |name: &str, _: &NameRecord| {
            if name == "Jan" {
                -f64::NAN
            } else {
                f64::NEG_INFINITY
            }
        };
        assert_eq!(top_n(&jan_eva(), 1, negative_nan), vec!["Jan-Karel"]);
    }
}
