use std::cmp::Ordering;

use super::engine::score_with;
use super::report::ScoreReporter;
use crate::carer::CarerRecord;

/// A carer paired with the score it was ranked by.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedCarer {
    pub carer: CarerRecord,
    pub score: f64,
}

/// Score every carer once, in input order, then sort by score descending.
///
/// The sort is stable: carers with equal scores keep their input order. NaN
/// scores (only reachable through a NaN `avg_review`) rank last.
pub fn rank_scored<R: ScoreReporter + ?Sized>(
    carers: Vec<CarerRecord>,
    reporter: &R,
) -> Vec<RankedCarer> {
    let mut ranked: Vec<RankedCarer> = carers
        .into_iter()
        .map(|carer| {
            let score = score_with(&carer, reporter);
            RankedCarer { carer, score }
        })
        .collect();

    ranked.sort_by(|a, b| descending(a.score, b.score));
    ranked
}

fn descending(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}

/// Same ordering as [`rank_scored`], without the scores.
pub fn rank_by_score<R: ScoreReporter + ?Sized>(
    carers: Vec<CarerRecord>,
    reporter: &R,
) -> Vec<CarerRecord> {
    rank_scored(carers, reporter)
        .into_iter()
        .map(|ranked| ranked.carer)
        .collect()
}
