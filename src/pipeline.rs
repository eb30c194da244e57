use std::path::Path;

use crate::error::Result;
use crate::scoring::{rank_scored, RankedCarer, ScoreReporter};
use crate::storage::{load_carers, write_carers};

/// Load a roster and rank it without writing anything.
pub fn rank_roster<R: ScoreReporter + ?Sized>(
    input: &Path,
    reporter: &R,
) -> Result<Vec<RankedCarer>> {
    let carers = load_carers(input)?;
    Ok(rank_scored(carers, reporter))
}

/// Load `input`, rank every carer and write the ranked roster to `output`.
///
/// Nothing is written unless the whole batch loads and scores.
pub fn rank_file<R: ScoreReporter + ?Sized>(
    input: &Path,
    output: &Path,
    reporter: &R,
) -> Result<Vec<RankedCarer>> {
    let ranked = rank_roster(input, reporter)?;
    let carers: Vec<_> = ranked.iter().map(|entry| entry.carer.clone()).collect();
    write_carers(output, &carers)?;
    tracing::info!(
        count = ranked.len(),
        output = %output.display(),
        "ranked roster written"
    );
    Ok(ranked)
}
