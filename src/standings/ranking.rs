use super::types::{PlayerStat, Rank};

/// Orders the table by descending score and assigns competition ranks.
///
/// The sort is stable, so tied players keep their roster order. Tied scores
/// share a rank and the next lower score takes its 1-indexed position
/// ("1224" ranking).
pub fn sort_and_rank(stats: &mut [PlayerStat]) {
    stats.sort_by(|a, b| b.score.cmp(&a.score));
    assign_ranks(stats);
}

fn assign_ranks(stats: &mut [PlayerStat]) {
    let mut rank: Rank = 1;
    let mut previous_score = None;

    for (position, stat) in stats.iter_mut().enumerate() {
        if previous_score.is_some_and(|previous| stat.score < previous) {
            rank = position + 1;
        }
        stat.rank = rank;
        previous_score = Some(stat.score);
    }
}
