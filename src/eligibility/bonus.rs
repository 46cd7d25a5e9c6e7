/// Bonus point for the winner of a game.
///
/// Awarded when the loser's handicap is at least `gap` above the winner's.
/// Evaluated once, when the game is recorded.
pub fn bonus_for(winner_handicap: i32, loser_handicap: i32, gap: i32) -> i32 {
    if i64::from(loser_handicap) - i64::from(winner_handicap) >= i64::from(gap) {
        1
    } else {
        0
    }
}
