/// Share of a player's round robin already played, floored.
///
/// A roster of zero or one player has nobody to play, so the rate is 0.
/// The value is not clamped at 100 (duplicate pairings can push it past),
/// only saturated at `u32::MAX`.
pub fn player_progress_rate(games_played: u32, player_count: usize) -> u32 {
    if player_count <= 1 {
        return 0;
    }
    let opponents = (player_count - 1) as u64;
    u32::try_from(u64::from(games_played) * 100 / opponents).unwrap_or(u32::MAX)
}

/// Number of unordered pairings in a full round robin
pub fn total_possible_games(player_count: usize) -> usize {
    player_count * player_count.saturating_sub(1) / 2
}

/// Played share of all pairings, rounded half up.
pub fn league_progress_percent(games_played: usize, total_possible: usize) -> u32 {
    if total_possible == 0 {
        return 0;
    }
    let played = games_played as u64;
    let possible = total_possible as u64;
    u32::try_from((played * 200 + possible) / (possible * 2)).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_progress_is_zero_without_opponents() {
        assert_eq!(player_progress_rate(0, 0), 0);
        assert_eq!(player_progress_rate(5, 1), 0);
    }

    #[test]
    fn test_player_progress_floors() {
        // 2 of 3 opponents -> 66.6%
        assert_eq!(player_progress_rate(2, 4), 66);
        assert_eq!(player_progress_rate(3, 4), 100);
    }

    #[test]
    fn test_player_progress_is_not_clamped() {
        assert_eq!(player_progress_rate(3, 2), 300);
    }

    #[test]
    fn test_player_progress_saturates() {
        assert_eq!(player_progress_rate(u32::MAX, 2), u32::MAX);
        assert_eq!(player_progress_rate(u32::MAX, 201), u32::MAX / 2);
    }

    #[test]
    fn test_total_possible_games() {
        assert_eq!(total_possible_games(0), 0);
        assert_eq!(total_possible_games(1), 0);
        assert_eq!(total_possible_games(2), 1);
        assert_eq!(total_possible_games(3), 3);
        assert_eq!(total_possible_games(10), 45);
    }

    #[test]
    fn test_league_progress_rounds() {
        assert_eq!(league_progress_percent(2, 3), 67);
        assert_eq!(league_progress_percent(1, 3), 33);
        assert_eq!(league_progress_percent(1, 8), 13); // 12.5
        assert_eq!(league_progress_percent(45, 45), 100);
    }

    #[test]
    fn test_league_progress_without_pairings() {
        assert_eq!(league_progress_percent(0, 0), 0);
        assert_eq!(league_progress_percent(4, 0), 0);
    }
}
