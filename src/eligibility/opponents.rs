use std::collections::HashSet;

use crate::domain::{Game, Player};

/// Distinct names `player_name` has met, in either role.
pub fn opponents_of<'a>(player_name: &str, games: &'a [Game]) -> HashSet<&'a str> {
    games
        .iter()
        .filter_map(|game| game.opponent_of(player_name))
        .collect()
}

/// Whether the player has met every other roster member.
///
/// Compares distinct opponents against the roster size, so a rematch does
/// not count twice.
pub fn has_completed_round_robin(player_name: &str, players: &[Player], games: &[Game]) -> bool {
    let others = players.len().saturating_sub(1);
    opponents_of(player_name, games).len() == others
}

/// Roster members that still have someone left to play
pub fn players_not_finished(players: &[Player], games: &[Game]) -> Vec<Player> {
    players
        .iter()
        .filter(|player| !has_completed_round_robin(&player.player_name, players, games))
        .cloned()
        .collect()
}

/// Players `winner_name` has not met yet, excluding the winner.
pub fn eligible_opponents_for(winner_name: &str, players: &[Player], games: &[Game]) -> Vec<Player> {
    let opponents = opponents_of(winner_name, games);
    players
        .iter()
        .filter(|player| {
            player.player_name != winner_name && !opponents.contains(player.player_name.as_str())
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn player(name: &str) -> Player {
        Player {
            player_name: name.to_string(),
            handicap: 0,
        }
    }

    fn roster(names: &[&str]) -> Vec<Player> {
        names.iter().map(|n| player(n)).collect()
    }

    fn game(id: i64, winner: &str, loser: &str) -> Game {
        Game {
            id,
            winner_name: winner.to_string(),
            loser_name: loser.to_string(),
            score: "10:6".to_string(),
            played_at: NaiveDate::from_ymd_opt(2025, 4, 1)
                .unwrap()
                .and_hms_opt(20, 0, 0)
                .unwrap(),
            bonus: 0,
        }
    }

    fn names(players: &[Player]) -> Vec<&str> {
        players.iter().map(|p| p.player_name.as_str()).collect()
    }

    #[test]
    fn test_opponents_in_both_roles() {
        let games = vec![game(1, "A", "B"), game(2, "C", "A"), game(3, "B", "C")];
        let opponents = opponents_of("A", &games);
        assert_eq!(opponents, HashSet::from(["B", "C"]));
    }

    #[test]
    fn test_opponents_are_distinct() {
        let games = vec![game(1, "A", "B"), game(2, "B", "A")];
        assert_eq!(opponents_of("A", &games).len(), 1);
    }

    #[test]
    fn test_opponent_symmetry() {
        let games = vec![game(1, "A", "B"), game(2, "C", "A"), game(3, "D", "B")];
        for g in &games {
            assert!(opponents_of(&g.winner_name, &games).contains(g.loser_name.as_str()));
            assert!(opponents_of(&g.loser_name, &games).contains(g.winner_name.as_str()));
        }
    }

    #[test]
    fn test_round_robin_completion() {
        let players = roster(&["A", "B", "C"]);
        let games = vec![game(1, "A", "B"), game(2, "C", "A")];

        assert!(has_completed_round_robin("A", &players, &games));
        assert!(!has_completed_round_robin("B", &players, &games));
        assert!(!has_completed_round_robin("C", &players, &games));
    }

    #[test]
    fn test_rematch_does_not_complete_round_robin() {
        let players = roster(&["A", "B", "C"]);
        let games = vec![game(1, "A", "B"), game(2, "B", "A")];

        assert!(!has_completed_round_robin("A", &players, &games));
    }

    #[test]
    fn test_lone_player_is_finished() {
        let players = roster(&["A"]);
        assert!(has_completed_round_robin("A", &players, &[]));
        assert!(players_not_finished(&players, &[]).is_empty());
    }

    #[test]
    fn test_players_not_finished_keeps_roster_order() {
        let players = roster(&["A", "B", "C", "D"]);
        let games = vec![game(1, "A", "B"), game(2, "A", "C"), game(3, "D", "A")];

        let unfinished = players_not_finished(&players, &games);
        assert_eq!(names(&unfinished), vec!["B", "C", "D"]);
    }

    #[test]
    fn test_eligible_opponents() {
        let players = roster(&["A", "B", "C", "D"]);
        let games = vec![game(1, "A", "B"), game(2, "D", "A")];

        let eligible = eligible_opponents_for("A", &players, &games);
        assert_eq!(names(&eligible), vec!["C"]);
    }

    #[test]
    fn test_eligible_opponents_never_contain_winner_or_past_opponents() {
        let players = roster(&["A", "B", "C", "D", "E"]);
        let games = vec![game(1, "B", "C"), game(2, "E", "B"), game(3, "A", "D")];

        for p in &players {
            let eligible = eligible_opponents_for(&p.player_name, &players, &games);
            let opponents = opponents_of(&p.player_name, &games);
            for candidate in &eligible {
                assert_ne!(candidate.player_name, p.player_name);
                assert!(!opponents.contains(candidate.player_name.as_str()));
            }
        }
    }

    #[test]
    fn test_unknown_winner_can_face_everyone() {
        let players = roster(&["A", "B"]);
        let eligible = eligible_opponents_for("Z", &players, &[]);
        assert_eq!(names(&eligible), vec!["A", "B"]);
    }
}
