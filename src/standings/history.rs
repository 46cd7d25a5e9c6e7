use super::calculator::game_points;
use super::types::{HistoryEntry, Outcome, PlayerHistory};
use crate::config::settings::LeagueSettings;
use crate::domain::{Game, Player};

/// A player's games sorted oldest first, with the points each one earned.
pub fn player_history(
    player_name: &str,
    players: &[Player],
    games: &[Game],
    settings: &LeagueSettings,
) -> PlayerHistory {
    let handicap_of = |name: &str| {
        players
            .iter()
            .find(|p| p.player_name == name)
            .map(|p| p.handicap)
    };

    let mut own_games: Vec<&Game> = games.iter().filter(|g| g.involves(player_name)).collect();
    own_games.sort_by_key(|g| g.played_at);

    let entries: Vec<HistoryEntry> = own_games
        .into_iter()
        .filter_map(|game| {
            let opponent = game.opponent_of(player_name)?;
            let outcome = if game.winner_name == player_name {
                Outcome::Win
            } else {
                Outcome::Loss
            };
            Some(HistoryEntry {
                game_id: game.id,
                played_at: game.played_at,
                opponent_name: opponent.to_string(),
                opponent_handicap: handicap_of(opponent),
                outcome,
                score: game.score.clone(),
                bonus: if outcome == Outcome::Win { game.bonus } else { 0 },
                points: game_points(game, player_name, settings),
            })
        })
        .collect();

    PlayerHistory {
        player_name: player_name.to_string(),
        handicap: handicap_of(player_name),
        total_score: entries.iter().map(|e| e.points).sum(),
        entries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn player(name: &str, handicap: i32) -> Player {
        Player {
            player_name: name.to_string(),
            handicap,
        }
    }

    fn game(id: i64, winner: &str, loser: &str, bonus: i32, played_at: NaiveDateTime) -> Game {
        Game {
            id,
            winner_name: winner.to_string(),
            loser_name: loser.to_string(),
            score: format!("10:{}", id),
            played_at,
            bonus,
        }
    }

    #[test]
    fn test_history_is_chronological() {
        let players = vec![player("Kim", 2), player("Lee", 6), player("Park", 1)];
        let games = vec![
            game(3, "Park", "Kim", 0, at(9, 21)),
            game(1, "Kim", "Lee", 1, at(2, 19)),
            game(2, "Lee", "Park", 0, at(5, 20)),
        ];

        let history = player_history("Kim", &players, &games, &LeagueSettings::default());

        let ids: Vec<i64> = history.entries.iter().map(|e| e.game_id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(history.handicap, Some(2));
    }

    #[test]
    fn test_history_entry_details() {
        let players = vec![player("Kim", 2), player("Lee", 6)];
        let games = vec![
            game(1, "Kim", "Lee", 1, at(2, 19)),
            game(2, "Lee", "Kim", 0, at(3, 19)),
        ];

        let history = player_history("Lee", &players, &games, &LeagueSettings::default());

        let first = &history.entries[0];
        assert_eq!(first.outcome, Outcome::Loss);
        assert_eq!(first.opponent_name, "Kim");
        assert_eq!(first.opponent_handicap, Some(2));
        assert_eq!(first.bonus, 0);
        assert_eq!(first.points, 1);

        let second = &history.entries[1];
        assert_eq!(second.outcome, Outcome::Win);
        assert_eq!(second.points, 3);

        assert_eq!(history.total_score, 4);
    }

    #[test]
    fn test_unknown_opponent_has_no_handicap() {
        let players = vec![player("Kim", 2)];
        let games = vec![game(1, "Kim", "Gone", 1, at(1, 18))];

        let history = player_history("Kim", &players, &games, &LeagueSettings::default());

        assert_eq!(history.entries[0].opponent_handicap, None);
        assert_eq!(history.total_score, 4);
    }

    #[test]
    fn test_player_without_games() {
        let players = vec![player("Kim", 2), player("Lee", 6)];
        let games = vec![game(1, "Lee", "Park", 0, at(1, 18))];

        let history = player_history("Kim", &players, &games, &LeagueSettings::default());

        assert!(history.entries.is_empty());
        assert_eq!(history.total_score, 0);
    }
}
