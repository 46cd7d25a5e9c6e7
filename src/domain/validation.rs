use crate::errors::LeagueError;

use super::models::{Game, NewGame, Player};
use crate::database::models::{GameRow, PlayerRow};

fn require_name(field: &str, value: &str) -> Result<String, LeagueError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(LeagueError::invalid(format!("{} must not be empty", field)));
    }
    Ok(trimmed.to_string())
}

fn require_bonus(bonus: i64) -> Result<i32, LeagueError> {
    match bonus {
        0 | 1 => Ok(bonus as i32),
        other => Err(LeagueError::invalid(format!("bonus must be 0 or 1, got {}", other))),
    }
}

fn require_handicap(handicap: i64) -> Result<i32, LeagueError> {
    i32::try_from(handicap)
        .map_err(|_| LeagueError::invalid(format!("handicap {} is out of range", handicap)))
}

impl Player {
    pub fn parse(player_name: &str, handicap: i64) -> Result<Self, LeagueError> {
        Ok(Self {
            player_name: require_name("player name", player_name)?,
            handicap: require_handicap(handicap)?,
        })
    }
}

impl NewGame {
    pub fn parse(
        winner_name: &str,
        loser_name: &str,
        score: &str,
        bonus: i64,
    ) -> Result<Self, LeagueError> {
        let winner_name = require_name("winner name", winner_name)?;
        let loser_name = require_name("loser name", loser_name)?;
        if winner_name == loser_name {
            return Err(LeagueError::invalid("winner and loser must be different players"));
        }
        let score = score.trim();
        if score.is_empty() {
            return Err(LeagueError::invalid("score must not be empty"));
        }

        Ok(Self {
            winner_name,
            loser_name,
            score: score.to_string(),
            bonus: require_bonus(bonus)?,
        })
    }
}

impl TryFrom<PlayerRow> for Player {
    type Error = LeagueError;

    fn try_from(row: PlayerRow) -> Result<Self, Self::Error> {
        Player::parse(&row.player_name, row.handicap)
    }
}

impl TryFrom<GameRow> for Game {
    type Error = LeagueError;

    fn try_from(row: GameRow) -> Result<Self, Self::Error> {
        let parsed = NewGame::parse(&row.winner_name, &row.loser_name, &row.score, row.bonus)
            .map_err(|e| match e {
                LeagueError::InvalidRecord(reason) => {
                    LeagueError::invalid(format!("game {}: {}", row.id, reason))
                }
                other => other,
            })?;

        Ok(Game {
            id: row.id,
            winner_name: parsed.winner_name,
            loser_name: parsed.loser_name,
            score: parsed.score,
            played_at: row.played_at,
            bonus: parsed.bonus,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn game_row(winner: &str, loser: &str, score: &str, bonus: i64) -> GameRow {
        GameRow {
            id: 7,
            winner_name: winner.to_string(),
            loser_name: loser.to_string(),
            score: score.to_string(),
            bonus,
            played_at: NaiveDate::from_ymd_opt(2025, 3, 1)
                .unwrap()
                .and_hms_opt(19, 30, 0)
                .unwrap(),
        }
    }

    #[test]
    fn test_player_parse_trims_name() {
        let player = Player::parse("  Kim  ", 4).unwrap();
        assert_eq!(player.player_name, "Kim");
        assert_eq!(player.handicap, 4);
    }

    #[test]
    fn test_player_parse_rejects_blank_name() {
        assert!(matches!(
            Player::parse("   ", 0),
            Err(LeagueError::InvalidRecord(_))
        ));
    }

    #[test]
    fn test_player_parse_rejects_out_of_range_handicap() {
        assert!(Player::parse("Kim", i64::from(i32::MAX) + 1).is_err());
    }

    #[test]
    fn test_new_game_rejects_same_player() {
        let err = NewGame::parse("Kim", "Kim", "10:8", 0).unwrap_err();
        assert!(matches!(err, LeagueError::InvalidRecord(_)));
    }

    #[test]
    fn test_new_game_rejects_empty_score() {
        assert!(NewGame::parse("Kim", "Lee", " ", 0).is_err());
    }

    #[test]
    fn test_new_game_rejects_bonus_outside_zero_or_one() {
        assert!(NewGame::parse("Kim", "Lee", "10:8", 2).is_err());
        assert!(NewGame::parse("Kim", "Lee", "10:8", -1).is_err());
    }

    #[test]
    fn test_game_row_conversion() {
        let game = Game::try_from(game_row("Kim", "Lee", "10:8", 1)).unwrap();
        assert_eq!(game.id, 7);
        assert_eq!(game.winner_name, "Kim");
        assert_eq!(game.loser_name, "Lee");
        assert_eq!(game.bonus, 1);
    }

    #[test]
    fn test_malformed_game_row_is_reported() {
        let err = Game::try_from(game_row("Kim", "", "10:8", 0)).unwrap_err();
        match err {
            LeagueError::InvalidRecord(reason) => assert!(reason.starts_with("game 7")),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
