use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub type GameId = i64;

/// A registered league player. The name is the primary key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub player_name: String,
    pub handicap: i32,
}

/// A recorded match result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: GameId,
    pub winner_name: String,
    pub loser_name: String,
    pub score: String,
    pub played_at: NaiveDateTime,
    pub bonus: i32,
}

impl Game {
    pub fn involves(&self, player_name: &str) -> bool {
        self.winner_name == player_name || self.loser_name == player_name
    }

    /// The other party of the game, if `player_name` took part in it.
    pub fn opponent_of(&self, player_name: &str) -> Option<&str> {
        if self.winner_name == player_name {
            Some(&self.loser_name)
        } else if self.loser_name == player_name {
            Some(&self.winner_name)
        } else {
            None
        }
    }
}

/// A game that has been validated but not stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGame {
    pub winner_name: String,
    pub loser_name: String,
    pub score: String,
    pub bonus: i32,
}

/// Roster row with the flag that decides whether the player may be deleted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterEntry {
    pub player_name: String,
    pub handicap: i32,
    pub has_game_history: bool,
}

/// Players and games read together, so derived views never mix two states of the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeagueSnapshot {
    pub players: Vec<Player>,
    pub games: Vec<Game>,
}
