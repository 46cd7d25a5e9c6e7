use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::GameId;

pub type Rank = usize;

/// One row of the league table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStat {
    pub player_name: String,
    pub handicap: i32,
    pub wins: u32,
    pub losses: u32,
    pub games_played: u32,
    pub score: i32,
    pub bonus: i32,
    pub progress_rate: u32,
    pub rank: Rank,
}

/// Ranked league table plus league-wide progress
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Standings {
    pub stats: Vec<PlayerStat>,
    pub total_players: usize,
    pub total_games_played: usize,
    pub total_possible_games: usize,
    pub league_progress_percent: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Loss,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub game_id: GameId,
    pub played_at: NaiveDateTime,
    pub opponent_name: String,
    pub opponent_handicap: Option<i32>,
    pub outcome: Outcome,
    pub score: String,
    pub bonus: i32,
    pub points: i32,
}

/// A single player's games in chronological order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerHistory {
    pub player_name: String,
    pub handicap: Option<i32>,
    pub total_score: i32,
    pub entries: Vec<HistoryEntry>,
}
