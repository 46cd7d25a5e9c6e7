use serde::{Deserialize, Serialize};
use urlencoding::encode;

use crate::standings::{PlayerStat, Standings};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPlayerRequest {
    pub player_name: String,
    pub handicap: i64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordGameRequest {
    pub winner_name: String,
    pub loser_name: String,
    pub score: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingsRow {
    #[serde(flatten)]
    pub stat: PlayerStat,
    pub profile_url: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingsResponse {
    pub items: Vec<StandingsRow>,
    pub total_players: usize,
    pub total_games_played: usize,
    pub total_possible_games: usize,
    pub league_progress_percent: u32,
}

impl From<Standings> for StandingsResponse {
    fn from(standings: Standings) -> Self {
        let items = standings
            .stats
            .into_iter()
            .map(|stat| StandingsRow {
                profile_url: profile_url(&stat.player_name),
                stat,
            })
            .collect();

        Self {
            items,
            total_players: standings.total_players,
            total_games_played: standings.total_games_played,
            total_possible_games: standings.total_possible_games,
            league_progress_percent: standings.league_progress_percent,
        }
    }
}

pub fn profile_url(player_name: &str) -> String {
    format!("/api/players/{}", encode(player_name))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub is_admin: bool,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
