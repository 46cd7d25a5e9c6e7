use chrono::NaiveDateTime;

/// Raw `players` row, validated into `domain::Player` before use
#[derive(Debug, Clone)]
pub struct PlayerRow {
    pub player_name: String,
    pub handicap: i64,
}

/// Raw `games` row, validated into `domain::Game` before use
#[derive(Debug, Clone)]
pub struct GameRow {
    pub id: i64,
    pub winner_name: String,
    pub loser_name: String,
    pub score: String,
    pub bonus: i64,
    pub played_at: NaiveDateTime,
}
