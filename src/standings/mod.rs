pub mod calculator;
pub mod history;
pub mod progress;
pub mod ranking;
pub mod types;

pub use calculator::{compute_standings, game_points};
pub use history::player_history;
pub use types::{HistoryEntry, Outcome, PlayerHistory, PlayerStat, Rank, Standings};
