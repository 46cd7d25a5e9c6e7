use thiserror::Error;

use crate::domain::GameId;

/// League rule violations and lookup failures.
///
/// These travel inside `anyhow::Error`; callers that need to react to a
/// specific case (the HTTP layer, mostly) downcast back to this type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LeagueError {
    #[error("Invalid record: {0}")]
    InvalidRecord(String),
    #[error("Player '{0}' already exists")]
    PlayerExists(String),
    #[error("Player '{0}' not found")]
    PlayerNotFound(String),
    #[error("Player '{0}' has recorded games and cannot be deleted")]
    PlayerHasGames(String),
    #[error("Game {0} not found")]
    GameNotFound(GameId),
    #[error("'{winner}' and '{loser}' have already played each other")]
    AlreadyPlayed { winner: String, loser: String },
    #[error("Admin session required")]
    Unauthorized,
}

impl LeagueError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        LeagueError::InvalidRecord(reason.into())
    }
}

/// Context message for a failed store call
pub fn store_context(operation: &str, key: &str) -> String {
    format!("Failed to {} for: {}", operation, key)
}
