/// What happens when a game is recorded between two players who already met.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RematchPolicy {
    /// Reject the game; each pairing is played exactly once.
    Forbid,
    /// Accept the game; round-robin completion checks may then undercount.
    Allow,
}

#[derive(Debug, Clone)]
pub struct LeagueSettings {
    pub win_points: i32,
    pub loss_points: i32,
    pub bonus_handicap_gap: i32,
    pub rematch_policy: RematchPolicy,
}

impl Default for LeagueSettings {
    fn default() -> Self {
        Self {
            win_points: 3,
            loss_points: 1,
            bonus_handicap_gap: 3,
            rematch_policy: RematchPolicy::Forbid,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub database_path: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            database_path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "league.db".to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub league: LeagueSettings,
    pub server: ServerSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            league: LeagueSettings::default(),
            server: ServerSettings::default(),
        }
    }
}
