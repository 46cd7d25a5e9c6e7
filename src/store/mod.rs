use anyhow::Result;

use crate::config::settings::RematchPolicy;
use crate::domain::{Game, GameId, LeagueSnapshot, NewGame, Player};

pub mod sqlite;

pub use sqlite::SqliteStore;

/// Access to persisted players, games and admin identities.
///
/// Every call is a single attempt; failures come back as errors and leave
/// the store unchanged.
pub trait LeagueStore {
    /// Players ordered by name
    fn fetch_roster(&self) -> Result<Vec<Player>>;

    fn fetch_all_games(&self) -> Result<Vec<Game>>;

    /// Games where the player is winner or loser, in no particular order
    fn fetch_games_for_player(&self, player_name: &str) -> Result<Vec<Game>>;

    /// Roster and game log read as one consistent view
    fn fetch_snapshot(&self) -> Result<LeagueSnapshot> {
        Ok(LeagueSnapshot {
            players: self.fetch_roster()?,
            games: self.fetch_all_games()?,
        })
    }

    fn add_player(&self, player: &Player) -> Result<()>;

    /// Removes a player with no recorded games.
    ///
    /// The game check and the delete are one atomic step: fails with
    /// `PlayerNotFound` or `PlayerHasGames` and removes nothing.
    fn delete_player(&self, player_name: &str) -> Result<()>;

    /// Stores a game between two registered players.
    ///
    /// Both players must still exist when the row is written. Under
    /// `RematchPolicy::Forbid` an existing game between the pair fails with
    /// `AlreadyPlayed`, checked atomically with the insert.
    fn record_game(&self, game: &NewGame, rematch_policy: RematchPolicy) -> Result<Game>;

    fn delete_game(&self, id: GameId) -> Result<()>;

    fn is_admin(&self, identity: &str) -> Result<bool>;
}
