use anyhow::{Context, Result};
use chrono::Utc;
use log::{debug, info, warn};
use rusqlite::TransactionBehavior;

use super::LeagueStore;
use crate::config::settings::RematchPolicy;
use crate::database::{self, DbConn, DbPool, GameRow, PlayerRow};
use crate::domain::{Game, GameId, LeagueSnapshot, NewGame, Player};
use crate::errors::{store_context, LeagueError};

/// `LeagueStore` backed by a pooled SQLite database
#[derive(Clone)]
pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Opens the database file and makes sure the schema exists
    pub fn open(database_path: &str) -> Result<Self> {
        let pool = database::create_pool(database_path)?;
        let store = Self::new(pool);
        store.init()?;
        info!("Opened league database at {}", database_path);
        Ok(store)
    }

    /// Fresh in-memory database, used by tests and dry runs
    pub fn in_memory() -> Result<Self> {
        let store = Self::new(database::create_memory_pool()?);
        store.init()?;
        Ok(store)
    }

    pub fn init(&self) -> Result<()> {
        let conn = self.connection()?;
        database::setup::init_database(&conn)
    }

    pub fn add_admin(&self, identity: &str) -> Result<()> {
        let conn = self.connection()?;
        database::admins::insert_admin(&conn, identity)
            .with_context(|| store_context("add admin", identity))
    }

    fn connection(&self) -> Result<DbConn> {
        database::get_connection(&self.pool)
    }
}

fn players_from_rows(rows: Vec<PlayerRow>) -> Result<Vec<Player>> {
    rows.into_iter()
        .map(|row| Player::try_from(row).map_err(anyhow::Error::from))
        .collect()
}

fn games_from_rows(rows: Vec<GameRow>) -> Result<Vec<Game>> {
    rows.into_iter()
        .map(|row| Game::try_from(row).map_err(anyhow::Error::from))
        .collect()
}

impl LeagueStore for SqliteStore {
    fn fetch_roster(&self) -> Result<Vec<Player>> {
        let conn = self.connection()?;
        let rows = database::players::list_all(&conn).context("Failed to fetch roster")?;
        players_from_rows(rows)
    }

    fn fetch_all_games(&self) -> Result<Vec<Game>> {
        let conn = self.connection()?;
        let rows = database::games::list_all(&conn).context("Failed to fetch games")?;
        games_from_rows(rows)
    }

    fn fetch_games_for_player(&self, player_name: &str) -> Result<Vec<Game>> {
        let conn = self.connection()?;
        let rows = database::games::list_by_player(&conn, player_name)
            .with_context(|| store_context("fetch games", player_name))?;
        games_from_rows(rows)
    }

    fn fetch_snapshot(&self) -> Result<LeagueSnapshot> {
        let mut conn = self.connection()?;
        // Both reads share one transaction so a concurrent write cannot land between them
        let tx = conn.transaction().context("Failed to begin snapshot read")?;
        let player_rows = database::players::list_all(&tx).context("Failed to fetch roster")?;
        let game_rows = database::games::list_all(&tx).context("Failed to fetch games")?;
        tx.commit().context("Failed to finish snapshot read")?;

        let snapshot = LeagueSnapshot {
            players: players_from_rows(player_rows)?,
            games: games_from_rows(game_rows)?,
        };
        debug!(
            "Snapshot: {} players, {} games",
            snapshot.players.len(),
            snapshot.games.len()
        );
        Ok(snapshot)
    }

    fn add_player(&self, player: &Player) -> Result<()> {
        let conn = self.connection()?;
        database::players::insert_player(&conn, &player.player_name, player.handicap)?;
        info!("Registered player {} (handicap {})", player.player_name, player.handicap);
        Ok(())
    }

    fn delete_player(&self, player_name: &str) -> Result<()> {
        let mut conn = self.connection()?;
        let tx = conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .with_context(|| store_context("delete player", player_name))?;

        if !database::players::exists(&tx, player_name)? {
            return Err(LeagueError::PlayerNotFound(player_name.to_string()).into());
        }
        let game_count = database::games::count_for_player(&tx, player_name)?;
        if game_count > 0 {
            warn!("Refusing to delete {}: {} recorded games", player_name, game_count);
            return Err(LeagueError::PlayerHasGames(player_name.to_string()).into());
        }
        database::players::delete_player(&tx, player_name)?;
        tx.commit()
            .with_context(|| store_context("delete player", player_name))?;

        info!("Deleted player {}", player_name);
        Ok(())
    }

    fn record_game(&self, game: &NewGame, rematch_policy: RematchPolicy) -> Result<Game> {
        let mut conn = self.connection()?;
        let tx = conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .context("Failed to begin game insert")?;

        for name in [&game.winner_name, &game.loser_name] {
            if !database::players::exists(&tx, name)? {
                return Err(LeagueError::PlayerNotFound(name.clone()).into());
            }
        }
        if rematch_policy == RematchPolicy::Forbid
            && database::games::pairing_exists(&tx, &game.winner_name, &game.loser_name)?
        {
            return Err(LeagueError::AlreadyPlayed {
                winner: game.winner_name.clone(),
                loser: game.loser_name.clone(),
            }
            .into());
        }

        let row = database::games::insert_game(
            &tx,
            &game.winner_name,
            &game.loser_name,
            &game.score,
            game.bonus,
            Utc::now().naive_utc(),
        )?;
        tx.commit().context("Failed to commit game insert")?;

        let stored = Game::try_from(row)?;
        info!(
            "Recorded game {}: {} beat {} ({}, bonus {})",
            stored.id, stored.winner_name, stored.loser_name, stored.score, stored.bonus
        );
        Ok(stored)
    }

    fn delete_game(&self, id: GameId) -> Result<()> {
        let conn = self.connection()?;
        if !database::games::delete_game(&conn, id)? {
            return Err(LeagueError::GameNotFound(id).into());
        }
        info!("Deleted game {}", id);
        Ok(())
    }

    fn is_admin(&self, identity: &str) -> Result<bool> {
        let conn = self.connection()?;
        database::admins::is_admin(&conn, identity)
    }
}
