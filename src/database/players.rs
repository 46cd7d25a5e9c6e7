use anyhow::{Context, Result};
use rusqlite::{params, Connection, ErrorCode};

use super::models::PlayerRow;
use crate::errors::LeagueError;

pub fn insert_player(conn: &Connection, player_name: &str, handicap: i32) -> Result<()> {
    let sql = "INSERT INTO players (player_name, handicap) VALUES (?1, ?2)";

    match conn.execute(sql, params![player_name, handicap]) {
        Ok(_) => Ok(()),
        Err(e) if is_constraint_violation(&e) => {
            Err(LeagueError::PlayerExists(player_name.to_string()).into())
        }
        Err(e) => Err(e).context("Failed to insert new player"),
    }
}

fn is_constraint_violation(error: &rusqlite::Error) -> bool {
    matches!(
        error,
        rusqlite::Error::SqliteFailure(e, _) if e.code == ErrorCode::ConstraintViolation
    )
}

fn parse_player_row(row: &rusqlite::Row) -> rusqlite::Result<PlayerRow> {
    Ok(PlayerRow {
        player_name: row.get(0)?,
        handicap: row.get(1)?,
    })
}

pub fn exists(conn: &Connection, player_name: &str) -> Result<bool> {
    let sql = "SELECT EXISTS(SELECT 1 FROM players WHERE player_name = ?1)";
    conn.query_row(sql, params![player_name], |row| row.get(0))
        .context("Failed to look up player")
}

/// All players, ordered by name
pub fn list_all(conn: &Connection) -> Result<Vec<PlayerRow>> {
    let sql = "SELECT player_name, handicap FROM players ORDER BY player_name ASC";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_player_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

/// Returns whether a row was removed
pub fn delete_player(conn: &Connection, player_name: &str) -> Result<bool> {
    let sql = "DELETE FROM players WHERE player_name = ?1";

    let affected = conn
        .execute(sql, params![player_name])
        .context("Failed to delete player")?;
    Ok(affected > 0)
}
