use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use rusqlite::{params, Connection};

use super::models::GameRow;

const GAME_COLUMNS: &str = "id, winner_name, loser_name, score, bonus, played_at";

pub fn insert_game(
    conn: &Connection,
    winner_name: &str,
    loser_name: &str,
    score: &str,
    bonus: i32,
    played_at: NaiveDateTime,
) -> Result<GameRow> {
    let sql = format!(
        "INSERT INTO games (winner_name, loser_name, score, bonus, played_at) VALUES (?1, ?2, ?3, ?4, ?5) RETURNING {}",
        GAME_COLUMNS
    );

    conn.query_row(
        &sql,
        params![winner_name, loser_name, score, bonus, played_at],
        parse_game_row,
    )
    .context("Failed to insert game")
}

fn parse_game_row(row: &rusqlite::Row) -> rusqlite::Result<GameRow> {
    Ok(GameRow {
        id: row.get(0)?,
        winner_name: row.get(1)?,
        loser_name: row.get(2)?,
        score: row.get(3)?,
        bonus: row.get(4)?,
        played_at: row.get(5)?,
    })
}

pub fn list_all(conn: &Connection) -> Result<Vec<GameRow>> {
    let sql = format!("SELECT {} FROM games", GAME_COLUMNS);

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map([], parse_game_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

/// Games the player took part in, as winner or loser
pub fn list_by_player(conn: &Connection, player_name: &str) -> Result<Vec<GameRow>> {
    let sql = format!(
        "SELECT {} FROM games WHERE winner_name = ?1 OR loser_name = ?1",
        GAME_COLUMNS
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(params![player_name], parse_game_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn count_for_player(conn: &Connection, player_name: &str) -> Result<i64> {
    let sql = "SELECT COUNT(*) FROM games WHERE winner_name = ?1 OR loser_name = ?1";
    conn.query_row(sql, params![player_name], |row| row.get(0))
        .context("Failed to count games for player")
}

/// Whether the two players already met, in either role
pub fn pairing_exists(conn: &Connection, first: &str, second: &str) -> Result<bool> {
    let sql = "SELECT EXISTS(SELECT 1 FROM games \
               WHERE (winner_name = ?1 AND loser_name = ?2) \
                  OR (winner_name = ?2 AND loser_name = ?1))";
    conn.query_row(sql, params![first, second], |row| row.get(0))
        .context("Failed to look up pairing")
}

/// Returns whether a row was removed
pub fn delete_game(conn: &Connection, id: i64) -> Result<bool> {
    let affected = conn
        .execute("DELETE FROM games WHERE id = ?1", params![id])
        .context("Failed to delete game")?;
    Ok(affected > 0)
}
