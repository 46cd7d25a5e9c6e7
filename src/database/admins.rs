use anyhow::{Context, Result};
use rusqlite::{params, Connection};

pub fn is_admin(conn: &Connection, identity: &str) -> Result<bool> {
    let sql = "SELECT EXISTS(SELECT 1 FROM admins WHERE identity = ?1)";
    conn.query_row(sql, params![identity], |row| row.get(0))
        .context("Failed to check admin identity")
}

/// Registers an admin identity; re-adding an existing one is a no-op.
pub fn insert_admin(conn: &Connection, identity: &str) -> Result<()> {
    conn.execute(
        "INSERT OR IGNORE INTO admins (identity) VALUES (?1)",
        params![identity],
    )
    .context("Failed to insert admin")
    .map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::connection::{create_memory_pool, get_connection};
    use crate::database::setup::init_database;

    #[test]
    fn test_admin_lookup() {
        let pool = create_memory_pool().unwrap();
        let conn = get_connection(&pool).unwrap();
        init_database(&conn).unwrap();

        assert!(!is_admin(&conn, "club-owner").unwrap());
        insert_admin(&conn, "club-owner").unwrap();
        insert_admin(&conn, "club-owner").unwrap();
        assert!(is_admin(&conn, "club-owner").unwrap());
        assert!(!is_admin(&conn, "Club-Owner").unwrap());
    }
}
