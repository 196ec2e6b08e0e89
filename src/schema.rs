//! Table definitions for the SQLite backend.
//!
//! Statements are idempotent and run on every startup. There is no version
//! tracking; tables are only created when missing.

use crate::db::DbPool;

/// Tables in creation order, each as (table, ddl)
pub const TABLES: &[(&str, &str)] = &[
    (
        "users",
        "CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            email TEXT NOT NULL,
            password TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )",
    ),
    (
        "exercises",
        "CREATE TABLE IF NOT EXISTS exercises (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            muscle_group TEXT NOT NULL,
            equipment_type TEXT,
            notes TEXT,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )",
    ),
];

pub fn create_schema(pool: &DbPool) -> anyhow::Result<()> {
    let conn = pool.get()?;

    for (table, ddl) in TABLES {
        tracing::debug!("Ensuring table: {}", table);
        conn.execute_batch(ddl)?;
    }

    tracing::info!("Schema ready");
    Ok(())
}
