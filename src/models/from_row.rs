use rusqlite::{Connection, OptionalExtension, Params, Row};

/// Maps a result row into an owned record. Columns are read by name.
pub trait FromSqliteRow: Sized {
    fn from_row(row: &Row) -> rusqlite::Result<Self>;
}

/// Runs `sql` and maps every returned row, in the order SQLite yields them.
pub fn query_all<T: FromSqliteRow, P: Params>(
    conn: &Connection,
    sql: &str,
    params: P,
) -> rusqlite::Result<Vec<T>> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params, T::from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(rows)
}

/// Runs `sql` expecting at most one row. No match yields `T::default()`.
pub fn query_one_or_default<T: FromSqliteRow + Default, P: Params>(
    conn: &Connection,
    sql: &str,
    params: P,
) -> rusqlite::Result<T> {
    let mut stmt = conn.prepare(sql)?;
    let found = stmt.query_row(params, T::from_row).optional()?;
    Ok(found.unwrap_or_default())
}
