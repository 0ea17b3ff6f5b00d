use rusqlite::{Connection, Params, Row};

/// Maps a result row onto a model by column name.
pub trait FromSqliteRow: Sized {
    fn from_row(row: &Row) -> rusqlite::Result<Self>;
}

pub fn query_all<T, P>(conn: &Connection, sql: &str, params: P) -> rusqlite::Result<Vec<T>>
where
    T: FromSqliteRow,
    P: Params,
{
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params, T::from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(rows)
}
