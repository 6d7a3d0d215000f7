//! rusqlite-backed connection

use crate::values::{Bind, from_value_ref};
use ormlite_core::error::Result;
use ormlite_core::{BufferedResults, DatabaseConnection, GeneratedKeyHolder, SqlValue};
use rusqlite::params_from_iter;
use std::path::Path;

/// A SQLite connection running ORMLite statements.
///
/// Result rows are read fully into a [`BufferedResults`] before the statement
/// is finalized.
#[derive(Debug)]
pub struct SqliteConnection {
    conn: rusqlite::Connection,
}

impl SqliteConnection {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self {
            conn: rusqlite::Connection::open(path)?,
        })
    }

    pub fn open_in_memory() -> Result<Self> {
        Ok(Self {
            conn: rusqlite::Connection::open_in_memory()?,
        })
    }

    /// Runs semicolon-separated statements without arguments, e.g. a schema.
    pub fn execute_batch(&self, sql: &str) -> Result<()> {
        ormlite_core::ormlite_trace_query!(sql, 0usize);
        self.conn.execute_batch(sql)?;
        Ok(())
    }

    /// The underlying rusqlite connection.
    pub fn inner(&self) -> &rusqlite::Connection {
        &self.conn
    }

    pub fn into_inner(self) -> rusqlite::Connection {
        self.conn
    }

    fn execute(&self, sql: &str, args: &[SqlValue]) -> Result<usize> {
        ormlite_core::ormlite_trace_query!(sql, args.len());
        let changed = self
            .conn
            .execute(sql, params_from_iter(args.iter().map(Bind)))?;
        Ok(changed)
    }
}

impl From<rusqlite::Connection> for SqliteConnection {
    fn from(conn: rusqlite::Connection) -> Self {
        Self { conn }
    }
}

impl DatabaseConnection for SqliteConnection {
    fn query(&self, sql: &str, args: &[SqlValue]) -> Result<BufferedResults> {
        ormlite_core::ormlite_trace_query!(sql, args.len());
        let mut stmt = self.conn.prepare(sql)?;
        let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
        let width = columns.len();

        let mut rows = stmt.query(params_from_iter(args.iter().map(Bind)))?;
        let mut buffered = Vec::new();
        while let Some(row) = rows.next()? {
            let mut values = Vec::with_capacity(width);
            for i in 0..width {
                values.push(from_value_ref(row.get_ref(i)?)?);
            }
            buffered.push(values);
        }
        Ok(BufferedResults::new(columns, buffered))
    }

    fn update(&self, sql: &str, args: &[SqlValue]) -> Result<usize> {
        self.execute(sql, args)
    }

    fn insert(
        &self,
        sql: &str,
        args: &[SqlValue],
        key_holder: Option<&mut dyn GeneratedKeyHolder>,
    ) -> Result<usize> {
        let changed = self.execute(sql, args)?;
        if let Some(holder) = key_holder
            && changed > 0
        {
            holder.add_key(self.conn.last_insert_rowid())?;
        }
        Ok(changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ormlite_core::{DatabaseResults, KeyHolder, OrmLiteError};

    fn connection() -> SqliteConnection {
        let conn = SqliteConnection::open_in_memory().unwrap();
        conn.execute_batch("CREATE TABLE t (id INTEGER PRIMARY KEY AUTOINCREMENT, name TEXT)")
            .unwrap();
        conn
    }

    #[test]
    fn test_insert_reports_generated_key() {
        let conn = connection();
        let mut keys = KeyHolder::new();
        let changed = conn
            .insert(
                "INSERT INTO t (name) VALUES (?)",
                &[SqlValue::Text("a".into())],
                Some(&mut keys),
            )
            .unwrap();
        assert_eq!(changed, 1);
        assert_eq!(keys.key(), Some(1));
    }

    #[test]
    fn test_query_buffers_rows() {
        let conn = connection();
        for name in ["a", "b"] {
            conn.insert("INSERT INTO t (name) VALUES (?)", &[name.into()], None)
                .unwrap();
        }
        let mut results = conn
            .query("SELECT id, name FROM t ORDER BY id", &[])
            .unwrap();
        assert_eq!(results.column_names().unwrap(), vec!["id", "name"]);
        assert!(results.first().unwrap());
        assert_eq!(results.get_int(0).unwrap(), 1);
        assert!(results.next().unwrap());
        assert_eq!(results.get_string(1).unwrap(), "b");
        assert!(!results.next().unwrap());
    }

    #[test]
    fn test_driver_errors_convert() {
        let conn = connection();
        let err = conn.query("SELECT nope FROM t", &[]).unwrap_err();
        assert!(matches!(err, OrmLiteError::Rusqlite(_)));
    }

    #[test]
    fn test_invalid_utf8_text_fails_the_query() {
        let conn = connection();
        conn.execute_batch("INSERT INTO t (name) VALUES (CAST(x'ff' AS TEXT))")
            .unwrap();
        let err = conn.query("SELECT name FROM t", &[]).unwrap_err();
        assert!(matches!(err, OrmLiteError::Conversion(_)));
    }

    #[test]
    fn test_wraps_and_releases_rusqlite_connection() {
        let conn = SqliteConnection::from(rusqlite::Connection::open_in_memory().unwrap());
        conn.execute_batch("CREATE TABLE kv (k TEXT)").unwrap();
        let raw = conn.into_inner();
        let count: i64 = raw
            .query_row("SELECT COUNT(*) FROM kv", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }
}
