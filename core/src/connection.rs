//! Statement execution capability
//!
//! Drivers implement [`DatabaseConnection`]. Arguments arrive in wire form,
//! already converted by the field converters, in placeholder order.

use crate::error::{OrmLiteError, Result};
use crate::results::{BufferedResults, DatabaseResults};
use crate::stmt::{PreparedQuery, StatementKind};
use crate::value::SqlValue;
use smallvec::SmallVec;

/// Receives keys generated by the database on insert.
pub trait GeneratedKeyHolder {
    fn add_key(&mut self, key: i64) -> Result<()>;
}

/// Collects every generated key in insertion order.
#[derive(Debug, Clone, Default)]
pub struct KeyHolder {
    keys: SmallVec<[i64; 4]>,
}

impl KeyHolder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The first key, usually the only one.
    pub fn key(&self) -> Option<i64> {
        self.keys.first().copied()
    }

    pub fn keys(&self) -> &[i64] {
        &self.keys
    }
}

impl GeneratedKeyHolder for KeyHolder {
    fn add_key(&mut self, key: i64) -> Result<()> {
        self.keys.push(key);
        Ok(())
    }
}

/// Outcome of running a [`PreparedQuery`].
#[derive(Debug)]
pub enum ExecuteResult {
    /// Rows from a SELECT.
    Rows(BufferedResults),
    /// Number of rows changed by an UPDATE, DELETE or other statement.
    Changed(usize),
}

/// A connection able to run SQL with bind arguments.
pub trait DatabaseConnection {
    /// Runs a query and buffers its rows.
    fn query(&self, sql: &str, args: &[SqlValue]) -> Result<BufferedResults>;

    /// Runs an UPDATE, DELETE or DDL statement. Returns the number of rows changed.
    fn update(&self, sql: &str, args: &[SqlValue]) -> Result<usize>;

    /// Runs an INSERT, handing the generated key to `key_holder` when given.
    fn insert(
        &self,
        sql: &str,
        args: &[SqlValue],
        key_holder: Option<&mut dyn GeneratedKeyHolder>,
    ) -> Result<usize>;

    /// Binds the prepared query's arguments and runs it according to its kind.
    fn execute_prepared_query(&self, query: &PreparedQuery) -> Result<ExecuteResult> {
        let args = query.bind_values()?;
        match query.kind() {
            StatementKind::Select | StatementKind::SelectLong => {
                self.query(query.sql(), &args).map(ExecuteResult::Rows)
            }
            StatementKind::Update | StatementKind::Delete => {
                self.update(query.sql(), &args).map(ExecuteResult::Changed)
            }
        }
    }

    /// Runs a `COUNT(...)` style query and reads the single number it returns.
    fn query_for_long(&self, query: &PreparedQuery) -> Result<i64> {
        let args = query.bind_values()?;
        let mut results = self.query(query.sql(), &args)?;
        if !results.first()? {
            return Err(OrmLiteError::DataAccess(format!(
                "no result row for '{}'",
                query.sql()
            )));
        }
        results.get_long(0)
    }
}
