//! Statement composition: clause trees, builders and prepared statements.

mod argument;
pub mod clause;
mod delete;
mod prepared;
mod query;
mod update;
mod where_clause;

pub use argument::{ArgumentHolder, ColumnArg, SelectArg};
pub use clause::{Clause, ClauseKind};
pub use delete::DeleteBuilder;
pub use prepared::PreparedQuery;
pub use query::QueryBuilder;
pub use update::UpdateBuilder;
pub use where_clause::{Operand, Where};

use crate::error::Result;

/// What a prepared statement does, and so how its results are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    /// Returns rows of the table.
    Select,
    /// Returns a single number, e.g. `COUNT(*)`.
    SelectLong,
    Update,
    Delete,
}

/// A query that can render itself inside another statement.
///
/// Used by `EXISTS` and `IN` sub-queries: the sub-query writes its complete
/// statement, without trailing whitespace, and appends its arguments after the
/// ones already collected.
pub trait InternalQueryBuilderWrapper: core::fmt::Debug + Send + Sync {
    fn append_statement_string(&self, sb: &mut String, args: &mut Vec<ArgumentHolder>) -> Result<()>;

    /// Number of columns the query selects.
    fn result_column_count(&self) -> usize;
}

/// Keeps the first error raised while a builder is assembled.
pub(crate) fn stash(slot: &mut Option<crate::error::OrmLiteError>, err: crate::error::OrmLiteError) {
    if slot.is_none() {
        *slot = Some(err);
    }
}
