//! Clause tree
//!
//! Each node appends its SQL fragment, followed by a single space, and pushes
//! its bind arguments in the order their placeholders appear. Nodes never look
//! at or rewrite what was appended before them, and rendering leaves the tree
//! untouched, so a tree renders the same way every time.

mod comparison;
mod logical;

pub use comparison::{Between, CompareOp, In, InSubQuery, IsNotNull, IsNull, Raw, Rhs, SimpleComparison};
pub use logical::{Exists, ManyClause, ManyOp, Not};

use crate::error::Result;
use crate::stmt::ArgumentHolder;
use ormlite_types::Dialect;

/// Shape of a node, as seen by an enclosing node deciding on parentheses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClauseKind {
    Leaf,
    And,
    Or,
    Not,
    Exists,
}

/// A node of a WHERE/HAVING clause tree.
pub trait Clause: core::fmt::Debug + Send + Sync {
    /// Appends this node's SQL to `sb` and its arguments to `args`.
    ///
    /// Column references are qualified with `table_name` when one is given.
    fn append_sql(
        &self,
        dialect: Dialect,
        table_name: Option<&str>,
        sb: &mut String,
        args: &mut Vec<ArgumentHolder>,
    ) -> Result<()>;

    fn kind(&self) -> ClauseKind {
        ClauseKind::Leaf
    }
}

/// Renders `clause` into its own buffer and appends it without its trailing
/// whitespace.
pub(crate) fn append_trimmed(
    clause: &dyn Clause,
    dialect: Dialect,
    table_name: Option<&str>,
    sb: &mut String,
    args: &mut Vec<ArgumentHolder>,
) -> Result<()> {
    let mut inner = String::new();
    clause.append_sql(dialect, table_name, &mut inner, args)?;
    sb.push_str(inner.trim_end());
    Ok(())
}
