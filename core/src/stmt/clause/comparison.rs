//! Leaf clauses: comparisons, ranges, membership, null checks and raw SQL.

use super::Clause;
use crate::dialect::DialectExt;
use crate::error::{OrmLiteError, Result};
use crate::stmt::{ArgumentHolder, ColumnArg, InternalQueryBuilderWrapper};
use ormlite_types::Dialect;

fn append_arg(dialect: Dialect, sb: &mut String, args: &mut Vec<ArgumentHolder>, arg: &ArgumentHolder) {
    args.push(arg.clone());
    sb.push_str(&dialect.render_placeholder(args.len()));
}

/// Binary comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    Ne,
    Gt,
    Ge,
    Lt,
    Le,
    Like,
}

impl CompareOp {
    pub const fn as_str(self) -> &'static str {
        match self {
            CompareOp::Eq => "=",
            CompareOp::Ne => "<>",
            CompareOp::Gt => ">",
            CompareOp::Ge => ">=",
            CompareOp::Lt => "<",
            CompareOp::Le => "<=",
            CompareOp::Like => "LIKE",
        }
    }
}

/// Right side of a comparison.
#[derive(Debug, Clone)]
pub enum Rhs {
    Arg(ArgumentHolder),
    Column(ColumnArg),
}

/// `<column> <op> <value> `
#[derive(Debug, Clone)]
pub struct SimpleComparison {
    column: String,
    op: String,
    rhs: Rhs,
}

impl SimpleComparison {
    pub fn new(column: impl Into<String>, op: CompareOp, rhs: Rhs) -> Self {
        Self::with_raw_operator(column, op.as_str(), rhs)
    }

    /// A comparison with an operator the builder does not model.
    pub fn with_raw_operator(column: impl Into<String>, op: impl Into<String>, rhs: Rhs) -> Self {
        Self {
            column: column.into(),
            op: op.into(),
            rhs,
        }
    }
}

impl Clause for SimpleComparison {
    fn append_sql(
        &self,
        dialect: Dialect,
        table_name: Option<&str>,
        sb: &mut String,
        args: &mut Vec<ArgumentHolder>,
    ) -> Result<()> {
        dialect.append_column(sb, table_name, &self.column);
        sb.push(' ');
        sb.push_str(&self.op);
        sb.push(' ');
        match &self.rhs {
            Rhs::Arg(arg) => append_arg(dialect, sb, args, arg),
            Rhs::Column(column) => {
                let table = column.table.as_deref().or(table_name);
                dialect.append_column(sb, table, &column.column);
            }
        }
        sb.push(' ');
        Ok(())
    }
}

/// `<column> BETWEEN <low> AND <high> `
#[derive(Debug, Clone)]
pub struct Between {
    column: String,
    low: ArgumentHolder,
    high: ArgumentHolder,
}

impl Between {
    pub fn new(column: impl Into<String>, low: ArgumentHolder, high: ArgumentHolder) -> Self {
        Self {
            column: column.into(),
            low,
            high,
        }
    }
}

impl Clause for Between {
    fn append_sql(
        &self,
        dialect: Dialect,
        table_name: Option<&str>,
        sb: &mut String,
        args: &mut Vec<ArgumentHolder>,
    ) -> Result<()> {
        dialect.append_column(sb, table_name, &self.column);
        sb.push_str(" BETWEEN ");
        append_arg(dialect, sb, args, &self.low);
        sb.push_str(" AND ");
        append_arg(dialect, sb, args, &self.high);
        sb.push(' ');
        Ok(())
    }
}

/// `<column> [NOT] IN (<a>,<b>,...) `
#[derive(Debug, Clone)]
pub struct In {
    column: String,
    values: Vec<ArgumentHolder>,
    negated: bool,
}

impl In {
    /// Fails on an empty list.
    pub fn new(column: impl Into<String>, values: Vec<ArgumentHolder>, negated: bool) -> Result<Self> {
        let column = column.into();
        if values.is_empty() {
            return Err(OrmLiteError::Statement(format!(
                "IN clause on '{column}' needs at least one value"
            )));
        }
        Ok(Self {
            column,
            values,
            negated,
        })
    }
}

impl Clause for In {
    fn append_sql(
        &self,
        dialect: Dialect,
        table_name: Option<&str>,
        sb: &mut String,
        args: &mut Vec<ArgumentHolder>,
    ) -> Result<()> {
        dialect.append_column(sb, table_name, &self.column);
        sb.push_str(if self.negated { " NOT IN (" } else { " IN (" });
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                sb.push(',');
            }
            append_arg(dialect, sb, args, value);
        }
        sb.push_str(") ");
        Ok(())
    }
}

/// `<column> [NOT] IN (<subquery>) `
#[derive(Debug)]
pub struct InSubQuery {
    column: String,
    sub_query: Box<dyn InternalQueryBuilderWrapper>,
    negated: bool,
}

impl InSubQuery {
    /// Fails unless the sub-query selects exactly one column.
    pub fn new(
        column: impl Into<String>,
        sub_query: Box<dyn InternalQueryBuilderWrapper>,
        negated: bool,
    ) -> Result<Self> {
        let column = column.into();
        let count = sub_query.result_column_count();
        if count != 1 {
            return Err(OrmLiteError::Statement(format!(
                "sub-query for IN on '{column}' must select exactly one column, not {count}"
            )));
        }
        Ok(Self {
            column,
            sub_query,
            negated,
        })
    }
}

impl Clause for InSubQuery {
    fn append_sql(
        &self,
        dialect: Dialect,
        table_name: Option<&str>,
        sb: &mut String,
        args: &mut Vec<ArgumentHolder>,
    ) -> Result<()> {
        dialect.append_column(sb, table_name, &self.column);
        sb.push_str(if self.negated { " NOT IN (" } else { " IN (" });
        self.sub_query.append_statement_string(sb, args)?;
        sb.push_str(") ");
        Ok(())
    }
}

/// `<column> IS NULL `
#[derive(Debug, Clone)]
pub struct IsNull {
    column: String,
}

impl IsNull {
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
        }
    }
}

impl Clause for IsNull {
    fn append_sql(
        &self,
        dialect: Dialect,
        table_name: Option<&str>,
        sb: &mut String,
        _args: &mut Vec<ArgumentHolder>,
    ) -> Result<()> {
        dialect.append_column(sb, table_name, &self.column);
        sb.push_str(" IS NULL ");
        Ok(())
    }
}

/// `<column> IS NOT NULL `
#[derive(Debug, Clone)]
pub struct IsNotNull {
    column: String,
}

impl IsNotNull {
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
        }
    }
}

impl Clause for IsNotNull {
    fn append_sql(
        &self,
        dialect: Dialect,
        table_name: Option<&str>,
        sb: &mut String,
        _args: &mut Vec<ArgumentHolder>,
    ) -> Result<()> {
        dialect.append_column(sb, table_name, &self.column);
        sb.push_str(" IS NOT NULL ");
        Ok(())
    }
}

/// Raw SQL with explicit arguments.
///
/// Placeholders are written as `?`. Under a dialect with numbered
/// placeholders each unquoted `?` is rewritten to its `$n` position, counting
/// on from the arguments already appended. Quoted text is copied unchanged.
#[derive(Debug, Clone)]
pub struct Raw {
    sql: String,
    args: Vec<ArgumentHolder>,
}

impl Raw {
    pub fn new(sql: impl Into<String>, args: Vec<ArgumentHolder>) -> Self {
        Self {
            sql: sql.into(),
            args,
        }
    }
}

impl Clause for Raw {
    fn append_sql(
        &self,
        dialect: Dialect,
        _table_name: Option<&str>,
        sb: &mut String,
        args: &mut Vec<ArgumentHolder>,
    ) -> Result<()> {
        if dialect.uses_numbered_placeholders() {
            let mut index = args.len();
            let mut quote: Option<char> = None;
            for c in self.sql.chars() {
                match (quote, c) {
                    (Some(q), _) => {
                        if c == q {
                            quote = None;
                        }
                        sb.push(c);
                    }
                    (None, '\'' | '"' | '`') => {
                        quote = Some(c);
                        sb.push(c);
                    }
                    (None, '?') => {
                        index += 1;
                        sb.push_str(&dialect.render_placeholder(index));
                    }
                    (None, _) => sb.push(c),
                }
            }
        } else {
            sb.push_str(&self.sql);
        }
        sb.push(' ');
        args.extend(self.args.iter().cloned());
        Ok(())
    }
}
