//! Composite clauses: AND/OR, NOT and EXISTS.

use super::{Clause, ClauseKind, append_trimmed};
use crate::error::{OrmLiteError, Result};
use crate::stmt::{ArgumentHolder, InternalQueryBuilderWrapper};
use ormlite_types::Dialect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManyOp {
    And,
    Or,
}

impl ManyOp {
    const fn kind(self) -> ClauseKind {
        match self {
            ManyOp::And => ClauseKind::And,
            ManyOp::Or => ClauseKind::Or,
        }
    }

    const fn separator(self) -> &'static str {
        match self {
            ManyOp::And => "AND ",
            ManyOp::Or => "OR ",
        }
    }
}

/// Operands joined with `AND` or `OR`.
///
/// Operands that are themselves AND/OR clauses of the other operator are
/// parenthesized; operands of the same operator render flat.
#[derive(Debug)]
pub struct ManyClause {
    op: ManyOp,
    clauses: Vec<Box<dyn Clause>>,
}

impl ManyClause {
    /// Fails with fewer than two operands.
    pub fn new(op: ManyOp, clauses: Vec<Box<dyn Clause>>) -> Result<Self> {
        if clauses.len() < 2 {
            return Err(OrmLiteError::Statement(format!(
                "{op:?} needs at least two clauses, got {}",
                clauses.len()
            )));
        }
        Ok(Self { op, clauses })
    }

    pub fn op(&self) -> ManyOp {
        self.op
    }
}

impl Clause for ManyClause {
    fn append_sql(
        &self,
        dialect: Dialect,
        table_name: Option<&str>,
        sb: &mut String,
        args: &mut Vec<ArgumentHolder>,
    ) -> Result<()> {
        for (i, clause) in self.clauses.iter().enumerate() {
            if i > 0 {
                sb.push_str(self.op.separator());
            }
            let kind = clause.kind();
            if matches!(kind, ClauseKind::And | ClauseKind::Or) && kind != self.op.kind() {
                sb.push('(');
                append_trimmed(clause.as_ref(), dialect, table_name, sb, args)?;
                sb.push_str(") ");
            } else {
                clause.append_sql(dialect, table_name, sb, args)?;
            }
        }
        Ok(())
    }

    fn kind(&self) -> ClauseKind {
        self.op.kind()
    }
}

/// `(NOT <clause>) `, or `NOT EXISTS (...) ` around an exists clause.
#[derive(Debug)]
pub struct Not {
    clause: Box<dyn Clause>,
}

impl Not {
    pub fn new(clause: Box<dyn Clause>) -> Self {
        Self { clause }
    }
}

impl Clause for Not {
    fn append_sql(
        &self,
        dialect: Dialect,
        table_name: Option<&str>,
        sb: &mut String,
        args: &mut Vec<ArgumentHolder>,
    ) -> Result<()> {
        match self.clause.kind() {
            ClauseKind::Exists => {
                sb.push_str("NOT ");
                self.clause.append_sql(dialect, table_name, sb, args)
            }
            ClauseKind::And | ClauseKind::Or => {
                sb.push_str("(NOT (");
                append_trimmed(self.clause.as_ref(), dialect, table_name, sb, args)?;
                sb.push_str(")) ");
                Ok(())
            }
            ClauseKind::Leaf | ClauseKind::Not => {
                sb.push_str("(NOT ");
                append_trimmed(self.clause.as_ref(), dialect, table_name, sb, args)?;
                sb.push_str(") ");
                Ok(())
            }
        }
    }

    fn kind(&self) -> ClauseKind {
        ClauseKind::Not
    }
}

/// `EXISTS (<subquery>) `
///
/// The sub-query renders its own statement, with its own clauses, ordering and
/// limits, and appends its arguments to the shared list.
#[derive(Debug)]
pub struct Exists {
    sub_query: Box<dyn InternalQueryBuilderWrapper>,
}

impl Exists {
    pub fn new(sub_query: Box<dyn InternalQueryBuilderWrapper>) -> Self {
        Self { sub_query }
    }
}

impl Clause for Exists {
    fn append_sql(
        &self,
        _dialect: Dialect,
        _table_name: Option<&str>,
        sb: &mut String,
        args: &mut Vec<ArgumentHolder>,
    ) -> Result<()> {
        sb.push_str("EXISTS (");
        self.sub_query.append_statement_string(sb, args)?;
        sb.push_str(") ");
        Ok(())
    }

    fn kind(&self) -> ClauseKind {
        ClauseKind::Exists
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stmt::clause::{CompareOp, Rhs, SimpleComparison};
    use crate::value::SqlValue;

    #[derive(Debug)]
    struct BarQuery;

    impl InternalQueryBuilderWrapper for BarQuery {
        fn append_statement_string(
            &self,
            sb: &mut String,
            args: &mut Vec<ArgumentHolder>,
        ) -> Result<()> {
            sb.push_str("SELECT id FROM bar WHERE x = ?");
            args.push(ArgumentHolder::raw(5));
            Ok(())
        }

        fn result_column_count(&self) -> usize {
            1
        }
    }

    fn eq(column: &str, value: i32) -> Box<dyn Clause> {
        Box::new(SimpleComparison::new(
            column,
            CompareOp::Eq,
            Rhs::Arg(ArgumentHolder::raw(value)),
        ))
    }

    fn render(clause: &dyn Clause) -> (String, Vec<SqlValue>) {
        let mut sb = String::new();
        let mut args = Vec::new();
        clause
            .append_sql(Dialect::SQLite, None, &mut sb, &mut args)
            .unwrap();
        (sb, args.iter().map(|a| a.sql_value().unwrap()).collect())
    }

    #[test]
    fn test_exists_wraps_sub_query() {
        let exists = Exists::new(Box::new(BarQuery));
        let (sql, args) = render(&exists);
        assert_eq!(sql, "EXISTS (SELECT id FROM bar WHERE x = ?) ");
        assert_eq!(args, vec![SqlValue::Int(5)]);
    }

    #[test]
    fn test_exists_appends_after_existing_arguments() {
        let exists = Exists::new(Box::new(BarQuery));
        let mut sb = String::from("prefix ");
        let mut args = vec![ArgumentHolder::raw(1)];
        exists
            .append_sql(Dialect::SQLite, None, &mut sb, &mut args)
            .unwrap();
        assert_eq!(sb, "prefix EXISTS (SELECT id FROM bar WHERE x = ?) ");
        let values: Vec<_> = args.iter().map(|a| a.sql_value().unwrap()).collect();
        assert_eq!(values, vec![SqlValue::Int(1), SqlValue::Int(5)]);
    }

    #[test]
    fn test_same_operator_renders_flat() {
        let inner = ManyClause::new(ManyOp::And, vec![eq("a", 1), eq("b", 2)]).unwrap();
        let outer = ManyClause::new(ManyOp::And, vec![Box::new(inner), eq("c", 3)]).unwrap();
        let (sql, args) = render(&outer);
        assert_eq!(sql, r#""a" = ? AND "b" = ? AND "c" = ? "#);
        assert_eq!(args, vec![SqlValue::Int(1), SqlValue::Int(2), SqlValue::Int(3)]);
    }

    #[test]
    fn test_mixed_operators_are_parenthesized() {
        let inner = ManyClause::new(ManyOp::Or, vec![eq("a", 1), eq("b", 2)]).unwrap();
        let outer = ManyClause::new(ManyOp::And, vec![Box::new(inner), eq("c", 3)]).unwrap();
        assert_eq!(render(&outer).0, r#"("a" = ? OR "b" = ?) AND "c" = ? "#);
    }

    #[test]
    fn test_not_forms() {
        assert_eq!(render(&Not::new(eq("a", 1))).0, r#"(NOT "a" = ?) "#);
        assert_eq!(
            render(&Not::new(Box::new(Exists::new(Box::new(BarQuery))))).0,
            "NOT EXISTS (SELECT id FROM bar WHERE x = ?) "
        );
        let both = ManyClause::new(ManyOp::And, vec![eq("a", 1), eq("b", 2)]).unwrap();
        assert_eq!(
            render(&Not::new(Box::new(both))).0,
            r#"(NOT ("a" = ? AND "b" = ?)) "#
        );
    }

    #[test]
    fn test_render_is_idempotent() {
        let inner = ManyClause::new(
            ManyOp::Or,
            vec![eq("a", 1), Box::new(Exists::new(Box::new(BarQuery)))],
        )
        .unwrap();
        let tree = ManyClause::new(ManyOp::And, vec![Box::new(inner), eq("c", 3)]).unwrap();
        assert_eq!(render(&tree), render(&tree));
    }

    #[test]
    fn test_many_needs_two_operands() {
        assert!(ManyClause::new(ManyOp::Or, vec![eq("a", 1)]).is_err());
    }
}
