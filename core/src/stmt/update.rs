//! UPDATE builder

use super::{ArgumentHolder, Operand, PreparedQuery, StatementKind, Where, stash};
use crate::dialect::DialectExt;
use crate::error::{OrmLiteError, Result};
use crate::ormlite_trace_query;
use crate::table::TableInfo;
use ormlite_types::Dialect;
use std::sync::Arc;

#[derive(Debug)]
enum Assignment {
    Value(ArgumentHolder),
    Expression(String),
}

/// Builds an `UPDATE <table> SET ... [WHERE ...]` statement.
#[derive(Debug)]
pub struct UpdateBuilder {
    dialect: Dialect,
    table: Arc<TableInfo>,
    assignments: Vec<(String, Assignment)>,
    where_: Option<Where>,
    error: Option<OrmLiteError>,
}

impl UpdateBuilder {
    pub fn new(dialect: Dialect, table: Arc<TableInfo>) -> Self {
        Self {
            dialect,
            table,
            assignments: Vec::new(),
            where_: None,
            error: None,
        }
    }

    /// `column = ?`. The value goes through the column's converter; `Null`
    /// binds SQL `NULL`.
    pub fn update_column_value(&mut self, column: &str, value: impl Into<Operand>) -> &mut Self {
        let assignment = self.table.field_for_column(column).and_then(|field| {
            let arg = match value.into() {
                Operand::Value(native) => ArgumentHolder::for_field(field, &native)?,
                Operand::SelectArg(arg) => ArgumentHolder::select_arg(field, &arg)?,
                Operand::Column(other) => {
                    return Err(OrmLiteError::Statement(format!(
                        "use update_column_expression to assign column '{}' to '{column}'",
                        other.column
                    )));
                }
            };
            Ok((field.column_name().to_owned(), Assignment::Value(arg)))
        });
        match assignment {
            Ok(assignment) => self.assignments.push(assignment),
            Err(err) => stash(&mut self.error, err),
        }
        self
    }

    /// `column = <expression>`, with the expression written verbatim.
    pub fn update_column_expression(&mut self, column: &str, expression: impl Into<String>) -> &mut Self {
        match self.table.field_for_column(column) {
            Ok(field) => self.assignments.push((
                field.column_name().to_owned(),
                Assignment::Expression(expression.into()),
            )),
            Err(err) => stash(&mut self.error, err),
        }
        self
    }

    /// The WHERE clause, created on first use. Without one every row is updated.
    pub fn where_(&mut self) -> &mut Where {
        let (dialect, table) = (self.dialect, &self.table);
        self.where_
            .get_or_insert_with(|| Where::new(dialect, Arc::clone(table)))
    }

    pub fn prepare(&self) -> Result<PreparedQuery> {
        if let Some(err) = &self.error {
            return Err(err.reproduce());
        }
        if self.assignments.is_empty() {
            return Err(OrmLiteError::Statement(format!(
                "UPDATE of '{}' has no columns to set",
                self.table.table_name()
            )));
        }

        let dialect = self.dialect;
        let mut sb = String::with_capacity(96);
        let mut args = Vec::with_capacity(self.assignments.len());

        sb.push_str("UPDATE ");
        dialect.append_escaped_entity_name(&mut sb, self.table.table_name());
        sb.push_str(" SET ");
        for (i, (column, assignment)) in self.assignments.iter().enumerate() {
            if i > 0 {
                sb.push_str(", ");
            }
            dialect.append_escaped_entity_name(&mut sb, column);
            sb.push_str(" = ");
            match assignment {
                Assignment::Value(arg) => {
                    args.push(arg.clone());
                    sb.push_str(&dialect.render_placeholder(args.len()));
                }
                Assignment::Expression(expression) => sb.push_str(expression),
            }
        }
        sb.push(' ');

        if let Some(where_) = &self.where_ {
            sb.push_str("WHERE ");
            where_.append_sql(None, &mut sb, &mut args)?;
        }

        let sql = sb.trim_end().to_owned();
        ormlite_trace_query!(&sql, args.len());
        Ok(PreparedQuery::new(
            sql,
            StatementKind::Update,
            args,
            dialect,
            Arc::clone(&self.table),
        ))
    }
}
