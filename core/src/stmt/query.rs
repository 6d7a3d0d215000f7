//! SELECT builder

use super::{
    ArgumentHolder, InternalQueryBuilderWrapper, PreparedQuery, StatementKind, Where, stash,
};
use crate::dialect::DialectExt;
use crate::error::{OrmLiteError, Result};
use crate::ormlite_trace_query;
use crate::table::TableInfo;
use ormlite_types::Dialect;
use smallvec::SmallVec;
use std::sync::Arc;

#[derive(Debug, Clone)]
enum OrderBy {
    Column { column: String, ascending: bool },
    Raw(String),
}

/// Builds a SELECT statement over one table.
///
/// ```ignore
/// let mut qb = QueryBuilder::new(Dialect::SQLite, table);
/// qb.select_columns(["id", "name"]).order_by("name", true).limit(10);
/// qb.where_().eq("active", true);
/// let query = qb.prepare()?;
/// ```
#[derive(Debug)]
pub struct QueryBuilder {
    dialect: Dialect,
    table: Arc<TableInfo>,
    select_columns: SmallVec<[String; 8]>,
    distinct: bool,
    count_of: Option<String>,
    where_: Option<Where>,
    group_by: SmallVec<[String; 4]>,
    having: Option<String>,
    order_by: SmallVec<[OrderBy; 4]>,
    limit: Option<u64>,
    offset: Option<u64>,
    qualify_columns: bool,
    error: Option<OrmLiteError>,
}

impl QueryBuilder {
    pub fn new(dialect: Dialect, table: Arc<TableInfo>) -> Self {
        Self {
            dialect,
            table,
            select_columns: SmallVec::new(),
            distinct: false,
            count_of: None,
            where_: None,
            group_by: SmallVec::new(),
            having: None,
            order_by: SmallVec::new(),
            limit: None,
            offset: None,
            qualify_columns: false,
            error: None,
        }
    }

    pub fn table(&self) -> &Arc<TableInfo> {
        &self.table
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Adds columns to the select list. Without any, all columns are selected.
    pub fn select_columns<I, S>(&mut self, columns: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for column in columns {
            let column = column.as_ref();
            match self.table.field_for_column(column) {
                Ok(field) => self.select_columns.push(field.column_name().to_owned()),
                Err(err) => stash(&mut self.error, err),
            }
        }
        self
    }

    pub fn distinct(&mut self) -> &mut Self {
        self.distinct = true;
        self
    }

    /// Selects `COUNT(*)` instead of rows.
    pub fn count_of(&mut self) -> &mut Self {
        self.count_of = Some("*".to_owned());
        self
    }

    /// Selects `COUNT(<expression>)` instead of rows.
    pub fn count_of_expression(&mut self, expression: impl Into<String>) -> &mut Self {
        self.count_of = Some(expression.into());
        self
    }

    /// The WHERE clause, created on first use.
    pub fn where_(&mut self) -> &mut Where {
        let (dialect, table) = (self.dialect, &self.table);
        self.where_
            .get_or_insert_with(|| Where::new(dialect, Arc::clone(table)))
    }

    /// Replaces the WHERE clause.
    pub fn set_where(&mut self, where_: Where) -> &mut Self {
        self.where_ = Some(where_);
        self
    }

    pub fn group_by(&mut self, column: &str) -> &mut Self {
        match self.table.field_for_column(column) {
            Ok(field) => self.group_by.push(field.column_name().to_owned()),
            Err(err) => stash(&mut self.error, err),
        }
        self
    }

    /// Raw HAVING expression.
    pub fn having(&mut self, expression: impl Into<String>) -> &mut Self {
        self.having = Some(expression.into());
        self
    }

    pub fn order_by(&mut self, column: &str, ascending: bool) -> &mut Self {
        match self.table.field_for_column(column) {
            Ok(field) => self.order_by.push(OrderBy::Column {
                column: field.column_name().to_owned(),
                ascending,
            }),
            Err(err) => stash(&mut self.error, err),
        }
        self
    }

    /// Raw ORDER BY expression.
    pub fn order_by_raw(&mut self, expression: impl Into<String>) -> &mut Self {
        self.order_by.push(OrderBy::Raw(expression.into()));
        self
    }

    pub fn limit(&mut self, limit: u64) -> &mut Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(&mut self, offset: u64) -> &mut Self {
        self.offset = Some(offset);
        self
    }

    /// Qualifies column references with the table name. Useful when the query
    /// is nested inside a statement over another table.
    pub fn qualify_columns(&mut self, qualify: bool) -> &mut Self {
        self.qualify_columns = qualify;
        self
    }

    pub fn kind(&self) -> StatementKind {
        if self.count_of.is_some() {
            StatementKind::SelectLong
        } else {
            StatementKind::Select
        }
    }

    /// Renders the statement and captures its arguments.
    pub fn prepare(&self) -> Result<PreparedQuery> {
        let mut sb = String::with_capacity(128);
        let mut args = Vec::new();
        self.append_sql(&mut sb, &mut args)?;
        let sql = sb.trim_end().to_owned();
        ormlite_trace_query!(&sql, args.len());
        Ok(PreparedQuery::new(
            sql,
            self.kind(),
            args,
            self.dialect,
            Arc::clone(&self.table),
        ))
    }

    fn append_sql(&self, sb: &mut String, args: &mut Vec<ArgumentHolder>) -> Result<()> {
        if let Some(err) = &self.error {
            return Err(err.reproduce());
        }
        let dialect = self.dialect;
        let table_name = self.table.table_name();
        let qualifier = self.qualify_columns.then_some(table_name);

        sb.push_str("SELECT ");
        match &self.count_of {
            Some(count) => {
                sb.push_str("COUNT(");
                if self.distinct {
                    sb.push_str("DISTINCT ");
                }
                sb.push_str(count);
                sb.push_str(") ");
            }
            None => {
                if self.distinct {
                    sb.push_str("DISTINCT ");
                }
                self.append_select_list(sb, qualifier);
            }
        }

        sb.push_str("FROM ");
        dialect.append_escaped_entity_name(sb, table_name);
        sb.push(' ');

        if let Some(where_) = &self.where_ {
            sb.push_str("WHERE ");
            where_.append_sql(qualifier, sb, args)?;
        }

        if !self.group_by.is_empty() {
            sb.push_str("GROUP BY ");
            for (i, column) in self.group_by.iter().enumerate() {
                if i > 0 {
                    sb.push_str(", ");
                }
                dialect.append_column(sb, qualifier, column);
            }
            sb.push(' ');
        }

        if let Some(having) = &self.having {
            sb.push_str("HAVING ");
            sb.push_str(having);
            sb.push(' ');
        }

        if !self.order_by.is_empty() {
            sb.push_str("ORDER BY ");
            for (i, order) in self.order_by.iter().enumerate() {
                if i > 0 {
                    sb.push_str(", ");
                }
                match order {
                    OrderBy::Column { column, ascending } => {
                        dialect.append_column(sb, qualifier, column);
                        if !ascending {
                            sb.push_str(" DESC");
                        }
                    }
                    OrderBy::Raw(expression) => sb.push_str(expression),
                }
            }
            sb.push(' ');
        }

        dialect.append_limit_offset(sb, self.limit, self.offset)
    }
}

impl QueryBuilder {
    fn append_select_list(&self, sb: &mut String, qualifier: Option<&str>) {
        if self.select_columns.is_empty() {
            sb.push_str("* ");
            return;
        }
        for (i, column) in self.select_columns.iter().enumerate() {
            if i > 0 {
                sb.push_str(", ");
            }
            self.dialect.append_column(sb, qualifier, column);
        }
        sb.push(' ');
    }
}

impl InternalQueryBuilderWrapper for QueryBuilder {
    fn append_statement_string(&self, sb: &mut String, args: &mut Vec<ArgumentHolder>) -> Result<()> {
        let mut inner = String::with_capacity(64);
        self.append_sql(&mut inner, args)?;
        sb.push_str(inner.trim_end());
        Ok(())
    }

    fn result_column_count(&self) -> usize {
        if self.count_of.is_some() {
            1
        } else if self.select_columns.is_empty() {
            self.table.fields().len()
        } else {
            self.select_columns.len()
        }
    }
}
