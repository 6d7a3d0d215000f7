//! DELETE builder

use super::{PreparedQuery, StatementKind, Where};
use crate::dialect::DialectExt;
use crate::error::Result;
use crate::ormlite_trace_query;
use crate::table::TableInfo;
use ormlite_types::Dialect;
use std::sync::Arc;

/// Builds a `DELETE FROM <table> [WHERE ...]` statement.
#[derive(Debug)]
pub struct DeleteBuilder {
    dialect: Dialect,
    table: Arc<TableInfo>,
    where_: Option<Where>,
}

impl DeleteBuilder {
    pub fn new(dialect: Dialect, table: Arc<TableInfo>) -> Self {
        Self {
            dialect,
            table,
            where_: None,
        }
    }

    /// The WHERE clause, created on first use. Without one every row is deleted.
    pub fn where_(&mut self) -> &mut Where {
        let (dialect, table) = (self.dialect, &self.table);
        self.where_
            .get_or_insert_with(|| Where::new(dialect, Arc::clone(table)))
    }

    pub fn prepare(&self) -> Result<PreparedQuery> {
        let mut sb = String::with_capacity(64);
        let mut args = Vec::new();
        sb.push_str("DELETE FROM ");
        self.dialect
            .append_escaped_entity_name(&mut sb, self.table.table_name());
        sb.push(' ');
        if let Some(where_) = &self.where_ {
            sb.push_str("WHERE ");
            where_.append_sql(None, &mut sb, &mut args)?;
        }
        let sql = sb.trim_end().to_owned();
        ormlite_trace_query!(&sql, args.len());
        Ok(PreparedQuery::new(
            sql,
            StatementKind::Delete,
            args,
            self.dialect,
            Arc::clone(&self.table),
        ))
    }
}
