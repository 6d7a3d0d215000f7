//! Rendered statements with their bind arguments

use super::{ArgumentHolder, StatementKind};
use crate::error::{OrmLiteError, Result};
use crate::table::TableInfo;
use crate::value::SqlValue;
use ormlite_types::Dialect;
use std::sync::Arc;

/// SQL text plus the arguments for its placeholders, in placeholder order.
#[derive(Debug, Clone)]
pub struct PreparedQuery {
    sql: String,
    kind: StatementKind,
    args: Vec<ArgumentHolder>,
    dialect: Dialect,
    table: Arc<TableInfo>,
}

impl PreparedQuery {
    pub(crate) fn new(
        sql: String,
        kind: StatementKind,
        args: Vec<ArgumentHolder>,
        dialect: Dialect,
        table: Arc<TableInfo>,
    ) -> Self {
        Self {
            sql,
            kind,
            args,
            dialect,
            table,
        }
    }

    #[inline]
    pub fn sql(&self) -> &str {
        &self.sql
    }

    #[inline]
    pub fn kind(&self) -> StatementKind {
        self.kind
    }

    #[inline]
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn table(&self) -> &Arc<TableInfo> {
        &self.table
    }

    pub fn arguments(&self) -> &[ArgumentHolder] {
        &self.args
    }

    /// Sets the native value of the argument at `index` (0-based), e.g. a
    /// select-arg left open when the statement was built.
    pub fn set_argument(&mut self, index: usize, value: impl Into<SqlValue>) -> Result<()> {
        let count = self.args.len();
        let arg = self.args.get_mut(index).ok_or_else(|| {
            OrmLiteError::Statement(format!(
                "argument index {index} out of range, statement has {count} arguments"
            ))
        })?;
        arg.set_value(value)
    }

    /// Wire values for every placeholder. Fails if any argument is unset.
    pub fn bind_values(&self) -> Result<Vec<SqlValue>> {
        self.args.iter().map(ArgumentHolder::sql_value).collect()
    }

    /// The SQL with every placeholder replaced by its argument as a literal.
    ///
    /// For logging and debugging. Quoted literals and identifiers in the text
    /// are skipped when looking for placeholders.
    pub fn inline_sql(&self) -> Result<String> {
        let mut out = String::with_capacity(self.sql.len() + self.args.len() * 8);
        let mut chars = self.sql.chars().peekable();
        let mut next_positional = 0usize;
        let mut quote: Option<char> = None;

        while let Some(c) = chars.next() {
            if let Some(q) = quote {
                out.push(c);
                if c == q {
                    quote = None;
                }
                continue;
            }
            match c {
                '\'' | '"' | '`' => {
                    quote = Some(c);
                    out.push(c);
                }
                '?' if !self.dialect.uses_numbered_placeholders() => {
                    self.write_arg(&mut out, next_positional)?;
                    next_positional += 1;
                }
                '$' if self.dialect.uses_numbered_placeholders()
                    && chars.peek().is_some_and(char::is_ascii_digit) =>
                {
                    let mut number = 0usize;
                    while let Some(digit) = chars.peek().and_then(|d| d.to_digit(10)) {
                        number = number
                            .checked_mul(10)
                            .and_then(|n| n.checked_add(digit as usize))
                            .ok_or_else(|| {
                                OrmLiteError::Statement("placeholder number is too large".into())
                            })?;
                        chars.next();
                    }
                    if number == 0 {
                        return Err(OrmLiteError::Statement("placeholder $0 is not valid".into()));
                    }
                    self.write_arg(&mut out, number - 1)?;
                }
                _ => out.push(c),
            }
        }
        Ok(out)
    }

    fn write_arg(&self, out: &mut String, index: usize) -> Result<()> {
        let arg = self.args.get(index).ok_or_else(|| {
            OrmLiteError::Statement(format!(
                "placeholder {} has no argument, statement has {}",
                index + 1,
                self.args.len()
            ))
        })?;
        arg.sql_value()?.write_literal(out, arg.is_escaped());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{DataType, FieldType};
    use crate::stmt::{QueryBuilder, SelectArg};

    fn users(dialect: Dialect) -> Arc<TableInfo> {
        let fields = vec![
            FieldType::builder("id", DataType::Integer)
                .generated_id(true)
                .build(dialect)
                .unwrap(),
            FieldType::builder("name", DataType::String)
                .build(dialect)
                .unwrap(),
        ];
        Arc::new(TableInfo::new("users", fields).unwrap())
    }

    #[test]
    fn test_set_argument_and_bind() {
        let mut qb = QueryBuilder::new(Dialect::SQLite, users(Dialect::SQLite));
        qb.where_().eq("name", SelectArg::new()).and().gt("id", 10);
        let mut query = qb.prepare().unwrap();

        assert!(matches!(query.bind_values(), Err(OrmLiteError::Statement(_))));
        query.set_argument(0, "bob").unwrap();
        assert_eq!(
            query.bind_values().unwrap(),
            vec![SqlValue::Text("bob".into()), SqlValue::Int(10)]
        );
        assert!(query.set_argument(2, 1).is_err());
        // converted with the column's converter
        assert!(query.set_argument(1, "ten").is_err());
    }

    #[test]
    fn test_inline_sql_positional() {
        let mut qb = QueryBuilder::new(Dialect::SQLite, users(Dialect::SQLite));
        qb.where_()
            .eq("name", "O'Neil")
            .and()
            .raw("'?' <> ?", [ArgumentHolder::raw(3)]);
        let query = qb.prepare().unwrap();
        assert_eq!(
            query.inline_sql().unwrap(),
            r#"SELECT * FROM "users" WHERE "name" = 'O''Neil' AND '?' <> 3"#
        );
    }

    #[test]
    fn test_inline_sql_numbered() {
        let mut qb = QueryBuilder::new(Dialect::PostgreSQL, users(Dialect::PostgreSQL));
        qb.where_().in_("id", [1, 2, 3]);
        let query = qb.prepare().unwrap();
        assert_eq!(
            query.inline_sql().unwrap(),
            r#"SELECT * FROM "users" WHERE "id" IN (1,2,3)"#
        );
    }

    #[test]
    fn test_inline_sql_rejects_oversized_placeholder() {
        let mut qb = QueryBuilder::new(Dialect::PostgreSQL, users(Dialect::PostgreSQL));
        qb.where_()
            .raw("\"id\" = $99999999999999999999999", Vec::<ArgumentHolder>::new());
        let query = qb.prepare().unwrap();
        assert!(matches!(query.inline_sql(), Err(OrmLiteError::Statement(_))));
    }

    #[test]
    fn test_inline_sql_requires_values() {
        let mut qb = QueryBuilder::new(Dialect::SQLite, users(Dialect::SQLite));
        qb.where_().eq("id", SelectArg::new());
        assert!(qb.prepare().unwrap().inline_sql().is_err());
    }
}
