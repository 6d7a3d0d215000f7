//! Dialect type re-exported from ormlite-types with core-specific extensions.

use crate::error::{OrmLiteError, Result};
use crate::field::adapters::{BOOLEAN_NUMBER, CHARACTER_COMPAT};
use crate::field::{FieldConverter, Persister};
use crate::field::persisters::{boolean, text};
use std::borrow::Cow;
use std::fmt::Write;

/// Re-export the unified Dialect enum from ormlite-types
pub use ormlite_types::Dialect;

/// Extension trait for dialect-specific rendering and converter selection
pub trait DialectExt {
    /// Renders a placeholder for this dialect with the given 1-based index.
    ///
    /// Returns `Cow::Borrowed("?")` for positional dialects (zero allocation),
    /// `Cow::Owned` for PostgreSQL numbered placeholders.
    ///
    /// # Examples
    /// - PostgreSQL: `$1`, `$2`, `$3`
    /// - SQLite/MySQL/Derby/H2: `?`
    fn render_placeholder(&self, index: usize) -> Cow<'static, str>;

    /// Appends a quoted table or column name. Dotted names are quoted per part.
    fn append_escaped_entity_name(&self, sb: &mut String, name: &str);

    /// Appends a column reference, qualified with `table` when given.
    fn append_column(&self, sb: &mut String, table: Option<&str>, column: &str) {
        if let Some(table) = table {
            self.append_escaped_entity_name(sb, table);
            sb.push('.');
        }
        self.append_escaped_entity_name(sb, column);
    }

    /// Appends the row-window clause, each part followed by a space.
    fn append_limit_offset(&self, sb: &mut String, limit: Option<u64>, offset: Option<u64>) -> Result<()>;

    /// Chooses the converter a field of this persister's type uses here.
    fn field_converter(&self, persister: &'static Persister) -> FieldConverter;
}

impl DialectExt for Dialect {
    #[inline]
    fn render_placeholder(&self, index: usize) -> Cow<'static, str> {
        match self {
            Dialect::PostgreSQL => Cow::Owned(format!("${}", index)),
            Dialect::SQLite | Dialect::MySQL | Dialect::Derby | Dialect::H2 => Cow::Borrowed("?"),
        }
    }

    fn append_escaped_entity_name(&self, sb: &mut String, name: &str) {
        let quote = self.identifier_quote();
        for (i, part) in name.split('.').enumerate() {
            if i > 0 {
                sb.push('.');
            }
            sb.push(quote);
            for c in part.chars() {
                if c == quote {
                    sb.push(quote);
                }
                sb.push(c);
            }
            sb.push(quote);
        }
    }

    fn append_limit_offset(&self, sb: &mut String, limit: Option<u64>, offset: Option<u64>) -> Result<()> {
        match self {
            Dialect::Derby => {
                if let Some(offset) = offset {
                    let _ = write!(sb, "OFFSET {offset} ROWS ");
                }
                if let Some(limit) = limit {
                    let _ = write!(sb, "FETCH NEXT {limit} ROWS ONLY ");
                }
            }
            Dialect::SQLite | Dialect::MySQL => {
                if offset.is_some() && limit.is_none() {
                    return Err(OrmLiteError::Statement(format!(
                        "{self} requires a limit when an offset is set"
                    )));
                }
                if let Some(limit) = limit {
                    let _ = write!(sb, "LIMIT {limit} ");
                }
                if let Some(offset) = offset {
                    let _ = write!(sb, "OFFSET {offset} ");
                }
            }
            Dialect::PostgreSQL | Dialect::H2 => {
                if let Some(limit) = limit {
                    let _ = write!(sb, "LIMIT {limit} ");
                }
                if let Some(offset) = offset {
                    let _ = write!(sb, "OFFSET {offset} ");
                }
            }
        }
        Ok(())
    }

    fn field_converter(&self, persister: &'static Persister) -> FieldConverter {
        let plain = FieldConverter::Persister(persister);
        let is = |other: &'static Persister| std::ptr::eq(persister, other);
        if self.lacks_boolean_type() && (is(&boolean::BOOLEAN) || is(&boolean::BOOLEAN_OBJ)) {
            plain.adapt(&BOOLEAN_NUMBER)
        } else if self.lacks_char_binding() && (is(&text::CHAR) || is(&text::CHAR_OBJ)) {
            plain.adapt(&CHARACTER_COMPAT)
        } else {
            plain
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::DataType;

    #[test]
    fn test_placeholders() {
        assert_eq!(Dialect::PostgreSQL.render_placeholder(3), "$3");
        assert_eq!(Dialect::SQLite.render_placeholder(3), "?");
        assert_eq!(Dialect::Derby.render_placeholder(1), "?");
    }

    #[test]
    fn test_entity_name_quoting() {
        let mut sb = String::new();
        Dialect::SQLite.append_escaped_entity_name(&mut sb, "main.we\"ird");
        assert_eq!(sb, r#""main"."we""ird""#);

        let mut sb = String::new();
        Dialect::MySQL.append_column(&mut sb, Some("foo"), "id");
        assert_eq!(sb, "`foo`.`id`");
    }

    #[test]
    fn test_limit_offset_forms() {
        let mut sb = String::new();
        Dialect::PostgreSQL
            .append_limit_offset(&mut sb, Some(10), Some(20))
            .unwrap();
        assert_eq!(sb, "LIMIT 10 OFFSET 20 ");

        let mut sb = String::new();
        Dialect::Derby
            .append_limit_offset(&mut sb, Some(10), Some(20))
            .unwrap();
        assert_eq!(sb, "OFFSET 20 ROWS FETCH NEXT 10 ROWS ONLY ");

        let mut sb = String::new();
        Dialect::H2.append_limit_offset(&mut sb, None, Some(5)).unwrap();
        assert_eq!(sb, "OFFSET 5 ");
    }

    #[test]
    fn test_offset_without_limit_rejected() {
        for dialect in [Dialect::SQLite, Dialect::MySQL] {
            let mut sb = String::new();
            assert!(matches!(
                dialect.append_limit_offset(&mut sb, None, Some(5)),
                Err(OrmLiteError::Statement(_))
            ));
        }
    }

    #[test]
    fn test_converter_selection() {
        let boolean = DataType::Boolean.persister().unwrap();
        let boxed = DataType::BooleanObj.persister().unwrap();
        let character = DataType::Char.persister().unwrap();

        for dialect in [Dialect::SQLite, Dialect::MySQL, Dialect::Derby] {
            assert_eq!(dialect.field_converter(boolean).name(), "BOOLEAN_NUMBER");
            assert_eq!(dialect.field_converter(boxed).name(), "BOOLEAN_NUMBER");
        }
        assert_eq!(Dialect::PostgreSQL.field_converter(boolean).name(), "BOOLEAN");
        assert_eq!(Dialect::H2.field_converter(boolean).name(), "BOOLEAN");

        assert_eq!(Dialect::Derby.field_converter(character).name(), "CHARACTER_COMPAT");
        assert_eq!(Dialect::SQLite.field_converter(character).name(), "CHAR");

        let long = DataType::Long.persister().unwrap();
        assert_eq!(Dialect::Derby.field_converter(long).name(), "LONG");
    }
}
