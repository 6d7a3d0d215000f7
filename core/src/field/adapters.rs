//! Dialect adapters
//!
//! Databases without a boolean column store booleans as a byte; databases that
//! cannot bind a single character bind it as one-character text. Both are
//! [`Adapter`] records layered over the plain converter by
//! [`DialectExt::field_converter`](crate::dialect::DialectExt::field_converter).

use crate::error::{OrmLiteError, Result};
use crate::field::FieldType;
use crate::field::converter::{Adapter, FieldConverter};
use crate::field::persisters::{parse_str, single_char};
use crate::results::DatabaseResults;
use crate::value::SqlValue;

fn byte_from_bool(field: &FieldType, value: &SqlValue) -> Result<SqlValue> {
    match value {
        SqlValue::Bool(b) => Ok(SqlValue::Byte(*b as i8)),
        other => Err(OrmLiteError::unexpected_arg(field.field_name(), "bool", other)),
    }
}

fn number_parse_default(
    inner: &FieldConverter,
    field: &FieldType,
    default_str: &str,
) -> Result<SqlValue> {
    let parsed = inner.parse_default_string(field, default_str)?;
    byte_from_bool(field, &parsed)
}

fn number_java_to_sql_arg(
    _inner: &FieldConverter,
    field: &FieldType,
    value: &SqlValue,
) -> Result<SqlValue> {
    byte_from_bool(field, value)
}

fn number_result_to_sql_arg(
    _inner: &FieldConverter,
    _field: &FieldType,
    results: &dyn DatabaseResults,
    column_pos: usize,
) -> Result<SqlValue> {
    results.get_byte(column_pos).map(SqlValue::Byte)
}

fn number_sql_arg_to_java(
    _inner: &FieldConverter,
    field: &FieldType,
    sql_arg: SqlValue,
    _column_pos: usize,
) -> Result<SqlValue> {
    match sql_arg {
        SqlValue::Bool(_) => Ok(sql_arg),
        // narrowed to a byte first, then only exactly 1 reads as true
        other => other
            .as_i64()
            .map(|v| SqlValue::Bool(v as i8 == 1))
            .ok_or_else(|| OrmLiteError::unexpected_arg(field.field_name(), "byte", &other)),
    }
}

fn number_result_string_to_java(
    inner: &FieldConverter,
    field: &FieldType,
    value: &str,
    column_pos: usize,
) -> Result<SqlValue> {
    let byte = parse_str::<i8>(field, value, "byte")?;
    number_sql_arg_to_java(inner, field, SqlValue::Byte(byte), column_pos)
}

/// Stores booleans as a byte, `1` for true and `0` for false.
///
/// The column still reports [`SqlType::Boolean`](ormlite_types::SqlType) so
/// schema generation picks the dialect's boolean spelling.
pub static BOOLEAN_NUMBER: Adapter = Adapter {
    parse_default_string: Some(number_parse_default),
    java_to_sql_arg: Some(number_java_to_sql_arg),
    result_to_sql_arg: Some(number_result_to_sql_arg),
    sql_arg_to_java: Some(number_sql_arg_to_java),
    result_string_to_java: Some(number_result_string_to_java),
    ..Adapter::forwarding("BOOLEAN_NUMBER")
};

fn char_to_text(value: SqlValue) -> SqlValue {
    match value {
        SqlValue::Char(c) => SqlValue::Text(c.to_string()),
        other => other,
    }
}

fn compat_java_to_sql_arg(
    inner: &FieldConverter,
    field: &FieldType,
    value: &SqlValue,
) -> Result<SqlValue> {
    inner.java_to_sql_arg(field, value).map(char_to_text)
}

fn compat_result_to_sql_arg(
    inner: &FieldConverter,
    field: &FieldType,
    results: &dyn DatabaseResults,
    column_pos: usize,
) -> Result<SqlValue> {
    inner
        .result_to_sql_arg(field, results, column_pos)
        .map(char_to_text)
}

fn compat_sql_arg_to_java(
    inner: &FieldConverter,
    field: &FieldType,
    sql_arg: SqlValue,
    column_pos: usize,
) -> Result<SqlValue> {
    let sql_arg = match sql_arg {
        SqlValue::Text(text) => SqlValue::Char(single_char(field, &text)?),
        other => other,
    };
    inner.sql_arg_to_java(field, sql_arg, column_pos)
}

/// Binds single characters as one-character text.
pub static CHARACTER_COMPAT: Adapter = Adapter {
    java_to_sql_arg: Some(compat_java_to_sql_arg),
    result_to_sql_arg: Some(compat_result_to_sql_arg),
    sql_arg_to_java: Some(compat_sql_arg_to_java),
    ..Adapter::forwarding("CHARACTER_COMPAT")
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::DataType;
    use crate::results::BufferedResults;
    use ormlite_types::{Dialect, SqlType};

    fn boolean_on(dialect: Dialect) -> FieldType {
        FieldType::builder("flag", DataType::Boolean)
            .build(dialect)
            .unwrap()
    }

    #[test]
    fn test_boolean_number_keeps_boolean_sql_type() {
        let field = boolean_on(Dialect::SQLite);
        assert_eq!(field.converter().name(), "BOOLEAN_NUMBER");
        assert_eq!(field.converter().sql_type(), SqlType::Boolean);
        assert_eq!(field.converter().persister().name, "BOOLEAN");
    }

    #[test]
    fn test_boolean_number_scenario() {
        let field = boolean_on(Dialect::SQLite);
        let converter = field.converter();
        assert_eq!(
            converter.parse_default_string(&field, "true").unwrap(),
            SqlValue::Byte(1)
        );
        assert_eq!(
            converter.java_to_sql_arg(&field, &SqlValue::Bool(true)).unwrap(),
            SqlValue::Byte(1)
        );
        assert_eq!(
            converter.java_to_sql_arg(&field, &SqlValue::Bool(false)).unwrap(),
            SqlValue::Byte(0)
        );
        assert_eq!(
            converter
                .sql_arg_to_java(&field, SqlValue::Byte(2), 0)
                .unwrap(),
            SqlValue::Bool(false)
        );
        assert_eq!(
            converter.result_string_to_java(&field, "1", 0).unwrap(),
            SqlValue::Bool(true)
        );
    }

    #[test]
    fn test_boolean_number_reads_byte_column() {
        let field = boolean_on(Dialect::MySQL);
        let results = BufferedResults::single_row([("flag", SqlValue::Long(1))]);
        assert_eq!(
            field.converter().result_to_java(&field, &results, 0).unwrap(),
            SqlValue::Bool(true)
        );
    }

    #[test]
    fn test_boolean_number_narrows_wide_values_like_the_column_read() {
        let field = boolean_on(Dialect::SQLite);
        let results = BufferedResults::single_row([("flag", SqlValue::Long(257))]);
        assert_eq!(
            field.converter().result_to_java(&field, &results, 0).unwrap(),
            SqlValue::Bool(true)
        );
        assert_eq!(
            field.sql_arg_to_java(SqlValue::Long(257), 0).unwrap(),
            SqlValue::Bool(true)
        );
        assert_eq!(
            field.sql_arg_to_java(SqlValue::Long(258), 0).unwrap(),
            SqlValue::Bool(false)
        );
    }

    #[test]
    fn test_adapter_forwards_unadapted_operations() {
        let plain = boolean_on(Dialect::PostgreSQL);
        let adapted = boolean_on(Dialect::Derby);
        assert_eq!(
            adapted.converter().is_primitive(),
            plain.converter().is_primitive()
        );
        assert_eq!(
            adapted.converter().is_escaped_value(),
            plain.converter().is_escaped_value()
        );
        assert!(adapted.converter().make_config_object(&adapted).unwrap().is_none());
    }

    #[test]
    fn test_character_compat_binds_text() {
        let field = FieldType::builder("initial", DataType::CharObj)
            .build(Dialect::Derby)
            .unwrap();
        let converter = field.converter();
        assert_eq!(converter.name(), "CHARACTER_COMPAT");
        assert_eq!(converter.sql_type(), SqlType::Char);
        let arg = converter
            .java_to_sql_arg(&field, &SqlValue::Char('q'))
            .unwrap();
        assert_eq!(arg, SqlValue::Text("q".into()));
        assert_eq!(
            converter.sql_arg_to_java(&field, arg, 0).unwrap(),
            SqlValue::Char('q')
        );
        assert!(
            converter
                .sql_arg_to_java(&field, SqlValue::Text("qq".into()), 0)
                .is_err()
        );
        assert!(!converter.is_primitive());
    }
}
