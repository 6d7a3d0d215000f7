//! Boolean converters: native `bool`, as a char pair, or as an integer.

use super::{expect_bool, parse_bool, parse_str, single_char};
use crate::error::{OrmLiteError, Result};
use crate::field::FieldType;
use crate::field::converter::{ConfigObject, ConverterOps, Persister};
use crate::results::DatabaseResults;
use crate::value::SqlValue;
use ormlite_types::SqlType;

/// Format used by [`BOOLEAN_CHAR`] when the field has none: true, then false.
pub const DEFAULT_BOOLEAN_CHARS: &str = "10";

fn bool_parse_default(field: &FieldType, default_str: &str) -> Result<SqlValue> {
    parse_bool(field, default_str).map(SqlValue::Bool)
}

fn bool_java_to_sql_arg(field: &FieldType, value: &SqlValue) -> Result<SqlValue> {
    expect_bool(field, value).map(SqlValue::Bool)
}

fn bool_result_to_sql_arg(
    _field: &FieldType,
    results: &dyn DatabaseResults,
    column_pos: usize,
) -> Result<SqlValue> {
    results.get_boolean(column_pos).map(SqlValue::Bool)
}

fn bool_sql_arg_to_java(field: &FieldType, sql_arg: SqlValue, _column_pos: usize) -> Result<SqlValue> {
    expect_bool(field, &sql_arg).map(SqlValue::Bool)
}

fn bool_result_string_to_java(field: &FieldType, value: &str, _column_pos: usize) -> Result<SqlValue> {
    parse_bool(field, value).map(SqlValue::Bool)
}

static BOOLEAN_OPS: ConverterOps = ConverterOps::base(
    SqlType::Boolean,
    bool_parse_default,
    bool_java_to_sql_arg,
    bool_result_to_sql_arg,
    bool_sql_arg_to_java,
    bool_result_string_to_java,
);

pub static BOOLEAN: Persister = Persister {
    name: "BOOLEAN",
    primitive: true,
    ops: &BOOLEAN_OPS,
};

pub static BOOLEAN_OBJ: Persister = Persister {
    name: "BOOLEAN_OBJ",
    primitive: false,
    ops: &BOOLEAN_OPS,
};

fn boolean_chars(field: &FieldType) -> (char, char) {
    match field.config() {
        Some(ConfigObject::BooleanChars {
            true_char,
            false_char,
        }) => (*true_char, *false_char),
        _ => ('1', '0'),
    }
}

fn char_make_config(field: &FieldType) -> Result<ConfigObject> {
    let format = field.format().unwrap_or(DEFAULT_BOOLEAN_CHARS);
    let mut chars = format.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(true_char), Some(false_char), None) if true_char != false_char => {
            Ok(ConfigObject::BooleanChars {
                true_char,
                false_char,
            })
        }
        _ => Err(OrmLiteError::Config(format!(
            "field '{}': boolean char format '{format}' must be two distinct characters",
            field.field_name()
        ))),
    }
}

fn char_parse_default(field: &FieldType, default_str: &str) -> Result<SqlValue> {
    let (t, f) = boolean_chars(field);
    parse_bool(field, default_str).map(|b| SqlValue::Char(if b { t } else { f }))
}

fn char_java_to_sql_arg(field: &FieldType, value: &SqlValue) -> Result<SqlValue> {
    let (t, f) = boolean_chars(field);
    expect_bool(field, value).map(|b| SqlValue::Char(if b { t } else { f }))
}

fn char_result_to_sql_arg(
    _field: &FieldType,
    results: &dyn DatabaseResults,
    column_pos: usize,
) -> Result<SqlValue> {
    results.get_char(column_pos).map(SqlValue::Char)
}

fn char_sql_arg_to_java(field: &FieldType, sql_arg: SqlValue, _column_pos: usize) -> Result<SqlValue> {
    let (t, _) = boolean_chars(field);
    match sql_arg {
        SqlValue::Char(c) => Ok(SqlValue::Bool(c == t)),
        SqlValue::Text(s) => single_char(field, &s).map(|c| SqlValue::Bool(c == t)),
        other => Err(OrmLiteError::unexpected_arg(field.field_name(), "char", &other)),
    }
}

fn char_result_string_to_java(field: &FieldType, value: &str, _column_pos: usize) -> Result<SqlValue> {
    let (t, _) = boolean_chars(field);
    single_char(field, value).map(|c| SqlValue::Bool(c == t))
}

static BOOLEAN_CHAR_OPS: ConverterOps = ConverterOps {
    escaped_value: true,
    make_config_object: Some(char_make_config),
    ..ConverterOps::base(
        SqlType::Char,
        char_parse_default,
        char_java_to_sql_arg,
        char_result_to_sql_arg,
        char_sql_arg_to_java,
        char_result_string_to_java,
    )
};

pub static BOOLEAN_CHAR: Persister = Persister {
    name: "BOOLEAN_CHAR",
    primitive: true,
    ops: &BOOLEAN_CHAR_OPS,
};

fn int_parse_default(field: &FieldType, default_str: &str) -> Result<SqlValue> {
    parse_bool(field, default_str).map(|b| SqlValue::Int(b as i32))
}

fn int_java_to_sql_arg(field: &FieldType, value: &SqlValue) -> Result<SqlValue> {
    expect_bool(field, value).map(|b| SqlValue::Int(b as i32))
}

fn int_result_to_sql_arg(
    _field: &FieldType,
    results: &dyn DatabaseResults,
    column_pos: usize,
) -> Result<SqlValue> {
    results.get_int(column_pos).map(SqlValue::Int)
}

fn int_sql_arg_to_java(field: &FieldType, sql_arg: SqlValue, _column_pos: usize) -> Result<SqlValue> {
    sql_arg
        .as_i64()
        .map(|v| SqlValue::Bool(v == 1))
        .ok_or_else(|| OrmLiteError::unexpected_arg(field.field_name(), "integer", &sql_arg))
}

fn int_result_string_to_java(field: &FieldType, value: &str, _column_pos: usize) -> Result<SqlValue> {
    parse_str::<i32>(field, value, "integer").map(|v| SqlValue::Bool(v == 1))
}

static BOOLEAN_INTEGER_OPS: ConverterOps = ConverterOps::base(
    SqlType::Integer,
    int_parse_default,
    int_java_to_sql_arg,
    int_result_to_sql_arg,
    int_sql_arg_to_java,
    int_result_string_to_java,
);

pub static BOOLEAN_INTEGER: Persister = Persister {
    name: "BOOLEAN_INTEGER",
    primitive: true,
    ops: &BOOLEAN_INTEGER_OPS,
};

#[cfg(test)]
mod tests {
    use crate::error::OrmLiteError;
    use crate::field::{DataType, FieldType};
    use crate::results::BufferedResults;
    use crate::value::SqlValue;
    use ormlite_types::Dialect;

    #[test]
    fn test_boolean_defaults_are_strict() {
        let field = FieldType::builder("flag", DataType::Boolean)
            .build(Dialect::PostgreSQL)
            .unwrap();
        let converter = field.converter();
        assert_eq!(
            converter.parse_default_string(&field, "TRUE").unwrap(),
            SqlValue::Bool(true)
        );
        assert_eq!(
            converter.parse_default_string(&field, "false").unwrap(),
            SqlValue::Bool(false)
        );
        assert!(matches!(
            converter.parse_default_string(&field, "yes"),
            Err(OrmLiteError::Parse(_))
        ));
    }

    #[test]
    fn test_boolean_char_uses_format() {
        let field = FieldType::builder("flag", DataType::BooleanChar)
            .format("YN")
            .build(Dialect::PostgreSQL)
            .unwrap();
        let converter = field.converter();
        assert_eq!(
            converter
                .java_to_sql_arg(&field, &SqlValue::Bool(false))
                .unwrap(),
            SqlValue::Char('N')
        );
        assert_eq!(
            converter
                .sql_arg_to_java(&field, SqlValue::Char('Y'), 0)
                .unwrap(),
            SqlValue::Bool(true)
        );
        assert_eq!(
            converter.result_string_to_java(&field, "N", 0).unwrap(),
            SqlValue::Bool(false)
        );
    }

    #[test]
    fn test_boolean_char_default_format() {
        let field = FieldType::builder("flag", DataType::BooleanChar)
            .default_value("true")
            .build(Dialect::SQLite)
            .unwrap();
        assert_eq!(field.default_value(), Some(&SqlValue::Char('1')));
    }

    #[test]
    fn test_boolean_char_rejects_bad_format() {
        let err = FieldType::builder("flag", DataType::BooleanChar)
            .format("YES")
            .build(Dialect::SQLite)
            .unwrap_err();
        assert!(matches!(err, OrmLiteError::Config(_)));
    }

    #[test]
    fn test_boolean_integer_only_one_is_true() {
        let field = FieldType::builder("flag", DataType::BooleanInteger)
            .build(Dialect::PostgreSQL)
            .unwrap();
        let converter = field.converter();
        assert_eq!(
            converter.java_to_sql_arg(&field, &SqlValue::Bool(true)).unwrap(),
            SqlValue::Int(1)
        );
        for (stored, expected) in [(1, true), (0, false), (2, false), (-1, false)] {
            let results = BufferedResults::single_row([("flag", SqlValue::Long(stored))]);
            assert_eq!(
                converter.result_to_java(&field, &results, 0).unwrap(),
                SqlValue::Bool(expected),
                "{stored}"
            );
        }
    }
}
