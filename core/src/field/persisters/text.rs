//! Text, character and raw byte converters.

use super::{into_text, single_char};
use crate::error::{OrmLiteError, Result};
use crate::field::FieldType;
use crate::field::converter::{ConfigObject, ConverterOps, Persister};
use crate::results::DatabaseResults;
use crate::value::SqlValue;
use ormlite_types::SqlType;

fn text_parse_default(_field: &FieldType, default_str: &str) -> Result<SqlValue> {
    Ok(SqlValue::Text(default_str.to_owned()))
}

fn text_java_to_sql_arg(field: &FieldType, value: &SqlValue) -> Result<SqlValue> {
    match value {
        SqlValue::Text(_) => Ok(value.clone()),
        SqlValue::Char(c) => Ok(SqlValue::Text(c.to_string())),
        other => Err(OrmLiteError::unexpected_arg(field.field_name(), "text", other)),
    }
}

fn text_result_to_sql_arg(
    _field: &FieldType,
    results: &dyn DatabaseResults,
    column_pos: usize,
) -> Result<SqlValue> {
    results.get_string(column_pos).map(SqlValue::Text)
}

fn text_sql_arg_to_java(field: &FieldType, sql_arg: SqlValue, _column_pos: usize) -> Result<SqlValue> {
    into_text(field, sql_arg).map(SqlValue::Text)
}

fn text_result_string_to_java(_field: &FieldType, value: &str, _column_pos: usize) -> Result<SqlValue> {
    Ok(SqlValue::Text(value.to_owned()))
}

static STRING_OPS: ConverterOps = ConverterOps {
    escaped_value: true,
    appropriate_id: true,
    ..ConverterOps::base(
        SqlType::String,
        text_parse_default,
        text_java_to_sql_arg,
        text_result_to_sql_arg,
        text_sql_arg_to_java,
        text_result_string_to_java,
    )
};

pub static STRING: Persister = Persister {
    name: "STRING",
    primitive: false,
    ops: &STRING_OPS,
};

static LONG_STRING_OPS: ConverterOps = ConverterOps {
    escaped_value: true,
    ..ConverterOps::base(
        SqlType::LongString,
        text_parse_default,
        text_java_to_sql_arg,
        text_result_to_sql_arg,
        text_sql_arg_to_java,
        text_result_string_to_java,
    )
};

pub static LONG_STRING: Persister = Persister {
    name: "LONG_STRING",
    primitive: false,
    ops: &LONG_STRING_OPS,
};

fn no_default(field: &FieldType, _default_str: &str) -> Result<SqlValue> {
    Err(OrmLiteError::Statement(format!(
        "field '{}': {} fields cannot have default values",
        field.field_name(),
        field.data_type()
    )))
}

/// Normalized name of the only character set text-as-bytes supports.
pub const UTF_8: &str = "UTF-8";

fn string_bytes_make_config(field: &FieldType) -> Result<ConfigObject> {
    match field.format() {
        None => Ok(ConfigObject::Charset(UTF_8.to_owned())),
        Some(name) if name.eq_ignore_ascii_case("utf-8") || name.eq_ignore_ascii_case("utf8") => {
            Ok(ConfigObject::Charset(UTF_8.to_owned()))
        }
        Some(name) => Err(OrmLiteError::Config(format!(
            "field '{}': unsupported charset '{name}'",
            field.field_name()
        ))),
    }
}

fn string_bytes_java_to_sql_arg(field: &FieldType, value: &SqlValue) -> Result<SqlValue> {
    match value {
        SqlValue::Text(s) => Ok(SqlValue::Bytes(s.as_bytes().to_vec())),
        other => Err(OrmLiteError::unexpected_arg(field.field_name(), "text", other)),
    }
}

fn bytes_result_to_sql_arg(
    _field: &FieldType,
    results: &dyn DatabaseResults,
    column_pos: usize,
) -> Result<SqlValue> {
    results.get_bytes(column_pos).map(SqlValue::Bytes)
}

fn string_bytes_sql_arg_to_java(
    field: &FieldType,
    sql_arg: SqlValue,
    _column_pos: usize,
) -> Result<SqlValue> {
    match sql_arg {
        SqlValue::Bytes(bytes) => String::from_utf8(bytes).map(SqlValue::Text).map_err(|e| {
            OrmLiteError::Conversion(format!(
                "field '{}': stored bytes are not UTF-8: {e}",
                field.field_name()
            ))
        }),
        other => Err(OrmLiteError::unexpected_arg(field.field_name(), "bytes", &other)),
    }
}

static STRING_BYTES_OPS: ConverterOps = ConverterOps {
    comparable: false,
    make_config_object: Some(string_bytes_make_config),
    ..ConverterOps::base(
        SqlType::ByteArray,
        no_default,
        string_bytes_java_to_sql_arg,
        bytes_result_to_sql_arg,
        string_bytes_sql_arg_to_java,
        text_result_string_to_java,
    )
};

pub static STRING_BYTES: Persister = Persister {
    name: "STRING_BYTES",
    primitive: false,
    ops: &STRING_BYTES_OPS,
};

fn byte_array_parse_default(_field: &FieldType, default_str: &str) -> Result<SqlValue> {
    Ok(SqlValue::Bytes(default_str.as_bytes().to_vec()))
}

fn byte_array_java_to_sql_arg(field: &FieldType, value: &SqlValue) -> Result<SqlValue> {
    match value {
        SqlValue::Bytes(_) => Ok(value.clone()),
        other => Err(OrmLiteError::unexpected_arg(field.field_name(), "bytes", other)),
    }
}

fn byte_array_sql_arg_to_java(
    field: &FieldType,
    sql_arg: SqlValue,
    _column_pos: usize,
) -> Result<SqlValue> {
    match sql_arg {
        SqlValue::Bytes(_) => Ok(sql_arg),
        other => Err(OrmLiteError::unexpected_arg(field.field_name(), "bytes", &other)),
    }
}

fn byte_array_result_string_to_java(
    _field: &FieldType,
    value: &str,
    _column_pos: usize,
) -> Result<SqlValue> {
    Ok(SqlValue::Bytes(value.as_bytes().to_vec()))
}

static BYTE_ARRAY_OPS: ConverterOps = ConverterOps {
    comparable: false,
    ..ConverterOps::base(
        SqlType::ByteArray,
        byte_array_parse_default,
        byte_array_java_to_sql_arg,
        bytes_result_to_sql_arg,
        byte_array_sql_arg_to_java,
        byte_array_result_string_to_java,
    )
};

pub static BYTE_ARRAY: Persister = Persister {
    name: "BYTE_ARRAY",
    primitive: false,
    ops: &BYTE_ARRAY_OPS,
};

fn char_parse_default(field: &FieldType, default_str: &str) -> Result<SqlValue> {
    single_char(field, default_str).map(SqlValue::Char)
}

fn char_java_to_sql_arg(field: &FieldType, value: &SqlValue) -> Result<SqlValue> {
    match value {
        SqlValue::Char(_) => Ok(value.clone()),
        other => Err(OrmLiteError::unexpected_arg(field.field_name(), "char", other)),
    }
}

fn char_result_to_sql_arg(
    _field: &FieldType,
    results: &dyn DatabaseResults,
    column_pos: usize,
) -> Result<SqlValue> {
    results.get_char(column_pos).map(SqlValue::Char)
}

fn char_sql_arg_to_java(field: &FieldType, sql_arg: SqlValue, _column_pos: usize) -> Result<SqlValue> {
    match sql_arg {
        SqlValue::Char(_) => Ok(sql_arg),
        other => Err(OrmLiteError::unexpected_arg(field.field_name(), "char", &other)),
    }
}

fn char_result_string_to_java(field: &FieldType, value: &str, _column_pos: usize) -> Result<SqlValue> {
    single_char(field, value).map(SqlValue::Char)
}

static CHAR_OPS: ConverterOps = ConverterOps {
    escaped_value: true,
    ..ConverterOps::base(
        SqlType::Char,
        char_parse_default,
        char_java_to_sql_arg,
        char_result_to_sql_arg,
        char_sql_arg_to_java,
        char_result_string_to_java,
    )
};

pub static CHAR: Persister = Persister {
    name: "CHAR",
    primitive: true,
    ops: &CHAR_OPS,
};

pub static CHAR_OBJ: Persister = Persister {
    name: "CHAR_OBJ",
    primitive: false,
    ops: &CHAR_OPS,
};

#[cfg(test)]
mod tests {
    use crate::error::OrmLiteError;
    use crate::field::{DataType, FieldType};
    use crate::value::SqlValue;
    use ormlite_types::{Dialect, SqlType};

    fn field(data_type: DataType) -> FieldType {
        FieldType::builder("value", data_type)
            .build(Dialect::PostgreSQL)
            .unwrap()
    }

    #[test]
    fn test_string_defaults_are_verbatim() {
        let field = field(DataType::String);
        let converter = field.converter();
        assert_eq!(
            converter.parse_default_string(&field, " spaced ").unwrap(),
            SqlValue::Text(" spaced ".into())
        );
        assert!(converter.is_escaped_value());
        assert!(converter.is_appropriate_id());
    }

    #[test]
    fn test_char_default_must_be_one_character() {
        let field = field(DataType::Char);
        let converter = field.converter();
        assert_eq!(
            converter.parse_default_string(&field, "x").unwrap(),
            SqlValue::Char('x')
        );
        assert!(matches!(
            converter.parse_default_string(&field, "xy"),
            Err(OrmLiteError::Parse(_))
        ));
        assert!(converter.parse_default_string(&field, "").is_err());
        assert!(converter.result_string_to_java(&field, "ab", 0).is_err());
    }

    #[test]
    fn test_string_bytes_round_trip() {
        let field = field(DataType::StringBytes);
        let converter = field.converter();
        let arg = converter
            .java_to_sql_arg(&field, &SqlValue::Text("héllo".into()))
            .unwrap();
        assert_eq!(arg, SqlValue::Bytes("héllo".as_bytes().to_vec()));
        assert_eq!(
            converter.sql_arg_to_java(&field, arg, 0).unwrap(),
            SqlValue::Text("héllo".into())
        );
        assert_eq!(converter.sql_type(), SqlType::ByteArray);
        assert!(!converter.is_comparable());
    }

    #[test]
    fn test_string_bytes_rejects_other_charsets() {
        let err = FieldType::builder("value", DataType::StringBytes)
            .format("ISO-8859-1")
            .build(Dialect::PostgreSQL)
            .unwrap_err();
        assert!(matches!(err, OrmLiteError::Config(_)));
    }

    #[test]
    fn test_string_bytes_has_no_default() {
        let field = field(DataType::StringBytes);
        assert!(matches!(
            field.converter().parse_default_string(&field, "abc"),
            Err(OrmLiteError::Statement(_))
        ));
    }
}
