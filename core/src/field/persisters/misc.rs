//! Serialized, UUID and arbitrary-precision converters.

use super::{expect_text, into_text, parse_str};
use crate::error::{OrmLiteError, Result};
use crate::field::FieldType;
use crate::field::converter::{ConverterOps, Persister};
use crate::results::DatabaseResults;
use crate::value::SqlValue;
use ormlite_types::SqlType;
use rust_decimal::Decimal;
use uuid::Uuid;

fn unsupported(field: &FieldType, what: &str) -> OrmLiteError {
    OrmLiteError::Statement(format!(
        "field '{}': {} fields do not support {what}",
        field.field_name(),
        field.data_type()
    ))
}

fn serializable_parse_default(field: &FieldType, _default_str: &str) -> Result<SqlValue> {
    Err(unsupported(field, "default values"))
}

fn serializable_java_to_sql_arg(field: &FieldType, value: &SqlValue) -> Result<SqlValue> {
    match value {
        SqlValue::Json(json) => serde_json::to_vec(json).map(SqlValue::Bytes).map_err(|e| {
            OrmLiteError::Conversion(format!(
                "field '{}': could not serialize value: {e}",
                field.field_name()
            ))
        }),
        other => Err(OrmLiteError::unexpected_arg(field.field_name(), "json", other)),
    }
}

fn serializable_result_to_sql_arg(
    _field: &FieldType,
    results: &dyn DatabaseResults,
    column_pos: usize,
) -> Result<SqlValue> {
    results.get_bytes(column_pos).map(SqlValue::Bytes)
}

fn serializable_sql_arg_to_java(
    field: &FieldType,
    sql_arg: SqlValue,
    column_pos: usize,
) -> Result<SqlValue> {
    match sql_arg {
        SqlValue::Bytes(bytes) => serde_json::from_slice(&bytes).map(SqlValue::Json).map_err(|e| {
            OrmLiteError::Conversion(format!(
                "field '{}': could not deserialize column {column_pos}: {e}",
                field.field_name()
            ))
        }),
        other => Err(OrmLiteError::unexpected_arg(field.field_name(), "bytes", &other)),
    }
}

fn serializable_result_string_to_java(
    field: &FieldType,
    _value: &str,
    _column_pos: usize,
) -> Result<SqlValue> {
    Err(unsupported(field, "textual columns"))
}

static SERIALIZABLE_OPS: ConverterOps = ConverterOps {
    comparable: false,
    ..ConverterOps::base(
        SqlType::Serializable,
        serializable_parse_default,
        serializable_java_to_sql_arg,
        serializable_result_to_sql_arg,
        serializable_sql_arg_to_java,
        serializable_result_string_to_java,
    )
};

pub static SERIALIZABLE: Persister = Persister {
    name: "SERIALIZABLE",
    primitive: false,
    ops: &SERIALIZABLE_OPS,
};

fn parse_uuid(field: &FieldType, value: &str) -> Result<Uuid> {
    parse_str::<Uuid>(field, value, "uuid")
}

fn new_uuid() -> SqlValue {
    SqlValue::Uuid(Uuid::new_v4())
}

fn string_result_to_sql_arg(
    _field: &FieldType,
    results: &dyn DatabaseResults,
    column_pos: usize,
) -> Result<SqlValue> {
    results.get_string(column_pos).map(SqlValue::Text)
}

fn uuid_parse_default(field: &FieldType, default_str: &str) -> Result<SqlValue> {
    parse_uuid(field, default_str).map(|u| SqlValue::Text(u.hyphenated().to_string()))
}

fn uuid_java_to_sql_arg(field: &FieldType, value: &SqlValue) -> Result<SqlValue> {
    match value {
        SqlValue::Uuid(u) => Ok(SqlValue::Text(u.hyphenated().to_string())),
        other => Err(OrmLiteError::unexpected_arg(field.field_name(), "uuid", other)),
    }
}

fn uuid_sql_arg_to_java(field: &FieldType, sql_arg: SqlValue, _column_pos: usize) -> Result<SqlValue> {
    let text = into_text(field, sql_arg)?;
    parse_uuid(field, &text).map(SqlValue::Uuid)
}

fn uuid_result_string_to_java(field: &FieldType, value: &str, _column_pos: usize) -> Result<SqlValue> {
    parse_uuid(field, value).map(SqlValue::Uuid)
}

static UUID_OPS: ConverterOps = ConverterOps {
    escaped_value: true,
    appropriate_id: true,
    generate_id: Some(new_uuid),
    ..ConverterOps::base(
        SqlType::String,
        uuid_parse_default,
        uuid_java_to_sql_arg,
        string_result_to_sql_arg,
        uuid_sql_arg_to_java,
        uuid_result_string_to_java,
    )
};

pub static UUID: Persister = Persister {
    name: "UUID",
    primitive: false,
    ops: &UUID_OPS,
};

fn native_uuid_parse_default(field: &FieldType, default_str: &str) -> Result<SqlValue> {
    parse_uuid(field, default_str).map(SqlValue::Uuid)
}

fn native_uuid_java_to_sql_arg(field: &FieldType, value: &SqlValue) -> Result<SqlValue> {
    match value {
        SqlValue::Uuid(_) => Ok(value.clone()),
        other => Err(OrmLiteError::unexpected_arg(field.field_name(), "uuid", other)),
    }
}

fn native_uuid_result_to_sql_arg(
    _field: &FieldType,
    results: &dyn DatabaseResults,
    column_pos: usize,
) -> Result<SqlValue> {
    results.get_uuid(column_pos).map(SqlValue::Uuid)
}

fn native_uuid_sql_arg_to_java(
    field: &FieldType,
    sql_arg: SqlValue,
    _column_pos: usize,
) -> Result<SqlValue> {
    match sql_arg {
        SqlValue::Uuid(_) => Ok(sql_arg),
        SqlValue::Text(text) => parse_uuid(field, &text).map(SqlValue::Uuid),
        other => Err(OrmLiteError::unexpected_arg(field.field_name(), "uuid", &other)),
    }
}

static UUID_NATIVE_OPS: ConverterOps = ConverterOps {
    escaped_value: true,
    appropriate_id: true,
    generate_id: Some(new_uuid),
    ..ConverterOps::base(
        SqlType::Uuid,
        native_uuid_parse_default,
        native_uuid_java_to_sql_arg,
        native_uuid_result_to_sql_arg,
        native_uuid_sql_arg_to_java,
        uuid_result_string_to_java,
    )
};

pub static UUID_NATIVE: Persister = Persister {
    name: "UUID_NATIVE",
    primitive: false,
    ops: &UUID_NATIVE_OPS,
};

fn big_integer_parse_default(field: &FieldType, default_str: &str) -> Result<SqlValue> {
    parse_str::<i128>(field, default_str, "big integer").map(|v| SqlValue::Text(v.to_string()))
}

fn big_integer_java_to_sql_arg(field: &FieldType, value: &SqlValue) -> Result<SqlValue> {
    match value {
        SqlValue::BigInteger(v) => Ok(SqlValue::Text(v.to_string())),
        other => match other.as_i64() {
            Some(v) => Ok(SqlValue::Text(v.to_string())),
            None => Err(OrmLiteError::unexpected_arg(field.field_name(), "big integer", other)),
        },
    }
}

fn big_integer_sql_arg_to_java(
    field: &FieldType,
    sql_arg: SqlValue,
    _column_pos: usize,
) -> Result<SqlValue> {
    let text = expect_text(field, &sql_arg)?;
    parse_str::<i128>(field, &text, "big integer").map(SqlValue::BigInteger)
}

fn big_integer_result_string_to_java(
    field: &FieldType,
    value: &str,
    _column_pos: usize,
) -> Result<SqlValue> {
    parse_str::<i128>(field, value, "big integer").map(SqlValue::BigInteger)
}

fn big_integer_convert_id_number(number: i64) -> SqlValue {
    SqlValue::BigInteger(i128::from(number))
}

static BIG_INTEGER_OPS: ConverterOps = ConverterOps {
    escaped_value: true,
    appropriate_id: true,
    convert_id_number: Some(big_integer_convert_id_number),
    ..ConverterOps::base(
        SqlType::String,
        big_integer_parse_default,
        big_integer_java_to_sql_arg,
        string_result_to_sql_arg,
        big_integer_sql_arg_to_java,
        big_integer_result_string_to_java,
    )
};

pub static BIG_INTEGER: Persister = Persister {
    name: "BIG_INTEGER",
    primitive: false,
    ops: &BIG_INTEGER_OPS,
};

fn parse_decimal(field: &FieldType, value: &str) -> Result<Decimal> {
    parse_str::<Decimal>(field, value, "decimal")
}

fn expect_decimal(field: &FieldType, value: &SqlValue) -> Result<Decimal> {
    match value {
        SqlValue::Decimal(d) => Ok(*d),
        other => Err(OrmLiteError::unexpected_arg(field.field_name(), "decimal", other)),
    }
}

fn big_decimal_parse_default(field: &FieldType, default_str: &str) -> Result<SqlValue> {
    parse_decimal(field, default_str).map(|d| SqlValue::Text(d.to_string()))
}

fn big_decimal_java_to_sql_arg(field: &FieldType, value: &SqlValue) -> Result<SqlValue> {
    expect_decimal(field, value).map(|d| SqlValue::Text(d.to_string()))
}

fn big_decimal_sql_arg_to_java(
    field: &FieldType,
    sql_arg: SqlValue,
    _column_pos: usize,
) -> Result<SqlValue> {
    let text = into_text(field, sql_arg)?;
    parse_decimal(field, &text).map(SqlValue::Decimal)
}

fn big_decimal_result_string_to_java(
    field: &FieldType,
    value: &str,
    _column_pos: usize,
) -> Result<SqlValue> {
    parse_decimal(field, value).map(SqlValue::Decimal)
}

static BIG_DECIMAL_OPS: ConverterOps = ConverterOps {
    escaped_value: true,
    ..ConverterOps::base(
        SqlType::String,
        big_decimal_parse_default,
        big_decimal_java_to_sql_arg,
        string_result_to_sql_arg,
        big_decimal_sql_arg_to_java,
        big_decimal_result_string_to_java,
    )
};

pub static BIG_DECIMAL: Persister = Persister {
    name: "BIG_DECIMAL",
    primitive: false,
    ops: &BIG_DECIMAL_OPS,
};

fn numeric_parse_default(field: &FieldType, default_str: &str) -> Result<SqlValue> {
    parse_decimal(field, default_str).map(SqlValue::Decimal)
}

fn numeric_java_to_sql_arg(field: &FieldType, value: &SqlValue) -> Result<SqlValue> {
    expect_decimal(field, value).map(SqlValue::Decimal)
}

fn numeric_result_to_sql_arg(
    _field: &FieldType,
    results: &dyn DatabaseResults,
    column_pos: usize,
) -> Result<SqlValue> {
    results.get_big_decimal(column_pos).map(SqlValue::Decimal)
}

fn numeric_sql_arg_to_java(field: &FieldType, sql_arg: SqlValue, _column_pos: usize) -> Result<SqlValue> {
    expect_decimal(field, &sql_arg).map(SqlValue::Decimal)
}

static BIG_DECIMAL_NUMERIC_OPS: ConverterOps = ConverterOps::base(
    SqlType::BigDecimal,
    numeric_parse_default,
    numeric_java_to_sql_arg,
    numeric_result_to_sql_arg,
    numeric_sql_arg_to_java,
    big_decimal_result_string_to_java,
);

pub static BIG_DECIMAL_NUMERIC: Persister = Persister {
    name: "BIG_DECIMAL_NUMERIC",
    primitive: false,
    ops: &BIG_DECIMAL_NUMERIC_OPS,
};
