//! Date converters
//!
//! The native value is always `SqlValue::Timestamp`. The four types differ in
//! wire shape: a timestamp, epoch milliseconds, epoch seconds, or text in the
//! field's chrono format. Epoch conversions are UTC.

use super::{into_text, parse_str};
use crate::error::{OrmLiteError, Result};
use crate::field::FieldType;
use crate::field::converter::{ConfigObject, ConverterOps, Persister};
use crate::results::DatabaseResults;
use crate::value::SqlValue;
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use core::fmt::Write;
use ormlite_types::SqlType;

/// chrono format used for date defaults and textual dates when the field
/// declares none.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

fn date_format(field: &FieldType) -> &str {
    match field.config() {
        Some(ConfigObject::DateFormat(format)) => format.as_str(),
        _ => DEFAULT_DATE_FORMAT,
    }
}

fn make_date_format(field: &FieldType) -> Result<ConfigObject> {
    let format = field.format().unwrap_or(DEFAULT_DATE_FORMAT);
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(OrmLiteError::Config(format!(
            "field '{}': invalid date format '{format}'",
            field.field_name()
        )));
    }
    Ok(ConfigObject::DateFormat(format.to_owned()))
}

/// Parses a date-time, accepting date-only formats as midnight.
fn parse_timestamp(field: &FieldType, value: &str, format: &str) -> Result<NaiveDateTime> {
    let trimmed = value.trim();
    if let Ok(timestamp) = NaiveDateTime::parse_from_str(trimmed, format) {
        return Ok(timestamp);
    }
    NaiveDate::parse_from_str(trimmed, format)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| OrmLiteError::parse(field.field_name(), value, &format!("date '{format}'")))
}

fn format_timestamp(field: &FieldType, timestamp: &NaiveDateTime, format: &str) -> Result<String> {
    let mut out = String::new();
    write!(out, "{}", timestamp.format(format)).map_err(|_| {
        OrmLiteError::Conversion(format!(
            "field '{}': cannot format date with '{format}'",
            field.field_name()
        ))
    })?;
    Ok(out)
}

fn expect_timestamp(field: &FieldType, value: &SqlValue) -> Result<NaiveDateTime> {
    match value {
        SqlValue::Timestamp(t) => Ok(*t),
        other => Err(OrmLiteError::unexpected_arg(field.field_name(), "timestamp", other)),
    }
}

fn now(_current: &SqlValue) -> SqlValue {
    SqlValue::Timestamp(Utc::now().naive_utc())
}

fn date_parse_default(field: &FieldType, default_str: &str) -> Result<SqlValue> {
    parse_timestamp(field, default_str, date_format(field)).map(SqlValue::Timestamp)
}

fn date_java_to_sql_arg(field: &FieldType, value: &SqlValue) -> Result<SqlValue> {
    expect_timestamp(field, value).map(SqlValue::Timestamp)
}

fn date_result_to_sql_arg(
    _field: &FieldType,
    results: &dyn DatabaseResults,
    column_pos: usize,
) -> Result<SqlValue> {
    results.get_timestamp(column_pos).map(SqlValue::Timestamp)
}

fn date_sql_arg_to_java(field: &FieldType, sql_arg: SqlValue, _column_pos: usize) -> Result<SqlValue> {
    expect_timestamp(field, &sql_arg).map(SqlValue::Timestamp)
}

fn date_result_string_to_java(field: &FieldType, value: &str, _column_pos: usize) -> Result<SqlValue> {
    parse_timestamp(field, value, date_format(field)).map(SqlValue::Timestamp)
}

static DATE_OPS: ConverterOps = ConverterOps {
    escaped_value: true,
    valid_for_version: true,
    make_config_object: Some(make_date_format),
    move_to_next_value: Some(now),
    ..ConverterOps::base(
        SqlType::Date,
        date_parse_default,
        date_java_to_sql_arg,
        date_result_to_sql_arg,
        date_sql_arg_to_java,
        date_result_string_to_java,
    )
};

pub static DATE: Persister = Persister {
    name: "DATE",
    primitive: false,
    ops: &DATE_OPS,
};

fn from_millis(field: &FieldType, millis: i64) -> Result<SqlValue> {
    DateTime::from_timestamp_millis(millis)
        .map(|t| SqlValue::Timestamp(t.naive_utc()))
        .ok_or_else(|| {
            OrmLiteError::Conversion(format!(
                "field '{}': {millis} ms is outside the supported date range",
                field.field_name()
            ))
        })
}

fn long_parse_default(field: &FieldType, default_str: &str) -> Result<SqlValue> {
    parse_str::<i64>(field, default_str, "epoch milliseconds").map(SqlValue::Long)
}

fn long_java_to_sql_arg(field: &FieldType, value: &SqlValue) -> Result<SqlValue> {
    expect_timestamp(field, value).map(|t| SqlValue::Long(t.and_utc().timestamp_millis()))
}

fn long_result_to_sql_arg(
    _field: &FieldType,
    results: &dyn DatabaseResults,
    column_pos: usize,
) -> Result<SqlValue> {
    results.get_long(column_pos).map(SqlValue::Long)
}

fn long_sql_arg_to_java(field: &FieldType, sql_arg: SqlValue, _column_pos: usize) -> Result<SqlValue> {
    match sql_arg.as_i64() {
        Some(millis) => from_millis(field, millis),
        None => Err(OrmLiteError::unexpected_arg(field.field_name(), "long", &sql_arg)),
    }
}

fn long_result_string_to_java(field: &FieldType, value: &str, _column_pos: usize) -> Result<SqlValue> {
    let millis = parse_str::<i64>(field, value, "epoch milliseconds")?;
    from_millis(field, millis)
}

static DATE_LONG_OPS: ConverterOps = ConverterOps {
    valid_for_version: true,
    move_to_next_value: Some(now),
    ..ConverterOps::base(
        SqlType::Long,
        long_parse_default,
        long_java_to_sql_arg,
        long_result_to_sql_arg,
        long_sql_arg_to_java,
        long_result_string_to_java,
    )
};

pub static DATE_LONG: Persister = Persister {
    name: "DATE_LONG",
    primitive: false,
    ops: &DATE_LONG_OPS,
};

fn from_seconds(field: &FieldType, seconds: i64) -> Result<SqlValue> {
    DateTime::from_timestamp(seconds, 0)
        .map(|t| SqlValue::Timestamp(t.naive_utc()))
        .ok_or_else(|| {
            OrmLiteError::Conversion(format!(
                "field '{}': {seconds} s is outside the supported date range",
                field.field_name()
            ))
        })
}

fn int_parse_default(field: &FieldType, default_str: &str) -> Result<SqlValue> {
    parse_str::<i32>(field, default_str, "epoch seconds").map(SqlValue::Int)
}

fn int_java_to_sql_arg(field: &FieldType, value: &SqlValue) -> Result<SqlValue> {
    let seconds = expect_timestamp(field, value)?.and_utc().timestamp();
    i32::try_from(seconds).map(SqlValue::Int).map_err(|_| {
        OrmLiteError::Conversion(format!(
            "field '{}': {seconds} s does not fit an integer column",
            field.field_name()
        ))
    })
}

fn int_result_to_sql_arg(
    _field: &FieldType,
    results: &dyn DatabaseResults,
    column_pos: usize,
) -> Result<SqlValue> {
    results.get_int(column_pos).map(SqlValue::Int)
}

fn int_sql_arg_to_java(field: &FieldType, sql_arg: SqlValue, _column_pos: usize) -> Result<SqlValue> {
    match sql_arg.as_i64() {
        Some(seconds) => from_seconds(field, seconds),
        None => Err(OrmLiteError::unexpected_arg(field.field_name(), "integer", &sql_arg)),
    }
}

fn int_result_string_to_java(field: &FieldType, value: &str, _column_pos: usize) -> Result<SqlValue> {
    let seconds = parse_str::<i32>(field, value, "epoch seconds")?;
    from_seconds(field, i64::from(seconds))
}

static DATE_INTEGER_OPS: ConverterOps = ConverterOps {
    valid_for_version: true,
    move_to_next_value: Some(now),
    ..ConverterOps::base(
        SqlType::Integer,
        int_parse_default,
        int_java_to_sql_arg,
        int_result_to_sql_arg,
        int_sql_arg_to_java,
        int_result_string_to_java,
    )
};

pub static DATE_INTEGER: Persister = Persister {
    name: "DATE_INTEGER",
    primitive: false,
    ops: &DATE_INTEGER_OPS,
};

fn string_parse_default(field: &FieldType, default_str: &str) -> Result<SqlValue> {
    let format = date_format(field);
    let timestamp = parse_timestamp(field, default_str, format)?;
    format_timestamp(field, &timestamp, format).map(SqlValue::Text)
}

fn string_java_to_sql_arg(field: &FieldType, value: &SqlValue) -> Result<SqlValue> {
    let timestamp = expect_timestamp(field, value)?;
    format_timestamp(field, &timestamp, date_format(field)).map(SqlValue::Text)
}

fn string_result_to_sql_arg(
    _field: &FieldType,
    results: &dyn DatabaseResults,
    column_pos: usize,
) -> Result<SqlValue> {
    results.get_string(column_pos).map(SqlValue::Text)
}

fn string_sql_arg_to_java(field: &FieldType, sql_arg: SqlValue, _column_pos: usize) -> Result<SqlValue> {
    let text = into_text(field, sql_arg)?;
    parse_timestamp(field, &text, date_format(field)).map(SqlValue::Timestamp)
}

static DATE_STRING_OPS: ConverterOps = ConverterOps {
    escaped_value: true,
    make_config_object: Some(make_date_format),
    ..ConverterOps::base(
        SqlType::String,
        string_parse_default,
        string_java_to_sql_arg,
        string_result_to_sql_arg,
        string_sql_arg_to_java,
        date_result_string_to_java,
    )
};

pub static DATE_STRING: Persister = Persister {
    name: "DATE_STRING",
    primitive: false,
    ops: &DATE_STRING_OPS,
};
