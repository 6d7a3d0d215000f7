//! Enum converters storing either the constant name or its ordinal.

use super::{into_text, parse_str};
use crate::error::{OrmLiteError, Result};
use crate::field::FieldType;
use crate::field::converter::{ConfigObject, ConverterOps, EnumLookup, Persister};
use crate::results::DatabaseResults;
use crate::value::{EnumConstant, SqlValue};
use ormlite_types::SqlType;

fn make_lookup(field: &FieldType) -> Result<ConfigObject> {
    let constants = field.enum_constants();
    if constants.is_empty() {
        return Err(OrmLiteError::Config(format!(
            "field '{}': enum type declares no constants",
            field.field_name()
        )));
    }
    let lookup = EnumLookup::new(constants.iter().map(String::as_str));
    if lookup.len() != constants.len() {
        return Err(OrmLiteError::Config(format!(
            "field '{}': enum constants must be unique",
            field.field_name()
        )));
    }
    if let Some(unknown) = field.unknown_enum_name()
        && lookup.by_name(unknown).is_none()
    {
        return Err(OrmLiteError::Config(format!(
            "field '{}': unknown-enum fallback '{unknown}' is not a constant",
            field.field_name()
        )));
    }
    Ok(ConfigObject::EnumLookup(lookup))
}

fn lookup(field: &FieldType) -> Result<&EnumLookup> {
    match field.config() {
        Some(ConfigObject::EnumLookup(lookup)) => Ok(lookup),
        _ => Err(OrmLiteError::Statement(format!(
            "field '{}' has no enum constants",
            field.field_name()
        ))),
    }
}

/// Resolves a stored value, falling back to the field's unknown-enum constant.
fn resolve<'a>(
    field: &'a FieldType,
    found: Option<&'a EnumConstant>,
    stored: &dyn core::fmt::Display,
) -> Result<SqlValue> {
    let fallback = || {
        field
            .unknown_enum_name()
            .and_then(|name| lookup(field).ok()?.by_name(name))
    };
    found
        .or_else(fallback)
        .map(|c| SqlValue::Enum(c.clone()))
        .ok_or_else(|| {
            OrmLiteError::Conversion(format!(
                "field '{}': '{stored}' is not a known enum value",
                field.field_name()
            ))
        })
}

fn expect_enum<'a>(field: &FieldType, value: &'a SqlValue) -> Result<&'a EnumConstant> {
    match value {
        SqlValue::Enum(c) => Ok(c),
        other => Err(OrmLiteError::unexpected_arg(field.field_name(), "enum", other)),
    }
}

fn string_parse_default(field: &FieldType, default_str: &str) -> Result<SqlValue> {
    match lookup(field)?.by_name(default_str) {
        Some(c) => Ok(SqlValue::Text(c.name.clone())),
        None => Err(OrmLiteError::parse(field.field_name(), default_str, "enum name")),
    }
}

fn string_java_to_sql_arg(field: &FieldType, value: &SqlValue) -> Result<SqlValue> {
    expect_enum(field, value).map(|c| SqlValue::Text(c.name.clone()))
}

fn string_result_to_sql_arg(
    _field: &FieldType,
    results: &dyn DatabaseResults,
    column_pos: usize,
) -> Result<SqlValue> {
    results.get_string(column_pos).map(SqlValue::Text)
}

fn string_sql_arg_to_java(field: &FieldType, sql_arg: SqlValue, _column_pos: usize) -> Result<SqlValue> {
    let name = into_text(field, sql_arg)?;
    resolve(field, lookup(field)?.by_name(&name), &name)
}

fn string_result_string_to_java(field: &FieldType, value: &str, _column_pos: usize) -> Result<SqlValue> {
    resolve(field, lookup(field)?.by_name(value), &value)
}

static ENUM_STRING_OPS: ConverterOps = ConverterOps {
    escaped_value: true,
    make_config_object: Some(make_lookup),
    ..ConverterOps::base(
        SqlType::String,
        string_parse_default,
        string_java_to_sql_arg,
        string_result_to_sql_arg,
        string_sql_arg_to_java,
        string_result_string_to_java,
    )
};

pub static ENUM_STRING: Persister = Persister {
    name: "ENUM_STRING",
    primitive: false,
    ops: &ENUM_STRING_OPS,
};

fn integer_parse_default(field: &FieldType, default_str: &str) -> Result<SqlValue> {
    let ordinal = parse_str::<i32>(field, default_str, "enum ordinal")?;
    match lookup(field)?.by_ordinal(ordinal) {
        Some(c) => Ok(SqlValue::Int(c.ordinal)),
        None => Err(OrmLiteError::parse(field.field_name(), default_str, "enum ordinal")),
    }
}

fn integer_java_to_sql_arg(field: &FieldType, value: &SqlValue) -> Result<SqlValue> {
    expect_enum(field, value).map(|c| SqlValue::Int(c.ordinal))
}

fn integer_result_to_sql_arg(
    _field: &FieldType,
    results: &dyn DatabaseResults,
    column_pos: usize,
) -> Result<SqlValue> {
    results.get_int(column_pos).map(SqlValue::Int)
}

fn integer_sql_arg_to_java(field: &FieldType, sql_arg: SqlValue, _column_pos: usize) -> Result<SqlValue> {
    let ordinal = sql_arg
        .as_i64()
        .and_then(|v| i32::try_from(v).ok())
        .ok_or_else(|| OrmLiteError::unexpected_arg(field.field_name(), "integer", &sql_arg))?;
    resolve(field, lookup(field)?.by_ordinal(ordinal), &ordinal)
}

fn integer_result_string_to_java(
    field: &FieldType,
    value: &str,
    _column_pos: usize,
) -> Result<SqlValue> {
    let ordinal = parse_str::<i32>(field, value, "enum ordinal")?;
    resolve(field, lookup(field)?.by_ordinal(ordinal), &ordinal)
}

static ENUM_INTEGER_OPS: ConverterOps = ConverterOps {
    make_config_object: Some(make_lookup),
    ..ConverterOps::base(
        SqlType::Integer,
        integer_parse_default,
        integer_java_to_sql_arg,
        integer_result_to_sql_arg,
        integer_sql_arg_to_java,
        integer_result_string_to_java,
    )
};

pub static ENUM_INTEGER: Persister = Persister {
    name: "ENUM_INTEGER",
    primitive: false,
    ops: &ENUM_INTEGER_OPS,
};
