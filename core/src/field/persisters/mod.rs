//! Concrete converter records, grouped by native type family.

pub mod boolean;
pub mod date;
pub mod enums;
pub mod misc;
pub mod number;
pub mod text;

use crate::error::{OrmLiteError, Result};
use crate::field::FieldType;
use crate::value::SqlValue;
use core::str::FromStr;

/// Parses `value` with the type's standard grammar, surfacing a format error
/// that names the field.
pub(crate) fn parse_str<T: FromStr>(field: &FieldType, value: &str, expected: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| OrmLiteError::parse(field.field_name(), value, expected))
}

pub(crate) fn expect_text(field: &FieldType, value: &SqlValue) -> Result<String> {
    match value {
        SqlValue::Text(s) => Ok(s.clone()),
        other => Err(OrmLiteError::unexpected_arg(field.field_name(), "text", other)),
    }
}

pub(crate) fn into_text(field: &FieldType, value: SqlValue) -> Result<String> {
    match value {
        SqlValue::Text(s) => Ok(s),
        other => Err(OrmLiteError::unexpected_arg(field.field_name(), "text", &other)),
    }
}

pub(crate) fn expect_bool(field: &FieldType, value: &SqlValue) -> Result<bool> {
    match value {
        SqlValue::Bool(b) => Ok(*b),
        other => Err(OrmLiteError::unexpected_arg(field.field_name(), "bool", other)),
    }
}

/// Strict boolean grammar: `true` or `false`, ASCII case-insensitive.
pub(crate) fn parse_bool(field: &FieldType, value: &str) -> Result<bool> {
    let trimmed = value.trim();
    if trimmed.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if trimmed.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(OrmLiteError::parse(field.field_name(), value, "boolean"))
    }
}

/// Exactly one character.
pub(crate) fn single_char(field: &FieldType, value: &str) -> Result<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(OrmLiteError::Parse(format!(
            "field '{}': '{value}' must be exactly one character",
            field.field_name()
        ))),
    }
}
