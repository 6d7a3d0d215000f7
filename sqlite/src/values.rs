//! SqlValue to and from rusqlite values
//!
//! SQLite stores five shapes: NULL, INTEGER, REAL, TEXT and BLOB. Wider wire
//! values are folded into them when bound; reads come back in the stored shape
//! and [`BufferedResults`](ormlite_core::BufferedResults) coerces on access.

use ormlite_core::SqlValue;
use ormlite_core::error::{OrmLiteError, Result};
use rusqlite::types::{ToSqlOutput, Value, ValueRef};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// Borrowed bind argument.
#[derive(Debug, Clone, Copy)]
pub struct Bind<'a>(pub &'a SqlValue);

impl rusqlite::ToSql for Bind<'_> {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        let output = match self.0 {
            SqlValue::Null => ToSqlOutput::Owned(Value::Null),
            SqlValue::Bool(b) => ToSqlOutput::Owned(Value::Integer(i64::from(*b))),
            SqlValue::Byte(v) => ToSqlOutput::Owned(Value::Integer(i64::from(*v))),
            SqlValue::Short(v) => ToSqlOutput::Owned(Value::Integer(i64::from(*v))),
            SqlValue::Int(v) => ToSqlOutput::Owned(Value::Integer(i64::from(*v))),
            SqlValue::Long(v) => ToSqlOutput::Owned(Value::Integer(*v)),
            SqlValue::Float(v) => ToSqlOutput::Owned(Value::Real(f64::from(*v))),
            SqlValue::Double(v) => ToSqlOutput::Owned(Value::Real(*v)),
            SqlValue::Text(s) => ToSqlOutput::Borrowed(ValueRef::Text(s.as_bytes())),
            SqlValue::Bytes(b) => ToSqlOutput::Borrowed(ValueRef::Blob(b.as_slice())),
            SqlValue::Enum(e) => ToSqlOutput::Borrowed(ValueRef::Text(e.name.as_bytes())),
            SqlValue::Char(c) => ToSqlOutput::Owned(Value::Text(c.to_string())),
            SqlValue::BigInteger(v) => ToSqlOutput::Owned(Value::Text(v.to_string())),
            SqlValue::Decimal(v) => ToSqlOutput::Owned(Value::Text(v.to_string())),
            SqlValue::Uuid(v) => ToSqlOutput::Owned(Value::Text(v.hyphenated().to_string())),
            SqlValue::Timestamp(v) => {
                ToSqlOutput::Owned(Value::Text(v.format(TIMESTAMP_FORMAT).to_string()))
            }
            SqlValue::Json(v) => ToSqlOutput::Owned(Value::Text(v.to_string())),
        };
        Ok(output)
    }
}

/// Reads a column in its stored shape. TEXT that is not valid UTF-8 is a
/// conversion error.
pub fn from_value_ref(value: ValueRef<'_>) -> Result<SqlValue> {
    Ok(match value {
        ValueRef::Null => SqlValue::Null,
        ValueRef::Integer(i) => SqlValue::Long(i),
        ValueRef::Real(r) => SqlValue::Double(r),
        ValueRef::Text(items) => {
            let text = std::str::from_utf8(items).map_err(|e| {
                OrmLiteError::Conversion(format!("TEXT column is not valid UTF-8: {e}"))
            })?;
            SqlValue::Text(text.to_owned())
        }
        ValueRef::Blob(items) => SqlValue::Bytes(items.to_vec()),
    })
}
