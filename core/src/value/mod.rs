//! Dynamic value type shared by native values and bind arguments
//!
//! Converters are selected at runtime from a tag table, so both sides of every
//! conversion travel as a [`SqlValue`]. Which variants a converter accepts or
//! produces is part of that converter's contract.

mod conversions;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use uuid::Uuid;

/// Native enum constant: the variant name plus its declaration ordinal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EnumConstant {
    pub name: String,
    pub ordinal: i32,
}

impl EnumConstant {
    pub fn new(name: impl Into<String>, ordinal: i32) -> Self {
        Self {
            name: name.into(),
            ordinal,
        }
    }
}

/// A native value or a bind argument.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SqlValue {
    #[default]
    Null,
    Bool(bool),
    Char(char),
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Text(String),
    Bytes(Vec<u8>),
    BigInteger(i128),
    Decimal(Decimal),
    Uuid(Uuid),
    Timestamp(NaiveDateTime),
    Json(serde_json::Value),
    Enum(EnumConstant),
}

impl SqlValue {
    /// Returns true if this value is NULL.
    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, SqlValue::Null)
    }

    /// Short name of the variant, used in error messages.
    pub const fn kind(&self) -> &'static str {
        match self {
            SqlValue::Null => "null",
            SqlValue::Bool(_) => "bool",
            SqlValue::Char(_) => "char",
            SqlValue::Byte(_) => "byte",
            SqlValue::Short(_) => "short",
            SqlValue::Int(_) => "int",
            SqlValue::Long(_) => "long",
            SqlValue::Float(_) => "float",
            SqlValue::Double(_) => "double",
            SqlValue::Text(_) => "text",
            SqlValue::Bytes(_) => "bytes",
            SqlValue::BigInteger(_) => "big integer",
            SqlValue::Decimal(_) => "decimal",
            SqlValue::Uuid(_) => "uuid",
            SqlValue::Timestamp(_) => "timestamp",
            SqlValue::Json(_) => "json",
            SqlValue::Enum(_) => "enum",
        }
    }

    /// Widens any integral variant to `i64`.
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            SqlValue::Byte(v) => Some(*v as i64),
            SqlValue::Short(v) => Some(*v as i64),
            SqlValue::Int(v) => Some(*v as i64),
            SqlValue::Long(v) => Some(*v),
            _ => None,
        }
    }

    /// Widens any floating or integral variant to `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            SqlValue::Float(v) => Some(*v as f64),
            SqlValue::Double(v) => Some(*v),
            other => other.as_i64().map(|v| v as f64),
        }
    }

    /// Returns the text if this is `Text`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            SqlValue::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }

    /// Returns the bytes if this is `Bytes`.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            SqlValue::Bytes(value) => Some(value.as_slice()),
            _ => None,
        }
    }

    /// Renders the value as an SQL literal. Text-like values are quoted with
    /// single quotes (doubling embedded quotes) when `escaped` is set.
    pub fn write_literal(&self, buf: &mut String, escaped: bool) {
        use core::fmt::Write;

        let text = match self {
            SqlValue::Null => {
                buf.push_str("NULL");
                return;
            }
            SqlValue::Bytes(bytes) => {
                buf.push_str("X'");
                for b in bytes {
                    let _ = write!(buf, "{b:02X}");
                }
                buf.push('\'');
                return;
            }
            other => other.to_string(),
        };
        if escaped {
            buf.push('\'');
            buf.push_str(&text.replace('\'', "''"));
            buf.push('\'');
        } else {
            buf.push_str(&text);
        }
    }
}

impl core::fmt::Display for SqlValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SqlValue::Null => Ok(()),
            SqlValue::Bool(v) => write!(f, "{v}"),
            SqlValue::Char(v) => write!(f, "{v}"),
            SqlValue::Byte(v) => write!(f, "{v}"),
            SqlValue::Short(v) => write!(f, "{v}"),
            SqlValue::Int(v) => write!(f, "{v}"),
            SqlValue::Long(v) => write!(f, "{v}"),
            SqlValue::Float(v) => write!(f, "{v}"),
            SqlValue::Double(v) => write!(f, "{v}"),
            SqlValue::Text(v) => f.write_str(v),
            SqlValue::Bytes(v) => f.write_str(&String::from_utf8_lossy(v)),
            SqlValue::BigInteger(v) => write!(f, "{v}"),
            SqlValue::Decimal(v) => write!(f, "{v}"),
            SqlValue::Uuid(v) => write!(f, "{v}"),
            SqlValue::Timestamp(v) => write!(f, "{}", v.format("%Y-%m-%d %H:%M:%S%.f")),
            SqlValue::Json(v) => write!(f, "{v}"),
            SqlValue::Enum(v) => f.write_str(&v.name),
        }
    }
}
