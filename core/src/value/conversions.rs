//! From implementations for SqlValue

use super::{EnumConstant, SqlValue};
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use uuid::Uuid;

/// Implements `From<$ty>` and `From<&$ty>` for copyable scalar types
macro_rules! impl_from_scalar_for_sql_value {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for SqlValue {
                #[inline]
                fn from(value: $ty) -> Self {
                    SqlValue::$variant(value)
                }
            }

            impl From<&$ty> for SqlValue {
                #[inline]
                fn from(value: &$ty) -> Self {
                    SqlValue::$variant(*value)
                }
            }
        )*
    };
}

impl_from_scalar_for_sql_value!(
    bool => Bool,
    char => Char,
    i8 => Byte,
    i16 => Short,
    i32 => Int,
    i64 => Long,
    f32 => Float,
    f64 => Double,
    i128 => BigInteger,
    Decimal => Decimal,
    Uuid => Uuid,
    NaiveDateTime => Timestamp,
);

// --- String Types ---

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Text(value.to_owned())
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        SqlValue::Text(value)
    }
}

impl From<&String> for SqlValue {
    fn from(value: &String) -> Self {
        SqlValue::Text(value.clone())
    }
}

// --- Binary Types ---

impl From<Vec<u8>> for SqlValue {
    fn from(value: Vec<u8>) -> Self {
        SqlValue::Bytes(value)
    }
}

impl From<&[u8]> for SqlValue {
    fn from(value: &[u8]) -> Self {
        SqlValue::Bytes(value.to_vec())
    }
}

// --- Structured Types ---

impl From<serde_json::Value> for SqlValue {
    fn from(value: serde_json::Value) -> Self {
        SqlValue::Json(value)
    }
}

impl From<EnumConstant> for SqlValue {
    fn from(value: EnumConstant) -> Self {
        SqlValue::Enum(value)
    }
}

impl<T> From<Option<T>> for SqlValue
where
    T: Into<SqlValue>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => SqlValue::Null,
        }
    }
}
