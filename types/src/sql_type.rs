//! Canonical SQL type tags
//!
//! These tags are independent of any dialect or native type. Converters declare
//! one as their wire representation and the connection layer uses it to decide
//! how to bind or read a column.

/// Canonical SQL type of a column's wire representation.
///
/// # Examples
///
/// ```
/// use ormlite_types::SqlType;
///
/// assert_eq!(SqlType::ByteArray.as_str(), "BYTE_ARRAY");
/// assert_eq!("long_string".parse::<SqlType>(), Ok(SqlType::LongString));
/// ```
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum SqlType {
    String,
    LongString,
    Date,
    Boolean,
    Char,
    Byte,
    ByteArray,
    Short,
    Integer,
    Long,
    Float,
    Double,
    Serializable,
    Blob,
    BigDecimal,
    Uuid,
    Other,
    #[default]
    Unknown,
}

impl SqlType {
    /// All tags, in declaration order.
    pub const ALL: [SqlType; 18] = [
        SqlType::String,
        SqlType::LongString,
        SqlType::Date,
        SqlType::Boolean,
        SqlType::Char,
        SqlType::Byte,
        SqlType::ByteArray,
        SqlType::Short,
        SqlType::Integer,
        SqlType::Long,
        SqlType::Float,
        SqlType::Double,
        SqlType::Serializable,
        SqlType::Blob,
        SqlType::BigDecimal,
        SqlType::Uuid,
        SqlType::Other,
        SqlType::Unknown,
    ];

    /// Upper snake case name of the tag.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::String => "STRING",
            Self::LongString => "LONG_STRING",
            Self::Date => "DATE",
            Self::Boolean => "BOOLEAN",
            Self::Char => "CHAR",
            Self::Byte => "BYTE",
            Self::ByteArray => "BYTE_ARRAY",
            Self::Short => "SHORT",
            Self::Integer => "INTEGER",
            Self::Long => "LONG",
            Self::Float => "FLOAT",
            Self::Double => "DOUBLE",
            Self::Serializable => "SERIALIZABLE",
            Self::Blob => "BLOB",
            Self::BigDecimal => "BIG_DECIMAL",
            Self::Uuid => "UUID",
            Self::Other => "OTHER",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Whether values of this type are binary payloads.
    #[must_use]
    pub const fn is_binary(&self) -> bool {
        matches!(self, Self::ByteArray | Self::Serializable | Self::Blob)
    }

    /// Whether values of this type are integral numbers.
    #[must_use]
    pub const fn is_integral(&self) -> bool {
        matches!(self, Self::Byte | Self::Short | Self::Integer | Self::Long)
    }
}

impl core::fmt::Display for SqlType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for SqlType {
    type Err = SqlTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SqlType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or(SqlTypeParseError)
    }
}

/// Error returned when parsing an unknown SQL type name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SqlTypeParseError;

impl core::fmt::Display for SqlTypeParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("unknown sql type")
    }
}

impl std::error::Error for SqlTypeParseError {}
