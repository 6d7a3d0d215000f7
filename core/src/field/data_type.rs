//! Data type tag table
//!
//! Maps each native-type tag to its converter record. `Unknown` is the explicit
//! "no persister" entry.

use super::converter::Persister;
use super::persisters::{boolean, date, enums, misc, number, text};

/// Native-type tag selecting a field's converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DataType {
    String,
    LongString,
    StringBytes,
    Boolean,
    BooleanObj,
    BooleanChar,
    BooleanInteger,
    Date,
    DateLong,
    DateInteger,
    DateString,
    Char,
    CharObj,
    Byte,
    ByteObj,
    ByteArray,
    Short,
    ShortObj,
    Integer,
    IntegerObj,
    Long,
    LongObj,
    Float,
    FloatObj,
    Double,
    DoubleObj,
    Serializable,
    EnumString,
    EnumInteger,
    Uuid,
    UuidNative,
    BigInteger,
    BigDecimal,
    BigDecimalNumeric,
    #[default]
    Unknown,
}

impl DataType {
    pub const ALL: [DataType; 35] = [
        DataType::String,
        DataType::LongString,
        DataType::StringBytes,
        DataType::Boolean,
        DataType::BooleanObj,
        DataType::BooleanChar,
        DataType::BooleanInteger,
        DataType::Date,
        DataType::DateLong,
        DataType::DateInteger,
        DataType::DateString,
        DataType::Char,
        DataType::CharObj,
        DataType::Byte,
        DataType::ByteObj,
        DataType::ByteArray,
        DataType::Short,
        DataType::ShortObj,
        DataType::Integer,
        DataType::IntegerObj,
        DataType::Long,
        DataType::LongObj,
        DataType::Float,
        DataType::FloatObj,
        DataType::Double,
        DataType::DoubleObj,
        DataType::Serializable,
        DataType::EnumString,
        DataType::EnumInteger,
        DataType::Uuid,
        DataType::UuidNative,
        DataType::BigInteger,
        DataType::BigDecimal,
        DataType::BigDecimalNumeric,
        DataType::Unknown,
    ];

    /// The converter record for this tag, `None` for [`DataType::Unknown`].
    pub fn persister(self) -> Option<&'static Persister> {
        Some(match self {
            DataType::String => &text::STRING,
            DataType::LongString => &text::LONG_STRING,
            DataType::StringBytes => &text::STRING_BYTES,
            DataType::Boolean => &boolean::BOOLEAN,
            DataType::BooleanObj => &boolean::BOOLEAN_OBJ,
            DataType::BooleanChar => &boolean::BOOLEAN_CHAR,
            DataType::BooleanInteger => &boolean::BOOLEAN_INTEGER,
            DataType::Date => &date::DATE,
            DataType::DateLong => &date::DATE_LONG,
            DataType::DateInteger => &date::DATE_INTEGER,
            DataType::DateString => &date::DATE_STRING,
            DataType::Char => &text::CHAR,
            DataType::CharObj => &text::CHAR_OBJ,
            DataType::Byte => &number::BYTE,
            DataType::ByteObj => &number::BYTE_OBJ,
            DataType::ByteArray => &text::BYTE_ARRAY,
            DataType::Short => &number::SHORT,
            DataType::ShortObj => &number::SHORT_OBJ,
            DataType::Integer => &number::INTEGER,
            DataType::IntegerObj => &number::INTEGER_OBJ,
            DataType::Long => &number::LONG,
            DataType::LongObj => &number::LONG_OBJ,
            DataType::Float => &number::FLOAT,
            DataType::FloatObj => &number::FLOAT_OBJ,
            DataType::Double => &number::DOUBLE,
            DataType::DoubleObj => &number::DOUBLE_OBJ,
            DataType::Serializable => &misc::SERIALIZABLE,
            DataType::EnumString => &enums::ENUM_STRING,
            DataType::EnumInteger => &enums::ENUM_INTEGER,
            DataType::Uuid => &misc::UUID,
            DataType::UuidNative => &misc::UUID_NATIVE,
            DataType::BigInteger => &misc::BIG_INTEGER,
            DataType::BigDecimal => &misc::BIG_DECIMAL,
            DataType::BigDecimalNumeric => &misc::BIG_DECIMAL_NUMERIC,
            DataType::Unknown => return None,
        })
    }

    /// Upper snake case name, as used in configuration files.
    pub const fn as_str(self) -> &'static str {
        match self {
            DataType::String => "STRING",
            DataType::LongString => "LONG_STRING",
            DataType::StringBytes => "STRING_BYTES",
            DataType::Boolean => "BOOLEAN",
            DataType::BooleanObj => "BOOLEAN_OBJ",
            DataType::BooleanChar => "BOOLEAN_CHAR",
            DataType::BooleanInteger => "BOOLEAN_INTEGER",
            DataType::Date => "DATE",
            DataType::DateLong => "DATE_LONG",
            DataType::DateInteger => "DATE_INTEGER",
            DataType::DateString => "DATE_STRING",
            DataType::Char => "CHAR",
            DataType::CharObj => "CHAR_OBJ",
            DataType::Byte => "BYTE",
            DataType::ByteObj => "BYTE_OBJ",
            DataType::ByteArray => "BYTE_ARRAY",
            DataType::Short => "SHORT",
            DataType::ShortObj => "SHORT_OBJ",
            DataType::Integer => "INTEGER",
            DataType::IntegerObj => "INTEGER_OBJ",
            DataType::Long => "LONG",
            DataType::LongObj => "LONG_OBJ",
            DataType::Float => "FLOAT",
            DataType::FloatObj => "FLOAT_OBJ",
            DataType::Double => "DOUBLE",
            DataType::DoubleObj => "DOUBLE_OBJ",
            DataType::Serializable => "SERIALIZABLE",
            DataType::EnumString => "ENUM_STRING",
            DataType::EnumInteger => "ENUM_INTEGER",
            DataType::Uuid => "UUID",
            DataType::UuidNative => "UUID_NATIVE",
            DataType::BigInteger => "BIG_INTEGER",
            DataType::BigDecimal => "BIG_DECIMAL",
            DataType::BigDecimalNumeric => "BIG_DECIMAL_NUMERIC",
            DataType::Unknown => "UNKNOWN",
        }
    }

    /// Whether fields of this type need a list of enum constants.
    pub const fn is_enum(self) -> bool {
        matches!(self, DataType::EnumString | DataType::EnumInteger)
    }
}

impl core::fmt::Display for DataType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for DataType {
    type Err = crate::error::OrmLiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DataType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| crate::error::OrmLiteError::Config(format!("unknown data type '{s}'")))
    }
}

impl<'de> serde::Deserialize<'de> for DataType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
