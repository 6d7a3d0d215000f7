//! Bind arguments collected while rendering a statement.

use crate::error::{OrmLiteError, Result};
use crate::field::FieldType;
use crate::value::SqlValue;
use ormlite_types::SqlType;

/// One bind argument, in wire form.
///
/// Arguments tied to a field convert native values with the field's
/// converter. Raw arguments carry a wire value as given. Either may be a
/// placeholder whose value is supplied after the statement is prepared.
#[derive(Debug, Clone)]
pub struct ArgumentHolder {
    column_name: Option<String>,
    field: Option<Box<FieldType>>,
    sql_type: SqlType,
    value: Option<SqlValue>,
    select_arg: bool,
}

impl ArgumentHolder {
    /// A raw argument with a wire value.
    pub fn raw(value: impl Into<SqlValue>) -> Self {
        let value = value.into();
        Self {
            column_name: None,
            field: None,
            sql_type: sql_type_of(&value),
            value: Some(value),
            select_arg: false,
        }
    }

    /// A raw placeholder set later through
    /// [`PreparedQuery::set_argument`](crate::stmt::PreparedQuery::set_argument).
    pub fn raw_placeholder(sql_type: SqlType) -> Self {
        Self {
            column_name: None,
            field: None,
            sql_type,
            value: None,
            select_arg: true,
        }
    }

    /// Converts a native value for `field`. `Null` binds as SQL `NULL`.
    pub(crate) fn for_field(field: &FieldType, native: &SqlValue) -> Result<Self> {
        Ok(Self {
            column_name: Some(field.column_name().to_owned()),
            sql_type: field.converter().sql_type(),
            value: Some(field.java_to_sql_arg(native)?),
            field: Some(Box::new(field.clone())),
            select_arg: false,
        })
    }

    /// A placeholder for `field`, converting the select-arg's value if it has one.
    pub(crate) fn select_arg(field: &FieldType, arg: &SelectArg) -> Result<Self> {
        let value = arg
            .value()
            .map(|native| field.java_to_sql_arg(native))
            .transpose()?;
        Ok(Self {
            column_name: Some(field.column_name().to_owned()),
            sql_type: field.converter().sql_type(),
            value,
            field: Some(Box::new(field.clone())),
            select_arg: true,
        })
    }

    pub fn column_name(&self) -> Option<&str> {
        self.column_name.as_deref()
    }

    pub fn sql_type(&self) -> SqlType {
        self.sql_type
    }

    pub fn is_select_arg(&self) -> bool {
        self.select_arg
    }

    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }

    /// Sets the native value, converting it with the field's converter.
    pub fn set_value(&mut self, native: impl Into<SqlValue>) -> Result<()> {
        let native = native.into();
        let wire = match &self.field {
            Some(field) => field.java_to_sql_arg(&native)?,
            None => native,
        };
        self.value = Some(wire);
        Ok(())
    }

    /// The wire value to bind.
    pub fn sql_value(&self) -> Result<SqlValue> {
        self.value.clone().ok_or_else(|| {
            OrmLiteError::Statement(match &self.column_name {
                Some(column) => format!("argument for column '{column}' has not been set"),
                None => "raw argument has not been set".to_owned(),
            })
        })
    }

    /// Whether the value is quoted when inlined as a literal.
    pub fn is_escaped(&self) -> bool {
        match &self.field {
            Some(field) => field.converter().is_escaped_value(),
            None => matches!(
                self.value,
                Some(
                    SqlValue::Text(_)
                        | SqlValue::Char(_)
                        | SqlValue::Uuid(_)
                        | SqlValue::Timestamp(_)
                        | SqlValue::Json(_)
                        | SqlValue::Enum(_)
                )
            ),
        }
    }
}

fn sql_type_of(value: &SqlValue) -> SqlType {
    match value {
        SqlValue::Null => SqlType::Unknown,
        SqlValue::Bool(_) => SqlType::Boolean,
        SqlValue::Char(_) => SqlType::Char,
        SqlValue::Byte(_) => SqlType::Byte,
        SqlValue::Short(_) => SqlType::Short,
        SqlValue::Int(_) => SqlType::Integer,
        SqlValue::Long(_) => SqlType::Long,
        SqlValue::Float(_) => SqlType::Float,
        SqlValue::Double(_) => SqlType::Double,
        SqlValue::Text(_) | SqlValue::Enum(_) => SqlType::String,
        SqlValue::Bytes(_) => SqlType::ByteArray,
        SqlValue::BigInteger(_) | SqlValue::Decimal(_) => SqlType::BigDecimal,
        SqlValue::Uuid(_) => SqlType::Uuid,
        SqlValue::Timestamp(_) => SqlType::Date,
        SqlValue::Json(_) => SqlType::Other,
    }
}

/// A comparison value supplied after the statement is built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectArg {
    value: Option<SqlValue>,
}

impl SelectArg {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: impl Into<SqlValue>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }

    pub fn value(&self) -> Option<&SqlValue> {
        self.value.as_ref()
    }
}

/// Another column as the right side of a comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnArg {
    pub table: Option<String>,
    pub column: String,
}

impl ColumnArg {
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            table: None,
            column: column.into(),
        }
    }

    pub fn qualified(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            table: Some(table.into()),
            column: column.into(),
        }
    }
}
