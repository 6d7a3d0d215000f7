//! Field descriptors and converters
//!
//! A [`FieldType`] carries a field's persistence metadata together with the
//! [`FieldConverter`] chosen for it. Conversions always receive the descriptor
//! so they can read per-field settings (format, enum constants, cached config).

pub mod adapters;
pub mod converter;
mod data_type;
pub mod persisters;

pub use converter::{Adapter, ConfigObject, ConverterOps, EnumLookup, FieldConverter, Persister};
pub use data_type::DataType;

use crate::dialect::DialectExt;
use crate::error::{OrmLiteError, Result};
use crate::results::DatabaseResults;
use crate::value::SqlValue;
use ormlite_types::Dialect;

/// Persistence metadata for one field.
///
/// Built once through [`FieldTypeBuilder`] and read-only afterwards.
#[derive(Debug, Clone)]
pub struct FieldType {
    field_name: String,
    column_name: String,
    data_type: DataType,
    converter: FieldConverter,
    can_be_null: bool,
    default_string: Option<String>,
    default_value: Option<SqlValue>,
    id: bool,
    generated_id: bool,
    version: bool,
    throw_if_null: bool,
    format: Option<String>,
    width: Option<u32>,
    enum_constants: Vec<String>,
    unknown_enum_name: Option<String>,
    config: Option<ConfigObject>,
}

impl FieldType {
    pub fn builder(field_name: impl Into<String>, data_type: DataType) -> FieldTypeBuilder {
        FieldTypeBuilder::new(field_name, data_type)
    }

    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    pub fn column_name(&self) -> &str {
        &self.column_name
    }

    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    pub fn converter(&self) -> &FieldConverter {
        &self.converter
    }

    pub fn can_be_null(&self) -> bool {
        self.can_be_null
    }

    /// The default as written in the field's configuration.
    pub fn default_string(&self) -> Option<&str> {
        self.default_string.as_deref()
    }

    /// The parsed default, in bind-argument form.
    pub fn default_value(&self) -> Option<&SqlValue> {
        self.default_value.as_ref()
    }

    /// The parsed default converted back to its native value.
    pub fn default_native(&self) -> Result<Option<SqlValue>> {
        self.default_value
            .clone()
            .map(|arg| self.converter.sql_arg_to_java(self, arg, 0))
            .transpose()
    }

    pub fn is_id(&self) -> bool {
        self.id || self.generated_id
    }

    pub fn is_generated_id(&self) -> bool {
        self.generated_id
    }

    pub fn is_version(&self) -> bool {
        self.version
    }

    pub fn throw_if_null(&self) -> bool {
        self.throw_if_null
    }

    pub fn format(&self) -> Option<&str> {
        self.format.as_deref()
    }

    pub fn width(&self) -> Option<u32> {
        self.width
    }

    pub fn enum_constants(&self) -> &[String] {
        &self.enum_constants
    }

    pub fn unknown_enum_name(&self) -> Option<&str> {
        self.unknown_enum_name.as_deref()
    }

    /// Per-field configuration made by the converter when the descriptor was built.
    pub fn config(&self) -> Option<&ConfigObject> {
        self.config.as_ref()
    }

    /// Converts a native value to a bind argument. `Null` passes through for
    /// nullable fields and is a conversion error otherwise.
    pub fn java_to_sql_arg(&self, value: &SqlValue) -> Result<SqlValue> {
        if value.is_null() {
            if !self.can_be_null {
                return Err(OrmLiteError::Conversion(format!(
                    "field '{}' cannot be null",
                    self.field_name
                )));
            }
            return Ok(SqlValue::Null);
        }
        self.converter.java_to_sql_arg(self, value)
    }

    /// Converts a bind argument back to the native value. `Null` passes through.
    pub fn sql_arg_to_java(&self, sql_arg: SqlValue, column_pos: usize) -> Result<SqlValue> {
        if sql_arg.is_null() {
            return Ok(SqlValue::Null);
        }
        self.converter.sql_arg_to_java(self, sql_arg, column_pos)
    }

    /// Reads this field's column from the current row.
    ///
    /// A `NULL` column is `SqlValue::Null`, unless the native type is
    /// primitive and the field asks to fail on nulls.
    pub fn result_to_java(&self, results: &dyn DatabaseResults, column_pos: usize) -> Result<SqlValue> {
        crate::ormlite_trace_convert!("result_to_java", self.column_name, column_pos);
        let value = self.converter.result_to_java(self, results, column_pos)?;
        if value.is_null() && self.throw_if_null && self.converter.is_primitive() {
            return Err(OrmLiteError::Conversion(format!(
                "field '{}': column '{}' is NULL but the field cannot hold null",
                self.field_name, self.column_name
            )));
        }
        Ok(value)
    }

    pub fn result_string_to_java(&self, value: &str, column_pos: usize) -> Result<SqlValue> {
        self.converter.result_string_to_java(self, value, column_pos)
    }

    /// Narrows a database-generated key to this field's native type.
    pub fn convert_id_number(&self, number: i64) -> Result<SqlValue> {
        self.converter.convert_id_number(number).ok_or_else(|| {
            OrmLiteError::Statement(format!(
                "field '{}' of type {} cannot hold a generated id",
                self.field_name, self.data_type
            ))
        })
    }

    /// Next value of a version column.
    pub fn move_to_next_value(&self, current: &SqlValue) -> Result<SqlValue> {
        self.converter.move_to_next_value(current).ok_or_else(|| {
            OrmLiteError::Statement(format!(
                "field '{}' of type {} cannot be a version column",
                self.field_name, self.data_type
            ))
        })
    }

    /// A fresh id for a generated-id field whose type produces its own ids.
    pub fn generate_id(&self) -> Option<SqlValue> {
        if self.generated_id {
            self.converter.generate_id()
        } else {
            None
        }
    }
}

/// Builder for [`FieldType`].
#[derive(Debug, Clone)]
pub struct FieldTypeBuilder {
    field_name: String,
    data_type: DataType,
    column_name: Option<String>,
    can_be_null: bool,
    default_string: Option<String>,
    id: bool,
    generated_id: bool,
    version: bool,
    throw_if_null: bool,
    format: Option<String>,
    width: Option<u32>,
    enum_constants: Vec<String>,
    unknown_enum_name: Option<String>,
}

impl FieldTypeBuilder {
    pub fn new(field_name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            field_name: field_name.into(),
            data_type,
            column_name: None,
            can_be_null: true,
            default_string: None,
            id: false,
            generated_id: false,
            version: false,
            throw_if_null: false,
            format: None,
            width: None,
            enum_constants: Vec::new(),
            unknown_enum_name: None,
        }
    }

    /// Column name; defaults to the field name.
    pub fn column_name(mut self, column_name: impl Into<String>) -> Self {
        self.column_name = Some(column_name.into());
        self
    }

    pub fn can_be_null(mut self, can_be_null: bool) -> Self {
        self.can_be_null = can_be_null;
        self
    }

    pub fn default_value(mut self, default_string: impl Into<String>) -> Self {
        self.default_string = Some(default_string.into());
        self
    }

    pub fn id(mut self, id: bool) -> Self {
        self.id = id;
        self
    }

    pub fn generated_id(mut self, generated_id: bool) -> Self {
        self.generated_id = generated_id;
        self
    }

    pub fn version(mut self, version: bool) -> Self {
        self.version = version;
        self
    }

    pub fn throw_if_null(mut self, throw_if_null: bool) -> Self {
        self.throw_if_null = throw_if_null;
        self
    }

    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn enum_constants<I, S>(mut self, constants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enum_constants = constants.into_iter().map(Into::into).collect();
        self
    }

    pub fn unknown_enum_name(mut self, name: impl Into<String>) -> Self {
        self.unknown_enum_name = Some(name.into());
        self
    }

    /// Validates the settings, selects the dialect's converter, makes the
    /// per-field config object and parses the default.
    pub fn build(self, dialect: Dialect) -> Result<FieldType> {
        let name = &self.field_name;
        let persister = self.data_type.persister().ok_or_else(|| {
            OrmLiteError::Config(format!(
                "field '{name}': data type {} has no persister",
                self.data_type
            ))
        })?;
        let converter = dialect.field_converter(persister);

        let invalid = |reason: &str| Err(OrmLiteError::Config(format!("field '{name}': {reason}")));
        if self.id && self.generated_id {
            return invalid("cannot be both id and generated id");
        }
        if (self.id || self.generated_id) && !converter.is_appropriate_id() {
            return invalid(&format!("type {} cannot be an id", self.data_type));
        }
        if self.generated_id
            && converter.convert_id_number(0).is_none()
            && !converter.is_self_generated_id()
        {
            return invalid(&format!("type {} cannot be a generated id", self.data_type));
        }
        if self.generated_id && self.default_string.is_some() {
            return invalid("generated id cannot have a default value");
        }
        if self.version && !converter.is_valid_for_version() {
            return invalid(&format!("type {} cannot be a version column", self.data_type));
        }
        if self.throw_if_null && !converter.is_primitive() {
            return invalid("throw_if_null only applies to primitive types");
        }
        if self.unknown_enum_name.is_some() && !self.data_type.is_enum() {
            return invalid("unknown enum fallback set on a non-enum type");
        }

        let mut field = FieldType {
            column_name: self.column_name.unwrap_or_else(|| self.field_name.clone()),
            field_name: self.field_name,
            data_type: self.data_type,
            converter,
            can_be_null: self.can_be_null,
            default_string: None,
            default_value: None,
            id: self.id,
            generated_id: self.generated_id,
            version: self.version,
            throw_if_null: self.throw_if_null,
            format: self.format,
            width: self.width,
            enum_constants: self.enum_constants,
            unknown_enum_name: self.unknown_enum_name,
            config: None,
        };
        field.config = field.converter.make_config_object(&field)?;

        if let Some(default_string) = self.default_string {
            let parsed = field
                .converter
                .parse_default_string(&field, &default_string)
                .map_err(|e| match e {
                    OrmLiteError::Parse(msg) | OrmLiteError::Statement(msg) => {
                        OrmLiteError::Config(format!("invalid default: {msg}"))
                    }
                    other => other,
                })?;
            field.default_value = Some(parsed);
            field.default_string = Some(default_string);
        }
        Ok(field)
    }
}
