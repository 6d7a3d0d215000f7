//! Declarative field and table configuration
//!
//! ```toml
//! table_name = "account"
//!
//! [[fields]]
//! field_name = "id"
//! data_type = "LONG"
//! generated_id = true
//!
//! [[fields]]
//! field_name = "active"
//! data_type = "BOOLEAN"
//! default_value = "true"
//! ```

use crate::error::Result;
use crate::field::{DataType, FieldType};
use crate::table::TableInfo;
use ormlite_types::Dialect;
use serde::Deserialize;

/// Settings for one field, mirroring [`FieldTypeBuilder`](crate::field::FieldTypeBuilder).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FieldConfig {
    pub field_name: String,
    pub column_name: Option<String>,
    pub data_type: DataType,
    pub can_be_null: bool,
    pub default_value: Option<String>,
    pub id: bool,
    pub generated_id: bool,
    pub version: bool,
    pub throw_if_null: bool,
    pub format: Option<String>,
    pub width: Option<u32>,
    pub enum_constants: Vec<String>,
    pub unknown_enum_name: Option<String>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            field_name: String::new(),
            column_name: None,
            data_type: DataType::Unknown,
            can_be_null: true,
            default_value: None,
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
}

impl FieldConfig {
    pub fn new(field_name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            field_name: field_name.into(),
            data_type,
            ..Self::default()
        }
    }

    pub fn into_field_type(self, dialect: Dialect) -> Result<FieldType> {
        let mut builder = FieldType::builder(self.field_name, self.data_type)
            .can_be_null(self.can_be_null)
            .id(self.id)
            .generated_id(self.generated_id)
            .version(self.version)
            .throw_if_null(self.throw_if_null)
            .enum_constants(self.enum_constants);
        if let Some(column_name) = self.column_name {
            builder = builder.column_name(column_name);
        }
        if let Some(default_value) = self.default_value {
            builder = builder.default_value(default_value);
        }
        if let Some(format) = self.format {
            builder = builder.format(format);
        }
        if let Some(width) = self.width {
            builder = builder.width(width);
        }
        if let Some(name) = self.unknown_enum_name {
            builder = builder.unknown_enum_name(name);
        }
        builder.build(dialect)
    }
}

/// A table name with its field settings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableConfig {
    pub table_name: String,
    #[serde(default)]
    pub fields: Vec<FieldConfig>,
}

impl TableConfig {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Builds every field for `dialect` and validates the table as a whole.
    pub fn into_table_info(self, dialect: Dialect) -> Result<TableInfo> {
        let fields = self
            .fields
            .into_iter()
            .map(|f| f.into_field_type(dialect))
            .collect::<Result<Vec<_>>>()?;
        TableInfo::new(self.table_name, fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OrmLiteError;
    use crate::value::SqlValue;

    const ACCOUNT: &str = r#"
        table_name = "account"

        [[fields]]
        field_name = "id"
        data_type = "LONG"
        generated_id = true

        [[fields]]
        field_name = "name"
        column_name = "full_name"
        data_type = "STRING"
        width = 100

        [[fields]]
        field_name = "active"
        data_type = "boolean"
        default_value = "true"

        [[fields]]
        field_name = "status"
        data_type = "ENUM_STRING"
        enum_constants = ["OPEN", "CLOSED"]
        unknown_enum_name = "OPEN"
    "#;

    #[test]
    fn test_load_table_from_toml() {
        let config = TableConfig::from_toml_str(ACCOUNT).unwrap();
        assert_eq!(config.fields.len(), 4);
        assert!(config.fields[0].can_be_null);

        let table = config.into_table_info(Dialect::SQLite).unwrap();
        assert_eq!(table.table_name(), "account");
        assert_eq!(table.id_field().unwrap().field_name(), "id");
        let name = table.field_for_column("full_name").unwrap();
        assert_eq!(name.width(), Some(100));
        let active = table.field_for_column("active").unwrap();
        assert_eq!(active.default_value(), Some(&SqlValue::Byte(1)));
    }

    #[test]
    fn test_unknown_data_type_is_rejected() {
        let err = TableConfig::from_toml_str(
            r#"
            table_name = "t"
            [[fields]]
            field_name = "x"
            data_type = "VARCHAR"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, OrmLiteError::Toml(_)));
    }

    #[test]
    fn test_missing_data_type_fails_at_build() {
        let config = TableConfig::from_toml_str(
            r#"
            table_name = "t"
            [[fields]]
            field_name = "x"
            "#,
        )
        .unwrap();
        assert!(matches!(
            config.into_table_info(Dialect::H2),
            Err(OrmLiteError::Config(_))
        ));
    }

    #[test]
    fn test_two_ids_rejected() {
        let config = TableConfig {
            table_name: "t".into(),
            fields: vec![
                FieldConfig {
                    id: true,
                    ..FieldConfig::new("a", DataType::Integer)
                },
                FieldConfig {
                    id: true,
                    ..FieldConfig::new("b", DataType::Integer)
                },
            ],
        };
        assert!(matches!(
            config.into_table_info(Dialect::PostgreSQL),
            Err(OrmLiteError::Config(_))
        ));
    }
}
