//! Table descriptors and materialized rows.

use crate::error::{OrmLiteError, Result};
use crate::field::FieldType;
use crate::results::DatabaseResults;
use crate::value::SqlValue;
use hashbrown::HashMap;
use smallvec::SmallVec;

/// A table name with its ordered field descriptors.
#[derive(Debug, Clone)]
pub struct TableInfo {
    table_name: String,
    fields: Vec<FieldType>,
    by_column: HashMap<String, usize>,
    id_index: Option<usize>,
    version_index: Option<usize>,
}

impl TableInfo {
    /// Fails if two fields share a column or more than one field is the id or
    /// the version column.
    pub fn new(table_name: impl Into<String>, fields: Vec<FieldType>) -> Result<Self> {
        let table_name = table_name.into();
        let mut by_column = HashMap::with_capacity(fields.len());
        let mut id_index = None;
        let mut version_index = None;
        for (i, field) in fields.iter().enumerate() {
            if by_column
                .insert(field.column_name().to_ascii_lowercase(), i)
                .is_some()
            {
                return Err(OrmLiteError::Config(format!(
                    "table '{table_name}': duplicate column '{}'",
                    field.column_name()
                )));
            }
            if field.is_id() && id_index.replace(i).is_some() {
                return Err(OrmLiteError::Config(format!(
                    "table '{table_name}': more than one id field"
                )));
            }
            if field.is_version() && version_index.replace(i).is_some() {
                return Err(OrmLiteError::Config(format!(
                    "table '{table_name}': more than one version field"
                )));
            }
        }
        Ok(Self {
            table_name,
            fields,
            by_column,
            id_index,
            version_index,
        })
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn fields(&self) -> &[FieldType] {
        &self.fields
    }

    /// Field stored in `column` (case-insensitive).
    pub fn field_for_column(&self, column: &str) -> Result<&FieldType> {
        self.by_column
            .get(&column.to_ascii_lowercase())
            .map(|&i| &self.fields[i])
            .ok_or_else(|| {
                OrmLiteError::Statement(format!(
                    "unknown column '{column}' for table '{}'",
                    self.table_name
                ))
            })
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.by_column.contains_key(&column.to_ascii_lowercase())
    }

    pub fn id_field(&self) -> Option<&FieldType> {
        self.id_index.map(|i| &self.fields[i])
    }

    pub fn version_field(&self) -> Option<&FieldType> {
        self.version_index.map(|i| &self.fields[i])
    }

    /// Materializes the current row. Fields whose column is missing from the
    /// result are skipped.
    pub fn map_row(&self, results: &dyn DatabaseResults) -> Result<Row> {
        let mut row = Row::with_capacity(self.fields.len());
        for field in &self.fields {
            let Some(pos) = results.find_column(field.column_name())? else {
                continue;
            };
            let value = field.result_to_java(results, pos)?;
            row.push(field.column_name(), value);
        }
        Ok(row)
    }

    /// Stores a database-generated key in the row's id column, narrowed to the
    /// id field's type.
    pub fn assign_generated_id(&self, row: &mut Row, key: i64) -> Result<()> {
        let id = self
            .id_field()
            .filter(|f| f.is_generated_id())
            .ok_or_else(|| {
                OrmLiteError::Statement(format!(
                    "table '{}' has no generated id field",
                    self.table_name
                ))
            })?;
        let value = id.convert_id_number(key)?;
        row.set(id.column_name(), value);
        Ok(())
    }
}

/// Column values of one row, in table order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    values: SmallVec<[(String, SqlValue); 8]>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: SmallVec::with_capacity(capacity),
        }
    }

    /// Appends a column without checking for duplicates.
    pub fn push(&mut self, column: impl Into<String>, value: SqlValue) {
        self.values.push((column.into(), value));
    }

    /// Replaces the column's value, appending it if absent.
    pub fn set(&mut self, column: &str, value: SqlValue) {
        match self
            .values
            .iter_mut()
            .find(|(c, _)| c.eq_ignore_ascii_case(column))
        {
            Some((_, slot)) => *slot = value,
            None => self.values.push((column.to_owned(), value)),
        }
    }

    /// Value of `column` (case-insensitive).
    pub fn get(&self, column: &str) -> Option<&SqlValue> {
        self.values
            .iter()
            .find(|(c, _)| c.eq_ignore_ascii_case(column))
            .map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SqlValue)> {
        self.values.iter().map(|(c, v)| (c.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<C: Into<String>> FromIterator<(C, SqlValue)> for Row {
    fn from_iter<I: IntoIterator<Item = (C, SqlValue)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(c, v)| (c.into(), v)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::DataType;
    use crate::results::BufferedResults;
    use ormlite_types::Dialect;

    fn account_table() -> TableInfo {
        let dialect = Dialect::SQLite;
        TableInfo::new(
            "account",
            vec![
                FieldType::builder("id", DataType::Byte)
                    .generated_id(true)
                    .build(dialect)
                    .unwrap(),
                FieldType::builder("name", DataType::String)
                    .build(dialect)
                    .unwrap(),
                FieldType::builder("active", DataType::Boolean)
                    .build(dialect)
                    .unwrap(),
                FieldType::builder("nickname", DataType::String)
                    .build(dialect)
                    .unwrap(),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_map_row_converts_and_skips_missing_columns() {
        let table = account_table();
        let results = BufferedResults::single_row([
            ("id", SqlValue::Long(3)),
            ("NAME", SqlValue::Text("ann".into())),
            ("active", SqlValue::Long(2)),
        ]);
        let row = table.map_row(&results).unwrap();
        assert_eq!(row.len(), 3);
        assert_eq!(row.get("id"), Some(&SqlValue::Byte(3)));
        assert_eq!(row.get("name"), Some(&SqlValue::Text("ann".into())));
        assert_eq!(row.get("active"), Some(&SqlValue::Bool(false)));
        assert_eq!(row.get("nickname"), None);
    }

    #[test]
    fn test_map_row_propagates_cursor_errors() {
        let table = account_table();
        let mut results = BufferedResults::single_row([("id", SqlValue::Long(3))]);
        results.close().unwrap();
        assert!(matches!(
            table.map_row(&results),
            Err(OrmLiteError::DataAccess(_))
        ));
    }

    #[test]
    fn test_assign_generated_id_narrows() {
        let table = account_table();
        let mut row: Row = [("name", SqlValue::Text("bo".into()))].into_iter().collect();
        table.assign_generated_id(&mut row, 257).unwrap();
        assert_eq!(row.get("id"), Some(&SqlValue::Byte(1)));
    }

    #[test]
    fn test_lookup_and_special_fields() {
        let table = account_table();
        assert_eq!(table.field_for_column("Name").unwrap().field_name(), "name");
        assert!(table.has_column("NICKNAME"));
        assert!(!table.has_column("missing"));
        assert!(matches!(
            table.field_for_column("missing"),
            Err(OrmLiteError::Statement(_))
        ));
        assert_eq!(table.id_field().unwrap().column_name(), "id");
        assert!(table.version_field().is_none());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let dialect = Dialect::PostgreSQL;
        let fields = vec![
            FieldType::builder("a", DataType::Long)
                .id(true)
                .build(dialect)
                .unwrap(),
            FieldType::builder("b", DataType::Long)
                .id(true)
                .build(dialect)
                .unwrap(),
        ];
        assert!(matches!(
            TableInfo::new("t", fields),
            Err(OrmLiteError::Config(_))
        ));
    }
}
