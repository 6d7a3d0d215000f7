//! Converter records and the adapter decorator
//!
//! A [`Persister`] is a plain record of conversion functions for one native
//! type. Primitive and boxed variants share the same [`ConverterOps`] and differ
//! only in their `primitive` flag. An [`Adapter`] wraps another converter and
//! overrides a subset of operations; everything it leaves as `None` forwards to
//! the wrapped converter unchanged.

use super::FieldType;
use crate::error::Result;
use crate::results::DatabaseResults;
use crate::value::{EnumConstant, SqlValue};
use hashbrown::HashMap;
use ormlite_types::SqlType;

pub type ParseDefaultFn = fn(&FieldType, &str) -> Result<SqlValue>;
pub type JavaToSqlArgFn = fn(&FieldType, &SqlValue) -> Result<SqlValue>;
pub type ResultToSqlArgFn = fn(&FieldType, &dyn DatabaseResults, usize) -> Result<SqlValue>;
pub type SqlArgToJavaFn = fn(&FieldType, SqlValue, usize) -> Result<SqlValue>;
pub type ResultStringToJavaFn = fn(&FieldType, &str, usize) -> Result<SqlValue>;
pub type MakeConfigObjectFn = fn(&FieldType) -> Result<ConfigObject>;

/// Conversion functions and representation flags shared by the primitive and
/// boxed variants of a type.
pub struct ConverterOps {
    pub sql_type: SqlType,
    /// Literal must be quoted when inlined into SQL text.
    pub escaped_value: bool,
    /// Values may appear on either side of a comparison.
    pub comparable: bool,
    /// Type may back an id column.
    pub appropriate_id: bool,
    /// Type may back a version column.
    pub valid_for_version: bool,
    pub parse_default_string: ParseDefaultFn,
    pub java_to_sql_arg: JavaToSqlArgFn,
    pub result_to_sql_arg: ResultToSqlArgFn,
    pub sql_arg_to_java: SqlArgToJavaFn,
    pub result_string_to_java: ResultStringToJavaFn,
    pub make_config_object: Option<MakeConfigObjectFn>,
    pub convert_id_number: Option<fn(i64) -> SqlValue>,
    pub move_to_next_value: Option<fn(&SqlValue) -> SqlValue>,
    pub generate_id: Option<fn() -> SqlValue>,
}

impl ConverterOps {
    /// Baseline flags shared by most types; struct update syntax fills the rest.
    pub const fn base(
        sql_type: SqlType,
        parse_default_string: ParseDefaultFn,
        java_to_sql_arg: JavaToSqlArgFn,
        result_to_sql_arg: ResultToSqlArgFn,
        sql_arg_to_java: SqlArgToJavaFn,
        result_string_to_java: ResultStringToJavaFn,
    ) -> Self {
        Self {
            sql_type,
            escaped_value: false,
            comparable: true,
            appropriate_id: false,
            valid_for_version: false,
            parse_default_string,
            java_to_sql_arg,
            result_to_sql_arg,
            sql_arg_to_java,
            result_string_to_java,
            make_config_object: None,
            convert_id_number: None,
            move_to_next_value: None,
            generate_id: None,
        }
    }
}

/// Converter record for one native type.
pub struct Persister {
    pub name: &'static str,
    /// Native representation has no null state.
    pub primitive: bool,
    pub ops: &'static ConverterOps,
}

impl core::fmt::Debug for Persister {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Persister")
            .field("name", &self.name)
            .field("sql_type", &self.ops.sql_type)
            .field("primitive", &self.primitive)
            .finish()
    }
}

/// Decorator that overrides some operations of a wrapped converter.
///
/// Each override receives the wrapped converter so it can build on its output.
pub struct Adapter {
    pub name: &'static str,
    pub sql_type: Option<SqlType>,
    pub parse_default_string: Option<fn(&FieldConverter, &FieldType, &str) -> Result<SqlValue>>,
    pub java_to_sql_arg: Option<fn(&FieldConverter, &FieldType, &SqlValue) -> Result<SqlValue>>,
    pub result_to_sql_arg:
        Option<fn(&FieldConverter, &FieldType, &dyn DatabaseResults, usize) -> Result<SqlValue>>,
    pub sql_arg_to_java: Option<fn(&FieldConverter, &FieldType, SqlValue, usize) -> Result<SqlValue>>,
    pub result_string_to_java:
        Option<fn(&FieldConverter, &FieldType, &str, usize) -> Result<SqlValue>>,
}

impl Adapter {
    /// An adapter that forwards everything.
    pub const fn forwarding(name: &'static str) -> Self {
        Self {
            name,
            sql_type: None,
            parse_default_string: None,
            java_to_sql_arg: None,
            result_to_sql_arg: None,
            sql_arg_to_java: None,
            result_string_to_java: None,
        }
    }
}

impl core::fmt::Debug for Adapter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Adapter").field("name", &self.name).finish()
    }
}

/// A field's converter: a plain persister or an adapter around another converter.
#[derive(Debug, Clone)]
pub enum FieldConverter {
    Persister(&'static Persister),
    Adapted {
        adapter: &'static Adapter,
        inner: Box<FieldConverter>,
    },
}

impl FieldConverter {
    /// Wraps `self` in `adapter`.
    pub fn adapt(self, adapter: &'static Adapter) -> Self {
        FieldConverter::Adapted {
            adapter,
            inner: Box::new(self),
        }
    }

    /// The innermost persister record.
    pub fn persister(&self) -> &'static Persister {
        match self {
            FieldConverter::Persister(p) => p,
            FieldConverter::Adapted { inner, .. } => inner.persister(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FieldConverter::Persister(p) => p.name,
            FieldConverter::Adapted { adapter, .. } => adapter.name,
        }
    }

    pub fn sql_type(&self) -> SqlType {
        match self {
            FieldConverter::Persister(p) => p.ops.sql_type,
            FieldConverter::Adapted { adapter, inner } => {
                adapter.sql_type.unwrap_or_else(|| inner.sql_type())
            }
        }
    }

    pub fn parse_default_string(&self, field: &FieldType, default_str: &str) -> Result<SqlValue> {
        match self {
            FieldConverter::Persister(p) => (p.ops.parse_default_string)(field, default_str),
            FieldConverter::Adapted { adapter, inner } => match adapter.parse_default_string {
                Some(f) => f(inner, field, default_str),
                None => inner.parse_default_string(field, default_str),
            },
        }
    }

    pub fn java_to_sql_arg(&self, field: &FieldType, value: &SqlValue) -> Result<SqlValue> {
        match self {
            FieldConverter::Persister(p) => (p.ops.java_to_sql_arg)(field, value),
            FieldConverter::Adapted { adapter, inner } => match adapter.java_to_sql_arg {
                Some(f) => f(inner, field, value),
                None => inner.java_to_sql_arg(field, value),
            },
        }
    }

    pub fn result_to_sql_arg(
        &self,
        field: &FieldType,
        results: &dyn DatabaseResults,
        column_pos: usize,
    ) -> Result<SqlValue> {
        match self {
            FieldConverter::Persister(p) => (p.ops.result_to_sql_arg)(field, results, column_pos),
            FieldConverter::Adapted { adapter, inner } => match adapter.result_to_sql_arg {
                Some(f) => f(inner, field, results, column_pos),
                None => inner.result_to_sql_arg(field, results, column_pos),
            },
        }
    }

    pub fn sql_arg_to_java(
        &self,
        field: &FieldType,
        sql_arg: SqlValue,
        column_pos: usize,
    ) -> Result<SqlValue> {
        match self {
            FieldConverter::Persister(p) => (p.ops.sql_arg_to_java)(field, sql_arg, column_pos),
            FieldConverter::Adapted { adapter, inner } => match adapter.sql_arg_to_java {
                Some(f) => f(inner, field, sql_arg, column_pos),
                None => inner.sql_arg_to_java(field, sql_arg, column_pos),
            },
        }
    }

    /// Reads the column's wire value and converts it to the native value.
    /// A SQL `NULL` column yields `SqlValue::Null` without calling either step.
    pub fn result_to_java(
        &self,
        field: &FieldType,
        results: &dyn DatabaseResults,
        column_pos: usize,
    ) -> Result<SqlValue> {
        if results.is_null(column_pos)? {
            return Ok(SqlValue::Null);
        }
        let sql_arg = self.result_to_sql_arg(field, results, column_pos)?;
        self.sql_arg_to_java(field, sql_arg, column_pos)
    }

    pub fn result_string_to_java(
        &self,
        field: &FieldType,
        string_value: &str,
        column_pos: usize,
    ) -> Result<SqlValue> {
        match self {
            FieldConverter::Persister(p) => {
                (p.ops.result_string_to_java)(field, string_value, column_pos)
            }
            FieldConverter::Adapted { adapter, inner } => match adapter.result_string_to_java {
                Some(f) => f(inner, field, string_value, column_pos),
                None => inner.result_string_to_java(field, string_value, column_pos),
            },
        }
    }

    pub fn make_config_object(&self, field: &FieldType) -> Result<Option<ConfigObject>> {
        match self.persister().ops.make_config_object {
            Some(f) => f(field).map(Some),
            None => Ok(None),
        }
    }

    pub fn is_escaped_value(&self) -> bool {
        self.persister().ops.escaped_value
    }

    pub fn is_primitive(&self) -> bool {
        self.persister().primitive
    }

    pub fn is_comparable(&self) -> bool {
        self.persister().ops.comparable
    }

    pub fn is_appropriate_id(&self) -> bool {
        self.persister().ops.appropriate_id
    }

    pub fn is_valid_for_version(&self) -> bool {
        self.persister().ops.valid_for_version
    }

    /// Narrows a generated numeric key to this type, if the type supports it.
    pub fn convert_id_number(&self, number: i64) -> Option<SqlValue> {
        self.persister().ops.convert_id_number.map(|f| f(number))
    }

    pub fn move_to_next_value(&self, current: &SqlValue) -> Option<SqlValue> {
        self.persister().ops.move_to_next_value.map(|f| f(current))
    }

    pub fn generate_id(&self) -> Option<SqlValue> {
        self.persister().ops.generate_id.map(|f| f())
    }

    pub fn is_self_generated_id(&self) -> bool {
        self.persister().ops.generate_id.is_some()
    }
}

/// Per-field configuration made once by the descriptor and handed back to
/// every conversion through [`FieldType::config`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigObject {
    /// chrono format string for textual dates
    DateFormat(String),
    /// characters stored for `true` and `false`
    BooleanChars { true_char: char, false_char: char },
    /// enum constants by name and by ordinal
    EnumLookup(EnumLookup),
    /// normalized character set for text stored as bytes
    Charset(String),
}

/// Lookup tables over a field's enum constants.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EnumLookup {
    by_name: HashMap<String, EnumConstant>,
    by_ordinal: HashMap<i32, EnumConstant>,
}

impl EnumLookup {
    pub fn new<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        let mut lookup = Self::default();
        for (ordinal, name) in names.into_iter().enumerate() {
            let constant = EnumConstant::new(name, ordinal as i32);
            lookup.by_name.insert(name.to_owned(), constant.clone());
            lookup.by_ordinal.insert(ordinal as i32, constant);
        }
        lookup
    }

    pub fn by_name(&self, name: &str) -> Option<&EnumConstant> {
        self.by_name.get(name)
    }

    pub fn by_ordinal(&self, ordinal: i32) -> Option<&EnumConstant> {
        self.by_ordinal.get(&ordinal)
    }

    pub fn len(&self) -> usize {
        self.by_ordinal.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_ordinal.is_empty()
    }
}
