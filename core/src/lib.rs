//! Core of ORMLite: field converters and SQL statement composition
//!
//! - [`field`] - per-type converters between native values, bind arguments
//!   and result columns, plus the [`FieldType`] descriptor that drives them
//! - [`stmt`] - WHERE clause trees and SELECT/UPDATE/DELETE builders that
//!   render dialect-specific SQL with ordered bind arguments
//! - [`table`] and [`config`] - table descriptors, loadable from TOML
//! - [`results`] and [`connection`] - the cursor and execution capabilities a
//!   driver provides

pub mod config;
pub mod connection;
pub mod dialect;
pub mod error;
pub mod field;
pub mod results;
pub mod stmt;
pub mod table;
mod tracing;
pub mod value;

pub use config::{FieldConfig, TableConfig};
pub use connection::{DatabaseConnection, ExecuteResult, GeneratedKeyHolder, KeyHolder};
pub use dialect::{Dialect, DialectExt};
pub use error::{OrmLiteError, Result};
pub use field::{DataType, FieldConverter, FieldType, FieldTypeBuilder};
pub use results::{BufferedResults, DatabaseResults};
pub use stmt::{
    ArgumentHolder, Clause, ColumnArg, DeleteBuilder, Operand, PreparedQuery, QueryBuilder,
    SelectArg, StatementKind, UpdateBuilder, Where,
};
pub use table::{Row, TableInfo};
pub use value::{EnumConstant, SqlValue};

pub use ormlite_types::SqlType;

/// Prelude module for commonly used types
pub mod prelude {
    pub use crate::connection::{DatabaseConnection, GeneratedKeyHolder, KeyHolder};
    pub use crate::dialect::{Dialect, DialectExt};
    pub use crate::error::{OrmLiteError, Result};
    pub use crate::field::{DataType, FieldType};
    pub use crate::results::{BufferedResults, DatabaseResults};
    pub use crate::stmt::{
        ColumnArg, DeleteBuilder, PreparedQuery, QueryBuilder, SelectArg, UpdateBuilder, Where,
    };
    pub use crate::table::{Row, TableInfo};
    pub use crate::value::SqlValue;
}
