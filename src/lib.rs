//! # ORMLite for Rust
//!
//! Field-type conversion and SQL statement composition for a lightweight
//! object-relational mapper.
//!
//! ## Quick Start
//!
//! ```rust
//! use ormlite::prelude::*;
//! use std::sync::Arc;
//!
//! # fn main() -> ormlite::Result<()> {
//! let dialect = Dialect::SQLite;
//! let table = Arc::new(TableInfo::new(
//!     "account",
//!     vec![
//!         FieldType::builder("id", DataType::Long).generated_id(true).build(dialect)?,
//!         FieldType::builder("name", DataType::String).build(dialect)?,
//!         FieldType::builder("active", DataType::Boolean).build(dialect)?,
//!     ],
//! )?);
//!
//! let mut qb = QueryBuilder::new(dialect, Arc::clone(&table));
//! qb.where_().eq("name", "ann").and().eq("active", true);
//! let query = qb.prepare()?;
//!
//! assert_eq!(
//!     query.sql(),
//!     r#"SELECT * FROM "account" WHERE "name" = ? AND "active" = ?"#
//! );
//! // SQLite has no boolean type: true binds as the byte 1
//! assert_eq!(
//!     query.bind_values()?,
//!     vec![SqlValue::Text("ann".into()), SqlValue::Byte(1)]
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Dialects
//!
//! | Dialect    | Placeholders | Booleans      | Limit/offset                         |
//! |------------|--------------|---------------|--------------------------------------|
//! | SQLite     | `?`          | 0/1 byte      | `LIMIT n OFFSET m`                   |
//! | PostgreSQL | `$1, $2`     | native        | `LIMIT n OFFSET m`                   |
//! | MySQL      | `?`          | 0/1 byte      | `LIMIT n OFFSET m`                   |
//! | Derby      | `?`          | 0/1 byte      | `OFFSET m ROWS FETCH NEXT n ROWS ONLY` |
//! | H2         | `?`          | native        | `LIMIT n OFFSET m`                   |
//!
//! ## Features
//!
//! - `sqlite` - [`sqlite::SqliteConnection`] over rusqlite
//! - `tracing` - debug events for prepared and executed statements
//! - `serde` - serde derives on [`Dialect`] and [`SqlType`]

/// Result type for ORMLite operations
pub use ormlite_core::error::Result;

/// Database dialect enum
pub use ormlite_types::Dialect;

/// Canonical SQL type tags
pub use ormlite_types::SqlType;

/// Error types
pub mod error {
    pub use ormlite_core::error::OrmLiteError;
}

/// Field descriptors and converters.
///
/// [`FieldType`](field::FieldType) is built per column and dialect; its
/// converter moves values between native form, bind arguments and result
/// columns.
pub mod field {
    pub use ormlite_core::field::*;
}

/// Clause trees, statement builders and prepared statements.
pub mod stmt {
    pub use ormlite_core::stmt::*;
}

/// Tables, rows and their TOML configuration.
pub mod table {
    pub use ormlite_core::config::{FieldConfig, TableConfig};
    pub use ormlite_core::table::{Row, TableInfo};
}

/// Result cursors and connections.
pub mod results {
    pub use ormlite_core::connection::{
        DatabaseConnection, ExecuteResult, GeneratedKeyHolder, KeyHolder,
    };
    pub use ormlite_core::results::{BufferedResults, DatabaseResults};
}

pub use ormlite_core::dialect::DialectExt;
pub use ormlite_core::value::{EnumConstant, SqlValue};

/// rusqlite-backed driver
#[cfg(feature = "sqlite")]
pub mod sqlite {
    pub use ormlite_sqlite::*;
}

/// Prelude module for commonly used types
pub mod prelude {
    pub use ormlite_core::prelude::*;

    #[cfg(feature = "sqlite")]
    pub use ormlite_sqlite::SqliteConnection;
}
