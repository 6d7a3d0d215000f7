//! Shared type tags for ORMLite
//!
//! This crate provides the leaf enumerations used across the ORMLite crates:
//!
//! - [`SqlType`] - canonical SQL type tags, independent of any dialect
//! - [`Dialect`] - database dialects whose rendering conventions differ
//!
//! # Features
//!
//! - `serde` - Enable serde serialization/deserialization of the tags

mod dialect;
mod sql_type;

pub use dialect::{Dialect, DialectParseError};
pub use sql_type::{SqlType, SqlTypeParseError};

/// Prelude module for commonly used types
pub mod prelude {
    pub use crate::{Dialect, SqlType};
}
