//! SQLite driver for ORMLite
//!
//! Runs prepared ORMLite statements over a [`rusqlite::Connection`] and
//! buffers results for the field converters.

pub mod connection;
pub mod values;

pub use connection::SqliteConnection;
pub use values::{Bind, from_value_ref};
