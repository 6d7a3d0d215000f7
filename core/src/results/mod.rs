//! Row-cursor capability consumed by converters
//!
//! A [`DatabaseResults`] is positioned at a current row. Converters only read
//! typed columns by position; advancing and closing belong to whoever owns the
//! cursor. Positions are passed through unchanged, so a cursor may be 0-based
//! or 1-based as its driver dictates.

mod buffered;

pub use buffered::BufferedResults;

use crate::SqlValue;
use crate::error::Result;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use uuid::Uuid;

/// Positioned read access to a query result.
///
/// Typed getters return the type's zero value for a SQL `NULL`; callers that
/// care check [`is_null`](DatabaseResults::is_null) first.
pub trait DatabaseResults {
    /// Number of columns in the result.
    fn column_count(&self) -> Result<usize>;

    /// Column names in result order.
    fn column_names(&self) -> Result<Vec<String>>;

    /// Moves to the first row. Returns `false` when the result is empty.
    fn first(&mut self) -> Result<bool>;

    /// Moves to the next row. Returns `false` when no more rows remain.
    fn next(&mut self) -> Result<bool>;

    /// Position of the named column (case-insensitive), `None` when the
    /// result has no such column.
    fn find_column(&self, name: &str) -> Result<Option<usize>>;

    fn get_string(&self, pos: usize) -> Result<String>;
    fn get_boolean(&self, pos: usize) -> Result<bool>;
    fn get_char(&self, pos: usize) -> Result<char>;
    fn get_byte(&self, pos: usize) -> Result<i8>;
    fn get_short(&self, pos: usize) -> Result<i16>;
    fn get_int(&self, pos: usize) -> Result<i32>;
    fn get_long(&self, pos: usize) -> Result<i64>;
    fn get_float(&self, pos: usize) -> Result<f32>;
    fn get_double(&self, pos: usize) -> Result<f64>;
    fn get_bytes(&self, pos: usize) -> Result<Vec<u8>>;
    fn get_timestamp(&self, pos: usize) -> Result<NaiveDateTime>;
    fn get_big_decimal(&self, pos: usize) -> Result<Decimal>;
    fn get_uuid(&self, pos: usize) -> Result<Uuid>;

    /// Raw column value in whatever shape the driver produced.
    fn get_object(&self, pos: usize) -> Result<SqlValue>;

    /// Whether the column holds SQL `NULL` in the current row.
    fn is_null(&self, pos: usize) -> Result<bool>;

    /// Releases the cursor. Further reads fail.
    fn close(&mut self) -> Result<()>;
}
