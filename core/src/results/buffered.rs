use super::DatabaseResults;
use crate::SqlValue;
use crate::error::{OrmLiteError, Result};
use chrono::{DateTime, NaiveDateTime};
use rust_decimal::Decimal;
use uuid::Uuid;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// In-memory result set with a movable cursor.
///
/// Columns are 0-based. Reads coerce between storage shapes the way an
/// embedded driver's cursor does: an INTEGER column read as a byte narrows, a
/// TEXT column read as a number parses.
#[derive(Debug, Clone, Default)]
pub struct BufferedResults {
    columns: Vec<String>,
    rows: Vec<Vec<SqlValue>>,
    cursor: Option<usize>,
    closed: bool,
}

impl BufferedResults {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<SqlValue>>) -> Self {
        Self {
            columns,
            rows,
            cursor: None,
            closed: false,
        }
    }

    /// Single-row result already positioned on its row.
    pub fn single_row<I, C, V>(row: I) -> Self
    where
        I: IntoIterator<Item = (C, V)>,
        C: Into<String>,
        V: Into<SqlValue>,
    {
        let (columns, values): (Vec<String>, Vec<SqlValue>) =
            row.into_iter().map(|(c, v)| (c.into(), v.into())).unzip();
        Self {
            columns,
            rows: vec![values],
            cursor: Some(0),
            closed: false,
        }
    }

    /// Number of buffered rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn current(&self, pos: usize) -> Result<&SqlValue> {
        if self.closed {
            return Err(OrmLiteError::DataAccess("results already closed".into()));
        }
        let row = self
            .cursor
            .and_then(|c| self.rows.get(c))
            .ok_or_else(|| OrmLiteError::DataAccess("no current row".into()))?;
        row.get(pos).ok_or_else(|| {
            OrmLiteError::DataAccess(format!(
                "column position {pos} out of range for {} columns",
                row.len()
            ))
        })
    }

    fn integral(&self, pos: usize, target: &str) -> Result<i64> {
        let value = self.current(pos)?;
        match value {
            SqlValue::Null => Ok(0),
            SqlValue::Bool(b) => Ok(*b as i64),
            SqlValue::Float(f) => Ok(*f as i64),
            SqlValue::Double(d) => Ok(*d as i64),
            SqlValue::BigInteger(i) => Ok(*i as i64),
            SqlValue::Text(s) => s.trim().parse().map_err(|_| mismatch(pos, target, value)),
            other => other.as_i64().ok_or_else(|| mismatch(pos, target, other)),
        }
    }

    fn floating(&self, pos: usize, target: &str) -> Result<f64> {
        let value = self.current(pos)?;
        match value {
            SqlValue::Null => Ok(0.0),
            SqlValue::Text(s) => s.trim().parse().map_err(|_| mismatch(pos, target, value)),
            other => other.as_f64().ok_or_else(|| mismatch(pos, target, other)),
        }
    }
}

fn mismatch(pos: usize, target: &str, got: &SqlValue) -> OrmLiteError {
    OrmLiteError::DataAccess(format!(
        "column {pos}: cannot read {} value as {target}",
        got.kind()
    ))
}

impl DatabaseResults for BufferedResults {
    fn column_count(&self) -> Result<usize> {
        Ok(self.columns.len())
    }

    fn column_names(&self) -> Result<Vec<String>> {
        Ok(self.columns.clone())
    }

    fn first(&mut self) -> Result<bool> {
        if self.closed {
            return Err(OrmLiteError::DataAccess("results already closed".into()));
        }
        if self.rows.is_empty() {
            self.cursor = None;
            return Ok(false);
        }
        self.cursor = Some(0);
        Ok(true)
    }

    fn next(&mut self) -> Result<bool> {
        if self.closed {
            return Err(OrmLiteError::DataAccess("results already closed".into()));
        }
        let next = self.cursor.map_or(0, |c| c + 1);
        if next < self.rows.len() {
            self.cursor = Some(next);
            Ok(true)
        } else {
            self.cursor = Some(self.rows.len());
            Ok(false)
        }
    }

    fn find_column(&self, name: &str) -> Result<Option<usize>> {
        if self.closed {
            return Err(OrmLiteError::DataAccess("results already closed".into()));
        }
        Ok(self.columns.iter().position(|c| c.eq_ignore_ascii_case(name)))
    }

    fn get_string(&self, pos: usize) -> Result<String> {
        Ok(match self.current(pos)? {
            SqlValue::Null => String::new(),
            SqlValue::Text(s) => s.clone(),
            other => other.to_string(),
        })
    }

    fn get_boolean(&self, pos: usize) -> Result<bool> {
        let value = self.current(pos)?;
        match value {
            SqlValue::Bool(b) => Ok(*b),
            SqlValue::Text(s) if s.eq_ignore_ascii_case("true") => Ok(true),
            SqlValue::Text(s) if s.eq_ignore_ascii_case("false") => Ok(false),
            _ => self.integral(pos, "boolean").map(|v| v != 0),
        }
    }

    fn get_char(&self, pos: usize) -> Result<char> {
        let value = self.current(pos)?;
        match value {
            SqlValue::Null => Ok('\0'),
            SqlValue::Char(c) => Ok(*c),
            SqlValue::Text(s) => s.chars().next().ok_or_else(|| mismatch(pos, "char", value)),
            other => other
                .as_i64()
                .and_then(|v| u32::try_from(v).ok())
                .and_then(char::from_u32)
                .ok_or_else(|| mismatch(pos, "char", other)),
        }
    }

    fn get_byte(&self, pos: usize) -> Result<i8> {
        self.integral(pos, "byte").map(|v| v as i8)
    }

    fn get_short(&self, pos: usize) -> Result<i16> {
        self.integral(pos, "short").map(|v| v as i16)
    }

    fn get_int(&self, pos: usize) -> Result<i32> {
        let value = self.integral(pos, "int")?;
        i32::try_from(value).map_err(|_| {
            OrmLiteError::Conversion(format!("column {pos}: {value} is out of range for int"))
        })
    }

    fn get_long(&self, pos: usize) -> Result<i64> {
        self.integral(pos, "long")
    }

    fn get_float(&self, pos: usize) -> Result<f32> {
        self.floating(pos, "float").map(|v| v as f32)
    }

    fn get_double(&self, pos: usize) -> Result<f64> {
        self.floating(pos, "double")
    }

    fn get_bytes(&self, pos: usize) -> Result<Vec<u8>> {
        let value = self.current(pos)?;
        match value {
            SqlValue::Null => Ok(Vec::new()),
            SqlValue::Bytes(b) => Ok(b.clone()),
            SqlValue::Text(s) => Ok(s.as_bytes().to_vec()),
            other => Err(mismatch(pos, "bytes", other)),
        }
    }

    fn get_timestamp(&self, pos: usize) -> Result<NaiveDateTime> {
        let value = self.current(pos)?;
        match value {
            SqlValue::Timestamp(t) => Ok(*t),
            SqlValue::Text(s) => NaiveDateTime::parse_from_str(s.trim(), TIMESTAMP_FORMAT)
                .map_err(|_| mismatch(pos, "timestamp", value)),
            SqlValue::Long(millis) => DateTime::from_timestamp_millis(*millis)
                .map(|t| t.naive_utc())
                .ok_or_else(|| mismatch(pos, "timestamp", value)),
            other => Err(mismatch(pos, "timestamp", other)),
        }
    }

    fn get_big_decimal(&self, pos: usize) -> Result<Decimal> {
        let value = self.current(pos)?;
        match value {
            SqlValue::Null => Ok(Decimal::ZERO),
            SqlValue::Decimal(d) => Ok(*d),
            SqlValue::Text(s) => s.trim().parse().map_err(|_| mismatch(pos, "decimal", value)),
            SqlValue::Float(f) => {
                Decimal::try_from(*f).map_err(|_| mismatch(pos, "decimal", value))
            }
            SqlValue::Double(d) => {
                Decimal::try_from(*d).map_err(|_| mismatch(pos, "decimal", value))
            }
            other => other
                .as_i64()
                .map(Decimal::from)
                .ok_or_else(|| mismatch(pos, "decimal", other)),
        }
    }

    fn get_uuid(&self, pos: usize) -> Result<Uuid> {
        let value = self.current(pos)?;
        match value {
            SqlValue::Uuid(u) => Ok(*u),
            SqlValue::Text(s) => Uuid::parse_str(s.trim()).map_err(|_| mismatch(pos, "uuid", value)),
            SqlValue::Bytes(b) => Uuid::from_slice(b).map_err(|_| mismatch(pos, "uuid", value)),
            other => Err(mismatch(pos, "uuid", other)),
        }
    }

    fn get_object(&self, pos: usize) -> Result<SqlValue> {
        self.current(pos).cloned()
    }

    fn is_null(&self, pos: usize) -> Result<bool> {
        Ok(self.current(pos)?.is_null())
    }

    fn close(&mut self) -> Result<()> {
        self.closed = true;
        Ok(())
    }
}
