//! Tracing utilities for statement and conversion observability.
//!
//! Enable the `tracing` feature to emit events via the `tracing` crate.
//! These macros no-op when the feature is disabled, avoiding `#[cfg]` boilerplate
//! at every call site.

/// Emit a debug-level tracing event with the SQL text and argument count.
///
/// ```ignore
/// ormlite_trace_query!(&sql, args.len());
/// ```
#[macro_export]
macro_rules! ormlite_trace_query {
    ($sql:expr, $arg_count:expr) => {
        #[cfg(feature = "tracing")]
        tracing::debug!(sql = %$sql, args = $arg_count, "ormlite.query");
    };
}

/// Emit a trace-level event for a single field conversion.
///
/// ```ignore
/// ormlite_trace_convert!("result_to_java", field.column_name(), pos);
/// ```
#[macro_export]
macro_rules! ormlite_trace_convert {
    ($op:literal, $column:expr, $pos:expr) => {
        #[cfg(feature = "tracing")]
        tracing::trace!(op = $op, column = %$column, pos = $pos, "ormlite.convert");
    };
}
