use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrmLiteError {
    /// A default string or textual column did not match the type's grammar
    #[error("Parse error: {0}")]
    Parse(String),

    /// A wire value could not be turned into the field's native value (or back)
    #[error("Conversion error: {0}")]
    Conversion(String),

    /// Failure reported by a result cursor or the statement layer
    #[error("Data access error: {0}")]
    DataAccess(String),

    /// Malformed clause or statement composition
    #[error("Statement error: {0}")]
    Statement(String),

    /// Invalid field or table configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// TOML configuration could not be decoded
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Rusqlite specific errors
    #[cfg(feature = "rusqlite")]
    #[error("Rusqlite error: {0}")]
    Rusqlite(#[from] rusqlite::Error),
}

impl OrmLiteError {
    pub(crate) fn parse(field: &str, value: &str, expected: &str) -> Self {
        OrmLiteError::Parse(format!(
            "field '{field}': could not parse '{value}' as {expected}"
        ))
    }

    /// Same variant and message. TOML decode errors come back as `Config`,
    /// driver errors as `DataAccess`.
    pub(crate) fn reproduce(&self) -> Self {
        match self {
            OrmLiteError::Parse(msg) => OrmLiteError::Parse(msg.clone()),
            OrmLiteError::Conversion(msg) => OrmLiteError::Conversion(msg.clone()),
            OrmLiteError::DataAccess(msg) => OrmLiteError::DataAccess(msg.clone()),
            OrmLiteError::Statement(msg) => OrmLiteError::Statement(msg.clone()),
            OrmLiteError::Config(msg) => OrmLiteError::Config(msg.clone()),
            OrmLiteError::Toml(err) => OrmLiteError::Config(err.to_string()),
            #[cfg(feature = "rusqlite")]
            OrmLiteError::Rusqlite(err) => OrmLiteError::DataAccess(err.to_string()),
        }
    }

    pub(crate) fn unexpected_arg(field: &str, expected: &str, got: &crate::SqlValue) -> Self {
        OrmLiteError::Conversion(format!(
            "field '{field}': expected {expected} value but got {}",
            got.kind()
        ))
    }
}

/// Result type for mapping operations
pub type Result<T> = std::result::Result<T, OrmLiteError>;
