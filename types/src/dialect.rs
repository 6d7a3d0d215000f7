//! Database dialect enum
//!
//! A single source of truth for dialect identification. Rendering conventions
//! (identifier quoting, placeholder syntax, limit/offset forms) and converter
//! selection hang off this tag in `ormlite-core`.

/// SQL dialect for database-specific behavior
///
/// # Examples
///
/// ```
/// use ormlite_types::Dialect;
///
/// let dialect = Dialect::PostgreSQL;
/// assert!(dialect.uses_numbered_placeholders());
///
/// let sqlite = Dialect::SQLite;
/// assert!(!sqlite.uses_numbered_placeholders());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Dialect {
    /// SQLite - uses `?` positional placeholders, no native boolean type
    #[default]
    SQLite,

    /// PostgreSQL - uses `$1, $2, ...` numbered placeholders
    PostgreSQL,

    /// MySQL - uses `?` positional placeholders and backtick identifiers
    MySQL,

    /// Apache Derby - no boolean type, rejects binding single characters
    Derby,

    /// H2 - uses `?` positional placeholders
    H2,
}

impl Dialect {
    /// Returns `true` if this dialect uses numbered placeholders (`$1, $2, ...`)
    #[inline]
    #[must_use]
    pub const fn uses_numbered_placeholders(&self) -> bool {
        matches!(self, Dialect::PostgreSQL)
    }

    /// Returns `true` if the dialect has no boolean column type and booleans
    /// must travel as a 0/1 byte.
    #[inline]
    #[must_use]
    pub const fn lacks_boolean_type(&self) -> bool {
        matches!(self, Dialect::SQLite | Dialect::MySQL | Dialect::Derby)
    }

    /// Returns `true` if the driver rejects binding a single character value.
    #[inline]
    #[must_use]
    pub const fn lacks_char_binding(&self) -> bool {
        matches!(self, Dialect::Derby)
    }

    /// Quote character used around table and column names.
    #[inline]
    #[must_use]
    pub const fn identifier_quote(&self) -> char {
        match self {
            Dialect::MySQL => '`',
            Dialect::SQLite | Dialect::PostgreSQL | Dialect::Derby | Dialect::H2 => '"',
        }
    }

    /// Parse a dialect from a string (case-insensitive)
    ///
    /// Supports common aliases:
    /// - SQLite: `"sqlite"`, `"android"`
    /// - PostgreSQL: `"postgresql"`, `"postgres"`, `"pg"`
    /// - MySQL: `"mysql"`, `"mariadb"`
    /// - Derby: `"derby"`
    /// - H2: `"h2"`
    ///
    /// # Examples
    ///
    /// ```
    /// use ormlite_types::Dialect;
    ///
    /// assert_eq!(Dialect::parse("sqlite"), Some(Dialect::SQLite));
    /// assert_eq!(Dialect::parse("pg"), Some(Dialect::PostgreSQL));
    /// assert_eq!(Dialect::parse("unknown"), None);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("sqlite") || s.eq_ignore_ascii_case("android") {
            Some(Dialect::SQLite)
        } else if s.eq_ignore_ascii_case("postgresql")
            || s.eq_ignore_ascii_case("postgres")
            || s.eq_ignore_ascii_case("pg")
        {
            Some(Dialect::PostgreSQL)
        } else if s.eq_ignore_ascii_case("mysql") || s.eq_ignore_ascii_case("mariadb") {
            Some(Dialect::MySQL)
        } else if s.eq_ignore_ascii_case("derby") {
            Some(Dialect::Derby)
        } else if s.eq_ignore_ascii_case("h2") {
            Some(Dialect::H2)
        } else {
            None
        }
    }

    /// Get the dialect name as a lowercase string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Dialect::SQLite => "sqlite",
            Dialect::PostgreSQL => "postgresql",
            Dialect::MySQL => "mysql",
            Dialect::Derby => "derby",
            Dialect::H2 => "h2",
        }
    }
}

impl core::fmt::Display for Dialect {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for Dialect {
    type Err = DialectParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dialect::parse(s).ok_or(DialectParseError)
    }
}

/// Error returned when parsing an unknown dialect string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialectParseError;

impl core::fmt::Display for DialectParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("unknown dialect")
    }
}

impl std::error::Error for DialectParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialect_parse() {
        assert_eq!(Dialect::parse("sqlite"), Some(Dialect::SQLite));
        assert_eq!(Dialect::parse("SQLite"), Some(Dialect::SQLite));
        assert_eq!(Dialect::parse("android"), Some(Dialect::SQLite));

        assert_eq!(Dialect::parse("postgresql"), Some(Dialect::PostgreSQL));
        assert_eq!(Dialect::parse("PG"), Some(Dialect::PostgreSQL));

        assert_eq!(Dialect::parse("mariadb"), Some(Dialect::MySQL));
        assert_eq!(Dialect::parse("Derby"), Some(Dialect::Derby));
        assert_eq!(Dialect::parse("h2"), Some(Dialect::H2));

        assert_eq!(Dialect::parse("unknown"), None);
        assert_eq!(Dialect::parse(""), None);
    }

    #[test]
    fn test_dialect_capabilities() {
        assert!(Dialect::SQLite.lacks_boolean_type());
        assert!(!Dialect::PostgreSQL.lacks_boolean_type());
        assert!(Dialect::Derby.lacks_char_binding());
        assert!(!Dialect::SQLite.lacks_char_binding());
        assert_eq!(Dialect::MySQL.identifier_quote(), '`');
        assert_eq!(Dialect::H2.identifier_quote(), '"');
    }

    #[test]
    fn test_dialect_display_roundtrip() {
        for dialect in [
            Dialect::SQLite,
            Dialect::PostgreSQL,
            Dialect::MySQL,
            Dialect::Derby,
            Dialect::H2,
        ] {
            assert_eq!(dialect.to_string().parse::<Dialect>(), Ok(dialect));
        }
    }
}
