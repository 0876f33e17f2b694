//! Vendor specific lexical rules
use std::str::FromStr;

use bitflags::bitflags;
use uncased::UncasedStr;

use super::is_double_quote;
use crate::error::Error;

/// Target SQL dialect
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// `"` quoted identifiers, `--` comments, `@name` bind parameters
    #[default]
    Generic,
    /// `:name` bind parameters in addition to `@name`
    Oracle,
    /// `[...]` quoted identifiers and `#temp` tables
    SqlServer,
    /// `` `...` `` quoted identifiers and `#` comments
    MySql,
    /// Same rules as [`Dialect::Generic`]
    Postgres,
}

include!(concat!(env!("OUT_DIR"), "/dialects.rs"));

impl Dialect {
    /// Lookup a dialect by name (`mssql`, `MySQL`, `postgresql`, ...)
    pub fn from_name(name: &str) -> Option<Dialect> {
        DIALECTS.get(UncasedStr::new(name.trim())).copied()
    }

    /// Lexical rules of this dialect
    pub fn config(self) -> DialectConfig {
        match self {
            Dialect::Generic | Dialect::Postgres => DialectConfig::GENERIC,
            Dialect::Oracle => DialectConfig {
                flags: DialectFlags::COLON_BIND.union(DialectFlags::AT_BIND),
                ..DialectConfig::GENERIC
            },
            Dialect::SqlServer => DialectConfig {
                quotes: Some(('[', ']')),
                flags: DialectFlags::AT_BIND.union(DialectFlags::HASH_TEMP_TABLE),
                ..DialectConfig::GENERIC
            },
            Dialect::MySql => DialectConfig {
                quotes: Some(('`', '`')),
                comment_markers: &["--", "#"],
                flags: DialectFlags::AT_BIND,
            },
        }
    }
}

impl FromStr for Dialect {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dialect::from_name(s).ok_or_else(|| Error::UnknownDialect(s.to_owned()))
    }
}

impl From<Dialect> for DialectConfig {
    fn from(dialect: Dialect) -> Self {
        dialect.config()
    }
}

bitflags! {
    /// Sigil rules of a dialect
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct DialectFlags: u8 {
        /// `:name` and `:1` are bind parameters
        const COLON_BIND = 0x01;
        /// `@name` and `@1` are bind parameters
        const AT_BIND = 0x02;
        /// `#name` is a temporary table identifier
        const HASH_TEMP_TABLE = 0x04;
    }
}

/// Lexical rules consulted by the scanners.
///
/// Every dialect-dependent decision goes through this value: the scanners
/// never look at the [`Dialect`] it was built from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DialectConfig {
    /// Quoted identifier delimiters in addition to `"..."`
    pub quotes: Option<(char, char)>,
    /// Single-line comment markers
    pub comment_markers: &'static [&'static str],
    /// Sigil rules
    pub flags: DialectFlags,
}

impl DialectConfig {
    /// Rules shared by most dialects
    pub const GENERIC: DialectConfig = DialectConfig {
        quotes: None,
        comment_markers: &["--"],
        flags: DialectFlags::AT_BIND,
    };

    /// Closing delimiter of a quoted identifier opened by `c`
    pub fn closing_quote(&self, c: char) -> Option<char> {
        match self.quotes {
            _ if is_double_quote(c) => Some('"'),
            Some((open, close)) if open == c => Some(close),
            _ => None,
        }
    }

    /// Single-line comment marker starting `rest`, if any
    pub fn comment_marker(&self, rest: &str) -> Option<&'static str> {
        self.comment_markers
            .iter()
            .copied()
            .find(|marker| rest.starts_with(marker))
    }

    /// Whether `sigil` followed by a name is a bind parameter
    pub fn is_bind_sigil(&self, sigil: char) -> bool {
        match sigil {
            ':' => self.flags.contains(DialectFlags::COLON_BIND),
            '@' => self.flags.contains(DialectFlags::AT_BIND),
            _ => false,
        }
    }
}

impl Default for DialectConfig {
    fn default() -> Self {
        DialectConfig::GENERIC
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(Dialect::from_name("MSSQL"), Some(Dialect::SqlServer));
        assert_eq!(Dialect::from_name("MySql"), Some(Dialect::MySql));
        assert_eq!(Dialect::from_name(" oracle "), Some(Dialect::Oracle));
        assert_eq!(Dialect::from_name("PostgreSQL"), Some(Dialect::Postgres));
        assert_eq!(Dialect::from_name("sybase"), None);
    }

    #[test]
    fn unknown_dialect_error() {
        let err = "db2".parse::<Dialect>().unwrap_err();
        assert!(matches!(err, Error::UnknownDialect(ref name) if name == "db2"));
        assert_eq!(err.to_string(), "unknown dialect: \"db2\"");
    }

    #[test]
    fn quote_pairs() {
        let generic = Dialect::Generic.config();
        assert_eq!(generic.closing_quote('"'), Some('"'));
        assert_eq!(generic.closing_quote('['), None);
        assert_eq!(generic.closing_quote('`'), None);

        let mssql = Dialect::SqlServer.config();
        assert_eq!(mssql.closing_quote('['), Some(']'));
        assert_eq!(mssql.closing_quote('"'), Some('"'));

        let mysql = Dialect::MySql.config();
        assert_eq!(mysql.closing_quote('`'), Some('`'));
    }

    #[test]
    fn comment_markers() {
        assert_eq!(Dialect::Generic.config().comment_marker("-- x"), Some("--"));
        assert_eq!(Dialect::Generic.config().comment_marker("# x"), None);
        assert_eq!(Dialect::MySql.config().comment_marker("# x"), Some("#"));
        assert_eq!(Dialect::MySql.config().comment_marker("-x"), None);
    }

    #[test]
    fn bind_sigils() {
        assert!(Dialect::Oracle.config().is_bind_sigil(':'));
        assert!(Dialect::Oracle.config().is_bind_sigil('@'));
        assert!(Dialect::Generic.config().is_bind_sigil('@'));
        assert!(!Dialect::Generic.config().is_bind_sigil(':'));
    }
}
