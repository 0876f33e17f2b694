use std::error;
use std::fmt;
use std::io;

/// SQL lexer errors
///
/// Scanning never fails: malformed input surfaces as
/// [`TokenType::Error`](crate::TokenType::Error),
/// [`TokenType::IncompleteString`](crate::TokenType::IncompleteString) or
/// [`TokenType::Unknown`](crate::TokenType::Unknown) tokens.
/// These errors only cover the surface around the scanner.
#[non_exhaustive]
#[derive(Debug)]
pub enum Error {
    /// I/O Error (the streaming worker could not be spawned)
    Io(io::Error),
    /// Dialect name not recognized
    UnknownDialect(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(ref err) => err.fmt(f),
            Self::UnknownDialect(name) => write!(f, "unknown dialect: {name:?}"),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Io(ref err) => Some(err),
            Self::UnknownDialect(_) => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}
