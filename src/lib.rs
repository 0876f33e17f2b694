//! Lossless SQL tokenizer.
//!
//! Splits arbitrary, possibly truncated SQL text into classified tokens
//! without parsing it. Every byte of the input ends up in exactly one token
//! and malformed input is reported in-band with [`TokenType::Error`],
//! [`TokenType::IncompleteString`] or [`TokenType::Unknown`] tokens.
//!
//! ```
//! use sqllexer::{Dialect, Lexer, TokenType};
//!
//! let tokens = Lexer::with_dialect("SELECT [id] FROM t", Dialect::SqlServer).scan_all();
//! assert_eq!(tokens[2].token_type, TokenType::QuotedIdentifier);
//! assert_eq!(tokens[2].value, "[id]");
//! ```
#![warn(missing_docs)]
#![warn(clippy::large_stack_frames)]

pub mod dialect;
mod error;
pub mod lexer;

pub use dialect::{Dialect, DialectConfig, DialectFlags};
pub use error::Error;
pub use lexer::{Lexer, Token, TokenStream, TokenType};

/// Scan `sql` eagerly with the rules of `dialect`
pub fn tokenize<D: Into<DialectConfig>>(sql: &str, dialect: D) -> Vec<Token<'_>> {
    Lexer::with_dialect(sql, dialect).scan_all()
}
