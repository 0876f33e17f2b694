//! Fault-tolerant SQL tokenizer

mod scan;
pub mod sql;

pub use sql::{Lexer, Token, TokenStream, TokenType};
