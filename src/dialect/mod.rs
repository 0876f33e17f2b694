//! SQL dialects: token kinds, character classes and per-vendor rules

use std::fmt;

mod dbms;

pub use dbms::{Dialect, DialectConfig, DialectFlags};

/// Token classes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenType {
    /// Unterminated quoted identifier, block comment or dollar-quoted function
    Error,
    /// End of input (never emitted by the token streams)
    Eof,
    /// Run of whitespace
    Whitespace,
    /// `'...'`
    String,
    /// `'...` truncated before its closing quote
    IncompleteString,
    /// Decimal, hexadecimal, octal or scientific literal
    Number,
    /// Keyword or identifier (not distinguished)
    Identifier,
    /// `"..."`, `[...]` or `` `...` `` depending on the dialect
    QuotedIdentifier,
    /// Run of operator characters
    Operator,
    /// `*`
    Wildcard,
    /// `-- ...` or `# ...`
    Comment,
    /// `/* ... */`
    MultilineComment,
    /// Single punctuation character
    Punctuation,
    /// Identifier directly followed by `(`
    Function,
    /// `$func$ ... $func$`
    DollarQuotedFunction,
    /// `$tag$ ... $tag$`
    DollarQuotedString,
    /// `$1`
    PositionalParameter,
    /// `:name`, `@name`
    BindParameter,
    /// `@@name`
    SystemVariable,
    /// Anything else
    Unknown,
}

impl TokenType {
    /// Upper snake case name
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenType::Error => "ERROR",
            TokenType::Eof => "EOF",
            TokenType::Whitespace => "WHITESPACE",
            TokenType::String => "STRING",
            TokenType::IncompleteString => "INCOMPLETE_STRING",
            TokenType::Number => "NUMBER",
            TokenType::Identifier => "IDENTIFIER",
            TokenType::QuotedIdentifier => "QUOTED_IDENTIFIER",
            TokenType::Operator => "OPERATOR",
            TokenType::Wildcard => "WILDCARD",
            TokenType::Comment => "COMMENT",
            TokenType::MultilineComment => "MULTILINE_COMMENT",
            TokenType::Punctuation => "PUNCTUATION",
            TokenType::Function => "FUNCTION",
            TokenType::DollarQuotedFunction => "DOLLAR_QUOTED_FUNCTION",
            TokenType::DollarQuotedString => "DOLLAR_QUOTED_STRING",
            TokenType::PositionalParameter => "POSITIONAL_PARAMETER",
            TokenType::BindParameter => "BIND_PARAMETER",
            TokenType::SystemVariable => "SYSTEM_VARIABLE",
            TokenType::Unknown => "UNKNOWN",
        }
    }

    /// Whether this kind reports malformed input
    pub fn is_anomaly(&self) -> bool {
        matches!(
            self,
            TokenType::Error | TokenType::IncompleteString | TokenType::Unknown
        )
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opening and closing marker of a dollar-quoted function body
pub(crate) const DOLLAR_QUOTED_FUNCTION: &str = "$func$";

/// Whitespace, Unicode aware
pub fn is_whitespace(c: char) -> bool {
    c.is_whitespace()
}

/// Identifier start: any Unicode letter or `_`
pub fn is_letter(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

/// ASCII decimal digit
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Body of an identifier: letters, digits, `.` for dotted names and `?`
pub fn is_identifier_continue(c: char) -> bool {
    is_letter(c) || is_digit(c) || c == '.' || c == '?'
}

/// Body of a bind parameter or system variable name
pub(crate) fn is_parameter_continue(c: char) -> bool {
    is_letter(c) || is_digit(c)
}

/// `+` or `-`
pub fn is_leading_sign(c: char) -> bool {
    c == '+' || c == '-'
}

/// `e` or `E`
pub(crate) fn is_exponent(c: char) -> bool {
    c == 'e' || c == 'E'
}

/// `*`
pub fn is_wildcard(c: char) -> bool {
    c == '*'
}

/// Characters merged into multi-character operators
pub fn is_operator(c: char) -> bool {
    matches!(
        c,
        '+' | '-' | '*' | '/' | '=' | '<' | '>' | '!' | '&' | '|' | '^' | '%' | '~' | '@' | ':'
            | '#'
    )
}

/// Single character punctuation
pub fn is_punctuation(c: char) -> bool {
    matches!(c, '(' | ')' | ',' | ';' | '.' | '[' | ']' | '{' | '}')
}

/// `'`
pub fn is_single_quote(c: char) -> bool {
    c == '\''
}

/// `"`
pub fn is_double_quote(c: char) -> bool {
    c == '"'
}

/// Value of `c` as a hexadecimal digit, 16 when `c` is not one.
///
/// Hexadecimal and octal literals are scanned while this stays below the radix.
pub(crate) fn digit_val(c: Option<char>) -> u32 {
    c.and_then(|c| c.to_digit(16)).unwrap_or(16)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn letters_are_unicode_aware() {
        for c in ['a', 'Z', '_', 'é', 'ü', '世', 'こ', '안'] {
            assert!(is_letter(c), "{c:?}");
        }
        for c in ['1', '$', '"', ' ', '-'] {
            assert!(!is_letter(c), "{c:?}");
        }
    }

    #[test]
    fn question_mark_continues_identifiers_only() {
        assert!(is_identifier_continue('?'));
        assert!(!is_operator('?'));
        assert!(!is_punctuation('?'));
    }

    #[test]
    fn digit_values() {
        assert_eq!(digit_val(Some('7')), 7);
        assert_eq!(digit_val(Some('f')), 15);
        assert_eq!(digit_val(Some('F')), 15);
        assert_eq!(digit_val(Some('g')), 16);
        assert_eq!(digit_val(None), 16);
    }

    #[test]
    fn anomalies() {
        assert!(TokenType::Error.is_anomaly());
        assert!(TokenType::IncompleteString.is_anomaly());
        assert!(TokenType::Unknown.is_anomaly());
        assert!(!TokenType::String.is_anomaly());
    }

    #[test]
    fn display_names() {
        assert_eq!(TokenType::IncompleteString.to_string(), "INCOMPLETE_STRING");
        assert_eq!(TokenType::QuotedIdentifier.to_string(), "QUOTED_IDENTIFIER");
    }
}
