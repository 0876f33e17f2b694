//! SQL tokenizer.
//!
//! A single forward pass over the input: [`Lexer::next_token`] looks at the
//! current character (plus a few characters of lookahead) and hands over to
//! exactly one sub-scanner, which consumes at least one character unless the
//! input is exhausted. Tokens are never dropped, so concatenating their
//! values gives back the input.
use std::borrow::Cow;
use std::fmt;
use std::iter::FusedIterator;

use log::trace;
use memchr::{memchr, memchr2, memchr_iter, memmem};

pub use crate::dialect::TokenType;
use crate::dialect::{
    digit_val, is_digit, is_exponent, is_identifier_continue, is_leading_sign,
    is_letter, is_operator, is_parameter_continue, is_punctuation, is_single_quote,
    is_whitespace, is_wildcard, DialectConfig, DialectFlags, DOLLAR_QUOTED_FUNCTION,
};
use crate::lexer::scan::Scanner;

mod stream;

pub use stream::TokenStream;

/// A classified slice of the input
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token<'input> {
    /// Kind
    pub token_type: TokenType,
    /// Exact source text
    pub value: Cow<'input, str>,
}

impl<'input> Token<'input> {
    /// Constructor
    pub fn new<V: Into<Cow<'input, str>>>(token_type: TokenType, value: V) -> Token<'input> {
        Token {
            token_type,
            value: value.into(),
        }
    }

    /// Detach the token from the input it was scanned from
    pub fn into_owned(self) -> Token<'static> {
        Token {
            token_type: self.token_type,
            value: Cow::Owned(self.value.into_owned()),
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.token_type, self.value)
    }
}

/// SQL lexer.
///
/// Built once per input and consumed by one scan, either eagerly
/// ([`Lexer::scan_all`]), lazily (as an [`Iterator`]) or on a worker thread
/// ([`Lexer::scan_all_tokens`]).
#[derive(Debug)]
pub struct Lexer<'input> {
    scanner: Scanner<'input>,
    config: DialectConfig,
}

impl<'input> Lexer<'input> {
    /// Lexer for the generic dialect
    pub fn new(input: &'input str) -> Lexer<'input> {
        Self::with_dialect(input, DialectConfig::GENERIC)
    }

    /// Lexer for a [`Dialect`](crate::Dialect) or a custom [`DialectConfig`]
    pub fn with_dialect<D: Into<DialectConfig>>(input: &'input str, dialect: D) -> Lexer<'input> {
        Lexer {
            scanner: Scanner::new(input),
            config: dialect.into(),
        }
    }

    /// Lexical rules in use
    pub fn config(&self) -> &DialectConfig {
        &self.config
    }

    /// Scan the whole input.
    ///
    /// The end of input marker is not included.
    pub fn scan_all(self) -> Vec<Token<'input>> {
        #[cfg(feature = "extra_checks")]
        let rest = self.scanner.rest();
        let tokens: Vec<Token<'input>> = self.collect();
        #[cfg(feature = "extra_checks")]
        assert_eq!(tokens.iter().map(|t| &*t.value).collect::<String>(), rest);
        tokens
    }

    /// Scan the next token.
    ///
    /// Returns a [`TokenType::Eof`] token with an empty value once the input
    /// is exhausted, and keeps doing so.
    pub fn next_token(&mut self) -> Token<'input> {
        self.scanner.mark();
        let token_type = match self.scanner.peek() {
            None => TokenType::Eof,
            Some(c) => self.dispatch(c),
        };
        let value = self.scanner.lexeme();
        trace!(target: "scanner", "{} {:?}", token_type, value);
        Token::new(token_type, value)
    }

    /// Order matters: earlier arms win when several classes match.
    fn dispatch(&mut self, c: char) -> TokenType {
        match c {
            c if is_whitespace(c) => self.scan_whitespace(),
            c if is_letter(c) => self.scan_identifier(),
            c if self.config.closing_quote(c).is_some() => self.scan_quoted_identifier(c),
            c if is_single_quote(c) => self.scan_string(),
            _ if self.config.comment_marker(self.scanner.rest()).is_some() => {
                self.scan_single_line_comment()
            }
            '/' if self.scanner.look_ahead(1) == Some('*') => self.scan_multiline_comment(),
            c if is_leading_sign(c) => {
                // `x = -1` holds a number, `x-1` a subtraction
                let next = self.scanner.look_ahead(1);
                if (next.is_some_and(is_digit) || next == Some('.'))
                    && self.scanner.look_behind().map_or(true, is_whitespace)
                {
                    self.scan_number()
                } else {
                    self.scan_operator()
                }
            }
            c if is_digit(c) => self.scan_number(),
            c if is_wildcard(c) => self.scan_wildcard(),
            '$' => {
                if self.scanner.look_ahead(1).is_some_and(is_digit) {
                    self.scan_positional_parameter()
                } else if self.scanner.rest().starts_with(DOLLAR_QUOTED_FUNCTION) {
                    self.scan_dollar_quoted_function()
                } else {
                    self.scan_dollar_quoted_string()
                }
            }
            '#' if self.config.flags.contains(DialectFlags::HASH_TEMP_TABLE)
                && self.scanner.look_ahead(1).is_some_and(is_letter) =>
            {
                self.scan_temp_table()
            }
            '@' if self.scanner.look_ahead(1) == Some('@')
                && self.scanner.look_ahead(2).is_some_and(is_letter) =>
            {
                self.scan_system_variable()
            }
            c if self.config.is_bind_sigil(c)
                && self.scanner.look_ahead(1).is_some_and(is_parameter_continue) =>
            {
                self.scan_bind_parameter()
            }
            '?' => self.scan_placeholder(),
            c if is_operator(c) => self.scan_operator(),
            c if is_punctuation(c) => self.scan_punctuation(),
            _ => self.scan_unknown(),
        }
    }

    fn scan_whitespace(&mut self) -> TokenType {
        self.scanner.bump_while(is_whitespace);
        TokenType::Whitespace
    }

    fn scan_identifier(&mut self) -> TokenType {
        // keywords are identifiers too
        self.scanner.bump_while(is_identifier_continue);
        if self.scanner.peek() == Some('(') {
            TokenType::Function
        } else {
            TokenType::Identifier
        }
    }

    fn scan_temp_table(&mut self) -> TokenType {
        self.scanner.bump(); // #
        self.scanner.bump_while(is_identifier_continue);
        TokenType::Identifier
    }

    fn scan_bind_parameter(&mut self) -> TokenType {
        self.scanner.bump(); // : or @
        self.scanner.bump_while(is_parameter_continue);
        TokenType::BindParameter
    }

    fn scan_system_variable(&mut self) -> TokenType {
        self.scanner.bump_by(2); // @@
        self.scanner.bump_while(is_parameter_continue);
        TokenType::SystemVariable
    }

    /// `"a"`, `[a]`, `` `a` `` and dotted chains of them like `"a"."b"`
    fn scan_quoted_identifier(&mut self, open: char) -> TokenType {
        let close = match self.config.closing_quote(open) {
            Some(close) => close,
            None => return self.scan_unknown(),
        };
        let mut c = self.scanner.bump();
        loop {
            match c {
                Some(ch) if ch == close => {
                    if self.scanner.look_ahead(1) == Some('.')
                        && self.scanner.look_ahead(2) == Some(open)
                    {
                        c = self.scanner.bump_by(3);
                        continue;
                    }
                    break;
                }
                Some(_) => c = self.scanner.bump(),
                None => return TokenType::Error,
            }
        }
        self.scanner.bump();
        TokenType::QuotedIdentifier
    }

    /// `'...'` with `\'` and `\\` escapes
    fn scan_string(&mut self) -> TokenType {
        debug_assert_eq!(self.scanner.peek(), Some('\''));
        self.scanner.bump();
        loop {
            let rest = self.scanner.rest().as_bytes();
            match memchr2(b'\'', b'\\', rest) {
                Some(i) if rest[i] == b'\'' => {
                    self.scanner.consume(i + 1);
                    return TokenType::String;
                }
                Some(i) => {
                    let escaped = matches!(rest.get(i + 1), Some(b'\'' | b'\\'));
                    self.scanner.consume(if escaped { i + 2 } else { i + 1 });
                }
                None => {
                    // truncated input
                    self.scanner.bump_to_end();
                    return TokenType::IncompleteString;
                }
            }
        }
    }

    fn scan_number(&mut self) -> TokenType {
        let mut c = self.scanner.peek();
        if c == Some('0') {
            match self.scanner.look_ahead(1) {
                Some('x' | 'X') => return self.scan_hex_number(),
                Some('0'..='7') => return self.scan_octal_number(),
                _ => {}
            }
        }
        if c.is_some_and(is_leading_sign) {
            c = self.scanner.bump();
        }
        while let Some(d) = c.filter(|&d| is_digit(d) || d == '.' || is_exponent(d)) {
            c = self.scanner.bump();
            if is_exponent(d) && c.is_some_and(is_leading_sign) {
                c = self.scanner.bump();
            }
        }
        TokenType::Number
    }

    fn scan_hex_number(&mut self) -> TokenType {
        self.scanner.bump_by(2); // 0x
        while digit_val(self.scanner.peek()) < 16 {
            self.scanner.bump();
        }
        TokenType::Number
    }

    fn scan_octal_number(&mut self) -> TokenType {
        self.scanner.bump(); // 0
        while digit_val(self.scanner.peek()) < 8 {
            self.scanner.bump();
        }
        TokenType::Number
    }

    fn scan_single_line_comment(&mut self) -> TokenType {
        match memchr(b'\n', self.scanner.rest().as_bytes()) {
            Some(i) => self.scanner.consume(i),
            None => self.scanner.bump_to_end(),
        }
        TokenType::Comment
    }

    fn scan_multiline_comment(&mut self) -> TokenType {
        let body = &self.scanner.rest().as_bytes()[2..];
        match memmem::find(body, b"*/") {
            Some(i) => {
                self.scanner.consume(2 + i + 2);
                TokenType::MultilineComment
            }
            None => {
                self.scanner.bump_to_end();
                TokenType::Error
            }
        }
    }

    fn scan_positional_parameter(&mut self) -> TokenType {
        self.scanner.bump(); // $
        self.scanner.bump_while(is_digit);
        TokenType::PositionalParameter
    }

    fn scan_dollar_quoted_function(&mut self) -> TokenType {
        let marker = DOLLAR_QUOTED_FUNCTION.as_bytes();
        let body = &self.scanner.rest().as_bytes()[marker.len()..];
        match memmem::find(body, marker) {
            Some(i) => {
                self.scanner.consume(marker.len() + i + marker.len());
                TokenType::DollarQuotedFunction
            }
            None => {
                self.scanner.bump_to_end();
                TokenType::Error
            }
        }
    }

    /// `$$...$$` or `$tag$...$tag$`.
    ///
    /// Runs to end of input. Only the `$` are counted and the tags are not
    /// compared: exactly four make a closed string (so `$a$ x $b$` is
    /// accepted as well), any other count is `Unknown`.
    fn scan_dollar_quoted_string(&mut self) -> TokenType {
        debug_assert_eq!(self.scanner.peek(), Some('$'));
        let dollars = memchr_iter(b'$', self.scanner.rest().as_bytes()).count();
        self.scanner.bump_to_end();
        if dollars == 4 {
            TokenType::DollarQuotedString
        } else {
            TokenType::Unknown
        }
    }

    fn scan_operator(&mut self) -> TokenType {
        self.scanner.bump_while(is_operator);
        TokenType::Operator
    }

    /// `?` never merges with a neighbouring operator
    fn scan_placeholder(&mut self) -> TokenType {
        self.scanner.bump();
        TokenType::Operator
    }

    fn scan_wildcard(&mut self) -> TokenType {
        self.scanner.bump();
        TokenType::Wildcard
    }

    fn scan_punctuation(&mut self) -> TokenType {
        self.scanner.bump();
        TokenType::Punctuation
    }

    fn scan_unknown(&mut self) -> TokenType {
        self.scanner.bump();
        TokenType::Unknown
    }
}

impl<'input> Iterator for Lexer<'input> {
    type Item = Token<'input>;

    fn next(&mut self) -> Option<Token<'input>> {
        let token = self.next_token();
        if token.token_type == TokenType::Eof {
            None
        } else {
            Some(token)
        }
    }
}

impl FusedIterator for Lexer<'_> {}
