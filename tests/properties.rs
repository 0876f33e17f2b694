use proptest::prelude::*;
use sqllexer::{Dialect, Lexer, Token, TokenType};

const DIALECTS: [Dialect; 5] = [
    Dialect::Generic,
    Dialect::Oracle,
    Dialect::SqlServer,
    Dialect::MySql,
    Dialect::Postgres,
];

fn dialect() -> impl Strategy<Value = Dialect> {
    prop::sample::select(DIALECTS.to_vec())
}

/// Mostly SQL punctuation, quotes and sigils so that every sub-scanner gets hit
fn sqlish() -> impl Strategy<Value = String> {
    "[-+*/=<>!|?:@#$'\"`\\[\\]().,;0-9a-fA-FxXeE_ \n\tü€\\\\]{0,64}"
}

fn check_coverage(sql: &str, dialect: Dialect) -> Result<(), TestCaseError> {
    let tokens = Lexer::with_dialect(sql, dialect).scan_all();
    let joined: String = tokens.iter().map(|t| &*t.value).collect();
    prop_assert_eq!(&joined, sql);
    for token in &tokens {
        prop_assert!(!token.value.is_empty(), "empty token {}", token);
        prop_assert_ne!(token.token_type, TokenType::Eof);
    }
    prop_assert!(tokens.len() <= sql.chars().count());
    Ok(())
}

proptest! {
    #[test]
    fn tokens_cover_any_input(sql in "\\PC*", dialect in dialect()) {
        check_coverage(&sql, dialect)?;
    }

    #[test]
    fn tokens_cover_sqlish_input(sql in sqlish(), dialect in dialect()) {
        check_coverage(&sql, dialect)?;
    }

    #[test]
    fn pull_and_eager_agree(sql in sqlish(), dialect in dialect()) {
        let pulled: Vec<Token<'_>> = Lexer::with_dialect(&sql, dialect).collect();
        prop_assert_eq!(pulled, Lexer::with_dialect(&sql, dialect).scan_all());
    }

    #[test]
    fn stream_and_eager_agree(sql in sqlish(), dialect in dialect()) {
        let eager: Vec<Token<'static>> = Lexer::with_dialect(&sql, dialect)
            .scan_all()
            .into_iter()
            .map(Token::into_owned)
            .collect();
        let streamed: Vec<Token<'static>> = Lexer::with_dialect(&sql, dialect)
            .scan_all_tokens()
            .unwrap()
            .collect();
        prop_assert_eq!(streamed, eager);
    }
}
