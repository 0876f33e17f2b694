use pretty_assertions::assert_eq;
use sqllexer::{Dialect, Lexer, Token, TokenType};

const QUERIES: &[(&str, Dialect)] = &[
    ("SELECT * FROM users where id = 1", Dialect::Generic),
    ("SELECT * FROM users where id = 1 and name = 'j", Dialect::Generic),
    ("SELECT * FROM users where id = $$test$$", Dialect::Postgres),
    ("SELECT [user] FROM [test].[table] WHERE [id] = @id", Dialect::SqlServer),
    ("SELECT `user` FROM t # trailing", Dialect::MySql),
    ("UPDATE t SET a = :a WHERE b = :1", Dialect::Oracle),
    ("", Dialect::Generic),
];

#[test]
fn stream_matches_eager_scan() {
    let _ = env_logger::try_init();
    for &(sql, dialect) in QUERIES {
        let eager: Vec<Token<'static>> = Lexer::with_dialect(sql, dialect)
            .scan_all()
            .into_iter()
            .map(Token::into_owned)
            .collect();
        let streamed: Vec<Token<'static>> = Lexer::with_dialect(sql, dialect)
            .scan_all_tokens()
            .unwrap()
            .collect();
        assert_eq!(streamed, eager, "{sql}");
    }
}

#[test]
fn stream_resumes_where_the_lexer_stopped() {
    let mut lexer = Lexer::new("SELECT 1");
    assert_eq!(lexer.next_token(), Token::new(TokenType::Identifier, "SELECT"));
    let rest: Vec<Token<'static>> = lexer.scan_all_tokens().unwrap().collect();
    assert_eq!(
        rest,
        vec![
            Token::new(TokenType::Whitespace, " "),
            Token::new(TokenType::Number, "1"),
        ]
    );
}

#[test]
fn dropping_a_stream_early_stops_the_worker() {
    let _ = env_logger::try_init();
    let sql = "SELECT a FROM t; ".repeat(1000);
    let mut stream = Lexer::new(&sql).scan_all_tokens().unwrap();
    assert_eq!(
        stream.next(),
        Some(Token::new(TokenType::Identifier, "SELECT"))
    );
    // joins the worker: would hang if it stayed blocked on the hand-off
    drop(stream);
}

#[test]
fn cancel_ends_the_stream() {
    let sql = "SELECT a FROM t; ".repeat(100);
    let mut stream = Lexer::new(&sql).scan_all_tokens().unwrap();
    assert!(stream.next().is_some());
    assert!(!stream.is_cancelled());
    stream.cancel();
    assert!(stream.is_cancelled());
    assert_eq!(stream.next(), None);
    assert_eq!(stream.next(), None);
}

#[test]
fn exhausted_stream_stays_exhausted() {
    let mut stream = Lexer::new("x").scan_all_tokens().unwrap();
    assert_eq!(stream.next(), Some(Token::new(TokenType::Identifier, "x")));
    assert_eq!(stream.next(), None);
    assert_eq!(stream.next(), None);
}
