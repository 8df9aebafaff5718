use sbasic::lang::token::*;
use sbasic::lang::{ErrorCode, Lexer};

fn tokens(s: &str) -> Vec<Token> {
    let mut lex = Lexer::new(s);
    let mut v = vec![];
    loop {
        match lex.next_token().unwrap() {
            Token::EndOfProgram => return v,
            t => v.push(t),
        }
    }
}

#[test]
fn test_statement() {
    assert_eq!(
        tokens("10 IF X>=10 THEN PRINT \"BIG\";X\r\n"),
        vec![
            Token::Number("10".to_string()),
            Token::Keyword(Keyword::If),
            Token::Variable("X".to_string()),
            Token::Delimiter(Delimiter::GreaterEqual),
            Token::Number("10".to_string()),
            Token::Keyword(Keyword::Then),
            Token::Keyword(Keyword::Print),
            Token::QuotedString("BIG".to_string()),
            Token::Delimiter(Delimiter::Semicolon),
            Token::Variable("X".to_string()),
            Token::EndOfLine,
        ]
    );
}

#[test]
fn test_tabs_are_whitespace() {
    assert_eq!(
        tokens("\tA\t=\t1"),
        vec![
            Token::Variable("A".to_string()),
            Token::Delimiter(Delimiter::Equal),
            Token::Number("1".to_string()),
        ]
    );
}

#[test]
fn test_string_keeps_inner_spaces() {
    assert_eq!(
        tokens("\"  A, B  \""),
        vec![Token::QuotedString("  A, B  ".to_string())]
    );
}

#[test]
fn test_missing_closing_quote() {
    let mut lex = Lexer::new("PRINT \"OOPS\nPRINT 1\n");
    lex.next_token().unwrap();
    assert_eq!(
        lex.next_token().unwrap_err().code(),
        ErrorCode::MissingClosingQuote
    );
}

#[test]
fn test_display() {
    let s: String = tokens("print a<>\"x\"")
        .iter()
        .map(|t| t.to_string())
        .collect();
    assert_eq!(s, "PRINTa<>\"x\"");
}
