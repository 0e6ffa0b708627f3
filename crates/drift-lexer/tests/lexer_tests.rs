use drift_lexer::{Lexer, TokenKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    Lexer::tokenize(source).into_iter().map(|t| t.kind).collect()
}

#[test]
fn recursive_let_program_tokenizes() {
    let source = "let sum = \\x -> if eq_int x 0 then 0 else add x (sum (sub x 1)) in sum 3";
    let tokens = kinds(source);
    assert_eq!(tokens.first(), Some(&TokenKind::Let));
    assert_eq!(tokens.last(), Some(&TokenKind::Eof));
    assert!(tokens.contains(&TokenKind::If));
    assert!(tokens.contains(&TokenKind::Then));
    assert!(tokens.contains(&TokenKind::Else));
    assert!(tokens.contains(&TokenKind::Backslash));
    assert!(tokens.contains(&TokenKind::Arrow));
}

#[test]
fn type_literal_surface_tokenizes_with_same_lexer() {
    // `u1 -> Int` -- the type-literal surface reuses expression tokens.
    let tokens = kinds("u1 -> Int");
    assert_eq!(
        tokens,
        vec![
            TokenKind::Ident,
            TokenKind::Arrow,
            TokenKind::Ident,
            TokenKind::Eof
        ]
    );
}

#[test]
fn parenthesized_type_literal_tokenizes() {
    let tokens = kinds("(u1 -> u2) -> u1");
    assert_eq!(
        tokens,
        vec![
            TokenKind::LParen,
            TokenKind::Ident,
            TokenKind::Arrow,
            TokenKind::Ident,
            TokenKind::RParen,
            TokenKind::Arrow,
            TokenKind::Ident,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn string_literal_has_no_escape_processing() {
    // The opening/closing quotes are part of the token's span; the
    // parser is responsible for stripping them and not unescaping the body.
    let tokens = Lexer::tokenize(r#""a\nb""#);
    assert_eq!(tokens[0].kind, TokenKind::Str);
    assert_eq!(tokens[0].span.start, 0);
    assert_eq!(tokens[0].span.end, 6);
}
