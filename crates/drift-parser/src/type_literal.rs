//! The type-literal surface, consumed only by tests via
//! [`parse_test_type`]. Shares the expression lexer: an `UpperIdent`
//! token denotes a `Base`, `u<digits>` denotes an `Unknown`, and `->` is
//! right-associative between atoms.

use drift_lexer::{Lexer, Token, TokenKind};
use drift_types::Ty;

use crate::error::ParseError;

/// Parse a type-literal string like `u1 -> Int` or `(A -> B) -> A` into a
/// [`Ty`].
pub fn parse_test_type(source: &str) -> Result<Ty, ParseError> {
    let tokens = Lexer::tokenize(source);
    let mut parser = TypeParser {
        source,
        tokens,
        pos: 0,
    };
    let ty = parser.func_type()?;
    parser.expect_eof()?;
    Ok(ty)
}

struct TypeParser<'src> {
    source: &'src str,
    tokens: Vec<Token>,
    pos: usize,
}

impl<'src> TypeParser<'src> {
    fn current(&self) -> Token {
        self.tokens[self.pos]
    }

    fn text(&self, token: Token) -> &'src str {
        &self.source[token.span.start as usize..token.span.end as usize]
    }

    fn bump(&mut self) -> Token {
        let token = self.current();
        if token.kind != TokenKind::Eof {
            self.pos += 1;
        }
        token
    }

    fn expect_eof(&mut self) -> Result<(), ParseError> {
        if self.current().kind == TokenKind::Eof {
            Ok(())
        } else {
            let found = self.current();
            Err(ParseError::new(
                format!("unexpected trailing input in type literal: {:?}", found.kind),
                found.span,
            ))
        }
    }

    /// `atom_type ('->' func_type)?`, right-associative.
    fn func_type(&mut self) -> Result<Ty, ParseError> {
        let arg = self.atom_type()?;
        if self.current().kind == TokenKind::Arrow {
            self.bump();
            let result = self.func_type()?;
            Ok(Ty::func(arg, result))
        } else {
            Ok(arg)
        }
    }

    fn atom_type(&mut self) -> Result<Ty, ParseError> {
        let token = self.current();
        match token.kind {
            TokenKind::Ident => {
                self.bump();
                let text = self.text(token);
                parse_type_atom_text(text, token.span)
            }
            TokenKind::LParen => {
                self.bump();
                let inner = self.func_type()?;
                let close_span = token.span;
                match self.current().kind {
                    TokenKind::RParen => {
                        self.bump();
                        Ok(inner)
                    }
                    _ => Err(ParseError::new(
                        "expected a closing `)` in type literal",
                        close_span,
                    )),
                }
            }
            _ => Err(ParseError::new(
                format!("expected a type, found {:?}", token.kind),
                token.span,
            )),
        }
    }
}

fn parse_type_atom_text(text: &str, span: drift_common::Span) -> Result<Ty, ParseError> {
    if let Some(digits) = text.strip_prefix('u') {
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            let id: u32 = digits
                .parse()
                .map_err(|_| ParseError::new(format!("unknown id too large: `{text}`"), span))?;
            return Ok(Ty::Unknown(id));
        }
    }
    if text.starts_with(|c: char| c.is_ascii_uppercase()) {
        Ok(Ty::base(text))
    } else {
        Err(ParseError::new(
            format!("`{text}` is not a valid type atom (expected `UpperIdent` or `uN`)"),
            span,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_base_types() {
        assert_eq!(parse_test_type("Int").unwrap(), Ty::int());
        assert_eq!(parse_test_type("Bool").unwrap(), Ty::bool());
        assert_eq!(parse_test_type("String").unwrap(), Ty::string());
    }

    #[test]
    fn parses_unknown() {
        assert_eq!(parse_test_type("u1").unwrap(), Ty::Unknown(1));
        assert_eq!(parse_test_type("u42").unwrap(), Ty::Unknown(42));
    }

    #[test]
    fn parses_right_associative_arrow() {
        let ty = parse_test_type("A -> B -> C").unwrap();
        assert_eq!(ty, Ty::func(Ty::base("A"), Ty::func(Ty::base("B"), Ty::base("C"))));
    }

    #[test]
    fn parens_group_left_side() {
        let ty = parse_test_type("(u1 -> u2) -> u1").unwrap();
        assert_eq!(
            ty,
            Ty::func(Ty::func(Ty::Unknown(1), Ty::Unknown(2)), Ty::Unknown(1))
        );
    }

    #[test]
    fn round_trips_through_display() {
        let ty = parse_test_type("u1 -> u2 -> u1").unwrap();
        assert_eq!(ty.to_string(), "u1 -> u2 -> u1");
    }

    #[test]
    fn rejects_lowercase_non_unknown_identifier() {
        assert!(parse_test_type("foo").is_err());
    }
}
