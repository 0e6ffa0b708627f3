//! Recursive-descent parser for the drift expression grammar:
//!
//! ```text
//! expr       := let_expr | if_expr | lambda_expr | app_expr
//! let_expr   := 'let' IDENT '=' expr 'in' expr
//! if_expr    := 'if' expr 'then' expr 'else' expr
//! lambda_expr:= '\' IDENT '->' expr
//! app_expr   := atom+                 (left-associative)
//! atom       := INT | 'true' | 'false' | STRING | IDENT | '(' expr ')'
//! ```

use drift_common::Span;
use drift_lexer::{Lexer, Token, TokenKind};

use crate::ast::{Expr, ExprKind};
use crate::error::ParseError;

/// Parse a complete expression from source text.
///
/// Fails if the expression does not consume the entire input (trailing
/// tokens are a parse error), matching a one-expression-per-program model.
pub fn parse_expr(source: &str) -> Result<Expr, ParseError> {
    let tokens = Lexer::tokenize(source);
    let mut parser = Parser::new(source, tokens);
    let expr = parser.expr()?;
    parser.expect_eof()?;
    Ok(expr)
}

struct Parser<'src> {
    source: &'src str,
    tokens: Vec<Token>,
    pos: usize,
}

impl<'src> Parser<'src> {
    fn new(source: &'src str, tokens: Vec<Token>) -> Self {
        Self {
            source,
            tokens,
            pos: 0,
        }
    }

    fn current(&self) -> Token {
        self.tokens[self.pos]
    }

    fn text(&self, token: Token) -> &'src str {
        &self.source[token.span.start as usize..token.span.end as usize]
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.current().kind == kind
    }

    fn bump(&mut self) -> Token {
        let token = self.current();
        if token.kind != TokenKind::Eof {
            self.pos += 1;
        }
        token
    }

    fn expect(&mut self, kind: TokenKind, what: &str) -> Result<Token, ParseError> {
        if self.at(kind) {
            Ok(self.bump())
        } else {
            let found = self.current();
            Err(ParseError::new(
                format!("expected {what}, found {:?}", found.kind),
                found.span,
            ))
        }
    }

    fn expect_eof(&mut self) -> Result<(), ParseError> {
        if self.at(TokenKind::Eof) {
            Ok(())
        } else {
            let found = self.current();
            Err(ParseError::new(
                format!("unexpected trailing input: {:?}", found.kind),
                found.span,
            ))
        }
    }

    fn expect_ident(&mut self, what: &str) -> Result<(String, Span), ParseError> {
        let token = self.expect(TokenKind::Ident, what)?;
        Ok((self.text(token).to_string(), token.span))
    }

    // ── Expressions ────────────────────────────────────────────────────

    fn expr(&mut self) -> Result<Expr, ParseError> {
        match self.current().kind {
            TokenKind::Let => self.let_expr(),
            TokenKind::If => self.if_expr(),
            TokenKind::Backslash => self.lambda_expr(),
            _ => self.app_expr(),
        }
    }

    fn let_expr(&mut self) -> Result<Expr, ParseError> {
        let start = self.bump().span; // 'let'
        let (name, _) = self.expect_ident("a variable name after `let`")?;
        self.expect(TokenKind::Eq, "`=` after the `let` binding name")?;
        let bound = self.expr()?;
        self.expect(TokenKind::In, "`in` after a `let` binding")?;
        let body = self.expr()?;
        let span = start.merge(body.span);
        Ok(Expr::new(
            span,
            ExprKind::Let {
                name,
                bound: Box::new(bound),
                body: Box::new(body),
            },
        ))
    }

    fn if_expr(&mut self) -> Result<Expr, ParseError> {
        let start = self.bump().span; // 'if'
        let cond = self.expr()?;
        self.expect(TokenKind::Then, "`then` after an `if` condition")?;
        let then_branch = self.expr()?;
        self.expect(TokenKind::Else, "`else` after the `then` branch")?;
        let else_branch = self.expr()?;
        let span = start.merge(else_branch.span);
        Ok(Expr::new(
            span,
            ExprKind::If {
                cond: Box::new(cond),
                then_branch: Box::new(then_branch),
                else_branch: Box::new(else_branch),
            },
        ))
    }

    fn lambda_expr(&mut self) -> Result<Expr, ParseError> {
        let start = self.bump().span; // '\'
        let (param, _) = self.expect_ident("a parameter name after `\\`")?;
        self.expect(TokenKind::Arrow, "`->` after a lambda parameter")?;
        let body = self.expr()?;
        let span = start.merge(body.span);
        Ok(Expr::new(
            span,
            ExprKind::Lambda {
                param,
                body: Box::new(body),
            },
        ))
    }

    /// Left-associative juxtaposition: `f a b c` parses as `((f a) b) c`.
    fn app_expr(&mut self) -> Result<Expr, ParseError> {
        let mut result = self.atom()?;
        while starts_atom(self.current().kind) {
            let arg = self.atom()?;
            let span = result.span.merge(arg.span);
            result = Expr::new(
                span,
                ExprKind::App {
                    func: Box::new(result),
                    arg: Box::new(arg),
                },
            );
        }
        Ok(result)
    }

    fn atom(&mut self) -> Result<Expr, ParseError> {
        let token = self.current();
        match token.kind {
            TokenKind::Int => {
                self.bump();
                let text = self.text(token);
                let value: i64 = text.parse().map_err(|_| {
                    ParseError::new(format!("invalid integer literal `{text}`"), token.span)
                })?;
                Ok(Expr::new(token.span, ExprKind::IntLit(value)))
            }
            TokenKind::True => {
                self.bump();
                Ok(Expr::new(token.span, ExprKind::BoolLit(true)))
            }
            TokenKind::False => {
                self.bump();
                Ok(Expr::new(token.span, ExprKind::BoolLit(false)))
            }
            TokenKind::Str => {
                self.bump();
                let text = self.text(token);
                // Strip the surrounding quotes; no escape processing.
                let body = &text[1..text.len() - 1];
                Ok(Expr::new(token.span, ExprKind::StringLit(body.to_string())))
            }
            TokenKind::Ident => {
                self.bump();
                Ok(Expr::new(
                    token.span,
                    ExprKind::Var(self.text(token).to_string()),
                ))
            }
            TokenKind::LParen => {
                self.bump();
                let inner = self.expr()?;
                let close = self.expect(TokenKind::RParen, "a closing `)`")?;
                Ok(Expr::new(token.span.merge(close.span), inner.kind))
            }
            _ => Err(ParseError::new(
                format!("expected an expression, found {:?}", token.kind),
                token.span,
            )),
        }
    }
}

fn starts_atom(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Int
            | TokenKind::True
            | TokenKind::False
            | TokenKind::Str
            | TokenKind::Ident
            | TokenKind::LParen
    )
}
