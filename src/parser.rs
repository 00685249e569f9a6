//! Recursive descent parser for propositional expressions.
//!
//! # Operator policy
//!
//! The grammar offers `and`, `or` and `xor` as alternatives without any
//! precedence, so mixed chains are ambiguous. The parser resolves this with a
//! single fixed rule:
//!
//! - all three binary operators share one precedence level and are folded
//!   left to right: `p and q or r` is `(p and q) or r`,
//!   `p xor q and s` is `(p xor q) and s`;
//! - `not` applies to the primary directly after it: `not p and q` is
//!   `(not p) and q`, while `not (p and q)` negates the whole group;
//! - parentheses produce an explicit [`Expr::Paren`] node.
//!
//! ```text
//! expr    := primary (binop primary)*
//! primary := "not" primary | "(" expr ")" | ident
//! ```
//!
//! The whole input must be consumed. On failure no tree is returned.
//!
//! # Depth limit
//!
//! Parsing, evaluation and dropping of a tree all recurse over its height, so
//! trees higher than [`MAX_DEPTH`] are rejected with
//! [`SyntaxErrorKind::TooDeep`]. The height counts both nesting (`not`, `(`)
//! and the length of operator chains, since `p or q or r` folds into a left
//! spine of height 3.

use std::str::FromStr;

use log::debug;
use num_bigint::BigUint;

use crate::ast::Expr;
use crate::error::{SyntaxError, SyntaxErrorKind};
use crate::grammar::{tokenize, Keyword, Spanned, Token};

/// Maximum height of a parsed tree. A single variable has height 1.
pub const MAX_DEPTH: usize = 512;

/// Result of a successful parse: the tree and its distinct variables.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Parsed {
    expr: Expr,
    variables: Vec<String>,
}

impl Parsed {
    pub fn new(expr: Expr) -> Self {
        let variables = expr.variables();
        Self { expr, variables }
    }

    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    /// Distinct variable names in order of first occurrence.
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    /// Number of rows in the truth table, `2^n`.
    pub fn row_count(&self) -> BigUint {
        BigUint::from(1u32) << self.variables.len()
    }
}

impl FromStr for Parsed {
    type Err = SyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Parses `text` into a tree and collects its variables.
pub fn parse(text: &str) -> Result<Parsed, SyntaxError> {
    let tokens = tokenize(text)?;
    if tokens.is_empty() {
        return Err(SyntaxError::new(SyntaxErrorKind::EmptyInput, text.len()));
    }

    let mut parser = Parser {
        tokens: &tokens,
        pos: 0,
        end: text.len(),
        nesting: 0,
    };
    let (expr, _) = parser.expr()?;
    if let Some(token) = parser.peek() {
        let kind = match token.value {
            Token::RParen => SyntaxErrorKind::UnmatchedParen,
            ref other => SyntaxErrorKind::UnexpectedToken(other.to_string()),
        };
        return Err(SyntaxError::new(kind, token.position));
    }

    let parsed = Parsed::new(expr);
    debug!(
        "parse({:?}) -> {} with variables {:?}",
        text,
        parsed.expr(),
        parsed.variables()
    );
    Ok(parsed)
}

struct Parser<'a> {
    tokens: &'a [Spanned<Token>],
    pos: usize,
    /// Byte length of the input, reported for errors at end of input.
    end: usize,
    /// Open `not` and `(` levels on the call stack.
    nesting: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<&'a Spanned<Token>> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<&'a Spanned<Token>> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn expr(&mut self) -> Result<(Expr, usize), SyntaxError> {
        let (mut lhs, mut depth) = self.primary()?;

        while let Some(Spanned {
            value: Token::Keyword(kw),
            position,
        }) = self.peek()
        {
            let kw = *kw;
            if !kw.is_binary() {
                break;
            }
            self.next();
            let (rhs, rhs_depth) = self.primary()?;
            depth = check_depth(1 + depth.max(rhs_depth), *position)?;
            lhs = match kw {
                Keyword::And => Expr::and(lhs, rhs),
                Keyword::Or => Expr::or(lhs, rhs),
                Keyword::Xor => Expr::xor(lhs, rhs),
                Keyword::Not => unreachable!("'not' is not a binary operator"),
            };
        }

        Ok((lhs, depth))
    }

    fn primary(&mut self) -> Result<(Expr, usize), SyntaxError> {
        let Some(token) = self.next() else {
            return Err(SyntaxError::new(SyntaxErrorKind::MissingOperand, self.end));
        };

        match &token.value {
            Token::Ident(name) => Ok((Expr::var(name.as_str()), 1)),
            Token::Keyword(Keyword::Not) => {
                let (inner, depth) = self.nested(token.position, Self::primary)?;
                Ok((Expr::not(inner), check_depth(depth + 1, token.position)?))
            }
            Token::Keyword(kw) => Err(SyntaxError::new(
                SyntaxErrorKind::ReservedWord(*kw),
                token.position,
            )),
            Token::LParen => {
                let (inner, depth) = self.nested(token.position, Self::expr)?;
                match self.next() {
                    Some(Spanned {
                        value: Token::RParen,
                        ..
                    }) => Ok((Expr::paren(inner), check_depth(depth + 1, token.position)?)),
                    Some(other) => Err(SyntaxError::new(
                        SyntaxErrorKind::UnexpectedToken(other.value.to_string()),
                        other.position,
                    )),
                    None => Err(SyntaxError::new(SyntaxErrorKind::UnclosedParen, self.end)),
                }
            }
            Token::RParen => Err(SyntaxError::new(
                SyntaxErrorKind::UnmatchedParen,
                token.position,
            )),
        }
    }

    /// Runs `parse` one nesting level deeper, refusing to recurse past [`MAX_DEPTH`].
    fn nested<F>(&mut self, position: usize, parse: F) -> Result<(Expr, usize), SyntaxError>
    where
        F: FnOnce(&mut Self) -> Result<(Expr, usize), SyntaxError>,
    {
        if self.nesting >= MAX_DEPTH {
            return Err(SyntaxError::new(SyntaxErrorKind::TooDeep, position));
        }
        self.nesting += 1;
        let result = parse(self);
        self.nesting -= 1;
        result
    }
}

fn check_depth(depth: usize, position: usize) -> Result<usize, SyntaxError> {
    if depth > MAX_DEPTH {
        Err(SyntaxError::new(SyntaxErrorKind::TooDeep, position))
    } else {
        Ok(depth)
    }
}
