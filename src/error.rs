//! Error types.
//!
//! Malformed input is reported as a [`SyntaxError`]. Evaluating against an
//! assignment that lacks a variable is a contract violation and panics instead.

use std::fmt;

use crate::grammar::Keyword;

/// What went wrong while lexing or parsing an expression.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum SyntaxErrorKind {
    /// The input contains no tokens at all.
    EmptyInput,
    /// A character that cannot start any token.
    UnexpectedChar(char),
    /// A word starting with a digit, e.g. `1p`.
    InvalidIdentifier(String),
    /// A keyword immediately followed by something other than whitespace.
    MissingWhitespaceAfter(Keyword),
    /// A reserved word in a position where a variable is expected.
    ReservedWord(Keyword),
    /// The input ended where an operand was expected.
    MissingOperand,
    /// A `(` without the matching `)`.
    UnclosedParen,
    /// A `)` without the matching `(`.
    UnmatchedParen,
    /// A token that cannot continue the expression.
    UnexpectedToken(String),
    /// The tree would be higher than [`crate::parser::MAX_DEPTH`].
    TooDeep,
}

/// Input text does not conform to the grammar.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    /// Byte offset into the input.
    pub position: usize,
}

impl SyntaxError {
    pub fn new(kind: SyntaxErrorKind, position: usize) -> Self {
        Self { kind, position }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "syntax error at {}: ", self.position)?;
        match &self.kind {
            SyntaxErrorKind::EmptyInput => write!(f, "empty expression"),
            SyntaxErrorKind::UnexpectedChar(c) => write!(f, "unexpected character {:?}", c),
            SyntaxErrorKind::InvalidIdentifier(word) => write!(f, "invalid identifier {:?}", word),
            SyntaxErrorKind::MissingWhitespaceAfter(kw) => {
                write!(f, "expected whitespace after '{}'", kw)
            }
            SyntaxErrorKind::ReservedWord(kw) => {
                write!(f, "reserved word '{}' cannot be used as a variable", kw)
            }
            SyntaxErrorKind::MissingOperand => write!(f, "expected an operand, found end of input"),
            SyntaxErrorKind::UnclosedParen => write!(f, "expected ')'"),
            SyntaxErrorKind::UnmatchedParen => write!(f, "unexpected ')'"),
            SyntaxErrorKind::UnexpectedToken(token) => write!(f, "unexpected {}", token),
            SyntaxErrorKind::TooDeep => write!(
                f,
                "expression is nested deeper than {} levels",
                crate::parser::MAX_DEPTH
            ),
        }
    }
}

impl std::error::Error for SyntaxError {}

/// Error type for building truth tables.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Error {
    /// The expression text is malformed.
    Syntax(SyntaxError),
    /// The expression has more distinct variables than the configured limit.
    TooManyVariables { count: usize, limit: usize },
}

impl From<SyntaxError> for Error {
    fn from(e: SyntaxError) -> Self {
        Error::Syntax(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Syntax(e) => write!(f, "{}", e),
            Error::TooManyVariables { count, limit } => write!(
                f,
                "expression has {} distinct variables, but at most {} are allowed",
                count, limit
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Syntax(e) => Some(e),
            Error::TooManyVariables { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn test_display_syntax_error() {
        let e = SyntaxError::new(SyntaxErrorKind::ReservedWord(Keyword::Xor), 4);
        assert_eq!(
            e.to_string(),
            "syntax error at 4: reserved word 'xor' cannot be used as a variable"
        );
    }

    #[test]
    fn test_display_too_deep() {
        let e = SyntaxError::new(SyntaxErrorKind::TooDeep, 2048);
        assert_eq!(
            e.to_string(),
            "syntax error at 2048: expression is nested deeper than 512 levels"
        );
    }

    #[test]
    fn test_error_source() {
        use std::error::Error as _;

        let e = Error::from(SyntaxError::new(SyntaxErrorKind::EmptyInput, 0));
        assert!(e.source().is_some());
        assert_eq!(e.to_string(), "syntax error at 0: empty expression");

        let e = Error::TooManyVariables { count: 30, limit: 20 };
        assert!(e.source().is_none());
    }
}
