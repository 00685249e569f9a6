//! Surface syntax of expressions and the lexer for it.
//!
//! ```text
//! Expr        := OrExpr | AndExpr | XorExpr | PrimaryExpr
//! PrimaryExpr := NotExpr | "(" Expr ")" | Identifier
//! NotExpr     := "not " PrimaryExpr
//! OrExpr      := Expr "or " Expr
//! AndExpr     := Expr "and " Expr
//! XorExpr     := Expr "xor " Expr
//! Identifier  := letter (letter | digit)*   -- except reserved words
//! ```
//!
//! Keywords are case-insensitive and must be followed by whitespace.
//! A word is the maximal run of letters and ASCII digits `0`-`9`, so `andy` is
//! an identifier while `AND` is the keyword `and`. Other numeric characters,
//! such as `²`, are not part of any token.
//!
//! The grammar alone is ambiguous for chains like `p and q or r`;
//! see [`crate::parser`] for how the parser resolves that.

use std::fmt;
use std::iter::Peekable;
use std::str::CharIndices;

use log::trace;

use crate::error::{SyntaxError, SyntaxErrorKind};

/// Reserved words of the language.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Keyword {
    Not,
    And,
    Or,
    Xor,
}

impl Keyword {
    pub const ALL: [Keyword; 4] = [Keyword::Not, Keyword::And, Keyword::Or, Keyword::Xor];

    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Not => "not",
            Keyword::And => "and",
            Keyword::Or => "or",
            Keyword::Xor => "xor",
        }
    }

    /// Matches a whole word against the keywords, ignoring case.
    pub fn from_word(word: &str) -> Option<Keyword> {
        Self::ALL
            .into_iter()
            .find(|kw| kw.as_str().eq_ignore_ascii_case(word))
    }

    /// Returns `true` for the binary operators `and`, `or` and `xor`.
    pub(crate) fn is_binary(self) -> bool {
        !matches!(self, Keyword::Not)
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Token {
    LParen,
    RParen,
    Keyword(Keyword),
    Ident(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::LParen => write!(f, "'('"),
            Token::RParen => write!(f, "')'"),
            Token::Keyword(kw) => write!(f, "'{}'", kw),
            Token::Ident(name) => write!(f, "identifier '{}'", name),
        }
    }
}

/// A token together with the byte offset where it starts.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Spanned<T> {
    pub value: T,
    pub position: usize,
}

/// Splits `text` into tokens.
pub fn tokenize(text: &str) -> Result<Vec<Spanned<Token>>, SyntaxError> {
    let mut chars = text.char_indices().peekable();
    let mut tokens = Vec::new();

    while let Some(&(position, c)) = chars.peek() {
        let token = match c {
            c if c.is_whitespace() => {
                chars.next();
                continue;
            }
            '(' => {
                chars.next();
                Token::LParen
            }
            ')' => {
                chars.next();
                Token::RParen
            }
            c if is_word_char(c) => {
                let word = read_word(&mut chars);
                if c.is_ascii_digit() {
                    return Err(SyntaxError::new(
                        SyntaxErrorKind::InvalidIdentifier(word),
                        position,
                    ));
                }
                match Keyword::from_word(&word) {
                    Some(kw) => {
                        match chars.peek() {
                            Some(&(_, next)) if next.is_whitespace() => {}
                            Some(&(at, _)) => {
                                return Err(SyntaxError::new(
                                    SyntaxErrorKind::MissingWhitespaceAfter(kw),
                                    at,
                                ))
                            }
                            None => {
                                return Err(SyntaxError::new(
                                    SyntaxErrorKind::MissingWhitespaceAfter(kw),
                                    text.len(),
                                ))
                            }
                        }
                        Token::Keyword(kw)
                    }
                    None => Token::Ident(word),
                }
            }
            c => {
                return Err(SyntaxError::new(SyntaxErrorKind::UnexpectedChar(c), position));
            }
        };
        trace!("token {:?} at {}", token, position);
        tokens.push(Spanned { value: token, position });
    }

    Ok(tokens)
}

fn is_word_char(c: char) -> bool {
    c.is_alphabetic() || c.is_ascii_digit()
}

fn read_word(chars: &mut Peekable<CharIndices<'_>>) -> String {
    let mut word = String::new();
    while let Some(&(_, c)) = chars.peek() {
        if !is_word_char(c) {
            break;
        }
        word.push(c);
        chars.next();
    }
    word
}
