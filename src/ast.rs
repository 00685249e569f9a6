use std::collections::HashSet;
use std::fmt;

/// Parse tree of a propositional expression.
///
/// Built once by the parser and only read afterwards.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Expr {
    Var(String),
    Not(Box<Expr>),
    And(Box<Expr>, Box<Expr>),
    Or(Box<Expr>, Box<Expr>),
    Xor(Box<Expr>, Box<Expr>),
    Paren(Box<Expr>),
}

impl Expr {
    pub fn var(name: impl Into<String>) -> Self {
        Expr::Var(name.into())
    }

    pub fn not(value: Self) -> Self {
        Expr::Not(Box::new(value))
    }

    pub fn and(lhs: Self, rhs: Self) -> Self {
        Expr::And(Box::new(lhs), Box::new(rhs))
    }

    pub fn or(lhs: Self, rhs: Self) -> Self {
        Expr::Or(Box::new(lhs), Box::new(rhs))
    }

    pub fn xor(lhs: Self, rhs: Self) -> Self {
        Expr::Xor(Box::new(lhs), Box::new(rhs))
    }

    pub fn paren(inner: Self) -> Self {
        Expr::Paren(Box::new(inner))
    }
}

impl Expr {
    /// Distinct variable names in order of first occurrence.
    ///
    /// The tree is walked once, left to right. Later repeats of a name are skipped.
    pub fn variables(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut names = Vec::new();
        let mut stack = vec![self];

        while let Some(expr) = stack.pop() {
            match expr {
                Expr::Var(name) => {
                    if seen.insert(name.as_str()) {
                        names.push(name.clone());
                    }
                }
                Expr::Not(a) | Expr::Paren(a) => stack.push(a),
                Expr::And(a, b) | Expr::Or(a, b) | Expr::Xor(a, b) => {
                    // Right first, so that the left operand is visited first.
                    stack.push(b);
                    stack.push(a);
                }
            }
        }

        names
    }

    /// Number of nodes in the tree.
    pub fn size(&self) -> usize {
        match self {
            Expr::Var(_) => 1,
            Expr::Not(a) | Expr::Paren(a) => 1 + a.size(),
            Expr::And(a, b) | Expr::Or(a, b) | Expr::Xor(a, b) => 1 + a.size() + b.size(),
        }
    }

    /// Height of the tree. A single variable has depth 1.
    pub fn depth(&self) -> usize {
        match self {
            Expr::Var(_) => 1,
            Expr::Not(a) | Expr::Paren(a) => 1 + a.depth(),
            Expr::And(a, b) | Expr::Or(a, b) | Expr::Xor(a, b) => 1 + a.depth().max(b.depth()),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Var(name) => write!(f, "{}", name),
            Expr::Not(a) => write!(f, "not {}", a),
            Expr::And(a, b) => write!(f, "[{} and {}]", a, b),
            Expr::Or(a, b) => write!(f, "[{} or {}]", a, b),
            Expr::Xor(a, b) => write!(f, "[{} xor {}]", a, b),
            Expr::Paren(a) => write!(f, "({})", a),
        }
    }
}
