//! Evaluation of expression trees and truth table construction.
//!
//! [`TruthTable::evaluate`] runs the [`Eval`] implementation of a parsed
//! expression over every row of [`Assignments`], in enumeration order.
//! [`TruthTable::evaluate_with`] does the same after checking the variable
//! count against an [`EvalConfig`].

use std::fmt;

use log::{debug, trace};

use crate::assignment::{Assignment, Assignments};
use crate::ast::Expr;
use crate::error::Error;
use crate::parser::Parsed;

pub trait Eval {
    fn eval(&self, assignment: &Assignment) -> bool;
}

impl Expr {
    /// Evaluates the tree, returning `None` if some variable is missing from `assignment`.
    pub fn try_eval(&self, assignment: &Assignment) -> Option<bool> {
        Some(match self {
            Expr::Var(name) => assignment.get(name)?,
            Expr::Not(a) => !a.try_eval(assignment)?,
            Expr::And(a, b) => {
                let left = a.try_eval(assignment)?;
                let right = b.try_eval(assignment)?;
                left & right
            }
            Expr::Or(a, b) => {
                let left = a.try_eval(assignment)?;
                let right = b.try_eval(assignment)?;
                left | right
            }
            Expr::Xor(a, b) => {
                let left = a.try_eval(assignment)?;
                let right = b.try_eval(assignment)?;
                left ^ right
            }
            Expr::Paren(a) => a.try_eval(assignment)?,
        })
    }
}

impl Eval for Expr {
    /// # Panics
    ///
    /// Panics if the tree references a variable missing from `assignment`.
    fn eval(&self, assignment: &Assignment) -> bool {
        match self {
            Expr::Var(name) => assignment
                .get(name)
                .unwrap_or_else(|| panic!("Variable '{}' is not in the assignment", name)),
            Expr::Not(a) => !a.eval(assignment),
            Expr::And(a, b) => a.eval(assignment) & b.eval(assignment),
            Expr::Or(a, b) => a.eval(assignment) | b.eval(assignment),
            Expr::Xor(a, b) => a.eval(assignment) ^ b.eval(assignment),
            Expr::Paren(a) => a.eval(assignment),
        }
    }
}

impl Eval for Parsed {
    fn eval(&self, assignment: &Assignment) -> bool {
        self.expr().eval(assignment)
    }
}

/// Limits applied before building a truth table.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct EvalConfig {
    /// Maximum number of distinct variables, `None` for no limit.
    pub max_variables: Option<usize>,
}

impl EvalConfig {
    pub const DEFAULT_MAX_VARIABLES: usize = 20;

    pub fn unbounded() -> Self {
        Self { max_variables: None }
    }

    pub fn with_max_variables(mut self, max_variables: usize) -> Self {
        self.max_variables = Some(max_variables);
        self
    }
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            max_variables: Some(Self::DEFAULT_MAX_VARIABLES),
        }
    }
}

/// One row of a truth table.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct QueryPermutation {
    pub assignment: Assignment,
    pub value: bool,
}

/// All rows of a truth table, in enumeration order.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TruthTable {
    variables: Vec<String>,
    rows: Vec<QueryPermutation>,
}

impl TruthTable {
    /// Evaluates `parsed` under every assignment of its variables.
    ///
    /// Note: builds `2^n` rows, see [`TruthTable::evaluate_with`] for a bounded variant.
    pub fn evaluate(parsed: &Parsed) -> Self {
        let variables = parsed.variables().to_vec();
        debug!(
            "evaluate({}) over {} variables",
            parsed.expr(),
            variables.len()
        );

        let rows: Vec<QueryPermutation> = Assignments::new(variables.clone())
            .map(|assignment| {
                let value = parsed.eval(&assignment);
                trace!("{} -> {}", assignment, value);
                QueryPermutation { assignment, value }
            })
            .collect();

        debug!(
            "evaluate: {} rows, {} satisfying",
            rows.len(),
            rows.iter().filter(|r| r.value).count()
        );
        Self { variables, rows }
    }

    /// Like [`TruthTable::evaluate`], but refuses expressions with more
    /// variables than `config` allows.
    pub fn evaluate_with(parsed: &Parsed, config: &EvalConfig) -> Result<Self, Error> {
        if let Some(limit) = config.max_variables {
            let count = parsed.num_variables();
            if count > limit {
                return Err(Error::TooManyVariables { count, limit });
            }
        }
        Ok(Self::evaluate(parsed))
    }

    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    pub fn rows(&self) -> &[QueryPermutation] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<QueryPermutation> {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Result column.
    pub fn values(&self) -> impl Iterator<Item = bool> + '_ {
        self.rows.iter().map(|r| r.value)
    }

    /// Rows where the expression is true.
    pub fn satisfying(&self) -> impl Iterator<Item = &QueryPermutation> + '_ {
        self.rows.iter().filter(|r| r.value)
    }

    pub fn sat_count(&self) -> usize {
        self.satisfying().count()
    }

    pub fn is_tautology(&self) -> bool {
        self.values().all(|v| v)
    }

    pub fn is_contradiction(&self) -> bool {
        !self.values().any(|v| v)
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths: Vec<usize> = self.variables.iter().map(|v| v.chars().count()).collect();
        let cell = |value: bool| if value { "T" } else { "F" };

        for (name, width) in self.variables.iter().zip(&widths) {
            write!(f, "{:<w$} ", name, w = width)?;
        }
        writeln!(f, "| result")?;

        for row in &self.rows {
            for (&value, width) in row.assignment.values().iter().zip(&widths) {
                write!(f, "{:<w$} ", cell(value), w = width)?;
            }
            writeln!(f, "| {}", cell(row.value))?;
        }
        Ok(())
    }
}
