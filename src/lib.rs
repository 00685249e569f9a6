//! # truth-table: truth tables for propositional expressions
//!
//! **`truth-table`** parses expressions such as `p and not (q and s)` and
//! evaluates them under every assignment of truth values to their variables.
//!
//! ## Basic Usage
//!
//! ```rust
//! use truth_table::truth_table;
//!
//! let table = truth_table("p and not (q and s)").unwrap();
//!
//! // Columns follow the order in which variables first appear.
//! assert_eq!(table.variables(), ["p", "q", "s"]);
//! assert_eq!(table.len(), 8);
//!
//! // Rows go FFF, FFT, ..., TTT, the first variable being the most significant.
//! let row = &table.rows()[4];
//! assert_eq!(row.assignment.values(), [true, false, false]);
//! assert!(row.value);
//! assert!(!table.rows()[7].value);
//! ```
//!
//! ## Language
//!
//! Variables are a letter followed by letters or digits. The operators are
//! `not`, `and`, `or` and `xor` (in any case), each followed by whitespace,
//! plus parentheses for grouping. Binary operators share one precedence level
//! and group from the left; see [`parser`] for details.
//!
//! ## Core Components
//!
//! - **[`grammar`]**: keywords, tokens and the lexer.
//! - **[`parser`]**: builds the [`Expr`] tree and collects the variables.
//! - **[`assignment`]**: assignments and their lazy enumeration.
//! - **[`eval`]**: evaluation and the [`TruthTable`] itself.

pub mod assignment;
pub mod ast;
pub mod error;
pub mod eval;
pub mod grammar;
pub mod parser;

pub use crate::assignment::{Assignment, Assignments};
pub use crate::ast::Expr;
pub use crate::error::{Error, SyntaxError, SyntaxErrorKind};
pub use crate::eval::{Eval, EvalConfig, QueryPermutation, TruthTable};
pub use crate::parser::{parse, Parsed};

/// Parses `text` and builds its truth table with the default [`EvalConfig`].
pub fn truth_table(text: &str) -> Result<TruthTable, Error> {
    truth_table_with(text, &EvalConfig::default())
}

/// Parses `text` and builds its truth table, subject to `config`.
pub fn truth_table_with(text: &str, config: &EvalConfig) -> Result<TruthTable, Error> {
    let parsed = parse(text)?;
    TruthTable::evaluate_with(&parsed, config)
}
