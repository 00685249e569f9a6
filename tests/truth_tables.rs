//! End-to-end tests: expression text in, truth table out.

use truth_table::{
    truth_table, truth_table_with, Assignment, Error, EvalConfig, QueryPermutation, SyntaxError,
    SyntaxErrorKind,
};

/// Builds the expected rows from a compact table: each row holds the inputs
/// followed by the result.
fn expected(variables: &[&str], table: &[&[bool]]) -> Vec<QueryPermutation> {
    assert_eq!(table.len(), 1usize << variables.len());
    let names: Vec<String> = variables.iter().map(|v| v.to_string()).collect();
    table
        .iter()
        .map(|row| {
            let (inputs, output) = row.split_at(row.len() - 1);
            assert_eq!(inputs.len(), variables.len());
            QueryPermutation {
                assignment: Assignment::new(names.clone(), inputs.to_vec()),
                value: output[0],
            }
        })
        .collect()
}

fn check(expression: &str, variables: &[&str], table: &[&[bool]]) {
    let result = truth_table(expression).unwrap();
    assert_eq!(result.variables(), variables, "variables of {:?}", expression);
    assert_eq!(result.rows(), expected(variables, table), "rows of {:?}", expression);
}

const F: bool = false;
const T: bool = true;

// ─── Two Variables ─────────────────────────────────────────────────────────────

#[test]
fn p_and_q() {
    check("p and q", &["p", "q"], &[&[F, F, F], &[F, T, F], &[T, F, F], &[T, T, T]]);
}

#[test]
fn not_p_and_q() {
    check("not p and q", &["p", "q"], &[&[F, F, F], &[F, T, T], &[T, F, F], &[T, T, F]]);
}

#[test]
fn p_or_q() {
    check("p or q", &["p", "q"], &[&[F, F, F], &[F, T, T], &[T, F, T], &[T, T, T]]);
}

#[test]
fn p_xor_q() {
    check("p xor q", &["p", "q"], &[&[F, F, F], &[F, T, T], &[T, F, T], &[T, T, F]]);
}

#[test]
fn p_and_not_q() {
    check("p and not q", &["p", "q"], &[&[F, F, F], &[F, T, F], &[T, F, T], &[T, T, F]]);
}

#[test]
fn p_or_not_q() {
    check("p or not q", &["p", "q"], &[&[F, F, T], &[F, T, F], &[T, F, T], &[T, T, T]]);
}

#[test]
fn not_p_or_q() {
    check("not p or q", &["p", "q"], &[&[F, F, T], &[F, T, T], &[T, F, F], &[T, T, T]]);
}

#[test]
fn not_p_xor_q() {
    check("not p xor q", &["p", "q"], &[&[F, F, T], &[F, T, F], &[T, F, F], &[T, T, T]]);
}

#[test]
fn not_p_and_not_q() {
    check("not p and not q", &["p", "q"], &[&[F, F, T], &[F, T, F], &[T, F, F], &[T, T, F]]);
}

// ─── Three Variables ───────────────────────────────────────────────────────────

#[test]
fn p_and_q_and_s() {
    check(
        "p and q and s",
        &["p", "q", "s"],
        &[
            &[F, F, F, F],
            &[F, F, T, F],
            &[F, T, F, F],
            &[F, T, T, F],
            &[T, F, F, F],
            &[T, F, T, F],
            &[T, T, F, F],
            &[T, T, T, T],
        ],
    );
}

#[test]
fn p_and_q_and_not_s() {
    check(
        "p and q and not s",
        &["p", "q", "s"],
        &[
            &[F, F, F, F],
            &[F, F, T, F],
            &[F, T, F, F],
            &[F, T, T, F],
            &[T, F, F, F],
            &[T, F, T, F],
            &[T, T, F, T],
            &[T, T, T, F],
        ],
    );
}

#[test]
fn p_and_not_q_and_s() {
    check(
        "p and not q and s",
        &["p", "q", "s"],
        &[
            &[F, F, F, F],
            &[F, F, T, F],
            &[F, T, F, F],
            &[F, T, T, F],
            &[T, F, F, F],
            &[T, F, T, T],
            &[T, T, F, F],
            &[T, T, T, F],
        ],
    );
}

#[test]
fn p_and_not_paren_q_and_s() {
    check(
        "p and not (q and s)",
        &["p", "q", "s"],
        &[
            &[F, F, F, F],
            &[F, F, T, F],
            &[F, T, F, F],
            &[F, T, T, F],
            &[T, F, F, T],
            &[T, F, T, T],
            &[T, T, F, T],
            &[T, T, T, F],
        ],
    );
}

#[test]
fn not_p_and_q_and_s() {
    check(
        "not p and q and s",
        &["p", "q", "s"],
        &[
            &[F, F, F, F],
            &[F, F, T, F],
            &[F, T, F, F],
            &[F, T, T, T],
            &[T, F, F, F],
            &[T, F, T, F],
            &[T, T, F, F],
            &[T, T, T, F],
        ],
    );
}

// ─── Row Counts and Order ──────────────────────────────────────────────────────

#[test]
fn row_counts() {
    assert_eq!(truth_table("p and q").unwrap().len(), 4);
    assert_eq!(truth_table("p and q or r xor s").unwrap().len(), 16);
    assert_eq!(truth_table("p and q or r xor s or p or q").unwrap().len(), 16);
}

#[test]
fn repeated_variables_collapse() {
    let table = truth_table("p and q or p or q").unwrap();
    assert_eq!(table.variables(), ["p", "q"]);
    assert_eq!(table.len(), 4);
}

#[test]
fn row_index_is_binary_with_first_variable_most_significant() {
    let table = truth_table("a xor (b or c) and not d").unwrap();
    let n = table.variables().len();
    assert_eq!(n, 4);
    for (i, row) in table.rows().iter().enumerate() {
        let bits: Vec<bool> = (0..n).map(|k| (i >> (n - 1 - k)) & 1 == 1).collect();
        assert_eq!(row.assignment.values(), bits.as_slice());
        assert_eq!(row.assignment.names(), table.variables());
    }
}

#[test]
fn evaluation_is_idempotent() {
    let text = "p xor not (q or s) and p";
    assert_eq!(truth_table(text).unwrap(), truth_table(text).unwrap());
}

// ─── Errors ────────────────────────────────────────────────────────────────────

#[test]
fn syntax_errors() {
    for text in ["p and", "", "p andq", "(p", "p)", "not", "p or and q", "p & q"] {
        match truth_table(text) {
            Err(Error::Syntax(_)) => {}
            other => panic!("expected syntax error for {:?}, got {:?}", text, other),
        }
    }
}

#[test]
fn identifiers_take_only_ascii_digits() {
    for text in ["p² and q٣", "x٣", "q and ٣", "p or x²1"] {
        match truth_table(text) {
            Err(Error::Syntax(SyntaxError {
                kind: SyntaxErrorKind::UnexpectedChar(_),
                ..
            })) => {}
            other => panic!("expected unexpected character in {:?}, got {:?}", text, other),
        }
    }
    let result = truth_table("x1 and x2").unwrap();
    assert_eq!(result.variables(), ["x1", "x2"]);
}

#[test]
fn deep_nesting_is_a_syntax_error() {
    let texts = [
        format!("{}p{}", "(".repeat(100_000), ")".repeat(100_000)),
        format!("{}p", "not ".repeat(100_000)),
        vec!["p"; 100_000].join(" xor "),
    ];
    for text in &texts {
        match truth_table(text) {
            Err(Error::Syntax(SyntaxError {
                kind: SyntaxErrorKind::TooDeep,
                ..
            })) => {}
            other => panic!("expected too deep error, got {:?}", other.map(|t| t.len())),
        }
    }
}

#[test]
fn too_many_variables() {
    let text = (0..21).map(|i| format!("x{}", i)).collect::<Vec<_>>().join(" and ");
    assert_eq!(
        truth_table(&text).unwrap_err(),
        Error::TooManyVariables { count: 21, limit: 20 }
    );

    let config = EvalConfig::default().with_max_variables(3);
    assert!(truth_table_with("p or q or r", &config).is_ok());
    assert!(truth_table_with("p or q or r or s", &config).is_err());
}
