//! Assignments of truth values to variables, and their enumeration.
//!
//! # Enumeration order
//!
//! [`Assignments`] walks the full binary decision tree over the variables
//! depth-first, trying `false` before `true`, with the first variable at the
//! root. For `[p, q]` this gives `FF, FT, TF, TT`: row `i` is the binary
//! representation of `i` with the first variable as the most significant bit.
//!
//! # Example
//!
//! ```
//! use truth_table::assignment::Assignments;
//!
//! let rows: Vec<String> = Assignments::new(vec!["p".to_string(), "q".to_string()])
//!     .map(|a| a.to_string())
//!     .collect();
//! assert_eq!(rows, ["p=F q=F", "p=F q=T", "p=T q=F", "p=T q=T"]);
//! ```
//!
//! Note: there are `2^n` assignments, so use with caution on many variables.

use std::fmt;
use std::sync::Arc;

/// Total mapping from each known variable to a truth value.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Assignment {
    names: Arc<[String]>,
    values: Vec<bool>,
}

impl Assignment {
    /// Creates an assignment.
    ///
    /// # Panics
    ///
    /// Panics if `names` and `values` have different lengths.
    pub fn new(names: impl Into<Arc<[String]>>, values: Vec<bool>) -> Self {
        let names = names.into();
        assert_eq!(
            names.len(),
            values.len(),
            "Assignment must have exactly one value per variable"
        );
        Self { names, values }
    }

    /// Builds the `index`-th assignment in enumeration order.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 2^n`.
    pub fn from_index(names: impl Into<Arc<[String]>>, index: u128) -> Self {
        let names = names.into();
        let n = names.len();
        assert!(
            n >= 128 || index >> n == 0,
            "Index {} is out of range for {} variables",
            index,
            n
        );
        let values = (0..n)
            .map(|i| {
                let shift = n - 1 - i;
                shift < 128 && (index >> shift) & 1 == 1
            })
            .collect();
        Self { names, values }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn values(&self) -> &[bool] {
        &self.values
    }

    /// Value of the variable `name`, or `None` if it is not part of this assignment.
    pub fn get(&self, name: &str) -> Option<bool> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| self.values[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> + '_ {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}={}", name, if value { 'T' } else { 'F' })?;
        }
        Ok(())
    }
}

/// Decision taken for one variable on the exploration stack.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
enum Branch {
    /// Variable fixed to `false`, `true` still to be explored.
    Low,
    /// Variable fixed to `true`, both branches explored.
    High,
}

/// Lazy iterator over all assignments of a variable list.
///
/// Keeps one stack frame per variable instead of recursing. Each call to
/// `next` backtracks over exhausted `High` frames, flips the deepest `Low`
/// frame and refills the stack with `Low` frames.
#[derive(Debug, Clone)]
pub struct Assignments {
    names: Arc<[String]>,
    stack: Vec<Branch>,
    /// Rows emitted so far.
    emitted: u128,
    done: bool,
}

impl Assignments {
    pub fn new(names: impl Into<Arc<[String]>>) -> Self {
        let names = names.into();
        let stack = vec![Branch::Low; names.len()];
        Self {
            names,
            stack,
            emitted: 0,
            done: false,
        }
    }

    fn current(&self) -> Assignment {
        Assignment {
            names: Arc::clone(&self.names),
            values: self.stack.iter().map(|b| *b == Branch::High).collect(),
        }
    }

    /// Moves the stack to the next leaf. Returns `false` when the tree is exhausted.
    fn advance(&mut self) -> bool {
        while let Some(branch) = self.stack.pop() {
            if branch == Branch::Low {
                self.stack.push(Branch::High);
                self.stack.resize(self.names.len(), Branch::Low);
                return true;
            }
        }
        false
    }
}

impl Iterator for Assignments {
    type Item = Assignment;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let assignment = self.current();
        self.emitted += 1;
        if !self.advance() {
            self.done = true;
        }
        Some(assignment)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let total = u32::try_from(self.names.len())
            .ok()
            .and_then(|n| 1u128.checked_shl(n));
        match total.map(|t| t - self.emitted).map(usize::try_from) {
            Some(Ok(remaining)) => (remaining, Some(remaining)),
            _ => (usize::MAX, None),
        }
    }
}

impl std::iter::FusedIterator for Assignments {}
