//! The execution-result snapshot an executor hands to assertions.

use std::fmt;

/// A koan value, tagged by runtime type.
///
/// The executor picks the variant at the sandbox boundary, so assertion
/// code matches on an explicit tag instead of probing a dynamic value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Int(i64),
    Str(String),
}

impl Value {
    /// Human-readable type name used in "wrong type" diagnostics.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "Integer",
            Self::Str(_) => "String",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

/// Immutable snapshot of one koan run.
///
/// Produced entirely by the executor before evaluation begins; assertions
/// only ever borrow it. Output and input captures never change for the
/// lifetime of one snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KoanResult {
    /// Identifier of the invoked koan method, for diagnostics.
    pub method_name: String,
    /// Arguments passed to the koan method; `None` is a null argument.
    pub method_args: Vec<Option<Value>>,
    /// Value the koan returned, absent if it returned nothing.
    pub return_value: Option<Value>,
    /// Captured console output, one entry per line, in emission order.
    pub stdout_lines: Vec<String>,
    /// Captured answers supplied to the program's console prompts.
    pub stdin_lines: Vec<String>,
}

impl KoanResult {
    /// The answer captured for the `index`-th console input prompt, or
    /// `None` if that prompt was never reached. Out-of-range queries are
    /// a valid, reportable state, not an error.
    #[must_use]
    pub fn input_line(&self, index: usize) -> Option<&str> {
        self.stdin_lines.get(index).map(String::as_str)
    }
}
