//! Assertion parameters and their resolution.

use crate::result::{KoanResult, Value};
use std::fmt;
use std::sync::Arc;

/// Formatter deriving a diagnostic fragment from the full result.
pub type DerivedFn = Arc<dyn Fn(&KoanResult) -> String + Send + Sync>;

/// One parameter of a parameterized assertion.
///
/// A closed union: every kind an assertion template can splice in is a
/// variant here, resolved by exhaustive match.
#[derive(Clone)]
pub enum Param {
    /// A fixed value; `None` stands for a null literal.
    Literal(Option<Value>),
    /// The answer captured for the n-th console input prompt.
    StdIn(usize),
    /// A value computed from the execution result at evaluation time.
    Derived(DerivedFn),
}

impl Param {
    /// Shorthand for a non-null literal.
    #[must_use]
    pub fn literal(value: impl Into<Value>) -> Self {
        Self::Literal(Some(value.into()))
    }

    /// The null literal, which resolves to the empty string.
    #[must_use]
    pub const fn null() -> Self {
        Self::Literal(None)
    }

    /// A formatter with full read access to the execution result.
    #[must_use]
    pub fn derived(f: impl Fn(&KoanResult) -> String + Send + Sync + 'static) -> Self {
        Self::Derived(Arc::new(f))
    }

    /// Resolve to the concrete string form against one result.
    ///
    /// Total and side-effect free: a prompt that was never reached and a
    /// null literal both resolve to the empty string.
    #[must_use]
    pub fn resolve(&self, res: &KoanResult) -> String {
        match self {
            Self::Literal(None) => String::new(),
            Self::Literal(Some(value)) => value.to_string(),
            Self::StdIn(index) => res.input_line(*index).unwrap_or_default().to_owned(),
            Self::Derived(f) => f(res),
        }
    }
}

impl fmt::Debug for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            Self::StdIn(index) => f.debug_tuple("StdIn").field(index).finish(),
            Self::Derived(_) => f.write_str("Derived(..)"),
        }
    }
}
