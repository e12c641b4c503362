//! Assertion engine for judging koan exercise runs.
//!
//! A learner's koan run produces an immutable [`KoanResult`] snapshot:
//! captured console output and input, plus the invoked method's name,
//! arguments, and return value. This crate judges such a snapshot against
//! declarative [`Assertion`]s defined alongside each exercise. Every
//! evaluation yields a boolean verdict and exactly one localized
//! diagnostic line through a [`DiagnosticSink`]; absence and mismatch are
//! false verdicts with explanatory text, never errors.
//!
//! Executing the koan, capturing its console, picking the display locale,
//! and presenting the feedback all live outside this crate.

pub mod assertion;
pub mod judge;
pub mod locale;
pub mod param;
pub mod result;
pub mod sink;
pub mod text;

pub use assertion::{Assertion, asked_for_line, output_equals, returns_int, returns_string};
pub use judge::{JudgmentResult, Verdict, judge};
pub use locale::{Locale, Localizable};
pub use param::{DerivedFn, Param};
pub use result::{KoanResult, Value};
pub use sink::{ConsoleSink, DiagnosticSink, MemorySink};
pub use text::{CatalogError, TextCatalog, TextKey, format_template};
