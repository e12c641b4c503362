//! The assertion family: named predicates over one koan execution.

use crate::locale::{Locale, Localizable};
use crate::param::Param;
use crate::result::{KoanResult, Value};
use crate::sink::DiagnosticSink;
use crate::text::{TextKey, format_template};

/// An immutable, pre-parameterized predicate over one koan execution.
///
/// Built once when the exercise is defined, evaluated once per learner
/// attempt. Holds no mutable state, so the same assertion can be reused
/// across attempts and evaluated concurrently on independent results.
#[derive(Debug, Clone)]
pub enum Assertion {
    /// Stdout line `line` equals the formatted expected template.
    OutputEquals {
        line: usize,
        expected: Localizable<String>,
        params: Vec<Param>,
    },
    /// The program reached its `line`-th console input prompt.
    AskedForLine { line: usize },
    /// The koan method returned exactly this integer.
    ReturnsInt { expected: i64 },
    /// The koan method returned exactly this locale-dependent string.
    ReturnsString { expected: Localizable<String> },
}

/// Assert that stdout line `line` equals `expected`, formatted with
/// `params` resolved against the result under evaluation.
#[must_use]
pub const fn output_equals(
    line: usize,
    expected: Localizable<String>,
    params: Vec<Param>,
) -> Assertion {
    Assertion::OutputEquals {
        line,
        expected,
        params,
    }
}

/// Assert that the program asked for the `line`-th console input.
#[must_use]
pub const fn asked_for_line(line: usize) -> Assertion {
    Assertion::AskedForLine { line }
}

/// Assert that the koan method returned this integer.
#[must_use]
pub const fn returns_int(expected: i64) -> Assertion {
    Assertion::ReturnsInt { expected }
}

/// Assert that the koan method returned this locale-dependent string.
#[must_use]
pub const fn returns_string(expected: Localizable<String>) -> Assertion {
    Assertion::ReturnsString { expected }
}

impl Assertion {
    /// Judge one execution result.
    ///
    /// Emits exactly one diagnostic through `sink`, after the verdict is
    /// computed, then returns that verdict. Absence and mismatch are
    /// false verdicts with explanatory text, never errors.
    pub fn evaluate(&self, locale: Locale, sink: &dyn DiagnosticSink, res: &KoanResult) -> bool {
        match self {
            Self::OutputEquals {
                line,
                expected,
                params,
            } => evaluate_output_equals(*line, expected, params, locale, sink, res),
            Self::AskedForLine { line } => evaluate_asked_for_line(*line, sink, res),
            Self::ReturnsInt { expected } => evaluate_returns_int(*expected, sink, res),
            Self::ReturnsString { expected } => {
                evaluate_returns_string(expected.get(locale), sink, res)
            }
        }
    }
}

/// `name(a, b, ...)` with null arguments rendered as the literal `null`.
fn format_method_call(res: &KoanResult) -> String {
    let args: Vec<String> = res
        .method_args
        .iter()
        .map(|arg| arg.as_ref().map_or_else(|| "null".to_owned(), ToString::to_string))
        .collect();
    format!("{}({})", res.method_name, args.join(", "))
}

fn evaluate_output_equals(
    line: usize,
    expected: &Localizable<String>,
    params: &[Param],
    locale: Locale,
    sink: &dyn DiagnosticSink,
    res: &KoanResult,
) -> bool {
    let resolved: Vec<String> = params.iter().map(|param| param.resolve(res)).collect();
    let expected = format_template(expected.get(locale), &resolved);

    let Some(actual) = res.stdout_lines.get(line) else {
        sink.println(TextKey::ExpectedToSeeInConsoleButSawNothing, &[expected]);
        return false;
    };
    if *actual != expected {
        // A blank line reads as "nothing" to a beginner, not as a
        // mismatch against blank.
        if actual.trim().is_empty() {
            sink.println(TextKey::ExpectedToSeeInConsoleButSawNothing, &[expected]);
        } else {
            sink.println(
                TextKey::ExpectedToSeeInConsoleButSawInstead,
                &[expected, actual.clone()],
            );
        }
        return false;
    }

    sink.println(TextKey::OkDisplayedInConsole, &[expected]);
    true
}

fn evaluate_asked_for_line(line: usize, sink: &dyn DiagnosticSink, res: &KoanResult) -> bool {
    if res.input_line(line).is_some() {
        sink.println(TextKey::OkAskedForLineInConsole, &[]);
        return true;
    }
    sink.println(TextKey::ExpectedForUserToAnswerInConsole, &[]);
    false
}

fn evaluate_returns_int(expected: i64, sink: &dyn DiagnosticSink, res: &KoanResult) -> bool {
    let call = format_method_call(res);
    match res.return_value.as_ref() {
        None => {
            sink.println(
                TextKey::ExpectedToReturnIntButReturnedNull,
                &[call, expected.to_string()],
            );
            false
        }
        Some(Value::Int(actual)) if *actual == expected => {
            sink.println(TextKey::OkReturnedInt, &[call, expected.to_string()]);
            true
        }
        Some(Value::Int(actual)) => {
            sink.println(
                TextKey::ExpectedToReturnIntButReturned,
                &[call, expected.to_string(), actual.to_string()],
            );
            false
        }
        Some(other) => {
            sink.println(
                TextKey::ExpectedToReturnIntButReturnedOtherType,
                &[call, other.type_name().to_owned()],
            );
            false
        }
    }
}

fn evaluate_returns_string(expected: &str, sink: &dyn DiagnosticSink, res: &KoanResult) -> bool {
    let call = format_method_call(res);
    match res.return_value.as_ref() {
        None => {
            sink.println(
                TextKey::ExpectedToReturnStringButReturnedNull,
                &[call, expected.to_owned()],
            );
            false
        }
        Some(Value::Str(actual)) if actual == expected => {
            sink.println(TextKey::OkReturnedString, &[call, expected.to_owned()]);
            true
        }
        Some(Value::Str(actual)) => {
            sink.println(
                TextKey::ExpectedToReturnStringButReturned,
                &[call, expected.to_owned(), actual.clone()],
            );
            false
        }
        Some(other) => {
            sink.println(
                TextKey::ExpectedToReturnStringButReturnedOtherType,
                &[call, other.type_name().to_owned()],
            );
            false
        }
    }
}
