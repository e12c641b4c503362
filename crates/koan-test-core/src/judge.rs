//! Aggregate verdict over an exercise's assertion set.

use crate::assertion::Assertion;
use crate::locale::Locale;
use crate::result::KoanResult;
use crate::sink::DiagnosticSink;
use serde::Serialize;

/// Overall outcome of judging one execution result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Fail,
}

/// Aggregated result of judging every assertion of an exercise.
///
/// Serializable so the surrounding runner can emit machine-readable
/// reports alongside the per-assertion diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct JudgmentResult {
    pub verdict: Verdict,
    pub passed: usize,
    pub failed: usize,
}

impl JudgmentResult {
    #[must_use]
    pub const fn succeeded(&self) -> bool {
        matches!(self.verdict, Verdict::Pass)
    }
}

/// Judge a full assertion set against one execution result.
///
/// Evaluates every assertion in order, each emitting its one diagnostic
/// through `sink`. Evaluation never short-circuits, so the learner sees
/// feedback for the whole exercise. An empty set passes vacuously.
pub fn judge(
    assertions: &[Assertion],
    locale: Locale,
    sink: &dyn DiagnosticSink,
    res: &KoanResult,
) -> JudgmentResult {
    let mut passed = 0;
    let mut failed = 0;
    for assertion in assertions {
        if assertion.evaluate(locale, sink, res) {
            passed += 1;
        } else {
            failed += 1;
        }
    }

    let verdict = if failed == 0 {
        Verdict::Pass
    } else {
        Verdict::Fail
    };
    JudgmentResult {
        verdict,
        passed,
        failed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assertion::{asked_for_line, output_equals, returns_int};
    use crate::locale::Localizable;
    use crate::sink::MemorySink;
    use crate::result::Value;

    fn run_result() -> KoanResult {
        KoanResult {
            method_name: "add".to_owned(),
            method_args: vec![Some(Value::Int(1)), Some(Value::Int(2))],
            return_value: Some(Value::Int(3)),
            stdout_lines: vec!["1 + 2 = 3".to_owned()],
            stdin_lines: vec![],
        }
    }

    #[test]
    fn test_all_pass() {
        let sink = MemorySink::new();
        let assertions = [
            output_equals(0, Localizable::same("1 + 2 = 3".to_owned()), vec![]),
            returns_int(3),
        ];

        let judgment = judge(&assertions, Locale::En, &sink, &run_result());
        assert_eq!(judgment.verdict, Verdict::Pass);
        assert!(judgment.succeeded());
        assert_eq!(judgment.passed, 2);
        assert_eq!(judgment.failed, 0);
    }

    #[test]
    fn test_one_failure_fails_the_set_without_short_circuit() {
        let sink = MemorySink::new();
        let assertions = [
            asked_for_line(0), // no stdin captured, fails
            returns_int(3),    // still evaluated and passes
        ];

        let judgment = judge(&assertions, Locale::En, &sink, &run_result());
        assert_eq!(judgment.verdict, Verdict::Fail);
        assert_eq!(judgment.passed, 1);
        assert_eq!(judgment.failed, 1);
        assert_eq!(sink.messages().len(), 2);
    }

    #[test]
    fn test_empty_set_passes_vacuously() {
        let sink = MemorySink::new();
        let judgment = judge(&[], Locale::En, &sink, &run_result());

        assert_eq!(judgment.verdict, Verdict::Pass);
        assert!(sink.messages().is_empty());
    }

    #[test]
    fn test_emits_one_diagnostic_per_assertion() {
        let sink = MemorySink::new();
        let assertions = [returns_int(3), returns_int(4), returns_int(5)];

        judge(&assertions, Locale::En, &sink, &run_result());
        assert_eq!(sink.messages().len(), 3);
    }

    #[test]
    fn test_judgment_serializes() -> Result<(), serde_json::Error> {
        let judgment = JudgmentResult {
            verdict: Verdict::Fail,
            passed: 1,
            failed: 2,
        };

        let json = serde_json::to_value(judgment)?;
        assert_eq!(
            json,
            serde_json::json!({"verdict": "fail", "passed": 1, "failed": 2})
        );
        Ok(())
    }
}
