//! # Matcher Unit Tests / 匹配器单元测试
//!
//! Tests for aligning expectations against captured output lines: exact
//! matching, regex matching, cursor advancement and the trailing warnings.
//!
//! 测试期望与捕获输出行的对齐：精确匹配、正则匹配、游标推进以及末尾警告。

use dauw_tester::matcher::{
    evaluate, Evaluation, ABUNDANT_OUTPUT, ERROR_BLOCK_HEIGHT, NO_EXPECTATIONS,
};
use dauw_tester::infra::command::split_output;
use dauw_tester::models::{CapturedRun, CheckResult, Expectation, ResultKind};
use std::time::Duration;

mod common;

fn captured(lines: &[&str]) -> CapturedRun {
    CapturedRun {
        duration: Duration::from_millis(12),
        exit_code: 0,
        output_lines: lines.iter().map(|line| line.to_string()).collect(),
    }
}

fn kinds(results: &[CheckResult]) -> Vec<ResultKind> {
    results.iter().map(CheckResult::kind).collect()
}

#[cfg(test)]
mod no_expectation_tests {
    use super::*;

    #[test]
    fn test_no_expectations_yields_single_warning() {
        let run = captured(&["something"]);
        let results = evaluate(&[], Some(&run));
        assert_eq!(results, vec![CheckResult::Warn(NO_EXPECTATIONS.to_string())]);
    }

    #[test]
    fn test_no_expectations_without_run() {
        let results = evaluate(&[], None);
        assert_eq!(results, vec![CheckResult::Warn(NO_EXPECTATIONS.to_string())]);
    }
}

#[cfg(test)]
mod output_expectation_tests {
    use super::*;

    #[test]
    fn test_single_matching_line_passes() {
        let expectations = [Expectation::output("4", 1)];
        let run = captured(&["4"]);
        let results = evaluate(&expectations, Some(&run));

        assert_eq!(
            results,
            vec![
                CheckResult::Info("Tests were run in 12 ms resulting in exit code 0".into()),
                CheckResult::Pass("Got expected output \"4\" for output at line 2".into()),
            ]
        );
    }

    #[test]
    fn test_trailing_whitespace_is_a_mismatch() {
        let expectations = [Expectation::output("4", 0)];
        let run = captured(&["4 "]);
        let results = evaluate(&expectations, Some(&run));

        assert_eq!(
            results[1],
            CheckResult::Fail("Expected \"4\" for output at line 1 but got \"4 \"".into())
        );
    }

    #[test]
    fn test_output_pattern_is_not_a_regex() {
        let expectations = [Expectation::output("a.c", 0)];
        let run = captured(&["abc"]);
        assert_eq!(kinds(&evaluate(&expectations, Some(&run)))[1], ResultKind::Fail);
    }

    #[test]
    fn test_mismatch_still_advances_one_line() {
        let expectations = [Expectation::output("1", 0), Expectation::output("2", 1)];
        let run = captured(&["x", "2"]);
        let results = evaluate(&expectations, Some(&run));

        assert_eq!(
            kinds(&results),
            vec![ResultKind::Info, ResultKind::Fail, ResultKind::Pass]
        );
    }

    #[test]
    fn test_missing_line_fails_without_advancing() {
        // Scenario C: two expected lines, only one printed.
        let expectations = [Expectation::output("1", 0), Expectation::output("2", 1)];
        let run = captured(&["1"]);
        let mut evaluation = Evaluation::new(&expectations, Some(&run));

        assert_eq!(evaluation.next().map(|r| r.kind()), Some(ResultKind::Info));
        assert_eq!(evaluation.next().map(|r| r.kind()), Some(ResultKind::Pass));
        assert_eq!(
            evaluation.next(),
            Some(CheckResult::Fail(
                "Missing expected \"2\" for output at line 2".into()
            ))
        );
        assert_eq!(evaluation.cursor(), 1);
        assert_eq!(evaluation.next(), None);
    }

    #[test]
    fn test_every_expectation_past_the_end_fails() {
        let expectations: Vec<_> = (0..4).map(|i| Expectation::output(i.to_string(), i)).collect();
        let run = captured(&["0"]);
        let mut evaluation = Evaluation::new(&expectations, Some(&run));
        let results: Vec<_> = evaluation.by_ref().collect();

        assert_eq!(
            kinds(&results),
            vec![
                ResultKind::Info,
                ResultKind::Pass,
                ResultKind::Fail,
                ResultKind::Fail,
                ResultKind::Fail
            ]
        );
        assert!(results[2..].iter().all(|r| r.message().starts_with("Missing expected")));
        assert_eq!(evaluation.cursor(), 1);
    }
}

#[cfg(test)]
mod error_expectation_tests {
    use super::*;

    #[test]
    fn test_regex_searches_anywhere_in_line() {
        // Scenario B.
        let expectations = [Expectation::error("undefined variable", 0)];
        let run = captured(&["Error: undefined variable 'x'", "at", "  x", "  ^"]);
        let mut evaluation = Evaluation::new(&expectations, Some(&run));
        let results: Vec<_> = evaluation.by_ref().collect();

        assert_eq!(kinds(&results), vec![ResultKind::Info, ResultKind::Pass]);
        assert_eq!(evaluation.cursor(), 4);
    }

    #[test]
    fn test_regex_syntax_is_honored() {
        let expectations = [Expectation::error(r"^Error: undefined \w+ '[a-z]'$", 0)];
        let run = captured(&["Error: undefined variable 'x'"]);
        assert_eq!(kinds(&evaluate(&expectations, Some(&run)))[1], ResultKind::Pass);
    }

    #[test]
    fn test_cursor_advances_by_block_height_even_on_mismatch() {
        let expectations = [Expectation::error("type mismatch", 0), Expectation::output("after", 1)];
        let run = captured(&["Error: undefined", "at", "  x", "  ^", "after"]);
        let mut evaluation = Evaluation::new(&expectations, Some(&run));
        let results: Vec<_> = evaluation.by_ref().collect();

        assert_eq!(
            kinds(&results),
            vec![ResultKind::Info, ResultKind::Fail, ResultKind::Pass]
        );
        assert_eq!(evaluation.cursor(), ERROR_BLOCK_HEIGHT + 1);
    }

    #[test]
    fn test_invalid_regex_fails_and_evaluation_continues() {
        let expectations = [Expectation::error("unclosed (group", 0), Expectation::output("after", 1)];
        let run = captured(&["Error: x", "", "", "", "after"]);
        let results = evaluate(&expectations, Some(&run));

        assert_eq!(
            kinds(&results),
            vec![ResultKind::Info, ResultKind::Fail, ResultKind::Pass]
        );
        assert!(results[1].message().starts_with("Invalid error pattern \"unclosed (group\""));
    }

    #[test]
    fn test_error_block_may_run_past_the_end() {
        let expectations = [Expectation::error("boom", 0)];
        let run = captured(&["Error: boom"]);
        let mut evaluation = Evaluation::new(&expectations, Some(&run));
        let results: Vec<_> = evaluation.by_ref().collect();

        // A short block is not abundant output.
        assert_eq!(kinds(&results), vec![ResultKind::Info, ResultKind::Pass]);
        assert_eq!(evaluation.cursor(), ERROR_BLOCK_HEIGHT);
    }

    #[test]
    fn test_block_height_matches_interpreter_error_rendering() {
        let mut output = split_output(&format!("{}\n", common::UNDEFINED_VARIABLE_ERROR));
        assert_eq!(output, common::UNDEFINED_VARIABLE_ERROR_LINES);
        assert_eq!(output.len(), ERROR_BLOCK_HEIGHT);

        output.push("done".to_string());
        let expectations = [
            Expectation::error("undefined variable 'x'", 0),
            Expectation::output("done", 1),
        ];
        let run = CapturedRun {
            output_lines: output,
            ..captured(&[])
        };
        let results = evaluate(&expectations, Some(&run));
        assert_eq!(
            kinds(&results),
            vec![ResultKind::Info, ResultKind::Pass, ResultKind::Pass]
        );
    }
}

#[cfg(test)]
mod trailing_output_tests {
    use super::*;

    #[test]
    fn test_leftover_lines_yield_exactly_one_warning() {
        let expectations = [Expectation::output("1", 0)];
        let run = captured(&["1", "2", "3", "4"]);
        let results = evaluate(&expectations, Some(&run));

        assert_eq!(
            results.last(),
            Some(&CheckResult::Warn(ABUNDANT_OUTPUT.to_string()))
        );
        assert_eq!(
            results.iter().filter(|r| r.kind() == ResultKind::Warn).count(),
            1
        );
    }

    #[test]
    fn test_exact_consumption_has_no_warning() {
        let expectations = [Expectation::output("1", 0), Expectation::output("2", 1)];
        let run = captured(&["1", "2"]);
        let results = evaluate(&expectations, Some(&run));
        assert!(results.iter().all(|r| !r.is_problem()));
    }
}

#[test]
fn test_expectations_without_run_all_miss() {
    let expectations = [Expectation::output("1", 0)];
    let results = evaluate(&expectations, None);
    assert_eq!(
        results,
        vec![CheckResult::Fail("Missing expected \"1\" for output at line 1".into())]
    );
}

#[test]
fn test_info_reports_exit_code() {
    let expectations = [Expectation::output("1", 0)];
    let run = CapturedRun {
        duration: Duration::from_millis(250),
        exit_code: 70,
        output_lines: vec!["1".into()],
    };
    let results = evaluate(&expectations, Some(&run));
    assert_eq!(
        results[0],
        CheckResult::Info("Tests were run in 250 ms resulting in exit code 70".into())
    );
}

#[test]
fn test_evaluation_is_deterministic() {
    let expectations = [Expectation::output("1", 0), Expectation::error("bad", 1)];
    let run = captured(&["1", "Error: bad", "", "", "", "extra"]);
    assert_eq!(
        evaluate(&expectations, Some(&run)),
        evaluate(&expectations, Some(&run))
    );
}
