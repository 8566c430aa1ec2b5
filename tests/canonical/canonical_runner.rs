use super::canonical_loader::{CaseFailure, CaseResult, TestCase, load_cases};
/// Runs the fixture cases against `urlcanon`
use urlcanon::{NormalizeOptions, normalize_with};

pub fn run_cases(cases: Vec<TestCase>) -> CaseResult {
    let mut result = CaseResult::default();
    let mut case_num = 0;

    for case in cases {
        let TestCase::Case {
            input,
            output,
            keep_fragments,
            extra_query_pairs,
        } = case
        else {
            continue;
        };
        case_num += 1;

        let options = NormalizeOptions {
            drop_fragments: !keep_fragments,
            extra_query_pairs,
        };
        let actual = normalize_with(&input, &options);

        // Accepted output must be a fixed point
        let stable = actual
            .as_deref()
            .is_none_or(|url| normalize_with(url, &options).as_deref() == Some(url));

        if actual == output && stable {
            result.passed += 1;
        } else {
            result.failed += 1;
            result.failures.push(CaseFailure {
                case_num,
                input,
                expected: output,
                actual,
            });
        }
    }

    result
}

#[test]
#[allow(clippy::print_stderr)]
fn test_canonical_cases() {
    let result = run_cases(load_cases());
    for failure in &result.failures {
        eprintln!(
            "case #{}: {:?} expected {:?}, got {:?}",
            failure.case_num, failure.input, failure.expected, failure.actual
        );
    }
    assert_eq!(result.failed, 0, "{}", result.summary());
}
