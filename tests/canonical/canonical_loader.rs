/// Fixture loader for canonicalization cases
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum TestCase {
    /// A normalization case; `output: null` means the input must be rejected
    Case {
        input: String,
        output: Option<String>,
        #[serde(default)]
        keep_fragments: bool,
        #[serde(default)]
        extra_query_pairs: Vec<(String, String)>,
    },
    /// A comment line (string)
    Comment(String),
}

#[derive(Debug, Clone)]
pub struct CaseFailure {
    pub case_num: usize,
    pub input: String,
    pub expected: Option<String>,
    pub actual: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct CaseResult {
    pub passed: usize,
    pub failed: usize,
    pub failures: Vec<CaseFailure>,
}

impl CaseResult {
    pub fn summary(&self) -> String {
        format!("Passed: {}, Failed: {}", self.passed, self.failed)
    }
}

pub fn load_cases() -> Vec<TestCase> {
    let data = include_str!("./canonical_cases.json");
    serde_json::from_str(data).expect("Failed to parse canonical test data")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_cases() {
        let cases = load_cases();
        let count = cases
            .iter()
            .filter(|case| matches!(case, TestCase::Case { .. }))
            .count();
        assert!(count >= 40, "only {count} cases loaded");
    }

    #[test]
    fn test_summary() {
        let result = CaseResult {
            passed: 3,
            failed: 1,
            failures: Vec::new(),
        };
        assert_eq!(result.summary(), "Passed: 3, Failed: 1");
    }
}
