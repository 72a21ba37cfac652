//! Line-by-line comparison against recorded reference output.

use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};

/// Result of comparing actual output against a reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyOutcome {
    Match,
    Mismatch {
        /// 1-based line number of the first difference.
        line: usize,
        expected: Option<String>,
        actual: Option<String>,
    },
}

impl VerifyOutcome {
    pub fn is_match(&self) -> bool {
        matches!(self, VerifyOutcome::Match)
    }
}

impl fmt::Display for VerifyOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerifyOutcome::Match => write!(f, "match"),
            VerifyOutcome::Mismatch {
                line,
                expected,
                actual,
            } => write!(
                f,
                "line {}: expected {}, got {}",
                line,
                display_line(expected),
                display_line(actual)
            ),
        }
    }
}

fn display_line(line: &Option<String>) -> String {
    match line {
        Some(text) if text.len() > 64 => {
            let prefix: String = text.chars().take(64).collect();
            format!("{prefix:?}...")
        }
        Some(text) => format!("{text:?}"),
        None => "<missing line>".to_string(),
    }
}

/// Load reference output lines from a file.
pub fn load_expected(path: &Path) -> Result<Vec<String>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("read expected output {}", path.display()))?;
    Ok(contents.lines().map(str::to_string).collect())
}

/// Compare line-by-line, reporting the first difference.
pub fn compare(expected: &[String], actual: &[String]) -> VerifyOutcome {
    let longest = expected.len().max(actual.len());
    for i in 0..longest {
        if expected.get(i) != actual.get(i) {
            return VerifyOutcome::Mismatch {
                line: i + 1,
                expected: expected.get(i).cloned(),
                actual: actual.get(i).cloned(),
            };
        }
    }
    VerifyOutcome::Match
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    #[test]
    fn equal_lines_match() {
        let a = lines(&["1", "2", "3"]);
        assert_eq!(compare(&a, &a.clone()), VerifyOutcome::Match);
    }

    #[test]
    fn reports_first_differing_line() {
        let expected = lines(&["1", "2", "3"]);
        let actual = lines(&["1", "9", "3"]);
        assert_eq!(
            compare(&expected, &actual),
            VerifyOutcome::Mismatch {
                line: 2,
                expected: Some("2".to_string()),
                actual: Some("9".to_string()),
            }
        );
    }

    #[test]
    fn reports_missing_trailing_line() {
        let expected = lines(&["1", "2"]);
        let actual = lines(&["1"]);
        let outcome = compare(&expected, &actual);
        assert_eq!(
            outcome,
            VerifyOutcome::Mismatch {
                line: 2,
                expected: Some("2".to_string()),
                actual: None,
            }
        );
        assert!(outcome.to_string().contains("<missing line>"));
    }

    #[test]
    fn reports_extra_trailing_line() {
        let expected = lines(&["1"]);
        let actual = lines(&["1", "2"]);
        assert!(!compare(&expected, &actual).is_match());
    }

    #[test]
    fn load_expected_round_trips() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("expected.txt");
        std::fs::write(&path, "10\n20\n").expect("write expected");
        assert_eq!(load_expected(&path).expect("load"), lines(&["10", "20"]));
    }
}
