use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

const MAX_EDUCATION_LINES: usize = 3;
const MAX_EXPERIENCE_LINES: usize = 5;

static EDUCATION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:bachelors?|masters?|phd|ph\.d|bs|ba|ms|mba)\b").expect("valid regex")
});

static EXPERIENCE_PATTERNS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        Regex::new(r"(?i)\d+\s*years?\s+of\s+experience").expect("valid regex"),
        Regex::new(r"(?i)\d+-\d+\s*years?").expect("valid regex"),
        Regex::new(r"(?i)\b(?:present|current|today)\b").expect("valid regex"),
    ]
});

/// Structured view of a résumé produced by one extraction pass.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExtractedProfile {
    pub text: String,
    pub skills: Vec<String>,
    pub education: Vec<String>,
    pub experience: Vec<String>,
}

/// Lines mentioning a degree, first three.
pub fn extract_education(text: &str) -> Vec<String> {
    matching_lines(text, MAX_EDUCATION_LINES, |line| {
        EDUCATION_PATTERN.is_match(line)
    })
}

/// Lines that look like a dated role or a years-of-experience claim, first five.
pub fn extract_experience(text: &str) -> Vec<String> {
    matching_lines(text, MAX_EXPERIENCE_LINES, |line| {
        EXPERIENCE_PATTERNS.iter().any(|p| p.is_match(line))
    })
}

fn matching_lines(text: &str, limit: usize, predicate: impl Fn(&str) -> bool) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && predicate(line))
        .take(limit)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_education_lines_detected() {
        let text = "  B.Tech coursework\nMaster of Science in CS  \nMBA, Wharton\nCooking class";
        assert_eq!(
            extract_education(text),
            vec!["Master of Science in CS", "MBA, Wharton"]
        );
    }

    #[test]
    fn test_education_requires_whole_word() {
        // "bs" inside "jobs" and "ms" inside "systems" are not degrees
        assert!(extract_education("Built jobs for distributed systems").is_empty());
    }

    #[test]
    fn test_education_capped_at_three() {
        let text = "BS one\nBS two\nBS three\nBS four";
        assert_eq!(extract_education(text).len(), 3);
    }

    #[test]
    fn test_experience_patterns() {
        let text = "Acme Corp 2019 - Present\n3-5 years backend\nHobbies\n7 years of experience";
        assert_eq!(
            extract_experience(text),
            vec![
                "Acme Corp 2019 - Present",
                "3-5 years backend",
                "7 years of experience"
            ]
        );
    }

    #[test]
    fn test_experience_capped_at_five() {
        let text = (0..8)
            .map(|i| format!("Role {i} until present"))
            .collect::<Vec<_>>()
            .join("\n");
        assert_eq!(extract_experience(&text).len(), 5);
    }

    #[test]
    fn test_empty_text() {
        assert!(extract_education("").is_empty());
        assert!(extract_experience("").is_empty());
    }
}
