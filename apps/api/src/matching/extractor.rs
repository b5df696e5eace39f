//! Rule-based skill extraction against the skill taxonomy.
//!
//! Every taxonomy skill is compiled once into a case-insensitive whole-word pattern.
//! Word boundaries are checked as "no word character on either side" instead of `\b`,
//! so skills that end in punctuation (`C++`, `C#`) still match.

use std::collections::HashSet;

use regex::Regex;
use tracing::debug;

use crate::matching::profile::{extract_education, extract_experience, ExtractedProfile};
use crate::matching::taxonomy::SkillTaxonomy;

struct SkillPattern {
    canonical: String,
    pattern: Regex,
}

/// Matches raw text against a fixed taxonomy. Cheap to share behind an `Arc`.
pub struct SkillExtractor {
    patterns: Vec<SkillPattern>,
}

impl SkillExtractor {
    pub fn new(taxonomy: &SkillTaxonomy) -> Result<Self, regex::Error> {
        let mut patterns: Vec<SkillPattern> = Vec::with_capacity(taxonomy.skill_count());
        let mut seen: HashSet<String> = HashSet::with_capacity(taxonomy.skill_count());

        for skill in taxonomy.skills() {
            let canonical = skill.trim();
            // A skill listed twice, in any casing, keeps its first position and spelling.
            if !seen.insert(canonical.to_lowercase()) {
                continue;
            }
            let pattern = Regex::new(&format!(
                r"(?i)(?:^|\W){}(?:\W|$)",
                regex::escape(canonical)
            ))?;
            patterns.push(SkillPattern {
                canonical: canonical.to_string(),
                pattern,
            });
        }

        debug!(skills = patterns.len(), "skill extractor compiled");
        Ok(Self { patterns })
    }

    /// Returns the canonical names of all taxonomy skills found in `text`,
    /// in taxonomy order, without duplicates.
    pub fn extract(&self, text: &str) -> Vec<String> {
        if text.trim().is_empty() {
            return Vec::new();
        }
        self.patterns
            .iter()
            .filter(|p| p.pattern.is_match(text))
            .map(|p| p.canonical.clone())
            .collect()
    }

    /// Skills plus education and experience lines for a résumé body.
    pub fn profile(&self, text: &str) -> ExtractedProfile {
        ExtractedProfile {
            skills: self.extract(text),
            education: extract_education(text),
            experience: extract_experience(text),
            text: text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::taxonomy::SkillCategory;

    fn extractor() -> SkillExtractor {
        SkillExtractor::new(&SkillTaxonomy::builtin().unwrap()).unwrap()
    }

    fn custom(categories: &[(&str, &[&str])]) -> SkillExtractor {
        let taxonomy = SkillTaxonomy::from_categories(
            categories
                .iter()
                .map(|(name, skills)| SkillCategory {
                    category: name.to_string(),
                    skills: skills.iter().map(|s| s.to_string()).collect(),
                })
                .collect(),
        )
        .unwrap();
        SkillExtractor::new(&taxonomy).unwrap()
    }

    #[test]
    fn test_finds_listed_skills() {
        let skills = extractor().extract("Skills: Python, SQL, Docker");
        assert_eq!(skills, vec!["Python", "Docker", "SQL"]);
    }

    #[test]
    fn test_order_is_taxonomy_order_not_text_order() {
        let skills = extractor().extract("Kubernetes first, then AWS, and finally Python");
        assert_eq!(skills, vec!["Python", "AWS", "Kubernetes"]);
    }

    #[test]
    fn test_case_insensitive_returns_canonical_form() {
        let skills = extractor().extract("worked with NODE.JS and pytorch daily");
        assert_eq!(skills, vec!["Node.js", "PyTorch"]);
    }

    #[test]
    fn test_whole_word_only() {
        let skills = extractor().extract("JavaScript developer at Google");
        assert!(skills.contains(&"JavaScript".to_string()));
        assert!(!skills.contains(&"Java".to_string()));
        assert!(!skills.contains(&"Go".to_string()));
    }

    #[test]
    fn test_punctuated_skills_match() {
        let skills = extractor().extract("Languages: C++, C# and a bit of CI/CD.");
        assert_eq!(skills, vec!["C++", "C#", "CI/CD"]);
    }

    #[test]
    fn test_multi_word_skill() {
        let skills = extractor().extract("Background in machine learning and Power BI");
        assert_eq!(skills, vec!["Power BI", "Machine Learning"]);
    }

    #[test]
    fn test_no_duplicates_when_repeated_or_listed_twice() {
        let ex = custom(&[("A", &["Rust", "SQL"]), ("B", &["SQL", "Rust"])]);
        let skills = ex.extract("rust rust SQL sql Rust");
        assert_eq!(skills, vec!["Rust", "SQL"]);
    }

    #[test]
    fn test_case_variant_duplicates_collapse_to_first_spelling() {
        let ex = custom(&[("A", &["SQL"]), ("B", &["sql", "Rust"])]);
        assert_eq!(ex.extract("SQL and rust"), vec!["SQL", "Rust"]);
        assert_eq!(ex.extract("sql"), vec!["SQL"]);
    }

    #[test]
    fn test_empty_text_yields_empty_set() {
        assert!(extractor().extract("").is_empty());
        assert!(extractor().extract("   \n\t").is_empty());
    }

    #[test]
    fn test_skill_less_text_yields_empty_set() {
        assert!(extractor()
            .extract("I enjoy hiking and long walks on the beach.")
            .is_empty());
    }

    #[test]
    fn test_profile_carries_text_and_lines() {
        let text = "Python engineer\nBachelor of Science, 2018\n5 years of experience in backend";
        let profile = extractor().profile(text);
        assert_eq!(profile.skills, vec!["Python"]);
        assert_eq!(profile.education, vec!["Bachelor of Science, 2018"]);
        assert_eq!(profile.experience, vec!["5 years of experience in backend"]);
        assert_eq!(profile.text, text);
    }
}
