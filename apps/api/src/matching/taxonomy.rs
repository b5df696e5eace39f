//! Skill taxonomy: the catalogue of recognised skills, grouped by category.
//!
//! Category order and skill order inside a category are significant: extraction
//! reports skills in exactly this order.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::{load_json_table, ConfigDataError};

const BUILTIN_TAXONOMY: &str = include_str!("../../data/skill_taxonomy.json");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    pub skills: Vec<String>,
}

/// Immutable category → ordered skills table. Built once at startup.
#[derive(Debug, Clone)]
pub struct SkillTaxonomy {
    categories: Vec<SkillCategory>,
}

impl SkillTaxonomy {
    /// Loads the taxonomy from `path`, or the built-in table when `None`.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigDataError> {
        let categories: Vec<SkillCategory> =
            load_json_table(path, BUILTIN_TAXONOMY, "skill taxonomy")?;
        Self::from_categories(categories)
    }

    pub fn builtin() -> Result<Self, ConfigDataError> {
        Self::load(None)
    }

    pub fn from_categories(categories: Vec<SkillCategory>) -> Result<Self, ConfigDataError> {
        let invalid = |reason: String| ConfigDataError::Invalid {
            origin: "skill taxonomy".to_string(),
            reason,
        };

        if categories.iter().all(|c| c.skills.is_empty()) {
            return Err(invalid("taxonomy contains no skills".to_string()));
        }
        for category in &categories {
            if category.skills.iter().any(|s| s.trim().is_empty()) {
                return Err(invalid(format!(
                    "category '{}' contains a blank skill name",
                    category.category
                )));
            }
        }

        Ok(Self { categories })
    }

    pub fn categories(&self) -> &[SkillCategory] {
        &self.categories
    }

    /// All skills in declaration order (category first, then position in category).
    pub fn skills(&self) -> impl Iterator<Item = &str> {
        self.categories
            .iter()
            .flat_map(|c| c.skills.iter().map(String::as_str))
    }

    pub fn skill_count(&self) -> usize {
        self.categories.iter().map(|c| c.skills.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(name: &str, skills: &[&str]) -> SkillCategory {
        SkillCategory {
            category: name.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_builtin_taxonomy_loads() {
        let taxonomy = SkillTaxonomy::builtin().unwrap();
        assert!(taxonomy.skill_count() > 40);
        assert_eq!(taxonomy.categories()[0].category, "Programming");
        assert_eq!(taxonomy.skills().next(), Some("Python"));
    }

    #[test]
    fn test_skills_follow_category_then_skill_order() {
        let taxonomy = SkillTaxonomy::from_categories(vec![
            category("Cloud", &["AWS", "Docker"]),
            category("Data", &["SQL"]),
        ])
        .unwrap();
        let skills: Vec<&str> = taxonomy.skills().collect();
        assert_eq!(skills, vec!["AWS", "Docker", "SQL"]);
    }

    #[test]
    fn test_empty_taxonomy_rejected() {
        let err = SkillTaxonomy::from_categories(vec![category("Empty", &[])]).unwrap_err();
        assert!(matches!(err, ConfigDataError::Invalid { .. }));
    }

    #[test]
    fn test_blank_skill_rejected() {
        let err =
            SkillTaxonomy::from_categories(vec![category("Cloud", &["AWS", "  "])]).unwrap_err();
        assert!(err.to_string().contains("Cloud"));
    }
}
