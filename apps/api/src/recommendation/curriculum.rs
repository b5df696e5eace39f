use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::{load_json_table, ConfigDataError};

const BUILTIN_CURRICULUM: &str = include_str!("../../data/curriculum.json");

/// Study material for one skill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningResource {
    pub videos: Vec<String>,
    pub hours: u32,
    pub project: String,
    pub certificate: String,
}

#[derive(Debug, Deserialize)]
struct CurriculumFile {
    fallback: LearningResource,
    skills: HashMap<String, LearningResource>,
}

/// Immutable skill → learning resource table, with the generic fallback card.
/// Lookups ignore case.
#[derive(Debug, Clone)]
pub struct Curriculum {
    fallback: LearningResource,
    by_skill: HashMap<String, LearningResource>,
}

impl Curriculum {
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigDataError> {
        let file: CurriculumFile = load_json_table(path, BUILTIN_CURRICULUM, "curriculum")?;

        let mut by_skill = HashMap::with_capacity(file.skills.len());
        for (skill, resource) in file.skills {
            let key = skill.trim().to_lowercase();
            if key.is_empty() {
                return Err(ConfigDataError::Invalid {
                    origin: "curriculum".to_string(),
                    reason: "blank skill name".to_string(),
                });
            }
            if by_skill.insert(key, resource).is_some() {
                return Err(ConfigDataError::Invalid {
                    origin: "curriculum".to_string(),
                    reason: format!("skill '{skill}' is listed more than once"),
                });
            }
        }

        Ok(Self {
            fallback: file.fallback,
            by_skill,
        })
    }

    pub fn builtin() -> Result<Self, ConfigDataError> {
        Self::load(None)
    }

    pub fn lookup(&self, skill: &str) -> Option<&LearningResource> {
        self.by_skill.get(&skill.trim().to_lowercase())
    }

    pub fn fallback(&self) -> &LearningResource {
        &self.fallback
    }

    pub fn len(&self) -> usize {
        self.by_skill.len()
    }
}
