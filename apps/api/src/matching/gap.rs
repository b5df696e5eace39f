use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Outcome of comparing a candidate's skills with a role's required skills.
///
/// Both lists follow the order in which the role declares its required skills,
/// so "top N missing" is reproducible.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillGap {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

/// Splits `required` into skills the candidate has and skills they lack.
///
/// Comparison ignores case; output keeps the role's spelling. Duplicate required
/// skills are reported once.
pub fn analyze_gap(candidate: &[String], required: &[String]) -> SkillGap {
    let have: HashSet<String> = candidate.iter().map(|s| s.trim().to_lowercase()).collect();
    let mut seen: HashSet<String> = HashSet::with_capacity(required.len());
    let mut gap = SkillGap::default();

    for skill in required {
        let key = skill.trim().to_lowercase();
        if key.is_empty() || !seen.insert(key.clone()) {
            continue;
        }
        if have.contains(&key) {
            gap.matched.push(skill.clone());
        } else {
            gap.missing.push(skill.clone());
        }
    }

    gap
}
