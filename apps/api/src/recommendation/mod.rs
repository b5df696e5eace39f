//! Recommendation Engine: turns a skill gap and a match score into a tiered roadmap.
//!
//! Short term: curriculum cards for the first three missing skills that have one,
//! or the résumé fallback card when none do.
//! Medium/long term: fixed advice per score band (< 60, 60–79.9, ≥ 80).
//!
//! Pure: the same `(missing, score)` always yields the same plan.

pub mod curriculum;

use serde::{Deserialize, Serialize};

use crate::recommendation::curriculum::{Curriculum, LearningResource};

/// How many missing skills get a short-term card.
const SHORT_TERM_SKILLS: usize = 3;
const FALLBACK_SKILL: &str = "Resume";

/// One short-term learning goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortTermGoal {
    pub skill: String,
    pub videos: Vec<String>,
    pub hours: u32,
    pub project: String,
    pub certificate: String,
}

impl ShortTermGoal {
    fn from_resource(skill: &str, resource: &LearningResource) -> Self {
        Self {
            skill: skill.to_string(),
            videos: resource.videos.clone(),
            hours: resource.hours,
            project: resource.project.clone(),
            certificate: resource.certificate.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationPlan {
    pub short_term: Vec<ShortTermGoal>,
    pub medium_term: Vec<String>,
    pub long_term: Vec<String>,
}

/// Score bands. Lower bound inclusive, upper bound exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    /// score < 60
    Foundation,
    /// 60 ≤ score < 80
    Growth,
    /// score ≥ 80
    Senior,
}

impl ScoreBand {
    pub fn from_score(score: f32) -> Self {
        // NaN lands in Foundation.
        if !(score >= 60.0) {
            ScoreBand::Foundation
        } else if score < 80.0 {
            ScoreBand::Growth
        } else {
            ScoreBand::Senior
        }
    }

    pub fn medium_term(self) -> [&'static str; 2] {
        match self {
            ScoreBand::Foundation => ["Build 2 portfolio projects", "Contribute to open-source"],
            ScoreBand::Growth => ["Deepen 2 core tech stacks", "Lead a small team/task"],
            ScoreBand::Senior => ["Prepare for system-design interviews", "Mentor juniors"],
        }
    }

    pub fn long_term(self) -> [&'static str; 2] {
        match self {
            ScoreBand::Foundation => ["Target mid-level roles", "Build 5+ significant projects"],
            ScoreBand::Growth => ["Aim for senior roles", "Speak at meet-ups / write blogs"],
            ScoreBand::Senior => ["Target staff / principal level", "Develop domain expertise"],
        }
    }
}

pub struct RecommendationEngine {
    curriculum: Curriculum,
}

impl RecommendationEngine {
    pub fn new(curriculum: Curriculum) -> Self {
        Self { curriculum }
    }

    pub fn recommend(&self, missing_skills: &[String], score: f32) -> RecommendationPlan {
        let mut short_term: Vec<ShortTermGoal> = missing_skills
            .iter()
            .take(SHORT_TERM_SKILLS)
            .filter_map(|skill| {
                self.curriculum
                    .lookup(skill)
                    .map(|resource| ShortTermGoal::from_resource(skill, resource))
            })
            .collect();

        if short_term.is_empty() {
            short_term.push(ShortTermGoal::from_resource(
                FALLBACK_SKILL,
                self.curriculum.fallback(),
            ));
        }

        let band = ScoreBand::from_score(score);
        RecommendationPlan {
            short_term,
            medium_term: band.medium_term().iter().map(|s| s.to_string()).collect(),
            long_term: band.long_term().iter().map(|s| s.to_string()).collect(),
        }
    }
}
