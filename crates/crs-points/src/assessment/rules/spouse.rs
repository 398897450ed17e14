use serde::{Deserialize, Serialize};

use super::super::config::EngineConfig;
use super::super::domain::{LanguageRecord, SpouseProfile};
use super::super::duration::{qualifying_years, WorkInterval};
use super::super::tables::{
    spouse_education_points, SPOUSE_CANADIAN_EXPERIENCE, SPOUSE_LANGUAGE_CAP, SPOUSE_SKILL,
};

/// Accompanying spouse factors; each is bounded by its own table or cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SpousePoints {
    pub education: u32,
    pub language: u32,
    pub canadian_experience: u32,
}

impl SpousePoints {
    pub fn total(&self) -> u32 {
        self.education + self.language + self.canadian_experience
    }
}

pub(crate) fn score_spouse(spouse: &SpouseProfile, config: &EngineConfig) -> SpousePoints {
    let years = qualifying_years(
        spouse.canadian_work_experience.iter().map(WorkInterval::from),
        config.negative_durations,
    );

    SpousePoints {
        education: spouse
            .education
            .map(|education| spouse_education_points(education.level))
            .unwrap_or(0),
        language: spouse_language_points(&spouse.language_proficiency),
        canadian_experience: SPOUSE_CANADIAN_EXPERIENCE.lookup(i64::from(years)),
    }
}

/// Each skill of each record is tiered on its own, then the sum is capped.
pub fn spouse_language_points(records: &[LanguageRecord]) -> u32 {
    let raw: u32 = records
        .iter()
        .filter_map(|record| record.clb_equivalent.as_ref())
        .flat_map(|scores| scores.skills())
        .map(|skill| SPOUSE_SKILL.lookup(i64::from(skill)))
        .sum();

    raw.min(SPOUSE_LANGUAGE_CAP)
}
