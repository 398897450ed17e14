use serde::{Deserialize, Serialize};

use super::super::config::EngineConfig;
use super::super::domain::{CandidateProfile, EducationRecord, LanguageRecord};
use super::super::duration::{canadian_years, effective_clb};
use super::super::tables::{
    education_points, AGE, CANADIAN_EXPERIENCE, FIRST_LANGUAGE, SECOND_LANGUAGE,
};

/// Candidate's own base score; sum of the four factors with no cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CoreHumanCapital {
    pub age: u32,
    pub education: u32,
    pub language: u32,
    pub canadian_experience: u32,
}

impl CoreHumanCapital {
    pub fn total(&self) -> u32 {
        self.age + self.education + self.language + self.canadian_experience
    }
}

pub(crate) fn score_core(profile: &CandidateProfile, config: &EngineConfig) -> CoreHumanCapital {
    let has_spouse = profile.has_spouse();
    let years = canadian_years(profile, config.negative_durations);

    CoreHumanCapital {
        age: age_points(profile.age, has_spouse),
        education: education_points_for(&profile.education, has_spouse),
        language: language_points(&profile.language_proficiency, has_spouse),
        canadian_experience: canadian_experience_points(years, has_spouse),
    }
}

pub fn age_points(age: Option<u32>, has_spouse: bool) -> u32 {
    age.map(|age| AGE.lookup(i64::from(age), has_spouse))
        .unwrap_or(0)
}

/// Highest single credential, never the sum across credentials.
pub fn education_points_for(records: &[EducationRecord], has_spouse: bool) -> u32 {
    records
        .iter()
        .map(|record| {
            let (single, with_spouse) = education_points(record.level);
            if has_spouse {
                with_spouse
            } else {
                single
            }
        })
        .max()
        .unwrap_or(0)
}

struct LanguageStanding<'a> {
    language: &'a str,
    clb: u8,
    points: u32,
}

fn language_standings(records: &[LanguageRecord], has_spouse: bool) -> Vec<LanguageStanding<'_>> {
    records
        .iter()
        .filter_map(|record| {
            effective_clb(record).map(|clb| LanguageStanding {
                language: record.language.trim(),
                clb,
                points: FIRST_LANGUAGE.lookup(i64::from(clb), has_spouse),
            })
        })
        .collect()
}

/// Best first-language tier plus at most one bonus from a differently named language.
///
/// The primary language is the highest-scoring record; ties keep the earliest record. The
/// bonus is the best second-language tier among other-named records with positive tier points.
pub fn language_points(records: &[LanguageRecord], has_spouse: bool) -> u32 {
    let standings = language_standings(records, has_spouse);

    let Some(primary) = standings
        .iter()
        .reduce(|best, next| if next.points > best.points { next } else { best })
    else {
        return 0;
    };

    let secondary = standings
        .iter()
        .filter(|standing| standing.points > 0)
        .filter(|standing| !standing.language.eq_ignore_ascii_case(primary.language))
        .map(|standing| SECOND_LANGUAGE.lookup(i64::from(standing.clb)))
        .max()
        .unwrap_or(0);

    primary.points + secondary
}

pub fn canadian_experience_points(years: u32, has_spouse: bool) -> u32 {
    CANADIAN_EXPERIENCE.lookup(i64::from(years), has_spouse)
}
