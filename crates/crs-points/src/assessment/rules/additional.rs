use serde::{Deserialize, Serialize};

use super::super::config::EngineConfig;
use super::super::domain::{CandidateProfile, EducationRecord, JobOfferDetails, LanguageRecord};
use super::super::duration::best_clb_for;
use super::super::tables::{
    canadian_education_points, FRENCH_ONLY_POINTS, FRENCH_WITH_ENGLISH_POINTS,
    PROVINCIAL_NOMINATION_POINTS, RELATIVES_IN_CANADA_POINTS, SENIOR_MANAGEMENT_OFFER_POINTS,
    SKILLED_OFFER_POINTS,
};
use super::transferability::{score_transferability, SkillTransferability};

/// Bonuses layered on top of core and spouse points. Only skill transferability is capped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AdditionalPoints {
    pub skill_transferability: SkillTransferability,
    pub provincial_nomination: u32,
    pub job_offer: u32,
    pub canadian_education: u32,
    pub french_language: u32,
    pub relatives_in_canada: u32,
}

impl AdditionalPoints {
    pub fn total(&self) -> u32 {
        self.skill_transferability.total()
            + self.provincial_nomination
            + self.job_offer
            + self.canadian_education
            + self.french_language
            + self.relatives_in_canada
    }
}

pub(crate) fn score_additional(profile: &CandidateProfile, config: &EngineConfig) -> AdditionalPoints {
    AdditionalPoints {
        skill_transferability: score_transferability(profile, config),
        provincial_nomination: if profile.has_provincial_nomination {
            PROVINCIAL_NOMINATION_POINTS
        } else {
            0
        },
        job_offer: job_offer_points(profile.has_job_offer, profile.job_offer_details.as_ref()),
        canadian_education: canadian_education_bonus(&profile.education),
        french_language: french_language_points(&profile.language_proficiency),
        relatives_in_canada: if profile.has_relatives_in_canada() {
            RELATIVES_IN_CANADA_POINTS
        } else {
            0
        },
    }
}

/// LMIA-exempt offers score nothing; otherwise the NOC prefix selects the tier.
pub fn job_offer_points(has_job_offer: bool, details: Option<&JobOfferDetails>) -> u32 {
    let Some(details) = details.filter(|_| has_job_offer) else {
        return 0;
    };
    if details.lmia_exempt {
        return 0;
    }

    let noc = details.noc.trim();
    if noc.starts_with("00") {
        SENIOR_MANAGEMENT_OFFER_POINTS
    } else if noc.starts_with(['0', '1', '2', '3']) {
        SKILLED_OFFER_POINTS
    } else {
        0
    }
}

pub fn canadian_education_bonus(records: &[EducationRecord]) -> u32 {
    records
        .iter()
        .filter(|record| record.is_canadian())
        .map(|record| canadian_education_points(record.level))
        .max()
        .unwrap_or(0)
}

pub fn french_language_points(records: &[LanguageRecord]) -> u32 {
    if best_clb_for(records, "french") < 7 {
        return 0;
    }

    if best_clb_for(records, "english") >= 5 {
        FRENCH_WITH_ENGLISH_POINTS
    } else {
        FRENCH_ONLY_POINTS
    }
}
