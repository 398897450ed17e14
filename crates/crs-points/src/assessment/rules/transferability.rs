use serde::{Deserialize, Serialize};

use super::super::config::EngineConfig;
use super::super::domain::{CandidateProfile, EducationLevel};
use super::super::duration::{canadian_years, foreign_years, highest_clb};
use super::super::tables::{transferability_grid, SKILL_TRANSFERABILITY_CAP};

/// Raw sub-factor scores; only [`SkillTransferability::total`] applies the cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SkillTransferability {
    pub education_language: u32,
    pub education_canadian_experience: u32,
    pub foreign_experience_language: u32,
    pub foreign_canadian_experience: u32,
    pub certificate_language: u32,
}

impl SkillTransferability {
    pub fn uncapped(&self) -> u32 {
        self.education_language
            + self.education_canadian_experience
            + self.foreign_experience_language
            + self.foreign_canadian_experience
            + self.certificate_language
    }

    pub fn total(&self) -> u32 {
        self.uncapped().min(SKILL_TRANSFERABILITY_CAP)
    }
}

/// Inputs shared by the five sub-factors, computed once per profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TransferabilitySignals {
    has_degree: bool,
    has_certificate: bool,
    clb: u8,
    canadian_years: u32,
    foreign_years: u32,
}

impl TransferabilitySignals {
    fn from_profile(profile: &CandidateProfile, config: &EngineConfig) -> Self {
        Self {
            has_degree: profile.education.iter().any(|record| record.level.is_degree()),
            has_certificate: profile
                .education
                .iter()
                .any(|record| record.level == EducationLevel::Certificate),
            clb: highest_clb(&profile.language_proficiency),
            canadian_years: canadian_years(profile, config.negative_durations),
            foreign_years: foreign_years(profile, config.negative_durations),
        }
    }
}

pub(crate) fn score_transferability(
    profile: &CandidateProfile,
    config: &EngineConfig,
) -> SkillTransferability {
    score_signals(&TransferabilitySignals::from_profile(profile, config))
}

fn score_signals(signals: &TransferabilitySignals) -> SkillTransferability {
    SkillTransferability {
        education_language: education_language(signals),
        education_canadian_experience: education_canadian_experience(signals),
        foreign_experience_language: foreign_experience_language(signals),
        foreign_canadian_experience: foreign_canadian_experience(signals),
        certificate_language: certificate_language(signals),
    }
}

fn clb_tier(clb: u8) -> u32 {
    match clb {
        9.. => 50,
        7 | 8 => 25,
        _ => 0,
    }
}

fn education_language(signals: &TransferabilitySignals) -> u32 {
    if !signals.has_degree {
        return 0;
    }
    clb_tier(signals.clb)
}

fn education_canadian_experience(signals: &TransferabilitySignals) -> u32 {
    if !signals.has_degree {
        return 0;
    }
    match signals.canadian_years {
        0 => 0,
        1 => 25,
        _ => 50,
    }
}

fn foreign_experience_language(signals: &TransferabilitySignals) -> u32 {
    if signals.foreign_years == 0 || signals.clb < 7 {
        return 0;
    }
    transferability_grid(signals.foreign_years >= 3, signals.clb >= 9)
}

fn foreign_canadian_experience(signals: &TransferabilitySignals) -> u32 {
    if signals.foreign_years == 0 || signals.canadian_years == 0 {
        return 0;
    }
    transferability_grid(signals.foreign_years >= 3, signals.canadian_years >= 2)
}

fn certificate_language(signals: &TransferabilitySignals) -> u32 {
    if !signals.has_certificate {
        return 0;
    }
    clb_tier(signals.clb)
}
