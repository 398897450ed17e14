//! Comprehensive ranking points engine.
//!
//! Every scorer is a pure function of the profile it receives. Missing data contributes zero
//! points instead of failing, so partially completed profiles can still be assessed.

mod batch;
mod config;
pub mod domain;
pub mod duration;
mod loader;
pub mod router;
pub mod rules;
pub mod tables;

#[cfg(test)]
mod tests;

pub use batch::assess_batch;
pub use config::{DurationPolicy, EngineConfig};
pub use domain::{
    AdaptabilityFactors, CandidateProfile, ClbScores, EducationLevel, EducationRecord,
    JobOfferDetails, LanguageRecord, MaritalStatus, RelativesInCanada, SpouseEducation,
    SpouseProfile, SpouseWorkExperience, WorkExperienceRecord,
};
pub use loader::{load_profiles, load_profiles_from_path, ProfileLoadError};
pub use router::assessment_router;
pub use rules::{AdditionalPoints, CoreHumanCapital, SkillTransferability, SpousePoints};

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Stateless engine applying the rule tables under a given configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointsEngine {
    config: EngineConfig,
}

impl PointsEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn core_human_capital(&self, profile: &CandidateProfile) -> CoreHumanCapital {
        rules::score_core(profile, &self.config)
    }

    pub fn spouse(&self, spouse: &SpouseProfile) -> SpousePoints {
        rules::score_spouse(spouse, &self.config)
    }

    pub fn additional(&self, profile: &CandidateProfile) -> AdditionalPoints {
        rules::score_additional(profile, &self.config)
    }

    pub fn total(&self, profile: &CandidateProfile) -> u32 {
        self.assess(profile).total
    }

    pub fn assess(&self, profile: &CandidateProfile) -> Assessment {
        let core_human_capital = self.core_human_capital(profile);
        let spouse = profile
            .spouse_profile
            .as_ref()
            .map(|spouse| self.spouse(spouse));
        let additional = self.additional(profile);

        let total = core_human_capital.total()
            + spouse.map(|points| points.total()).unwrap_or(0)
            + additional.total();

        debug!(
            core = core_human_capital.total(),
            spouse = spouse.map(|points| points.total()),
            additional = additional.total(),
            total,
            "profile assessed"
        );

        Assessment {
            core_human_capital,
            spouse,
            additional,
            total,
        }
    }
}

/// Full breakdown of a single assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    pub core_human_capital: CoreHumanCapital,
    pub spouse: Option<SpousePoints>,
    pub additional: AdditionalPoints,
    pub total: u32,
}

impl Assessment {
    /// Flattened audit trail, one entry per factor.
    pub fn components(&self) -> Vec<ScoreComponent> {
        let core = &self.core_human_capital;
        let transfer = &self.additional.skill_transferability;
        let mut components = vec![
            ScoreComponent::new(FactorKind::Age, core.age),
            ScoreComponent::new(FactorKind::Education, core.education),
            ScoreComponent::new(FactorKind::Language, core.language),
            ScoreComponent::new(FactorKind::CanadianExperience, core.canadian_experience),
        ];

        if let Some(spouse) = &self.spouse {
            components.extend([
                ScoreComponent::new(FactorKind::SpouseEducation, spouse.education),
                ScoreComponent::new(FactorKind::SpouseLanguage, spouse.language),
                ScoreComponent::new(FactorKind::SpouseCanadianExperience, spouse.canadian_experience),
            ]);
        }

        let uncapped = transfer.uncapped();
        let transfer_notes = if uncapped > transfer.total() {
            format!("capped from {uncapped}")
        } else {
            String::new()
        };
        components.push(
            ScoreComponent::new(FactorKind::SkillTransferability, transfer.total())
                .with_notes(transfer_notes),
        );

        components.extend([
            ScoreComponent::new(
                FactorKind::ProvincialNomination,
                self.additional.provincial_nomination,
            ),
            ScoreComponent::new(FactorKind::JobOffer, self.additional.job_offer),
            ScoreComponent::new(FactorKind::CanadianEducation, self.additional.canadian_education),
            ScoreComponent::new(FactorKind::FrenchLanguage, self.additional.french_language),
            ScoreComponent::new(
                FactorKind::RelativesInCanada,
                self.additional.relatives_in_canada,
            ),
        ]);

        components
    }
}

/// Discrete contribution to an assessment, allowing transparent audits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: FactorKind,
    pub points: u32,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub notes: String,
}

impl ScoreComponent {
    fn new(factor: FactorKind, points: u32) -> Self {
        Self {
            factor,
            points,
            notes: String::new(),
        }
    }

    fn with_notes(mut self, notes: String) -> Self {
        self.notes = notes;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorKind {
    Age,
    Education,
    Language,
    CanadianExperience,
    SpouseEducation,
    SpouseLanguage,
    SpouseCanadianExperience,
    SkillTransferability,
    ProvincialNomination,
    JobOffer,
    CanadianEducation,
    FrenchLanguage,
    RelativesInCanada,
}

impl FactorKind {
    pub const fn label(self) -> &'static str {
        match self {
            FactorKind::Age => "Age",
            FactorKind::Education => "Education",
            FactorKind::Language => "Official languages",
            FactorKind::CanadianExperience => "Canadian work experience",
            FactorKind::SpouseEducation => "Spouse education",
            FactorKind::SpouseLanguage => "Spouse official language",
            FactorKind::SpouseCanadianExperience => "Spouse Canadian work experience",
            FactorKind::SkillTransferability => "Skill transferability",
            FactorKind::ProvincialNomination => "Provincial nomination",
            FactorKind::JobOffer => "Arranged employment",
            FactorKind::CanadianEducation => "Canadian education",
            FactorKind::FrenchLanguage => "French language ability",
            FactorKind::RelativesInCanada => "Relatives in Canada",
        }
    }
}

pub fn calculate_core_human_capital_points(profile: &CandidateProfile) -> u32 {
    PointsEngine::default().core_human_capital(profile).total()
}

pub fn calculate_spouse_points(spouse: &SpouseProfile) -> u32 {
    PointsEngine::default().spouse(spouse).total()
}

pub fn calculate_additional_points(profile: &CandidateProfile) -> u32 {
    PointsEngine::default().additional(profile).total()
}

/// Core, spouse (zero when absent) and additional points combined.
pub fn calculate_total_score(profile: &CandidateProfile) -> u32 {
    PointsEngine::default().total(profile)
}
