mod additional;
mod human_capital;
mod spouse;
mod transferability;

pub use self::additional::{
    canadian_education_bonus, french_language_points, job_offer_points, AdditionalPoints,
};
pub use self::human_capital::{
    age_points, canadian_experience_points, education_points_for, language_points,
    CoreHumanCapital,
};
pub use self::spouse::{spouse_language_points, SpousePoints};
pub use self::transferability::SkillTransferability;

pub(crate) use self::additional::score_additional;
pub(crate) use self::human_capital::score_core;
pub(crate) use self::spouse::score_spouse;
