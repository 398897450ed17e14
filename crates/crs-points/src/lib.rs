pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;

pub use assessment::{
    calculate_additional_points, calculate_core_human_capital_points, calculate_spouse_points,
    calculate_total_score, Assessment, CandidateProfile, PointsEngine, SpouseProfile,
};
