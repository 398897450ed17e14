use super::{Assessment, CandidateProfile, PointsEngine};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Scores every profile independently, preserving input order.
#[cfg(feature = "parallel")]
pub fn assess_batch(engine: &PointsEngine, profiles: &[CandidateProfile]) -> Vec<Assessment> {
    profiles
        .par_iter()
        .map(|profile| engine.assess(profile))
        .collect()
}

/// Scores every profile independently, preserving input order.
#[cfg(not(feature = "parallel"))]
pub fn assess_batch(engine: &PointsEngine, profiles: &[CandidateProfile]) -> Vec<Assessment> {
    profiles
        .iter()
        .map(|profile| engine.assess(profile))
        .collect()
}
