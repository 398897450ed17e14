use clap::Args;
use crs_points::assessment::{
    assess_batch, load_profiles_from_path, DurationPolicy, EngineConfig,
};
use crs_points::config::AppConfig;
use crs_points::error::AppError;
use crs_points::telemetry;
use crs_points::{Assessment, PointsEngine};
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// JSON file holding a candidate profile or an array of profiles
    pub(crate) profile: PathBuf,
    /// Print every factor contribution, not just the sub-totals
    #[arg(long)]
    pub(crate) components: bool,
    /// Override APP_NEGATIVE_DURATIONS (clamp or propagate)
    #[arg(long, value_parser = parse_duration_policy)]
    pub(crate) negative_durations: Option<DurationPolicy>,
}

fn parse_duration_policy(raw: &str) -> Result<DurationPolicy, String> {
    DurationPolicy::parse(raw).ok_or_else(|| format!("expected 'clamp' or 'propagate', got '{raw}'"))
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        profile,
        components,
        negative_durations,
    } = args;

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let engine_config = EngineConfig {
        negative_durations: negative_durations.unwrap_or(config.engine.negative_durations),
    };
    let engine = PointsEngine::new(engine_config);

    let profiles = load_profiles_from_path(&profile)?;
    info!(
        path = %profile.display(),
        profiles = profiles.len(),
        policy = engine_config.negative_durations.label(),
        "scoring profiles"
    );

    for (index, assessment) in assess_batch(&engine, &profiles).iter().enumerate() {
        print!("{}", render_assessment(index + 1, assessment, components));
    }

    Ok(())
}

pub(crate) fn render_assessment(position: usize, assessment: &Assessment, components: bool) -> String {
    let transfer = &assessment.additional.skill_transferability;
    let spouse = assessment
        .spouse
        .map(|points| points.total().to_string())
        .unwrap_or_else(|| "n/a".to_string());

    let mut lines = vec![
        format!("Profile #{position}: {} points", assessment.total),
        format!("- Core human capital: {}", assessment.core_human_capital.total()),
        format!("- Spouse factors: {spouse}"),
        format!("- Additional points: {}", assessment.additional.total()),
        format!(
            "  (skill transferability {} of {} earned)",
            transfer.total(),
            transfer.uncapped()
        ),
    ];

    if components {
        lines.extend(assessment.components().into_iter().map(|component| {
            if component.notes.is_empty() {
                format!("  * {}: {}", component.factor.label(), component.points)
            } else {
                format!(
                    "  * {}: {} ({})",
                    component.factor.label(),
                    component.points,
                    component.notes
                )
            }
        }));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crs_points::CandidateProfile;

    #[test]
    fn rejects_unknown_duration_policy() {
        assert_eq!(parse_duration_policy("Clamp"), Ok(DurationPolicy::Clamp));
        assert!(parse_duration_policy("round").is_err());
    }

    #[test]
    fn renders_sub_totals_and_components() {
        let profile = CandidateProfile {
            age: Some(25),
            has_provincial_nomination: true,
            ..CandidateProfile::default()
        };
        let assessment = PointsEngine::default().assess(&profile);

        let summary = render_assessment(1, &assessment, false);
        assert!(summary.starts_with("Profile #1: 710 points"));
        assert!(summary.contains("Spouse factors: n/a"));
        assert!(!summary.contains("  * Age"));

        let detailed = render_assessment(1, &assessment, true);
        assert!(detailed.contains("  * Age: 110"));
        assert!(detailed.contains("  * Provincial nomination: 600"));
    }

    #[test]
    fn renders_one_line_per_entry_with_spouse_total() {
        let profile = CandidateProfile {
            age: Some(25),
            spouse_profile: Some(crs_points::SpouseProfile::default()),
            ..CandidateProfile::default()
        };
        let assessment = PointsEngine::default().assess(&profile);

        let summary = render_assessment(2, &assessment, false);
        assert!(summary.ends_with("earned)\n"));
        assert_eq!(summary.lines().count(), 5);
        assert!(summary.contains("- Spouse factors: 0\n"));

        let detailed = render_assessment(2, &assessment, true);
        assert_eq!(detailed.lines().count(), 5 + assessment.components().len());
    }
}
