use super::common::*;
use crate::assessment::domain::{
    ClbScores, EducationLevel, LanguageRecord, SpouseEducation, SpouseProfile,
    SpouseWorkExperience,
};
use crate::assessment::rules::spouse_language_points;
use crate::assessment::{calculate_spouse_points, PointsEngine};

#[test]
fn spouse_fixture_scores_each_factor() {
    let points = PointsEngine::default().spouse(&spouse());

    assert_eq!(points.education, 8);
    assert_eq!(points.language, 12);
    assert_eq!(points.canadian_experience, 8);
    assert_eq!(points.total(), 28);
    assert_eq!(calculate_spouse_points(&spouse()), 28);
}

#[test]
fn spouse_education_table() {
    let engine = PointsEngine::default();
    let score = |level| {
        engine
            .spouse(&SpouseProfile {
                education: Some(SpouseEducation { level }),
                ..SpouseProfile::default()
            })
            .education
    };

    assert_eq!(score(EducationLevel::HighSchool), 2);
    assert_eq!(score(EducationLevel::OneYearDiploma), 6);
    assert_eq!(score(EducationLevel::TwoOrMoreDegrees), 9);
    assert_eq!(score(EducationLevel::Phd), 10);
    assert_eq!(score(EducationLevel::Certificate), 0);
}

#[test]
fn spouse_language_scores_each_skill() {
    let record = LanguageRecord {
        language: "English".to_string(),
        clb_equivalent: Some(ClbScores {
            speaking: 9,
            listening: 7,
            reading: 5,
            writing: 4,
        }),
    };
    assert_eq!(spouse_language_points(&[record]), 5 + 3 + 1);
}

#[test]
fn spouse_language_is_capped_at_twenty() {
    let records = vec![language("English", 10), language("French", 9)];
    assert_eq!(spouse_language_points(&records), 20);
}

#[test]
fn spouse_work_experience_tiers() {
    let engine = PointsEngine::default();
    let score = |years: i32| {
        engine
            .spouse(&SpouseProfile {
                canadian_work_experience: vec![SpouseWorkExperience {
                    start_date: Some(date(2010, 1)),
                    end_date: Some(date(2010 + years, 1)),
                    hours_per_week: 35.0,
                }],
                ..SpouseProfile::default()
            })
            .canadian_experience
    };

    assert_eq!(score(0), 0);
    assert_eq!(score(1), 3);
    assert_eq!(score(2), 5);
    assert_eq!(score(4), 8);
    assert_eq!(score(7), 10);
}

#[test]
fn spouse_part_time_work_counts_half() {
    let spouse = SpouseProfile {
        canadian_work_experience: vec![SpouseWorkExperience {
            start_date: Some(date(2019, 1)),
            end_date: Some(date(2023, 1)),
            hours_per_week: 16.0,
        }],
        ..SpouseProfile::default()
    };
    assert_eq!(PointsEngine::default().spouse(&spouse).canadian_experience, 5);
}

#[test]
fn empty_spouse_profile_scores_zero() {
    assert_eq!(calculate_spouse_points(&SpouseProfile::default()), 0);
}
