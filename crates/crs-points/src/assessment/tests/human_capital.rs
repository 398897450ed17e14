use super::common::*;
use crate::assessment::domain::{CandidateProfile, EducationLevel, LanguageRecord};
use crate::assessment::rules::{
    age_points, canadian_experience_points, education_points_for, language_points,
};
use crate::assessment::{calculate_core_human_capital_points, ClbScores, PointsEngine};

#[test]
fn age_points_follow_marital_column() {
    assert_eq!(age_points(Some(25), false), 110);
    assert_eq!(age_points(Some(25), true), 100);
    assert_eq!(age_points(Some(30), false), 105);
    assert_eq!(age_points(Some(44), true), 5);
    assert_eq!(age_points(Some(45), false), 0);
    assert_eq!(age_points(Some(52), true), 0);
    assert_eq!(age_points(Some(17), false), 0);
    assert_eq!(age_points(None, false), 0);
}

#[test]
fn education_takes_highest_credential() {
    let records = vec![
        education(EducationLevel::Bachelors),
        education(EducationLevel::Masters),
    ];
    assert_eq!(education_points_for(&records, false), 135);
    assert_eq!(education_points_for(&records, true), 126);
}

#[test]
fn unrecognised_and_certificate_levels_score_zero() {
    let records = vec![
        education(EducationLevel::Unknown),
        education(EducationLevel::Certificate),
    ];
    assert_eq!(education_points_for(&records, false), 0);
    assert_eq!(education_points_for(&[], false), 0);
}

#[test]
fn single_language_record_uses_first_language_tier() {
    assert_eq!(language_points(&[language("English", 9)], false), 31);
    assert_eq!(language_points(&[language("English", 9)], true), 29);
    assert_eq!(language_points(&[language("English", 4)], false), 6);
    assert_eq!(language_points(&[language("English", 3)], false), 0);
    assert_eq!(language_points(&[language("English", 12)], false), 34);
}

#[test]
fn second_language_adds_one_bonus() {
    let records = vec![language("English", 9), language("French", 9)];
    assert_eq!(language_points(&records, false), 37);

    let records = vec![language("English", 9), language("French", 6)];
    assert_eq!(language_points(&records, false), 32);
}

#[test]
fn same_language_twice_earns_no_bonus() {
    let records = vec![language("English", 9), language("english", 10)];
    assert_eq!(language_points(&records, false), 34);
}

#[test]
fn primary_language_is_best_tier_not_first_entry() {
    let records = vec![language("French", 7), language("English", 10)];
    assert_eq!(language_points(&records, false), 34 + 3);
}

#[test]
fn only_one_second_language_bonus_applies() {
    let records = vec![
        language("English", 10),
        language("French", 9),
        language("Spanish", 7),
    ];
    assert_eq!(language_points(&records, false), 34 + 6);
}

#[test]
fn second_language_below_tier_floor_is_ignored() {
    let records = vec![language("English", 9), language("French", 3)];
    assert_eq!(language_points(&records, false), 31);
}

#[test]
fn language_records_without_benchmark_are_skipped() {
    let records = vec![
        LanguageRecord {
            language: "English".to_string(),
            clb_equivalent: None,
        },
        LanguageRecord {
            language: "French".to_string(),
            clb_equivalent: Some(ClbScores {
                speaking: 8,
                listening: 8,
                reading: 8,
                writing: 8,
            }),
        },
    ];
    assert_eq!(language_points(&records, false), 23);
}

#[test]
fn canadian_experience_tiers() {
    assert_eq!(canadian_experience_points(0, false), 0);
    assert_eq!(canadian_experience_points(1, false), 40);
    assert_eq!(canadian_experience_points(1, true), 35);
    assert_eq!(canadian_experience_points(3, false), 64);
    assert_eq!(canadian_experience_points(3, true), 56);
    assert_eq!(canadian_experience_points(9, false), 80);
    assert_eq!(canadian_experience_points(9, true), 70);
}

#[test]
fn canadian_experience_from_intervals() {
    let engine = PointsEngine::default();
    let full_time = CandidateProfile {
        work_experience: vec![work(true, date(2020, 1), date(2023, 1), 40.0)],
        ..CandidateProfile::default()
    };
    assert_eq!(engine.core_human_capital(&full_time).canadian_experience, 64);

    let part_time = CandidateProfile {
        work_experience: vec![work(true, date(2020, 1), date(2023, 1), 20.0)],
        ..CandidateProfile::default()
    };
    assert_eq!(engine.core_human_capital(&part_time).canadian_experience, 40);

    let mut with_spouse = full_time.clone();
    with_spouse.spouse_profile = Some(spouse());
    assert_eq!(engine.core_human_capital(&with_spouse).canadian_experience, 56);

    let mut part_time_with_spouse = part_time.clone();
    part_time_with_spouse.spouse_profile = Some(spouse());
    assert_eq!(
        engine
            .core_human_capital(&part_time_with_spouse)
            .canadian_experience,
        35
    );
}

#[test]
fn foreign_experience_does_not_count_as_canadian() {
    let profile = CandidateProfile {
        work_experience: vec![foreign_job(6)],
        ..CandidateProfile::default()
    };
    let core = PointsEngine::default().core_human_capital(&profile);
    assert_eq!(core.canadian_experience, 0);
}

#[test]
fn core_total_is_sum_of_components() {
    let profile = skilled_worker();
    let core = PointsEngine::default().core_human_capital(&profile);

    assert_eq!(core.age, 105);
    assert_eq!(core.education, 120);
    assert_eq!(core.language, 31);
    assert_eq!(core.canadian_experience, 64);
    assert_eq!(core.total(), 320);
    assert_eq!(calculate_core_human_capital_points(&profile), 320);
}

#[test]
fn empty_profile_scores_zero() {
    assert_eq!(
        calculate_core_human_capital_points(&CandidateProfile::default()),
        0
    );
}
