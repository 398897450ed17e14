use super::common::*;
use crate::assessment::domain::{
    AdaptabilityFactors, CandidateProfile, EducationLevel, JobOfferDetails, RelativesInCanada,
};
use crate::assessment::rules::{
    canadian_education_bonus, french_language_points, job_offer_points,
};
use crate::assessment::{calculate_additional_points, PointsEngine};

fn offer(noc: &str, lmia_exempt: bool) -> JobOfferDetails {
    JobOfferDetails {
        noc: noc.to_string(),
        lmia_exempt,
    }
}

#[test]
fn job_offer_tiers_by_noc_prefix() {
    assert_eq!(job_offer_points(true, Some(&offer("0012", false))), 200);
    assert_eq!(job_offer_points(true, Some(&offer("0112", false))), 50);
    assert_eq!(job_offer_points(true, Some(&offer("2171", false))), 50);
    assert_eq!(job_offer_points(true, Some(&offer("3012", false))), 50);
    assert_eq!(job_offer_points(true, Some(&offer("6321", false))), 0);
    assert_eq!(job_offer_points(true, Some(&offer("", false))), 0);
}

#[test]
fn job_offer_requires_flag_details_and_lmia() {
    assert_eq!(job_offer_points(false, Some(&offer("0012", false))), 0);
    assert_eq!(job_offer_points(true, None), 0);
    assert_eq!(job_offer_points(true, Some(&offer("0012", true))), 0);
}

#[test]
fn canadian_education_uses_best_canadian_credential() {
    let records = vec![
        canadian_education(EducationLevel::OneYearDiploma),
        education(EducationLevel::Phd),
    ];
    assert_eq!(canadian_education_bonus(&records), 15);

    let records = vec![
        canadian_education(EducationLevel::OneYearDiploma),
        canadian_education(EducationLevel::Masters),
    ];
    assert_eq!(canadian_education_bonus(&records), 30);

    let records = vec![canadian_education(EducationLevel::HighSchool)];
    assert_eq!(canadian_education_bonus(&records), 0);

    assert_eq!(canadian_education_bonus(&[education(EducationLevel::Masters)]), 0);
}

#[test]
fn french_bonus_depends_on_english() {
    let strong_english = vec![language("French", 8), language("English", 6)];
    assert_eq!(french_language_points(&strong_english), 50);

    let weak_english = vec![language("French", 8), language("English", 4)];
    assert_eq!(french_language_points(&weak_english), 25);

    let french_only = vec![language("French", 8)];
    assert_eq!(french_language_points(&french_only), 25);

    let weak_french = vec![language("French", 6), language("English", 9)];
    assert_eq!(french_language_points(&weak_french), 0);
}

#[test]
fn flat_bonuses_apply_independently() {
    let profile = CandidateProfile {
        has_provincial_nomination: true,
        adaptability_factors: Some(AdaptabilityFactors {
            relatives_in_canada: Some(RelativesInCanada { has: true }),
        }),
        ..CandidateProfile::default()
    };

    let additional = PointsEngine::default().additional(&profile);
    assert_eq!(additional.provincial_nomination, 600);
    assert_eq!(additional.relatives_in_canada, 15);
    assert_eq!(additional.total(), 615);
}

#[test]
fn additional_total_combines_every_term() {
    let profile = CandidateProfile {
        education: vec![canadian_education(EducationLevel::Masters)],
        language_proficiency: vec![language("English", 9), language("French", 7)],
        work_experience: vec![canadian_job(2)],
        has_job_offer: true,
        job_offer_details: Some(offer("0013", false)),
        has_provincial_nomination: true,
        adaptability_factors: Some(AdaptabilityFactors {
            relatives_in_canada: Some(RelativesInCanada { has: true }),
        }),
        ..CandidateProfile::default()
    };

    let additional = PointsEngine::default().additional(&profile);
    assert_eq!(additional.skill_transferability.total(), 100);
    assert_eq!(additional.job_offer, 200);
    assert_eq!(additional.canadian_education, 30);
    assert_eq!(additional.french_language, 50);
    assert_eq!(
        calculate_additional_points(&profile),
        100 + 600 + 200 + 30 + 50 + 15
    );
}

#[test]
fn empty_profile_has_no_additional_points() {
    assert_eq!(calculate_additional_points(&CandidateProfile::default()), 0);
}
