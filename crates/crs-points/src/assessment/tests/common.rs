use chrono::NaiveDate;

use crate::assessment::domain::{
    CandidateProfile, ClbScores, EducationLevel, EducationRecord, LanguageRecord, SpouseEducation,
    SpouseProfile, SpouseWorkExperience, WorkExperienceRecord,
};

pub(super) fn date(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).expect("valid date")
}

pub(super) fn language(name: &str, level: u8) -> LanguageRecord {
    LanguageRecord {
        language: name.to_string(),
        clb_equivalent: Some(ClbScores::uniform(level)),
    }
}

pub(super) fn education(level: EducationLevel) -> EducationRecord {
    EducationRecord {
        level,
        country: Some("India".to_string()),
    }
}

pub(super) fn canadian_education(level: EducationLevel) -> EducationRecord {
    EducationRecord {
        level,
        country: Some("Canada".to_string()),
    }
}

pub(super) fn work(
    canadian: bool,
    start: NaiveDate,
    end: NaiveDate,
    hours_per_week: f64,
) -> WorkExperienceRecord {
    WorkExperienceRecord {
        is_canadian_experience: canadian,
        start_date: Some(start),
        end_date: Some(end),
        hours_per_week,
    }
}

/// Full-time Canadian job spanning `years` whole years from January 2015.
pub(super) fn canadian_job(years: i32) -> WorkExperienceRecord {
    work(true, date(2015, 1), date(2015 + years, 1), 40.0)
}

pub(super) fn foreign_job(years: i32) -> WorkExperienceRecord {
    work(false, date(2008, 1), date(2008 + years, 1), 40.0)
}

pub(super) fn spouse() -> SpouseProfile {
    SpouseProfile {
        education: Some(SpouseEducation {
            level: EducationLevel::Bachelors,
        }),
        language_proficiency: vec![language("English", 7)],
        canadian_work_experience: vec![SpouseWorkExperience {
            start_date: Some(date(2020, 1)),
            end_date: Some(date(2023, 1)),
            hours_per_week: 40.0,
        }],
    }
}

/// Age 30, bachelor's, English CLB 9 across the board, three full years in Canada.
pub(super) fn skilled_worker() -> CandidateProfile {
    CandidateProfile {
        age: Some(30),
        education: vec![education(EducationLevel::Bachelors)],
        language_proficiency: vec![language("English", 9)],
        work_experience: vec![work(true, date(2020, 1), date(2023, 1), 35.0)],
        has_provincial_nomination: true,
        ..CandidateProfile::default()
    }
}
