use chrono::{Datelike, NaiveDate};

use super::config::DurationPolicy;
use super::domain::{CandidateProfile, LanguageRecord, SpouseWorkExperience, WorkExperienceRecord};

/// Employment interval reduced to the fields duration arithmetic needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkInterval {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub hours_per_week: f64,
}

impl From<&WorkExperienceRecord> for WorkInterval {
    fn from(record: &WorkExperienceRecord) -> Self {
        Self {
            start: record.start_date,
            end: record.end_date,
            hours_per_week: record.hours_per_week,
        }
    }
}

impl From<&SpouseWorkExperience> for WorkInterval {
    fn from(record: &SpouseWorkExperience) -> Self {
        Self {
            start: record.start_date,
            end: record.end_date,
            hours_per_week: record.hours_per_week,
        }
    }
}

/// Whole-month difference ignoring day-of-month; negative when `end` precedes `start`.
pub fn months_between(start: NaiveDate, end: NaiveDate) -> i32 {
    (end.year() - start.year()) * 12 + (end.month() as i32 - start.month() as i32)
}

/// Full time counts fully, part time (15 to under 30 hours) counts half.
pub fn hours_weight(hours_per_week: f64) -> f64 {
    if hours_per_week >= 30.0 {
        1.0
    } else if hours_per_week >= 15.0 {
        0.5
    } else {
        0.0
    }
}

fn weighted_months(interval: &WorkInterval, policy: DurationPolicy) -> f64 {
    let (Some(start), Some(end)) = (interval.start, interval.end) else {
        return 0.0;
    };

    let weight = hours_weight(interval.hours_per_week);
    if weight == 0.0 {
        return 0.0;
    }

    let months = months_between(start, end);
    let months = match policy {
        DurationPolicy::Clamp => months.max(0),
        DurationPolicy::Propagate => months,
    };

    f64::from(months) * weight
}

/// Floors the weighted month total to whole years; never below zero.
pub fn qualifying_years<I>(intervals: I, policy: DurationPolicy) -> u32
where
    I: IntoIterator<Item = WorkInterval>,
{
    let total_months: f64 = intervals
        .into_iter()
        .map(|interval| weighted_months(&interval, policy))
        .sum();

    if total_months <= 0.0 {
        return 0;
    }

    (total_months / 12.0).floor() as u32
}

pub fn canadian_years(profile: &CandidateProfile, policy: DurationPolicy) -> u32 {
    experience_years(profile, policy, true)
}

pub fn foreign_years(profile: &CandidateProfile, policy: DurationPolicy) -> u32 {
    experience_years(profile, policy, false)
}

fn experience_years(profile: &CandidateProfile, policy: DurationPolicy, canadian: bool) -> u32 {
    qualifying_years(
        profile
            .work_experience
            .iter()
            .filter(|record| record.is_canadian_experience == canadian)
            .map(WorkInterval::from),
        policy,
    )
}

/// Weakest of the four skills; `None` when the record carries no benchmark.
pub fn effective_clb(record: &LanguageRecord) -> Option<u8> {
    record
        .clb_equivalent
        .as_ref()
        .and_then(|scores| scores.skills().into_iter().min())
}

pub fn highest_clb(records: &[LanguageRecord]) -> u8 {
    records.iter().filter_map(effective_clb).max().unwrap_or(0)
}

pub fn best_clb_for(records: &[LanguageRecord], language: &str) -> u8 {
    records
        .iter()
        .filter(|record| record.is_language(language))
        .filter_map(effective_clb)
        .max()
        .unwrap_or(0)
}
