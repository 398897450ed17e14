use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

/// Candidate snapshot supplied by the caller for a single assessment.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CandidateProfile {
    #[serde(deserialize_with = "lenient")]
    pub age: Option<u32>,
    #[serde(deserialize_with = "lenient")]
    pub marital_status: MaritalStatus,
    #[serde(deserialize_with = "lenient_list")]
    pub education: Vec<EducationRecord>,
    #[serde(deserialize_with = "lenient_list")]
    pub language_proficiency: Vec<LanguageRecord>,
    #[serde(deserialize_with = "lenient_list")]
    pub work_experience: Vec<WorkExperienceRecord>,
    #[serde(deserialize_with = "lenient")]
    pub has_job_offer: bool,
    #[serde(deserialize_with = "lenient")]
    pub job_offer_details: Option<JobOfferDetails>,
    #[serde(deserialize_with = "lenient")]
    pub has_provincial_nomination: bool,
    #[serde(deserialize_with = "lenient")]
    pub adaptability_factors: Option<AdaptabilityFactors>,
    #[serde(deserialize_with = "lenient")]
    pub spouse_profile: Option<SpouseProfile>,
}

impl CandidateProfile {
    /// Accompanying-spouse branches key off the spouse profile, not the marital status.
    pub fn has_spouse(&self) -> bool {
        self.spouse_profile.is_some()
    }

    pub fn has_relatives_in_canada(&self) -> bool {
        self.adaptability_factors
            .as_ref()
            .and_then(|factors| factors.relatives_in_canada.as_ref())
            .map(|relatives| relatives.has)
            .unwrap_or(false)
    }
}

/// Informational only; scoring never branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MaritalStatus {
    #[default]
    Single,
    Married,
    CommonLaw,
    Divorced,
    Separated,
    Widowed,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationRecord {
    #[serde(default, deserialize_with = "lenient")]
    pub level: EducationLevel,
    #[serde(default, deserialize_with = "lenient")]
    pub country: Option<String>,
}

impl EducationRecord {
    pub fn is_canadian(&self) -> bool {
        self.country
            .as_deref()
            .map(|country| country.trim().eq_ignore_ascii_case("canada"))
            .unwrap_or(false)
    }
}

/// Credential levels recognised by the rule tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EducationLevel {
    HighSchool,
    OneYearDiploma,
    TwoYearDiploma,
    Bachelors,
    TwoOrMoreDegrees,
    Masters,
    Phd,
    Certificate,
    #[default]
    #[serde(other)]
    Unknown,
}

impl EducationLevel {
    /// Bachelor's or higher; diplomas, high school and certificates are excluded.
    pub const fn is_degree(self) -> bool {
        matches!(
            self,
            EducationLevel::Bachelors
                | EducationLevel::TwoOrMoreDegrees
                | EducationLevel::Masters
                | EducationLevel::Phd
        )
    }

    pub const fn label(self) -> &'static str {
        match self {
            EducationLevel::HighSchool => "high school",
            EducationLevel::OneYearDiploma => "one-year diploma",
            EducationLevel::TwoYearDiploma => "two-year diploma",
            EducationLevel::Bachelors => "bachelor's degree",
            EducationLevel::TwoOrMoreDegrees => "two or more degrees",
            EducationLevel::Masters => "master's degree",
            EducationLevel::Phd => "doctorate",
            EducationLevel::Certificate => "trade certificate",
            EducationLevel::Unknown => "unrecognised credential",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LanguageRecord {
    #[serde(deserialize_with = "lenient")]
    pub language: String,
    #[serde(deserialize_with = "lenient")]
    pub clb_equivalent: Option<ClbScores>,
}

impl LanguageRecord {
    pub fn is_language(&self, name: &str) -> bool {
        self.language.trim().eq_ignore_ascii_case(name.trim())
    }
}

/// Canadian Language Benchmark result per skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClbScores {
    #[serde(deserialize_with = "lenient")]
    pub speaking: u8,
    #[serde(deserialize_with = "lenient")]
    pub listening: u8,
    #[serde(deserialize_with = "lenient")]
    pub reading: u8,
    #[serde(deserialize_with = "lenient")]
    pub writing: u8,
}

impl ClbScores {
    pub const fn uniform(level: u8) -> Self {
        Self {
            speaking: level,
            listening: level,
            reading: level,
            writing: level,
        }
    }

    pub fn skills(&self) -> [u8; 4] {
        [self.speaking, self.listening, self.reading, self.writing]
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkExperienceRecord {
    #[serde(deserialize_with = "lenient")]
    pub is_canadian_experience: bool,
    #[serde(deserialize_with = "lenient_date")]
    pub start_date: Option<NaiveDate>,
    #[serde(deserialize_with = "lenient_date")]
    pub end_date: Option<NaiveDate>,
    #[serde(deserialize_with = "lenient")]
    pub hours_per_week: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobOfferDetails {
    #[serde(deserialize_with = "lenient")]
    pub noc: String,
    #[serde(deserialize_with = "lenient")]
    pub lmia_exempt: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdaptabilityFactors {
    #[serde(deserialize_with = "lenient")]
    pub relatives_in_canada: Option<RelativesInCanada>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RelativesInCanada {
    #[serde(deserialize_with = "lenient")]
    pub has: bool,
}

/// Accompanying spouse or common-law partner.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpouseProfile {
    #[serde(deserialize_with = "lenient")]
    pub education: Option<SpouseEducation>,
    #[serde(deserialize_with = "lenient_list")]
    pub language_proficiency: Vec<LanguageRecord>,
    #[serde(deserialize_with = "lenient_list")]
    pub canadian_work_experience: Vec<SpouseWorkExperience>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SpouseEducation {
    #[serde(deserialize_with = "lenient")]
    pub level: EducationLevel,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpouseWorkExperience {
    #[serde(deserialize_with = "lenient_date")]
    pub start_date: Option<NaiveDate>,
    #[serde(deserialize_with = "lenient_date")]
    pub end_date: Option<NaiveDate>,
    #[serde(deserialize_with = "lenient")]
    pub hours_per_week: f64,
}

/// Null or mistyped values fall back to the field default instead of failing the profile.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(T::default());
    }

    Ok(serde_json::from_value(value).unwrap_or_else(|err| {
        warn!(error = %err, "ignoring malformed profile field");
        T::default()
    }))
}

/// Keeps the well-formed entries of a list; anything other than an array is an empty list.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let Value::Array(entries) = Value::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };

    Ok(entries
        .into_iter()
        .filter_map(|entry| match serde_json::from_value(entry) {
            Ok(record) => Some(record),
            Err(err) => {
                warn!(error = %err, "ignoring malformed profile record");
                None
            }
        })
        .collect())
}

/// Accepts `YYYY-MM-DD` or a full timestamp; anything else degrades to `None`.
fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(raw) => parse_date(&raw),
        Value::Null => None,
        other => {
            warn!(value = %other, "ignoring non-string work experience date");
            None
        }
    })
}

pub(crate) fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    // Timestamps such as `2020-01-15T00:00:00.000Z` keep only their date part.
    let date_part = trimmed.get(..10).unwrap_or(trimmed);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(err) => {
            warn!(value = %raw, error = %err, "ignoring unparsable work experience date");
            None
        }
    }
}
