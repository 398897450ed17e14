//! Rule tables expressed as sorted breakpoints.
//!
//! Each table maps a key to the value of the largest threshold not exceeding it. Keys below the
//! first threshold map to zero, so every table is total over its key type.

use super::domain::EducationLevel;

/// Ordered `(threshold, points)` pairs, ascending by threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepTable {
    steps: &'static [(i64, u32)],
}

impl StepTable {
    pub const fn new(steps: &'static [(i64, u32)]) -> Self {
        Self { steps }
    }

    pub fn lookup(&self, key: i64) -> u32 {
        self.steps
            .iter()
            .take_while(|(threshold, _)| *threshold <= key)
            .last()
            .map(|(_, points)| *points)
            .unwrap_or(0)
    }

    pub fn steps(&self) -> &'static [(i64, u32)] {
        self.steps
    }

    pub fn max_value(&self) -> u32 {
        self.steps.iter().map(|(_, points)| *points).max().unwrap_or(0)
    }
}

/// Pair of columns selected by whether an accompanying spouse is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DualStepTable {
    pub single: StepTable,
    pub with_spouse: StepTable,
}

impl DualStepTable {
    pub fn lookup(&self, key: i64, has_spouse: bool) -> u32 {
        if has_spouse {
            self.with_spouse.lookup(key)
        } else {
            self.single.lookup(key)
        }
    }
}

pub const AGE: DualStepTable = DualStepTable {
    single: StepTable::new(&[
        (17, 0),
        (18, 99),
        (19, 105),
        (20, 110),
        (30, 105),
        (31, 99),
        (32, 94),
        (33, 88),
        (34, 83),
        (35, 77),
        (36, 72),
        (37, 66),
        (38, 61),
        (39, 55),
        (40, 50),
        (41, 39),
        (42, 28),
        (43, 17),
        (44, 6),
        (45, 0),
    ]),
    with_spouse: StepTable::new(&[
        (17, 0),
        (18, 90),
        (19, 95),
        (20, 100),
        (30, 95),
        (31, 90),
        (32, 85),
        (33, 80),
        (34, 75),
        (35, 70),
        (36, 65),
        (37, 60),
        (38, 55),
        (39, 50),
        (40, 45),
        (41, 35),
        (42, 25),
        (43, 15),
        (44, 5),
        (45, 0),
    ]),
};

pub const FIRST_LANGUAGE: DualStepTable = DualStepTable {
    single: StepTable::new(&[(4, 6), (6, 9), (7, 17), (8, 23), (9, 31), (10, 34)]),
    with_spouse: StepTable::new(&[(4, 6), (6, 8), (7, 16), (8, 22), (9, 29), (10, 32)]),
};

pub const SECOND_LANGUAGE: StepTable = StepTable::new(&[(5, 1), (7, 3), (9, 6)]);

pub const CANADIAN_EXPERIENCE: DualStepTable = DualStepTable {
    single: StepTable::new(&[(1, 40), (2, 53), (3, 64), (4, 72), (5, 80)]),
    with_spouse: StepTable::new(&[(1, 35), (2, 46), (3, 56), (4, 63), (5, 70)]),
};

pub const SPOUSE_SKILL: StepTable = StepTable::new(&[(5, 1), (7, 3), (9, 5)]);

pub const SPOUSE_CANADIAN_EXPERIENCE: StepTable =
    StepTable::new(&[(1, 3), (2, 5), (3, 8), (5, 10)]);

pub const SPOUSE_LANGUAGE_CAP: u32 = 20;
pub const SKILL_TRANSFERABILITY_CAP: u32 = 100;
pub const PROVINCIAL_NOMINATION_POINTS: u32 = 600;
pub const RELATIVES_IN_CANADA_POINTS: u32 = 15;
pub const SENIOR_MANAGEMENT_OFFER_POINTS: u32 = 200;
pub const SKILLED_OFFER_POINTS: u32 = 50;
pub const FRENCH_WITH_ENGLISH_POINTS: u32 = 50;
pub const FRENCH_ONLY_POINTS: u32 = 25;

/// Candidate education points as `(single, with_spouse)`.
pub const fn education_points(level: EducationLevel) -> (u32, u32) {
    match level {
        EducationLevel::HighSchool => (30, 28),
        EducationLevel::OneYearDiploma => (90, 84),
        EducationLevel::TwoYearDiploma => (98, 91),
        EducationLevel::Bachelors => (120, 112),
        EducationLevel::TwoOrMoreDegrees => (128, 119),
        EducationLevel::Masters => (135, 126),
        EducationLevel::Phd => (150, 140),
        EducationLevel::Certificate | EducationLevel::Unknown => (0, 0),
    }
}

pub const fn spouse_education_points(level: EducationLevel) -> u32 {
    match level {
        EducationLevel::HighSchool => 2,
        EducationLevel::OneYearDiploma => 6,
        EducationLevel::TwoYearDiploma => 7,
        EducationLevel::Bachelors => 8,
        EducationLevel::TwoOrMoreDegrees => 9,
        EducationLevel::Masters | EducationLevel::Phd => 10,
        EducationLevel::Certificate | EducationLevel::Unknown => 0,
    }
}

pub const fn canadian_education_points(level: EducationLevel) -> u32 {
    match level {
        EducationLevel::OneYearDiploma => 15,
        EducationLevel::TwoYearDiploma
        | EducationLevel::Bachelors
        | EducationLevel::TwoOrMoreDegrees
        | EducationLevel::Masters
        | EducationLevel::Phd => 30,
        EducationLevel::HighSchool | EducationLevel::Certificate | EducationLevel::Unknown => 0,
    }
}

/// 13/25/25/50 grid shared by the two-axis skill-transferability factors.
///
/// Each flag selects the upper bucket of its axis.
pub const fn transferability_grid(first_high: bool, second_high: bool) -> u32 {
    match (first_high, second_high) {
        (false, false) => 13,
        (false, true) | (true, false) => 25,
        (true, true) => 50,
    }
}
