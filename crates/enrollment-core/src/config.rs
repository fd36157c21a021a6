use std::collections::HashSet;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::cube::Axis;
use crate::error::{EnrollmentError, Result};
use crate::models::SchoolRecord;

// ── DatasetConfig ─────────────────────────────────────────────────────────────

/// Immutable description of the cube's extent: year range, grade range and the
/// school roster in declared order.
///
/// Passed explicitly to the assembler and the selector so that tests can
/// substitute small fixtures for the reference data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDatasetConfig")]
pub struct DatasetConfig {
    first_year: i32,
    last_year: i32,
    first_grade: i32,
    last_grade: i32,
    roster: Vec<SchoolRecord>,
    #[serde(skip)]
    num_years: usize,
    #[serde(skip)]
    num_grades: usize,
}

/// Unvalidated shape used for deserialization.
#[derive(Deserialize)]
struct RawDatasetConfig {
    first_year: i32,
    last_year: i32,
    first_grade: i32,
    last_grade: i32,
    roster: Vec<SchoolRecord>,
}

impl TryFrom<RawDatasetConfig> for DatasetConfig {
    type Error = EnrollmentError;

    fn try_from(raw: RawDatasetConfig) -> Result<Self> {
        DatasetConfig::new(
            raw.first_year..=raw.last_year,
            raw.first_grade..=raw.last_grade,
            raw.roster,
        )
    }
}

impl DatasetConfig {
    /// Build a configuration, rejecting inverted ranges, an empty roster,
    /// duplicate codes or names, and extents whose cell count does not fit in
    /// memory indices.
    pub fn new(
        years: RangeInclusive<i32>,
        grades: RangeInclusive<i32>,
        roster: Vec<SchoolRecord>,
    ) -> Result<Self> {
        if years.is_empty() {
            return Err(EnrollmentError::Config(format!(
                "year range {}..={} is empty",
                years.start(),
                years.end()
            )));
        }
        if grades.is_empty() {
            return Err(EnrollmentError::Config(format!(
                "grade range {}..={} is empty",
                grades.start(),
                grades.end()
            )));
        }
        if roster.is_empty() {
            return Err(EnrollmentError::Config("school roster is empty".to_string()));
        }

        let mut codes = HashSet::new();
        let mut names = HashSet::new();
        for school in &roster {
            if !codes.insert(school.code) {
                return Err(EnrollmentError::Config(format!(
                    "duplicate school code {}",
                    school.code
                )));
            }
            if !names.insert(school.normalized_name()) {
                return Err(EnrollmentError::Config(format!(
                    "duplicate school name {:?}",
                    school.name
                )));
            }
        }

        let num_years = span("year", &years)?;
        let num_grades = span("grade", &grades)?;
        num_years
            .checked_mul(roster.len())
            .and_then(|n| n.checked_mul(num_grades))
            .ok_or_else(|| {
                EnrollmentError::Config(format!(
                    "{} years x {} schools x {} grades is too many cells",
                    num_years,
                    roster.len(),
                    num_grades
                ))
            })?;

        Ok(Self {
            first_year: *years.start(),
            last_year: *years.end(),
            first_grade: *grades.start(),
            last_grade: *grades.end(),
            roster,
            num_years,
            num_grades,
        })
    }

    pub fn first_year(&self) -> i32 {
        self.first_year
    }

    pub fn last_year(&self) -> i32 {
        self.last_year
    }

    pub fn first_grade(&self) -> i32 {
        self.first_grade
    }

    pub fn last_grade(&self) -> i32 {
        self.last_grade
    }

    /// Every year in the dataset, ascending.
    pub fn years(&self) -> RangeInclusive<i32> {
        self.first_year..=self.last_year
    }

    /// Every grade in the dataset, ascending.
    pub fn grades(&self) -> RangeInclusive<i32> {
        self.first_grade..=self.last_grade
    }

    /// Schools in declared order.
    pub fn roster(&self) -> &[SchoolRecord] {
        &self.roster
    }

    pub fn num_years(&self) -> usize {
        self.num_years
    }

    pub fn num_schools(&self) -> usize {
        self.roster.len()
    }

    pub fn num_grades(&self) -> usize {
        self.num_grades
    }

    /// Number of cells in one yearly table (`num_schools * num_grades`).
    pub fn cells_per_year(&self) -> usize {
        self.num_schools() * self.num_grades()
    }

    /// Offset of `year` along the year axis.
    pub fn year_offset(&self, year: i32) -> Result<usize> {
        if self.years().contains(&year) {
            Ok(offset(self.first_year, year))
        } else {
            Err(EnrollmentError::OutOfRange {
                axis: Axis::Year,
                value: i64::from(year),
            })
        }
    }

    /// Offset of `grade` along the grade axis.
    pub fn grade_offset(&self, grade: i32) -> Result<usize> {
        if self.grades().contains(&grade) {
            Ok(offset(self.first_grade, grade))
        } else {
            Err(EnrollmentError::OutOfRange {
                axis: Axis::Grade,
                value: i64::from(grade),
            })
        }
    }

    /// Roster position of `school`, matched by code.
    pub fn school_position(&self, school: &SchoolRecord) -> Option<usize> {
        self.roster.iter().position(|s| s.code == school.code)
    }
}

/// Number of values in a non-empty inclusive range.
fn span(label: &str, range: &RangeInclusive<i32>) -> Result<usize> {
    let len = i64::from(*range.end()) - i64::from(*range.start()) + 1;
    usize::try_from(len).map_err(|_| {
        EnrollmentError::Config(format!(
            "{} range {}..={} is too large",
            label,
            range.start(),
            range.end()
        ))
    })
}

/// Distance from `first` to `value`; callers check `value` is in range.
fn offset(first: i32, value: i32) -> usize {
    (i64::from(value) - i64::from(first)) as usize
}

// ── Tests ──────────────────────────────────────────────────────────────────────
