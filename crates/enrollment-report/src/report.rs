//! Typed results for the fixed statistics report.
//!
//! [`SchoolReport`] covers the selected school, [`SystemReport`] the whole
//! school system. Both are plain data; see [`crate::render`] for output.

use enrollment_core::cube::{Axis, EnrollmentCube};
use enrollment_core::error::{EnrollmentError, Result};
use enrollment_core::models::SchoolRecord;
use enrollment_core::stats::ThresholdMedian;
use tracing::debug;

/// Cell values above this enrollment feed the school's threshold median.
pub const MEDIAN_THRESHOLD: u32 = 500;

// ── Row types ─────────────────────────────────────────────────────────────────

/// Mean enrollment of one grade across all years.
#[derive(Debug, Clone, PartialEq)]
pub struct GradeMean {
    pub grade: i32,
    pub mean: Option<f64>,
}

/// Total enrollment over all grades in one year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearTotal {
    pub year: i32,
    pub total: u64,
}

/// Mean single-cell enrollment across every school in one year.
#[derive(Debug, Clone, PartialEq)]
pub struct YearMean {
    pub year: i32,
    pub mean: Option<f64>,
}

// ── CubeSummary ───────────────────────────────────────────────────────────────

/// Shape and dimensionality of the assembled cube.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CubeSummary {
    pub shape: [usize; 3],
    pub ndim: usize,
}

impl CubeSummary {
    pub fn of(cube: &EnrollmentCube) -> Self {
        Self {
            shape: cube.shape(),
            ndim: cube.ndim(),
        }
    }
}

// ── SchoolReport ──────────────────────────────────────────────────────────────

/// Statistics for one selected school.
#[derive(Debug, Clone, PartialEq)]
pub struct SchoolReport {
    pub school: SchoolRecord,
    /// Mean per grade, lowest grade first.
    pub grade_means: Vec<GradeMean>,
    /// Largest single (year, grade) enrollment.
    pub highest: Option<u32>,
    /// Smallest single (year, grade) enrollment.
    pub lowest: Option<u32>,
    /// Total per year, first year first.
    pub yearly_totals: Vec<YearTotal>,
    /// Total over every year and grade.
    pub total: u64,
    /// Mean of [`SchoolReport::yearly_totals`]; a year without data counts as 0.
    pub mean_yearly_total: Option<f64>,
    /// Median of cells above [`MEDIAN_THRESHOLD`].
    pub median_over_threshold: ThresholdMedian,
}

impl SchoolReport {
    /// Compute the report for the school at roster position `school_idx`.
    pub fn compute(cube: &EnrollmentCube, school_idx: usize) -> Result<Self> {
        let config = cube.config();
        let school = config
            .roster()
            .get(school_idx)
            .cloned()
            .ok_or(EnrollmentError::OutOfRange {
                axis: Axis::School,
                value: school_idx as i64,
            })?;
        let school_view = cube.slice_by_school(school_idx)?;

        let grade_means = config
            .grades()
            .map(|grade| {
                let view = cube.slice_by_school_grade(school_idx, grade)?;
                Ok(GradeMean {
                    grade,
                    mean: view.mean(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let yearly_totals = config
            .years()
            .map(|year| {
                let view = cube.slice_by_school_year(school_idx, year)?;
                Ok(YearTotal {
                    year,
                    total: view.sum(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let mean_yearly_total = (!yearly_totals.is_empty()).then(|| {
            let sum: u64 = yearly_totals.iter().map(|t| t.total).sum();
            sum as f64 / yearly_totals.len() as f64
        });

        let report = Self {
            school,
            grade_means,
            highest: school_view.max(),
            lowest: school_view.min(),
            yearly_totals,
            total: school_view.sum(),
            mean_yearly_total,
            median_over_threshold: school_view.median_above(MEDIAN_THRESHOLD),
        };
        debug!(code = report.school.code, total = report.total, "school report computed");
        Ok(report)
    }
}

// ── SystemReport ──────────────────────────────────────────────────────────────

/// Statistics across every school.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemReport {
    pub first_year_mean: YearMean,
    pub last_year_mean: YearMean,
    /// Final year of the dataset.
    pub graduating_year: i32,
    /// Total enrollment in the last grade across all schools in the final year.
    pub graduating_total: u64,
    /// Largest single cell in the cube.
    pub highest: Option<u32>,
    /// Smallest single cell in the cube.
    pub lowest: Option<u32>,
}

impl SystemReport {
    pub fn compute(cube: &EnrollmentCube) -> Result<Self> {
        let config = cube.config();
        let first_year = config.first_year();
        let last_year = config.last_year();
        let last_grade = config.last_grade();
        let whole = cube.view();

        Ok(Self {
            first_year_mean: YearMean {
                year: first_year,
                mean: cube.slice_by_year(first_year)?.mean(),
            },
            last_year_mean: YearMean {
                year: last_year,
                mean: cube.slice_by_year(last_year)?.mean(),
            },
            graduating_year: last_year,
            graduating_total: cube.slice_by_year_grade(last_year, last_grade)?.sum(),
            highest: whole.max(),
            lowest: whole.min(),
        })
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use enrollment_core::config::DatasetConfig;

    /// 2 years × 2 schools × 2 grades.
    ///
    /// ```text
    ///           school 0     school 1
    /// 2020      [600, 400]   [10, None]
    /// 2021      [800, 700]   [None, None]
    /// ```
    fn fixture() -> EnrollmentCube {
        let config = DatasetConfig::new(
            2020..=2021,
            10..=11,
            vec![
                SchoolRecord::new("Alpha High", 11),
                SchoolRecord::new("Beta High", 22),
            ],
        )
        .unwrap();
        let cells = vec![
            Some(600),
            Some(400),
            Some(10),
            None,
            Some(800),
            Some(700),
            None,
            None,
        ];
        EnrollmentCube::from_cells(config, cells).unwrap()
    }

    // ── CubeSummary ───────────────────────────────────────────────────────────

    #[test]
    fn test_cube_summary() {
        let summary = CubeSummary::of(&fixture());
        assert_eq!(summary.shape, [2, 2, 2]);
        assert_eq!(summary.ndim, 3);
    }

    // ── SchoolReport ──────────────────────────────────────────────────────────

    #[test]
    fn test_school_report_values() {
        let report = SchoolReport::compute(&fixture(), 0).unwrap();

        assert_eq!(report.school.code, 11);
        assert_eq!(
            report.grade_means,
            vec![
                GradeMean {
                    grade: 10,
                    mean: Some(700.0)
                },
                GradeMean {
                    grade: 11,
                    mean: Some(550.0)
                },
            ]
        );
        assert_eq!(report.highest, Some(800));
        assert_eq!(report.lowest, Some(400));
        assert_eq!(
            report.yearly_totals,
            vec![
                YearTotal {
                    year: 2020,
                    total: 1000
                },
                YearTotal {
                    year: 2021,
                    total: 1500
                },
            ]
        );
        assert_eq!(report.total, 2500);
        assert_eq!(report.mean_yearly_total, Some(1250.0));
        // 600, 700, 800 exceed the threshold.
        assert_eq!(report.median_over_threshold, ThresholdMedian::Median(700.0));
    }

    #[test]
    fn test_school_report_with_absent_cells() {
        let report = SchoolReport::compute(&fixture(), 1).unwrap();

        assert_eq!(report.grade_means[0].mean, Some(10.0));
        assert_eq!(report.grade_means[1].mean, None);
        assert_eq!(report.highest, Some(10));
        assert_eq!(report.lowest, Some(10));
        assert_eq!(report.yearly_totals[1].total, 0);
        assert_eq!(report.total, 10);
        assert_eq!(report.mean_yearly_total, Some(5.0));
        assert_eq!(
            report.median_over_threshold,
            ThresholdMedian::NoQualifyingValues
        );
    }

    #[test]
    fn test_school_report_unknown_position() {
        assert!(matches!(
            SchoolReport::compute(&fixture(), 2),
            Err(EnrollmentError::OutOfRange { value: 2, .. })
        ));
    }

    // ── SystemReport ──────────────────────────────────────────────────────────

    #[test]
    fn test_system_report_values() {
        let report = SystemReport::compute(&fixture()).unwrap();

        assert_eq!(
            report.first_year_mean,
            YearMean {
                year: 2020,
                mean: Some(1010.0 / 3.0)
            }
        );
        assert_eq!(
            report.last_year_mean,
            YearMean {
                year: 2021,
                mean: Some(750.0)
            }
        );
        assert_eq!(report.graduating_year, 2021);
        assert_eq!(report.graduating_total, 700);
        assert_eq!(report.highest, Some(800));
        assert_eq!(report.lowest, Some(10));
    }
}
