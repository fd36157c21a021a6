//! Concatenate per-year enrollment tables into one [`EnrollmentCube`].

use enrollment_core::config::DatasetConfig;
use enrollment_core::cube::EnrollmentCube;
use enrollment_core::error::{EnrollmentError, Result};
use tracing::debug;

// ── YearTable ─────────────────────────────────────────────────────────────────

/// Enrollment counts for one year, flattened school-major:
/// `cells[school * num_grades + grade_offset]`. `None` marks missing data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearTable {
    pub year: i32,
    pub cells: Vec<Option<u32>>,
}

impl YearTable {
    pub fn new(year: i32, cells: Vec<Option<u32>>) -> Self {
        Self { year, cells }
    }
}

// ── build_cube ────────────────────────────────────────────────────────────────

/// Stack `tables` (one per year, first year first) into a
/// `(year, school, grade)` cube.
///
/// Fails with [`EnrollmentError::YearCount`] when the number of tables does
/// not cover the configured year range, and with
/// [`EnrollmentError::TableShape`] when a table does not hold exactly
/// `num_schools * num_grades` cells.
pub fn build_cube(config: DatasetConfig, tables: &[YearTable]) -> Result<EnrollmentCube> {
    let expected_years = config.num_years();
    if tables.len() != expected_years {
        return Err(EnrollmentError::YearCount {
            expected: expected_years,
            actual: tables.len(),
        });
    }

    let per_year = config.cells_per_year();
    let mut cells = Vec::with_capacity(expected_years * per_year);
    for table in tables {
        if table.cells.len() != per_year {
            return Err(EnrollmentError::TableShape {
                year: table.year,
                expected: per_year,
                actual: table.cells.len(),
            });
        }
        cells.extend_from_slice(&table.cells);
    }

    let cube = EnrollmentCube::from_cells(config, cells)?;
    debug!(
        shape = ?cube.shape(),
        absent = cube.view().iter().filter(Option::is_none).count(),
        "enrollment cube built"
    );
    Ok(cube)
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use enrollment_core::models::SchoolRecord;

    fn config() -> DatasetConfig {
        DatasetConfig::new(
            2020..=2021,
            10..=11,
            vec![
                SchoolRecord::new("Alpha High", 1),
                SchoolRecord::new("Beta High", 2),
                SchoolRecord::new("Gamma High", 3),
            ],
        )
        .unwrap()
    }

    fn table(year: i32, base: u32) -> YearTable {
        YearTable::new(year, (0..6).map(|i| Some(base + i)).collect())
    }

    #[test]
    fn test_build_cube_orders_year_school_grade() {
        let tables = vec![table(2020, 0), table(2021, 100)];
        let cube = build_cube(config(), &tables).unwrap();

        assert_eq!(cube.shape(), [2, 3, 2]);
        assert_eq!(cube.cell(2020, 0, 10).unwrap(), Some(0));
        assert_eq!(cube.cell(2020, 1, 11).unwrap(), Some(3));
        assert_eq!(cube.cell(2021, 2, 10).unwrap(), Some(104));
        assert_eq!(cube.cell(2021, 2, 11).unwrap(), Some(105));
    }

    #[test]
    fn test_build_cube_keeps_absent_cells() {
        let mut second = table(2021, 100);
        second.cells[3] = None;
        let cube = build_cube(config(), &[table(2020, 0), second]).unwrap();

        assert_eq!(cube.cell(2021, 1, 11).unwrap(), None);
        assert_eq!(cube.slice_by_year(2021).unwrap().values().count(), 5);
    }

    #[test]
    fn test_build_cube_rejects_missing_year() {
        let err = build_cube(config(), &[table(2020, 0)]).unwrap_err();
        assert!(matches!(
            err,
            EnrollmentError::YearCount {
                expected: 2,
                actual: 1
            }
        ));
        assert!(err.is_configuration());
    }

    #[test]
    fn test_build_cube_rejects_extra_year() {
        let tables = vec![table(2020, 0), table(2021, 0), table(2022, 0)];
        assert!(matches!(
            build_cube(config(), &tables),
            Err(EnrollmentError::YearCount { actual: 3, .. })
        ));
    }

    #[test]
    fn test_build_cube_rejects_short_table() {
        let mut short = table(2021, 0);
        short.cells.pop();
        let err = build_cube(config(), &[table(2020, 0), short]).unwrap_err();
        assert!(matches!(
            err,
            EnrollmentError::TableShape {
                year: 2021,
                expected: 6,
                actual: 5
            }
        ));
    }

    #[test]
    fn test_build_cube_rejects_long_table() {
        let mut long = table(2020, 0);
        long.cells.push(Some(7));
        assert!(matches!(
            build_cube(config(), &[long, table(2021, 0)]),
            Err(EnrollmentError::TableShape { actual: 7, .. })
        ));
    }
}
