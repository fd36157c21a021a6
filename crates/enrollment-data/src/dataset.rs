//! The bundled Calgary high school enrollment dataset.
//!
//! The roster, the year and grade ranges and the ten yearly tables ship as a
//! JSON document compiled into the binary. Each table lists one row per
//! school in roster order with one count per grade; `null` marks a grade for
//! which no enrollment was recorded.
//!
//! The roster and ranges are the real ones. The yearly counts are
//! representative figures, not published enrollment data.

use enrollment_core::config::DatasetConfig;
use enrollment_core::cube::EnrollmentCube;
use enrollment_core::error::{EnrollmentError, Result};
use serde::Deserialize;
use tracing::debug;

use crate::assembler::{build_cube, YearTable};

const REFERENCE_JSON: &str = include_str!("../data/enrollment.json");

// ── Document shape ────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct DatasetDocument {
    config: DatasetConfig,
    tables: Vec<TableDocument>,
}

#[derive(Debug, Deserialize)]
struct TableDocument {
    year: i32,
    rows: Vec<Vec<Option<u32>>>,
}

// ── Dataset ───────────────────────────────────────────────────────────────────

/// A validated configuration plus its yearly tables, ready for assembly.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub config: DatasetConfig,
    pub tables: Vec<YearTable>,
}

impl Dataset {
    /// Assemble the tables into a cube.
    pub fn into_cube(self) -> Result<EnrollmentCube> {
        build_cube(self.config, &self.tables)
    }
}

/// Load the dataset bundled with the crate.
pub fn reference_dataset() -> Result<Dataset> {
    parse_dataset(REFERENCE_JSON)
}

/// Load and assemble the bundled dataset in one step.
pub fn reference_cube() -> Result<EnrollmentCube> {
    reference_dataset()?.into_cube()
}

/// Parse a dataset document.
///
/// Besides JSON syntax this checks that tables appear in year order starting
/// at `first_year` and that every row has one cell per grade. Table count and
/// table size are left to [`build_cube`].
pub fn parse_dataset(json: &str) -> Result<Dataset> {
    let document: DatasetDocument = serde_json::from_str(json)?;
    let config = document.config;
    let grades = config.num_grades();

    let mut tables = Vec::with_capacity(document.tables.len());
    for (expected_year, table) in config.years().zip(document.tables.iter()) {
        if table.year != expected_year {
            return Err(EnrollmentError::Config(format!(
                "table for {} found where {} was expected",
                table.year, expected_year
            )));
        }
        if let Some((school, row)) = table
            .rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != grades)
        {
            return Err(EnrollmentError::Config(format!(
                "table {} row {} has {} grades, expected {}",
                table.year,
                school,
                row.len(),
                grades
            )));
        }
        tables.push(YearTable::new(table.year, table.rows.concat()));
    }
    // Surplus tables beyond last_year are kept so build_cube reports the count.
    for table in document.tables.iter().skip(config.num_years()) {
        tables.push(YearTable::new(table.year, table.rows.concat()));
    }

    debug!(
        years = tables.len(),
        schools = config.num_schools(),
        grades,
        "dataset parsed"
    );

    Ok(Dataset { config, tables })
}

// ── Tests ──────────────────────────────────────────────────────────────────────
