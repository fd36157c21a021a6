//! Report layer for the school enrollment statistics tool.
//!
//! Runs the fixed sequence of cube queries for a selected school and for the
//! whole school system, and renders the results as plain text.

pub mod render;
pub mod report;

pub use enrollment_core as core;
pub use report::{CubeSummary, SchoolReport, SystemReport, MEDIAN_THRESHOLD};

use std::io::Write;

use enrollment_core::cube::EnrollmentCube;
use enrollment_core::error::Result;

/// Compute and write the school section followed by the system section.
pub fn write_full_report<W: Write>(
    out: &mut W,
    cube: &EnrollmentCube,
    school_idx: usize,
) -> Result<()> {
    let school = SchoolReport::compute(cube, school_idx)?;
    let system = SystemReport::compute(cube)?;
    render::render_school(out, &school)?;
    render::render_system(out, &system)?;
    Ok(())
}

// ── Tests ──────────────────────────────────────────────────────────────────────
