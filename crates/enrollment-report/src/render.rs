//! Plain-text rendering of the report sections.
//!
//! Each function writes complete lines to any [`Write`] sink; statistics are
//! truncated toward zero and reductions with no data print as `n/a`.

use std::io::{self, Write};

use enrollment_core::formatting::{format_count, format_shape, format_truncated, truncate};
use enrollment_core::stats::ThresholdMedian;

use crate::report::{CubeSummary, SchoolReport, SystemReport, MEDIAN_THRESHOLD};

pub const TITLE: &str = "ENSF 692 School Enrollment Statistics";
pub const SCHOOL_BANNER: &str = "***Requested School Statistics***";
pub const SYSTEM_BANNER: &str = "***General Statistics for All Schools***";

/// Program title plus cube shape and dimensionality.
pub fn render_header<W: Write>(out: &mut W, summary: &CubeSummary) -> io::Result<()> {
    writeln!(out, "{}", TITLE)?;
    writeln!(out)?;
    writeln!(out, "Shape of full data array: {}", format_shape(&summary.shape))?;
    writeln!(out, "Dimensions of full data array: {}", summary.ndim)?;
    Ok(())
}

pub fn render_school<W: Write>(out: &mut W, report: &SchoolReport) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", SCHOOL_BANNER)?;
    writeln!(out)?;
    writeln!(out, "School Name: {}", report.school.name)?;
    writeln!(out, "School Code: {}", report.school.code)?;

    for grade in &report.grade_means {
        writeln!(
            out,
            "Mean enrollment for Grade {}: {}",
            grade.grade,
            format_truncated(grade.mean)
        )?;
    }
    writeln!(
        out,
        "Highest enrollment for a single grade: {}",
        format_count(report.highest)
    )?;
    writeln!(
        out,
        "Lowest enrollment for a single grade: {}",
        format_count(report.lowest)
    )?;

    for year in &report.yearly_totals {
        writeln!(out, "Total enrollment for {}: {}", year.year, year.total)?;
    }

    let years = report.yearly_totals.len();
    writeln!(out, "Total {} year enrollment: {}", years, report.total)?;
    writeln!(
        out,
        "Mean total enrollment over {} years: {}",
        years,
        format_truncated(report.mean_yearly_total)
    )?;

    match report.median_over_threshold {
        ThresholdMedian::Median(median) => writeln!(
            out,
            "For all enrollments over {}, the median value was: {}",
            MEDIAN_THRESHOLD,
            truncate(median)
        )?,
        ThresholdMedian::NoQualifyingValues => {
            writeln!(out, "No enrollments over {}.", MEDIAN_THRESHOLD)?
        }
    }
    Ok(())
}

pub fn render_system<W: Write>(out: &mut W, report: &SystemReport) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", SYSTEM_BANNER)?;
    writeln!(out)?;
    for year in [&report.first_year_mean, &report.last_year_mean] {
        writeln!(
            out,
            "Mean enrollment in {}: {}",
            year.year,
            format_truncated(year.mean)
        )?;
    }
    writeln!(
        out,
        "Total graduating class of {}: {}",
        report.graduating_year, report.graduating_total
    )?;
    writeln!(
        out,
        "Highest enrollment for a single grade: {}",
        format_count(report.highest)
    )?;
    writeln!(
        out,
        "Lowest enrollment for a single grade: {}",
        format_count(report.lowest)
    )?;
    Ok(())
}

// ── Tests ──────────────────────────────────────────────────────────────────────
