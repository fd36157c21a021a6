use tracing::debug;

use crate::error::{EnrollmentError, Result};
use crate::models::{normalize, SchoolRecord};

/// Resolve free-form user input to a roster entry.
///
/// The input is trimmed and lower-cased, then compared against each school's
/// normalized name. When the whole trimmed input is an integer it is also
/// compared against each school's code. The first match in roster order wins.
///
/// Returns [`EnrollmentError::SchoolNotFound`] when nothing matches; input
/// that is not a number is never reported as a parse failure.
pub fn resolve_school<'a>(raw_input: &str, roster: &'a [SchoolRecord]) -> Result<&'a SchoolRecord> {
    let wanted = normalize(raw_input);
    let code: Option<i64> = wanted.parse().ok();

    let found = roster.iter().find(|school| {
        school.normalized_name() == wanted || code == Some(i64::from(school.code))
    });

    match found {
        Some(school) => {
            debug!(code = school.code, name = %school.name, "school resolved");
            Ok(school)
        }
        None => {
            debug!(input = %raw_input.trim(), "no school matches input");
            Err(EnrollmentError::SchoolNotFound(raw_input.trim().to_string()))
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
