/// Placeholder printed when a reduction had no present cells.
pub const NOT_AVAILABLE: &str = "n/a";

/// Truncate a statistic toward zero for display.
///
/// # Examples
///
/// ```
/// use enrollment_core::formatting::truncate;
///
/// assert_eq!(truncate(512.9), 512);
/// assert_eq!(truncate(0.4), 0);
/// assert_eq!(truncate(-3.7), -3);
/// ```
pub fn truncate(value: f64) -> i64 {
    value.trunc() as i64
}

/// Format an optional floating-point statistic as its truncated integer.
///
/// # Examples
///
/// ```
/// use enrollment_core::formatting::format_truncated;
///
/// assert_eq!(format_truncated(Some(354.66)), "354");
/// assert_eq!(format_truncated(None), "n/a");
/// ```
pub fn format_truncated(value: Option<f64>) -> String {
    match value {
        Some(v) => truncate(v).to_string(),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Format an optional cell count.
pub fn format_count(value: Option<u32>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |v| v.to_string())
}

/// Format an array shape the way it is conventionally printed, e.g.
/// `(10, 20, 3)`. A single axis keeps the trailing comma: `(3,)`.
///
/// # Examples
///
/// ```
/// use enrollment_core::formatting::format_shape;
///
/// assert_eq!(format_shape(&[10, 20, 3]), "(10, 20, 3)");
/// assert_eq!(format_shape(&[3]), "(3,)");
/// assert_eq!(format_shape(&[]), "()");
/// ```
pub fn format_shape(shape: &[usize]) -> String {
    match shape {
        [only] => format!("({},)", only),
        _ => {
            let parts: Vec<String> = shape.iter().map(|d| d.to_string()).collect();
            format!("({})", parts.join(", "))
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_does_not_round() {
        assert_eq!(truncate(99.999), 99);
        assert_eq!(truncate(100.0), 100);
    }

    #[test]
    fn test_format_truncated() {
        assert_eq!(format_truncated(Some(10.0)), "10");
        assert_eq!(format_truncated(Some(0.99)), "0");
        assert_eq!(format_truncated(None), NOT_AVAILABLE);
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(Some(742)), "742");
        assert_eq!(format_count(None), "n/a");
    }

    #[test]
    fn test_format_shape_two_axes() {
        assert_eq!(format_shape(&[10, 3]), "(10, 3)");
    }
}
