//! Reductions over enrollment cells.
//!
//! Every function takes a sequence of `Option<u32>` cells and skips `None`
//! (no data recorded). Absent cells never count as zero and never raise an
//! error; when nothing is left to reduce, the reduction returns `None`.

// ── Percentile helper ─────────────────────────────────────────────────────────

/// Compute the `p`-th percentile of a **sorted** slice using linear
/// interpolation between closest ranks.
///
/// Returns `None` for an empty slice.
pub fn percentile(sorted_data: &[f64], p: f64) -> Option<f64> {
    let len = sorted_data.len();
    match len {
        0 => None,
        1 => Some(sorted_data[0]),
        _ => {
            let rank = (p / 100.0) * (len as f64 - 1.0);
            let lo = rank.floor() as usize;
            let hi = rank.ceil() as usize;
            if lo == hi {
                return Some(sorted_data[lo]);
            }
            let frac = rank - lo as f64;
            Some(sorted_data[lo] + frac * (sorted_data[hi] - sorted_data[lo]))
        }
    }
}

// ── Reductions ────────────────────────────────────────────────────────────────

/// Sum of the present cells; `0` when none are present.
pub fn sum<I>(cells: I) -> u64
where
    I: IntoIterator<Item = Option<u32>>,
{
    cells.into_iter().flatten().map(u64::from).sum()
}

/// Arithmetic mean of the present cells.
pub fn mean<I>(cells: I) -> Option<f64>
where
    I: IntoIterator<Item = Option<u32>>,
{
    let (total, count) = cells
        .into_iter()
        .flatten()
        .fold((0u64, 0usize), |(total, count), v| {
            (total + u64::from(v), count + 1)
        });
    (count > 0).then(|| total as f64 / count as f64)
}

/// Largest present cell.
pub fn max<I>(cells: I) -> Option<u32>
where
    I: IntoIterator<Item = Option<u32>>,
{
    cells.into_iter().flatten().max()
}

/// Smallest present cell.
pub fn min<I>(cells: I) -> Option<u32>
where
    I: IntoIterator<Item = Option<u32>>,
{
    cells.into_iter().flatten().min()
}

/// Median of the present cells. Even counts average the two middle values.
pub fn median<I>(cells: I) -> Option<f64>
where
    I: IntoIterator<Item = Option<u32>>,
{
    let mut values: Vec<f64> = cells.into_iter().flatten().map(f64::from).collect();
    values.sort_by(f64::total_cmp);
    percentile(&values, 50.0)
}

/// Outcome of [`median_above`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThresholdMedian {
    /// Median of the values strictly above the threshold.
    Median(f64),
    /// No present value exceeds the threshold.
    NoQualifyingValues,
}

/// Median of the present cells strictly greater than `threshold`.
pub fn median_above<I>(cells: I, threshold: u32) -> ThresholdMedian
where
    I: IntoIterator<Item = Option<u32>>,
{
    let above = cells
        .into_iter()
        .map(|cell| cell.filter(|&v| v > threshold));
    match median(above) {
        Some(m) => ThresholdMedian::Median(m),
        None => ThresholdMedian::NoQualifyingValues,
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
