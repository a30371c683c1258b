//! Maximum contiguous subarray sum (Kadane).

/// Largest sum over non-empty contiguous runs of `values`, or `None` for an
/// empty slice.
///
/// Sums saturate at the `i64` bounds.
pub fn max_subarray_sum(values: &[i64]) -> Option<i64> {
    let (&first, rest) = values.split_first()?;
    let mut best = first;
    let mut current = first;
    for &x in rest {
        current = x.max(current.saturating_add(x));
        best = best.max(current);
    }
    Some(best)
}
