//! Longest strictly increasing subsequence, length only, by patience sorting.
//!
//! `tails[k]` is the smallest value ending any increasing subsequence of
//! length `k + 1` seen so far. `tails` stays ascending; each value either
//! extends it or lowers the first tail that is `>=` the value, so no tail ever
//! increases and the length never shrinks.

use crate::utils::lower_bound;

/// Length of the longest strictly increasing subsequence of `values`.
///
/// Elements need not be contiguous. Runs in O(n log n).
///
/// ```
/// use contest_kit::problems::lis::lis_length;
///
/// assert_eq!(lis_length(&[10, 9, 2, 5, 3, 7, 101, 18]), 4);
/// ```
pub fn lis_length<T: Ord>(values: &[T]) -> usize {
    let mut tails: Vec<&T> = Vec::new();
    for x in values {
        let p = lower_bound(&tails, &x);
        if p == tails.len() {
            tails.push(x);
        } else {
            tails[p] = x;
        }
    }
    tails.len()
}
