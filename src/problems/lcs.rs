//! Longest Common Subsequence (LCS) length as a layered DP.
//!
//! We treat layers as positions in `s` (0..=n), and the frontier at layer `i`
//! is the DP row for LCS(s[0..i], t[0..j]) over all `j` in `0..=m`. Only one
//! row is live during [`lcs_length`].

use crate::traits::LayeredProblem;
use crate::LayeredEngine;

#[derive(Clone)]
pub struct LcsProblem<'a, T> {
    pub s: &'a [T],
    pub t: &'a [T],
}

impl<'a, T: Eq> LcsProblem<'a, T> {
    pub fn new(s: &'a [T], t: &'a [T]) -> Self {
        Self { s, t }
    }
}

impl<T: Eq> LayeredProblem for LcsProblem<'_, T> {
    /// `scores[j]` = LCS length of the consumed prefix of `s` and `t[0..j]`.
    type Frontier = Vec<usize>;
    type Cost = usize;

    fn num_layers(&self) -> usize {
        // each step consumes one element of s
        self.s.len()
    }

    fn init_frontier(&self) -> Self::Frontier {
        // LCS(ε, t[0..j]) = 0
        vec![0; self.t.len() + 1]
    }

    fn forward_step(&self, layer: usize, prev: &Self::Frontier) -> Self::Frontier {
        let a = &self.s[layer];
        let mut row = vec![0; prev.len()];
        for j in 1..row.len() {
            row[j] = if *a == self.t[j - 1] {
                prev[j - 1] + 1
            } else {
                prev[j].max(row[j - 1])
            };
        }
        row
    }

    fn extract_cost(&self, frontier_t: &Self::Frontier) -> Self::Cost {
        frontier_t.last().copied().unwrap_or(0)
    }
}

/// Length of the longest subsequence common to `s` and `t`. O(nm) time,
/// O(m) memory.
///
/// ```
/// use contest_kit::problems::lcs::lcs_length;
///
/// assert_eq!(lcs_length(b"ABCBDAB", b"BDCABA"), 4);
/// ```
pub fn lcs_length<T: Eq>(s: &[T], t: &[T]) -> usize {
    LayeredEngine::new(LcsProblem::new(s, t)).run()
}
