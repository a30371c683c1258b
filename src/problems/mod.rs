//! Dynamic-programming templates.
//!
//! - [`knapsack`]     : 0/1 knapsack, optimal value and one optimal item set.
//! - [`coin_change`]  : fewest coins summing exactly to an amount.
//! - [`lis`]          : longest strictly increasing subsequence (length).
//! - [`lcs`]          : longest common subsequence (length).
//! - [`max_subarray`] : maximum contiguous subarray sum (Kadane).
//!
//! Knapsack and LCS implement [`LayeredProblem`](crate::traits::LayeredProblem)
//! and run on [`LayeredEngine`](crate::engine::LayeredEngine); the others are
//! single-pass functions.

pub mod coin_change;
pub mod knapsack;
pub mod lcs;
pub mod lis;
pub mod max_subarray;
