//! Fewest coins summing exactly to an amount, unlimited supply of each
//! denomination.
//!
//! `dp[i]` is the minimum coin count for amount `i`. Amounts no combination
//! reaches keep the sentinel `amount + 1`, which exceeds any real count since
//! every coin is worth at least 1.

use crate::error::{AlgoError, Result};

/// Minimum number of coins from `coins` summing to `amount`, or `None` when
/// no combination hits it exactly.
///
/// Duplicate denominations are harmless. An amount of 0 needs 0 coins, even
/// with an empty coin set.
///
/// ```
/// use contest_kit::problems::coin_change::coin_change;
///
/// assert_eq!(coin_change(&[1, 2, 5], 11).unwrap(), Some(3));
/// assert_eq!(coin_change(&[2], 3).unwrap(), None);
/// ```
///
/// # Errors
/// [`AlgoError::ZeroDenomination`] if any coin is 0.
pub fn coin_change(coins: &[usize], amount: usize) -> Result<Option<usize>> {
    if coins.contains(&0) {
        return Err(AlgoError::ZeroDenomination);
    }

    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("coin_change", amount, denominations = coins.len());
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let unreachable = amount + 1;
    let mut dp = vec![unreachable; amount + 1];
    dp[0] = 0;
    for i in 1..=amount {
        for &coin in coins {
            if coin <= i {
                dp[i] = dp[i].min(dp[i - coin] + 1);
            }
        }
    }
    Ok((dp[amount] < unreachable).then_some(dp[amount]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_instances() {
        assert_eq!(coin_change(&[1, 2, 5], 11), Ok(Some(3)));
        assert_eq!(coin_change(&[2], 3), Ok(None));
        assert_eq!(coin_change(&[186, 419, 83, 408], 6249), Ok(Some(20)));
    }

    #[test]
    fn greedy_is_not_optimal_here() {
        // greedy picks 4 + 1 + 1, optimum is 3 + 3
        assert_eq!(coin_change(&[1, 3, 4], 6), Ok(Some(2)));
    }

    #[test]
    fn identity_cases() {
        assert_eq!(coin_change(&[], 0), Ok(Some(0)));
        assert_eq!(coin_change(&[7], 0), Ok(Some(0)));
        assert_eq!(coin_change(&[], 5), Ok(None));
    }

    #[test]
    fn duplicates_and_oversized_coins() {
        assert_eq!(coin_change(&[5, 5, 1, 100], 11), Ok(Some(3)));
    }

    #[test]
    fn zero_denomination_rejected() {
        assert_eq!(coin_change(&[1, 0], 4), Err(AlgoError::ZeroDenomination));
    }
}
