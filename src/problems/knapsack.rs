//! 0/1 knapsack as a layered DP.
//!
//! Layers are items: the frontier at layer `i` is the row `dp[i][0..=W]`, the
//! best value reachable with the first `i` items under each capacity. A step
//! updates one copied row with capacities visited in decreasing order, so
//! `dp[i][w - weight]` is still read from the previous layer and every item is
//! used at most once.

use crate::error::{AlgoError, Result};
use crate::traits::{LayeredProblem, Traceback};
use crate::LayeredEngine;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Item {
    pub weight: usize,
    pub value: u64,
}

#[derive(Clone, Debug)]
pub struct KnapsackProblem {
    capacity: usize,
    items: Vec<Item>,
}

/// Frontier row: best value for every capacity `0..=W` at a fixed layer.
pub type KnapsackFrontier = Vec<u64>;

impl KnapsackProblem {
    /// Pair up `weights[i]` and `values[i]` as item `i`.
    ///
    /// # Errors
    /// [`AlgoError::LengthMismatch`] if the slices differ in length.
    pub fn new(capacity: usize, weights: &[usize], values: &[u64]) -> Result<Self> {
        if weights.len() != values.len() {
            return Err(AlgoError::LengthMismatch {
                weights: weights.len(),
                values: values.len(),
            });
        }
        let items = weights
            .iter()
            .zip(values)
            .map(|(&weight, &value)| Item { weight, value })
            .collect();
        Ok(Self { capacity, items })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }
}

impl LayeredProblem for KnapsackProblem {
    type Frontier = KnapsackFrontier;
    type Cost = u64;

    fn num_layers(&self) -> usize {
        self.items.len()
    }

    fn init_frontier(&self) -> Self::Frontier {
        vec![0; self.capacity + 1]
    }

    fn forward_step(&self, layer: usize, frontier: &Self::Frontier) -> Self::Frontier {
        let Item { weight, value } = self.items[layer];
        let mut next = frontier.clone();
        if weight > self.capacity {
            return next;
        }
        for w in (weight..=self.capacity).rev() {
            let take = next[w - weight].saturating_add(value);
            if take > next[w] {
                next[w] = take;
            }
        }
        next
    }

    fn extract_cost(&self, frontier_t: &Self::Frontier) -> Self::Cost {
        frontier_t[self.capacity]
    }
}

impl Traceback for KnapsackProblem {
    /// Capacity column of the chain at this layer.
    type State = usize;

    fn terminal_state(&self, _frontier_t: &Self::Frontier) -> Self::State {
        self.capacity
    }

    fn step_back(&self, layer: usize, before: &Self::Frontier, state: &Self::State) -> Self::State {
        let Item { weight, value } = self.items[layer];
        let w = *state;
        if weight <= w && before[w - weight].saturating_add(value) > before[w] {
            w - weight
        } else {
            w
        }
    }
}

impl KnapsackProblem {
    fn taken(&self, layer: usize, before: usize, after: usize) -> bool {
        let item = self.items[layer];
        if item.weight == 0 {
            // zero-weight items never move the column; step_back takes them
            // exactly when they add value
            item.value > 0
        } else {
            before != after
        }
    }
}

/// Maximum total value of items with total weight at most `capacity`, each
/// item used at most once.
///
/// ```
/// use contest_kit::problems::knapsack::knapsack;
///
/// assert_eq!(knapsack(5, &[2, 3, 4], &[3, 4, 5]).unwrap(), 7);
/// ```
///
/// # Errors
/// [`AlgoError::LengthMismatch`] if `weights` and `values` differ in length.
pub fn knapsack(capacity: usize, weights: &[usize], values: &[u64]) -> Result<u64> {
    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("knapsack", capacity, items = weights.len());
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let problem = KnapsackProblem::new(capacity, weights, values)?;
    Ok(LayeredEngine::new(problem).run())
}

/// Optimal value plus the ascending indices of one item set attaining it.
///
/// Recovered with a checkpointed traceback, keeping about √n rows of the DP
/// table live instead of all n.
///
/// # Errors
/// [`AlgoError::LengthMismatch`] if `weights` and `values` differ in length.
pub fn knapsack_selection(
    capacity: usize,
    weights: &[usize],
    values: &[u64],
) -> Result<(u64, Vec<usize>)> {
    let problem = KnapsackProblem::new(capacity, weights, values)?;
    let engine = LayeredEngine::new(problem);
    let (value, columns) = engine.traceback();
    let problem = engine.problem();
    let chosen = columns
        .windows(2)
        .enumerate()
        .filter(|&(layer, pair)| problem.taken(layer, pair[0], pair[1]))
        .map(|(layer, _)| layer)
        .collect();
    Ok((value, chosen))
}
