//! Generic layered DP engine.
//!
//! This module implements two ways of driving a [`LayeredProblem`]:
//! 1. A rolling forward pass that keeps a single frontier live and returns the
//!    optimal cost.
//! 2. A checkpointed traceback: the forward pass stores the frontier every
//!    `k` layers, then blocks are revisited from last to first, each one
//!    recomputed from its checkpoint so that at most `k` frontiers are live
//!    while the optimal decision chain is walked backwards.
//!
//! With `k ≈ √T` the traceback keeps O(√T) frontiers instead of the full
//! T-row table, at the price of one extra forward pass.

use crate::blocks::Checkpoint;
use crate::traits::{LayeredProblem, Traceback};
use crate::utils::default_checkpoint_interval;

/// Layered DP engine for a given problem instance `P`.
///
/// Typical usage:
/// ```
/// use contest_kit::{LayeredEngine, problems::knapsack::KnapsackProblem};
///
/// let problem = KnapsackProblem::new(5, &[2, 3, 4], &[3, 4, 5]).unwrap();
/// let engine = LayeredEngine::new(problem);
/// assert_eq!(engine.run(), 7);
/// let (value, capacities) = engine.traceback();
/// assert_eq!(value, 7);
/// assert_eq!(capacities.len(), 4);
/// ```
pub struct LayeredEngine<P: LayeredProblem> {
    problem: P,
    checkpoint_interval: usize,
}

impl<P: LayeredProblem> LayeredEngine<P> {
    /// Create a new engine with a heuristic checkpoint interval (≈ √T).
    pub fn new(problem: P) -> Self {
        let t = problem.num_layers().max(1);
        let k = default_checkpoint_interval(t).max(1);
        Self::with_checkpoint_interval(problem, k)
    }

    /// Create a new engine with an explicit checkpoint interval.
    ///
    /// # Panics
    /// Panics if `checkpoint_interval == 0`. Use
    /// [`LayeredEngineBuilder::try_build`](crate::builder::LayeredEngineBuilder::try_build)
    /// to get an error instead.
    pub fn with_checkpoint_interval(problem: P, checkpoint_interval: usize) -> Self {
        assert!(checkpoint_interval > 0, "checkpoint_interval must be positive");
        Self {
            problem,
            checkpoint_interval,
        }
    }

    /// Expose immutable reference to the underlying problem.
    pub fn problem(&self) -> &P {
        &self.problem
    }

    /// Return the configured checkpoint interval.
    pub fn checkpoint_interval(&self) -> usize {
        self.checkpoint_interval
    }

    /// Consume the engine and hand back the problem.
    pub fn into_problem(self) -> P {
        self.problem
    }

    /// Frontier at layer T, computed with one frontier live at a time.
    pub fn final_frontier(&self) -> P::Frontier {
        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("forward_pass", layers = self.problem.num_layers());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut frontier = self.problem.init_frontier();
        for layer in 0..self.problem.num_layers() {
            frontier = self.problem.forward_step(layer, &frontier);
        }
        frontier
    }

    /// Optimal cost of the instance.
    pub fn run(&self) -> P::Cost {
        self.problem.extract_cost(&self.final_frontier())
    }

    /// Forward pass that records the frontier at layers `0, k, 2k, …` and at
    /// layer T.
    ///
    /// The last checkpoint always sits on layer T, so it doubles as the final
    /// frontier. A problem with zero layers yields a single checkpoint.
    pub fn checkpoints(&self) -> Vec<Checkpoint<P::Frontier>> {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("build_checkpoints", interval = self.checkpoint_interval);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let t = self.problem.num_layers();
        let k = self.checkpoint_interval;
        let mut out = Vec::with_capacity(t / k + 2);
        let mut frontier = self.problem.init_frontier();
        out.push(Checkpoint {
            layer: 0,
            frontier: frontier.clone(),
        });
        for layer in 0..t {
            frontier = self.problem.forward_step(layer, &frontier);
            let next = layer + 1;
            if next % k == 0 || next == t {
                out.push(Checkpoint {
                    layer: next,
                    frontier: frontier.clone(),
                });
            }
        }
        out
    }
}

impl<P: Traceback> LayeredEngine<P> {
    /// Optimal cost plus the states of one optimal chain at layers `0..=T`.
    ///
    /// `states[i]` is the frontier position occupied at layer `i`;
    /// `states[T]` is [`Traceback::terminal_state`] of the final frontier.
    pub fn traceback(&self) -> (P::Cost, Vec<P::State>) {
        let checkpoints = self.checkpoints();
        let last = checkpoints
            .last()
            .expect("checkpoints always include layer 0");
        let cost = self.problem.extract_cost(&last.frontier);
        let mut state = self.problem.terminal_state(&last.frontier);

        let t = self.problem.num_layers();
        let mut reversed = Vec::with_capacity(t + 1);
        reversed.push(state.clone());

        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("traceback", blocks = checkpoints.len().saturating_sub(1));
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        for pair in checkpoints.windows(2).rev() {
            let (start, end) = (&pair[0], &pair[1]);

            #[cfg(feature = "tracing")]
            let block_span = tracing::trace_span!("traceback_block", start = start.layer, end = end.layer);
            #[cfg(feature = "tracing")]
            let _block_enter = block_span.enter();

            // frontiers for layers start.layer .. end.layer (exclusive)
            let mut block = Vec::with_capacity(start.span_to(end));
            block.push(start.frontier.clone());
            for layer in start.layer..end.layer - 1 {
                let next = self.problem.forward_step(layer, &block[block.len() - 1]);
                block.push(next);
            }

            for (offset, before) in block.iter().enumerate().rev() {
                state = self.problem.step_back(start.layer + offset, before, &state);
                reversed.push(state.clone());
            }
        }

        reversed.reverse();
        (cost, reversed)
    }
}

#[cfg(test)]
mod tests {
    use super::LayeredEngine;
    use crate::traits::{LayeredProblem, Traceback};

    /// Running sum over a fixed list of steps; the state is the layer's own
    /// partial sum, so the traceback is fully determined.
    struct Prefix(Vec<i64>);

    impl LayeredProblem for Prefix {
        type Frontier = i64;
        type Cost = i64;

        fn num_layers(&self) -> usize {
            self.0.len()
        }
        fn init_frontier(&self) -> i64 {
            0
        }
        fn forward_step(&self, layer: usize, frontier: &i64) -> i64 {
            frontier + self.0[layer]
        }
        fn extract_cost(&self, frontier_t: &i64) -> i64 {
            *frontier_t
        }
    }

    impl Traceback for Prefix {
        type State = i64;

        fn terminal_state(&self, frontier_t: &i64) -> i64 {
            *frontier_t
        }
        fn step_back(&self, layer: usize, before: &i64, state: &i64) -> i64 {
            assert_eq!(before + self.0[layer], *state, "traceback out of sync at {layer}");
            *before
        }
    }

    #[test]
    fn zero_layers_no_op() {
        let engine = LayeredEngine::new(Prefix(Vec::new()));
        assert_eq!(engine.run(), 0);
        assert_eq!(engine.checkpoints().len(), 1);
        let (cost, states) = engine.traceback();
        assert_eq!(cost, 0);
        assert_eq!(states, vec![0]);
    }

    #[test]
    fn checkpoints_land_on_interval_and_final_layer() {
        let engine = LayeredEngine::with_checkpoint_interval(Prefix(vec![1; 7]), 3);
        let layers: Vec<usize> = engine.checkpoints().iter().map(|c| c.layer).collect();
        assert_eq!(layers, vec![0, 3, 6, 7]);
    }

    #[test]
    fn traceback_visits_every_layer_for_any_interval() {
        let steps = vec![3, -1, 4, 1, -5, 9, 2, -6];
        let expected: Vec<i64> = std::iter::once(0)
            .chain(steps.iter().scan(0, |acc, s| {
                *acc += s;
                Some(*acc)
            }))
            .collect();
        for k in 1..=10 {
            let engine = LayeredEngine::with_checkpoint_interval(Prefix(steps.clone()), k);
            let (cost, states) = engine.traceback();
            assert_eq!(cost, 7);
            assert_eq!(states, expected, "interval {k}");
        }
    }

    #[test]
    #[should_panic(expected = "checkpoint_interval must be positive")]
    fn zero_interval_panics() {
        let _ = LayeredEngine::with_checkpoint_interval(Prefix(vec![1]), 0);
    }
}
