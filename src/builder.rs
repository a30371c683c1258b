use crate::error::{AlgoError, Result};
use crate::utils::default_checkpoint_interval;
use crate::{LayeredEngine, LayeredProblem};

pub struct LayeredEngineBuilder<P: LayeredProblem> {
    problem: P,
    checkpoint_interval: Option<usize>,
}

impl<P: LayeredProblem> LayeredEngineBuilder<P> {
    pub fn new(problem: P) -> Self {
        Self {
            problem,
            checkpoint_interval: None,
        }
    }

    /// Store a frontier every `interval` layers during traceback.
    /// `1` keeps the full table; `num_layers()` keeps only the endpoints.
    pub fn with_checkpoint_interval(mut self, interval: usize) -> Self {
        self.checkpoint_interval = Some(interval);
        self
    }

    /// # Panics
    /// Panics if an interval of zero was configured.
    pub fn build(self) -> LayeredEngine<P> {
        match self.checkpoint_interval {
            Some(k) => LayeredEngine::with_checkpoint_interval(self.problem, k),
            None => LayeredEngine::new(self.problem),
        }
    }

    pub fn try_build(self) -> Result<LayeredEngine<P>> {
        let k = match self.checkpoint_interval {
            Some(0) => return Err(AlgoError::InvalidCheckpointInterval),
            Some(k) => k,
            None => default_checkpoint_interval(self.problem.num_layers().max(1)),
        };
        Ok(LayeredEngine::with_checkpoint_interval(self.problem, k))
    }
}

#[cfg(test)]
mod tests {
    use super::LayeredEngineBuilder;
    use crate::error::AlgoError;
    use crate::problems::knapsack::KnapsackProblem;

    fn sample() -> KnapsackProblem {
        KnapsackProblem::new(5, &[2, 3, 4], &[3, 4, 5]).unwrap()
    }

    #[test]
    fn default_interval_is_sqrt_of_layers() {
        let engine = LayeredEngineBuilder::new(sample()).build();
        assert_eq!(engine.checkpoint_interval(), 2);
    }

    #[test]
    fn explicit_interval_is_kept() {
        let engine = LayeredEngineBuilder::new(sample())
            .with_checkpoint_interval(1)
            .try_build()
            .unwrap();
        assert_eq!(engine.checkpoint_interval(), 1);
        assert_eq!(engine.run(), 7);
    }

    #[test]
    fn zero_interval_is_rejected() {
        let err = LayeredEngineBuilder::new(sample())
            .with_checkpoint_interval(0)
            .try_build()
            .err();
        assert_eq!(err, Some(AlgoError::InvalidCheckpointInterval));
    }
}
