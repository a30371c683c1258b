//! Block-level data structures used by the engine.
//!
//! A `Checkpoint` pins the frontier at the first layer of a block so the
//! layers inside the block can be recomputed on demand.

/// Frontier snapshot taken at a block boundary.
#[derive(Debug, Clone)]
pub struct Checkpoint<F> {
    /// Layer index the frontier belongs to.
    pub layer: usize,
    /// DP values of that layer.
    pub frontier: F,
}

impl<F> Checkpoint<F> {
    /// Number of layers from this checkpoint up to (excluding) `next`.
    #[inline]
    pub fn span_to(&self, next: &Checkpoint<F>) -> usize {
        next.layer.saturating_sub(self.layer)
    }
}

#[cfg(test)]
mod tests {
    use super::Checkpoint;

    #[test]
    fn span_between_checkpoints() {
        let a = Checkpoint {
            layer: 2,
            frontier: (),
        };
        let b = Checkpoint {
            layer: 7,
            frontier: (),
        };
        assert_eq!(a.span_to(&b), 5);
        assert_eq!(b.span_to(&a), 0);
    }
}
