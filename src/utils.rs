//! Assorted utilities and helpers.

/// Checkpoint interval for `num_layers` layers: ⌈√T⌉, at least 1.
///
/// This is the heuristic used by [`crate::engine::LayeredEngine::new`]; it
/// balances stored checkpoints against the frontiers recomputed per block.
#[inline]
pub fn default_checkpoint_interval(num_layers: usize) -> usize {
    if num_layers <= 1 {
        1
    } else {
        (num_layers as f64).sqrt().ceil() as usize
    }
}

/// Leftmost index `p` with `sorted[p] >= x`, or `sorted.len()` if none.
///
/// `sorted` must be ascending.
#[inline]
pub fn lower_bound<T: Ord>(sorted: &[T], x: &T) -> usize {
    sorted.partition_point(|probe| probe < x)
}
