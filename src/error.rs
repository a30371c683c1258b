//! Invalid-input signal shared by every routine that validates its inputs.
//!
//! Unreachable nodes and impossible coin amounts are ordinary results and
//! never show up here.

/// Precondition violations detected before any work is done.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AlgoError {
    #[error("weights and values differ in length: {weights} weights, {values} values")]
    LengthMismatch { weights: usize, values: usize },

    #[error("negative edge weight {weight} on {from} -> {to}")]
    NegativeWeight { from: usize, to: usize, weight: i64 },

    #[error("node {node} is outside 0..{node_count}")]
    NodeOutOfRange { node: usize, node_count: usize },

    #[error("coin denominations must be positive")]
    ZeroDenomination,

    #[error("checkpoint interval must be positive")]
    InvalidCheckpointInterval,
}

pub type Result<T> = std::result::Result<T, AlgoError>;
