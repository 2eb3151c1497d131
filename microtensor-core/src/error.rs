use thiserror::Error;

/// Custom error type for the microtensor engine.
///
/// Every length disagreement, whether discovered while building the graph or
/// while propagating gradients, surfaces as [`MicroTensorError::LengthMismatch`]
/// so a failed training step can be handled in one place.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum MicroTensorError {
    #[error("Length mismatch: expected {expected}, got {actual} during operation {operation}")]
    LengthMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Operation {operation} requires a scalar tensor, got {len} elements")]
    NotScalar { len: usize, operation: String },

    #[error("Cannot stack an empty list of tensors")]
    EmptyTensorList,

    #[error("Cannot reshape {len} elements into {shape:?}")]
    InvalidReshape { len: usize, shape: Vec<usize> },

    #[error("Batch loss requires at least one sample")]
    EmptyBatch,
}

impl MicroTensorError {
    pub(crate) fn length_mismatch(expected: usize, actual: usize, operation: &str) -> Self {
        MicroTensorError::LengthMismatch {
            expected,
            actual,
            operation: operation.to_string(),
        }
    }
}
