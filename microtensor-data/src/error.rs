use microtensor_core::MicroTensorError;
use thiserror::Error;

/// Errors raised while loading or preparing datasets.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid IDX magic bytes: {0:#04x} {1:#04x}")]
    InvalidMagic(u8, u8),

    #[error("Unsupported IDX data type tag {0:#04x}")]
    UnsupportedDataType(u8),

    #[error("Truncated input: expected {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },

    #[error("Negative IDX dimension {dim} at position {index}")]
    NegativeDimension { index: usize, dim: i32 },

    #[error("IDX payload holds {actual}, requested {expected}")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    #[error("Inputs and targets differ in length: {inputs} != {targets}")]
    LengthMismatch { inputs: usize, targets: usize },

    #[error("Sample index {index} out of range for {len} samples")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error(transparent)]
    Tensor(#[from] MicroTensorError),
}
