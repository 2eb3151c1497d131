use crate::error::MicroTensorError;
use crate::ops::arithmetic::{pow_op, sub_op};
use crate::tensor::Tensor;

/// Elementwise squared error `(expected - predicted)^2`.
///
/// The result keeps the operands' length; reduce it with `sum` to get a
/// scalar loss. The operands must have the same length, no broadcasting
/// applies here.
pub fn mse_op(predicted: &Tensor, expected: &Tensor) -> Result<Tensor, MicroTensorError> {
    if !predicted.same_len(expected) {
        return Err(MicroTensorError::length_mismatch(
            predicted.len(),
            expected.len(),
            "mse",
        ));
    }
    let diff = sub_op(expected, predicted)?;
    pow_op(&diff, 2.0)
}
