use crate::error::MicroTensorError;
use crate::ops::arithmetic::{mul_op, neg_op};
use crate::ops::math_elem::log_op;
use crate::ops::reduction::sum_op;
use crate::tensor::Tensor;

/// Categorical cross-entropy: `-sum(expected * ln(predicted))`.
///
/// `predicted` is expected to hold probabilities. Zero probabilities give an
/// infinite loss; the gradient of the logarithm stays finite.
pub fn categorical_cross_entropy_op(
    predicted: &Tensor,
    expected: &Tensor,
) -> Result<Tensor, MicroTensorError> {
    if !predicted.same_len(expected) {
        return Err(MicroTensorError::length_mismatch(
            predicted.len(),
            expected.len(),
            "categorical_cross_entropy",
        ));
    }
    let log_predicted = log_op(predicted);
    let weighted = mul_op(expected, &log_predicted)?;
    neg_op(&sum_op(&weighted)?)
}
