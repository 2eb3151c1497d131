use crate::error::MicroTensorError;
use crate::ops::arithmetic::div_op;
use crate::ops::reduction::sum_op;
use crate::tensor::Tensor;

/// Normalizes `a` by its total: `x_i / sum(x)`.
///
/// No exponential is applied, so the output is only a distribution when the
/// input is already non-negative. The result is built from [`div_op`] and
/// [`sum_op`], which provide the gradient.
pub fn softmax_op(a: &Tensor) -> Result<Tensor, MicroTensorError> {
    let total = sum_op(a)?;
    div_op(a, &total)
}
