use crate::error::MicroTensorError;
use crate::ops::arithmetic::{add_op, neg_op};
use crate::ops::TensorOperand;
use crate::tensor::Tensor;

/// Elementwise subtraction, built as `a + (-b)` so that gradients flow through
/// the addition and multiplication rules.
pub fn sub_op<'a>(a: &Tensor, b: impl Into<TensorOperand<'a>>) -> Result<Tensor, MicroTensorError> {
    match b.into() {
        TensorOperand::Scalar(value) => add_op(a, -value),
        TensorOperand::Tensor(b) => add_op(a, &neg_op(b)?),
    }
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
