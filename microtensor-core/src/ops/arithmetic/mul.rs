use crate::autograd::{binary_children, output_state, upstream_for, BackwardOp};
use crate::error::MicroTensorError;
use crate::ops::{apply_binary_op, TensorOperand};
use crate::tensor::Tensor;
use std::rc::Rc;

// --- Forward Operation ---

/// Elementwise multiplication, broadcasting a scalar operand on either side.
pub fn mul_op<'a>(a: &Tensor, b: impl Into<TensorOperand<'a>>) -> Result<Tensor, MicroTensorError> {
    apply_binary_op(a, b.into(), |x, y| x.mul(y), Rc::new(MulBackward), "mul")
}

// --- Backward Operation ---

/// `grad_a += value(b) * grad`, `grad_b += value(a) * grad`.
#[derive(Debug)]
struct MulBackward;

impl BackwardOp for MulBackward {
    fn backward(&self, output: &Tensor) -> Result<(), MicroTensorError> {
        let (grad, children) = output_state(output);
        let (a, b) = binary_children(&children, self.name())?;
        let (a_value, b_value) = (a.value(), b.value());
        if a_value.len() != b_value.len() {
            return Err(MicroTensorError::length_mismatch(a_value.len(), b_value.len(), self.name()));
        }
        let upstream = upstream_for(&grad, a_value.len(), self.name())?;

        let grad_a: Vec<f64> = upstream
            .iter()
            .zip(b_value.as_slice())
            .map(|(&g, &y)| y * g)
            .collect();
        let grad_b: Vec<f64> = upstream
            .iter()
            .zip(a_value.as_slice())
            .map(|(&g, &x)| x * g)
            .collect();

        a.acc_grad(&grad_a)?;
        b.acc_grad(&grad_b)
    }

    fn name(&self) -> &'static str {
        "mul"
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
