use crate::autograd::{binary_children, output_state, upstream_for, BackwardOp};
use crate::error::MicroTensorError;
use crate::ops::{apply_binary_op, TensorOperand};
use crate::tensor::Tensor;
use std::rc::Rc;

/// Smallest denominator magnitude used by the gradient rule.
pub const DIV_EPSILON: f64 = 1e-7;

// --- Forward Operation ---

/// Elementwise division, broadcasting a scalar operand on either side.
///
/// The forward value is plain IEEE division. Only the gradient rule floors
/// the denominator.
pub fn div_op<'a>(a: &Tensor, b: impl Into<TensorOperand<'a>>) -> Result<Tensor, MicroTensorError> {
    apply_binary_op(a, b.into(), |x, y| x.div(y), Rc::new(DivBackward), "div")
}

/// Keeps the sign of `value` but lifts its magnitude to at least [`DIV_EPSILON`].
pub(crate) fn floor_magnitude(value: f64) -> f64 {
    DIV_EPSILON.max(value.abs()).copysign(value)
}

// --- Backward Operation ---

/// `grad_a += grad / y`, `grad_b += -x / y² * grad` with `y` floored.
#[derive(Debug)]
struct DivBackward;

impl BackwardOp for DivBackward {
    fn backward(&self, output: &Tensor) -> Result<(), MicroTensorError> {
        let (grad, children) = output_state(output);
        let (a, b) = binary_children(&children, self.name())?;
        let x = a.value();
        let y = b.value().map(floor_magnitude);
        if x.len() != y.len() {
            return Err(MicroTensorError::length_mismatch(x.len(), y.len(), self.name()));
        }
        let upstream = upstream_for(&grad, x.len(), self.name())?;

        let mut grad_a = Vec::with_capacity(x.len());
        let mut grad_b = Vec::with_capacity(x.len());
        for ((&g, &xi), &yi) in upstream.iter().zip(x.as_slice()).zip(y.as_slice()) {
            grad_a.push(g / yi);
            grad_b.push(-xi / (yi * yi) * g);
        }

        a.acc_grad(&grad_a)?;
        b.acc_grad(&grad_b)
    }

    fn name(&self) -> &'static str {
        "div"
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
