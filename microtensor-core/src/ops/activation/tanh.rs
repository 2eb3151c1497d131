use crate::autograd::{output_state, unary_child, upstream_for, BackwardOp};
use crate::error::MicroTensorError;
use crate::ops::apply_unary_op;
use crate::tensor::Tensor;
use std::rc::Rc;

// --- Forward Operation ---

/// Elementwise hyperbolic tangent.
pub fn tanh_op(a: &Tensor) -> Tensor {
    apply_unary_op(a, f64::tanh, Rc::new(TanhBackward))
}

// --- Backward Operation ---

/// `grad_x += grad / cosh(x)^2`, evaluated at the input.
#[derive(Debug)]
struct TanhBackward;

impl BackwardOp for TanhBackward {
    fn backward(&self, output: &Tensor) -> Result<(), MicroTensorError> {
        let (grad, children) = output_state(output);
        let input = unary_child(&children, self.name())?;
        let cosh = input.value().cosh();
        let upstream = upstream_for(&grad, cosh.len(), self.name())?;
        let local: Vec<f64> = upstream
            .iter()
            .zip(cosh.as_slice())
            .map(|(&g, &c)| g / (c * c))
            .collect();
        input.acc_grad(&local)
    }

    fn name(&self) -> &'static str {
        "tanh"
    }
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
