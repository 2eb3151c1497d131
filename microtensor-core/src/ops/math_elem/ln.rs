use crate::autograd::{output_state, unary_child, upstream_for, BackwardOp};
use crate::error::MicroTensorError;
use crate::ops::apply_unary_op;
use crate::tensor::Tensor;
use std::rc::Rc;

/// Lower bound on the input used by the logarithm's gradient.
pub const LOG_EPSILON: f64 = 1e-7;

/// Elementwise natural logarithm.
pub fn log_op(a: &Tensor) -> Tensor {
    apply_unary_op(a, f64::ln, Rc::new(LnBackward))
}

/// `grad_x += grad / max(eps, x)`.
#[derive(Debug)]
struct LnBackward;

impl BackwardOp for LnBackward {
    fn backward(&self, output: &Tensor) -> Result<(), MicroTensorError> {
        let (grad, children) = output_state(output);
        let child = unary_child(&children, self.name())?;
        let x = child.value();
        let upstream = upstream_for(&grad, x.len(), self.name())?;
        let local: Vec<f64> = upstream
            .iter()
            .zip(x.as_slice())
            .map(|(&g, &xi)| g / LOG_EPSILON.max(xi))
            .collect();
        child.acc_grad(&local)
    }

    fn name(&self) -> &'static str {
        "log"
    }
}

#[cfg(test)]
#[path = "ln_test.rs"]
mod tests;
