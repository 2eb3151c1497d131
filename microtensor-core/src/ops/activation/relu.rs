use crate::autograd::{output_state, unary_child, upstream_for, BackwardOp};
use crate::error::MicroTensorError;
use crate::ops::apply_unary_op;
use crate::tensor::Tensor;
use std::rc::Rc;

// --- Forward Operation ---

/// Applies the Rectified Linear Unit element-wise: `ReLU(x) = max(0, x)`.
pub fn relu_op(a: &Tensor) -> Tensor {
    apply_unary_op(a, |x| if x > 0.0 { x } else { 0.0 }, Rc::new(ReluBackward))
}

// --- Backward Operation ---

/// Passes the gradient through where the input was strictly positive.
#[derive(Debug)]
struct ReluBackward;

impl BackwardOp for ReluBackward {
    fn backward(&self, output: &Tensor) -> Result<(), MicroTensorError> {
        let (grad, children) = output_state(output);
        let input = unary_child(&children, self.name())?;
        let x = input.value();
        let upstream = upstream_for(&grad, x.len(), self.name())?;
        let local: Vec<f64> = upstream
            .iter()
            .zip(x.as_slice())
            .map(|(&g, &xi)| if xi > 0.0 { g } else { 0.0 })
            .collect();
        input.acc_grad(&local)
    }

    fn name(&self) -> &'static str {
        "relu"
    }
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
