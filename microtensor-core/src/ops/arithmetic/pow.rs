use crate::autograd::{binary_children, output_state, upstream_for, BackwardOp};
use crate::error::MicroTensorError;
use crate::ops::{apply_binary_op, TensorOperand};
use crate::tensor::Tensor;
use std::rc::Rc;

// --- Forward Operation ---

/// Raises `base` elementwise to `exponent`, a node or a bare scalar.
pub fn pow_op<'a>(
    base: &Tensor,
    exponent: impl Into<TensorOperand<'a>>,
) -> Result<Tensor, MicroTensorError> {
    apply_binary_op(base, exponent.into(), |x, y| x.pow(y), Rc::new(PowBackward), "pow")
}

// --- Backward Operation ---

/// `grad_base += e * b^(e-1) * grad` and `grad_exp += b^e * ln(b) * grad`.
///
/// The logarithm only exists for a positive base; elsewhere the exponent
/// receives no contribution.
#[derive(Debug)]
struct PowBackward;

impl BackwardOp for PowBackward {
    fn backward(&self, output: &Tensor) -> Result<(), MicroTensorError> {
        let (grad, children) = output_state(output);
        let (base, exponent) = binary_children(&children, self.name())?;
        let b = base.value();
        let e = exponent.value();
        if b.len() != e.len() {
            return Err(MicroTensorError::length_mismatch(b.len(), e.len(), self.name()));
        }
        let upstream = upstream_for(&grad, b.len(), self.name())?;

        let mut grad_base = Vec::with_capacity(b.len());
        let mut grad_exponent = Vec::with_capacity(b.len());
        for ((&g, &bi), &ei) in upstream.iter().zip(b.as_slice()).zip(e.as_slice()) {
            grad_base.push(ei * bi.powf(ei - 1.0) * g);
            grad_exponent.push(if bi > 0.0 { bi.powf(ei) * bi.ln() * g } else { 0.0 });
        }

        base.acc_grad(&grad_base)?;
        exponent.acc_grad(&grad_exponent)
    }

    fn name(&self) -> &'static str {
        "pow"
    }
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
