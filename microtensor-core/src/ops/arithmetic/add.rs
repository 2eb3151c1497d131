// microtensor-core/src/ops/arithmetic/add.rs

use crate::autograd::{output_state, upstream_for, BackwardOp};
use crate::error::MicroTensorError;
use crate::ops::{apply_binary_op, TensorOperand};
use crate::tensor::Tensor;
use std::rc::Rc;

// --- Forward Operation ---

/// Elementwise addition, broadcasting a scalar operand on either side.
pub fn add_op<'a>(a: &Tensor, b: impl Into<TensorOperand<'a>>) -> Result<Tensor, MicroTensorError> {
    apply_binary_op(a, b.into(), |x, y| x.add(y), Rc::new(AddBackward), "add")
}

// --- Backward Operation ---

/// Backward operation for addition: identity Jacobian for both operands.
#[derive(Debug)]
pub(crate) struct AddBackward;

impl BackwardOp for AddBackward {
    fn backward(&self, output: &Tensor) -> Result<(), MicroTensorError> {
        accumulate_identity(output, self.name())
    }

    fn name(&self) -> &'static str {
        "add"
    }
}

/// Adds the output gradient into every child unchanged.
///
/// A scalar output (the result of a reduction) broadcasts its single slot to
/// every element of a longer child.
pub(crate) fn accumulate_identity(output: &Tensor, op_name: &str) -> Result<(), MicroTensorError> {
    let (grad, children) = output_state(output);
    for child in &children {
        let upstream = upstream_for(&grad, child.len(), op_name)?;
        child.acc_grad(&upstream)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
