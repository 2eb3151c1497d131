use crate::autograd::{output_state, unary_child, BackwardOp};
use crate::error::MicroTensorError;
use crate::tensor::Tensor;
use crate::tensor_data::TensorData;
use crate::vector::Vector;
use std::rc::Rc;

// --- Backward Operation ---

/// Every output element was a copy of the input's single slot, so the slot
/// receives the sum of the upstream gradient.
#[derive(Debug)]
struct ExpandBackward;

impl BackwardOp for ExpandBackward {
    fn backward(&self, output: &Tensor) -> Result<(), MicroTensorError> {
        let (grad, children) = output_state(output);
        let child = unary_child(&children, self.name())?;
        if !child.is_scalar() {
            return Err(MicroTensorError::length_mismatch(1, child.len(), self.name()));
        }
        child.acc_grad(grad.sum().as_slice())
    }

    fn name(&self) -> &'static str {
        "expand"
    }
}

// --- Forward Operation ---

/// Repeats the single value of a scalar tensor `len` times.
///
/// The input node is left untouched; the expanded values live in a new node
/// whose only child is `tensor`.
///
/// # Errors
/// Returns `MicroTensorError::NotScalar` if `tensor` has more than one element.
pub fn expand_op(tensor: &Tensor, len: usize) -> Result<Tensor, MicroTensorError> {
    let value = tensor.read_data().value.scalar().map_err(|_| MicroTensorError::NotScalar {
        len: tensor.len(),
        operation: "expand".to_string(),
    })?;
    Ok(Tensor::from_data(TensorData::from_op(
        Vector::filled(len, value),
        vec![tensor.clone()],
        Rc::new(ExpandBackward),
    )))
}

#[cfg(test)]
#[path = "expand_test.rs"]
mod tests;
