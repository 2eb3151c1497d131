use crate::autograd::{output_state, BackwardOp};
use crate::error::MicroTensorError;
use crate::tensor::Tensor;
use crate::tensor_data::TensorData;
use crate::vector::Vector;
use std::rc::Rc;

// --- Forward Operation ---

/// Concatenates the values of `tensors` in order into one node whose
/// children are exactly those tensors.
///
/// Layers use this to gather the outputs of their neurons into a single
/// activation vector.
pub fn stack_op(tensors: &[Tensor]) -> Result<Tensor, MicroTensorError> {
    if tensors.is_empty() {
        return Err(MicroTensorError::EmptyTensorList);
    }

    let mut offsets = Vec::with_capacity(tensors.len());
    let mut values = Vec::new();
    for tensor in tensors {
        offsets.push(values.len());
        values.extend_from_slice(tensor.read_data().value.as_slice());
    }

    Ok(Tensor::from_data(TensorData::from_op(
        Vector::new(values),
        tensors.to_vec(),
        Rc::new(StackBackward { offsets }),
    )))
}

// --- Backward Operation ---

/// Routes each segment of the output gradient back to the child it came from.
#[derive(Debug)]
struct StackBackward {
    /// Start of each child's segment in the output.
    offsets: Vec<usize>,
}

impl BackwardOp for StackBackward {
    fn backward(&self, output: &Tensor) -> Result<(), MicroTensorError> {
        let (grad, children) = output_state(output);
        if children.len() != self.offsets.len() {
            return Err(MicroTensorError::length_mismatch(
                self.offsets.len(),
                children.len(),
                self.name(),
            ));
        }
        let grad = grad.as_slice();
        for (child, &start) in children.iter().zip(&self.offsets) {
            let end = start + child.len();
            let segment = grad
                .get(start..end)
                .ok_or_else(|| MicroTensorError::length_mismatch(end, grad.len(), self.name()))?;
            child.acc_grad(segment)?;
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "stack"
    }
}

#[cfg(test)]
#[path = "stack_test.rs"]
mod tests;
