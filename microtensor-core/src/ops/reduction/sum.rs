use crate::autograd::BackwardOp;
use crate::error::MicroTensorError;
use crate::ops::arithmetic::add::accumulate_identity;
use crate::tensor::Tensor;
use crate::tensor_data::TensorData;
use std::rc::Rc;

// --- Forward Operation ---

/// Reduces all elements to a length-1 node holding their total.
pub fn sum_op(a: &Tensor) -> Result<Tensor, MicroTensorError> {
    let value = a.read_data().value.sum();
    Ok(Tensor::from_data(TensorData::from_op(
        value,
        vec![a.clone()],
        Rc::new(SumBackward),
    )))
}

// --- Backward Operation ---

/// Same rule as addition: the scalar gradient reaches every element.
#[derive(Debug)]
struct SumBackward;

impl BackwardOp for SumBackward {
    fn backward(&self, output: &Tensor) -> Result<(), MicroTensorError> {
        accumulate_identity(output, self.name())
    }

    fn name(&self) -> &'static str {
        "sum"
    }
}

#[cfg(test)]
#[path = "sum_test.rs"]
mod tests;
