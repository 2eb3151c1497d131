use crate::autograd;
use crate::error::MicroTensorError;
use crate::tensor::Tensor;

impl Tensor {
    /// Performs the backward pass starting from this tensor.
    ///
    /// The gradient of this tensor is set to ones and propagated through the
    /// graph in reverse topological order. Interior gradients are recomputed
    /// on every sweep while leaf gradients accumulate; call
    /// [`Tensor::zero_grad`] on the leaves between steps.
    ///
    /// # Errors
    /// Returns `MicroTensorError::LengthMismatch` if a gradient rule finds a
    /// child whose length it cannot reconcile with its output.
    pub fn backward(&self) -> Result<(), MicroTensorError> {
        autograd::backward(self)
    }

    /// Resets the gradient buffer to zeros.
    pub fn zero_grad(&self) {
        self.write_data().grad.fill(0.0);
    }

    /// Adds `contribution` element by element into the gradient buffer.
    pub fn acc_grad(&self, contribution: &[f64]) -> Result<(), MicroTensorError> {
        let mut guard = self.write_data();
        if guard.grad.len() != contribution.len() {
            return Err(MicroTensorError::length_mismatch(
                guard.grad.len(),
                contribution.len(),
                "acc_grad",
            ));
        }
        guard
            .grad
            .as_mut_slice()
            .iter_mut()
            .zip(contribution.iter())
            .for_each(|(g, &c)| *g += c);
        Ok(())
    }

    /// Overwrites the gradient buffer.
    pub fn set_grad(&self, grad: &[f64]) -> Result<(), MicroTensorError> {
        let mut guard = self.write_data();
        if guard.grad.len() != grad.len() {
            return Err(MicroTensorError::length_mismatch(guard.grad.len(), grad.len(), "set_grad"));
        }
        guard.grad.as_mut_slice().copy_from_slice(grad);
        Ok(())
    }
}
