use crate::error::MicroTensorError;
use crate::nn::parameter::Parameter;
use crate::tensor::Tensor;
use std::fmt::Debug;

/// The capability set shared by every layer and by [`Sequential`](crate::nn::Sequential).
pub trait Layer: Debug {
    /// Builds the graph computing this layer's output from `input`.
    ///
    /// # Errors
    /// Returns `MicroTensorError::LengthMismatch` when `input` does not have
    /// the length the layer expects.
    fn forward(&self, input: &Tensor) -> Result<Tensor, MicroTensorError>;

    /// Learnable parameters, in a stable order. Stateless layers return none.
    fn parameters(&self) -> Vec<&Parameter>;

    /// Resets the gradient of every parameter to zero.
    fn zero_grad(&self) {
        for param in self.parameters() {
            param.zero_grad();
        }
    }

    /// Hands every parameter to `update`, which may rewrite its values.
    fn update_parameters(&self, update: &mut dyn FnMut(&Parameter)) {
        for param in self.parameters() {
            update(param);
        }
    }

    /// Total number of learnable scalars.
    fn num_parameters(&self) -> usize {
        self.parameters().iter().map(|p| p.len()).sum()
    }
}
