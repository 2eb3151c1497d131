use crate::error::MicroTensorError;
use crate::nn::layer::Layer;
use crate::nn::parameter::Parameter;
use crate::tensor::Tensor;

/// Passes its input through; values are already stored flat.
#[derive(Debug, Clone, Copy, Default)]
pub struct Flatten;

impl Flatten {
    pub fn new() -> Self {
        Flatten
    }
}

impl Layer for Flatten {
    fn forward(&self, input: &Tensor) -> Result<Tensor, MicroTensorError> {
        Ok(input.flatten())
    }

    fn parameters(&self) -> Vec<&Parameter> {
        Vec::new()
    }
}
