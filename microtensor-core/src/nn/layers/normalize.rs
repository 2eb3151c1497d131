use crate::error::MicroTensorError;
use crate::nn::layer::Layer;
use crate::nn::parameter::Parameter;
use crate::tensor::Tensor;
use log::warn;

/// Divides the input by its own largest element.
///
/// The maximum is read from the current value and enters the graph as a
/// constant; no gradient flows through it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Normalize;

impl Normalize {
    pub fn new() -> Self {
        Normalize
    }
}

impl Layer for Normalize {
    fn forward(&self, input: &Tensor) -> Result<Tensor, MicroTensorError> {
        let max = input.max_value();
        if max == 0.0 || !max.is_finite() {
            warn!("Normalize: maximum is {}, passing input through unchanged", max);
            return Ok(input.clone());
        }
        input.div(max)
    }

    fn parameters(&self) -> Vec<&Parameter> {
        Vec::new()
    }
}
