use crate::error::MicroTensorError;
use crate::nn::layer::Layer;
use crate::nn::parameter::Parameter;
use crate::tensor::Tensor;

/// Stateless wrapper over [`Tensor::softmax`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Softmax;

impl Softmax {
    pub fn new() -> Self {
        Softmax
    }
}

impl Layer for Softmax {
    fn forward(&self, input: &Tensor) -> Result<Tensor, MicroTensorError> {
        input.softmax()
    }

    fn parameters(&self) -> Vec<&Parameter> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nn::layers::Flatten;

    #[test]
    fn test_stateless_layers() -> Result<(), MicroTensorError> {
        let t = Tensor::new(vec![1.0, 1.0, 2.0]);
        assert!(Flatten::new().forward(&t)?.ptr_eq(&t));
        assert_eq!(Softmax::new().forward(&t)?.values(), vec![0.25, 0.25, 0.5]);
        assert!(Softmax::new().parameters().is_empty());
        assert_eq!(Flatten::new().num_parameters(), 0);
        Ok(())
    }
}
