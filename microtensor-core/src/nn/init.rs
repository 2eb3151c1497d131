use crate::tensor::Tensor;
use rand::Rng;

/// How fresh parameters are filled when a layer is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeightInit {
    /// Independent samples from `[0, 1)`.
    #[default]
    Uniform,
    /// Independent samples from the standard normal distribution.
    Normal,
    Zeros,
}

impl WeightInit {
    /// Creates a leaf of length `len`, drawing from `rng` as needed.
    pub fn tensor<R: Rng>(&self, len: usize, rng: &mut R) -> Tensor {
        match self {
            WeightInit::Uniform => Tensor::rand_uniform(len, rng),
            WeightInit::Normal => Tensor::rand_normal(len, rng),
            WeightInit::Zeros => Tensor::zeros(len),
        }
    }
}

#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
