use crate::tensor::Tensor;
use std::fmt;

/// Non-linearity applied to the output of a neuron.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activation {
    /// Identity; the pre-activation node is returned as is.
    #[default]
    None,
    Tanh,
    Relu,
}

impl Activation {
    pub fn apply(&self, input: &Tensor) -> Tensor {
        match self {
            Activation::None => input.clone(),
            Activation::Tanh => input.tanh(),
            Activation::Relu => input.relu(),
        }
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Activation::None => "none",
            Activation::Tanh => "tanh",
            Activation::Relu => "relu",
        };
        f.write_str(name)
    }
}
