use crate::error::MicroTensorError;
use crate::nn::activation::Activation;
use crate::nn::context::NeuralContext;
use crate::nn::layer::Layer;
use crate::nn::parameter::Parameter;
use crate::ops::stack::stack_op;
use crate::tensor::Tensor;
use log::debug;

/// A single unit: `activation(sum(weights * input) + bias)`.
#[derive(Debug, Clone)]
pub struct LinearNeuron {
    pub(crate) weights: Parameter,
    pub(crate) bias: Option<Parameter>,
    activation: Activation,
}

impl LinearNeuron {
    /// Draws `inputs` weights (and a bias when `use_bias`) from `context`.
    pub fn new(
        context: &mut NeuralContext,
        inputs: usize,
        use_bias: bool,
        activation: Activation,
    ) -> Self {
        let weights = Parameter::new(context.parameter_tensor(inputs));
        let bias = use_bias.then(|| Parameter::new(context.parameter_tensor(1)));
        LinearNeuron {
            weights,
            bias,
            activation,
        }
    }

    /// Builds a neuron around existing leaves.
    pub fn from_parameters(weights: Tensor, bias: Option<Tensor>, activation: Activation) -> Self {
        LinearNeuron {
            weights: Parameter::new(weights),
            bias: bias.map(Parameter::new),
            activation,
        }
    }

    pub fn weights(&self) -> &Parameter {
        &self.weights
    }

    pub fn bias(&self) -> Option<&Parameter> {
        self.bias.as_ref()
    }

    pub fn uses_bias(&self) -> bool {
        self.bias.is_some()
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }
}

impl Layer for LinearNeuron {
    fn forward(&self, input: &Tensor) -> Result<Tensor, MicroTensorError> {
        if !self.weights.same_len(input) {
            return Err(MicroTensorError::length_mismatch(
                self.weights.len(),
                input.len(),
                "linear",
            ));
        }
        let mut pre_activation = self.weights.mul(input)?.sum()?;
        if let Some(bias) = &self.bias {
            pre_activation = pre_activation.add(bias.tensor())?;
        }
        Ok(self.activation.apply(&pre_activation))
    }

    fn parameters(&self) -> Vec<&Parameter> {
        let mut params = vec![&self.weights];
        if let Some(bias) = &self.bias {
            params.push(bias);
        }
        params
    }
}

/// A fully connected layer: `out_features` neurons reading the same input,
/// whose scalar outputs are stacked into one node.
#[derive(Debug, Clone)]
pub struct Linear {
    neurons: Vec<LinearNeuron>,
    in_features: usize,
}

impl Linear {
    /// Creates a new Linear layer.
    ///
    /// # Arguments
    ///
    /// * `context` - Source of the initial weights.
    /// * `in_features` - Size of each input sample.
    /// * `out_features` - Number of neurons, and so the size of the output.
    /// * `use_bias` - If `true`, every neuron learns an additive bias.
    /// * `activation` - Applied by each neuron to its weighted sum.
    pub fn new(
        context: &mut NeuralContext,
        in_features: usize,
        out_features: usize,
        use_bias: bool,
        activation: Activation,
    ) -> Self {
        let neurons = (0..out_features)
            .map(|_| LinearNeuron::new(context, in_features, use_bias, activation))
            .collect();
        debug!(
            "Linear: {} -> {} ({}, bias: {})",
            in_features, out_features, activation, use_bias
        );
        Linear {
            neurons,
            in_features,
        }
    }

    /// Assembles a layer from neurons that all expect `in_features` inputs.
    pub fn from_neurons(neurons: Vec<LinearNeuron>) -> Result<Self, MicroTensorError> {
        let in_features = neurons.first().map(|n| n.weights.len()).unwrap_or(0);
        if let Some(bad) = neurons.iter().find(|n| n.weights.len() != in_features) {
            return Err(MicroTensorError::length_mismatch(
                in_features,
                bad.weights.len(),
                "linear",
            ));
        }
        Ok(Linear {
            neurons,
            in_features,
        })
    }

    pub fn neurons(&self) -> &[LinearNeuron] {
        &self.neurons
    }

    pub fn in_features(&self) -> usize {
        self.in_features
    }

    pub fn out_features(&self) -> usize {
        self.neurons.len()
    }
}

impl Layer for Linear {
    fn forward(&self, input: &Tensor) -> Result<Tensor, MicroTensorError> {
        let outputs = self
            .neurons
            .iter()
            .map(|neuron| neuron.forward(input))
            .collect::<Result<Vec<_>, _>>()?;
        stack_op(&outputs)
    }

    fn parameters(&self) -> Vec<&Parameter> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }
}

#[cfg(test)]
#[path = "linear_test.rs"]
mod tests;
