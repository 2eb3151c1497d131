use crate::error::MicroTensorError;
use crate::nn::layer::Layer;
use crate::nn::parameter::Parameter;
use crate::tensor::Tensor;
use log::trace;

/// An ordered list of layers applied one after another.
#[derive(Debug, Default)]
pub struct Sequential {
    layers: Vec<Box<dyn Layer>>,
}

impl Sequential {
    pub fn new() -> Self {
        Sequential { layers: Vec::new() }
    }

    pub fn from_layers(layers: Vec<Box<dyn Layer>>) -> Self {
        Sequential { layers }
    }

    /// Appends `layer`, returning the container for chaining.
    pub fn with<L: Layer + 'static>(mut self, layer: L) -> Self {
        self.layers.push(Box::new(layer));
        self
    }

    pub fn push(&mut self, layer: Box<dyn Layer>) {
        self.layers.push(layer);
    }

    pub fn layers(&self) -> &[Box<dyn Layer>] {
        &self.layers
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl Layer for Sequential {
    /// Threads `input` through every layer, stopping at the first error.
    fn forward(&self, input: &Tensor) -> Result<Tensor, MicroTensorError> {
        let mut current = input.clone();
        for (index, layer) in self.layers.iter().enumerate() {
            current = layer.forward(&current)?;
            trace!("Sequential: layer {} produced {} values", index, current.len());
        }
        Ok(current)
    }

    fn parameters(&self) -> Vec<&Parameter> {
        self.layers.iter().flat_map(|layer| layer.parameters()).collect()
    }

    fn zero_grad(&self) {
        for layer in &self.layers {
            layer.zero_grad();
        }
    }

    fn update_parameters(&self, update: &mut dyn FnMut(&Parameter)) {
        for layer in &self.layers {
            layer.update_parameters(update);
        }
    }
}

#[cfg(test)]
#[path = "sequential_test.rs"]
mod tests;
