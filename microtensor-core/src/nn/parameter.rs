use crate::tensor::Tensor;
use std::fmt;
use std::ops::Deref;

/// A leaf tensor marked as learnable state of a layer.
///
/// Cloning a `Parameter` yields another handle to the same node, so the
/// optimizer, the layer and any graph built from it all observe updates.
#[derive(Clone)]
pub struct Parameter(Tensor);

impl Parameter {
    pub fn new(tensor: Tensor) -> Self {
        Parameter(tensor)
    }

    pub fn tensor(&self) -> &Tensor {
        &self.0
    }

    /// Consumes the Parameter and returns the underlying Tensor.
    pub fn into_inner(self) -> Tensor {
        self.0
    }
}

impl Deref for Parameter {
    type Target = Tensor;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Debug for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parameter({:?})", self.0)
    }
}

impl From<Tensor> for Parameter {
    fn from(tensor: Tensor) -> Self {
        Parameter::new(tensor)
    }
}

#[cfg(test)]
#[path = "parameter_test.rs"]
mod tests;
