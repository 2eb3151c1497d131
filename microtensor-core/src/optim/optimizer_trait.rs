use crate::nn::Layer;

/// Trait defining the common interface for all optimizers.
pub trait Optimizer {
    /// Performs a single optimization step over every parameter of `model`,
    /// using the gradients currently accumulated on them.
    fn step(&mut self, model: &dyn Layer);

    /// Clears the gradients of every parameter of `model`.
    fn zero_grad(&mut self, model: &dyn Layer) {
        model.zero_grad();
    }

    fn learning_rate(&self) -> f64;

    fn set_learning_rate(&mut self, lr: f64);
}
