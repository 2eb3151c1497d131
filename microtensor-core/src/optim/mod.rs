//! Optimizers for training neural networks.
//!
//! An optimizer updates the parameters of a [`Layer`](crate::nn::Layer) from
//! the gradients accumulated by the last backward sweep, through the layer's
//! `update_parameters` callback.

pub mod optimizer_trait;
pub mod sgd;

pub use optimizer_trait::Optimizer;
pub use sgd::Sgd;
