//! # Loss Functions
//!
//! Loss functions composed from the elementwise operations. Each returns
//! a graph node, so calling `backward` on the result differentiates through
//! the prediction.

pub mod cross_entropy;
pub mod mse;

pub use cross_entropy::categorical_cross_entropy_op;
pub use mse::mse_op;
