//! # Activation Functions
//!
//! Elementwise non-linearities and the simple softmax used by the layers.
//!
//! - [`relu_op`]: `max(0, x)`.
//! - [`tanh_op`]: hyperbolic tangent.
//! - [`softmax_op`]: `x / sum(x)`, composed from existing operations.

pub mod relu;
pub mod softmax;
pub mod tanh;

pub use relu::relu_op;
pub use softmax::softmax_op;
pub use tanh::tanh_op;
