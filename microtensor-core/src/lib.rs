//! Reverse-mode automatic differentiation over flat `f64` vectors, with just
//! enough neural network machinery to train small multilayer perceptrons.
//!
//! - [`vector`]: the numeric engine, pure elementwise arithmetic on [`Vector`].
//! - [`tensor`]: [`Tensor`], a graph node holding a value, its gradient and
//!   the operation that produced it.
//! - [`ops`]: the operation catalogue and the gradient rule of each operation.
//! - [`autograd`]: topological ordering, the backward sweep and gradient checking.
//! - [`nn`], [`optim`], [`train`]: layers, SGD and the training loop.

pub mod autograd;
pub mod error;
pub mod nn;
pub mod ops;
pub mod optim;
pub mod tensor;
pub mod tensor_data;
pub mod train;
pub mod utils;
pub mod vector;

pub use error::MicroTensorError;
pub use tensor::{NodeId, Tensor};
pub use train::{TrainConfig, Trainer};
pub use vector::Vector;
