//! # Neural network building blocks
//!
//! Layers own their learnable state as [`Parameter`] leaves and build a fresh
//! graph on every [`Layer::forward`] call. A [`Sequential`] threads its input
//! through an ordered list of layers and is itself a [`Layer`].

pub mod activation;
pub mod context;
pub mod init;
pub mod layer;
pub mod layers;
pub mod losses;
pub mod parameter;
pub mod sequential;

pub use activation::Activation;
pub use context::NeuralContext;
pub use init::WeightInit;
pub use layer::Layer;
pub use layers::{Flatten, Linear, LinearNeuron, Normalize, Softmax};
pub use losses::{batch_loss, LossKind};
pub use parameter::Parameter;
pub use sequential::Sequential;
