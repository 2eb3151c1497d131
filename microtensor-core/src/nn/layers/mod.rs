//! Layer variants: the learnable [`Linear`] and the stateless [`Flatten`],
//! [`Normalize`] and [`Softmax`].

pub mod flatten;
pub mod linear;
pub mod normalize;
pub mod softmax;

pub use flatten::Flatten;
pub use linear::{Linear, LinearNeuron};
pub use normalize::Normalize;
pub use softmax::Softmax;
