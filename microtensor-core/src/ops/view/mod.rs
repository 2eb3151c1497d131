//! Operations that change how a node's elements are laid out.

pub mod expand;

pub use expand::expand_op;
