use crate::error::MicroTensorError;
use crate::tensor::Tensor;
use std::fmt::Debug;

/// Defines the gradient rule of a differentiable operation.
///
/// Every operation that creates a non-leaf `Tensor` stores an implementation of
/// this trait in the output node's `grad_fn`. The backward engine calls it once
/// per sweep, after every parent of the node has contributed to its gradient.
pub trait BackwardOp: Debug {
    /// Propagates the gradient of `output` into its children.
    ///
    /// Implementations read the output's gradient (and any values they need)
    /// and **add** their contribution to each child's gradient buffer. They must
    /// never overwrite a child's gradient, since a child may be shared with
    /// other parents.
    ///
    /// # Errors
    /// Returns `MicroTensorError::LengthMismatch` when the output and a child
    /// disagree in length in a way the rule cannot broadcast.
    fn backward(&self, output: &Tensor) -> Result<(), MicroTensorError>;

    /// Short operation name used in logs and debug output.
    fn name(&self) -> &'static str;
}
