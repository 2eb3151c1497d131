use crate::error::MicroTensorError;
use crate::ops::arithmetic::mul_op;
use crate::tensor::Tensor;

/// Negation, expressed as multiplication by a constant -1 so that it shares
/// the multiplication gradient rule.
pub fn neg_op(a: &Tensor) -> Result<Tensor, MicroTensorError> {
    mul_op(a, -1.0)
}
