//! # Tensor Operations Module (`ops`)
//!
//! Forward builders of the operation catalogue, each paired with the
//! [`BackwardOp`] implementing its gradient rule.
//!
//! ## Structure:
//!
//! - **`_op` Functions:** Each operation has a core function (`add_op`, `log_op`, ...)
//!   that computes the forward value and records the children and gradient rule on
//!   the new node. The methods on [`Tensor`] delegate to these.
//! - **`Backward` Structs:** One per differentiable operation, implementing
//!   [`BackwardOp`]. Most are unit structs; the graph node already stores the
//!   children the rule needs.
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: add, sub, mul, div, pow, neg.
//! - [`reduction`]: sum.
//! - [`math_elem`]: natural log.
//! - [`activation`]: relu, tanh, softmax.
//! - [`stack`]: concatenation of several nodes.
//! - [`loss`]: mse and categorical cross-entropy.
//! - [`view`]: scalar expansion used for broadcasting.

pub mod activation;
pub mod arithmetic;
pub mod loss;
pub mod math_elem;
pub mod reduction;
pub mod stack;
pub mod view;

use crate::autograd::BackwardOp;
use crate::error::MicroTensorError;
use crate::tensor::Tensor;
use crate::tensor_data::TensorData;
use crate::vector::Vector;
use std::rc::Rc;

/// The right-hand side of a binary tensor operation: another node or a bare
/// scalar constant.
#[derive(Debug, Clone, Copy)]
pub enum TensorOperand<'a> {
    Tensor(&'a Tensor),
    Scalar(f64),
}

impl<'a> From<&'a Tensor> for TensorOperand<'a> {
    fn from(tensor: &'a Tensor) -> Self {
        TensorOperand::Tensor(tensor)
    }
}

impl From<f64> for TensorOperand<'_> {
    fn from(value: f64) -> Self {
        TensorOperand::Scalar(value)
    }
}

/// Resolves the two children of an elementwise binary operation.
///
/// - A bare scalar becomes a new constant leaf of the left operand's length.
/// - A length-1 node paired with a longer node is wrapped in a fresh
///   [`view::expand::expand_op`] node. The original node is never modified, so
///   other references to it keep seeing a scalar.
/// - Otherwise the lengths must agree.
pub(crate) fn align_operands(
    lhs: &Tensor,
    rhs: TensorOperand<'_>,
    op_name: &str,
) -> Result<(Tensor, Tensor), MicroTensorError> {
    match rhs {
        TensorOperand::Scalar(value) => Ok((lhs.clone(), Tensor::filled(lhs.len(), value))),
        TensorOperand::Tensor(rhs) => {
            let (lhs_len, rhs_len) = (lhs.len(), rhs.len());
            if lhs_len == rhs_len {
                Ok((lhs.clone(), rhs.clone()))
            } else if rhs_len == 1 {
                Ok((lhs.clone(), view::expand::expand_op(rhs, lhs_len)?))
            } else if lhs_len == 1 {
                Ok((view::expand::expand_op(lhs, rhs_len)?, rhs.clone()))
            } else {
                Err(MicroTensorError::length_mismatch(lhs_len, rhs_len, op_name))
            }
        }
    }
}

/// Builds the output node of an elementwise binary operation.
///
/// # Arguments
/// * `lhs`, `rhs`: The operands; see [`align_operands`] for broadcasting.
/// * `combine`: Computes the output value from the two aligned values.
/// * `grad_fn`: Gradient rule stored on the output node.
/// * `op_name`: Name of the operation for error messages.
pub(crate) fn apply_binary_op<F>(
    lhs: &Tensor,
    rhs: TensorOperand<'_>,
    combine: F,
    grad_fn: Rc<dyn BackwardOp>,
    op_name: &str,
) -> Result<Tensor, MicroTensorError>
where
    F: Fn(&Vector, &Vector) -> Result<Vector, MicroTensorError>,
{
    let (a, b) = align_operands(lhs, rhs, op_name)?;
    let value = {
        let a_guard = a.read_data();
        let b_guard = b.read_data();
        combine(&a_guard.value, &b_guard.value)?
    };
    Ok(Tensor::from_data(TensorData::from_op(value, vec![a, b], grad_fn)))
}

/// Builds the output node of an elementwise unary operation.
pub(crate) fn apply_unary_op<F>(a: &Tensor, op: F, grad_fn: Rc<dyn BackwardOp>) -> Tensor
where
    F: Fn(f64) -> f64,
{
    let value = a.read_data().value.map(op);
    Tensor::from_data(TensorData::from_op(value, vec![a.clone()], grad_fn))
}
