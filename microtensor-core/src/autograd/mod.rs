//! Reverse-mode automatic differentiation.
//!
//! [`backward`] orders the graph with [`graph::topological_sort`], seeds the
//! root gradient with ones and walks the nodes from the root towards the
//! leaves, letting each node's [`BackwardOp`] accumulate into its children.

pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use backward_op::BackwardOp;
pub use graph::topological_sort;

use crate::error::MicroTensorError;
use crate::tensor::Tensor;
use crate::vector::Vector;
use log::{debug, trace};

/// Runs one backward sweep from `root`.
///
/// The root's gradient is overwritten with ones and the gradients of the
/// other interior nodes are cleared, so each sweep starts from the same
/// state. Leaf gradients are accumulated into: two sweeps without an
/// intervening reset leave the leaves with twice the gradient of one.
pub fn backward(root: &Tensor) -> Result<(), MicroTensorError> {
    let sorted = topological_sort(root);
    debug!("backward: {} nodes reachable from root", sorted.len());

    for node in sorted.iter().filter(|node| !node.is_leaf()) {
        node.zero_grad();
    }
    root.write_data().grad.fill(1.0);

    for node in sorted.iter().rev() {
        // Clone the Rc so no borrow of the node is held while the rule runs.
        let grad_fn = match node.read_data().grad_fn.clone() {
            Some(op) => op,
            None => continue,
        };
        trace!("backward: {} over {} children", grad_fn.name(), node.read_data().children.len());
        grad_fn.backward(node)?;
    }
    Ok(())
}

/// The upstream gradient seen by each element of a child of length `child_len`.
///
/// Equal lengths map slot to slot. A scalar output broadcasts its single slot
/// to every element of the child.
pub(crate) fn upstream_for(
    grad: &Vector,
    child_len: usize,
    operation: &str,
) -> Result<Vec<f64>, MicroTensorError> {
    if grad.len() == child_len {
        Ok(grad.to_vec())
    } else if grad.is_scalar() {
        Ok(vec![grad.as_slice()[0]; child_len])
    } else {
        Err(MicroTensorError::length_mismatch(grad.len(), child_len, operation))
    }
}

/// Gradient and children of `output`, copied out so children may be
/// borrowed mutably afterwards.
pub(crate) fn output_state(output: &Tensor) -> (Vector, Vec<Tensor>) {
    let guard = output.read_data();
    (guard.grad.clone(), guard.children.clone())
}

/// Children of a binary operation.
pub(crate) fn binary_children(
    children: &[Tensor],
    operation: &str,
) -> Result<(Tensor, Tensor), MicroTensorError> {
    match children {
        [a, b] => Ok((a.clone(), b.clone())),
        _ => Err(MicroTensorError::length_mismatch(2, children.len(), operation)),
    }
}

/// Child of a unary operation.
pub(crate) fn unary_child(children: &[Tensor], operation: &str) -> Result<Tensor, MicroTensorError> {
    match children {
        [child] => Ok(child.clone()),
        _ => Err(MicroTensorError::length_mismatch(1, children.len(), operation)),
    }
}
