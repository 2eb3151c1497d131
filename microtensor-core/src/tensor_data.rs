// src/tensor_data.rs
use std::fmt;
use std::rc::Rc;

use crate::autograd::BackwardOp;
use crate::tensor::Tensor;
use crate::vector::Vector;

/// Internal storage of a graph node.
///
/// Wrapped in `Rc<RefCell<TensorData>>` by [`Tensor`] so that one node can be
/// the child of several parents while its gradient stays mutable during the
/// backward sweep.
pub struct TensorData {
    /// The forward value.
    pub(crate) value: Vector,
    /// Gradient accumulator, always the same length as `value`.
    pub(crate) grad: Vector,
    /// Operands this node was computed from, in argument order.
    pub(crate) children: Vec<Tensor>,
    /// Gradient rule of the producing operation. Leaves (inputs and
    /// parameters) have `grad_fn = None`.
    pub(crate) grad_fn: Option<Rc<dyn BackwardOp>>,
}

impl TensorData {
    /// Creates leaf storage with a zeroed gradient.
    pub fn new(value: Vector) -> Self {
        let grad = Vector::zeros(value.len());
        TensorData {
            value,
            grad,
            children: Vec::new(),
            grad_fn: None,
        }
    }

    /// Creates storage for the output of an operation.
    pub(crate) fn from_op(value: Vector, children: Vec<Tensor>, grad_fn: Rc<dyn BackwardOp>) -> Self {
        let grad = Vector::zeros(value.len());
        TensorData {
            value,
            grad,
            children,
            grad_fn: Some(grad_fn),
        }
    }
}

impl Drop for TensorData {
    /// Releases the subgraph owned only by this node with a work list, so
    /// dropping a long chain does not recurse once per level.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(child) = pending.pop() {
            if let Ok(cell) = Rc::try_unwrap(child.data) {
                let mut data = cell.into_inner();
                pending.append(&mut data.children);
            }
        }
    }
}

impl fmt::Debug for TensorData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TensorData")
            .field("value", &self.value.as_slice())
            .field("grad", &self.grad.as_slice())
            .field("children", &self.children.len())
            .field("grad_fn", &self.grad_fn.as_ref().map(|op| op.name()))
            .finish()
    }
}
