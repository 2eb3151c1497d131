// src/tensor/mod.rs

use crate::error::MicroTensorError;
use crate::tensor_data::TensorData;
use crate::vector::Vector;
use rand::Rng;
use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::{Rc, Weak};

mod autograd_methods;
mod op_methods;

/// Stable identity of a graph node, used to deduplicate shared nodes.
pub type NodeId = *const RefCell<TensorData>;

/// A node of the computation graph.
///
/// `Tensor` is a cheap handle around `Rc<RefCell<TensorData>>`:
/// 1.  **Shared ownership:** cloning a `Tensor` yields another handle to the
///     same node, so a leaf parameter can feed any number of operations.
/// 2.  **Interior mutability:** the gradient buffer is accumulated through
///     shared handles during the backward sweep.
///
/// Every operation allocates a fresh node; leaves (created with the
/// constructors below) persist across steps while intermediate nodes are
/// dropped together with the graph that references them.
#[derive(Clone)]
pub struct Tensor {
    pub(crate) data: Rc<RefCell<TensorData>>,
}

impl Tensor {
    // --- Creation ---

    /// Creates a leaf tensor holding `values`.
    pub fn new(values: Vec<f64>) -> Self {
        Self::from_vector(Vector::new(values))
    }

    pub fn from_vector(value: Vector) -> Self {
        Tensor {
            data: Rc::new(RefCell::new(TensorData::new(value))),
        }
    }

    /// A length-1 leaf.
    pub fn scalar(value: f64) -> Self {
        Self::new(vec![value])
    }

    pub fn filled(len: usize, value: f64) -> Self {
        Self::from_vector(Vector::filled(len, value))
    }

    pub fn zeros(len: usize) -> Self {
        Self::from_vector(Vector::zeros(len))
    }

    /// A leaf whose values are drawn uniformly from `[0, 1)`.
    pub fn rand_uniform<R: Rng>(len: usize, rng: &mut R) -> Self {
        Self::from_vector(Vector::rand_uniform(len, rng))
    }

    /// A leaf whose values are drawn from the standard normal distribution.
    pub fn rand_normal<R: Rng>(len: usize, rng: &mut R) -> Self {
        Self::from_vector(Vector::rand_normal(len, rng))
    }

    pub(crate) fn from_data(data: TensorData) -> Self {
        Tensor {
            data: Rc::new(RefCell::new(data)),
        }
    }

    // --- Internal access ---

    pub(crate) fn read_data(&self) -> Ref<'_, TensorData> {
        self.data.borrow()
    }

    pub(crate) fn write_data(&self) -> RefMut<'_, TensorData> {
        self.data.borrow_mut()
    }

    // --- Accessors ---

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.read_data().value.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True for length-1 tensors, which broadcast against any length.
    pub fn is_scalar(&self) -> bool {
        self.len() == 1
    }

    /// Operand compatibility: only the flat element count is compared.
    pub fn same_len(&self, other: &Tensor) -> bool {
        self.len() == other.len()
    }

    /// A copy of the forward value.
    pub fn value(&self) -> Vector {
        self.read_data().value.clone()
    }

    pub fn values(&self) -> Vec<f64> {
        self.read_data().value.to_vec()
    }

    /// A copy of the accumulated gradient.
    pub fn grad(&self) -> Vector {
        self.read_data().grad.clone()
    }

    pub fn grads(&self) -> Vec<f64> {
        self.read_data().grad.to_vec()
    }

    /// The single value of a scalar tensor.
    pub fn item(&self) -> Result<f64, MicroTensorError> {
        self.read_data().value.scalar()
    }

    /// Operands of the producing operation, in argument order.
    pub fn children(&self) -> Vec<Tensor> {
        self.read_data().children.clone()
    }

    /// A leaf has no gradient rule: it is a model input or a parameter.
    pub fn is_leaf(&self) -> bool {
        self.read_data().grad_fn.is_none()
    }

    /// Name of the operation that produced this node, `None` for leaves.
    pub fn op_name(&self) -> Option<&'static str> {
        self.read_data().grad_fn.as_ref().map(|op| op.name())
    }

    pub fn node_id(&self) -> NodeId {
        Rc::as_ptr(&self.data)
    }

    /// A handle that does not keep the node alive.
    pub(crate) fn downgrade(&self) -> Weak<RefCell<TensorData>> {
        Rc::downgrade(&self.data)
    }

    /// True when both handles point to the same node.
    pub fn ptr_eq(&self, other: &Tensor) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }

    /// Largest element of the value, negative infinity when empty.
    pub fn max_value(&self) -> f64 {
        self.read_data().value.max()
    }

    /// Mean of the gradient buffer.
    pub fn mean_gradient(&self) -> f64 {
        self.read_data().grad.mean()
    }

    // --- Mutation of leaf state ---

    /// Replaces the value at `index`.
    pub fn set_value_at(&self, index: usize, value: f64) -> Result<(), MicroTensorError> {
        let mut guard = self.write_data();
        let len = guard.value.len();
        match guard.value.as_mut_slice().get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(MicroTensorError::length_mismatch(len, index.saturating_add(1), "set_value_at")),
        }
    }

    /// Gives `update` mutable access to the values alongside the gradient.
    /// This is the hook optimizers use to move parameters.
    pub fn update<F>(&self, update: F)
    where
        F: FnOnce(&mut [f64], &[f64]),
    {
        let mut guard = self.write_data();
        let TensorData { value, grad, .. } = &mut *guard;
        update(value.as_mut_slice(), grad.as_slice());
    }

    // --- Shape ---

    /// Shapes are not tracked, so flattening returns the same node.
    pub fn flatten(&self) -> Tensor {
        self.clone()
    }

    /// Validates that `dims` covers every element and returns the same node.
    pub fn reshape(&self, dims: &[usize]) -> Result<Tensor, MicroTensorError> {
        self.read_data().value.reshape(dims)?;
        Ok(self.clone())
    }
}

impl fmt::Debug for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tensor({:?})", self.read_data())
    }
}

impl fmt::Display for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.read_data();
        write!(
            f,
            "Tensor(data={}, gradients={:?}, children={})",
            guard.value,
            guard.grad.as_slice(),
            guard.children.len()
        )
    }
}

impl From<Vec<f64>> for Tensor {
    fn from(values: Vec<f64>) -> Self {
        Tensor::new(values)
    }
}
