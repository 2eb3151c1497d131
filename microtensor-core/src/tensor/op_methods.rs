use crate::error::MicroTensorError;
use crate::ops;
use crate::ops::TensorOperand;
use crate::tensor::Tensor;

/// Method forms of the operation catalogue. Each delegates to the matching
/// `ops::*_op` function and returns a new node; operands are never modified.
impl Tensor {
    pub fn add<'a>(&self, other: impl Into<TensorOperand<'a>>) -> Result<Tensor, MicroTensorError> {
        ops::arithmetic::add_op(self, other)
    }

    pub fn sub<'a>(&self, other: impl Into<TensorOperand<'a>>) -> Result<Tensor, MicroTensorError> {
        ops::arithmetic::sub_op(self, other)
    }

    pub fn mul<'a>(&self, other: impl Into<TensorOperand<'a>>) -> Result<Tensor, MicroTensorError> {
        ops::arithmetic::mul_op(self, other)
    }

    pub fn div<'a>(&self, other: impl Into<TensorOperand<'a>>) -> Result<Tensor, MicroTensorError> {
        ops::arithmetic::div_op(self, other)
    }

    pub fn pow<'a>(&self, exponent: impl Into<TensorOperand<'a>>) -> Result<Tensor, MicroTensorError> {
        ops::arithmetic::pow_op(self, exponent)
    }

    pub fn neg(&self) -> Result<Tensor, MicroTensorError> {
        ops::arithmetic::neg_op(self)
    }

    /// Length-1 node holding the total of all elements.
    pub fn sum(&self) -> Result<Tensor, MicroTensorError> {
        ops::reduction::sum_op(self)
    }

    pub fn log(&self) -> Tensor {
        ops::math_elem::log_op(self)
    }

    pub fn relu(&self) -> Tensor {
        ops::activation::relu_op(self)
    }

    pub fn tanh(&self) -> Tensor {
        ops::activation::tanh_op(self)
    }

    /// `x / sum(x)`; see [`ops::activation::softmax_op`].
    pub fn softmax(&self) -> Result<Tensor, MicroTensorError> {
        ops::activation::softmax_op(self)
    }

    /// Elementwise squared error against `expected`, treating `self` as the
    /// prediction. Not reduced.
    pub fn mse(&self, expected: &Tensor) -> Result<Tensor, MicroTensorError> {
        ops::loss::mse_op(self, expected)
    }

    pub fn categorical_cross_entropy(&self, expected: &Tensor) -> Result<Tensor, MicroTensorError> {
        ops::loss::categorical_cross_entropy_op(self, expected)
    }

    /// Repeats a scalar node `len` times.
    pub fn expand_to(&self, len: usize) -> Result<Tensor, MicroTensorError> {
        ops::view::expand_op(self, len)
    }
}
