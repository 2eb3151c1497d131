// src/vector.rs

use crate::error::MicroTensorError;
use rand::Rng;
use rand_distr::StandardNormal;
use std::fmt;

/// The right-hand side of an elementwise [`Vector`] operation.
///
/// A bare scalar behaves like a vector of the same length as the left operand
/// filled with that value.
#[derive(Debug, Clone, Copy)]
pub enum Operand<'a> {
    Vector(&'a Vector),
    Scalar(f64),
}

impl<'a> From<&'a Vector> for Operand<'a> {
    fn from(vector: &'a Vector) -> Self {
        Operand::Vector(vector)
    }
}

impl From<f64> for Operand<'_> {
    fn from(value: f64) -> Self {
        Operand::Scalar(value)
    }
}

/// An owned, fixed-length buffer of `f64` values.
///
/// All arithmetic is pure: every operation allocates a new `Vector` and leaves
/// its operands untouched. Element values may be replaced in place through
/// [`Vector::as_mut_slice`], but the length never changes after construction.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Vector {
    data: Vec<f64>,
}

impl Vector {
    // --- Construction ---

    /// Wraps the given values.
    pub fn new(data: Vec<f64>) -> Self {
        Vector { data }
    }

    /// A vector of `len` copies of `value`.
    pub fn filled(len: usize, value: f64) -> Self {
        Vector {
            data: vec![value; len],
        }
    }

    pub fn zeros(len: usize) -> Self {
        Self::filled(len, 0.0)
    }

    pub fn ones(len: usize) -> Self {
        Self::filled(len, 1.0)
    }

    /// Independent samples drawn uniformly from `[0, 1)`.
    pub fn rand_uniform<R: Rng>(len: usize, rng: &mut R) -> Self {
        Vector {
            data: (0..len).map(|_| rng.gen::<f64>()).collect(),
        }
    }

    /// Independent samples drawn from the standard normal distribution.
    pub fn rand_normal<R: Rng>(len: usize, rng: &mut R) -> Self {
        Vector {
            data: (0..len).map(|_| rng.sample::<f64, _>(StandardNormal)).collect(),
        }
    }

    // --- Accessors ---

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// True when the vector holds exactly one element.
    pub fn is_scalar(&self) -> bool {
        self.data.len() == 1
    }

    /// Returns the single element of a length-1 vector.
    pub fn scalar(&self) -> Result<f64, MicroTensorError> {
        if !self.is_scalar() {
            return Err(MicroTensorError::NotScalar {
                len: self.len(),
                operation: "scalar".to_string(),
            });
        }
        Ok(self.data[0])
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.data.clone()
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    /// Overwrites every element with `value`.
    pub fn fill(&mut self, value: f64) {
        self.data.iter_mut().for_each(|x| *x = value);
    }

    // --- Elementwise operations ---

    /// Combines `self` with `other` element by element.
    ///
    /// A length-1 `other` is broadcast across `self` (unless `self` is itself
    /// length 1), as is a bare scalar. Any other length disagreement is an error.
    pub fn zip_with<'a, F>(
        &self,
        other: impl Into<Operand<'a>>,
        operation: &str,
        combine: F,
    ) -> Result<Vector, MicroTensorError>
    where
        F: Fn(f64, f64) -> f64,
    {
        let data = match other.into() {
            Operand::Scalar(value) => self.data.iter().map(|&x| combine(x, value)).collect(),
            Operand::Vector(other) if other.is_scalar() && !self.is_scalar() => {
                let value = other.data[0];
                self.data.iter().map(|&x| combine(x, value)).collect()
            }
            Operand::Vector(other) => {
                if other.len() != self.len() {
                    return Err(MicroTensorError::length_mismatch(
                        self.len(),
                        other.len(),
                        operation,
                    ));
                }
                self.data
                    .iter()
                    .zip(other.data.iter())
                    .map(|(&a, &b)| combine(a, b))
                    .collect()
            }
        };
        Ok(Vector { data })
    }

    pub fn add<'a>(&self, other: impl Into<Operand<'a>>) -> Result<Vector, MicroTensorError> {
        self.zip_with(other, "add", |a, b| a + b)
    }

    pub fn sub<'a>(&self, other: impl Into<Operand<'a>>) -> Result<Vector, MicroTensorError> {
        self.zip_with(other, "sub", |a, b| a - b)
    }

    pub fn mul<'a>(&self, other: impl Into<Operand<'a>>) -> Result<Vector, MicroTensorError> {
        self.zip_with(other, "mul", |a, b| a * b)
    }

    /// Plain IEEE division; dividing by zero yields infinities or NaN.
    pub fn div<'a>(&self, other: impl Into<Operand<'a>>) -> Result<Vector, MicroTensorError> {
        self.zip_with(other, "div", |a, b| a / b)
    }

    /// Raises each element to a real exponent.
    pub fn pow<'a>(&self, other: impl Into<Operand<'a>>) -> Result<Vector, MicroTensorError> {
        self.zip_with(other, "pow", f64::powf)
    }

    /// Multiplies every element by -1.
    pub fn neg(&self) -> Vector {
        self.map(|x| -x)
    }

    pub fn map<F: Fn(f64) -> f64>(&self, f: F) -> Vector {
        Vector {
            data: self.data.iter().map(|&x| f(x)).collect(),
        }
    }

    /// Elementwise hyperbolic cosine.
    pub fn cosh(&self) -> Vector {
        self.map(f64::cosh)
    }

    // --- Reductions ---

    /// Length-1 vector holding the total of all elements.
    pub fn sum(&self) -> Vector {
        Vector {
            data: vec![self.data.iter().sum()],
        }
    }

    /// Arithmetic mean, `NaN` for an empty vector.
    pub fn mean(&self) -> f64 {
        self.data.iter().sum::<f64>() / self.data.len() as f64
    }

    /// Largest element, negative infinity for an empty vector.
    pub fn max(&self) -> f64 {
        self.data.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    // --- Shape ---

    /// The buffer is already flat.
    pub fn flatten(&self) -> Vector {
        self.clone()
    }

    /// Checks that `dims` describes exactly `len()` elements. The buffer itself
    /// is unchanged since no shape is stored.
    pub fn reshape(&self, dims: &[usize]) -> Result<Vector, MicroTensorError> {
        let numel: usize = dims.iter().product();
        if numel != self.len() {
            return Err(MicroTensorError::InvalidReshape {
                len: self.len(),
                shape: dims.to_vec(),
            });
        }
        Ok(self.clone())
    }
}

impl From<Vec<f64>> for Vector {
    fn from(data: Vec<f64>) -> Self {
        Vector::new(data)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector(data={:?}, len={})", self.data, self.data.len())
    }
}

#[cfg(test)]
#[path = "vector_test.rs"]
mod tests;
