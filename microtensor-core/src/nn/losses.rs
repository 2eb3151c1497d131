//! Losses averaged over a random batch of samples.

use crate::error::MicroTensorError;
use crate::nn::layer::Layer;
use crate::ops::stack::stack_op;
use crate::tensor::Tensor;
use log::trace;
use rand::seq::SliceRandom;
use rand::Rng;

/// Per-sample loss used by [`batch_loss`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LossKind {
    /// Sum of squared errors of the sample's outputs.
    #[default]
    MeanSquaredError,
    CategoricalCrossEntropy,
}

impl LossKind {
    /// Scalar loss of one prediction.
    pub fn sample_loss(&self, predicted: &Tensor, expected: &Tensor) -> Result<Tensor, MicroTensorError> {
        match self {
            LossKind::MeanSquaredError => predicted.mse(expected)?.sum(),
            LossKind::CategoricalCrossEntropy => predicted.categorical_cross_entropy(expected),
        }
    }
}

/// Picks `batch_size` distinct indices out of `0..len`, or all of them when
/// fewer are available.
pub fn sample_indices<R: Rng>(len: usize, batch_size: usize, rng: &mut R) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..len).collect();
    if len <= batch_size {
        return indices;
    }
    indices.shuffle(rng);
    indices.truncate(batch_size);
    indices
}

/// Mean loss of `model` over a random batch drawn from `(xs, ys)`.
///
/// The per-sample losses are stacked, summed and divided by the number of
/// samples, giving a scalar node whose backward sweep reaches every
/// parameter used by the batch.
///
/// # Errors
/// - `MicroTensorError::LengthMismatch` if `xs` and `ys` differ in length, or
///   a forward pass fails.
/// - `MicroTensorError::EmptyBatch` if no sample would be drawn.
pub fn batch_loss<R: Rng>(
    model: &dyn Layer,
    xs: &[Tensor],
    ys: &[Tensor],
    batch_size: usize,
    rng: &mut R,
    kind: LossKind,
) -> Result<Tensor, MicroTensorError> {
    if xs.len() != ys.len() {
        return Err(MicroTensorError::length_mismatch(xs.len(), ys.len(), "batch_loss"));
    }
    if xs.is_empty() || batch_size == 0 {
        return Err(MicroTensorError::EmptyBatch);
    }

    let indices = sample_indices(xs.len(), batch_size, rng);
    trace!("batch_loss: samples {:?}", indices);
    let losses = indices
        .iter()
        .map(|&i| {
            let predicted = model.forward(&xs[i])?;
            kind.sample_loss(&predicted, &ys[i])
        })
        .collect::<Result<Vec<_>, _>>()?;

    let count = losses.len() as f64;
    stack_op(&losses)?.sum()?.div(count)
}

#[cfg(test)]
#[path = "losses_test.rs"]
mod tests;
