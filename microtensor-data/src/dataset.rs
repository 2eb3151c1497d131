use crate::error::DataError;
use log::debug;
use microtensor_core::nn::losses::sample_indices;
use microtensor_core::Tensor;
use rand::Rng;

/// Indexed access to samples.
pub trait Dataset {
    /// The type of a single item returned by the dataset.
    type Item;

    /// Returns the item at the given index.
    ///
    /// # Errors
    ///
    /// Returns `DataError::IndexOutOfBounds` if the index is out of range.
    fn get(&self, index: usize) -> Result<Self::Item, DataError>;

    /// Returns the total number of items in the dataset.
    fn len(&self) -> usize;

    /// Checks if the dataset is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Paired input and target tensors held in memory.
///
/// The i-th input corresponds to the i-th target. Items are cheap handle
/// clones of the stored leaves.
#[derive(Debug, Clone, Default)]
pub struct VecDataset {
    inputs: Vec<Tensor>,
    targets: Vec<Tensor>,
}

impl VecDataset {
    /// # Errors
    /// Returns `DataError::LengthMismatch` if the vectors differ in length.
    pub fn new(inputs: Vec<Tensor>, targets: Vec<Tensor>) -> Result<Self, DataError> {
        if inputs.len() != targets.len() {
            return Err(DataError::LengthMismatch {
                inputs: inputs.len(),
                targets: targets.len(),
            });
        }
        Ok(VecDataset { inputs, targets })
    }

    pub fn inputs(&self) -> &[Tensor] {
        &self.inputs
    }

    pub fn targets(&self) -> &[Tensor] {
        &self.targets
    }

    /// Up to `batch_size` distinct samples chosen at random, as separate
    /// input and target lists.
    pub fn sample_batch<R: Rng>(&self, batch_size: usize, rng: &mut R) -> (Vec<Tensor>, Vec<Tensor>) {
        sample_indices(self.len(), batch_size, rng)
            .into_iter()
            .map(|i| (self.inputs[i].clone(), self.targets[i].clone()))
            .unzip()
    }
}

impl Dataset for VecDataset {
    type Item = (Tensor, Tensor);

    fn get(&self, index: usize) -> Result<Self::Item, DataError> {
        match (self.inputs.get(index), self.targets.get(index)) {
            (Some(input), Some(target)) => Ok((input.clone(), target.clone())),
            _ => Err(DataError::IndexOutOfBounds {
                index,
                len: self.len(),
            }),
        }
    }

    fn len(&self) -> usize {
        self.inputs.len()
    }
}

/// Splits a flat payload into consecutive leaves of `item_len` values each.
///
/// A trailing partial chunk is dropped. An `item_len` of zero yields no
/// samples.
pub fn chunk_inputs(values: &[f64], item_len: usize) -> Vec<Tensor> {
    if item_len == 0 {
        return Vec::new();
    }
    let samples: Vec<Tensor> = values
        .chunks_exact(item_len)
        .map(|chunk| Tensor::new(chunk.to_vec()))
        .collect();
    debug!("chunk_inputs: {} samples of {} values", samples.len(), item_len);
    samples
}

#[cfg(test)]
#[path = "dataset_test.rs"]
mod tests;
