//! Dataset utilities for `microtensor-core`: the IDX binary format, label
//! encoding and in-memory datasets of input/target tensors.

pub mod dataset;
pub mod error;
pub mod idx;
pub mod one_hot;
pub mod set;

pub use dataset::{chunk_inputs, Dataset, VecDataset};
pub use error::DataError;
pub use idx::{decode_idx, read_idx, IdxData, IdxDataType, IdxElement, IdxFile};
pub use one_hot::one_hot_encode;
pub use set::KeySet;
