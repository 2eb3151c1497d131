//! Decoder for the IDX format: a 4-byte header (two zero bytes, a type tag
//! and a dimension count), one big-endian `i32` per dimension, then the
//! big-endian payload.

use crate::error::DataError;
use log::debug;
use num_traits::AsPrimitive;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

const HEADER_LEN: usize = 4;
const DIM_LEN: usize = 4;

/// Element type declared by the header's tag byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdxDataType {
    UnsignedByte,
    SignedByte,
    Short,
    Int,
    Float,
    Double,
}

impl IdxDataType {
    pub fn from_tag(tag: u8) -> Result<Self, DataError> {
        match tag {
            0x08 => Ok(IdxDataType::UnsignedByte),
            0x09 => Ok(IdxDataType::SignedByte),
            0x0B => Ok(IdxDataType::Short),
            0x0C => Ok(IdxDataType::Int),
            0x0D => Ok(IdxDataType::Float),
            0x0E => Ok(IdxDataType::Double),
            other => Err(DataError::UnsupportedDataType(other)),
        }
    }

    pub fn tag(&self) -> u8 {
        match self {
            IdxDataType::UnsignedByte => 0x08,
            IdxDataType::SignedByte => 0x09,
            IdxDataType::Short => 0x0B,
            IdxDataType::Int => 0x0C,
            IdxDataType::Float => 0x0D,
            IdxDataType::Double => 0x0E,
        }
    }

    /// Bytes per element.
    pub fn size(&self) -> usize {
        match self {
            IdxDataType::UnsignedByte | IdxDataType::SignedByte => 1,
            IdxDataType::Short => 2,
            IdxDataType::Int | IdxDataType::Float => 4,
            IdxDataType::Double => 8,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            IdxDataType::UnsignedByte => "u8",
            IdxDataType::SignedByte => "i8",
            IdxDataType::Short => "i16",
            IdxDataType::Int => "i32",
            IdxDataType::Float => "f32",
            IdxDataType::Double => "f64",
        }
    }
}

/// The decoded payload, in its declared element type.
#[derive(Debug, Clone, PartialEq)]
pub enum IdxData {
    U8(Vec<u8>),
    I8(Vec<i8>),
    I16(Vec<i16>),
    I32(Vec<i32>),
    F32(Vec<f32>),
    F64(Vec<f64>),
}

fn widen<T: AsPrimitive<f64>>(values: &[T]) -> Vec<f64> {
    values.iter().map(|v| v.as_()).collect()
}

impl IdxData {
    pub fn data_type(&self) -> IdxDataType {
        match self {
            IdxData::U8(_) => IdxDataType::UnsignedByte,
            IdxData::I8(_) => IdxDataType::SignedByte,
            IdxData::I16(_) => IdxDataType::Short,
            IdxData::I32(_) => IdxDataType::Int,
            IdxData::F32(_) => IdxDataType::Float,
            IdxData::F64(_) => IdxDataType::Double,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            IdxData::U8(v) => v.len(),
            IdxData::I8(v) => v.len(),
            IdxData::I16(v) => v.len(),
            IdxData::I32(v) => v.len(),
            IdxData::F32(v) => v.len(),
            IdxData::F64(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every element converted to `f64`.
    pub fn to_f64(&self) -> Vec<f64> {
        match self {
            IdxData::U8(v) => widen(v),
            IdxData::I8(v) => widen(v),
            IdxData::I16(v) => widen(v),
            IdxData::I32(v) => widen(v),
            IdxData::F32(v) => widen(v),
            IdxData::F64(v) => v.clone(),
        }
    }
}

/// An element type that can be requested from a decoded file.
pub trait IdxElement: Sized + Copy {
    const DATA_TYPE: IdxDataType;

    fn slice(data: &IdxData) -> Option<&[Self]>;
}

macro_rules! impl_idx_element {
    ($ty:ty, $variant:ident, $data_type:expr) => {
        impl IdxElement for $ty {
            const DATA_TYPE: IdxDataType = $data_type;

            fn slice(data: &IdxData) -> Option<&[Self]> {
                match data {
                    IdxData::$variant(values) => Some(values),
                    _ => None,
                }
            }
        }
    };
}

impl_idx_element!(u8, U8, IdxDataType::UnsignedByte);
impl_idx_element!(i8, I8, IdxDataType::SignedByte);
impl_idx_element!(i16, I16, IdxDataType::Short);
impl_idx_element!(i32, I32, IdxDataType::Int);
impl_idx_element!(f32, F32, IdxDataType::Float);
impl_idx_element!(f64, F64, IdxDataType::Double);

/// A decoded IDX file.
#[derive(Debug, Clone, PartialEq)]
pub struct IdxFile {
    pub dims: Vec<usize>,
    pub data: IdxData,
}

impl IdxFile {
    /// The payload as `T`, which must be the declared element type.
    pub fn values<T: IdxElement>(&self) -> Result<&[T], DataError> {
        T::slice(&self.data).ok_or(DataError::TypeMismatch {
            expected: T::DATA_TYPE.name(),
            actual: self.data.data_type().name(),
        })
    }

    pub fn to_f64(&self) -> Vec<f64> {
        self.data.to_f64()
    }

    /// Number of elements in one entry along the first dimension.
    pub fn item_len(&self) -> usize {
        self.dims.iter().skip(1).product()
    }
}

fn take<'a>(bytes: &'a [u8], offset: usize, len: usize) -> Result<&'a [u8], DataError> {
    let end = offset.saturating_add(len);
    bytes.get(offset..end).ok_or(DataError::Truncated {
        expected: end,
        actual: bytes.len(),
    })
}

fn decode_be<T, F, const N: usize>(payload: &[u8], from_be: F) -> Vec<T>
where
    F: Fn([u8; N]) -> T,
{
    payload
        .chunks_exact(N)
        .map(|chunk| {
            let mut buf = [0u8; N];
            buf.copy_from_slice(chunk);
            from_be(buf)
        })
        .collect()
}

/// Decodes an IDX stream.
///
/// An empty dimension list declares zero elements. Bytes after the declared
/// payload are ignored.
///
/// # Errors
/// - `DataError::InvalidMagic` if the first two bytes are not zero.
/// - `DataError::UnsupportedDataType` for an unknown tag.
/// - `DataError::NegativeDimension` for a dimension below zero.
/// - `DataError::Truncated` if the header, dimensions or payload are short.
pub fn decode_idx<R: Read>(mut reader: R) -> Result<IdxFile, DataError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    let header = take(&bytes, 0, HEADER_LEN)?;
    if header[0] != 0 || header[1] != 0 {
        return Err(DataError::InvalidMagic(header[0], header[1]));
    }
    let data_type = IdxDataType::from_tag(header[2])?;
    let dim_count = header[3] as usize;

    let raw_dims = take(&bytes, HEADER_LEN, dim_count * DIM_LEN)?;
    let dims = decode_be(raw_dims, i32::from_be_bytes)
        .into_iter()
        .enumerate()
        .map(|(index, dim)| {
            usize::try_from(dim).map_err(|_| DataError::NegativeDimension { index, dim })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let payload_len = if dims.is_empty() {
        Some(0)
    } else {
        dims.iter()
            .try_fold(data_type.size(), |acc: usize, &dim| acc.checked_mul(dim))
    };
    let payload_len = payload_len.ok_or(DataError::Truncated {
        expected: usize::MAX,
        actual: bytes.len(),
    })?;
    let payload = take(&bytes, HEADER_LEN + dim_count * DIM_LEN, payload_len)?;
    let data = match data_type {
        IdxDataType::UnsignedByte => IdxData::U8(payload.to_vec()),
        IdxDataType::SignedByte => IdxData::I8(decode_be(payload, i8::from_be_bytes)),
        IdxDataType::Short => IdxData::I16(decode_be(payload, i16::from_be_bytes)),
        IdxDataType::Int => IdxData::I32(decode_be(payload, i32::from_be_bytes)),
        IdxDataType::Float => IdxData::F32(decode_be(payload, f32::from_be_bytes)),
        IdxDataType::Double => IdxData::F64(decode_be(payload, f64::from_be_bytes)),
    };

    debug!(
        "decode_idx: {} elements of {} with dims {:?}",
        data.len(),
        data_type.name(),
        dims
    );
    Ok(IdxFile { dims, data })
}

/// Opens and decodes the IDX file at `path`.
pub fn read_idx<P: AsRef<Path>>(path: P) -> Result<IdxFile, DataError> {
    let file = File::open(path.as_ref())?;
    decode_idx(BufReader::new(file))
}

#[cfg(test)]
#[path = "idx_test.rs"]
mod tests;
