use super::*;
use approx::assert_relative_eq;

fn encode(tag: u8, dims: &[i32], payload: &[u8]) -> Vec<u8> {
    let mut bytes = vec![0, 0, tag, dims.len() as u8];
    for dim in dims {
        bytes.extend_from_slice(&dim.to_be_bytes());
    }
    bytes.extend_from_slice(payload);
    bytes
}

#[test]
fn test_decode_unsigned_bytes() -> Result<(), DataError> {
    let bytes = encode(0x08, &[2, 3], &[0, 1, 2, 253, 254, 255]);
    let file = decode_idx(bytes.as_slice())?;
    assert_eq!(file.dims, vec![2, 3]);
    assert_eq!(file.item_len(), 3);
    assert_eq!(file.values::<u8>()?, &[0, 1, 2, 253, 254, 255]);
    assert_eq!(file.to_f64(), vec![0.0, 1.0, 2.0, 253.0, 254.0, 255.0]);
    Ok(())
}

#[test]
fn test_decode_big_endian_types() -> Result<(), DataError> {
    let mut payload = Vec::new();
    payload.extend_from_slice(&(-2i16).to_be_bytes());
    payload.extend_from_slice(&300i16.to_be_bytes());
    let file = decode_idx(encode(0x0B, &[2], &payload).as_slice())?;
    assert_eq!(file.values::<i16>()?, &[-2, 300]);

    let mut payload = Vec::new();
    payload.extend_from_slice(&1.5f32.to_be_bytes());
    payload.extend_from_slice(&(-0.25f32).to_be_bytes());
    let file = decode_idx(encode(0x0D, &[2], &payload).as_slice())?;
    assert_eq!(file.to_f64(), vec![1.5, -0.25]);

    let payload = std::f64::consts::PI.to_be_bytes();
    let file = decode_idx(encode(0x0E, &[1], &payload).as_slice())?;
    assert_relative_eq!(file.values::<f64>()?[0], std::f64::consts::PI);

    let file = decode_idx(encode(0x09, &[2], &[0xFF, 0x05]).as_slice())?;
    assert_eq!(file.values::<i8>()?, &[-1, 5]);

    let file = decode_idx(encode(0x0C, &[1], &(-70000i32).to_be_bytes()).as_slice())?;
    assert_eq!(file.to_f64(), vec![-70000.0]);
    Ok(())
}

#[test]
fn test_invalid_magic() {
    let mut bytes = encode(0x08, &[1], &[7]);
    bytes[1] = 3;
    assert!(matches!(
        decode_idx(bytes.as_slice()),
        Err(DataError::InvalidMagic(0, 3))
    ));
}

#[test]
fn test_unsupported_type() {
    let bytes = encode(0x0A, &[1], &[7]);
    assert!(matches!(
        decode_idx(bytes.as_slice()),
        Err(DataError::UnsupportedDataType(0x0A))
    ));
}

#[test]
fn test_truncated_payload() {
    let bytes = encode(0x0C, &[2], &[0, 0, 0, 1, 0, 0]);
    assert!(matches!(
        decode_idx(bytes.as_slice()),
        Err(DataError::Truncated { expected: 16, actual: 14 })
    ));
    assert!(matches!(
        decode_idx(&[0u8, 0][..]),
        Err(DataError::Truncated { .. })
    ));
}

#[test]
fn test_negative_dimension() {
    let bytes = encode(0x08, &[3, -1], &[]);
    assert!(matches!(
        decode_idx(bytes.as_slice()),
        Err(DataError::NegativeDimension { index: 1, dim: -1 })
    ));
}

#[test]
fn test_type_mismatch() -> Result<(), DataError> {
    let file = decode_idx(encode(0x08, &[1], &[1]).as_slice())?;
    assert!(matches!(
        file.values::<f32>(),
        Err(DataError::TypeMismatch { expected: "f32", actual: "u8" })
    ));
    Ok(())
}

#[test]
fn test_no_dimensions_means_no_elements() -> Result<(), DataError> {
    let file = decode_idx(encode(0x08, &[], &[1, 2, 3]).as_slice())?;
    assert!(file.dims.is_empty());
    assert!(file.data.is_empty());
    Ok(())
}

#[test]
fn test_tag_round_trip() -> Result<(), DataError> {
    for tag in [0x08, 0x09, 0x0B, 0x0C, 0x0D, 0x0E] {
        assert_eq!(IdxDataType::from_tag(tag)?.tag(), tag);
    }
    Ok(())
}

#[test]
fn test_read_missing_file() {
    assert!(matches!(
        read_idx("/definitely/not/here.idx"),
        Err(DataError::Io(_))
    ));
}
