use std::path::PathBuf;

/// Serializes an IDX file in memory.
#[allow(dead_code)]
pub fn encode_idx(tag: u8, dims: &[i32], payload: &[u8]) -> Vec<u8> {
    let mut bytes = vec![0, 0, tag, dims.len() as u8];
    for dim in dims {
        bytes.extend_from_slice(&dim.to_be_bytes());
    }
    bytes.extend_from_slice(payload);
    bytes
}

/// Writes `bytes` to a file unique to this process and test name.
#[allow(dead_code)]
pub fn write_temp(name: &str, bytes: &[u8]) -> std::io::Result<PathBuf> {
    let path = std::env::temp_dir().join(format!("microtensor-{}-{}.idx", std::process::id(), name));
    std::fs::write(&path, bytes)?;
    Ok(path)
}

#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
