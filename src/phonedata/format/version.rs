//! The 4-byte version tag at offset 0.

use crate::phonedata::types::error::{PhoneDataError, Result};
use crate::phonedata::types::models::{Version, VERSION_LEN};

/// Reads the version tag and advances the cursor past it.
pub fn parse(reader: &mut &[u8]) -> Result<Version> {
    if reader.len() < VERSION_LEN {
        return Err(PhoneDataError::MalformedHeader(format!(
            "need {} bytes for the version tag, found {}",
            VERSION_LEN,
            reader.len()
        )));
    }
    let (tag, rest) = reader.split_at(VERSION_LEN);
    let version = Version::from_bytes(tag).map_err(|_| {
        PhoneDataError::MalformedHeader(format!("version tag {:02x?} is not printable ASCII", tag))
    })?;
    *reader = rest;
    Ok(version)
}

pub fn write(buf: &mut Vec<u8>, version: &Version) {
    buf.extend_from_slice(version.as_bytes());
}
