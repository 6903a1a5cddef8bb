//! The index-offset field at offset 4: where the index section begins.

use log::trace;

use super::HEADER_LEN;
use crate::phonedata::types::error::{PhoneDataError, Result};
use crate::phonedata::utils;

/// Position of the field within the file.
pub const FIELD_POS: usize = 4;

/// Reads the index-section offset and checks it lies in `HEADER_LEN..=file_len`.
pub fn parse(reader: &mut &[u8], file_len: usize) -> Result<usize> {
    let raw = utils::read_i32_le(reader).map_err(|_| {
        PhoneDataError::MalformedHeader(format!(
            "file of {} bytes is shorter than the {}-byte header",
            file_len, HEADER_LEN
        ))
    })?;
    trace!("Index section offset field: {}", raw);

    match usize::try_from(raw) {
        Ok(offset) if (HEADER_LEN..=file_len).contains(&offset) => Ok(offset),
        _ => Err(PhoneDataError::OffsetOutOfRange {
            offset: raw as i64,
            file_len,
        }),
    }
}

/// Writes a zeroed placeholder and returns its position for [`backfill`].
pub fn reserve(buf: &mut Vec<u8>) -> usize {
    let at = buf.len();
    utils::write_i32_le(buf, 0);
    at
}

/// Fills the placeholder at `at` with the index-section offset.
pub fn backfill(buf: &mut [u8], at: usize, index_offset: usize) -> Result<()> {
    let value = i32::try_from(index_offset).map_err(|_| PhoneDataError::FileTooLarge(index_offset))?;
    utils::patch_i32_le(buf, at, value);
    Ok(())
}
