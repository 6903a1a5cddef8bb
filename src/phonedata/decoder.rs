//! Whole-file decoding (bytes → [`Dataset`]).

use log::{debug, info};

use super::format::{self, index, index_offset, records, version};
use super::types::error::Result;
use super::types::models::Dataset;
use super::types::options::DecodeOptions;

/// Decode a complete phone data file.
///
/// Process:
/// 1. Read the version tag and the index-section offset
/// 2. Walk the record section, assigning ids and remembering each record's offset
/// 3. Walk the index section in 9-byte strides, resolving offsets to ids
pub fn decode(bytes: &[u8], options: &DecodeOptions) -> Result<Dataset> {
    let mut reader = bytes;
    let version = version::parse(&mut reader)?;
    let index_start = index_offset::parse(&mut reader, bytes.len())?;
    debug!(
        "Header: version={}, records at {}..{}, index at {}..{}",
        version,
        format::HEADER_LEN,
        index_start,
        index_start,
        bytes.len()
    );

    let record_section = records::parse(bytes, index_start, options)?;
    let entries = index::parse(&bytes[index_start..], &record_section)?;
    let records = record_section.into_records();

    info!(
        "Decoded phone data {}: {} records, {} index entries",
        version,
        records.len(),
        entries.len()
    );

    Ok(Dataset {
        version,
        records,
        entries,
    })
}
