//! Core phone data codec module

pub mod format;
pub mod plain;
pub mod types;
mod decoder;
mod encoder;
mod files;
mod utils;

pub use files::{pack, read_dataset, unpack, write_dataset};
pub use types::error::{DanglingRef, PhoneDataError, Result};
pub use types::models::Dataset;
pub use types::options::DecodeOptions;

/// Decode a complete phone data file with default (strict) options.
///
/// # Errors
/// Returns an error if:
/// - The buffer is shorter than the 8-byte header or the version tag is not ASCII
/// - The index-section offset points outside `8..=len`
/// - A record does not have exactly four `|`-separated fields
/// - Bytes remain between the last record and the index section
/// - The index section is not a whole number of 9-byte entries
/// - An index entry points at an offset where no record starts
pub fn decode(bytes: &[u8]) -> Result<Dataset> {
    decoder::decode(bytes, &DecodeOptions::default())
}

/// Decode a complete phone data file with explicit options.
pub fn decode_with(bytes: &[u8], options: &DecodeOptions) -> Result<Dataset> {
    decoder::decode(bytes, options)
}

/// Encode a dataset into a complete phone data file.
///
/// # Errors
/// Returns an error if record ids are not exactly `1..=N`, a field contains
/// `|` or NUL, an index entry references a missing record, or the output
/// would not be addressable with 32-bit offsets.
pub fn encode(dataset: &Dataset) -> Result<Vec<u8>> {
    encoder::encode(dataset)
}
