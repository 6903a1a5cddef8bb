//! Custom error types for the phonedata crate.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use super::models::RecordId;

/// The unresolved side of an index entry that points nowhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DanglingRef {
    /// A record offset read from the binary index section.
    Offset(i32),
    /// A record id referenced by an in-memory or plain-text index entry.
    RecordId(RecordId),
}

impl fmt::Display for DanglingRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DanglingRef::Offset(offset) => write!(f, "record offset {}", offset),
            DanglingRef::RecordId(id) => write!(f, "record id {}", id),
        }
    }
}

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum PhoneDataError {
    /// An error originating from I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is shorter than the fixed header, or the version tag is not printable ASCII.
    #[error("Malformed header: {0}")]
    MalformedHeader(String),

    /// The index-section offset points before the record section or past the end of the file.
    #[error("Index section offset {offset} out of range (header is 8 bytes, file is {file_len} bytes)")]
    OffsetOutOfRange { offset: i64, file_len: usize },

    /// A record does not split into exactly four `|`-separated fields.
    #[error("Malformed record at offset {offset}: {reason}")]
    MalformedRecord { offset: usize, reason: String },

    /// Bytes between the last record terminator and the index section.
    #[error("Unterminated record bytes between offset {start} and index section at {end}")]
    TrailingRecordBytes { start: usize, end: usize },

    /// The index section is not a whole number of 9-byte entries.
    #[error("Index section of {len} bytes is not a multiple of 9")]
    IndexSectionMisaligned { len: usize },

    /// An index entry references a record that does not exist.
    #[error("Dangling index entry at position {position}: {reference} does not resolve to a record")]
    DanglingIndex { position: usize, reference: DanglingRef },

    /// Record ids are not the dense sequence 1..=N.
    #[error("Invalid record ids: {0}")]
    InvalidRecordIds(String),

    /// A record field contains a byte that would corrupt the encoded form.
    #[error("Forbidden character {character:?} in {field} of record {record}")]
    ForbiddenCharacter {
        record: RecordId,
        field: &'static str,
        character: char,
    },

    /// A phone prefix is not a non-negative decimal integer that fits in 32 bits.
    #[error("Invalid phone prefix {0:?}")]
    InvalidPrefix(String),

    /// The version tag is not exactly four printable ASCII bytes.
    #[error("Invalid version tag {0:?}: expected exactly 4 ASCII bytes")]
    InvalidVersion(String),

    /// The encoded file would not be addressable with 32-bit offsets.
    #[error("Encoded data of {0} bytes exceeds the 32-bit offset range")]
    FileTooLarge(usize),

    /// A line of a plain-text sidecar file cannot be parsed.
    #[error("{file} line {line}: {reason}")]
    MalformedPlainText {
        file: &'static str,
        line: usize,
        reason: String,
    },

    /// An output path already exists and would be overwritten.
    #[error("Refusing to overwrite existing file {}", .0.display())]
    AlreadyExists(PathBuf),
}

/// A convenience `Result` type alias using the crate's `PhoneDataError` type.
pub type Result<T> = std::result::Result<T, PhoneDataError>;
