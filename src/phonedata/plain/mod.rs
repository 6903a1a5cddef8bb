//! Plain-text interchange form: three sidecar files that together carry a
//! [`Dataset`] without byte offsets.
//!
//! - [`version`]: `version.txt`
//! - [`record`]: `record.txt`
//! - [`index`]: `index.txt`

use std::collections::HashSet;

use super::types::error::Result;
use super::types::models::{Dataset, RecordId};

pub mod index;
pub mod record;
pub mod version;

pub const VERSION_FILE_NAME: &str = "version.txt";
pub const RECORD_FILE_NAME: &str = "record.txt";
pub const INDEX_FILE_NAME: &str = "index.txt";

/// Contents of the three sidecar files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlainText {
    pub version: Vec<u8>,
    pub records: Vec<u8>,
    pub index: Vec<u8>,
}

impl PlainText {
    /// Renders a dataset. Fails if record ids are not dense or a field
    /// contains `|` or a line feed.
    pub fn from_dataset(dataset: &Dataset) -> Result<Self> {
        Ok(Self {
            version: version::write(&dataset.version),
            records: record::write(&dataset.records)?,
            index: index::write(&dataset.entries),
        })
    }

    /// Parses the three files back into a dataset.
    pub fn to_dataset(&self) -> Result<Dataset> {
        let version = version::parse(&self.version)?;
        let records = record::parse(&self.records)?;
        let known_ids: HashSet<RecordId> = records.iter().map(|r| r.id).collect();
        let entries = index::parse(&self.index, &known_ids)?;
        Ok(Dataset {
            version,
            records,
            entries,
        })
    }

    /// `(file name, contents)` pairs in the order they are written.
    pub fn files(&self) -> [(&'static str, &[u8]); 3] {
        [
            (VERSION_FILE_NAME, self.version.as_slice()),
            (RECORD_FILE_NAME, self.records.as_slice()),
            (INDEX_FILE_NAME, self.index.as_slice()),
        ]
    }
}
