//! Core data structures for the phone data model.
//!
//! This module defines the in-memory value that the codec produces and consumes:
//! - The opaque 4-byte [`Version`] tag
//! - [`Record`]s, identified by a dense 1-based [`RecordId`]
//! - [`IndexEntry`]s mapping a [`PhonePrefix`] and [`CardTypeId`] to a record
//! - The owning [`Dataset`]

use std::fmt;
use std::str::FromStr;

use super::error::{PhoneDataError, Result};

/// Length of the version tag in bytes.
pub const VERSION_LEN: usize = 4;

/// Width of the canonical decimal form of a phone prefix.
pub const PREFIX_DIGITS: usize = 7;

/// The 4-byte version tag at the head of the file.
///
/// Usually date-like (`"2108"` for August 2021), but treated as opaque
/// printable ASCII.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Version([u8; VERSION_LEN]);

impl Version {
    /// Builds a version from its textual tag.
    pub fn new(tag: &str) -> Result<Self> {
        Self::from_bytes(tag.as_bytes())
    }

    /// Builds a version from exactly four printable ASCII bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let tag: [u8; VERSION_LEN] = bytes
            .try_into()
            .map_err(|_| PhoneDataError::InvalidVersion(String::from_utf8_lossy(bytes).into_owned()))?;
        if !tag.iter().all(|&b| is_printable_ascii(b)) {
            return Err(PhoneDataError::InvalidVersion(
                String::from_utf8_lossy(bytes).into_owned(),
            ));
        }
        Ok(Self(tag))
    }

    pub fn as_bytes(&self) -> &[u8; VERSION_LEN] {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        // Printable ASCII is always valid UTF-8.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Version {
    type Err = PhoneDataError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

pub(crate) fn is_printable_ascii(byte: u8) -> bool {
    (0x20..=0x7e).contains(&byte)
}

/// Logical identity of a record: its 1-based position in the record section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordId(pub u32);

impl RecordId {
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The leading digits of a mobile number, stored numerically.
///
/// Leading zeros are not preserved by the encoded form. [`Display`](fmt::Display)
/// renders the plain integer; use [`PhonePrefix::canonical`] for the
/// zero-padded 7-digit form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PhonePrefix(pub u32);

impl PhonePrefix {
    pub fn get(self) -> u32 {
        self.0
    }

    /// Zero-padded 7-digit decimal form, e.g. `"0000042"`.
    pub fn canonical(self) -> String {
        format!("{:0width$}", self.0, width = PREFIX_DIGITS)
    }
}

impl fmt::Display for PhonePrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PhonePrefix {
    type Err = PhoneDataError;

    /// Parses a non-negative decimal integer no larger than `u32::MAX`.
    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PhoneDataError::InvalidPrefix(s.to_string()));
        }
        s.parse::<u32>()
            .map(PhonePrefix)
            .map_err(|_| PhoneDataError::InvalidPrefix(s.to_string()))
    }
}

/// Raw card-type byte of an index entry. See [`CardType`](super::card_type::CardType)
/// for the conventional names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CardTypeId(pub u8);

impl fmt::Display for CardTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One geographic/administrative tuple.
///
/// Field values must not contain `|` or NUL; the plain-text form also
/// forbids line feeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: RecordId,
    pub province: String,
    pub city: String,
    pub zip_code: String,
    pub area_code: String,
}

impl Record {
    pub fn new(
        id: RecordId,
        province: impl Into<String>,
        city: impl Into<String>,
        zip_code: impl Into<String>,
        area_code: impl Into<String>,
    ) -> Self {
        Self {
            id,
            province: province.into(),
            city: city.into(),
            zip_code: zip_code.into(),
            area_code: area_code.into(),
        }
    }

    /// Named fields in their encoded order.
    pub fn fields(&self) -> [(&'static str, &str); 4] {
        [
            ("province", self.province.as_str()),
            ("city", self.city.as_str()),
            ("zip code", self.zip_code.as_str()),
            ("area code", self.area_code.as_str()),
        ]
    }

    /// Fails on the first field containing one of `forbidden`.
    pub(crate) fn check_fields(&self, forbidden: &[char]) -> Result<()> {
        for (field, value) in self.fields() {
            if let Some(character) = value.chars().find(|c| forbidden.contains(c)) {
                return Err(PhoneDataError::ForbiddenCharacter {
                    record: self.id,
                    field,
                    character,
                });
            }
        }
        Ok(())
    }
}

/// Maps a phone prefix and card type to a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexEntry {
    pub phone_prefix: PhonePrefix,
    pub card_type: CardTypeId,
    pub record_id: RecordId,
}

impl IndexEntry {
    pub fn new(phone_prefix: PhonePrefix, card_type: CardTypeId, record_id: RecordId) -> Self {
        Self {
            phone_prefix,
            card_type,
            record_id,
        }
    }
}

/// The complete contents of a phone data file.
///
/// Decoding produces records in id order with dense ids; a dataset assembled
/// by hand may hold records in any order, and [`encode`](crate::encode)
/// validates density.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    pub version: Version,
    pub records: Vec<Record>,
    pub entries: Vec<IndexEntry>,
}

impl Dataset {
    /// An empty dataset with the given version.
    pub fn new(version: Version) -> Self {
        Self {
            version,
            records: Vec::new(),
            entries: Vec::new(),
        }
    }

    /// Appends a record with the next free id and returns that id.
    pub fn push_record(
        &mut self,
        province: impl Into<String>,
        city: impl Into<String>,
        zip_code: impl Into<String>,
        area_code: impl Into<String>,
    ) -> RecordId {
        let next = self.records.iter().map(|r| r.id.0).max().unwrap_or(0) + 1;
        let id = RecordId(next);
        self.records
            .push(Record::new(id, province, city, zip_code, area_code));
        id
    }

    pub fn push_entry(&mut self, phone_prefix: PhonePrefix, card_type: CardTypeId, record_id: RecordId) {
        self.entries
            .push(IndexEntry::new(phone_prefix, card_type, record_id));
    }

    pub fn record(&self, id: RecordId) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Resolves an index entry to its record.
    pub fn resolve(&self, entry: &IndexEntry) -> Option<&Record> {
        self.record(entry.record_id)
    }

    /// Sorts index entries by prefix, the order they take in the encoded file.
    pub fn sort_entries(&mut self) {
        self.entries.sort_by_key(|e| e.phone_prefix);
    }
}
