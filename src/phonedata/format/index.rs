//! The index section: fixed 9-byte entries up to end of file.
//!
//! Entry layout:
//! - Bytes 0-3: phone prefix (u32 LE)
//! - Bytes 4-7: record offset (i32 LE), the start of a record in this file
//! - Byte 8:    card type

use std::collections::HashMap;

use log::debug;

use super::records::RecordSection;
use crate::phonedata::types::error::{DanglingRef, PhoneDataError, Result};
use crate::phonedata::types::models::{CardTypeId, IndexEntry, PhonePrefix, RecordId};
use crate::phonedata::utils;

/// Size of one encoded index entry.
pub const ENTRY_LEN: usize = 9;

/// Parses every entry in `section`, resolving record offsets through `records`.
pub fn parse(section: &[u8], records: &RecordSection) -> Result<Vec<IndexEntry>> {
    if section.len() % ENTRY_LEN != 0 {
        return Err(PhoneDataError::IndexSectionMisaligned { len: section.len() });
    }

    let mut entries = Vec::with_capacity(section.len() / ENTRY_LEN);
    for (position, mut chunk) in section.chunks_exact(ENTRY_LEN).enumerate() {
        let phone_prefix = PhonePrefix(utils::read_u32_le(&mut chunk)?);
        let record_offset = utils::read_i32_le(&mut chunk)?;
        let card_type = CardTypeId(utils::read_u8(&mut chunk)?);

        let record_id = records
            .id_at(record_offset)
            .ok_or(PhoneDataError::DanglingIndex {
                position,
                reference: DanglingRef::Offset(record_offset),
            })?;
        entries.push(IndexEntry::new(phone_prefix, card_type, record_id));
    }

    debug!("Index section: {} entries", entries.len());
    Ok(entries)
}

/// Writes `entries` in the given order, translating record ids via `offsets`.
pub fn write(
    buf: &mut Vec<u8>,
    entries: &[&IndexEntry],
    offsets: &HashMap<RecordId, i32>,
) -> Result<()> {
    buf.reserve(entries.len() * ENTRY_LEN);
    for (position, entry) in entries.iter().enumerate() {
        let record_offset = offsets
            .get(&entry.record_id)
            .copied()
            .ok_or(PhoneDataError::DanglingIndex {
                position,
                reference: DanglingRef::RecordId(entry.record_id),
            })?;
        utils::write_u32_le(buf, entry.phone_prefix.get());
        utils::write_i32_le(buf, record_offset);
        buf.push(entry.card_type.0);
    }
    Ok(())
}
