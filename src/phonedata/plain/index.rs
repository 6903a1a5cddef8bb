//! `index.txt`: one `phonePrefix|recordID|cardTypeID` line per index entry.

use std::collections::HashSet;

use log::debug;

use super::INDEX_FILE_NAME;
use crate::phonedata::types::error::{DanglingRef, PhoneDataError, Result};
use crate::phonedata::types::models::{CardTypeId, IndexEntry, PhonePrefix, RecordId};
use crate::phonedata::utils;

/// Writes entries in the order given. Prefixes are written as plain integers.
pub fn write(entries: &[IndexEntry]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(entries.len() * 16);
    for entry in entries {
        let line = format!("{}|{}|{}", entry.phone_prefix, entry.record_id, entry.card_type);
        utils::write_terminated(&mut buf, line.as_bytes(), utils::LF);
    }
    buf
}

/// Parses every line; each record id must be in `known_ids`.
pub fn parse(bytes: &[u8], known_ids: &HashSet<RecordId>) -> Result<Vec<IndexEntry>> {
    let mut reader = bytes;
    let mut entries = Vec::new();

    while let Some(line) = utils::read_line(&mut reader) {
        let line_no = entries.len() + 1;
        let entry = parse_line(line, line_no)?;
        if !known_ids.contains(&entry.record_id) {
            return Err(PhoneDataError::DanglingIndex {
                position: entries.len(),
                reference: DanglingRef::RecordId(entry.record_id),
            });
        }
        entries.push(entry);
    }

    debug!("Parsed {} index entries from {}", entries.len(), INDEX_FILE_NAME);
    Ok(entries)
}

fn parse_line(line: &[u8], line_no: usize) -> Result<IndexEntry> {
    let malformed = |reason: String| PhoneDataError::MalformedPlainText {
        file: INDEX_FILE_NAME,
        line: line_no,
        reason,
    };

    let text = std::str::from_utf8(line).map_err(|e| malformed(format!("invalid UTF-8: {}", e)))?;
    let fields: Vec<&str> = text.split('|').collect();
    let [prefix, record_id, card_type] = fields.as_slice() else {
        return Err(malformed(format!("got {} fields, require 3", fields.len())));
    };

    let phone_prefix = prefix.parse::<PhonePrefix>()?;
    let record_id = record_id
        .parse::<u32>()
        .map_err(|_| malformed(format!("record id {:?} is not a decimal integer", record_id)))?;
    let card_type = card_type
        .parse::<u8>()
        .map_err(|_| malformed(format!("card type {:?} is not a byte value", card_type)))?;

    Ok(IndexEntry::new(phone_prefix, CardTypeId(card_type), RecordId(record_id)))
}
