//! The record section: `province|city|zipCode|areaCode\0` repeated.
//!
//! A record's byte offset in the file is how the index section addresses it.
//! Decoding assigns ids 1..=N in file order and remembers `offset → id`;
//! encoding writes records in id order and returns `id → offset`.

use std::collections::HashMap;

use log::{debug, trace, warn};

use super::HEADER_LEN;
use crate::phonedata::types::error::{PhoneDataError, Result};
use crate::phonedata::types::models::{Record, RecordId};
use crate::phonedata::types::options::DecodeOptions;
use crate::phonedata::utils;

/// Field separator within a record.
pub const FIELD_SEPARATOR: char = '|';

/// Characters a record field may never contain in the binary form.
pub const FORBIDDEN: [char; 2] = [FIELD_SEPARATOR, '\0'];

/// Decoded record section plus the offset lookup used to resolve index entries.
#[derive(Debug, Default)]
pub struct RecordSection {
    pub records: Vec<Record>,
    offsets: HashMap<i32, RecordId>,
}

impl RecordSection {
    /// The id of the record starting at `offset`, if any record starts there.
    pub fn id_at(&self, offset: i32) -> Option<RecordId> {
        self.offsets.get(&offset).copied()
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

/// Parses the records in `file[HEADER_LEN..end]`.
///
/// `end` is the index-section offset, already validated against the file length.
pub fn parse(file: &[u8], end: usize, options: &DecodeOptions) -> Result<RecordSection> {
    let mut section = RecordSection::default();
    let mut reader = &file[HEADER_LEN..end];
    let mut start = HEADER_LEN;

    while let Some(line) = utils::read_nul_terminated(&mut reader) {
        let id = RecordId(section.records.len() as u32 + 1);
        let record = parse_record(line, id, start)?;
        trace!("Record {} at offset {}: {:?}", id, start, line);
        // start < end, and end was read from an i32 field
        section.offsets.insert(start as i32, id);
        section.records.push(record);
        start += line.len() + 1;
    }

    if start != end {
        if options.is_strict() {
            return Err(PhoneDataError::TrailingRecordBytes { start, end });
        }
        warn!(
            "Ignoring {} unterminated bytes before index section at {}",
            end - start,
            end
        );
    }

    debug!("Record section: {} records in {} bytes", section.records.len(), end - HEADER_LEN);
    Ok(section)
}

/// Parses one record body (without its terminator) located at `offset`.
pub fn parse_record(bytes: &[u8], id: RecordId, offset: usize) -> Result<Record> {
    let text = std::str::from_utf8(bytes).map_err(|e| PhoneDataError::MalformedRecord {
        offset,
        reason: format!("invalid UTF-8: {}", e),
    })?;

    let fields: Vec<&str> = text.split(FIELD_SEPARATOR).collect();
    match fields.as_slice() {
        [province, city, zip_code, area_code] => {
            Ok(Record::new(id, *province, *city, *zip_code, *area_code))
        }
        _ => Err(PhoneDataError::MalformedRecord {
            offset,
            reason: format!("got {} fields, require 4", fields.len()),
        }),
    }
}

/// Writes `records` in the given order and returns where each one starts.
///
/// Callers pass records sorted by id; offsets are absolute positions in `buf`.
pub fn write(buf: &mut Vec<u8>, records: &[&Record]) -> Result<HashMap<RecordId, i32>> {
    let mut offsets = HashMap::with_capacity(records.len());
    for record in records {
        record.check_fields(&FORBIDDEN)?;
        let offset = i32::try_from(buf.len()).map_err(|_| PhoneDataError::FileTooLarge(buf.len()))?;
        offsets.insert(record.id, offset);

        let line = [
            record.province.as_str(),
            record.city.as_str(),
            record.zip_code.as_str(),
            record.area_code.as_str(),
        ]
        .join("|");
        utils::write_terminated(buf, line.as_bytes(), utils::NUL);
    }
    Ok(offsets)
}
