//! `record.txt`: one `recordID|province|city|zipCode|areaCode` line per record.

use log::debug;

use super::RECORD_FILE_NAME;
use crate::phonedata::encoder::sorted_records;
use crate::phonedata::types::error::{PhoneDataError, Result};
use crate::phonedata::types::models::{Record, RecordId};
use crate::phonedata::utils;

/// Characters a field may not contain in the plain-text form.
pub const FORBIDDEN: [char; 2] = ['|', '\n'];

/// Writes records in id order. Ids must be dense.
pub fn write(records: &[Record]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    for record in sorted_records(records)? {
        record.check_fields(&FORBIDDEN)?;
        let line = format!(
            "{}|{}|{}|{}|{}",
            record.id, record.province, record.city, record.zip_code, record.area_code
        );
        utils::write_terminated(&mut buf, line.as_bytes(), utils::LF);
    }
    Ok(buf)
}

/// Parses every line, returning records sorted by id.
///
/// Lines may appear in any order, but the ids must form `1..=N`.
pub fn parse(bytes: &[u8]) -> Result<Vec<Record>> {
    let mut reader = bytes;
    let mut records = Vec::new();
    let mut line_no = 0;

    while let Some(line) = utils::read_line(&mut reader) {
        line_no += 1;
        records.push(parse_line(line, line_no)?);
    }

    sorted_records(&records)?;
    records.sort_by_key(|r| r.id);
    debug!("Parsed {} records from {}", records.len(), RECORD_FILE_NAME);
    Ok(records)
}

fn parse_line(line: &[u8], line_no: usize) -> Result<Record> {
    let malformed = |reason: String| PhoneDataError::MalformedPlainText {
        file: RECORD_FILE_NAME,
        line: line_no,
        reason,
    };

    let text = std::str::from_utf8(line).map_err(|e| malformed(format!("invalid UTF-8: {}", e)))?;
    let fields: Vec<&str> = text.split('|').collect();
    let [id, province, city, zip_code, area_code] = fields.as_slice() else {
        return Err(malformed(format!("got {} fields, require 5", fields.len())));
    };
    let id = id
        .parse::<u32>()
        .map_err(|_| malformed(format!("record id {:?} is not a decimal integer", id)))?;

    Ok(Record::new(RecordId(id), *province, *city, *zip_code, *area_code))
}
