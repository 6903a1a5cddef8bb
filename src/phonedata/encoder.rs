//! Whole-file encoding ([`Dataset`] → bytes).

use log::{debug, info};

use super::format::{index, index_offset, records, version};
use super::types::error::{PhoneDataError, Result};
use super::types::models::{Dataset, IndexEntry, Record};

/// Encode a dataset into a complete phone data file.
///
/// Records are written in id order and index entries in ascending numeric
/// prefix order. The dataset itself is left untouched; nothing is returned
/// unless the whole buffer was produced.
pub fn encode(dataset: &Dataset) -> Result<Vec<u8>> {
    let sorted_records = sorted_records(&dataset.records)?;
    let mut sorted_entries: Vec<&IndexEntry> = dataset.entries.iter().collect();
    sorted_entries.sort_by_key(|e| e.phone_prefix);

    let mut buf = Vec::new();
    version::write(&mut buf, &dataset.version);
    let offset_field = index_offset::reserve(&mut buf);

    let offsets = records::write(&mut buf, &sorted_records)?;
    let index_start = buf.len();
    debug!("Wrote {} records, index section starts at {}", sorted_records.len(), index_start);

    index::write(&mut buf, &sorted_entries, &offsets)?;
    index_offset::backfill(&mut buf, offset_field, index_start)?;

    info!(
        "Encoded phone data {}: {} records, {} index entries, {} bytes",
        dataset.version,
        sorted_records.len(),
        sorted_entries.len(),
        buf.len()
    );
    Ok(buf)
}

/// Records ordered by id, provided the ids are exactly `1..=N`.
pub(crate) fn sorted_records(records: &[Record]) -> Result<Vec<&Record>> {
    let mut sorted: Vec<&Record> = records.iter().collect();
    sorted.sort_by_key(|r| r.id);

    for (position, record) in sorted.iter().enumerate() {
        let expected = position as u64 + 1;
        if u64::from(record.id.get()) != expected {
            let reason = if position > 0 && sorted[position - 1].id == record.id {
                format!("record id {} appears more than once", record.id)
            } else {
                format!("expected record id {}, found {}", expected, record.id)
            };
            return Err(PhoneDataError::InvalidRecordIds(reason));
        }
    }
    Ok(sorted)
}
