#![allow(dead_code)]

use phonedata::{CardTypeId, Dataset, PhonePrefix, Version};

/// Two records and three entries, the index deliberately out of prefix order.
pub fn minimal_dataset() -> Dataset {
    let mut dataset = Dataset::new(Version::new("1234").expect("version"));
    let first = dataset.push_record("p1", "c1", "z1", "a1");
    let second = dataset.push_record("p2", "c2", "z2", "a2");
    dataset.push_entry(PhonePrefix(1_333_608), CardTypeId(3), first);
    dataset.push_entry(PhonePrefix(1_333_606), CardTypeId(1), first);
    dataset.push_entry(PhonePrefix(1_333_607), CardTypeId(2), second);
    dataset
}

/// The encoded form of [`minimal_dataset`].
pub fn minimal_bytes() -> Vec<u8> {
    let mut bytes = b"1234".to_vec();
    bytes.extend_from_slice(&32i32.to_le_bytes());
    bytes.extend_from_slice(b"p1|c1|z1|a1\0p2|c2|z2|a2\0");
    for (prefix, offset, card) in [(1_333_606u32, 8i32, 1u8), (1_333_607, 20, 2), (1_333_608, 8, 3)] {
        bytes.extend_from_slice(&prefix.to_le_bytes());
        bytes.extend_from_slice(&offset.to_le_bytes());
        bytes.push(card);
    }
    bytes
}

/// Index entries as sortable tuples, for comparing datasets up to entry order.
pub fn entry_keys(dataset: &Dataset) -> Vec<(u32, u8, u32)> {
    let mut keys: Vec<(u32, u8, u32)> = dataset
        .entries
        .iter()
        .map(|e| (e.phone_prefix.get(), e.card_type.0, e.record_id.get()))
        .collect();
    keys.sort_unstable();
    keys
}
