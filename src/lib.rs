//! # phonedata
//!
//! A codec for `phone.dat`, the compact database of Chinese mobile-number
//! prefixes and their province, city, postal code, area code and card type.
//!
//! - [`decode`] / [`encode`] convert between the binary file and a [`Dataset`]
//! - [`unpack`] / [`pack`] convert between the binary file and three
//!   plain-text files (`version.txt`, `record.txt`, `index.txt`)
//!
//! ```no_run
//! # use phonedata::{decode, encode};
//! let bytes = std::fs::read("phone.dat").unwrap();
//! let dataset = decode(&bytes).unwrap();
//! println!("{}: {} records", dataset.version, dataset.record_count());
//! let repacked = encode(&dataset).unwrap();
//! # let _ = repacked;
//! ```
pub mod phonedata;

// Re-export the main types for convenience
pub use phonedata::{
    decode,
    decode_with,
    encode,
    pack,
    read_dataset,
    unpack,
    write_dataset,
    DanglingRef,
    DecodeOptions,
    PhoneDataError,
    Result,
    plain::PlainText,
    types::{
        card_type::CardType,
        models::{CardTypeId, Dataset, IndexEntry, PhonePrefix, Record, RecordId, Version},
        options::Strictness,
    },
};
