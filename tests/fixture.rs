//! Checks against the published `phone.dat`.
//!
//! Looks in `$PHONE_DATA_DIR`, falling back to `tests/fixtures`. Skipped when
//! the file is not present.

use std::env;
use std::fs;
use std::path::PathBuf;

use phonedata::{decode, encode, Version};

const PHONE_DAT: &str = "phone.dat";

fn fixture_path() -> PathBuf {
    let dir = env::var_os("PHONE_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures"));
    dir.join(PHONE_DAT)
}

fn load_fixture() -> Option<Vec<u8>> {
    let path = fixture_path();
    match fs::read(&path) {
        Ok(bytes) => Some(bytes),
        Err(_) => {
            eprintln!("skipping: {} not found", path.display());
            None
        }
    }
}

#[test]
fn reference_file_counts() {
    let Some(bytes) = load_fixture() else { return };
    let dataset = decode(&bytes).expect("decode phone.dat");

    assert_eq!(dataset.version, Version::new("2108").unwrap());
    assert_eq!(dataset.record_count(), 370);
    assert_eq!(dataset.entry_count(), 454_336);
}

#[test]
fn reference_file_round_trips() {
    let Some(bytes) = load_fixture() else { return };
    let dataset = decode(&bytes).expect("decode phone.dat");
    let repacked = encode(&dataset).expect("encode phone.dat");

    assert_eq!(repacked.len(), bytes.len());
    if dataset
        .entries
        .windows(2)
        .all(|w| w[0].phone_prefix < w[1].phone_prefix)
    {
        assert_eq!(repacked, bytes);
    }
}
