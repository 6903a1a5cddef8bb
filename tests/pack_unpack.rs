mod common;

use std::fs;

use common::{minimal_bytes, minimal_dataset};
use phonedata::{
    decode, pack, read_dataset, unpack, write_dataset, DecodeOptions, PhoneDataError,
};
use tempfile::TempDir;

#[test]
fn unpack_writes_three_plain_files() {
    let dir = TempDir::new().unwrap();
    let data_path = dir.path().join("phone.dat");
    fs::write(&data_path, minimal_bytes()).unwrap();

    let plain_dir = dir.path().join("plain").join("nested");
    unpack(&data_path, &plain_dir, &DecodeOptions::default()).expect("unpack");

    assert_eq!(fs::read_to_string(plain_dir.join("version.txt")).unwrap(), "1234\n");
    assert_eq!(
        fs::read_to_string(plain_dir.join("record.txt")).unwrap(),
        "1|p1|c1|z1|a1\n2|p2|c2|z2|a2\n"
    );
    assert_eq!(
        fs::read_to_string(plain_dir.join("index.txt")).unwrap(),
        "1333606|1|1\n1333607|2|2\n1333608|1|3\n"
    );
}

#[test]
fn pack_reverses_unpack() {
    let dir = TempDir::new().unwrap();
    let original = dir.path().join("phone.dat");
    fs::write(&original, minimal_bytes()).unwrap();

    let plain_dir = dir.path().join("plain");
    unpack(&original, &plain_dir, &DecodeOptions::default()).unwrap();

    let repacked = dir.path().join("repacked.dat");
    pack(&plain_dir, &repacked).expect("pack");
    assert_eq!(fs::read(&repacked).unwrap(), minimal_bytes());
}

#[test]
fn pack_accepts_hand_written_files() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("version.txt"), "2306\n").unwrap();
    fs::write(
        dir.path().join("record.txt"),
        "2|安徽|合肥|230000|0551\n1|安徽|巢湖|238000|0551\n",
    )
    .unwrap();
    fs::write(dir.path().join("index.txt"), "1300000|2|2\n1300001|1|2\n").unwrap();

    let data_path = dir.path().join("phone.dat");
    pack(dir.path(), &data_path).expect("pack");

    let dataset = read_dataset(&data_path, &DecodeOptions::default()).unwrap();
    assert_eq!(dataset.version.as_str(), "2306");
    assert_eq!(dataset.records[0].city, "巢湖");
    assert_eq!(dataset.records[1].city, "合肥");
    assert_eq!(dataset.entries[0].record_id.get(), 2);
}

#[test]
fn unpack_refuses_to_overwrite() {
    let dir = TempDir::new().unwrap();
    let data_path = dir.path().join("phone.dat");
    fs::write(&data_path, minimal_bytes()).unwrap();

    let plain_dir = dir.path().join("plain");
    fs::create_dir(&plain_dir).unwrap();
    fs::write(plain_dir.join("index.txt"), "keep me").unwrap();

    let err = unpack(&data_path, &plain_dir, &DecodeOptions::default()).unwrap_err();
    assert!(matches!(err, PhoneDataError::AlreadyExists(ref p) if p.ends_with("index.txt")));
    assert!(!plain_dir.join("version.txt").exists());
    assert_eq!(fs::read_to_string(plain_dir.join("index.txt")).unwrap(), "keep me");
}

#[test]
fn pack_refuses_to_overwrite() {
    let dir = TempDir::new().unwrap();
    let data_path = dir.path().join("phone.dat");
    fs::write(&data_path, minimal_bytes()).unwrap();
    let plain_dir = dir.path().join("plain");
    unpack(&data_path, &plain_dir, &DecodeOptions::default()).unwrap();

    let err = pack(&plain_dir, &data_path).unwrap_err();
    assert!(matches!(err, PhoneDataError::AlreadyExists(_)));
}

#[test]
fn failed_pack_leaves_no_output() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("version.txt"), "2306\n").unwrap();
    fs::write(dir.path().join("record.txt"), "1|a|b|c|d\n").unwrap();
    fs::write(dir.path().join("index.txt"), "1300000|2|1\n").unwrap();

    let data_path = dir.path().join("phone.dat");
    assert!(matches!(
        pack(dir.path(), &data_path),
        Err(PhoneDataError::DanglingIndex { .. })
    ));
    assert!(!data_path.exists());
}

#[test]
fn pack_reports_missing_plain_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("version.txt"), "2306\n").unwrap();
    let err = pack(dir.path(), dir.path().join("phone.dat")).unwrap_err();
    assert!(matches!(err, PhoneDataError::Io(_)));
}

#[test]
fn write_dataset_then_read_back() {
    let dir = TempDir::new().unwrap();
    let data_path = dir.path().join("phone.dat");
    let dataset = minimal_dataset();

    write_dataset(&data_path, &dataset).unwrap();
    let bytes = fs::read(&data_path).unwrap();
    let mut expected = dataset.clone();
    expected.sort_entries();
    assert_eq!(decode(&bytes).unwrap(), expected);

    assert!(matches!(
        write_dataset(&data_path, &dataset),
        Err(PhoneDataError::AlreadyExists(_))
    ));
}
