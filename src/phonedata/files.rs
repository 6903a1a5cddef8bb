//! Filesystem side of pack and unpack.
//!
//! The codec works on whole buffers; this module reads and writes them.
//! Output files are created with `create_new`, so an existing file is never
//! overwritten and an encode failure leaves nothing behind.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};

use super::decoder::decode;
use super::encoder::encode;
use super::plain::{PlainText, INDEX_FILE_NAME, RECORD_FILE_NAME, VERSION_FILE_NAME};
use super::types::error::{PhoneDataError, Result};
use super::types::models::Dataset;
use super::types::options::DecodeOptions;

/// Read and decode a phone data file.
pub fn read_dataset(path: impl AsRef<Path>, options: &DecodeOptions) -> Result<Dataset> {
    let path = path.as_ref();
    info!("Reading phone data file: {}", path.display());
    let bytes = fs::read(path)?;
    decode(&bytes, options)
}

/// Encode a dataset and write it to a new file at `path`.
pub fn write_dataset(path: impl AsRef<Path>, dataset: &Dataset) -> Result<()> {
    let path = path.as_ref();
    ensure_absent(path)?;
    let bytes = encode(dataset)?;
    write_new(path, &bytes)?;
    info!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

/// Split a phone data file into `version.txt`, `record.txt` and `index.txt`
/// inside `plain_dir`, creating the directory if needed.
///
/// Fails before writing anything if any of the three files already exists.
pub fn unpack(
    data_path: impl AsRef<Path>,
    plain_dir: impl AsRef<Path>,
    options: &DecodeOptions,
) -> Result<()> {
    let plain_dir = plain_dir.as_ref();
    fs::create_dir_all(plain_dir)?;
    for name in [VERSION_FILE_NAME, RECORD_FILE_NAME, INDEX_FILE_NAME] {
        ensure_absent(&plain_dir.join(name))?;
    }

    let dataset = read_dataset(data_path, options)?;
    let plain = PlainText::from_dataset(&dataset)?;
    for (name, contents) in plain.files() {
        let target = plain_dir.join(name);
        write_new(&target, contents)?;
        debug!("Wrote {} ({} bytes)", target.display(), contents.len());
    }

    info!(
        "Unpacked {} records and {} index entries into {}",
        dataset.record_count(),
        dataset.entry_count(),
        plain_dir.display()
    );
    Ok(())
}

/// Assemble a phone data file at `data_path` from the three plain-text files
/// in `plain_dir`. Fails if `data_path` already exists.
pub fn pack(plain_dir: impl AsRef<Path>, data_path: impl AsRef<Path>) -> Result<()> {
    let plain_dir = plain_dir.as_ref();
    let data_path = data_path.as_ref();
    ensure_absent(data_path)?;

    let plain = PlainText {
        version: fs::read(plain_dir.join(VERSION_FILE_NAME))?,
        records: fs::read(plain_dir.join(RECORD_FILE_NAME))?,
        index: fs::read(plain_dir.join(INDEX_FILE_NAME))?,
    };
    let dataset = plain.to_dataset()?;
    info!(
        "Packing {} records and {} index entries from {}",
        dataset.record_count(),
        dataset.entry_count(),
        plain_dir.display()
    );
    write_dataset(data_path, &dataset)
}

fn ensure_absent(path: &Path) -> Result<()> {
    if path.try_exists()? {
        return Err(PhoneDataError::AlreadyExists(path.to_path_buf()));
    }
    Ok(())
}

fn write_new(path: &Path, contents: &[u8]) -> Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| already_exists_or(e, path.to_path_buf()))?;
    file.write_all(contents)?;
    file.sync_all()?;
    Ok(())
}

fn already_exists_or(err: io::Error, path: PathBuf) -> PhoneDataError {
    if err.kind() == io::ErrorKind::AlreadyExists {
        PhoneDataError::AlreadyExists(path)
    } else {
        PhoneDataError::Io(err)
    }
}
