//! `version.txt`: the version tag followed by a line feed.

use crate::phonedata::types::error::{PhoneDataError, Result};
use crate::phonedata::types::models::{Version, VERSION_LEN};
use crate::phonedata::utils;

pub fn write(version: &Version) -> Vec<u8> {
    let mut buf = Vec::with_capacity(VERSION_LEN + 1);
    utils::write_terminated(&mut buf, version.as_bytes(), utils::LF);
    buf
}

/// Takes the first four bytes as the version; anything after is ignored.
pub fn parse(bytes: &[u8]) -> Result<Version> {
    let tag = bytes.get(..VERSION_LEN).ok_or_else(|| {
        PhoneDataError::InvalidVersion(String::from_utf8_lossy(bytes).trim_end().to_string())
    })?;
    Version::from_bytes(tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_appends_lf() {
        assert_eq!(write(&Version::new("2306").unwrap()), b"2306\n");
    }

    #[test]
    fn parse_tolerates_trailing_bytes() {
        assert_eq!(parse(b"2306\n").unwrap().as_str(), "2306");
        assert_eq!(parse(b"2306").unwrap().as_str(), "2306");
        assert_eq!(parse(b"2306 extra\n").unwrap().as_str(), "2306");
    }

    #[test]
    fn parse_rejects_short_tag() {
        assert!(matches!(parse(b"23\n"), Err(PhoneDataError::InvalidVersion(_))));
    }
}
