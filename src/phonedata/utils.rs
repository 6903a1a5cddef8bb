//! Low-level byte reading and writing utilities.
//!
//! Everything in the phone data format is little-endian with no alignment
//! padding. Readers take a `&mut &[u8]` cursor and advance it past whatever
//! they consume.

use byteorder::{ByteOrder, LittleEndian, ReadBytesExt};

use super::types::error::Result;

/// NUL, the record terminator of the binary format.
pub const NUL: u8 = 0x00;

/// LF, the line terminator of the plain-text files.
pub const LF: u8 = b'\n';

/// Read a 4-byte little-endian unsigned integer.
pub fn read_u32_le(reader: &mut &[u8]) -> Result<u32> {
    Ok(reader.read_u32::<LittleEndian>()?)
}

/// Read a 4-byte little-endian signed integer.
///
/// Offsets are stored signed in the format even though valid ones are never negative.
pub fn read_i32_le(reader: &mut &[u8]) -> Result<i32> {
    Ok(reader.read_i32::<LittleEndian>()?)
}

/// Read a single byte.
pub fn read_u8(reader: &mut &[u8]) -> Result<u8> {
    Ok(reader.read_u8()?)
}

pub fn write_u32_le(buf: &mut Vec<u8>, value: u32) {
    let mut bytes = [0u8; 4];
    LittleEndian::write_u32(&mut bytes, value);
    buf.extend_from_slice(&bytes);
}

pub fn write_i32_le(buf: &mut Vec<u8>, value: i32) {
    let mut bytes = [0u8; 4];
    LittleEndian::write_i32(&mut bytes, value);
    buf.extend_from_slice(&bytes);
}

/// Overwrite four bytes at `at` with `value`. `buf` must hold `at + 4` bytes.
pub fn patch_i32_le(buf: &mut [u8], at: usize, value: i32) {
    LittleEndian::write_i32(&mut buf[at..at + 4], value);
}

/// Split off everything before the next `terminator` and advance past it.
///
/// Returns `None` and leaves the cursor untouched when no terminator remains.
pub fn read_until<'a>(reader: &mut &'a [u8], terminator: u8) -> Option<&'a [u8]> {
    let data: &'a [u8] = *reader;
    let end = data.iter().position(|&b| b == terminator)?;
    *reader = &data[end + 1..];
    Some(&data[..end])
}

/// Read a NUL-terminated byte string.
pub fn read_nul_terminated<'a>(reader: &mut &'a [u8]) -> Option<&'a [u8]> {
    read_until(reader, NUL)
}

/// Read an LF-terminated line. A final line without LF is returned as-is.
pub fn read_line<'a>(reader: &mut &'a [u8]) -> Option<&'a [u8]> {
    if reader.is_empty() {
        return None;
    }
    if let Some(line) = read_until(reader, LF) {
        return Some(line);
    }
    Some(std::mem::take(reader))
}

/// Write `bytes` followed by `terminator`.
pub fn write_terminated(buf: &mut Vec<u8>, bytes: &[u8], terminator: u8) {
    buf.extend_from_slice(bytes);
    buf.push(terminator);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_are_little_endian() {
        let mut buf = Vec::new();
        write_u32_le(&mut buf, 1_330_000);
        write_i32_le(&mut buf, -2);
        buf.push(7);
        assert_eq!(&buf[..4], &[0x50, 0x4B, 0x14, 0x00]);

        let mut reader = buf.as_slice();
        assert_eq!(read_u32_le(&mut reader).unwrap(), 1_330_000);
        assert_eq!(read_i32_le(&mut reader).unwrap(), -2);
        assert_eq!(read_u8(&mut reader).unwrap(), 7);
        assert!(reader.is_empty());
        assert!(read_u8(&mut reader).is_err());
    }

    #[test]
    fn patch_overwrites_in_place() {
        let mut buf = vec![0xFF; 8];
        patch_i32_le(&mut buf, 4, 32);
        assert_eq!(buf, [0xFF, 0xFF, 0xFF, 0xFF, 32, 0, 0, 0]);
    }

    #[test]
    fn terminated_strings() {
        let data = b"ab\0\0cd";
        let mut reader = &data[..];
        assert_eq!(read_nul_terminated(&mut reader), Some(&b"ab"[..]));
        assert_eq!(read_nul_terminated(&mut reader), Some(&b""[..]));
        assert_eq!(read_nul_terminated(&mut reader), None);
        assert_eq!(reader, b"cd");
    }

    #[test]
    fn lines_tolerate_missing_final_lf() {
        let data = b"one\ntwo";
        let mut reader = &data[..];
        assert_eq!(read_line(&mut reader), Some(&b"one"[..]));
        assert_eq!(read_line(&mut reader), Some(&b"two"[..]));
        assert_eq!(read_line(&mut reader), None);
    }
}
