//! Section codecs for the phone data container.
//!
//! Each submodule reads and writes one section of the file. The decoder and
//! encoder compose them; none of them touch the filesystem.
//!
//! # Layout
//!
//! ```text
//! offset 0 ┌──────────────────────────┐
//!          │ Version (4 bytes ASCII)  │ ← version
//! offset 4 ├──────────────────────────┤
//!          │ Index offset (i32 LE)    │ ← index_offset ──┐
//! offset 8 ├──────────────────────────┤                  │
//!          │ Records                  │ ← records        │
//!          │ "prov|city|zip|area\0"…  │ ◄─────────┐      │
//! offset I ├──────────────────────────┤ ◄─────────┼──────┘
//!          │ Index entries, 9 bytes:  │ ← index   │
//!          │ u32 prefix               │           │
//!          │ i32 record offset  ──────┼───────────┘
//!          │ u8  card type            │
//!          └──────────────────────────┘
//! ```

pub mod index;
pub mod index_offset;
pub mod records;
pub mod version;

/// Length of the fixed header (version + index offset); the first record starts here.
pub const HEADER_LEN: usize = 8;
