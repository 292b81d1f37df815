//! Core decoding library for BOSS BR-series recorder metadata files.
//!
//! This crate implements the decode pipeline used by the CLI: a sequential
//! byte cursor feeds the header validator, which selects a record body
//! decoder through a static registry. Decoding is byte-oriented and
//! side-effect free; reading the file into memory is the caller's job.
//! Wire-format constants live in `format::layout`, byte access conventions
//! in `format::cursor`.
//!
//! Invariants:
//! - The cursor position only increases; reads past the end are errors,
//!   never data.
//! - A decode yields exactly one record or the first error encountered.
//! - Recognized-but-undecoded record types yield placeholder records, not
//!   errors.
//!
//! # Examples
//! ```
//! use brscan_core::{Record, decode};
//!
//! let mut data = format!("{:<48}", "BOSS BR0 Format SONGINFO2 Ver1.00BR-900").into_bytes();
//! data.extend_from_slice(b"My Song\0");
//!
//! let record = decode(&data)?;
//! assert!(matches!(record, Record::SongInfo(ref info) if info.song_name == "My Song"));
//! # Ok::<(), brscan_core::FormatError>(())
//! ```

mod dump;
mod format;

pub use dump::hex_dump;
pub use format::cursor::ByteCursor;
pub use format::diskinfo::DiskInfo;
pub use format::error::FormatError;
pub use format::header::Header;
pub use format::songinfo::SongInfo;
pub use format::{Record, UnimplementedRecord, decode};
