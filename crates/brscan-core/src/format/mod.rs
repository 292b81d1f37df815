//! BOSS BR0 container format decoding.
//!
//! The decoder follows a layered structure:
//! - `layout`: byte sizes, token literals, and sentinel values (source of truth)
//! - `cursor`: sequential bounds-checked byte access
//! - `header`: container grammar validation
//! - `registry` + per-type modules: record body decoding
//! - `error`: explicit, actionable errors
//!
//! Decoding is pure and contains no I/O; callers load the whole file into
//! memory and hand the buffer to [`decode`].

pub mod cursor;
pub mod diskinfo;
pub mod error;
pub mod header;
pub mod layout;
pub mod registry;
pub mod songinfo;

use serde::{Deserialize, Serialize};

use cursor::ByteCursor;
use diskinfo::DiskInfo;
use error::FormatError;
use registry::DecoderKind;
use songinfo::SongInfo;

/// Placeholder for a recognized container whose field decoder is not written
/// yet. A placeholder is a success value; it carries no decoded fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnimplementedRecord {
    /// Record-type tag from the header.
    pub file_type: String,
}

/// A decoded record, one variant per record type family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Record {
    DiskInfo(DiskInfo),
    SongInfo(SongInfo),
    Unimplemented(UnimplementedRecord),
}

impl Record {
    /// Record-type tag this record was decoded from.
    ///
    /// # Examples
    /// ```
    /// use brscan_core::{Record, UnimplementedRecord};
    ///
    /// let record = Record::Unimplemented(UnimplementedRecord {
    ///     file_type: "ARRANGE".to_string(),
    /// });
    /// assert_eq!(record.file_type(), "ARRANGE");
    /// ```
    pub fn file_type(&self) -> &str {
        match self {
            Record::DiskInfo(_) => layout::TAG_DISKINFO,
            Record::SongInfo(_) => layout::TAG_SONGINFO2,
            Record::Unimplemented(record) => &record.file_type,
        }
    }
}

/// Decode a whole metadata file image into a typed record.
///
/// The buffer must hold the complete file. The preamble is checked first
/// (empty input, audio payload sentinel), then the header region is
/// validated and the body decoder selected by its tag runs on the bytes
/// that follow.
///
/// # Examples
/// ```
/// use brscan_core::{Record, decode};
///
/// let mut data = format!("{:<48}", "BOSS BR0 Format DISKINFO Ver1.00BR-900").into_bytes();
/// data.extend_from_slice(b"0003");
/// data.extend_from_slice(&4u16.to_be_bytes());
/// data.extend_from_slice(&[0x00, 0x00]);
///
/// let record = decode(&data)?;
/// assert!(matches!(record, Record::DiskInfo(ref info) if info.song_count == 3));
/// # Ok::<(), brscan_core::FormatError>(())
/// ```
///
/// # Errors
/// Returns the first [`FormatError`] encountered; no partial results are
/// produced.
pub fn decode(data: &[u8]) -> Result<Record, FormatError> {
    if data.is_empty() {
        return Err(FormatError::EmptyFile);
    }
    if data[0] == layout::AUDIO_SENTINEL {
        return Err(FormatError::AudioDataFile);
    }

    let mut cursor = ByteCursor::new(data);
    let header = header::parse_header(&mut cursor)?;
    match registry::lookup(&header.file_type) {
        Some(DecoderKind::DiskInfo) => {
            Ok(Record::DiskInfo(diskinfo::parse_diskinfo(&mut cursor)?))
        }
        Some(DecoderKind::SongInfo) => {
            Ok(Record::SongInfo(songinfo::parse_songinfo(&mut cursor)?))
        }
        Some(DecoderKind::Unimplemented) => Ok(Record::Unimplemented(UnimplementedRecord {
            file_type: header.file_type,
        })),
        // parse_header only admits registered tags; kept as an error rather
        // than a panic.
        None => Err(FormatError::UnsupportedFileType {
            file_type: header.file_type,
        }),
    }
}
