use serde::{Deserialize, Serialize};

use super::cursor::ByteCursor;
use super::error::FormatError;
use super::layout;

/// Medium-level metadata: how many songs the card holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiskInfo {
    pub song_count: u16,
}

/// Decode a DISKINFO body; it must consume the remaining buffer exactly.
///
/// The count is stored twice: four ASCII digits, then a big-endian u16 that
/// must equal the digits plus one. The off-by-one is part of the format, not
/// an accident.
pub fn parse_diskinfo(cursor: &mut ByteCursor<'_>) -> Result<DiskInfo, FormatError> {
    let text = cursor.read_ascii(layout::DISKINFO_COUNT_DIGITS)?;
    if !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FormatError::MalformedInteger { text });
    }
    let ascii_count: u16 = text
        .parse()
        .map_err(|_| FormatError::MalformedInteger { text: text.clone() })?;

    let binary_count = cursor.read_u16_be()?;
    if binary_count != ascii_count + 1 {
        return Err(FormatError::InconsistentSongCount {
            ascii: ascii_count,
            binary: binary_count,
        });
    }

    for _ in 0..layout::DISKINFO_PADDING {
        if cursor.next_byte()? != 0x00 {
            return Err(FormatError::UnexpectedTrailingBytes);
        }
    }

    cursor.assert_end()?;
    Ok(DiskInfo {
        song_count: ascii_count,
    })
}
