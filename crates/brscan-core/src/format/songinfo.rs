use serde::{Deserialize, Serialize};

use super::cursor::ByteCursor;
use super::error::FormatError;

/// Per-song metadata: the display name shown on the device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongInfo {
    pub song_name: String,
}

/// Decode a SONGINFO2 body: name bytes up to a 0x00 terminator.
///
/// Bytes after the terminator are left unread; the format carries further
/// fields there that this decoder does not claim yet.
pub fn parse_songinfo(cursor: &mut ByteCursor<'_>) -> Result<SongInfo, FormatError> {
    let mut name = Vec::new();
    loop {
        match cursor.next_byte()? {
            0x00 => break,
            byte => name.push(byte),
        }
    }
    Ok(SongInfo {
        song_name: String::from_utf8_lossy(&name).into_owned(),
    })
}
