use serde::{Deserialize, Serialize};

use super::cursor::ByteCursor;
use super::error::FormatError;
use super::layout;
use super::registry;

/// Validated container header, immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Record-type tag selecting the body decoder.
    pub file_type: String,
    /// Firmware version string, always [`layout::SUPPORTED_VERSION`].
    pub version: String,
}

/// Consume and validate the fixed 48-byte header region.
///
/// The grammar is five space-separated tokens, left-justified and padded to
/// 48 bytes with trailing spaces: `BOSS BR0 Format <TAG> <VERSION>`. On
/// success the cursor sits on the first record body byte.
pub fn parse_header(cursor: &mut ByteCursor<'_>) -> Result<Header, FormatError> {
    let raw = cursor.read_ascii(layout::HEADER_SIZE)?;
    let trimmed = raw.trim();
    let tokens: Vec<&str> = trimmed.split(' ').collect();
    if tokens.len() != layout::HEADER_TOKEN_COUNT {
        return Err(FormatError::InvalidHeader);
    }
    if tokens[0] != layout::MAKER_TOKEN
        || tokens[1] != layout::FAMILY_TOKEN
        || tokens[2] != layout::FORMAT_TOKEN
    {
        return Err(FormatError::InvalidHeader);
    }
    let file_type = tokens[3];
    let version = tokens[4];
    if version != layout::SUPPORTED_VERSION {
        return Err(FormatError::UnsupportedVersion {
            version: version.to_string(),
        });
    }
    if registry::lookup(file_type).is_none() {
        return Err(FormatError::UnsupportedFileType {
            file_type: file_type.to_string(),
        });
    }
    Ok(Header {
        file_type: file_type.to_string(),
        version: version.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::parse_header;
    use crate::format::cursor::ByteCursor;
    use crate::format::error::FormatError;
    use crate::format::layout;

    fn padded(text: &str) -> Vec<u8> {
        format!("{text:<width$}", width = layout::HEADER_SIZE).into_bytes()
    }

    #[test]
    fn parse_valid_header() {
        let data = padded("BOSS BR0 Format DISKINFO Ver1.00BR-900");
        let mut cursor = ByteCursor::new(&data);
        let header = parse_header(&mut cursor).unwrap();
        assert_eq!(header.file_type, "DISKINFO");
        assert_eq!(header.version, "Ver1.00BR-900");
        assert_eq!(cursor.position(), layout::HEADER_SIZE);
    }

    #[test]
    fn parse_wrong_token_count() {
        let four = padded("BOSS BR0 Format Ver1.00BR-900");
        let err = parse_header(&mut ByteCursor::new(&four)).unwrap_err();
        assert!(matches!(err, FormatError::InvalidHeader));

        let six = padded("BOSS BR0 Format DISKINFO extra Ver1.00BR-900");
        let err = parse_header(&mut ByteCursor::new(&six)).unwrap_err();
        assert!(matches!(err, FormatError::InvalidHeader));
    }

    #[test]
    fn parse_wrong_fixed_tokens() {
        let data = padded("ROLA BR0 Format DISKINFO Ver1.00BR-900");
        let err = parse_header(&mut ByteCursor::new(&data)).unwrap_err();
        assert!(matches!(err, FormatError::InvalidHeader));
    }

    #[test]
    fn parse_unsupported_version() {
        let data = padded("BOSS BR0 Format DISKINFO Ver2.00BR-900");
        let err = parse_header(&mut ByteCursor::new(&data)).unwrap_err();
        match err {
            FormatError::UnsupportedVersion { version } => {
                assert_eq!(version, "Ver2.00BR-900");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn parse_unsupported_file_type() {
        let data = padded("BOSS BR0 Format UNKNOWNTAG Ver1.00BR-900");
        let err = parse_header(&mut ByteCursor::new(&data)).unwrap_err();
        match err {
            FormatError::UnsupportedFileType { file_type } => {
                assert_eq!(file_type, "UNKNOWNTAG");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn parse_truncated_header() {
        let data = b"BOSS BR0 Format";
        let err = parse_header(&mut ByteCursor::new(data)).unwrap_err();
        assert!(matches!(err, FormatError::UnexpectedEndOfData { .. }));
    }

    #[test]
    fn version_is_checked_before_file_type() {
        // Both the tag and the version are wrong; the version wins.
        let data = padded("BOSS BR0 Format UNKNOWNTAG Ver2.00BR-900");
        let err = parse_header(&mut ByteCursor::new(&data)).unwrap_err();
        assert!(matches!(err, FormatError::UnsupportedVersion { .. }));
    }
}
