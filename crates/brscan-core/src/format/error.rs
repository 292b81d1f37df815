use thiserror::Error;

/// Errors produced while decoding a BR0 metadata file.
///
/// A decode surfaces the first error it encounters and produces no partial
/// record; nothing is retried.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("empty file")]
    EmptyFile,
    #[error("audio data file, not a metadata container")]
    AudioDataFile,
    #[error("invalid header")]
    InvalidHeader,
    #[error("unsupported version {version}")]
    UnsupportedVersion { version: String },
    #[error("unsupported file type {file_type}")]
    UnsupportedFileType { file_type: String },
    #[error("malformed integer field {text:?}")]
    MalformedInteger { text: String },
    #[error("inconsistent song counts in DISKINFO {ascii} vs {binary}")]
    InconsistentSongCount { ascii: u16, binary: u16 },
    #[error("unexpected trailing bytes in DISKINFO")]
    UnexpectedTrailingBytes,
    #[error("expected end of file, {remaining} bytes left")]
    ExpectedEndOfFile { remaining: usize },
    #[error("unexpected end of data: need {needed} bytes, got {remaining}")]
    UnexpectedEndOfData { needed: usize, remaining: usize },
}

impl FormatError {
    /// True when the input ran out, as opposed to data that was present but
    /// invalid. Callers use this to pick a distinct exit status or log
    /// category.
    ///
    /// # Examples
    /// ```
    /// use brscan_core::FormatError;
    ///
    /// let err = FormatError::UnexpectedEndOfData { needed: 2, remaining: 0 };
    /// assert!(err.is_truncation());
    /// assert!(!FormatError::InvalidHeader.is_truncation());
    /// ```
    pub fn is_truncation(&self) -> bool {
        matches!(self, FormatError::UnexpectedEndOfData { .. })
    }
}
