use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input reference was absent.
    #[error("invalid argument: no identifier given")]
    InvalidArgument,
    #[error("invalid escaped identifier at offset {offset}: {kind}")]
    Unescape {
        offset: usize,
        kind: UnescapeErrorKind,
    },
}

/// Why an escaped identifier was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UnescapeErrorKind {
    #[error("empty input")]
    Empty,
    #[error("invalid character 0x{0:02x}")]
    InvalidCharacter(u8),
    #[error("identifier starts with a digit")]
    LeadingDigit,
    #[error("truncated escape sequence")]
    TruncatedEscape,
    #[error("invalid hex digit 0x{0:02x}")]
    InvalidHexDigit(u8),
    /// The escaped byte would have been copied verbatim at this position.
    #[error("byte 0x{0:02x} must not be escaped here")]
    NonCanonicalEscape(u8),
}
