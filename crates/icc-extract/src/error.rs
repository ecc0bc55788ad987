//! Error types for icc-extract

use thiserror::Error;

use crate::icc::ProfileFault;

/// Result type for icc-extract operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while extracting or decoding a profile
///
/// A container without a profile is not an error: extractors report it as
/// `Ok(None)`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// JPEG or PNG framing is inconsistent (lengths pointing outside the buffer, bad markers)
    #[error("Malformed container: {0}")]
    MalformedContainer(String),

    /// A PNG `iCCP` chunk is not laid out as `name \0 method data`
    #[error("Malformed chunk: {0}")]
    MalformedChunk(String),

    /// `iCCP` compression method other than zlib
    #[error("Unsupported compression method: {0}")]
    UnsupportedCompression(u8),

    /// The zlib stream could not be inflated
    #[error("Decompression failed: {0}")]
    DecompressionFailed(String),

    /// The inflated profile is larger than the configured cap
    #[error("Decompressed profile exceeds {limit} bytes")]
    DecompressionLimit { limit: usize },

    /// Invalid ICC profile structure
    #[error("Invalid profile: {0}")]
    InvalidProfile(#[from] ProfileFault),

    /// The buffer is neither a JPEG nor a PNG file
    #[error("Unknown container format")]
    UnknownContainer,
}
