//! ICC Profile Error Types

use std::fmt;

use super::types::TagSignature;

/// Structural problems found while decoding an ICC profile
///
/// Each variant names the one check that failed. The `Display` text starts
/// with a short fixed reason (`length mismatch`, `missing signature`, ...)
/// followed by the offending values.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProfileFault {
    /// Size field at offset 0 does not match the buffer length
    LengthMismatch {
        /// `None` when the buffer is too short to hold the size field
        declared: Option<u32>,
        actual: usize,
    },
    /// Bytes 36..40 are not 'acsp'
    MissingSignature { found: Option<[u8; 4]> },
    /// Buffer ends before the fixed header fields
    TruncatedHeader { expected: usize, actual: usize },
    /// Tag table entry lies past the end of the buffer
    TruncatedTagTable { index: u32, count: u32 },
    /// Tag data offset is beyond the buffer
    TagOffsetOutOfBounds {
        tag: TagSignature,
        offset: u32,
        profile_size: usize,
    },
    /// A read inside the tag's data ran past the buffer
    TagDataOutOfBounds {
        tag: TagSignature,
        offset: u32,
        size: u32,
    },
    /// `desc` ASCII count exceeds the tag size from the tag table
    AsciiLengthOutOfBounds {
        tag: TagSignature,
        length: u32,
        size: u32,
    },
    /// `mluc` record size other than 12
    NameRecordSize { tag: TagSignature, size: u32 },
}

impl fmt::Display for ProfileFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch {
                declared: Some(declared),
                actual,
            } => {
                write!(
                    f,
                    "length mismatch: header says {} bytes, data is {} bytes",
                    declared, actual
                )
            }
            Self::LengthMismatch {
                declared: None,
                actual,
            } => {
                write!(
                    f,
                    "length mismatch: {} bytes is too short for a size field",
                    actual
                )
            }
            Self::MissingSignature { found: Some(found) } => {
                write!(
                    f,
                    "missing signature: found {:02X?} (expected 'acsp')",
                    found
                )
            }
            Self::MissingSignature { found: None } => {
                write!(f, "missing signature: profile ends before offset 40")
            }
            Self::TruncatedHeader { expected, actual } => {
                write!(
                    f,
                    "truncated header: expected {} bytes, got {}",
                    expected, actual
                )
            }
            Self::TruncatedTagTable { index, count } => {
                write!(
                    f,
                    "truncated tag table: entry {} of {} is past the end of the profile",
                    index, count
                )
            }
            Self::TagOffsetOutOfBounds {
                tag,
                offset,
                profile_size,
            } => {
                write!(
                    f,
                    "tag offset out of bounds: '{}' at {} > profile size {}",
                    tag, offset, profile_size
                )
            }
            Self::TagDataOutOfBounds { tag, offset, size } => {
                write!(
                    f,
                    "tag data out of bounds: '{}' at offset {} size {}",
                    tag, offset, size
                )
            }
            Self::AsciiLengthOutOfBounds { tag, length, size } => {
                write!(
                    f,
                    "ASCII length out of bounds: '{}' declares {} bytes in a {} byte tag",
                    tag, length, size
                )
            }
            Self::NameRecordSize { tag, size } => {
                write!(f, "name record size must be 12: '{}' uses {}", tag, size)
            }
        }
    }
}

impl std::error::Error for ProfileFault {}
