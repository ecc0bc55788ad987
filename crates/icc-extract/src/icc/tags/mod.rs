//! ICC Profile Tag Parsing
//!
//! Tags contain the actual profile data. Each tag table entry has:
//! - A 4-byte signature identifying the tag
//! - A 4-byte offset from the start of the profile
//! - A 4-byte size
//!
//! The tag data itself begins with a 4-byte type signature identifying the
//! data format, followed by 4 reserved bytes and type-specific data.
//!
//! See ICC.1:2022 Section 9.

mod text;

use super::error::ProfileFault;
use super::header::TAG_TABLE_OFFSET;
use super::types::{TagSignature, TypeSignature};
use crate::read;

/// Size of one tag table row
const ENTRY_SIZE: usize = 12;

/// Tag table entry (as stored in profile)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TagTableEntry {
    /// Tag signature
    pub signature: TagSignature,
    /// Offset from start of profile
    pub offset: u32,
    /// Size of tag data
    pub size: u32,
}

impl TagTableEntry {
    /// Read row `index` of a table holding `count` rows
    pub fn read(data: &[u8], index: u32, count: u32) -> Result<Self, ProfileFault> {
        let truncated = ProfileFault::TruncatedTagTable { index, count };

        let row = (index as usize)
            .checked_mul(ENTRY_SIZE)
            .and_then(|offset| offset.checked_add(TAG_TABLE_OFFSET))
            .and_then(|offset| read::bytes(data, offset, ENTRY_SIZE))
            .ok_or(truncated.clone())?;

        let signature = read::u32_be(row, 0).ok_or(truncated.clone())?;
        let offset = read::u32_be(row, 4).ok_or(truncated.clone())?;
        let size = read::u32_be(row, 8).ok_or(truncated)?;

        Ok(Self {
            signature: TagSignature(signature),
            offset,
            size,
        })
    }

    pub fn start(&self) -> usize {
        self.offset as usize
    }

    pub fn data_out_of_bounds(&self) -> ProfileFault {
        ProfileFault::TagDataOutOfBounds {
            tag: self.signature,
            offset: self.offset,
            size: self.size,
        }
    }
}

/// Decode the text held by a tag
///
/// Returns `Ok(None)` for tag types that carry no supported text.
pub(crate) fn read_text(data: &[u8], entry: &TagTableEntry) -> Result<Option<String>, ProfileFault> {
    if entry.start() > data.len() {
        return Err(ProfileFault::TagOffsetOutOfBounds {
            tag: entry.signature,
            offset: entry.offset,
            profile_size: data.len(),
        });
    }

    let type_sig = read::u32_be(data, entry.start()).ok_or(entry.data_out_of_bounds())?;
    // Bytes 4-7 are reserved (should be 0)

    match TypeSignature(type_sig) {
        TypeSignature::DESC => text::parse_desc(data, entry),
        TypeSignature::TEXT => text::parse_text(data, entry),
        TypeSignature::MLUC => text::parse_mluc(data, entry),
        other => {
            tracing::trace!(tag = %entry.signature, type_sig = %other, "Skipping unsupported text type");
            Ok(None)
        }
    }
}
