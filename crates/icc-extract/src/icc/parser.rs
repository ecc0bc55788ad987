//! ICC Profile Parser
//!
//! Decodes a raw profile into [`ProfileAttributes`].
//!
//! # Structure
//!
//! An ICC profile consists of:
//! 1. A 128-byte header
//! 2. A tag table listing all tags
//! 3. Tag data (may overlap/share data)
//!
//! Only the header fields and the four text tags below are decoded; every
//! other tag is skipped without looking at its data.

use super::attributes::{ProfileAttributes, TextField};
use super::error::ProfileFault;
use super::header::{self, TAG_COUNT_OFFSET, TAG_TABLE_OFFSET};
use super::tags::{self, TagTableEntry};
use super::types::TagSignature;
use crate::read;

/// Text tags and the attribute each one fills
const TEXT_TAGS: &[(TagSignature, TextField)] = &[
    (TagSignature::DESC, TextField::Description),
    (TagSignature::COPYRIGHT, TextField::Copyright),
    (TagSignature::DMDD, TextField::DeviceModelDescription),
    (TagSignature::VIEW_COND_DESC, TextField::ViewingConditionsDescription),
];

/// Decode an ICC profile
///
/// Fails with [`Error::InvalidProfile`](crate::Error::InvalidProfile) on the
/// first structural problem; no partial result is returned.
pub fn decode_profile(data: &[u8]) -> crate::Result<ProfileAttributes> {
    Ok(decode(data)?)
}

fn decode(data: &[u8]) -> Result<ProfileAttributes, ProfileFault> {
    header::validate(data)?;

    let mut attributes = ProfileAttributes::default();
    header::read_fields(data, &mut attributes)?;

    let tag_count = read::u32_be(data, TAG_COUNT_OFFSET).ok_or(ProfileFault::TruncatedHeader {
        expected: TAG_TABLE_OFFSET,
        actual: data.len(),
    })?;

    for index in 0..tag_count {
        let entry = TagTableEntry::read(data, index, tag_count)?;

        let Some(field) = text_field(entry.signature) else {
            continue;
        };

        if let Some(text) = tags::read_text(data, &entry)? {
            tracing::trace!(tag = %entry.signature, %text, "Decoded text tag");
            *attributes.text_mut(field) = Some(text);
        }
    }

    tracing::debug!(
        size = data.len(),
        tags = tag_count,
        version = ?attributes.version,
        "Decoded ICC profile"
    );

    Ok(attributes)
}

fn text_field(signature: TagSignature) -> Option<TextField> {
    TEXT_TAGS
        .iter()
        .find(|(sig, _)| *sig == signature)
        .map(|(_, field)| *field)
}
