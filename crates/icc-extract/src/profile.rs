//! Extracted ICC profiles
//!
//! Pairs the verbatim profile bytes with their decoded attributes.

use crate::Result;
use crate::icc::{ProfileAttributes, decode_profile};

/// An ICC profile taken from a container or supplied directly
///
/// The bytes are kept exactly as stored so they can be embedded as an
/// opaque stream. The attributes are informational.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedProfile {
    data: Vec<u8>,
    attributes: ProfileAttributes,
}

impl ExtractedProfile {
    /// Decode raw ICC data, keeping the bytes
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let attributes = decode_profile(&data)?;
        Ok(Self { data, attributes })
    }

    /// Get the raw ICC bytes
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get the decoded attributes
    pub fn attributes(&self) -> &ProfileAttributes {
        &self.attributes
    }

    /// Length of the raw profile in bytes
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false for a decoded profile; provided for API symmetry
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Human-readable description, if the profile has one
    pub fn description(&self) -> Option<&str> {
        self.attributes.description.as_deref()
    }

    /// Take back the raw bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

impl AsRef<[u8]> for ExtractedProfile {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}
