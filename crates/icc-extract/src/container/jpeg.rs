//! ICC profiles in JPEG APP2 segments
//!
//! A profile is stored in one or more APP2 segments whose payload begins
//! with `ICC_PROFILE\0`, a 1-based sequence number and the segment count.
//! Large profiles are split across several segments.

use crate::options::{ExtractOptions, JpegReassembly};
use crate::read;
use crate::{Error, Result};

/// ICC profile signature in APP2 marker
pub const ICC_PROFILE_SIGNATURE: &[u8; 12] = b"ICC_PROFILE\0";

/// Signature plus sequence number and segment count
const ICC_HEADER_LEN: usize = 14;

const SOI: u16 = 0xFFD8;
const EOI: u16 = 0xFFD9;
const SOS: u16 = 0xFFDA;
const APP2: u16 = 0xFFE2;
const TEM: u16 = 0xFF01;
const RST0: u16 = 0xFFD0;
const RST7: u16 = 0xFFD7;

/// One `ICC_PROFILE` segment payload
#[derive(Debug, Clone, Copy)]
struct Fragment<'a> {
    sequence: u8,
    count: u8,
    data: &'a [u8],
}

/// Extract ICC profile from JPEG data.
///
/// Returns `Ok(None)` when the file has no `ICC_PROFILE` segment before the
/// start of scan. Segment lengths that run past the end of the buffer fail
/// with [`Error::MalformedContainer`].
pub fn extract_jpeg_profile(data: &[u8], options: &ExtractOptions) -> Result<Option<Vec<u8>>> {
    if read::u16_be(data, 0) != Some(SOI) {
        return Err(Error::MalformedContainer(
            "missing JPEG start-of-image marker".to_string(),
        ));
    }

    let mut fragments = Vec::new();
    let mut pos = 2;

    while data.len() - pos >= 4 {
        let marker = read::u16_be(data, pos).ok_or_else(|| truncated(pos))?;

        if marker >> 8 != 0xFF {
            return Err(Error::MalformedContainer(format!(
                "expected marker at offset {}, found 0x{:02X}",
                pos,
                marker >> 8
            )));
        }

        match marker {
            // Fill byte before the real marker
            0xFFFF => {
                pos += 1;
                continue;
            }
            // Entropy-coded data follows; no APP segments after this point
            SOS | EOI => break,
            // Markers without a length field
            TEM | SOI | RST0..=RST7 => {
                pos += 2;
                continue;
            }
            _ => {}
        }

        let length = read::u16_be(data, pos + 2).ok_or_else(|| truncated(pos))? as usize;
        if length < 2 {
            return Err(Error::MalformedContainer(format!(
                "segment 0x{:04X} at offset {} has invalid length {}",
                marker, pos, length
            )));
        }

        // The length covers itself and the payload, not the marker
        let end = pos + 2 + length;
        let Some(payload) = read::range(data, pos + 4, end) else {
            return Err(Error::MalformedContainer(format!(
                "segment 0x{:04X} at offset {} declares {} bytes, only {} remain",
                marker,
                pos,
                length,
                data.len() - pos - 2
            )));
        };

        if marker == APP2 {
            if let Some(fragment) = icc_fragment(payload) {
                tracing::debug!(
                    offset = pos,
                    sequence = fragment.sequence,
                    count = fragment.count,
                    len = fragment.data.len(),
                    "Found ICC_PROFILE segment"
                );
                fragments.push(fragment);
            }
        }

        pos = end;
    }

    if fragments.is_empty() {
        return Ok(None);
    }

    Ok(Some(reassemble(fragments, options.jpeg_reassembly)))
}

fn truncated(pos: usize) -> Error {
    Error::MalformedContainer(format!("segment header at offset {} is truncated", pos))
}

/// Split an APP2 payload into its ICC header fields and profile bytes
fn icc_fragment(payload: &[u8]) -> Option<Fragment<'_>> {
    if payload.len() < ICC_HEADER_LEN || !payload.starts_with(ICC_PROFILE_SIGNATURE) {
        return None;
    }

    Some(Fragment {
        sequence: payload[12],
        count: payload[13],
        data: &payload[ICC_HEADER_LEN..],
    })
}

/// Concatenate fragments into one profile
fn reassemble(mut fragments: Vec<Fragment<'_>>, reassembly: JpegReassembly) -> Vec<u8> {
    if reassembly == JpegReassembly::SequenceNumber {
        // Stable: equal sequence numbers keep their file order
        fragments.sort_by_key(|f| f.sequence);
    }

    let declared = fragments[0].count as usize;
    let consecutive = fragments
        .iter()
        .enumerate()
        .all(|(i, f)| f.sequence as usize == i + 1);
    if declared != fragments.len() || !consecutive {
        tracing::warn!(
            segments = fragments.len(),
            declared,
            "ICC_PROFILE segment numbering is inconsistent; concatenating anyway"
        );
    }

    let total = fragments.iter().map(|f| f.data.len()).sum();
    let mut profile = Vec::with_capacity(total);
    for fragment in &fragments {
        profile.extend_from_slice(fragment.data);
    }
    profile
}
