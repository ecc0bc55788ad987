//! ICC Profile Header
//!
//! The header is the first 128 bytes of the profile, followed by the tag
//! count. See ICC.1:2022 Section 7.2.

use super::attributes::{CodeField, ProfileAttributes, RenderingIntent};
use super::error::ProfileFault;
use crate::read;

/// Profile file signature - must be 'acsp'
pub const PROFILE_SIGNATURE: [u8; 4] = *b"acsp";

const SIGNATURE_OFFSET: usize = 36;
const VERSION_OFFSET: usize = 8;
const INTENT_OFFSET: usize = 64;

/// Offset of the tag count, directly after the header
pub const TAG_COUNT_OFFSET: usize = 128;

/// Offset of the first tag table entry
pub const TAG_TABLE_OFFSET: usize = 132;

/// Encoded version numbers this decoder names
const VERSIONS: &[(u32, &str)] = &[
    (0x0200_0000, "2.0"),
    (0x0210_0000, "2.1"),
    (0x0240_0000, "2.4"),
    (0x0400_0000, "4.0"),
    (0x0420_0000, "4.2"),
    (0x0430_0000, "4.3"),
];

/// Device class and platform codes with readable names
const CODE_NAMES: &[(&str, &str)] = &[
    ("scnr", "Scanner"),
    ("mntr", "Monitor"),
    ("prtr", "Printer"),
    ("link", "Link"),
    ("abst", "Abstract"),
    ("spac", "Space"),
    ("nmcl", "Named color"),
    ("appl", "Apple"),
    ("adbe", "Adobe"),
    ("msft", "Microsoft"),
    ("sunw", "Sun Microsystems"),
    ("sgi", "Silicon Graphics"),
    ("tgnt", "Taligent"),
];

/// Header offsets of the four-byte code fields
const CODE_FIELDS: &[(usize, CodeField)] = &[
    (4, CodeField::Cmm),
    (12, CodeField::DeviceClass),
    (16, CodeField::ColorSpace),
    (20, CodeField::ConnectionSpace),
    (40, CodeField::Platform),
    (48, CodeField::Manufacturer),
    (52, CodeField::Model),
    (80, CodeField::Creator),
];

/// Check the declared size and the 'acsp' signature
pub(crate) fn validate(data: &[u8]) -> Result<(), ProfileFault> {
    let declared = read::u32_be(data, 0).ok_or(ProfileFault::LengthMismatch {
        declared: None,
        actual: data.len(),
    })?;

    if usize::try_from(declared).ok() != Some(data.len()) {
        return Err(ProfileFault::LengthMismatch {
            declared: Some(declared),
            actual: data.len(),
        });
    }

    match read::signature(data, SIGNATURE_OFFSET) {
        Some(PROFILE_SIGNATURE) => {}
        found => return Err(ProfileFault::MissingSignature { found }),
    }

    if data.len() < TAG_TABLE_OFFSET {
        return Err(ProfileFault::TruncatedHeader {
            expected: TAG_TABLE_OFFSET,
            actual: data.len(),
        });
    }

    Ok(())
}

/// Fill version, intent and the four-byte code fields
///
/// `data` must have passed [`validate`].
pub(crate) fn read_fields(data: &[u8], attributes: &mut ProfileAttributes) -> Result<(), ProfileFault> {
    let truncated = || ProfileFault::TruncatedHeader {
        expected: TAG_TABLE_OFFSET,
        actual: data.len(),
    };

    let version = read::u32_be(data, VERSION_OFFSET).ok_or_else(truncated)?;
    attributes.version = version_name(version);

    let intent = read::u32_be(data, INTENT_OFFSET).ok_or_else(truncated)?;
    attributes.intent = RenderingIntent::from_u32(intent);

    for &(offset, field) in CODE_FIELDS {
        let raw = read::signature(data, offset).ok_or_else(truncated)?;
        *attributes.code_mut(field) = code_value(raw);
    }

    Ok(())
}

/// Look up an encoded version number
pub fn version_name(raw: u32) -> Option<&'static str> {
    VERSIONS
        .iter()
        .find(|(encoded, _)| *encoded == raw)
        .map(|(_, name)| *name)
}

/// Readable name of a device class or platform code, ignoring ASCII case
pub fn code_name(code: &str) -> Option<&'static str> {
    CODE_NAMES
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(code))
        .map(|(_, name)| *name)
}

/// Decode a four-byte code field; all-zero fields are absent
fn code_value(raw: [u8; 4]) -> Option<String> {
    if raw == [0; 4] {
        return None;
    }

    // Latin-1: every byte maps to the code point of the same value
    let code: String = raw.iter().map(|&b| b as char).collect();
    let code = code.trim_end_matches([' ', '\0']);
    if code.is_empty() {
        return None;
    }

    Some(match code_name(code) {
        Some(name) => name.to_string(),
        None => code.to_string(),
    })
}
