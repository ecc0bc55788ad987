//! Text Tag Types
//!
//! ICC profiles can contain text in several formats:
//! - text: Simple ASCII text
//! - desc: Profile description (v2 format)
//! - mluc: Multi-localized Unicode (v4 format)
//!
//! See ICC.1:2022 Sections 10.24 (text), 10.14 (desc), 10.15 (mluc)
//!
//! All offsets below are absolute positions in the profile buffer, so the
//! decoders take the whole profile plus the tag table entry.

use super::TagTableEntry;
use crate::icc::error::ProfileFault;
use crate::read;

/// The only `mluc` name record layout: language, country, length, offset
const MLUC_RECORD_SIZE: u32 = 12;

/// Parse 'desc' type (v2 profile description)
///
/// Layout after the 8-byte type header: ASCII count (including the
/// terminating NUL) followed by the ASCII text. The Unicode and ScriptCode
/// parts that follow are not read.
pub(crate) fn parse_desc(data: &[u8], entry: &TagTableEntry) -> Result<Option<String>, ProfileFault> {
    let start = entry.start();
    let ascii_count = read::u32_be(data, start + 8).ok_or(entry.data_out_of_bounds())?;

    if ascii_count > entry.size {
        return Err(ProfileFault::AsciiLengthOutOfBounds {
            tag: entry.signature,
            length: ascii_count,
            size: entry.size,
        });
    }
    if ascii_count == 0 {
        return Ok(None);
    }

    let ascii = read::bytes(data, start + 12, ascii_count as usize - 1)
        .ok_or(entry.data_out_of_bounds())?;
    Ok(Some(latin1(ascii)))
}

/// Parse 'text' type (simple ASCII, NUL terminated)
pub(crate) fn parse_text(data: &[u8], entry: &TagTableEntry) -> Result<Option<String>, ProfileFault> {
    let start = entry.start();
    let end = start
        .checked_add(entry.size as usize)
        .ok_or(entry.data_out_of_bounds())?;
    let text = read::range(data, start + 8, end).ok_or(entry.data_out_of_bounds())?;
    Ok(Some(latin1(text)))
}

/// Parse 'mluc' type (multi-localized Unicode)
///
/// Only the first name record is used, whatever its locale.
pub(crate) fn parse_mluc(data: &[u8], entry: &TagTableEntry) -> Result<Option<String>, ProfileFault> {
    let start = entry.start();
    let record_count = read::u32_be(data, start + 8).ok_or(entry.data_out_of_bounds())?;
    let record_size = read::u32_be(data, start + 12).ok_or(entry.data_out_of_bounds())?;

    if record_size != MLUC_RECORD_SIZE {
        return Err(ProfileFault::NameRecordSize {
            tag: entry.signature,
            size: record_size,
        });
    }
    if record_count == 0 {
        return Ok(None);
    }

    let language = read::array::<2>(data, start + 16).ok_or(entry.data_out_of_bounds())?;
    let country = read::array::<2>(data, start + 18).ok_or(entry.data_out_of_bounds())?;
    let str_len = read::u32_be(data, start + 20).ok_or(entry.data_out_of_bounds())?;
    let str_offset = read::u32_be(data, start + 24).ok_or(entry.data_out_of_bounds())?;

    if record_count > 1 {
        let language = String::from_utf8_lossy(&language);
        let country = String::from_utf8_lossy(&country);
        tracing::debug!(
            tag = %entry.signature,
            records = record_count,
            %language,
            %country,
            "Using first mluc record"
        );
    }

    // The offset is relative to the start of the tag
    let utf16_data = start
        .checked_add(str_offset as usize)
        .and_then(|offset| read::bytes(data, offset, str_len as usize))
        .ok_or(entry.data_out_of_bounds())?;

    Ok(Some(decode_utf16be(utf16_data)))
}

/// Bytes up to the first NUL, one char per byte
fn latin1(data: &[u8]) -> String {
    data.iter()
        .take_while(|&&b| b != 0)
        .map(|&b| b as char)
        .collect()
}

/// Decode UTF-16BE bytes to String
///
/// A trailing odd byte is ignored, unpaired surrogates become U+FFFD and
/// the text stops at a NUL code unit.
fn decode_utf16be(data: &[u8]) -> String {
    let units = data
        .chunks_exact(2)
        .map(|c| u16::from_be_bytes([c[0], c[1]]))
        .take_while(|&c| c != 0);

    char::decode_utf16(units)
        .map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect()
}
