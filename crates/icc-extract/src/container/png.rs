//! ICC profiles in PNG iCCP chunks
//!
//! iCCP chunk format: profile name, NUL, compression method (1 byte),
//! zlib-compressed profile. Chunk CRCs are not verified.

use flate2::{Decompress, FlushDecompress, Status};

use crate::options::ExtractOptions;
use crate::read;
use crate::{Error, Result};

/// PNG signature: 0x89 0x50 0x4E 0x47 0x0D 0x0A 0x1A 0x0A
pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// zlib/DEFLATE, the only method PNG defines
const COMPRESSION_ZLIB: u8 = 0;

/// First output allocation when inflating
const INITIAL_INFLATE_CAPACITY: usize = 4096;

/// Extract ICC profile from PNG data (iCCP chunk).
///
/// Returns `Ok(None)` when `IEND` or the end of the data is reached without
/// an `iCCP` chunk. The first `iCCP` chunk found is returned.
pub fn extract_png_profile(data: &[u8], options: &ExtractOptions) -> Result<Option<Vec<u8>>> {
    if read::bytes(data, 0, PNG_SIGNATURE.len()) != Some(&PNG_SIGNATURE[..]) {
        return Err(Error::MalformedContainer("missing PNG signature".to_string()));
    }

    let mut offset = PNG_SIGNATURE.len();

    while offset < data.len() {
        let (Some(length), Some(chunk_type)) =
            (read::u32_be(data, offset), read::signature(data, offset + 4))
        else {
            return Err(Error::MalformedContainer(format!(
                "chunk header at offset {} is truncated",
                offset
            )));
        };

        // Length field + type + data + CRC
        let body = offset + 8;
        let next = body
            .checked_add(length as usize)
            .and_then(|end| end.checked_add(4))
            .filter(|&next| next <= data.len());
        let (Some(next), Some(chunk)) = (next, read::bytes(data, body, length as usize)) else {
            return Err(Error::MalformedContainer(format!(
                "chunk '{}' at offset {} declares {} bytes past the end of the file",
                String::from_utf8_lossy(&chunk_type),
                offset,
                length
            )));
        };

        match &chunk_type {
            b"IEND" => break,
            b"iCCP" => {
                tracing::debug!(offset, len = length, "Found iCCP chunk");
                return parse_iccp(chunk, options.max_profile_bytes).map(Some);
            }
            _ => {}
        }

        offset = next;
    }

    Ok(None)
}

/// Decode the body of an iCCP chunk
fn parse_iccp(chunk: &[u8], limit: usize) -> Result<Vec<u8>> {
    let name_end = chunk.iter().position(|&b| b == 0).ok_or_else(|| {
        Error::MalformedChunk("iCCP profile name is not NUL terminated".to_string())
    })?;

    let method = read::u8_at(chunk, name_end + 1).ok_or_else(|| {
        Error::MalformedChunk("iCCP chunk ends before the compression method".to_string())
    })?;

    if method != COMPRESSION_ZLIB {
        return Err(Error::UnsupportedCompression(method));
    }

    let name = String::from_utf8_lossy(&chunk[..name_end]);
    tracing::trace!(%name, "iCCP profile name");

    inflate(&chunk[name_end + 2..], limit)
}

/// Inflate a zlib stream, failing once the output would exceed `limit` bytes
///
/// A stream that ends before its final block is an error, not a short result.
fn inflate(compressed: &[u8], limit: usize) -> Result<Vec<u8>> {
    let mut inflater = Decompress::new(true);
    let mut profile = Vec::with_capacity(INITIAL_INFLATE_CAPACITY.min(limit.saturating_add(1)));

    loop {
        if profile.len() == profile.capacity() {
            if profile.len() > limit {
                return Err(Error::DecompressionLimit { limit });
            }
            // Grow geometrically, allowing one byte past the cap to detect overflow
            let room = limit.saturating_add(1) - profile.len();
            profile.reserve_exact(profile.len().max(INITIAL_INFLATE_CAPACITY).min(room));
        }

        let before = (inflater.total_in(), inflater.total_out());
        let input = &compressed[inflater.total_in() as usize..];

        let status = inflater
            .decompress_vec(input, &mut profile, FlushDecompress::None)
            .map_err(|e| Error::DecompressionFailed(e.to_string()))?;

        if profile.len() > limit {
            return Err(Error::DecompressionLimit { limit });
        }

        if status == Status::StreamEnd {
            return Ok(profile);
        }

        let progressed = (inflater.total_in(), inflater.total_out()) != before;
        if !progressed && profile.len() < profile.capacity() {
            return Err(Error::DecompressionFailed(
                "zlib stream ends before its final block".to_string(),
            ));
        }
    }
}
