//! Synthetic profiles and containers
//!
//! Everything here produces well-formed data; tests corrupt it afterwards.

use std::io::Write;

use flate2::Compression;
use flate2::write::ZlibEncoder;

/// Largest APP2 payload after the 14-byte ICC header
pub const MAX_JPEG_FRAGMENT: usize = 65533 - 14;

/// Builder for ICC profiles with a header and arbitrary tags
#[derive(Debug, Clone)]
pub struct ProfileBuilder {
    header: [u8; 128],
    tags: Vec<([u8; 4], Vec<u8>)>,
}

impl Default for ProfileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileBuilder {
    /// A v4.3 profile with the `acsp` signature and every other field zero
    pub fn new() -> Self {
        let mut header = [0u8; 128];
        header[8..12].copy_from_slice(&0x0430_0000u32.to_be_bytes());
        header[36..40].copy_from_slice(b"acsp");
        Self {
            header,
            tags: Vec::new(),
        }
    }

    /// Typical display profile header: mntr, RGB, XYZ, Apple platform
    pub fn display() -> Self {
        Self::new()
            .cmm(b"appl")
            .device_class(b"mntr")
            .color_space(b"RGB ")
            .connection_space(b"XYZ ")
            .platform(b"APPL")
            .creator(b"appl")
    }

    pub fn version(mut self, raw: u32) -> Self {
        self.header[8..12].copy_from_slice(&raw.to_be_bytes());
        self
    }

    pub fn intent(mut self, raw: u32) -> Self {
        self.header[64..68].copy_from_slice(&raw.to_be_bytes());
        self
    }

    /// Write a four-byte code at a header offset
    pub fn code(mut self, offset: usize, code: &[u8; 4]) -> Self {
        self.header[offset..offset + 4].copy_from_slice(code);
        self
    }

    pub fn cmm(self, code: &[u8; 4]) -> Self {
        self.code(4, code)
    }

    pub fn device_class(self, code: &[u8; 4]) -> Self {
        self.code(12, code)
    }

    pub fn color_space(self, code: &[u8; 4]) -> Self {
        self.code(16, code)
    }

    pub fn connection_space(self, code: &[u8; 4]) -> Self {
        self.code(20, code)
    }

    pub fn platform(self, code: &[u8; 4]) -> Self {
        self.code(40, code)
    }

    pub fn manufacturer(self, code: &[u8; 4]) -> Self {
        self.code(48, code)
    }

    pub fn model(self, code: &[u8; 4]) -> Self {
        self.code(52, code)
    }

    pub fn creator(self, code: &[u8; 4]) -> Self {
        self.code(80, code)
    }

    /// Append a tag; data is laid out in insertion order
    pub fn tag(mut self, signature: &[u8; 4], data: Vec<u8>) -> Self {
        self.tags.push((*signature, data));
        self
    }

    /// Offset of the tag table entry for tag `index`
    pub fn entry_offset(index: usize) -> usize {
        132 + index * 12
    }

    /// Serialize with a correct size field and 4-byte aligned tag data
    pub fn build(&self) -> Vec<u8> {
        let table_end = Self::entry_offset(self.tags.len());
        let mut table = Vec::with_capacity(self.tags.len() * 12);
        let mut body = Vec::new();

        for (signature, data) in &self.tags {
            let offset = table_end + body.len();
            table.extend_from_slice(signature);
            table.extend_from_slice(&(offset as u32).to_be_bytes());
            table.extend_from_slice(&(data.len() as u32).to_be_bytes());

            body.extend_from_slice(data);
            while body.len() % 4 != 0 {
                body.push(0);
            }
        }

        let mut profile = self.header.to_vec();
        profile.extend_from_slice(&(self.tags.len() as u32).to_be_bytes());
        profile.extend_from_slice(&table);
        profile.extend_from_slice(&body);

        let size = profile.len() as u32;
        profile[0..4].copy_from_slice(&size.to_be_bytes());
        profile
    }
}

/// ICC v2 textDescriptionType with an empty Unicode and ScriptCode part
pub fn desc_tag(text: &str) -> Vec<u8> {
    let mut tag = b"desc\0\0\0\0".to_vec();
    tag.extend_from_slice(&(text.len() as u32 + 1).to_be_bytes());
    tag.extend_from_slice(text.as_bytes());
    tag.push(0);
    // Unicode language code and count
    tag.extend_from_slice(&[0; 8]);
    // ScriptCode code, count and fixed 67-byte field
    tag.extend_from_slice(&[0; 3 + 67]);
    tag
}

/// ICC v2 textType, NUL terminated
pub fn text_tag(text: &str) -> Vec<u8> {
    let mut tag = b"text\0\0\0\0".to_vec();
    tag.extend_from_slice(text.as_bytes());
    tag.push(0);
    tag
}

/// ICC v4 multiLocalizedUnicodeType with one record per `(language, country, text)`
pub fn mluc_tag(records: &[(&str, &str, &str)]) -> Vec<u8> {
    let mut tag = b"mluc\0\0\0\0".to_vec();
    tag.extend_from_slice(&(records.len() as u32).to_be_bytes());
    tag.extend_from_slice(&12u32.to_be_bytes());

    let mut strings = Vec::new();
    let strings_start = 16 + records.len() * 12;

    for (language, country, text) in records {
        let encoded: Vec<u8> = text.encode_utf16().flat_map(u16::to_be_bytes).collect();

        tag.extend_from_slice(&language.as_bytes()[..2]);
        tag.extend_from_slice(&country.as_bytes()[..2]);
        tag.extend_from_slice(&(encoded.len() as u32).to_be_bytes());
        tag.extend_from_slice(&((strings_start + strings.len()) as u32).to_be_bytes());
        strings.extend_from_slice(&encoded);
    }

    tag.extend_from_slice(&strings);
    tag
}

fn jpeg_segment(out: &mut Vec<u8>, marker: u8, payload: &[u8]) {
    out.extend_from_slice(&[0xFF, marker]);
    out.extend_from_slice(&((payload.len() + 2) as u16).to_be_bytes());
    out.extend_from_slice(payload);
}

/// Split `profile` into APP2 segments of at most `fragment` bytes each
pub fn icc_segments(profile: &[u8], fragment: usize) -> Vec<Vec<u8>> {
    let fragment = fragment.clamp(1, MAX_JPEG_FRAGMENT);
    let chunks: Vec<&[u8]> = profile.chunks(fragment).collect();
    let count = chunks.len() as u8;

    chunks
        .iter()
        .enumerate()
        .map(|(i, chunk)| {
            let mut payload = b"ICC_PROFILE\0".to_vec();
            payload.push(i as u8 + 1);
            payload.push(count);
            payload.extend_from_slice(chunk);

            let mut segment = Vec::new();
            jpeg_segment(&mut segment, 0xE2, &payload);
            segment
        })
        .collect()
}

/// Baseline JPEG framing with the given APP2 segments before the frame header
pub fn jpeg_with_segments(segments: &[Vec<u8>]) -> Vec<u8> {
    let mut out = vec![0xFF, 0xD8];
    jpeg_segment(&mut out, 0xE0, b"JFIF\0\x01\x01\0\0\x01\0\x01\0\0");
    for segment in segments {
        out.extend_from_slice(segment);
    }

    // DQT with a flat table
    let mut dqt = vec![0u8];
    dqt.extend_from_slice(&[1; 64]);
    jpeg_segment(&mut out, 0xDB, &dqt);

    // SOF0: 8-bit, 1x1, one component
    jpeg_segment(&mut out, 0xC0, &[8, 0, 1, 0, 1, 1, 1, 0x11, 0]);

    // SOS followed by entropy-coded bytes, including a stuffed 0xFF00 and an
    // APP2-looking byte pair that must not be parsed as a marker
    jpeg_segment(&mut out, 0xDA, &[1, 1, 0, 0, 63, 0]);
    out.extend_from_slice(&[0xD2, 0x8A, 0xFF, 0x00, 0x28, 0xA0, 0xE2, 0x00]);
    out.extend_from_slice(&[0xFF, 0xD9]);
    out
}

/// JPEG carrying `profile` split into fragments of at most `fragment` bytes
pub fn jpeg_with_profile(profile: &[u8], fragment: usize) -> Vec<u8> {
    jpeg_with_segments(&icc_segments(profile, fragment))
}

fn zlib(data: &[u8]) -> Vec<u8> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(data).expect("writing to a Vec");
    encoder.finish().expect("writing to a Vec")
}

/// PNG chunk with a correct CRC over type and data
pub fn png_chunk(kind: &[u8; 4], data: &[u8]) -> Vec<u8> {
    let mut crc = flate2::Crc::new();
    crc.update(kind);
    crc.update(data);

    let mut out = (data.len() as u32).to_be_bytes().to_vec();
    out.extend_from_slice(kind);
    out.extend_from_slice(data);
    out.extend_from_slice(&crc.sum().to_be_bytes());
    out
}

/// iCCP chunk body: name, NUL, method, zlib stream
pub fn iccp_chunk(name: &str, profile: &[u8]) -> Vec<u8> {
    let mut body = name.as_bytes().to_vec();
    body.push(0);
    body.push(0);
    body.extend_from_slice(&zlib(profile));
    png_chunk(b"iCCP", &body)
}

/// 1x1 RGB PNG with the given chunks between IHDR and IDAT
pub fn png_with_chunks(chunks: &[Vec<u8>]) -> Vec<u8> {
    let mut out = vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    let mut ihdr = Vec::with_capacity(13);
    ihdr.extend_from_slice(&1u32.to_be_bytes());
    ihdr.extend_from_slice(&1u32.to_be_bytes());
    ihdr.extend_from_slice(&[8, 2, 0, 0, 0]);
    out.extend_from_slice(&png_chunk(b"IHDR", &ihdr));

    for chunk in chunks {
        out.extend_from_slice(chunk);
    }

    // Filter byte plus one RGB pixel
    out.extend_from_slice(&png_chunk(b"IDAT", &zlib(&[0, 0xFF, 0x80, 0x00])));
    out.extend_from_slice(&png_chunk(b"IEND", &[]));
    out
}

/// PNG carrying `profile` in an iCCP chunk, or no profile at all
pub fn png_with_profile(profile: Option<&[u8]>) -> Vec<u8> {
    match profile {
        Some(profile) => png_with_chunks(&[iccp_chunk("ICC Profile", profile)]),
        None => png_with_chunks(&[]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_size_field() {
        let profile = ProfileBuilder::display()
            .tag(b"desc", desc_tag("Display"))
            .tag(b"cprt", text_tag("No copyright"))
            .build();

        let size = u32::from_be_bytes(profile[0..4].try_into().unwrap());
        assert_eq!(size as usize, profile.len());
        assert_eq!(&profile[36..40], b"acsp");
        assert_eq!(u32::from_be_bytes(profile[128..132].try_into().unwrap()), 2);
    }

    #[test]
    fn test_icc_segments_split() {
        let profile = vec![7u8; 250];
        let segments = icc_segments(&profile, 100);
        assert_eq!(segments.len(), 3);
        // marker, length, signature, then sequence and count
        assert_eq!(segments[2][16], 3);
        assert_eq!(segments[2][17], 3);
        assert_eq!(segments[2].len(), 4 + 14 + 50);
    }
}
