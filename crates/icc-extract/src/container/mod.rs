//! Image containers carrying ICC profiles
//!
//! Only the container framing is parsed (JPEG marker segments, PNG chunks);
//! pixel data is never decoded.

pub mod jpeg;
pub mod png;

pub use jpeg::extract_jpeg_profile;
pub use png::extract_png_profile;

use crate::options::ExtractOptions;
use crate::profile::ExtractedProfile;
use crate::{Error, Result};

/// Image container formats with a known ICC location
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    /// ICC profile split over APP2 segments
    Jpeg,
    /// ICC profile in a zlib-compressed iCCP chunk
    Png,
}

impl ContainerKind {
    /// Identify the container from its leading signature bytes
    pub fn detect(data: &[u8]) -> Option<Self> {
        if data.starts_with(&[0xFF, 0xD8]) {
            Some(Self::Jpeg)
        } else if data.starts_with(&png::PNG_SIGNATURE) {
            Some(Self::Png)
        } else {
            None
        }
    }
}

/// Extract the raw ICC profile from a JPEG or PNG file
///
/// Returns `Ok(None)` when the file carries no profile and
/// [`Error::UnknownContainer`] when it is neither JPEG nor PNG.
pub fn extract_profile(data: &[u8], options: &ExtractOptions) -> Result<Option<Vec<u8>>> {
    let kind = ContainerKind::detect(data).ok_or(Error::UnknownContainer)?;
    let _guard = tracing::trace_span!("extract_profile", ?kind, len = data.len()).entered();

    match kind {
        ContainerKind::Jpeg => extract_jpeg_profile(data, options),
        ContainerKind::Png => extract_png_profile(data, options),
    }
}

/// Extract the ICC profile and decode its attributes
///
/// A profile that is present but does not decode fails the whole call with
/// [`Error::InvalidProfile`].
pub fn extract_and_decode(
    data: &[u8],
    options: &ExtractOptions,
) -> Result<Option<ExtractedProfile>> {
    extract_profile(data, options)?
        .map(ExtractedProfile::from_bytes)
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect() {
        assert_eq!(ContainerKind::detect(&[0xFF, 0xD8, 0xFF]), Some(ContainerKind::Jpeg));
        assert_eq!(
            ContainerKind::detect(&png::PNG_SIGNATURE),
            Some(ContainerKind::Png)
        );
        assert_eq!(ContainerKind::detect(b"GIF89a"), None);
        assert_eq!(ContainerKind::detect(&[0xFF]), None);
    }

    #[test]
    fn test_unknown_container() {
        assert_eq!(
            extract_profile(b"RIFF\0\0\0\0WEBP", &ExtractOptions::default()),
            Err(Error::UnknownContainer)
        );
    }

    #[test]
    fn test_dispatch() {
        let jpeg = [0xFF, 0xD8, 0xFF, 0xD9];
        assert_eq!(extract_profile(&jpeg, &ExtractOptions::default()), Ok(None));

        let mut png = png::PNG_SIGNATURE.to_vec();
        png.extend_from_slice(&[0, 0, 0, 0]);
        png.extend_from_slice(b"IEND");
        png.extend_from_slice(&[0xAE, 0x42, 0x60, 0x82]);
        assert_eq!(extract_profile(&png, &ExtractOptions::default()), Ok(None));
    }

    #[test]
    fn test_extract_and_decode() {
        let mut profile = vec![0u8; 132];
        profile[0..4].copy_from_slice(&132u32.to_be_bytes());
        profile[8] = 4;
        profile[12..16].copy_from_slice(b"MNTR");
        profile[36..40].copy_from_slice(b"acsp");

        let mut jpeg = vec![0xFF, 0xD8, 0xFF, 0xE2];
        jpeg.extend_from_slice(&((profile.len() + 16) as u16).to_be_bytes());
        jpeg.extend_from_slice(jpeg::ICC_PROFILE_SIGNATURE);
        jpeg.extend_from_slice(&[1, 1]);
        jpeg.extend_from_slice(&profile);
        jpeg.extend_from_slice(&[0xFF, 0xD9]);

        let extracted = extract_and_decode(&jpeg, &ExtractOptions::default())
            .unwrap()
            .unwrap();
        assert_eq!(extracted.data(), &profile[..]);
        assert_eq!(extracted.attributes().version, Some("4.0"));
        assert_eq!(extracted.attributes().device_class.as_deref(), Some("Monitor"));

        // Present but not a profile
        let mut broken = jpeg.clone();
        // SOI, APP2 marker, length, ICC header, then the 'acsp' offset
        broken[2 + 2 + 2 + 14 + 36] = b'x';
        assert!(matches!(
            extract_and_decode(&broken, &ExtractOptions::default()),
            Err(Error::InvalidProfile(_))
        ));
    }
}
