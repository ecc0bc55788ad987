//! Handing profiles to a document writer
//!
//! The document side owns object numbering and stream storage. It only
//! sees the raw profile bytes, their exact length and the alternate color
//! space to use when no profile is available.

use crate::icc::ProfileAttributes;
use crate::profile::ExtractedProfile;

/// Device color space used when an image carries no ICC profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fallback {
    DeviceGray,
    DeviceRgb,
    DeviceCmyk,
}

impl Fallback {
    /// Pick the device space with `components` channels
    pub fn for_components(components: usize) -> Option<Self> {
        match components {
            1 => Some(Self::DeviceGray),
            3 => Some(Self::DeviceRgb),
            4 => Some(Self::DeviceCmyk),
            _ => None,
        }
    }

    /// Pick the device space matching a profile's data color space
    ///
    /// Accepts the trimmed header codes (`GRAY`, `RGB`, `CMYK`), ignoring case.
    pub fn for_color_space(color_space: &str) -> Option<Self> {
        [
            ("GRAY", Self::DeviceGray),
            ("RGB", Self::DeviceRgb),
            ("CMYK", Self::DeviceCmyk),
        ]
        .into_iter()
        .find(|(code, _)| code.eq_ignore_ascii_case(color_space))
        .map(|(_, fallback)| fallback)
    }

    /// Number of color channels
    pub fn components(&self) -> usize {
        match self {
            Self::DeviceGray => 1,
            Self::DeviceRgb => 3,
            Self::DeviceCmyk => 4,
        }
    }

    /// Conventional document name of the space
    pub fn name(&self) -> &'static str {
        match self {
            Self::DeviceGray => "DeviceGray",
            Self::DeviceRgb => "DeviceRGB",
            Self::DeviceCmyk => "DeviceCMYK",
        }
    }
}

impl std::fmt::Display for Fallback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Document-side collaborator that turns profiles into color-space handles
pub trait ColorSpaceSink {
    /// Reference to a color space inside the document
    type Handle;

    /// Store `data` as an ICC-based color space
    ///
    /// `length` is the exact byte length of `data`.
    fn embed_icc(
        &mut self,
        data: &[u8],
        length: usize,
        attributes: Option<&ProfileAttributes>,
    ) -> Self::Handle;

    /// Produce a handle for a device color space
    fn fallback(&mut self, alternate: &Fallback) -> Self::Handle;
}

/// Embed `profile` if there is one, otherwise use `fallback`
pub fn embed_or_fallback<S: ColorSpaceSink + ?Sized>(
    sink: &mut S,
    profile: Option<&ExtractedProfile>,
    fallback: Fallback,
) -> S::Handle {
    match profile {
        Some(profile) => {
            tracing::debug!(
                len = profile.len(),
                description = ?profile.description(),
                "Embedding ICC profile"
            );
            sink.embed_icc(profile.data(), profile.len(), Some(profile.attributes()))
        }
        None => {
            tracing::debug!(%fallback, "No ICC profile, using device color space");
            sink.fallback(&fallback)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Recorded {
        Icc { length: usize, description: Option<String> },
        Device(Fallback),
    }

    /// Numbers objects sequentially, like a document writer would
    #[derive(Default)]
    struct RecordingSink {
        objects: Vec<Recorded>,
    }

    impl ColorSpaceSink for RecordingSink {
        type Handle = usize;

        fn embed_icc(
            &mut self,
            data: &[u8],
            length: usize,
            attributes: Option<&ProfileAttributes>,
        ) -> usize {
            assert_eq!(data.len(), length);
            self.objects.push(Recorded::Icc {
                length,
                description: attributes.and_then(|a| a.description.clone()),
            });
            self.objects.len()
        }

        fn fallback(&mut self, alternate: &Fallback) -> usize {
            self.objects.push(Recorded::Device(*alternate));
            self.objects.len()
        }
    }

    fn profile() -> ExtractedProfile {
        let mut tag = b"desc\0\0\0\0".to_vec();
        tag.extend_from_slice(&5u32.to_be_bytes());
        tag.extend_from_slice(b"sRGB\0");

        let mut data = vec![0u8; 144];
        data[0..4].copy_from_slice(&((144 + tag.len()) as u32).to_be_bytes());
        data[36..40].copy_from_slice(b"acsp");
        data[128..132].copy_from_slice(&1u32.to_be_bytes());
        data[132..136].copy_from_slice(b"desc");
        data[136..140].copy_from_slice(&144u32.to_be_bytes());
        data[140..144].copy_from_slice(&(tag.len() as u32).to_be_bytes());
        data.extend_from_slice(&tag);

        ExtractedProfile::from_bytes(data).unwrap()
    }

    #[test]
    fn test_embeds_profile() {
        let mut sink = RecordingSink::default();
        let profile = profile();

        let handle = embed_or_fallback(&mut sink, Some(&profile), Fallback::DeviceRgb);
        assert_eq!(handle, 1);
        assert_eq!(
            sink.objects,
            vec![Recorded::Icc {
                length: profile.len(),
                description: Some("sRGB".to_string()),
            }]
        );
    }

    #[test]
    fn test_uses_fallback() {
        let mut sink = RecordingSink::default();

        assert_eq!(embed_or_fallback(&mut sink, None, Fallback::DeviceCmyk), 1);
        assert_eq!(embed_or_fallback(&mut sink, None, Fallback::DeviceGray), 2);
        assert_eq!(
            sink.objects,
            vec![
                Recorded::Device(Fallback::DeviceCmyk),
                Recorded::Device(Fallback::DeviceGray)
            ]
        );
    }

    #[test]
    fn test_fallback_lookup() {
        assert_eq!(Fallback::for_components(1), Some(Fallback::DeviceGray));
        assert_eq!(Fallback::for_components(3), Some(Fallback::DeviceRgb));
        assert_eq!(Fallback::for_components(4), Some(Fallback::DeviceCmyk));
        assert_eq!(Fallback::for_components(2), None);

        assert_eq!(Fallback::for_color_space("RGB"), Some(Fallback::DeviceRgb));
        assert_eq!(Fallback::for_color_space("cmyk"), Some(Fallback::DeviceCmyk));
        assert_eq!(Fallback::for_color_space("Lab"), None);

        for fallback in [Fallback::DeviceGray, Fallback::DeviceRgb, Fallback::DeviceCmyk] {
            assert_eq!(Fallback::for_components(fallback.components()), Some(fallback));
        }
        assert_eq!(Fallback::DeviceRgb.to_string(), "DeviceRGB");
    }
}
