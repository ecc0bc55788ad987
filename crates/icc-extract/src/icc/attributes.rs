//! Decoded profile attributes

use std::fmt;

use serde::Serialize;

/// ICC Rendering Intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RenderingIntent {
    /// Perceptual - best for photographs
    Perceptual,
    /// Relative colorimetric - preserves in-gamut colors
    #[serde(rename = "Relative")]
    RelativeColorimetric,
    /// Saturation - maintains saturation
    Saturation,
    /// Absolute colorimetric - preserves white point
    #[serde(rename = "Absolute")]
    AbsoluteColorimetric,
}

/// Header intent values 0..=3, indexed by value
const INTENTS: [RenderingIntent; 4] = [
    RenderingIntent::Perceptual,
    RenderingIntent::RelativeColorimetric,
    RenderingIntent::Saturation,
    RenderingIntent::AbsoluteColorimetric,
];

impl RenderingIntent {
    /// Map the header value, `None` for anything outside 0..=3
    pub fn from_u32(val: u32) -> Option<Self> {
        INTENTS.get(usize::try_from(val).ok()?).copied()
    }

    pub fn to_u32(&self) -> u32 {
        match self {
            Self::Perceptual => 0,
            Self::RelativeColorimetric => 1,
            Self::Saturation => 2,
            Self::AbsoluteColorimetric => 3,
        }
    }

    /// Short name: Perceptual, Relative, Saturation or Absolute
    pub fn name(&self) -> &'static str {
        match self {
            Self::Perceptual => "Perceptual",
            Self::RelativeColorimetric => "Relative",
            Self::Saturation => "Saturation",
            Self::AbsoluteColorimetric => "Absolute",
        }
    }
}

impl fmt::Display for RenderingIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Attributes read from an ICC profile
///
/// Every field is optional. Four-byte code fields are absent when the
/// header bytes are all zero; text fields are absent when the profile has
/// no such tag or stores it in an unsupported type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileAttributes {
    /// Profile version, e.g. "2.1" or "4.3"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent: Option<RenderingIntent>,
    /// Preferred CMM
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cmm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_class: Option<String>,
    /// Data color space
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_space: Option<String>,
    /// Profile connection space
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_space: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_model_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viewing_conditions_description: Option<String>,
}

/// Header fields holding a four-byte code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CodeField {
    Cmm,
    DeviceClass,
    ColorSpace,
    ConnectionSpace,
    Platform,
    Manufacturer,
    Model,
    Creator,
}

/// Attributes filled from text tags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TextField {
    Description,
    Copyright,
    DeviceModelDescription,
    ViewingConditionsDescription,
}

impl ProfileAttributes {
    /// Decode a raw ICC profile
    pub fn decode(data: &[u8]) -> crate::Result<Self> {
        super::parser::decode_profile(data)
    }

    /// True when nothing was decoded
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub(crate) fn code_mut(&mut self, field: CodeField) -> &mut Option<String> {
        match field {
            CodeField::Cmm => &mut self.cmm,
            CodeField::DeviceClass => &mut self.device_class,
            CodeField::ColorSpace => &mut self.color_space,
            CodeField::ConnectionSpace => &mut self.connection_space,
            CodeField::Platform => &mut self.platform,
            CodeField::Manufacturer => &mut self.manufacturer,
            CodeField::Model => &mut self.model,
            CodeField::Creator => &mut self.creator,
        }
    }

    pub(crate) fn text_mut(&mut self, field: TextField) -> &mut Option<String> {
        match field {
            TextField::Description => &mut self.description,
            TextField::Copyright => &mut self.copyright,
            TextField::DeviceModelDescription => &mut self.device_model_description,
            TextField::ViewingConditionsDescription => &mut self.viewing_conditions_description,
        }
    }
}
