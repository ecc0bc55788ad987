//! # icc-extract - Embedded ICC profile extraction
//!
//! Finds the ICC color profile embedded in a JPEG or PNG file, decodes its
//! descriptive attributes, and hands the raw bytes to a document writer.
//!
//! ## Components
//!
//! - [`container::jpeg`]: reassembles `ICC_PROFILE` APP2 segments
//! - [`container::png`]: inflates the `iCCP` chunk
//! - [`icc`]: decodes the profile header and its text tags
//! - [`embed`]: the seam to a document's color-space objects
//!
//! Only container framing is parsed; pixel data is never decoded. Every
//! offset read from the input is bounds-checked, and malformed input fails
//! with a typed [`Error`] instead of a partial result.
//!
//! ## Quick Start
//!
//! ```no_run
//! use icc_extract::{ExtractOptions, extract_and_decode};
//!
//! let bytes = std::fs::read("photo.jpg").unwrap();
//! if let Some(profile) = extract_and_decode(&bytes, &ExtractOptions::default()).unwrap() {
//!     println!("{} bytes, {:?}", profile.len(), profile.description());
//! }
//! ```

pub mod container;
pub mod embed;
pub mod error;
pub mod icc;
pub mod options;
pub mod profile;
pub mod read;

pub use container::{
    ContainerKind, extract_and_decode, extract_jpeg_profile, extract_png_profile, extract_profile,
};
pub use embed::{ColorSpaceSink, Fallback, embed_or_fallback};
pub use error::{Error, Result};
pub use icc::{ProfileAttributes, ProfileFault, RenderingIntent, decode_profile};
pub use options::{DEFAULT_MAX_PROFILE_BYTES, ExtractOptions, JpegReassembly};
pub use profile::ExtractedProfile;

/// Version of icc-extract
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
