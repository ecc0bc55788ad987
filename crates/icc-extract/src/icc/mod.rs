//! ICC Profile Decoding
//!
//! This module reads the descriptive parts of an ICC profile (ICC.1:2022):
//! header fields and the profile's text tags.
//!
//! # Structure
//!
//! An ICC profile consists of:
//! 1. A 128-byte header
//! 2. A tag table listing all tags
//! 3. Tag data (may overlap)
//!
//! # Example
//!
//! ```ignore
//! use icc_extract::icc::decode_profile;
//!
//! let attributes = decode_profile(&bytes)?;
//! println!("Profile: {:?}", attributes.description);
//! ```

pub mod header;

mod attributes;
mod error;
mod parser;
mod tags;
mod types;

pub use attributes::{ProfileAttributes, RenderingIntent};
pub use error::ProfileFault;
pub use header::{code_name, version_name};
pub use parser::decode_profile;
pub use types::{TagSignature, TypeSignature};
