//! # icc-tests
//!
//! Integration testing support for icc-extract.
//!
//! This crate provides:
//! - Builders for synthetic ICC profiles with chosen header fields and tags
//! - JPEG and PNG containers wrapping those profiles
//! - Seeded random buffers and mutations for robustness tests
//! - Loading of real profiles from the local test corpus
//!
//! ## Test Categories
//!
//! 1. **Containers**: JPEG APP2 reassembly, PNG iCCP inflation
//! 2. **Decoding**: header fields, text tags, structural failures
//! 3. **Properties**: seeded random inputs never panic, faults are specific
//! 4. **Corpus**: real-world profiles from `testdata/profiles`

pub mod corpus;
pub mod fixtures;
pub mod patterns;

pub use corpus::{CorpusProfile, load_corpus};
pub use fixtures::{ProfileBuilder, desc_tag, jpeg_with_profile, mluc_tag, png_with_profile, text_tag};

/// Install a fmt subscriber once so `RUST_LOG=icc_extract=trace` shows decoder logs
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
