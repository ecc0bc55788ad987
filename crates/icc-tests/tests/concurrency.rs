//! Parallel extraction and decoding
//!
//! Decoding keeps no state between calls, so results under rayon must match
//! the sequential ones exactly.

use icc_extract::{ExtractOptions, ExtractedProfile, extract_and_decode};
use icc_tests::patterns::{self, random_ascii};
use icc_tests::{ProfileBuilder, desc_tag, jpeg_with_profile, png_with_profile};
use rayon::prelude::*;

fn inputs() -> Vec<Vec<u8>> {
    (0..200u64)
        .map(|seed| {
            let mut rng = patterns::rng(seed);
            let profile = ProfileBuilder::display()
                .intent((seed % 4) as u32)
                .tag(b"desc", desc_tag(&random_ascii(&mut rng, 32)))
                .build();
            if seed % 2 == 0 {
                jpeg_with_profile(&profile, 50 + seed as usize)
            } else {
                png_with_profile(Some(&profile))
            }
        })
        .collect()
}

#[test]
fn parallel_matches_sequential() {
    let inputs = inputs();
    let options = ExtractOptions::default();

    let sequential: Vec<Option<ExtractedProfile>> = inputs
        .iter()
        .map(|data| extract_and_decode(data, &options).unwrap())
        .collect();
    let parallel: Vec<Option<ExtractedProfile>> = inputs
        .par_iter()
        .map(|data| extract_and_decode(data, &options).unwrap())
        .collect();

    assert_eq!(sequential, parallel);
    assert!(sequential.iter().all(Option::is_some));
}

#[test]
fn shared_buffer_decoded_concurrently() {
    let profile = ProfileBuilder::display()
        .tag(b"desc", desc_tag("Shared"))
        .build();
    let png = png_with_profile(Some(&profile));

    let descriptions: Vec<String> = (0..64)
        .into_par_iter()
        .map(|_| {
            extract_and_decode(&png, &ExtractOptions::default())
                .ok()
                .flatten()
                .and_then(|p| p.description().map(str::to_string))
                .unwrap_or_default()
        })
        .collect();

    assert!(descriptions.iter().all(|d| d == "Shared"));
}

#[test]
fn public_types_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ExtractedProfile>();
    assert_send_sync::<ExtractOptions>();
    assert_send_sync::<icc_extract::Error>();
    assert_send_sync::<icc_extract::ProfileAttributes>();
}
