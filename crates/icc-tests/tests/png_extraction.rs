//! PNG iCCP extraction

use std::io::Write;

use flate2::Compression;
use flate2::write::ZlibEncoder;
use icc_extract::{Error, ExtractOptions, extract_png_profile, extract_profile};
use icc_tests::fixtures::{self, png_chunk};
use icc_tests::{ProfileBuilder, mluc_tag, png_with_profile};

fn sample_profile() -> Vec<u8> {
    ProfileBuilder::display()
        .tag(b"desc", mluc_tag(&[("en", "US", "PNG test profile")]))
        .tag(b"cprt", mluc_tag(&[("en", "US", "Public domain")]))
        .build()
}

#[test]
fn iccp_round_trips() {
    let profile = sample_profile();
    let png = png_with_profile(Some(&profile));

    let extracted = extract_png_profile(&png, &ExtractOptions::default()).unwrap();
    assert_eq!(extracted.as_deref(), Some(&profile[..]));
}

#[test]
fn recompressed_payload_inflates_to_same_bytes() {
    let profile = sample_profile();
    let png = png_with_profile(Some(&profile));
    let extracted = extract_profile(&png, &ExtractOptions::default())
        .unwrap()
        .unwrap();

    // Re-deflate at a different level and extract again
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::fast());
    encoder.write_all(&extracted).unwrap();
    let mut body = b"again\0\0".to_vec();
    body.extend_from_slice(&encoder.finish().unwrap());
    let png = fixtures::png_with_chunks(&[png_chunk(b"iCCP", &body)]);

    let again = extract_png_profile(&png, &ExtractOptions::default()).unwrap();
    assert_eq!(again, Some(extracted));
}

#[test]
fn no_iccp_is_none() {
    let png = png_with_profile(None);
    assert_eq!(extract_png_profile(&png, &ExtractOptions::default()), Ok(None));
}

#[test]
fn other_ancillary_chunks_are_skipped() {
    let profile = sample_profile();
    let png = fixtures::png_with_chunks(&[
        png_chunk(b"gAMA", &45455u32.to_be_bytes()),
        png_chunk(b"tEXt", b"Software\0icc-tests"),
        fixtures::iccp_chunk("embedded", &profile),
    ]);

    let extracted = extract_png_profile(&png, &ExtractOptions::default()).unwrap();
    assert_eq!(extracted, Some(profile));
}

#[test]
fn unsupported_method() {
    let mut body = b"name\0".to_vec();
    body.push(8);
    body.extend_from_slice(&[1, 2, 3]);
    let png = fixtures::png_with_chunks(&[png_chunk(b"iCCP", &body)]);

    assert_eq!(
        extract_png_profile(&png, &ExtractOptions::default()),
        Err(Error::UnsupportedCompression(8))
    );
}

#[test]
fn corrupt_stream_reports_decompressor_message() {
    let mut body = b"name\0\0".to_vec();
    body.extend_from_slice(&[0x78, 0x9C, 0xFF, 0xFF, 0xFF]);
    let png = fixtures::png_with_chunks(&[png_chunk(b"iCCP", &body)]);

    match extract_png_profile(&png, &ExtractOptions::default()) {
        Err(Error::DecompressionFailed(message)) => {
            eprintln!("decompressor said: {}", message);
            assert!(!message.is_empty());
        }
        other => panic!("expected DecompressionFailed, got {:?}", other),
    }
}

#[test]
fn decompression_bomb_is_capped() {
    let bomb = vec![0u8; 4 * 1024 * 1024];
    let png = png_with_profile(Some(&bomb));

    let options = ExtractOptions::default().with_max_profile_bytes(64 * 1024);
    assert_eq!(
        extract_png_profile(&png, &options),
        Err(Error::DecompressionLimit { limit: 64 * 1024 })
    );

    // The default cap is far above this
    let extracted = extract_png_profile(&png, &ExtractOptions::default()).unwrap();
    assert_eq!(extracted.map(|p| p.len()), Some(bomb.len()));
}

#[test]
fn truncated_file_is_malformed() {
    let png = png_with_profile(Some(&sample_profile()));
    // Signature + IHDR is 8 + 25 bytes; cut inside the iCCP chunk
    let cut = 8 + 25 + 20;
    assert!(matches!(
        extract_png_profile(&png[..cut], &ExtractOptions::default()),
        Err(Error::MalformedContainer(_))
    ));
}
