//! Corpus Validation
//!
//! Decodes every real-world profile in the local corpus and checks that it
//! survives embedding in both containers. Skips when the corpus is empty.

use anyhow::{Context, Result, bail};
use icc_extract::{ExtractOptions, ExtractedProfile, Fallback, decode_profile, extract_and_decode};
use icc_tests::{corpus, init_logging, jpeg_with_profile, png_with_profile};

#[test]
fn decode_corpus_profiles() -> Result<()> {
    init_logging();

    let dir = corpus::corpus_dir();
    let profiles = corpus::load_corpus(&dir)?;
    if profiles.is_empty() {
        eprintln!("SKIP: no profiles in {}", dir.display());
        return Ok(());
    }

    let mut failures = Vec::new();
    for profile in &profiles {
        match decode_profile(&profile.data) {
            Ok(attributes) => eprintln!(
                "{:40} v{:5} {:10} {:6} {}",
                profile.name,
                attributes.version.unwrap_or("?"),
                attributes.device_class.as_deref().unwrap_or("?"),
                attributes.color_space.as_deref().unwrap_or("?"),
                attributes.description.as_deref().unwrap_or("")
            ),
            Err(e) => {
                eprintln!("{:40} FAILED: {}", profile.name, e);
                failures.push(profile.name.clone());
            }
        }
    }

    eprintln!("\n{} decoded, {} failed", profiles.len() - failures.len(), failures.len());

    // Test corpora deliberately include broken profiles; require most to decode
    if failures.len() * 2 > profiles.len() {
        bail!("too many corpus profiles failed to decode: {:?}", failures);
    }
    Ok(())
}

#[test]
fn corpus_profiles_survive_containers() -> Result<()> {
    let profiles = corpus::load_corpus(corpus::corpus_dir())?;
    let options = ExtractOptions::default();

    for profile in profiles {
        let Ok(expected) = ExtractedProfile::from_bytes(profile.data.clone()) else {
            continue;
        };

        for (kind, container) in [
            ("jpeg", jpeg_with_profile(&profile.data, 65519)),
            ("png", png_with_profile(Some(&profile.data))),
        ] {
            let extracted = extract_and_decode(&container, &options)
                .with_context(|| format!("{} in {}", profile.name, kind))?
                .with_context(|| format!("{} missing from {}", profile.name, kind))?;
            assert_eq!(extracted, expected, "{} via {}", profile.name, kind);
        }

        if let Some(space) = expected.attributes().color_space.as_deref() {
            if let Some(fallback) = Fallback::for_color_space(space) {
                eprintln!("{}: fallback {}", profile.name, fallback);
            }
        }
    }
    Ok(())
}
