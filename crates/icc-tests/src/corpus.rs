//! Test corpus management
//!
//! Real ICC profiles are not checked in. Drop `.icc`/`.icm` files into
//! `testdata/profiles` (or point `ICC_CORPUS_DIR` elsewhere) and the corpus
//! tests pick them up; with no files present they skip.

use std::path::{Path, PathBuf};

/// A profile file from the corpus
#[derive(Debug, Clone)]
pub struct CorpusProfile {
    /// File stem
    pub name: String,
    /// Path to the profile file
    pub path: PathBuf,
    /// Raw file contents
    pub data: Vec<u8>,
}

/// Directory the corpus is read from
pub fn corpus_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os("ICC_CORPUS_DIR") {
        return PathBuf::from(dir);
    }
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../testdata/profiles")
}

/// Load every profile below `dir`, recursing into subdirectories
///
/// A missing directory yields an empty corpus.
pub fn load_corpus(dir: impl AsRef<Path>) -> std::io::Result<Vec<CorpusProfile>> {
    let mut profiles = Vec::new();
    let dir = dir.as_ref();
    if dir.exists() {
        load_dir(dir, &mut profiles)?;
    }
    profiles.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(profiles)
}

fn load_dir(dir: &Path, profiles: &mut Vec<CorpusProfile>) -> std::io::Result<()> {
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            load_dir(&path, profiles)?;
        } else if path
            .extension()
            .is_some_and(|e| e.eq_ignore_ascii_case("icc") || e.eq_ignore_ascii_case("icm"))
        {
            let name = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            let data = std::fs::read(&path)?;
            profiles.push(CorpusProfile { name, path, data });
        }
    }
    Ok(())
}
