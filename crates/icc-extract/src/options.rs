//! Extraction options

/// Default cap on the size of an inflated `iCCP` profile (16 MiB)
pub const DEFAULT_MAX_PROFILE_BYTES: usize = 16 * 1024 * 1024;

/// How ICC fragments spread over several JPEG APP2 segments are put back together
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JpegReassembly {
    /// Order fragments by the sequence number in each `ICC_PROFILE` header.
    /// Fragments sharing a sequence number keep their file order.
    #[default]
    SequenceNumber,
    /// Concatenate fragments in the order they appear in the file
    FileOrder,
}

/// Options for profile extraction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Largest profile the PNG extractor will inflate
    pub max_profile_bytes: usize,
    /// Fragment ordering for multi-segment JPEG profiles
    pub jpeg_reassembly: JpegReassembly,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            max_profile_bytes: DEFAULT_MAX_PROFILE_BYTES,
            jpeg_reassembly: JpegReassembly::default(),
        }
    }
}

impl ExtractOptions {
    pub fn with_max_profile_bytes(mut self, limit: usize) -> Self {
        self.max_profile_bytes = limit;
        self
    }

    pub fn with_jpeg_reassembly(mut self, reassembly: JpegReassembly) -> Self {
        self.jpeg_reassembly = reassembly;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = ExtractOptions::default();
        assert_eq!(opts.max_profile_bytes, DEFAULT_MAX_PROFILE_BYTES);
        assert_eq!(opts.jpeg_reassembly, JpegReassembly::SequenceNumber);
    }

    #[test]
    fn test_builders() {
        let opts = ExtractOptions::default()
            .with_max_profile_bytes(1024)
            .with_jpeg_reassembly(JpegReassembly::FileOrder);
        assert_eq!(opts.max_profile_bytes, 1024);
        assert_eq!(opts.jpeg_reassembly, JpegReassembly::FileOrder);
    }
}
