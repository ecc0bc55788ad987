//! Seeded random inputs
//!
//! All generators take an explicit seed so failures are reproducible.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Deterministic generator for a test case
pub fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Random bytes of the given length
pub fn random_bytes(rng: &mut ChaCha8Rng, len: usize) -> Vec<u8> {
    let mut data = vec![0u8; len];
    rng.fill_bytes(&mut data);
    data
}

/// Overwrite `count` random positions with random bytes
pub fn mutate(data: &mut [u8], rng: &mut ChaCha8Rng, count: usize) {
    if data.is_empty() {
        return;
    }
    for _ in 0..count {
        let i = rng.gen_range(0..data.len());
        data[i] = rng.r#gen();
    }
}

/// Random ASCII text of printable characters
pub fn random_ascii(rng: &mut ChaCha8Rng, len: usize) -> String {
    (0..len).map(|_| rng.gen_range(b' '..=b'~') as char).collect()
}

/// Four-byte code that is not `acsp`
pub fn non_acsp_signature(rng: &mut ChaCha8Rng) -> [u8; 4] {
    loop {
        let candidate: [u8; 4] = rng.r#gen();
        if &candidate != b"acsp" {
            return candidate;
        }
    }
}
