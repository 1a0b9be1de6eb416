use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use passcheck_verifier::HEX_CHARS;

const ALL_CHARS: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Generates a specified number of random passwords with uniform distribution.
/// Uses a fixed seed for reproducible benchmark results.
pub fn generate_random_passwords(count: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..count)
        .map(|_| {
            let length = rng.gen_range(8..=64);
            (0..length)
                .map(|_| ALL_CHARS[rng.gen_range(0..ALL_CHARS.len())] as char)
                .collect()
        })
        .collect()
}

/// Builds a range body shaped like a real API response: `lines` random
/// 35 character suffixes with random counts, CRLF separated.
pub fn generate_range_body(lines: usize) -> (String, Vec<String>) {
    let mut rng = StdRng::seed_from_u64(7);
    let mut suffixes = Vec::with_capacity(lines);
    let mut body = String::with_capacity(lines * 44);

    for _ in 0..lines {
        let suffix: String = (0..35)
            .map(|_| HEX_CHARS[rng.gen_range(0..HEX_CHARS.len())] as char)
            .collect();
        body.push_str(&suffix);
        body.push(':');
        body.push_str(&rng.gen_range(0..5_000_000u64).to_string());
        body.push_str("\r\n");
        suffixes.push(suffix);
    }

    (body, suffixes)
}
