//! Password checking primitives for the Pwned Passwords range API.
//!
//! This library holds everything about a password check that does not touch the
//! network: hashing a password into the k-anonymity prefix/suffix pair, scanning
//! a range response body for a suffix, and looking a password up in a local
//! list of common passwords.
//!
//! The range API only ever sees the first 5 hex characters of the SHA-1 digest.
//! It answers with every known suffix sharing that prefix, one `SUFFIX:COUNT`
//! line each, and the suffix match happens locally.

pub mod common;
pub mod range;

use std::fmt;

use sha1::{Digest, Sha1};

pub use common::{COMMON_PASSWORDS_FILE, CommonPasswords, is_common};
pub use range::{RangeScan, find_count, is_range_prefix, scan_range};

/// The length of a SHA1 hash prefix sent to the range API (5 hex characters).
pub const PREFIX_LEN: usize = 5;

/// The length of the hash suffix matched against range response lines.
pub const SUFFIX_LEN: usize = DIGEST_HEX_LEN - PREFIX_LEN;

/// The length of a full SHA1 digest in hex characters.
pub const DIGEST_HEX_LEN: usize = 40;

/// Hex lookup table for digest encoding.
pub const HEX_CHARS: &[u8; 16] = b"0123456789ABCDEF";

/// The uppercase hex SHA1 digest of a password.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PasswordDigest {
    hex: [u8; DIGEST_HEX_LEN],
}

impl PasswordDigest {
    /// Hashes the UTF-8 bytes of `password`. The empty string is not special:
    /// it produces the digest of the empty byte sequence.
    pub fn new(password: &str) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(password.as_bytes());
        let hash: [u8; 20] = hasher.finalize().into();

        Self::from_bytes(&hash)
    }

    /// Encodes a raw 20-byte SHA1 hash.
    pub fn from_bytes(hash: &[u8; 20]) -> Self {
        let mut hex = [0u8; DIGEST_HEX_LEN];
        for (i, byte) in hash.iter().enumerate() {
            hex[i * 2] = HEX_CHARS[(byte >> 4) as usize];
            hex[i * 2 + 1] = HEX_CHARS[(byte & 0x0f) as usize];
        }

        Self { hex }
    }

    /// The full 40 character digest.
    #[inline]
    pub fn as_str(&self) -> &str {
        // SAFETY: hex only ever holds bytes taken from HEX_CHARS, which is ASCII.
        unsafe { std::str::from_utf8_unchecked(&self.hex) }
    }

    /// The first 5 characters, sent to the range API.
    #[inline]
    pub fn prefix(&self) -> &str {
        &self.as_str()[..PREFIX_LEN]
    }

    /// The remaining 35 characters, matched against range response lines.
    #[inline]
    pub fn suffix(&self) -> &str {
        &self.as_str()[PREFIX_LEN..]
    }
}

impl fmt::Display for PasswordDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Digests are derived from secrets, so keep them out of stray debug output.
impl fmt::Debug for PasswordDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordDigest").field("prefix", &self.prefix()).finish_non_exhaustive()
    }
}

/// Hashes `password` and returns its `(prefix, suffix)` split.
pub fn digest(password: &str) -> (String, String) {
    let digest = PasswordDigest::new(password);
    (digest.prefix().to_owned(), digest.suffix().to_owned())
}
