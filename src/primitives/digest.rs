//! 256-bit SHA-256 digest value
//!
//! This module defines the `Digest` type returned by every hashing entry
//! point. It is a plain 32-byte value: the final eight state words
//! serialized big-endian, `H[0]` first.
//!
//! Besides raw access it offers the two views callers ask for most:
//! lowercase hexadecimal rendering and a bitwise comparison against
//! another digest (how many of the 256 output bits differ).

use std::fmt::{self, Display, Formatter, LowerHex};

use super::word::Word;

/// Number of bits in a digest.
pub const DIGEST_BITS: u32 = 256;

/// A SHA-256 digest.
///
/// The value is stored as 32 bytes in **big-endian** word order, exactly
/// as FIPS 180-4 serializes the final hash state.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digest(pub(crate) [u8; 32]);

impl Digest {
    /// Wraps raw digest bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Digest(bytes)
    }

    /// Returns the raw 32 bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Splits the digest back into the eight big-endian state words.
    pub fn words(&self) -> [Word; 8] {
        let mut out = [0u32; 8];

        for (slot, chunk) in out.iter_mut().zip(self.0.chunks_exact(4)) {
            *slot = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }

        out
    }

    /// Lowercase hexadecimal rendering: 64 characters, no prefix or separators.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Counts the output bits that differ between `self` and `other`.
    ///
    /// # Returns
    /// A value in the range `0..=256`.
    pub fn differing_bits(&self, other: &Digest) -> u32 {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(l, r)| (l ^ r).count_ones())
            .sum()
    }

    /// Fraction of differing output bits, in `[0.0, 1.0]`.
    ///
    /// For a single flipped input bit a sound hash lands near `0.5`.
    pub fn difference_ratio(&self, other: &Digest) -> f64 {
        f64::from(self.differing_bits(other)) / f64::from(DIGEST_BITS)
    }
}

/// Serializes eight state words big-endian, `H[0]` first.
impl From<[Word; 8]> for Digest {
    fn from(value: [Word; 8]) -> Self {
        let mut out = [0u8; 32];

        for (i, v) in value.into_iter().enumerate() {
            out[i * 4..i * 4 + 4].copy_from_slice(&v.to_be_bytes());
        }

        Digest(out)
    }
}

impl From<Digest> for [u8; 32] {
    fn from(value: Digest) -> Self {
        value.0
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl LowerHex for Digest {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for byte in self.0.iter() {
            write!(f, "{:02x}", byte)?;
        }

        Ok(())
    }
}

impl Display for Digest {
    /// Formats the digest as 64 lowercase hexadecimal characters.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        LowerHex::fmt(self, f)
    }
}
