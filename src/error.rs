//! Error type shared by the hashing entry points.

use thiserror::Error;

/// Errors reported by [`digest`](crate::digest) and
/// [`digest_with_trace`](crate::digest_with_trace).
///
/// Hashing is a pure function of its input, so the only failure is an
/// input whose bit length cannot be encoded in the 64-bit length field.
/// It is detected before any block is compressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HashError {
    /// The message bit length (or its padded length) does not fit in 64 bits.
    #[error("message of {len} bytes is too large: its bit length does not fit in 64 bits")]
    MessageTooLarge {
        /// Length of the rejected message in bytes.
        len: usize,
    },
}
