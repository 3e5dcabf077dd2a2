//! Hash algorithms exposed by the crate.
//!
//! Currently includes SHA-256 with a pure-Rust, trace-recording
//! implementation.

pub mod sha256;

/// Re-export of the SHA-256 entry points.
pub use sha256::core::{digest, digest_with_trace};
