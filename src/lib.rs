//! SHA-256 with a complete execution trace
//!
//! This crate computes SHA-256 digests exactly as FIPS 180-4 defines
//! them and, on request, records every intermediate value the algorithm
//! produces along the way.
//!
//! The focus is on **clarity and inspectability**: the
//! trace is a plain, immutable data structure that presentation layers
//! can address directly (any block, any round) instead of re-running or
//! stepping a streaming hasher.
//!
//! # Entry points
//!
//! - [`digest`] returns the 32-byte [`Digest`] only. It pads on the fly
//!   and allocates nothing.
//! - [`digest_with_trace`] returns the same digest together with a
//!   [`Trace`]: the padding layout and, for each 64-byte block, its
//!   sixteen input words, the 64-word message schedule, the register
//!   file after each of the 64 rounds, and the chained hash states.
//!
//! Both fail only with [`HashError::MessageTooLarge`], when the message
//! bit length cannot be encoded in the 64-bit length field.
//!
//! # Module overview
//!
//! - `primitives`  
//!   32-bit word operations (modular truncation, rotate, shift) and the
//!   `Digest` value type.
//!
//! - `hash`  
//!   The SHA-256 stages (padding, schedule, compression), the trace
//!   model, and the engine chaining them.
//!
//! # Design goals
//!
//! - Bit-exact FIPS 180-4 results on both paths
//! - No shared state: independent calls may run on separate threads
//! - Preconditions carried by types (`[u8; 64]` blocks, `[u32; 64]`
//!   schedules) rather than runtime checks
//!
//! This crate is not hardened against timing side channels and is not
//! intended for hashing unbounded streams.

mod error;

pub mod hash;
pub mod primitives;

pub use error::HashError;
pub use hash::sha256::{Trace, digest, digest_with_trace};
pub use primitives::Digest;
