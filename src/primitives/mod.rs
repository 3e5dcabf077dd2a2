//! Primitive types
//!
//! This module defines the low-level values the SHA-256 engine is built
//! from:
//! - `word`: 32-bit words and the modular, rotate and shift operations
//!   every SHA-256 function is expressed in
//! - `Digest`: the fixed-size 256-bit hash output
//!
//! Primitives are simple, fixed-size building blocks with well-defined
//! semantics. They carry no hashing logic of their own.

mod digest;
pub mod word;

pub use digest::{DIGEST_BITS, Digest};
pub use word::{Word, rotr, shr, to_u32};
