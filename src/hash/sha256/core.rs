//! SHA-256 digest engine
//!
//! This module chains the SHA-256 stages over a whole message as
//! defined in FIPS 180-4:
//!
//! 1. pad the message into 64-byte blocks,
//! 2. expand each block into its 64-word schedule,
//! 3. compress the schedule into the running hash state,
//! 4. serialize the final state big-endian.
//!
//! Blocks are strictly sequential: each one starts from the state the
//! previous one left. Two entry points share this pipeline. `digest`
//! only keeps the running state and performs no heap allocation;
//! `digest_with_trace` also records every intermediate value.

use log::{debug, trace};

use super::computations::all_rounds;
use super::padding::{PaddedBlocks, padded_blocks};
use super::schedule::{block_words, message_schedule};
use super::trace::{BlockTrace, RoundState, Trace};
use super::{Block, H256_INIT, HashState, ROUNDS};
use crate::error::HashError;
use crate::primitives::Digest;

/// Compresses a single 512-bit block into `state` without recording.
#[inline(always)]
pub fn compress(block: &Block, state: &mut HashState) {
    let w = message_schedule(block);

    #[cfg(not(feature = "speed"))]
    all_rounds(state, &w, &mut ());

    #[cfg(feature = "speed")]
    super::computations::all_rounds_unrolled(state, &w);
}

/// Computes the SHA-256 digest of `message`.
///
/// # Errors
/// [`HashError::MessageTooLarge`] if the message bit length does not fit
/// in 64 bits. Nothing is computed in that case.
///
/// # Notes
/// - Blocks are padded on the fly; no trace structures or padded copy of
///   the message are allocated.
/// - The result is identical to the digest returned by
///   [`digest_with_trace`].
pub fn digest(message: &[u8]) -> Result<Digest, HashError> {
    let blocks = padded_blocks(message)?;
    trace!(
        "sha256: hashing {} bytes in {} blocks",
        message.len(),
        blocks.len()
    );

    let mut state = H256_INIT;
    for block in blocks {
        compress(&block, &mut state);
    }

    Ok(Digest::from(state))
}

/// Computes the SHA-256 digest of `message` and records its full trace.
///
/// # Errors
/// [`HashError::MessageTooLarge`], detected before any block is
/// processed; no partial trace is produced.
///
/// # Returns
/// The digest together with a [`Trace`] holding the padding layout and,
/// per block, the input words, schedule, 64 round snapshots and the
/// chained hash states.
pub fn digest_with_trace(message: &[u8]) -> Result<(Digest, Trace), HashError> {
    let blocks = padded_blocks(message)?;
    let padding = *blocks.info();
    debug!(
        "sha256: tracing {} bytes ({} data bits, {} zero pad bits, {} blocks)",
        message.len(),
        padding.data_bits,
        padding.zero_pad_bits,
        padding.block_count
    );

    let (state, traced) = trace_blocks(blocks);

    Ok((
        Digest::from(state),
        Trace {
            padding,
            blocks: traced,
        },
    ))
}

fn trace_blocks(blocks: PaddedBlocks<'_>) -> (HashState, Vec<BlockTrace>) {
    let mut state = H256_INIT;
    let mut traced = Vec::with_capacity(blocks.len());

    for (index, block) in blocks.enumerate() {
        let schedule = message_schedule(&block);
        let mut rounds = Box::new([RoundState::default(); ROUNDS]);

        let initial_state = state;
        all_rounds(&mut state, &schedule, &mut *rounds);

        trace!(
            "sha256: block {index} compressed, state {:08x?} -> {:08x?}",
            initial_state,
            state
        );

        traced.push(BlockTrace {
            words: block_words(&block),
            schedule,
            rounds,
            initial_state,
            final_state: state,
        });
    }

    (state, traced)
}
