//! Execution trace of a SHA-256 computation.
//!
//! A [`Trace`] records every intermediate value the engine computes:
//! the padding layout, and for each block its sixteen input words, the
//! 64-word schedule, the register file after each of the 64 rounds, and
//! the hash state before and after the block.
//!
//! The trace is built once by [`digest_with_trace`](super::digest_with_trace)
//! and is read-only afterwards. Blocks and rounds are addressed directly,
//! so a consumer can jump to any `(block, round)` pair without replaying
//! the computation.

use super::padding::PaddingInfo;
use super::schedule::Schedule;
use super::{HashState, ROUNDS};
use crate::primitives::Word;

/// Register file after one compression round, with the round's inputs.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct RoundState {
    /// Round index, `0..=63`.
    pub index: u8,
    pub a: Word,
    pub b: Word,
    pub c: Word,
    pub d: Word,
    pub e: Word,
    pub f: Word,
    pub g: Word,
    pub h: Word,
    /// `h + Σ1(e) + Ch(e, f, g) + K[i] + W[i]`
    pub t1: Word,
    /// `Σ0(a) + Maj(a, b, c)`
    pub t2: Word,
    /// Round constant `K[i]`.
    pub k: Word,
    /// Schedule word `W[i]`.
    pub w: Word,
}

impl RoundState {
    /// Registers `a..h`, in order.
    pub fn registers(&self) -> [Word; 8] {
        [
            self.a, self.b, self.c, self.d, self.e, self.f, self.g, self.h,
        ]
    }
}

/// Everything computed for one 64-byte block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockTrace {
    pub(crate) words: [Word; 16],
    pub(crate) schedule: Schedule,
    pub(crate) rounds: Box<[RoundState; ROUNDS]>,
    pub(crate) initial_state: HashState,
    pub(crate) final_state: HashState,
}

impl BlockTrace {
    /// The block's sixteen big-endian input words.
    pub fn words(&self) -> &[Word; 16] {
        &self.words
    }

    /// The 64-word message schedule.
    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Register snapshots after rounds `0..=63`.
    pub fn rounds(&self) -> &[RoundState; ROUNDS] {
        &self.rounds
    }

    /// Snapshot after round `round`, if `round < 64`.
    pub fn round(&self, round: usize) -> Option<&RoundState> {
        self.rounds.get(round)
    }

    /// Hash state the block was compressed from.
    pub fn initial_state(&self) -> &HashState {
        &self.initial_state
    }

    /// Hash state after the feed-forward addition.
    ///
    /// This differs from the last round's registers: it is the sum of
    /// those registers and [`initial_state`](Self::initial_state).
    pub fn final_state(&self) -> &HashState {
        &self.final_state
    }
}

/// Full record of one hashing invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trace {
    pub(crate) padding: PaddingInfo,
    pub(crate) blocks: Vec<BlockTrace>,
}

impl Trace {
    pub fn padding(&self) -> &PaddingInfo {
        &self.padding
    }

    pub fn blocks(&self) -> &[BlockTrace] {
        &self.blocks
    }

    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    pub fn block(&self, block: usize) -> Option<&BlockTrace> {
        self.blocks.get(block)
    }

    /// Snapshot after round `round` of block `block`.
    pub fn round(&self, block: usize, round: usize) -> Option<&RoundState> {
        self.block(block)?.round(round)
    }

    /// Snapshot at `position`.
    pub fn round_at(&self, position: TracePosition) -> Option<&RoundState> {
        self.round(position.block, position.round)
    }
}

/// A `(block, round)` coordinate inside a [`Trace`].
///
/// Positions are ordered the way the computation runs: by block, then by
/// round.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TracePosition {
    pub block: usize,
    pub round: usize,
}

impl TracePosition {
    /// Round 0 of block 0.
    pub const START: Self = Self { block: 0, round: 0 };

    pub const fn new(block: usize, round: usize) -> Self {
        Self { block, round }
    }

    /// Last round of the last block of `trace`.
    pub fn end(trace: &Trace) -> Self {
        Self {
            block: trace.block_count().saturating_sub(1),
            round: ROUNDS - 1,
        }
    }

    /// The following round, moving into the next block after round 63.
    ///
    /// Returns `None` at the end of `trace` or when `self` lies outside it.
    pub fn next(self, trace: &Trace) -> Option<Self> {
        if self.block >= trace.block_count() || self.round >= ROUNDS {
            return None;
        }

        if self.round + 1 < ROUNDS {
            return Some(Self::new(self.block, self.round + 1));
        }

        (self.block + 1 < trace.block_count()).then(|| Self::new(self.block + 1, 0))
    }

    /// The preceding round, moving back to round 63 of the previous block.
    ///
    /// Returns `None` at [`START`](Self::START).
    pub fn prev(self) -> Option<Self> {
        match (self.block, self.round) {
            (0, 0) => None,
            (block, 0) => Some(Self::new(block - 1, ROUNDS - 1)),
            (block, round) => Some(Self::new(block, round - 1)),
        }
    }
}
