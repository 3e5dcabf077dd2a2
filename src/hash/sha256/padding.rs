//! Message padding (FIPS 180-4 §5.1.1).
//!
//! A message of `L` bytes is extended with a single `1` bit, then the
//! fewest `0` bits that bring its length to 448 mod 512, then `L * 8` as
//! a 64-bit big-endian integer. The result is a whole number of 64-byte
//! blocks. When fewer than 9 bytes remain in the last message block, the
//! length field spills into an extra block.
//!
//! Because input is byte-aligned, the `1` bit and the first seven zero
//! bits are written together as the byte `0x80`.

use std::iter::FusedIterator;
use std::slice::ChunksExact;

use super::{BLOCK_LEN, Block};
use crate::error::HashError;

const BLOCK_BITS: u64 = (BLOCK_LEN as u64) * 8;
const LEN_FIELD_BITS: u64 = 64;
const LEN_FIELD_OFFSET: u64 = BLOCK_BITS - LEN_FIELD_BITS;

/// Layout of a padded message, in bits.
///
/// Every quantity follows from the message length alone:
/// `total_bits = data_bits + one_bit + zero_pad_bits + len_field_bits`,
/// `total_bits % 512 == 0`, and `zero_pad_bits` is the smallest value in
/// `0..512` satisfying both.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PaddingInfo {
    /// Bits of original message data (`L * 8`).
    pub data_bits: u64,
    /// The single appended `1` bit; always `1`.
    pub one_bit: u64,
    /// Zero bits between the `1` bit and the length field (`0..=511`).
    pub zero_pad_bits: u64,
    /// Width of the trailing length field; always `64`.
    pub len_field_bits: u64,
    /// Length of the padded message in bits.
    pub total_bits: u64,
    /// Number of 512-bit blocks in the padded message.
    pub block_count: u64,
}

impl PaddingInfo {
    /// Computes the padding layout for a message of `len` bytes.
    ///
    /// # Errors
    /// [`HashError::MessageTooLarge`] when `len * 8` does not fit the
    /// 64-bit length field (`len >= 2⁶¹`), or when the padded length
    /// itself would overflow 64 bits.
    pub fn for_length(len: usize) -> Result<Self, HashError> {
        let too_large = HashError::MessageTooLarge { len };

        let data_bits = u64::try_from(len)
            .ok()
            .and_then(|l| l.checked_mul(8))
            .ok_or(too_large)?;

        // Position just after the `1` bit, within its block.
        let used = (data_bits % BLOCK_BITS + 1) % BLOCK_BITS;
        let zero_pad_bits = (LEN_FIELD_OFFSET + BLOCK_BITS - used) % BLOCK_BITS;

        let total_bits = data_bits
            .checked_add(1 + zero_pad_bits + LEN_FIELD_BITS)
            .ok_or(too_large)?;

        Ok(Self {
            data_bits,
            one_bit: 1,
            zero_pad_bits,
            len_field_bits: LEN_FIELD_BITS,
            total_bits,
            block_count: total_bits / BLOCK_BITS,
        })
    }

    /// Length of the padded message in bytes.
    pub fn padded_len(&self) -> u64 {
        self.total_bits / 8
    }
}

/// Iterator over the padded blocks of a message.
///
/// Full 64-byte blocks are copied straight from the message. The final
/// one or two blocks, which carry the padding, come from a small inline
/// buffer, so iterating never allocates.
#[derive(Clone, Debug)]
pub struct PaddedBlocks<'a> {
    info: PaddingInfo,
    full: ChunksExact<'a, u8>,
    tail: [u8; 2 * BLOCK_LEN],
    tail_blocks: usize,
    tail_next: usize,
}

impl PaddedBlocks<'_> {
    /// The padding layout of the message being iterated.
    pub fn info(&self) -> &PaddingInfo {
        &self.info
    }
}

impl Iterator for PaddedBlocks<'_> {
    type Item = Block;

    fn next(&mut self) -> Option<Block> {
        let mut block = [0u8; BLOCK_LEN];

        if let Some(chunk) = self.full.next() {
            block.copy_from_slice(chunk);
            return Some(block);
        }

        if self.tail_next < self.tail_blocks {
            let start = self.tail_next * BLOCK_LEN;
            block.copy_from_slice(&self.tail[start..start + BLOCK_LEN]);
            self.tail_next += 1;
            return Some(block);
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.full.len() + (self.tail_blocks - self.tail_next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PaddedBlocks<'_> {}

impl FusedIterator for PaddedBlocks<'_> {}

/// Returns the padded blocks of `message`, in order.
///
/// # Errors
/// [`HashError::MessageTooLarge`], see [`PaddingInfo::for_length`].
pub fn padded_blocks(message: &[u8]) -> Result<PaddedBlocks<'_>, HashError> {
    let info = PaddingInfo::for_length(message.len())?;

    let full = message.chunks_exact(BLOCK_LEN);
    let rem = full.remainder();

    let mut tail = [0u8; 2 * BLOCK_LEN];
    tail[..rem.len()].copy_from_slice(rem);
    tail[rem.len()] = 0x80;

    // The length field needs the last 8 bytes of a block to itself.
    let tail_blocks = if rem.len() > BLOCK_LEN - 9 { 2 } else { 1 };

    let end = tail_blocks * BLOCK_LEN;
    tail[end - 8..end].copy_from_slice(&info.data_bits.to_be_bytes());

    Ok(PaddedBlocks {
        info,
        full,
        tail,
        tail_blocks,
        tail_next: 0,
    })
}

/// Pads `message` into a contiguous buffer.
///
/// The buffer length is always a positive multiple of 64 bytes and at
/// least `message.len() + 9`.
///
/// # Errors
/// [`HashError::MessageTooLarge`], see [`PaddingInfo::for_length`].
pub fn pad(message: &[u8]) -> Result<(Vec<u8>, PaddingInfo), HashError> {
    let blocks = padded_blocks(message)?;
    let info = *blocks.info();

    let mut out = Vec::with_capacity(blocks.len() * BLOCK_LEN);
    for block in blocks {
        out.extend_from_slice(&block);
    }

    Ok((out, info))
}
