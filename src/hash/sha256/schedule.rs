//! Message schedule expansion (FIPS 180-4 §6.2.2, step 1).

use super::computations::{small_sigma0, small_sigma1};
use super::{Block, ROUNDS};
use crate::primitives::{Word, to_u32};

/// The 64-word message schedule `W[0..63]` of one block.
pub type Schedule = [Word; ROUNDS];

/// Reads the sixteen big-endian words of a block.
pub fn block_words(block: &Block) -> [Word; 16] {
    let mut words = [0u32; 16];

    for (slot, chunk) in words.iter_mut().zip(block.chunks_exact(4)) {
        *slot = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    words
}

/// Expands a block into its 64-word message schedule.
///
/// `W[0..16]` are the block words. Each later entry depends only on
/// strictly earlier ones:
/// `W[t] = σ1(W[t-2]) + W[t-7] + σ0(W[t-15]) + W[t-16]  (mod 2³²)`,
/// so the expansion runs left to right.
pub fn message_schedule(block: &Block) -> Schedule {
    let mut w = [0u32; ROUNDS];
    w[..16].copy_from_slice(&block_words(block));

    for t in 16..ROUNDS {
        w[t] = to_u32(
            u64::from(small_sigma0(w[t - 15]))
                + u64::from(w[t - 7])
                + u64::from(small_sigma1(w[t - 2]))
                + u64::from(w[t - 16]),
        );
    }

    w
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::sha256::padding::pad;

    #[test]
    fn abc_schedule_matches_fips_example() {
        let (padded, _) = pad(b"abc").unwrap();
        let block: Block = padded[..64].try_into().unwrap();
        let w = message_schedule(&block);

        assert_eq!(w[0], 0x61626380);
        assert_eq!(w[15], 0x00000018);
        assert_eq!(w[16], 0x61626380);
        assert_eq!(w[17], 0x000f0000);
        assert_eq!(w[63], 0x12b1edeb);
    }
}
