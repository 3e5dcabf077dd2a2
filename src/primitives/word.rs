//! Fixed-width 32-bit word arithmetic.
//!
//! SHA-256 works exclusively on 32-bit words and every addition is taken
//! modulo 2³². These helpers name the three operations FIPS 180-4 builds
//! on so the round functions read like the standard.

/// A 32-bit SHA-256 word.
pub type Word = u32;

/// Truncates a wide accumulator to its low 32 bits (`x mod 2³²`).
///
/// Sums of up to five words never exceed `u64`, so callers may add in
/// `u64` and truncate once.
#[inline(always)]
pub const fn to_u32(x: u64) -> Word {
    x as Word
}

/// Rotates `x` right by `n` bits.
#[inline(always)]
pub const fn rotr(x: Word, n: u32) -> Word {
    x.rotate_right(n)
}

/// Shifts `x` right by `n` bits, filling with zeros.
#[inline(always)]
pub const fn shr(x: Word, n: u32) -> Word {
    x >> n
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_u32_wraps_overflowing_sums() {
        let sum = u64::from(u32::MAX) + u64::from(u32::MAX) + 3;
        assert_eq!(to_u32(sum), 1);
        assert_eq!(to_u32(0x1_0000_0000), 0);
    }

    #[test]
    fn rotr_moves_low_bits_to_the_top() {
        assert_eq!(rotr(0x0000_0001, 1), 0x8000_0000);
        assert_eq!(rotr(0x1234_5678, 8), 0x7812_3456);
        assert_eq!(rotr(0xdead_beef, 0), 0xdead_beef);
    }

    #[test]
    fn shr_fills_with_zeros() {
        assert_eq!(shr(0x8000_0000, 31), 1);
        assert_eq!(shr(0xffff_ffff, 4), 0x0fff_ffff);
    }
}
