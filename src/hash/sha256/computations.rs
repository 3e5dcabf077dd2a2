//! SHA-256 round functions and the 64-round compression.
//!
//! The compression runs the rounds in strict order, each one consuming
//! the registers left by the previous. A [`RoundObserver`] sees the
//! register file after every round; the digest-only path passes `()`,
//! which compiles down to the bare loop.

use super::schedule::Schedule;
use super::trace::RoundState;
use super::{HashState, ROUNDS};
use crate::primitives::{Word, rotr, shr, to_u32};

pub use super::K256;

/// σ0, used by the message schedule.
#[inline(always)]
pub fn small_sigma0(x: Word) -> Word {
    rotr(x, 7) ^ rotr(x, 18) ^ shr(x, 3)
}

/// σ1, used by the message schedule.
#[inline(always)]
pub fn small_sigma1(x: Word) -> Word {
    rotr(x, 17) ^ rotr(x, 19) ^ shr(x, 10)
}

/// Σ0, applied to register `a`.
#[inline(always)]
pub fn big_sigma0(x: Word) -> Word {
    rotr(x, 2) ^ rotr(x, 13) ^ rotr(x, 22)
}

/// Σ1, applied to register `e`.
#[inline(always)]
pub fn big_sigma1(x: Word) -> Word {
    rotr(x, 6) ^ rotr(x, 11) ^ rotr(x, 25)
}

/// Choose: each bit of `e` selects the bit from `f` (set) or `g` (clear).
#[inline(always)]
pub fn ch(e: Word, f: Word, g: Word) -> Word {
    (e & f) ^ ((!e) & g)
}

/// Majority of the three inputs, bitwise.
#[inline(always)]
pub fn maj(a: Word, b: Word, c: Word) -> Word {
    (a & b) ^ (a & c) ^ (b & c)
}

/// Receives the register snapshot taken after each compression round.
pub trait RoundObserver {
    fn observe(&mut self, round: &RoundState);
}

/// Discards every round.
impl RoundObserver for () {
    #[inline(always)]
    fn observe(&mut self, _round: &RoundState) {}
}

/// Stores each round at its own index.
impl RoundObserver for [RoundState; ROUNDS] {
    #[inline]
    fn observe(&mut self, round: &RoundState) {
        self[usize::from(round.index)] = *round;
    }
}

/// Compresses one scheduled block into `state`.
///
/// Runs the 64 rounds over a copy of `state`, reporting each round to
/// `observer`, then adds the working registers back into `state`
/// (the Davies–Meyer feed-forward). The feed-forward is not a round and
/// is never reported.
pub fn all_rounds<O>(state: &mut HashState, w: &Schedule, observer: &mut O)
where
    O: RoundObserver + ?Sized,
{
    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

    for i in 0..ROUNDS {
        let ki = K256[i];
        let wi = w[i];

        let t1 = to_u32(
            u64::from(h)
                + u64::from(big_sigma1(e))
                + u64::from(ch(e, f, g))
                + u64::from(ki)
                + u64::from(wi),
        );
        let t2 = to_u32(u64::from(big_sigma0(a)) + u64::from(maj(a, b, c)));

        h = g;
        g = f;
        f = e;
        e = to_u32(u64::from(d) + u64::from(t1));
        d = c;
        c = b;
        b = a;
        a = to_u32(u64::from(t1) + u64::from(t2));

        observer.observe(&RoundState {
            index: i as u8,
            a,
            b,
            c,
            d,
            e,
            f,
            g,
            h,
            t1,
            t2,
            k: ki,
            w: wi,
        });
    }

    for (slot, reg) in state.iter_mut().zip([a, b, c, d, e, f, g, h]) {
        *slot = slot.wrapping_add(reg);
    }
}

/// Unrolled compression for the digest-only path.
///
/// Same result as [`all_rounds`] with `()` as observer.
#[cfg(feature = "speed")]
pub fn all_rounds_unrolled(state: &mut HashState, w: &Schedule) {
    let mut a = state[0];
    let mut b = state[1];
    let mut c = state[2];
    let mut d = state[3];
    let mut e = state[4];
    let mut f = state[5];
    let mut g = state[6];
    let mut h = state[7];

    macro_rules! R {
        ($i:expr) => {{
            let t1 = h
                .wrapping_add(big_sigma1(e))
                .wrapping_add(ch(e, f, g))
                .wrapping_add(K256[$i])
                .wrapping_add(w[$i]);

            let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));

            h = g;
            g = f;
            f = e;
            e = d.wrapping_add(t1);
            d = c;
            c = b;
            b = a;
            a = t1.wrapping_add(t2);
        }};
    }

    macro_rules! R8 {
        ($base:expr) => {{
            R!($base);
            R!($base + 1);
            R!($base + 2);
            R!($base + 3);
            R!($base + 4);
            R!($base + 5);
            R!($base + 6);
            R!($base + 7);
        }};
    }

    R8!(0);
    R8!(8);
    R8!(16);
    R8!(24);
    R8!(32);
    R8!(40);
    R8!(48);
    R8!(56);

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    state[4] = state[4].wrapping_add(e);
    state[5] = state[5].wrapping_add(f);
    state[6] = state[6].wrapping_add(g);
    state[7] = state[7].wrapping_add(h);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::sha256::H256_INIT;

    #[test]
    fn boolean_functions_select_and_vote() {
        assert_eq!(ch(0xffff_0000, 0x1234_5678, 0x9abc_def0), 0x1234_def0);
        assert_eq!(maj(0xff00_ff00, 0xf0f0_f0f0, 0x0000_0000), 0xf000_f000);
    }

    #[test]
    fn feed_forward_is_added_after_the_last_round() {
        let mut rounds = [RoundState::default(); ROUNDS];
        let mut state = H256_INIT;
        all_rounds(&mut state, &[0u32; ROUNDS], &mut rounds);

        let last = rounds[ROUNDS - 1].registers();
        for k in 0..8 {
            assert_eq!(state[k], H256_INIT[k].wrapping_add(last[k]));
        }
    }

    #[cfg(feature = "speed")]
    #[test]
    fn unrolled_rounds_match_the_loop() {
        let w: Schedule = std::array::from_fn(|i| (i as u32).wrapping_mul(0x9e37_79b9));

        let mut looped = H256_INIT;
        all_rounds(&mut looped, &w, &mut ());

        let mut unrolled = H256_INIT;
        all_rounds_unrolled(&mut unrolled, &w);

        assert_eq!(looped, unrolled);
    }
}
