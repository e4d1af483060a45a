// SPDX-License-Identifier: MIT
//! Keccak-f[1600]: 24 rounds of theta, rho, pi, chi and iota over a 5x5
//! array of 64-bit lanes. Lane `(x, y)` lives at index `x + 5 * y`.

pub const LANES: usize = 25;
pub const ROUNDS: usize = 24;

//  ---------------------------------------------------------------------------
//  Round constants & rotation offsets, derived once per process
//  ---------------------------------------------------------------------------
#[doc(hidden)]
pub mod constants {
    use super::{LANES, ROUNDS};
    use once_cell::sync::Lazy;

    /// Iota constants, one per round.
    pub static ROUND_CONSTANTS: Lazy<[u64; ROUNDS]> = Lazy::new(derive_round_constants);

    /// Rho rotation amounts indexed by `x + 5 * y`.
    pub static RHO_OFFSETS: Lazy<[u32; LANES]> = Lazy::new(derive_rho_offsets);

    /// One step of the degree-8 LFSR x^8 + x^6 + x^5 + x^4 + 1. Returns the
    /// output bit taken before the shift.
    fn lfsr_step(state: &mut u8) -> bool {
        let out = *state & 0x01 != 0;
        *state = if *state & 0x80 != 0 {
            (*state << 1) ^ 0x71
        } else {
            *state << 1
        };
        out
    }

    fn derive_round_constants() -> [u64; ROUNDS] {
        let mut lfsr = 0x01u8;
        let mut out = [0u64; ROUNDS];
        for rc in out.iter_mut() {
            for j in 0..7 {
                if lfsr_step(&mut lfsr) {
                    *rc ^= 1 << ((1 << j) - 1);
                }
            }
        }
        out
    }

    fn derive_rho_offsets() -> [u32; LANES] {
        let mut out = [0u32; LANES];
        let (mut x, mut y) = (1usize, 0usize);
        for t in 0..24u32 {
            out[x + 5 * y] = ((t + 1) * (t + 2) / 2) % 64;
            (x, y) = (y, (2 * x + 3 * y) % 5);
        }
        out
    }
}

//  ---------------------------------------------------------------------------
//  Permutation
//  ---------------------------------------------------------------------------

/// Stateless Keccak-f[1600] permutation.
///
/// All scratch space lives on the stack of [`KeccakF1600::apply`], so distinct
/// states can be permuted from different threads at the same time.
#[derive(Debug, Default, Clone, Copy)]
pub struct KeccakF1600;

impl KeccakF1600 {
    /// Apply **in-place** to a full 25-lane state.
    #[inline]
    pub fn apply(state: &mut [u64; LANES]) {
        let rc = &*constants::ROUND_CONSTANTS;
        let offsets = &*constants::RHO_OFFSETS;
        for &round_constant in rc {
            theta(state);
            rho(state, offsets);
            pi(state);
            chi(state);
            // iota
            state[0] ^= round_constant;
        }
    }
}

#[inline(always)]
fn theta(a: &mut [u64; LANES]) {
    let mut c = [0u64; 5];
    for (x, parity) in c.iter_mut().enumerate() {
        *parity = a[x] ^ a[x + 5] ^ a[x + 10] ^ a[x + 15] ^ a[x + 20];
    }
    for x in 0..5 {
        let d = c[(x + 1) % 5].rotate_left(1) ^ c[(x + 4) % 5];
        for y in 0..5 {
            a[x + 5 * y] ^= d;
        }
    }
}

#[inline(always)]
fn rho(a: &mut [u64; LANES], offsets: &[u32; LANES]) {
    for (lane, &r) in a.iter_mut().zip(offsets) {
        *lane = lane.rotate_left(r);
    }
}

#[inline(always)]
fn pi(a: &mut [u64; LANES]) {
    let src = *a;
    for x in 0..5 {
        for y in 0..5 {
            a[y + 5 * ((2 * x + 3 * y) % 5)] = src[x + 5 * y];
        }
    }
}

#[inline(always)]
fn chi(a: &mut [u64; LANES]) {
    for y in 0..5 {
        let row = [a[5 * y], a[5 * y + 1], a[5 * y + 2], a[5 * y + 3], a[5 * y + 4]];
        for x in 0..5 {
            a[x + 5 * y] = row[x] ^ (!row[(x + 1) % 5] & row[(x + 2) % 5]);
        }
    }
}

//  ---------------------------------------------------------------------------
//  TESTS
//  ---------------------------------------------------------------------------
#[cfg(test)]
mod tests {
    use super::*;

    /// Published iota constants (FIPS 202, table in the Keccak reference).
    const PUBLISHED_RC: [u64; ROUNDS] = [
        0x0000000000000001,
        0x0000000000008082,
        0x800000000000808a,
        0x8000000080008000,
        0x000000000000808b,
        0x0000000080000001,
        0x8000000080008081,
        0x8000000000008009,
        0x000000000000008a,
        0x0000000000000088,
        0x0000000080008009,
        0x000000008000000a,
        0x000000008000808b,
        0x800000000000008b,
        0x8000000000008089,
        0x8000000000008003,
        0x8000000000008002,
        0x8000000000000080,
        0x000000000000800a,
        0x800000008000000a,
        0x8000000080008081,
        0x8000000000008080,
        0x0000000080000001,
        0x8000000080008008,
    ];

    const PUBLISHED_RHO: [u32; LANES] = [
        0, 1, 62, 28, 27, 36, 44, 6, 55, 20, 3, 10, 43, 25, 39, 41, 45, 15, 21, 8, 18, 2, 61, 56,
        14,
    ];

    #[test]
    fn derived_round_constants_match_published_table() {
        assert_eq!(*constants::ROUND_CONSTANTS, PUBLISHED_RC);
    }

    #[test]
    fn derived_rho_offsets_match_published_table() {
        assert_eq!(*constants::RHO_OFFSETS, PUBLISHED_RHO);
    }

    #[test]
    fn zero_state_permutation() {
        let mut state = [0u64; LANES];
        KeccakF1600::apply(&mut state);
        assert_eq!(state[0], 0xf1258f7940e1dde7);
        assert_eq!(state[1], 0x84d5ccf933c0478a);
        assert_eq!(state[2], 0xd598261ea65aa9ee);
    }

    #[test]
    fn pi_moves_lanes_along_orbit() {
        let mut state = [0u64; LANES];
        for (i, lane) in state.iter_mut().enumerate() {
            *lane = i as u64;
        }
        pi(&mut state);
        // (1, 0) -> (0, 2)
        assert_eq!(state[10], 1);
        // origin is fixed
        assert_eq!(state[0], 0);
    }

    #[test]
    fn distinct_inputs_diverge() {
        let mut a = [0u64; LANES];
        let mut b = [0u64; LANES];
        b[24] = 1;
        KeccakF1600::apply(&mut a);
        KeccakF1600::apply(&mut b);
        assert_ne!(a, b);
    }
}
