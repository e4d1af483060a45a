// SPDX-License-Identifier: MIT
//! Bit-granular sponge over Keccak-f[1600].
//!
//! The engine queues input until a full rate-block is available, XORs it into
//! the state and permutes. The first squeeze pads the queue with the Keccak
//! `10*1` rule (after the configured domain suffix), switches to the
//! squeezing phase and from then on serves output from the rate part of the
//! state, permuting again whenever a block has been consumed.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::permutation::{KeccakF1600, LANES};

pub const STATE_BITS: usize = 1600;
const STATE_BYTES: usize = STATE_BITS / 8;
/// Largest valid rate is 1536 bits (a multiple of 64 below 1600).
const MAX_RATE_BYTES: usize = 192;
/// Longest byte slice whose length in bits still fits a `usize`.
const MAX_ABSORB_CHUNK: usize = usize::MAX / 8;

//  ---------------------------------------------------------------------------
//  Configuration values
//  ---------------------------------------------------------------------------

/// Validated `(rate, capacity)` pair, both in bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawParams")]
pub struct SpongeParams {
    rate: usize,
    capacity: usize,
}

#[derive(Deserialize)]
struct RawParams {
    rate: usize,
    capacity: usize,
}

impl TryFrom<RawParams> for SpongeParams {
    type Error = Error;

    fn try_from(raw: RawParams) -> Result<Self> {
        Self::new(raw.rate, raw.capacity)
    }
}

impl SpongeParams {
    /// Requires `rate + capacity == 1600`, `rate % 64 == 0` and `0 < rate < 1600`.
    pub fn new(rate: usize, capacity: usize) -> Result<Self> {
        if rate.checked_add(capacity) != Some(STATE_BITS)
            || rate == 0
            || rate >= STATE_BITS
            || rate % 64 != 0
        {
            tracing::debug!(rate, capacity, "rejected sponge parameters");
            return Err(Error::InvalidParameters { rate, capacity });
        }
        Ok(Self { rate, capacity })
    }

    /// For table entries already known to satisfy [`SpongeParams::new`].
    pub(crate) const fn from_table(rate: usize, capacity: usize) -> Self {
        Self { rate, capacity }
    }

    pub const fn rate(&self) -> usize {
        self.rate
    }

    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Block length in bytes.
    pub const fn rate_bytes(&self) -> usize {
        self.rate / 8
    }

    /// `capacity / 2`: the digest length of the fixed-output variants.
    pub const fn fixed_output_bits(&self) -> usize {
        self.capacity / 2
    }
}

/// Domain-separation bits appended after the message, least significant
/// bit first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Suffix {
    pub bits: u8,
    pub len: u8,
}

impl Suffix {
    /// Raw Keccak: nothing between message and padding.
    pub const NONE: Suffix = Suffix { bits: 0, len: 0 };
    /// FIPS 202 `01` for SHA3.
    pub const SHA3: Suffix = Suffix {
        bits: 0x02,
        len: 2,
    };
    /// FIPS 202 `1111` for SHAKE.
    pub const SHAKE: Suffix = Suffix {
        bits: 0x0f,
        len: 4,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Absorbing,
    Squeezing,
}

//  ---------------------------------------------------------------------------
//  Engine
//  ---------------------------------------------------------------------------

/// Absorb/pad/squeeze state machine. `Clone` is a deep copy.
#[derive(Clone)]
pub struct SpongeEngine {
    params: SpongeParams,
    suffix: Suffix,
    state: [u8; STATE_BYTES],
    queue: [u8; MAX_RATE_BYTES],
    bits_in_queue: usize,
    bits_available: usize,
    phase: Phase,
}

impl fmt::Debug for SpongeEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpongeEngine")
            .field("params", &self.params)
            .field("suffix", &self.suffix)
            .field("bits_in_queue", &self.bits_in_queue)
            .field("bits_available", &self.bits_available)
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}

impl SpongeEngine {
    pub fn new(params: SpongeParams, suffix: Suffix) -> Self {
        tracing::trace!(rate = params.rate, capacity = params.capacity, "sponge init");
        Self {
            params,
            suffix,
            state: [0; STATE_BYTES],
            queue: [0; MAX_RATE_BYTES],
            bits_in_queue: 0,
            bits_available: 0,
            phase: Phase::Absorbing,
        }
    }

    /// Zero state and queue and return to the absorbing phase.
    pub fn reset(&mut self) {
        tracing::trace!(rate = self.params.rate, "sponge reset");
        *self = Self::new(self.params, self.suffix);
    }

    pub fn params(&self) -> SpongeParams {
        self.params
    }

    pub fn suffix(&self) -> Suffix {
        self.suffix
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn bits_in_queue(&self) -> usize {
        self.bits_in_queue
    }

    /// Absorb whole bytes.
    pub fn absorb(&mut self, data: &[u8]) -> Result<()> {
        self.absorb_chunked(data, MAX_ABSORB_CHUNK)
    }

    /// Feeds `data` through [`SpongeEngine::absorb_bits`] in pieces of at
    /// most `chunk_bytes`, so the bit count never overflows `usize`.
    fn absorb_chunked(&mut self, data: &[u8], chunk_bytes: usize) -> Result<()> {
        if data.is_empty() {
            return self.absorb_bits(data, 0);
        }
        for chunk in data.chunks(chunk_bytes) {
            self.absorb_bits(chunk, chunk.len() * 8)?;
        }
        Ok(())
    }

    /// Absorb the first `bit_len` bits of `data`. A trailing partial byte
    /// contributes its low `bit_len % 8` bits and must be the last input
    /// before squeezing.
    pub fn absorb_bits(&mut self, data: &[u8], bit_len: usize) -> Result<()> {
        if self.phase == Phase::Squeezing {
            tracing::debug!("absorb rejected: sponge is squeezing");
            return Err(Error::AbsorbWhileSqueezing);
        }
        if self.bits_in_queue % 8 != 0 {
            tracing::debug!(
                bits_in_queue = self.bits_in_queue,
                "absorb rejected: queue ends in a partial byte"
            );
            return Err(Error::UnalignedQueue);
        }
        crate::error::ensure_len(data, bit_len.div_ceil(8))?;

        let rate = self.params.rate;
        let rate_bytes = self.params.rate_bytes();
        let mut i = 0;
        while i < bit_len {
            if self.bits_in_queue == 0 && bit_len - i >= rate {
                // whole blocks go straight from the input into the state
                let whole = (bit_len - i) / rate;
                let blocks = &data[i / 8..i / 8 + whole * rate_bytes];
                for block in blocks.chunks_exact(rate_bytes) {
                    xor_and_permute(&mut self.state, block);
                }
                i += whole * rate;
            } else {
                let mut partial = (bit_len - i).min(rate - self.bits_in_queue);
                let partial_bits = partial % 8;
                partial -= partial_bits;

                let q = self.bits_in_queue / 8;
                self.queue[q..q + partial / 8].copy_from_slice(&data[i / 8..i / 8 + partial / 8]);
                self.bits_in_queue += partial;
                i += partial;
                if self.bits_in_queue == rate {
                    self.absorb_queue();
                }
                if partial_bits > 0 {
                    let mask = (1u8 << partial_bits) - 1;
                    self.queue[self.bits_in_queue / 8] = data[i / 8] & mask;
                    self.bits_in_queue += partial_bits;
                    i += partial_bits;
                }
            }
        }
        Ok(())
    }

    /// Fill `out` with output bytes, padding first if still absorbing.
    pub fn squeeze(&mut self, out: &mut [u8]) {
        if self.phase == Phase::Absorbing {
            self.pad_and_switch();
        }
        let rate = self.params.rate;
        let mut written = 0;
        while written < out.len() {
            if self.bits_available == 0 {
                permute(&mut self.state);
                self.extract();
            }
            let start = (rate - self.bits_available) / 8;
            let n = (self.bits_available / 8).min(out.len() - written);
            out[written..written + n].copy_from_slice(&self.queue[start..start + n]);
            self.bits_available -= n * 8;
            written += n;
        }
    }

    /// Squeeze `bit_len` bits into the front of `out`; `bit_len` must be a
    /// multiple of 8.
    pub fn squeeze_bits(&mut self, out: &mut [u8], bit_len: usize) -> Result<()> {
        if bit_len % 8 != 0 {
            tracing::debug!(bit_len, "squeeze rejected: length not byte aligned");
            return Err(Error::UnalignedOutput { bits: bit_len });
        }
        crate::error::ensure_len(out, bit_len / 8)?;
        self.squeeze(&mut out[..bit_len / 8]);
        Ok(())
    }

    //  -----------------------------------------------------------------------
    //  Internals
    //  -----------------------------------------------------------------------

    fn absorb_queue(&mut self) {
        let rate_bytes = self.params.rate_bytes();
        xor_and_permute(&mut self.state, &self.queue[..rate_bytes]);
        self.bits_in_queue = 0;
    }

    /// Append up to eight bits, LSB first, flushing the queue if it fills.
    /// Bits above the write position in the current byte are always zero.
    fn push_bits(&mut self, bits: u8, count: u8) {
        for k in 0..count {
            let pos = self.bits_in_queue;
            if pos % 8 == 0 {
                self.queue[pos / 8] = 0;
            }
            if (bits >> k) & 1 == 1 {
                self.queue[pos / 8] |= 1 << (pos % 8);
            }
            self.bits_in_queue += 1;
            if self.bits_in_queue == self.params.rate {
                self.absorb_queue();
            }
        }
    }

    fn pad_and_switch(&mut self) {
        self.push_bits(self.suffix.bits, self.suffix.len);

        let rate = self.params.rate;
        let rate_bytes = self.params.rate_bytes();
        let queued = self.bits_in_queue;
        tracing::trace!(rate, bits_in_queue = queued, "switching to squeezing phase");

        if queued + 1 == rate {
            // first pad bit closes this block, the final bit gets its own
            self.queue[queued / 8] |= 1 << (queued % 8);
            self.absorb_queue();
            self.queue[..rate_bytes].fill(0);
        } else {
            self.queue[queued.div_ceil(8)..rate_bytes].fill(0);
            self.queue[queued / 8] |= 1 << (queued % 8);
        }
        self.queue[(rate - 1) / 8] |= 1 << ((rate - 1) % 8);
        self.absorb_queue();

        self.extract();
        self.phase = Phase::Squeezing;
    }

    fn extract(&mut self) {
        if self.params.rate == 1024 {
            // Keccak-288 keeps its own 1024-bit copy path
            self.queue[..128].copy_from_slice(&self.state[..128]);
            self.bits_available = 1024;
        } else {
            let n = self.params.rate / 64 * 8;
            self.queue[..n].copy_from_slice(&self.state[..n]);
            self.bits_available = self.params.rate;
        }
    }
}

/// XOR `block` into the leading bytes of the state, then permute.
fn xor_and_permute(state: &mut [u8; STATE_BYTES], block: &[u8]) {
    for (s, b) in state.iter_mut().zip(block) {
        *s ^= b;
    }
    permute(state);
}

/// Lanes are packed little-endian into the byte state.
fn permute(state: &mut [u8; STATE_BYTES]) {
    let mut lanes: [u64; LANES] = bytemuck::cast(*state);
    for lane in lanes.iter_mut() {
        *lane = u64::from_le(*lane);
    }
    KeccakF1600::apply(&mut lanes);
    for lane in lanes.iter_mut() {
        *lane = lane.to_le();
    }
    *state = bytemuck::cast(lanes);
}
