// SPDX-License-Identifier: MIT
//! SHAKE128 / SHAKE256 extendable-output functions.
//!
//! Output can be drawn incrementally with [`Shake::output_into`]; once output
//! has started, further input is rejected until the instance is reset (which
//! [`Shake::finalize_xof_into`] does on its own).

use digest::XofReader;

use crate::config::{Algorithm, Family};
use crate::error::{Error, Result, ensure_len};
use crate::sponge::{Phase, SpongeEngine};

#[derive(Debug, Clone)]
pub struct Shake {
    engine: SpongeEngine,
    algorithm: Algorithm,
}

impl Default for Shake {
    /// SHAKE128.
    fn default() -> Self {
        Self::from_algorithm(Algorithm::SHAKE128)
    }
}

impl Shake {
    /// `bits` is the security strength: 128 or 256.
    pub fn new(bits: usize) -> Result<Self> {
        Ok(Self::from_algorithm(Algorithm::new(Family::Shake, bits)?))
    }

    pub(crate) fn from_algorithm(algorithm: Algorithm) -> Self {
        Self {
            engine: SpongeEngine::new(algorithm.params(), algorithm.family().suffix()),
            algorithm,
        }
    }

    /// One-shot: absorb `data` and fill all of `out`.
    pub fn digest_xof(bits: usize, data: &[u8], out: &mut [u8]) -> Result<()> {
        let mut xof = Self::new(bits)?;
        xof.update(data)?;
        xof.output_into(out);
        Ok(())
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn algorithm_name(&self) -> String {
        self.algorithm.name()
    }

    /// Default output length: 16 bytes for SHAKE128, 32 for SHAKE256.
    pub fn digest_size(&self) -> usize {
        self.algorithm.params().fixed_output_bits() / 8
    }

    pub fn byte_length(&self) -> usize {
        self.algorithm.params().rate_bytes()
    }

    /// True once output has been drawn.
    pub fn is_squeezing(&self) -> bool {
        self.engine.phase() == Phase::Squeezing
    }

    /// Fails with [`Error::AbsorbWhileSqueezing`] after output has started.
    pub fn update(&mut self, input: &[u8]) -> Result<()> {
        self.engine.absorb(input)
    }

    pub fn update_byte(&mut self, input: u8) -> Result<()> {
        self.engine.absorb(&[input])
    }

    /// Fill `out` with the next `out.len()` output bytes without resetting.
    pub fn output_into(&mut self, out: &mut [u8]) -> usize {
        self.engine.squeeze(out);
        out.len()
    }

    /// Fill `out` and reset.
    pub fn finalize_xof_into(&mut self, out: &mut [u8]) -> usize {
        let n = self.output_into(out);
        self.engine.reset();
        n
    }

    /// Write [`Shake::digest_size`] bytes and reset.
    pub fn finalize_into(&mut self, out: &mut [u8]) -> Result<usize> {
        let n = self.digest_size();
        ensure_len(out, n)?;
        Ok(self.finalize_xof_into(&mut out[..n]))
    }

    /// Absorb the low `partial_bits` bits of `partial_byte`, then fill all
    /// of `out` and reset.
    pub fn finalize_bits_into(
        &mut self,
        out: &mut [u8],
        partial_byte: u8,
        partial_bits: u8,
    ) -> Result<usize> {
        if partial_bits > 7 {
            tracing::debug!(partial_bits, "finalize rejected: more than 7 trailing bits");
            return Err(Error::PartialBits(partial_bits));
        }
        if partial_bits > 0 {
            self.engine
                .absorb_bits(&[partial_byte], usize::from(partial_bits))?;
        }
        Ok(self.finalize_xof_into(out))
    }

    /// Consume the hasher into a reader over its output stream.
    pub fn finalize_xof(self) -> ShakeReader {
        ShakeReader {
            engine: self.engine,
        }
    }

    pub fn reset(&mut self) {
        self.engine.reset();
    }
}

impl_fixed_digest!(Shake);

impl crate::ExtendableOutput for Shake {
    fn output_into(&mut self, out: &mut [u8]) -> usize {
        Shake::output_into(self, out)
    }

    fn finalize_xof_into(&mut self, out: &mut [u8]) -> usize {
        Shake::finalize_xof_into(self, out)
    }
}

/// Output stream of a finalized [`Shake`].
#[derive(Debug, Clone)]
pub struct ShakeReader {
    engine: SpongeEngine,
}

impl XofReader for ShakeReader {
    fn read(&mut self, buffer: &mut [u8]) {
        self.engine.squeeze(buffer);
    }
}
