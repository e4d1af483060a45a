// SPDX-License-Identifier: MIT
//! Fixed-output core shared by [`crate::Keccak`] and [`crate::Sha3`]: a sponge
//! plus the algorithm it was configured for. Finalizing squeezes exactly
//! `capacity / 2` bits and resets.

use tinyvec::ArrayVec;

use crate::config::{Algorithm, Family};
use crate::error::{Error, Result, ensure_len};
use crate::sponge::SpongeEngine;

/// Largest fixed digest (512 bits).
pub const MAX_DIGEST_BYTES: usize = 64;

#[derive(Debug, Clone)]
pub(crate) struct FixedSponge {
    engine: SpongeEngine,
    algorithm: Algorithm,
}

impl FixedSponge {
    pub(crate) fn new(family: Family, bits: usize) -> Result<Self> {
        Ok(Self::from_algorithm(Algorithm::new(family, bits)?))
    }

    pub(crate) fn from_algorithm(algorithm: Algorithm) -> Self {
        Self {
            engine: SpongeEngine::new(algorithm.params(), algorithm.family().suffix()),
            algorithm,
        }
    }

    pub(crate) fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub(crate) fn digest_size(&self) -> usize {
        self.algorithm.params().fixed_output_bits() / 8
    }

    pub(crate) fn byte_length(&self) -> usize {
        self.algorithm.params().rate_bytes()
    }

    pub(crate) fn update(&mut self, input: &[u8]) -> Result<()> {
        self.engine.absorb(input)
    }

    pub(crate) fn finalize_into(&mut self, out: &mut [u8]) -> Result<usize> {
        let n = self.digest_size();
        ensure_len(out, n)?;
        self.engine.squeeze(&mut out[..n]);
        self.engine.reset();
        Ok(n)
    }

    pub(crate) fn finalize_bits_into(
        &mut self,
        out: &mut [u8],
        partial_byte: u8,
        partial_bits: u8,
    ) -> Result<usize> {
        if partial_bits > 7 {
            tracing::debug!(partial_bits, "finalize rejected: more than 7 trailing bits");
            return Err(Error::PartialBits(partial_bits));
        }
        ensure_len(out, self.digest_size())?;
        if partial_bits > 0 {
            self.engine
                .absorb_bits(&[partial_byte], usize::from(partial_bits))?;
        }
        self.finalize_into(out)
    }

    pub(crate) fn finalize(&mut self) -> ArrayVec<[u8; MAX_DIGEST_BYTES]> {
        let mut out = ArrayVec::new();
        out.resize(self.digest_size(), 0);
        self.engine.squeeze(&mut out);
        self.engine.reset();
        out
    }

    pub(crate) fn reset(&mut self) {
        self.engine.reset();
    }
}
