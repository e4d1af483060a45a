// SPDX-License-Identifier: MIT
//! FIPS 202 SHA3-224/256/384/512.

use tinyvec::ArrayVec;

use crate::config::{Algorithm, Family};
use crate::error::Result;
use crate::fixed::{FixedSponge, MAX_DIGEST_BYTES};

/// SHA3 digest: the Keccak sponge with the `01` domain suffix.
#[derive(Debug, Clone)]
pub struct Sha3(FixedSponge);

impl Default for Sha3 {
    /// SHA3-256.
    fn default() -> Self {
        Self::from_algorithm(Algorithm::SHA3_256)
    }
}

impl Sha3 {
    /// Fails with [`crate::Error::UnsupportedBitLength`] unless `bits` is
    /// 224, 256, 384 or 512.
    pub fn new(bits: usize) -> Result<Self> {
        FixedSponge::new(Family::Sha3, bits).map(Self)
    }

    pub(crate) fn from_algorithm(algorithm: Algorithm) -> Self {
        Self(FixedSponge::from_algorithm(algorithm))
    }

    pub fn digest(bits: usize, data: &[u8]) -> Result<ArrayVec<[u8; MAX_DIGEST_BYTES]>> {
        let mut hasher = Self::new(bits)?;
        hasher.update(data)?;
        Ok(hasher.finalize())
    }

    pub fn algorithm(&self) -> Algorithm {
        self.0.algorithm()
    }

    pub fn algorithm_name(&self) -> String {
        self.0.algorithm().name()
    }

    pub fn digest_size(&self) -> usize {
        self.0.digest_size()
    }

    pub fn byte_length(&self) -> usize {
        self.0.byte_length()
    }

    pub fn update(&mut self, input: &[u8]) -> Result<()> {
        self.0.update(input)
    }

    pub fn update_byte(&mut self, input: u8) -> Result<()> {
        self.0.update(&[input])
    }

    pub fn finalize_into(&mut self, out: &mut [u8]) -> Result<usize> {
        self.0.finalize_into(out)
    }

    /// The message tail bits go in before the `01` suffix.
    pub fn finalize_bits_into(
        &mut self,
        out: &mut [u8],
        partial_byte: u8,
        partial_bits: u8,
    ) -> Result<usize> {
        self.0.finalize_bits_into(out, partial_byte, partial_bits)
    }

    pub fn finalize(&mut self) -> ArrayVec<[u8; MAX_DIGEST_BYTES]> {
        self.0.finalize()
    }

    pub fn reset(&mut self) {
        self.0.reset()
    }
}

impl_fixed_digest!(Sha3);
