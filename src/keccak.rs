// SPDX-License-Identifier: MIT
//! Raw Keccak digests (the pre-FIPS 202 padding, no domain suffix), as used by
//! Ethereum's Keccak-256 among others.

use tinyvec::ArrayVec;

use crate::config::{Algorithm, Family};
use crate::error::Result;
use crate::fixed::{FixedSponge, MAX_DIGEST_BYTES};

/// Keccak with one of the output lengths 128, 224, 256, 288, 384 or 512.
#[derive(Debug, Clone)]
pub struct Keccak(FixedSponge);

impl Default for Keccak {
    /// Keccak-288.
    fn default() -> Self {
        Self::from_algorithm(Algorithm::KECCAK_288)
    }
}

impl Keccak {
    pub fn new(bits: usize) -> Result<Self> {
        FixedSponge::new(Family::Keccak, bits).map(Self)
    }

    pub(crate) fn from_algorithm(algorithm: Algorithm) -> Self {
        Self(FixedSponge::from_algorithm(algorithm))
    }

    /// One-shot digest of `data`.
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

    /// Write the digest to the front of `out` and reset.
    pub fn finalize_into(&mut self, out: &mut [u8]) -> Result<usize> {
        self.0.finalize_into(out)
    }

    /// Like [`Keccak::finalize_into`], but first absorbs the low
    /// `partial_bits` (0..=7) bits of `partial_byte`.
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

impl_fixed_digest!(Keccak);

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{b:02x}")).collect()
    }

    #[test]
    fn keccak_256_empty() {
        let out = Keccak::digest(256, b"").unwrap();
        assert_eq!(
            hex(&out),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn default_is_keccak_288() {
        let k = Keccak::default();
        assert_eq!(k.algorithm_name(), "Keccak-288");
        assert_eq!(k.digest_size(), 36);
        assert_eq!(k.byte_length(), 128);
    }

    #[test]
    fn supported_sizes() {
        for (bits, size, block) in [
            (128, 16, 168),
            (224, 28, 144),
            (256, 32, 136),
            (288, 36, 128),
            (384, 48, 104),
            (512, 64, 72),
        ] {
            let k = Keccak::new(bits).unwrap();
            assert_eq!(k.digest_size(), size);
            assert_eq!(k.byte_length(), block);
        }
        assert!(Keccak::new(160).is_err());
    }

    #[test]
    fn finalize_resets() {
        let mut k = Keccak::new(256).unwrap();
        k.update(b"first").unwrap();
        let _ = k.finalize();
        let empty = k.finalize();
        assert_eq!(empty, Keccak::digest(256, b"").unwrap());
    }
}
