// SPDX-License-Identifier: MIT
//! # `keccak-sponge`
//!
//! Rust implementation of the **Keccak-f[1600]** sponge and the three digest
//! families built on it: FIPS 202 **SHA3-{224,256,384,512}**, the original
//! **Keccak** hashes, and the **SHAKE128/256** extendable-output functions.
//!
//! ## High-level architecture
//! * **Permutation core** – the 24-round theta/rho/pi/chi/iota transform
//!   ([`KeccakF1600`]); round constants and rotation offsets are derived once
//!   per process.
//! * **Sponge engine** – bit-granular absorb / pad / squeeze state machine
//!   ([`SpongeEngine`]) parameterized by `(rate, capacity)` and a domain
//!   suffix.
//! * **Variants** – [`Keccak`], [`Sha3`] and [`Shake`] each own an engine
//!   configured for their [`Algorithm`]; capabilities are exposed through the
//!   [`FixedDigest`] and [`ExtendableOutput`] traits.
//!
//! ```
//! use keccak_sponge::Sha3;
//!
//! let mut hasher = Sha3::new(256)?;
//! hasher.update(&[0x00, 0x01, 0x02, 0x03])?;
//! let digest = hasher.finalize();
//! assert_eq!(digest.len(), 32);
//! assert_eq!(digest[0], 0x33);
//! # Ok::<(), keccak_sponge::Error>(())
//! ```

//  ---------------------------------------------------------------------------
//  Capability traits
//  ---------------------------------------------------------------------------

/// Incremental digest with a fixed default output length.
///
/// `finalize_into` writes [`FixedDigest::digest_size`] bytes to the front of
/// `out` and returns the instance to a fresh absorbing state.
pub trait FixedDigest {
    fn algorithm_name(&self) -> String;

    /// Output length in bytes.
    fn digest_size(&self) -> usize;

    /// Block (rate) length in bytes.
    fn byte_length(&self) -> usize;

    fn update(&mut self, input: &[u8]) -> Result<()>;

    fn update_byte(&mut self, input: u8) -> Result<()> {
        self.update(&[input])
    }

    fn finalize_into(&mut self, out: &mut [u8]) -> Result<usize>;

    fn reset(&mut self);
}

/// Caller-chosen output length.
pub trait ExtendableOutput {
    /// Next `out.len()` bytes of the output stream, no reset.
    fn output_into(&mut self, out: &mut [u8]) -> usize;

    /// Fill `out`, then reset.
    fn finalize_xof_into(&mut self, out: &mut [u8]) -> usize;
}

/// `FixedDigest` and `digest::Reset` forwarding to a variant's inherent methods.
macro_rules! impl_fixed_digest {
    ($t:ty) => {
        impl $crate::FixedDigest for $t {
            fn algorithm_name(&self) -> String {
                <$t>::algorithm_name(self)
            }

            fn digest_size(&self) -> usize {
                <$t>::digest_size(self)
            }

            fn byte_length(&self) -> usize {
                <$t>::byte_length(self)
            }

            fn update(&mut self, input: &[u8]) -> $crate::Result<()> {
                <$t>::update(self, input)
            }

            fn finalize_into(&mut self, out: &mut [u8]) -> $crate::Result<usize> {
                <$t>::finalize_into(self, out)
            }

            fn reset(&mut self) {
                <$t>::reset(self)
            }
        }

        impl digest::Reset for $t {
            fn reset(&mut self) {
                <$t>::reset(self)
            }
        }
    };
}

//  ---------------------------------------------------------------------------
//  Modules
//  ---------------------------------------------------------------------------

pub mod config;
pub mod error;
mod fixed;
mod keccak;
pub mod permutation;
mod sha3;
mod shake;
pub mod sponge;

pub use self::config::{Algorithm, Family, Hasher};
pub use self::error::{Error, ErrorKind, Result};
pub use self::fixed::MAX_DIGEST_BYTES;
pub use self::keccak::Keccak;
pub use self::permutation::KeccakF1600;
pub use self::sha3::Sha3;
pub use self::shake::{Shake, ShakeReader};
pub use self::sponge::{Phase, SpongeEngine, SpongeParams, Suffix};
