// SPDX-License-Identifier: MIT
//! Algorithm selection: which family, which output length, and the sponge
//! parameters and domain suffix that follow from the choice.
//!
//! [`Algorithm`] is the validated form. It parses from the usual names
//! (`"SHA3-256"`, `"Keccak-288"`, `"SHAKE128"`) and (de)serializes as
//! `{ "family": "sha3", "bits": 256 }`, so a hash choice can live in a config
//! file and be turned into a ready [`Hasher`].

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::sponge::{SpongeParams, Suffix};
use crate::{FixedDigest, Keccak, Sha3, Shake};

/// `(bit length, rate, capacity)` shared by all three families.
const PARAMETER_TABLE: [(usize, usize, usize); 6] = [
    (128, 1344, 256),
    (224, 1152, 448),
    (256, 1088, 512),
    (288, 1024, 576),
    (384, 832, 768),
    (512, 576, 1024),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    Keccak,
    Sha3,
    Shake,
}

impl Family {
    /// Output lengths, in bits, this family may be built with.
    pub const fn bit_lengths(self) -> &'static [usize] {
        match self {
            Family::Keccak => &[128, 224, 256, 288, 384, 512],
            Family::Sha3 => &[224, 256, 384, 512],
            Family::Shake => &[128, 256],
        }
    }

    pub const fn suffix(self) -> Suffix {
        match self {
            Family::Keccak => Suffix::NONE,
            Family::Sha3 => Suffix::SHA3,
            Family::Shake => Suffix::SHAKE,
        }
    }

    pub const fn is_extendable(self) -> bool {
        matches!(self, Family::Shake)
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Family::Keccak => "Keccak",
            Family::Sha3 => "SHA-3",
            Family::Shake => "SHAKE",
        })
    }
}

//  ---------------------------------------------------------------------------
//  Algorithm
//  ---------------------------------------------------------------------------

/// A family together with a supported output length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawAlgorithm", into = "RawAlgorithm")]
pub struct Algorithm {
    family: Family,
    bits: usize,
    params: SpongeParams,
}

#[derive(Serialize, Deserialize)]
struct RawAlgorithm {
    family: Family,
    bits: usize,
}

impl TryFrom<RawAlgorithm> for Algorithm {
    type Error = Error;

    fn try_from(raw: RawAlgorithm) -> Result<Self> {
        Algorithm::new(raw.family, raw.bits)
    }
}

impl From<Algorithm> for RawAlgorithm {
    fn from(alg: Algorithm) -> Self {
        RawAlgorithm {
            family: alg.family,
            bits: alg.bits,
        }
    }
}

impl Algorithm {
    pub const KECCAK_256: Algorithm = Algorithm::from_table(Family::Keccak, 2);
    pub const KECCAK_288: Algorithm = Algorithm::from_table(Family::Keccak, 3);
    pub const SHA3_224: Algorithm = Algorithm::from_table(Family::Sha3, 1);
    pub const SHA3_256: Algorithm = Algorithm::from_table(Family::Sha3, 2);
    pub const SHA3_384: Algorithm = Algorithm::from_table(Family::Sha3, 4);
    pub const SHA3_512: Algorithm = Algorithm::from_table(Family::Sha3, 5);
    pub const SHAKE128: Algorithm = Algorithm::from_table(Family::Shake, 0);
    pub const SHAKE256: Algorithm = Algorithm::from_table(Family::Shake, 2);

    const fn from_table(family: Family, row: usize) -> Self {
        let (bits, rate, capacity) = PARAMETER_TABLE[row];
        Self {
            family,
            bits,
            params: SpongeParams::from_table(rate, capacity),
        }
    }

    pub fn new(family: Family, bits: usize) -> Result<Self> {
        let entry = PARAMETER_TABLE.iter().find(|(b, _, _)| *b == bits);
        let (rate, capacity) = match entry {
            Some(&(_, rate, capacity)) if family.bit_lengths().contains(&bits) => {
                (rate, capacity)
            }
            _ => {
                tracing::debug!(%family, bits, "unsupported bit length");
                return Err(Error::UnsupportedBitLength { family, bits });
            }
        };
        Ok(Self {
            family,
            bits,
            params: SpongeParams::new(rate, capacity)?,
        })
    }

    pub fn family(&self) -> Family {
        self.family
    }

    pub fn bits(&self) -> usize {
        self.bits
    }

    pub fn params(&self) -> SpongeParams {
        self.params
    }

    /// `"Keccak-288"`, `"SHA3-256"` or `"SHAKE128"`.
    pub fn name(&self) -> String {
        match self.family {
            Family::Keccak => format!("Keccak-{}", self.bits),
            Family::Sha3 => format!("SHA3-{}", self.bits),
            Family::Shake => format!("SHAKE{}", self.bits),
        }
    }

    /// A fresh hasher for this algorithm.
    pub fn hasher(&self) -> Hasher {
        match self.family {
            Family::Keccak => Hasher::Keccak(Keccak::from_algorithm(*self)),
            Family::Sha3 => Hasher::Sha3(Sha3::from_algorithm(*self)),
            Family::Shake => Hasher::Shake(Shake::from_algorithm(*self)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let upper = s.trim().to_ascii_uppercase();
        let (family, rest) = if let Some(rest) = upper.strip_prefix("SHA3-") {
            (Family::Sha3, rest)
        } else if let Some(rest) = upper.strip_prefix("KECCAK-") {
            (Family::Keccak, rest)
        } else if let Some(rest) = upper.strip_prefix("SHAKE") {
            (Family::Shake, rest)
        } else {
            tracing::debug!(name = s, "unknown algorithm family");
            return Err(Error::UnknownAlgorithm(s.to_owned()));
        };
        let bits = rest.parse::<usize>().map_err(|_| {
            tracing::debug!(name = s, "unparsable algorithm bit length");
            Error::UnknownAlgorithm(s.to_owned())
        })?;
        Algorithm::new(family, bits)
    }
}

//  ---------------------------------------------------------------------------
//  Hasher
//  ---------------------------------------------------------------------------

/// Any of the three variants, chosen at run time.
#[derive(Debug, Clone)]
pub enum Hasher {
    Keccak(Keccak),
    Sha3(Sha3),
    Shake(Shake),
}

impl Hasher {
    /// The extendable-output view, if this is a SHAKE hasher.
    pub fn as_xof(&mut self) -> Option<&mut Shake> {
        match self {
            Hasher::Shake(shake) => Some(shake),
            _ => None,
        }
    }
}

impl FixedDigest for Hasher {
    fn algorithm_name(&self) -> String {
        match self {
            Hasher::Keccak(h) => h.algorithm_name(),
            Hasher::Sha3(h) => h.algorithm_name(),
            Hasher::Shake(h) => h.algorithm_name(),
        }
    }

    fn digest_size(&self) -> usize {
        match self {
            Hasher::Keccak(h) => h.digest_size(),
            Hasher::Sha3(h) => h.digest_size(),
            Hasher::Shake(h) => h.digest_size(),
        }
    }

    fn byte_length(&self) -> usize {
        match self {
            Hasher::Keccak(h) => h.byte_length(),
            Hasher::Sha3(h) => h.byte_length(),
            Hasher::Shake(h) => h.byte_length(),
        }
    }

    fn update(&mut self, input: &[u8]) -> Result<()> {
        match self {
            Hasher::Keccak(h) => h.update(input),
            Hasher::Sha3(h) => h.update(input),
            Hasher::Shake(h) => h.update(input),
        }
    }

    fn finalize_into(&mut self, out: &mut [u8]) -> Result<usize> {
        match self {
            Hasher::Keccak(h) => h.finalize_into(out),
            Hasher::Sha3(h) => h.finalize_into(out),
            Hasher::Shake(h) => h.finalize_into(out),
        }
    }

    fn reset(&mut self) {
        match self {
            Hasher::Keccak(h) => h.reset(),
            Hasher::Sha3(h) => h.reset(),
            Hasher::Shake(h) => h.reset(),
        }
    }
}
