// SPDX-License-Identifier: MIT
//! Error type shared by the sponge engine and the digest variants.
//!
//! Every failure is a caller mistake that is detected before any state is
//! touched, so an `Err` always leaves the instance exactly as it was.

use crate::config::Family;

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Unsupported bit length, bad rate/capacity or a misaligned length.
    Configuration,
    /// Operation not allowed in the current sponge phase.
    State,
    /// Caller-provided buffer is too small.
    Buffer,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("'bitLength' {bits} not supported for {family}")]
    UnsupportedBitLength { family: Family, bits: usize },
    #[error("invalid sponge parameters: rate {rate}, capacity {capacity}")]
    InvalidParameters { rate: usize, capacity: usize },
    #[error("output length of {bits} bits is not a multiple of 8")]
    UnalignedOutput { bits: usize },
    #[error("'partialBits' must be in the range [0,7], got {0}")]
    PartialBits(u8),
    #[error("unknown algorithm name: {0:?}")]
    UnknownAlgorithm(String),
    #[error("attempt to absorb while squeezing")]
    AbsorbWhileSqueezing,
    #[error("attempt to absorb with odd length queue")]
    UnalignedQueue,
    #[error("buffer too small: need {needed} bytes, have {available}")]
    BufferTooSmall { needed: usize, available: usize },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::UnsupportedBitLength { .. }
            | Error::InvalidParameters { .. }
            | Error::UnalignedOutput { .. }
            | Error::PartialBits(_)
            | Error::UnknownAlgorithm(_) => ErrorKind::Configuration,
            Error::AbsorbWhileSqueezing | Error::UnalignedQueue => ErrorKind::State,
            Error::BufferTooSmall { .. } => ErrorKind::Buffer,
        }
    }
}

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Fails with [`Error::BufferTooSmall`] unless `buf` holds at least `needed` bytes.
pub(crate) fn ensure_len(buf: &[u8], needed: usize) -> Result<()> {
    if buf.len() < needed {
        tracing::debug!(needed, available = buf.len(), "output buffer too small");
        return Err(Error::BufferTooSmall {
            needed,
            available: buf.len(),
        });
    }
    Ok(())
}
