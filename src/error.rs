//! Error type shared by every fallible operation of the crate.
//!
//! Arithmetic is total and never fails; errors only arise at the edges:
//! profile selection, entropy draws, bounded retry loops, and decoding of
//! caller-supplied bytes. Signature verification failure is not an error,
//! it is a `false` result.

use std::error::Error;
use std::fmt::{Display, Formatter, Result};

/// Errors returned by curve context operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EccError {
    /// The requested field width is not one of 16, 24, 32 or 48 bytes.
    UnsupportedProfile { width: usize },

    /// The entropy source failed on every attempt allowed by the retry
    /// bound. Retrying the whole operation later may succeed.
    EntropyExhausted,

    /// Every key generation attempt produced a degenerate key.
    KeyGenerationFailed,

    /// Every signing attempt produced a degenerate nonce or `r = 0`.
    SigningFailed,

    /// Caller-supplied bytes are malformed: wrong length, wrong tag, a
    /// coordinate out of range, or a point that is not on the curve.
    InvalidEncoding,

    /// The Diffie-Hellman result is the point at infinity.
    InvalidSharedSecret,

    /// The output buffer cannot hold the encoding.
    BufferTooSmall { needed: usize, actual: usize },

    /// The operation needs a keypair and none has been generated or
    /// imported yet.
    MissingKeypair,

    /// A keypair is already committed to this context.
    KeypairAlreadySet,

    /// An imported private scalar is zero or not below the group order.
    InvalidPrivateKey,

    /// The configuration is unusable (a retry bound of zero).
    InvalidConfig,
}

impl Display for EccError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            EccError::UnsupportedProfile { width } => {
                write!(f, "unsupported field width: {width} bytes")
            }
            EccError::EntropyExhausted => f.write_str("entropy source unavailable"),
            EccError::KeyGenerationFailed => f.write_str("key generation retries exhausted"),
            EccError::SigningFailed => f.write_str("signing retries exhausted"),
            EccError::InvalidEncoding => f.write_str("invalid point or scalar encoding"),
            EccError::InvalidSharedSecret => f.write_str("shared secret is the point at infinity"),
            EccError::BufferTooSmall { needed, actual } => {
                write!(f, "buffer too small: need {needed} bytes, got {actual}")
            }
            EccError::MissingKeypair => f.write_str("no keypair in context"),
            EccError::KeypairAlreadySet => f.write_str("keypair already set"),
            EccError::InvalidPrivateKey => f.write_str("private key out of range"),
            EccError::InvalidConfig => f.write_str("invalid configuration"),
        }
    }
}

impl Error for EccError {}
