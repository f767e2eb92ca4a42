//! Engine configuration.
//!
//! Every randomized loop in the engine (key generation, signing nonces,
//! ECDH blinding draws) is bounded. The bound lives here rather than as a
//! hard-coded constant so that tests can drive the exhaustion paths with a
//! generator that keeps returning degenerate values.

use crate::error::EccError;

/// Default number of attempts for every bounded retry loop.
pub const DEFAULT_MAX_TRIES: u32 = 16;

/// Configuration parameters for a curve context.
///
/// # Recommended Values
///
/// The default of 16 attempts makes exhaustion with a healthy entropy
/// source astronomically unlikely: each attempt fails with probability
/// close to `2^-(field bits)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EccConfig {
    /// Maximum attempts per randomized operation (minimum 1).
    pub max_tries: u32,
}

impl EccConfig {
    pub(crate) fn validate(&self) -> Result<(), EccError> {
        if self.max_tries < 1 {
            return Err(EccError::InvalidConfig);
        }

        Ok(())
    }
}

impl Default for EccConfig {
    /// Default parameters: 16 attempts.
    fn default() -> Self {
        Self {
            max_tries: DEFAULT_MAX_TRIES,
        }
    }
}
