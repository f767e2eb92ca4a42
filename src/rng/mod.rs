//! Random number generation
//!
//! The curve engine consumes randomness through the `rand_core` traits:
//! any `RngCore + CryptoRng` works, and a failed `try_fill_bytes` is
//! treated as a recoverable entropy failure subject to the retry bound.
//!
//! Two generators ship with the crate:
//! - [`OsEntropy`]: direct access to the operating system source
//! - [`Csprng`]: a ChaCha20 DRBG with forward-secure rekeying, seeded
//!   from the OS or from an explicit seed

pub(crate) mod chacha20;
mod csprng;
mod entropy;

pub use csprng::Csprng;
pub use entropy::OsEntropy;

use log::{trace, warn};
use rand_core::{CryptoRng, RngCore};
use zeroize::{Zeroize, Zeroizing};

use crate::error::EccError;
use crate::primitives::Uint;

/// Draws a fresh `Uint<N>` from `rng` with a single full-width request,
/// read as big-endian.
pub(crate) fn random_uint<R: RngCore + CryptoRng, const N: usize>(
    rng: &mut R,
) -> Result<Uint<N>, rand_core::Error> {
    let mut bytes = Zeroizing::new(vec![0u8; Uint::<N>::BYTES]);
    rng.try_fill_bytes(&mut bytes)?;

    // the length matches by construction
    Ok(Uint::from_be_slice(&bytes).unwrap_or(Uint::ZERO))
}

/// Runs a bounded draw-and-test loop.
///
/// Up to `max_tries` times a value is drawn from `rng` and handed to
/// `attempt`; the first `Some` wins. The drawn value is wiped after every
/// attempt. When the bound runs out, the error says whether the entropy
/// source never delivered ([`EccError::EntropyExhausted`]) or delivered
/// only rejected values (`rejected`).
pub(crate) fn with_retries<R, T, F, const N: usize>(
    rng: &mut R,
    max_tries: u32,
    what: &str,
    rejected: EccError,
    mut attempt: F,
) -> Result<T, EccError>
where
    R: RngCore + CryptoRng,
    F: FnMut(&Uint<N>) -> Option<T>,
{
    let mut delivered = false;

    for tries in 1..=max_tries {
        let mut value = match random_uint::<R, N>(rng) {
            Ok(value) => value,
            Err(err) => {
                trace!("{what}: entropy draw {tries} failed: {err}");
                continue;
            }
        };
        delivered = true;

        let outcome = attempt(&value);
        value.zeroize();

        match outcome {
            Some(result) => return Ok(result),
            None => trace!("{what}: attempt {tries} rejected"),
        }
    }

    warn!("{what}: gave up after {max_tries} attempts");
    if delivered {
        Err(rejected)
    } else {
        Err(EccError::EntropyExhausted)
    }
}
