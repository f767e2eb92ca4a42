//! Private scalar and public point pairs.

use std::fmt::{Debug, Formatter};

use log::trace;
use rand_core::{CryptoRng, RngCore};
use zeroize::Zeroize;

use crate::config::EccConfig;
use crate::curves::PrimeCurve;
use crate::error::EccError;
use crate::point::{AffinePoint, scalar_mul};
use crate::primitives::Uint;
use crate::rng::with_retries;

/// A private scalar `d ∈ [1, n)` together with its public point `d·G`.
///
/// The scalar is wiped when the keypair is dropped and is never printed
/// by `Debug`.
#[derive(Clone)]
pub struct Keypair<const N: usize> {
    private: Uint<N>,
    public: AffinePoint<N>,
}

impl<const N: usize> Keypair<N> {
    /// Generates a keypair on curve `C`.
    ///
    /// Each attempt draws a full-width scalar, rejects zero, brings it
    /// below `n` with one conditional subtraction and rejects it again if
    /// `d·G` is the point at infinity. One subtraction is enough because
    /// every supported `n` exceeds half of `2^(64·N)`.
    ///
    /// # Errors
    /// - [`EccError::EntropyExhausted`] if no draw succeeded
    /// - [`EccError::KeyGenerationFailed`] if every drawn scalar was
    ///   rejected
    pub fn generate<C, R>(rng: &mut R, config: &EccConfig) -> Result<Self, EccError>
    where
        C: PrimeCurve<N>,
        R: RngCore + CryptoRng,
    {
        config.validate()?;

        with_retries(
            rng,
            config.max_tries,
            "keygen",
            EccError::KeyGenerationFailed,
            |drawn: &Uint<N>| {
                if drawn.is_zero() {
                    return None;
                }

                let mut private = reduce_once(drawn, &C::ORDER);
                let public = scalar_mul::<C, N>(&C::G, &private, None);
                if public.is_infinity() {
                    private.zeroize();
                    return None;
                }

                Some(Self { private, public })
            },
        )
    }

    /// Builds the keypair for a known private scalar.
    ///
    /// # Errors
    /// [`EccError::InvalidPrivateKey`] unless `1 ≤ private < n`.
    pub fn from_private<C: PrimeCurve<N>>(private: Uint<N>) -> Result<Self, EccError> {
        if private.is_zero() || private >= C::ORDER {
            return Err(EccError::InvalidPrivateKey);
        }

        let public = scalar_mul::<C, N>(&C::G, &private, None);
        trace!("imported {} private key", C::PROFILE);

        Ok(Self { private, public })
    }

    /// The public point.
    pub fn public(&self) -> &AffinePoint<N> {
        &self.public
    }

    pub(crate) fn private(&self) -> &Uint<N> {
        &self.private
    }
}

/// Subtracts `modulus` once if `value` is not below it.
pub(crate) fn reduce_once<const N: usize>(value: &Uint<N>, modulus: &Uint<N>) -> Uint<N> {
    if value >= modulus {
        value.sub_with_borrow(modulus).0
    } else {
        *value
    }
}

impl<const N: usize> Debug for Keypair<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Keypair")
            .field("public", &self.public)
            .finish_non_exhaustive()
    }
}

impl<const N: usize> Drop for Keypair<N> {
    fn drop(&mut self) {
        self.private.zeroize();
    }
}
