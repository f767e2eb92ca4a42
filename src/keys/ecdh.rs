//! Elliptic-curve Diffie-Hellman.

use log::warn;
use rand_core::{CryptoRng, RngCore};
use zeroize::Zeroize;

use crate::curves::PrimeCurve;
use crate::error::EccError;
use crate::keys::Keypair;
use crate::keys::keypair::reduce_once;
use crate::point::{decode_uncompressed, scalar_mul};
use crate::primitives::Uint;
use crate::rng::with_retries;

/// Computes the shared secret `x(d · Q)` for an uncompressed peer key.
///
/// ## Inputs
///
/// - `keypair`: the local keypair; only its private scalar is used.
/// - `peer`: `0x04 || x || y`, validated against curve `C`.
/// - `rng`: source for the projective blinding value.
/// - `max_tries`: bound on blinding draws.
///
/// ## Algorithm
///
/// A random non-zero `Z < p` is drawn and the ladder starts from the peer
/// point's Jacobian representative with that `Z`. The affine result does
/// not depend on it.
///
/// ## Errors
///
/// - [`EccError::InvalidEncoding`] for a malformed or off-curve peer key
/// - [`EccError::EntropyExhausted`] if no usable blinding value was drawn
/// - [`EccError::InvalidSharedSecret`] if the result is the point at
///   infinity
pub fn shared_secret<C, R, const N: usize>(
    keypair: &Keypair<N>,
    peer: &[u8],
    rng: &mut R,
    max_tries: u32,
) -> Result<Uint<N>, EccError>
where
    C: PrimeCurve<N>,
    R: RngCore + CryptoRng,
{
    let point = decode_uncompressed::<C, N>(peer)?;

    let shared = with_retries(
        rng,
        max_tries,
        "ecdh blind",
        EccError::EntropyExhausted,
        |drawn: &Uint<N>| {
            let mut blind = reduce_once(drawn, &C::P);
            if blind.is_zero() {
                return None;
            }

            let shared = scalar_mul::<C, N>(&point, keypair.private(), Some(&blind));
            blind.zeroize();

            Some(shared)
        },
    )?;

    if shared.is_infinity() {
        warn!("ecdh on {} produced the point at infinity", C::PROFILE);
        return Err(EccError::InvalidSharedSecret);
    }

    Ok(shared.x)
}
