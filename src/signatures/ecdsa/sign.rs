use rand_core::{CryptoRng, RngCore};
use zeroize::Zeroize;

use crate::arithmetic::{mod_add, mod_inv, mod_mul};
use crate::curves::PrimeCurve;
use crate::error::EccError;
use crate::keys::Keypair;
use crate::keys::keypair::reduce_once;
use crate::point::scalar_mul;
use crate::primitives::Uint;
use crate::rng::with_retries;
use crate::signatures::ecdsa::hash_to_scalar;

/// Signs `hash` with the keypair's private scalar.
///
/// ## Algorithm
///
/// For each attempt a nonce `k` is drawn (zero is rejected) and brought
/// below `n`. With `R = k·G` and `r = R.x mod n`, the attempt is rejected
/// when `r = 0`; otherwise
///
/// `s = (e + r·d) · k⁻¹ mod n`
///
/// where `e` is the hash as an integer. An attempt that lands on `s = 0`
/// is rejected too, since such a signature could never verify.
///
/// ## Returns
///
/// `(r, s)`, both in `[1, n)`.
///
/// ## Errors
///
/// - [`EccError::InvalidEncoding`] if `hash` is not exactly one field
///   width long
/// - [`EccError::EntropyExhausted`] if no nonce draw succeeded
/// - [`EccError::SigningFailed`] if every drawn nonce was rejected
pub fn sign<C, R, const N: usize>(
    keypair: &Keypair<N>,
    hash: &[u8],
    rng: &mut R,
    max_tries: u32,
) -> Result<(Uint<N>, Uint<N>), EccError>
where
    C: PrimeCurve<N>,
    R: RngCore + CryptoRng,
{
    let e = hash_to_scalar(hash, &C::ORDER).ok_or(EccError::InvalidEncoding)?;
    let d = keypair.private();

    with_retries(
        rng,
        max_tries,
        "ecdsa nonce",
        EccError::SigningFailed,
        |drawn: &Uint<N>| {
            if drawn.is_zero() {
                return None;
            }

            let mut k = reduce_once(drawn, &C::ORDER);
            let point = scalar_mul::<C, N>(&C::G, &k, None);
            let r = reduce_once(&point.x, &C::ORDER);
            if r.is_zero() {
                k.zeroize();
                return None;
            }

            let mut k_inv = mod_inv(&k, &C::ORDER);
            let mut rd = mod_mul(&r, d, &C::ORDER);
            let sum = mod_add(&e, &rd, &C::ORDER);
            let s = mod_mul(&sum, &k_inv, &C::ORDER);

            k.zeroize();
            k_inv.zeroize();
            rd.zeroize();

            if s.is_zero() {
                return None;
            }

            Some((r, s))
        },
    )
}
