//! Run-time curve selection and the byte-level API.

use log::debug;
use rand_core::{CryptoRng, RngCore};

use crate::config::EccConfig;
use crate::curves::{Profile, Secp128r1, Secp192r1, Secp256r1, Secp384r1};
use crate::error::EccError;
use crate::keys::{Keypair, ecdh};
use crate::point::{decode_public_key, encode_compressed, encode_uncompressed};
use crate::primitives::Uint;
use crate::signatures::ecdsa;

/// The keypair held by a context, one variant per profile.
enum KeyMaterial {
    Secp128r1(Keypair<2>),
    Secp192r1(Keypair<3>),
    Secp256r1(Keypair<4>),
    Secp384r1(Keypair<6>),
}

/// Runs `$body` with `$curve` naming the curve type and `$n` its limb
/// count, for the curve selected by `$profile`.
macro_rules! for_profile {
    ($profile:expr, |$curve:ident, $n:ident| $body:expr) => {
        match $profile {
            Profile::Secp128r1 => {
                #[allow(dead_code)]
                type $curve = Secp128r1;
                #[allow(dead_code)]
                const $n: usize = 2;
                $body
            }
            Profile::Secp192r1 => {
                #[allow(dead_code)]
                type $curve = Secp192r1;
                #[allow(dead_code)]
                const $n: usize = 3;
                $body
            }
            Profile::Secp256r1 => {
                #[allow(dead_code)]
                type $curve = Secp256r1;
                #[allow(dead_code)]
                const $n: usize = 4;
                $body
            }
            Profile::Secp384r1 => {
                #[allow(dead_code)]
                type $curve = Secp384r1;
                #[allow(dead_code)]
                const $n: usize = 6;
                $body
            }
        }
    };
}

/// Runs `$body` with `$keypair` bound to the held keypair and `$curve`,
/// `$n` naming its curve.
macro_rules! with_keypair {
    ($keys:expr, |$keypair:ident, $curve:ident, $n:ident| $body:expr) => {
        match $keys {
            KeyMaterial::Secp128r1($keypair) => {
                #[allow(dead_code)]
                type $curve = Secp128r1;
                #[allow(dead_code)]
                const $n: usize = 2;
                $body
            }
            KeyMaterial::Secp192r1($keypair) => {
                #[allow(dead_code)]
                type $curve = Secp192r1;
                #[allow(dead_code)]
                const $n: usize = 3;
                $body
            }
            KeyMaterial::Secp256r1($keypair) => {
                #[allow(dead_code)]
                type $curve = Secp256r1;
                #[allow(dead_code)]
                const $n: usize = 4;
                $body
            }
            KeyMaterial::Secp384r1($keypair) => {
                #[allow(dead_code)]
                type $curve = Secp384r1;
                #[allow(dead_code)]
                const $n: usize = 6;
                $body
            }
        }
    };
}

/// A curve context: one profile, one entropy source, at most one keypair.
///
/// The profile is fixed at construction. The keypair is written exactly
/// once, by [`generate_keypair`](Self::generate_keypair) or
/// [`import_private_key`](Self::import_private_key), and never handed out
/// by reference; callers receive serialized copies.
///
/// A context is not meant to be shared between threads without external
/// locking. Independent contexts are fully independent.
///
/// # Example
///
/// ```
/// use curvekit::EccContext;
/// use curvekit::rng::Csprng;
///
/// let mut alice = EccContext::initialize(32, Csprng::from_seed([1; 32])).unwrap();
/// let mut bob = EccContext::initialize(32, Csprng::from_seed([2; 32])).unwrap();
/// alice.generate_keypair().unwrap();
/// bob.generate_keypair().unwrap();
///
/// let mut alice_pub = [0u8; 65];
/// let mut bob_pub = [0u8; 65];
/// alice.export_public_key(&mut alice_pub).unwrap();
/// bob.export_public_key(&mut bob_pub).unwrap();
///
/// let mut k1 = [0u8; 32];
/// let mut k2 = [0u8; 32];
/// alice.shared_secret(&bob_pub, &mut k1).unwrap();
/// bob.shared_secret(&alice_pub, &mut k2).unwrap();
/// assert_eq!(k1, k2);
/// ```
pub struct EccContext<R> {
    profile: Profile,
    config: EccConfig,
    entropy: R,
    keys: Option<KeyMaterial>,
}

impl<R: RngCore + CryptoRng> EccContext<R> {
    /// Creates a context for the curve of the given field width (16, 24,
    /// 32 or 48 bytes) with the default configuration.
    pub fn initialize(width: usize, entropy: R) -> Result<Self, EccError> {
        Self::with_config(width, entropy, EccConfig::default())
    }

    /// Creates a context with an explicit configuration.
    ///
    /// # Errors
    /// - [`EccError::UnsupportedProfile`] for any other width
    /// - [`EccError::InvalidConfig`] for a zero retry bound
    pub fn with_config(width: usize, entropy: R, config: EccConfig) -> Result<Self, EccError> {
        let profile = Profile::from_width(width)?;
        config.validate()?;

        debug!("initialized {profile} context (max_tries = {})", config.max_tries);

        Ok(Self {
            profile,
            config,
            entropy,
            keys: None,
        })
    }

    /// The selected profile.
    pub fn profile(&self) -> Profile {
        self.profile
    }

    /// The active configuration.
    pub fn config(&self) -> &EccConfig {
        &self.config
    }

    /// Returns `true` once a keypair has been generated or imported.
    pub fn has_keypair(&self) -> bool {
        self.keys.is_some()
    }

    fn keys(&self) -> Result<&KeyMaterial, EccError> {
        self.keys.as_ref().ok_or(EccError::MissingKeypair)
    }

    fn ensure_empty(&self) -> Result<(), EccError> {
        if self.keys.is_some() {
            return Err(EccError::KeypairAlreadySet);
        }

        Ok(())
    }

    /// Generates and commits a fresh keypair.
    ///
    /// # Errors
    /// - [`EccError::KeypairAlreadySet`] if the context already has one
    /// - [`EccError::EntropyExhausted`] if the entropy source failed on
    ///   every attempt
    /// - [`EccError::KeyGenerationFailed`] if every drawn scalar was
    ///   degenerate
    pub fn generate_keypair(&mut self) -> Result<(), EccError> {
        self.ensure_empty()?;

        let rng = &mut self.entropy;
        let config = &self.config;
        let keys = for_profile!(self.profile, |C, N| {
            let keypair = Keypair::<N>::generate::<C, R>(rng, config)?;
            wrap(keypair)
        });

        debug!("committed {} keypair", self.profile);
        self.keys = Some(keys);

        Ok(())
    }

    /// Commits the keypair for a raw private scalar: exactly one field
    /// width of big-endian bytes, in `[1, n)`.
    ///
    /// # Errors
    /// - [`EccError::KeypairAlreadySet`] if the context already has one
    /// - [`EccError::InvalidPrivateKey`] for a wrong length or a scalar out
    ///   of range
    pub fn import_private_key(&mut self, bytes: &[u8]) -> Result<(), EccError> {
        self.ensure_empty()?;

        let keys = for_profile!(self.profile, |C, N| {
            let private = Uint::<N>::from_be_slice(bytes).ok_or(EccError::InvalidPrivateKey)?;
            wrap(Keypair::<N>::from_private::<C>(private)?)
        });

        debug!("committed imported {} keypair", self.profile);
        self.keys = Some(keys);

        Ok(())
    }

    /// Writes the uncompressed public key `0x04 || x || y` into `out`.
    ///
    /// Returns the number of bytes written, `1 + 2·width`.
    pub fn export_public_key(&self, out: &mut [u8]) -> Result<usize, EccError> {
        with_keypair!(self.keys()?, |keypair, C, N| {
            encode_uncompressed::<N>(keypair.public(), out)
        })
    }

    /// Writes the compressed public key `(0x02 | parity) || x` into `out`.
    ///
    /// Returns the number of bytes written, `1 + width`.
    pub fn export_compressed_public_key(&self, out: &mut [u8]) -> Result<usize, EccError> {
        with_keypair!(self.keys()?, |keypair, C, N| {
            encode_compressed::<N>(keypair.public(), out)
        })
    }

    /// Writes a copy of the raw private scalar, one field width of
    /// big-endian bytes, into `out`.
    pub fn export_private_key(&self, out: &mut [u8]) -> Result<usize, EccError> {
        with_keypair!(self.keys()?, |keypair, C, N| {
            keypair.private().write_be(out)
        })
    }

    /// Derives the shared secret with a peer's uncompressed public key and
    /// writes its x-coordinate (one field width) into `out`.
    ///
    /// # Errors
    /// - [`EccError::MissingKeypair`], [`EccError::BufferTooSmall`]
    /// - [`EccError::InvalidEncoding`] for a malformed or off-curve peer key
    /// - [`EccError::EntropyExhausted`] if no blinding value could be drawn
    /// - [`EccError::InvalidSharedSecret`] if the result is the point at
    ///   infinity
    pub fn shared_secret(&mut self, peer: &[u8], out: &mut [u8]) -> Result<usize, EccError> {
        let width = self.profile.width();
        let keys = self.keys.as_ref().ok_or(EccError::MissingKeypair)?;
        check_buffer(out, width)?;

        let rng = &mut self.entropy;
        let max_tries = self.config.max_tries;
        with_keypair!(keys, |keypair, C, N| {
            let secret = ecdh::shared_secret::<C, R, N>(keypair, peer, rng, max_tries)?;
            secret.write_be(out)?;
        });

        Ok(width)
    }

    /// Signs a message hash of exactly one field width and writes `r || s`
    /// into `out`.
    ///
    /// Returns the number of bytes written, `2·width`.
    ///
    /// # Errors
    /// - [`EccError::MissingKeypair`], [`EccError::BufferTooSmall`]
    /// - [`EccError::InvalidEncoding`] for a hash of the wrong length
    /// - [`EccError::EntropyExhausted`] if no nonce could be drawn
    /// - [`EccError::SigningFailed`] if every nonce was rejected
    pub fn sign(&mut self, hash: &[u8], out: &mut [u8]) -> Result<usize, EccError> {
        let width = self.profile.width();
        let keys = self.keys.as_ref().ok_or(EccError::MissingKeypair)?;
        check_buffer(out, 2 * width)?;

        let rng = &mut self.entropy;
        let max_tries = self.config.max_tries;
        with_keypair!(keys, |keypair, C, N| {
            let (r, s) = ecdsa::sign::<C, R, N>(keypair, hash, rng, max_tries)?;
            r.write_be(&mut out[..width])?;
            s.write_be(&mut out[width..2 * width])?;
        });

        Ok(2 * width)
    }

    /// Verifies `signature` (`r || s`) over `hash` against `public_key`,
    /// given in either uncompressed or compressed form.
    ///
    /// Does not need a keypair. Any malformed input yields `false`.
    pub fn verify(&self, public_key: &[u8], hash: &[u8], signature: &[u8]) -> bool {
        for_profile!(self.profile, |C, N| {
            match decode_public_key::<C, N>(public_key) {
                Ok(point) => ecdsa::verify::<C, N>(&point, hash, signature),
                Err(_) => false,
            }
        })
    }
}

fn check_buffer(out: &[u8], needed: usize) -> Result<(), EccError> {
    if out.len() < needed {
        return Err(EccError::BufferTooSmall {
            needed,
            actual: out.len(),
        });
    }

    Ok(())
}

/// Lifts a typed keypair into the per-profile enum.
trait IntoKeyMaterial {
    fn into_material(self) -> KeyMaterial;
}

impl IntoKeyMaterial for Keypair<2> {
    fn into_material(self) -> KeyMaterial {
        KeyMaterial::Secp128r1(self)
    }
}

impl IntoKeyMaterial for Keypair<3> {
    fn into_material(self) -> KeyMaterial {
        KeyMaterial::Secp192r1(self)
    }
}

impl IntoKeyMaterial for Keypair<4> {
    fn into_material(self) -> KeyMaterial {
        KeyMaterial::Secp256r1(self)
    }
}

impl IntoKeyMaterial for Keypair<6> {
    fn into_material(self) -> KeyMaterial {
        KeyMaterial::Secp384r1(self)
    }
}

fn wrap<K: IntoKeyMaterial>(keypair: K) -> KeyMaterial {
    keypair.into_material()
}
