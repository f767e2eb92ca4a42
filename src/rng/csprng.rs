//! ChaCha20-based CSPRNG
//!
//! A deterministic random bit generator: a 256-bit key is expanded with the
//! ChaCha20 block function over an incrementing counter, and the key is
//! replaced after every request by a fresh keystream block. Compromise of
//! the current state therefore does not reveal earlier output.
//!
//! The generator is seeded either from the operating system or from an
//! explicit 32-byte seed. The explicit form exists for reproducible tests
//! and must be fed uniformly random bytes in production.

use rand_core::{CryptoRng, Error, RngCore, impls};
use zeroize::Zeroize;

use crate::rng::OsEntropy;
use crate::rng::chacha20::block;

/// Cryptographically secure pseudorandom number generator.
///
/// Implements [`RngCore`] and [`CryptoRng`], so it can be handed directly
/// to a curve context as its entropy source. Drawing never fails once the
/// generator is seeded.
pub struct Csprng {
    /// ChaCha20 key (256-bit)
    key: [u8; 32],

    /// Nonce, fixed to zero for DRBG use
    nonce: [u8; 12],

    counter: u32,
}

impl Csprng {
    /// Seeds a generator from the operating system.
    ///
    /// Fails only when the OS entropy source itself fails.
    pub fn from_os() -> Result<Self, Error> {
        let mut seed = [0u8; 32];
        OsEntropy.try_fill_bytes(&mut seed)?;

        Ok(Self::from_seed(seed))
    }

    /// Seeds a generator from `seed`.
    pub fn from_seed(mut seed: [u8; 32]) -> Self {
        let key = seed;
        seed.zeroize();

        Self {
            key,
            nonce: [0u8; 12],
            counter: 0,
        }
    }

    /// Replaces the key with the first half of a fresh keystream block.
    fn rekey(&mut self) {
        let mut next = block(&self.key, self.counter, &self.nonce);
        self.counter = self.counter.wrapping_add(1);

        self.key.copy_from_slice(&next[..32]);
        next.zeroize();
    }
}

impl RngCore for Csprng {
    fn next_u32(&mut self) -> u32 {
        impls::next_u32_via_fill(self)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_fill(self)
    }

    /// Fills `dest` in 64-byte blocks, then rekeys.
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(64) {
            let mut stream = block(&self.key, self.counter, &self.nonce);
            self.counter = self.counter.wrapping_add(1);

            chunk.copy_from_slice(&stream[..chunk.len()]);
            stream.zeroize();
        }

        self.rekey();
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl CryptoRng for Csprng {}

impl Drop for Csprng {
    fn drop(&mut self) {
        self.key.zeroize();
        self.counter = 0;
    }
}
