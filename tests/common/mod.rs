//! Entropy sources with scripted behavior.

#![allow(dead_code)]

use rand_core::{CryptoRng, Error, RngCore, impls};

/// Always fails.
pub struct FailingRng {
    pub calls: u32,
}

impl FailingRng {
    pub fn new() -> Self {
        Self { calls: 0 }
    }
}

impl RngCore for FailingRng {
    fn next_u32(&mut self) -> u32 {
        impls::next_u32_via_fill(self)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_fill(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(0);
    }

    fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), Error> {
        self.calls += 1;
        Err(Error::new("entropy source offline"))
    }
}

impl CryptoRng for FailingRng {}

/// Repeats `pattern` for every request, starting over each time.
pub struct FixedRng {
    pattern: Vec<u8>,
    pub calls: u32,
}

impl FixedRng {
    pub fn new(pattern: &[u8]) -> Self {
        Self {
            pattern: pattern.to_vec(),
            calls: 0,
        }
    }

    pub fn zeros() -> Self {
        Self::new(&[0])
    }
}

impl RngCore for FixedRng {
    fn next_u32(&mut self) -> u32 {
        impls::next_u32_via_fill(self)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_fill(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.calls += 1;
        for (byte, value) in dest.iter_mut().zip(self.pattern.iter().cycle()) {
            *byte = *value;
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl CryptoRng for FixedRng {}

/// Fails for the first `failures` requests, then yields `pattern`.
pub struct FlakyRng {
    failures: u32,
    inner: FixedRng,
}

impl FlakyRng {
    pub fn new(failures: u32, pattern: &[u8]) -> Self {
        Self {
            failures,
            inner: FixedRng::new(pattern),
        }
    }
}

impl RngCore for FlakyRng {
    fn next_u32(&mut self) -> u32 {
        impls::next_u32_via_fill(self)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_fill(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        if self.failures > 0 {
            self.failures -= 1;
            return Err(Error::new("transient failure"));
        }

        self.inner.try_fill_bytes(dest)
    }
}

impl CryptoRng for FlakyRng {}

/// Truncates a SHA-256 or SHA-384 digest to `width` bytes.
pub fn digest(message: &[u8], width: usize) -> Vec<u8> {
    use sha2::{Digest, Sha256, Sha384};

    if width <= 32 {
        Sha256::digest(message)[..width].to_vec()
    } else {
        Sha384::digest(message)[..width].to_vec()
    }
}
