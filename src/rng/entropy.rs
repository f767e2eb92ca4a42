use rand_core::{CryptoRng, Error, RngCore, impls};

use crate::os::sys_random;

/// The operating system's random number generator.
///
/// Each request goes straight to the platform source (`getrandom` on
/// Linux, `arc4random_buf` on macOS, `BCryptGenRandom` on Windows,
/// `/dev/urandom` on other Unix systems). Failures are reported through
/// [`RngCore::try_fill_bytes`].
#[derive(Clone, Copy, Debug, Default)]
pub struct OsEntropy;

impl RngCore for OsEntropy {
    fn next_u32(&mut self) -> u32 {
        impls::next_u32_via_fill(self)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_fill(self)
    }

    /// # Panics
    /// Panics if the operating system cannot provide randomness. Use
    /// [`RngCore::try_fill_bytes`] to handle that case.
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        if let Err(err) = self.try_fill_bytes(dest) {
            panic!("operating system entropy unavailable: {err}");
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        sys_random(dest).map_err(Error::new)
    }
}

impl CryptoRng for OsEntropy {}
