//! Random number generation for password drawing.
//!
//! The generator only talks to [`RandomSource`]. [`CryptoSource`] is the
//! shipped implementation and accepts nothing weaker than a [`CryptoRng`].

use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng};

/// Name of the generator behind [`CryptoSource::system`].
pub const SYSTEM_SOURCE: &str = "ChaCha12 (OS-seeded, thread-local)";

/// Uniform choices needed to draw and order password characters.
pub trait RandomSource {
    /// Pick one byte of `pool` uniformly.
    ///
    /// # Panics
    ///
    /// If `pool` is empty.
    fn pick(&mut self, pool: &[u8]) -> u8;

    /// Permute `buf` uniformly in place.
    fn shuffle(&mut self, buf: &mut [u8]);
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    #[inline]
    fn pick(&mut self, pool: &[u8]) -> u8 {
        (**self).pick(pool)
    }

    #[inline]
    fn shuffle(&mut self, buf: &mut [u8]) {
        (**self).shuffle(buf)
    }
}

/// [`RandomSource`] backed by a cryptographically secure generator.
///
/// Range sampling rejects out-of-range draws rather than reducing modulo the
/// pool size, and shuffling is Fisher-Yates, so both are free of bias.
#[derive(Debug, Clone)]
pub struct CryptoSource<R: CryptoRng>(R);

impl CryptoSource<ThreadRng> {
    /// The thread-local CSPRNG, seeded and periodically reseeded from the OS.
    ///
    /// Panics on first use if the OS entropy source is unavailable.
    pub fn system() -> Self {
        Self(rand::rng())
    }
}

impl<R: CryptoRng> CryptoSource<R> {
    pub fn new(rng: R) -> Self {
        Self(rng)
    }

    pub fn into_inner(self) -> R {
        self.0
    }
}

impl<R: CryptoRng> RandomSource for CryptoSource<R> {
    #[inline]
    fn pick(&mut self, pool: &[u8]) -> u8 {
        pool[self.0.random_range(0..pool.len())]
    }

    #[inline]
    fn shuffle(&mut self, buf: &mut [u8]) {
        buf.shuffle(&mut self.0);
    }
}
