//! Random source trait and its implementations.

use crate::{RandomError, RandomResult};
use rand::rngs::OsRng;
use rand::RngCore;

/// A uniformly distributed, non-deterministic byte generator.
///
/// Implementors only provide [`fill_bytes`](RandomSource::fill_bytes); index sampling is built
/// on top of it so every source gets the same bias-free selection.
pub trait RandomSource {
    /// Fills `dest` entirely with random bytes.
    fn fill_bytes(&mut self, dest: &mut [u8]);

    /// Returns a freshly filled array of `N` random bytes.
    fn fill_array<const N: usize>(&mut self) -> [u8; N]
    where
        Self: Sized,
    {
        let mut bytes = [0u8; N];
        self.fill_bytes(&mut bytes);
        bytes
    }

    /// Picks an unbiased index in `[0, n)` using rejection sampling.
    ///
    /// Each attempt draws just enough bytes to cover the bit width of `n - 1`, masks the value
    /// down to that width and retries when it lands at or above `n`. The expected number of
    /// attempts is below two for every `n`.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::InvalidArgument`] if `n` is zero.
    fn pick_index(&mut self, n: usize) -> RandomResult<usize> {
        if n == 0 {
            return Err(RandomError::InvalidArgument(
                "cannot pick an index from an empty range".into(),
            ));
        }
        if n == 1 {
            return Ok(0);
        }

        let bits = usize::BITS - (n - 1).leading_zeros();
        let width = bits.div_ceil(8) as usize;
        let mask = if bits >= u64::BITS {
            u64::MAX
        } else {
            (1u64 << bits) - 1
        };
        let bound = n as u64;

        // Bytes past `width` are never written and stay zero.
        let mut buf = [0u8; 8];
        loop {
            self.fill_bytes(&mut buf[..width]);
            let candidate = u64::from_le_bytes(buf) & mask;
            if candidate < bound {
                return Ok(candidate as usize);
            }
            tracing::trace!(candidate, n, "rejected out-of-range draw");
        }
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        (**self).fill_bytes(dest)
    }
}

/// Operating system entropy source.
///
/// Stateless: every call reads directly from the OS, so a single value can be copied freely and
/// used from any number of threads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OsRandom;

impl OsRandom {
    pub fn new() -> Self {
        Self
    }
}

impl RandomSource for OsRandom {
    /// # Panics
    ///
    /// Panics if the operating system entropy source is unavailable.
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        OsRng.fill_bytes(dest);
    }
}

/// Deterministic source that replays a fixed byte sequence, wrapping around at the end.
///
/// Only available to tests (and to dependent crates through the `test-util` feature) so that
/// sampling logic can be checked against known inputs.
#[cfg(any(test, feature = "test-util"))]
#[derive(Clone, Debug)]
pub struct ReplaySource {
    bytes: Vec<u8>,
    position: usize,
    consumed: usize,
}

#[cfg(any(test, feature = "test-util"))]
impl ReplaySource {
    /// Creates a source replaying `bytes`.
    ///
    /// # Panics
    ///
    /// Panics if `bytes` is empty.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        let bytes = bytes.into();
        assert!(!bytes.is_empty(), "ReplaySource needs at least one byte");
        Self {
            bytes,
            position: 0,
            consumed: 0,
        }
    }

    /// Total number of bytes handed out so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }
}

#[cfg(any(test, feature = "test-util"))]
impl RandomSource for ReplaySource {
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for byte in dest.iter_mut() {
            *byte = self.bytes[self.position];
            self.position = (self.position + 1) % self.bytes.len();
        }
        self.consumed += dest.len();
    }
}
