//! String generation on top of a [`RandomSource`].

use crate::{KindSet, StringError, StringResult, SymbolPool};
use idgen_random::{OsRandom, RandomSource};

/// Generates random strings from symbol pools.
///
/// The generator owns its entropy source. [`StringGenerator::new`] reads from the operating
/// system; [`StringGenerator::with_source`] accepts any other [`RandomSource`], which is how tests
/// substitute deterministic input.
///
/// Every method returns exactly `length` symbols. A length of zero yields an empty string.
#[derive(Clone, Debug, Default)]
pub struct StringGenerator<R = OsRandom> {
    source: R,
}

impl StringGenerator<OsRandom> {
    pub fn new() -> Self {
        Self::with_source(OsRandom)
    }
}

impl<R: RandomSource> StringGenerator<R> {
    pub fn with_source(source: R) -> Self {
        Self { source }
    }

    /// Draws `length` symbols from `pool`.
    ///
    /// Each position gets its own unbiased index draw; nothing is cached between positions.
    pub fn random_with_pool(&mut self, length: usize, pool: &SymbolPool) -> StringResult<String> {
        (0..length)
            .map(|_| {
                let index = self.source.pick_index(pool.len())?;
                pool.get(index).ok_or_else(|| {
                    StringError::InvalidArgument(format!(
                        "index {} is outside a pool of {} symbols",
                        index,
                        pool.len()
                    ))
                })
            })
            .collect()
    }

    /// Printable Unicode characters from the Basic Multilingual Plane.
    pub fn random_string(&mut self, length: usize) -> StringResult<String> {
        self.random_with_pool(length, &SymbolPool::unicode())
    }

    /// ASCII codepoints 32 to 127; the byte length equals `length`.
    pub fn random_ascii(&mut self, length: usize) -> StringResult<String> {
        self.random_with_pool(length, &SymbolPool::ascii())
    }

    pub fn random_alphabetic(&mut self, length: usize) -> StringResult<String> {
        self.random_with_pool(length, &SymbolPool::alphabetic())
    }

    pub fn random_numeric(&mut self, length: usize) -> StringResult<String> {
        self.random_with_pool(length, &SymbolPool::numeric())
    }

    pub fn random_alphanumeric(&mut self, length: usize) -> StringResult<String> {
        self.random_with_pool(length, &SymbolPool::alphanumeric())
    }

    /// Draws from a caller-supplied set of symbols.
    ///
    /// # Errors
    ///
    /// Returns [`StringError::InvalidArgument`] if `pool` is empty, even when `length` is zero.
    pub fn random_from_pool(&mut self, length: usize, pool: &[char]) -> StringResult<String> {
        let pool = SymbolPool::from_symbols(pool.iter().copied())?;
        self.random_with_pool(length, &pool)
    }

    /// Same as [`random_from_pool`](Self::random_from_pool), taking the symbols as text.
    pub fn random_from_str_pool(&mut self, length: usize, pool: &str) -> StringResult<String> {
        let pool = SymbolPool::from_symbols(pool.chars())?;
        self.random_with_pool(length, &pool)
    }

    /// Draws from the union of the sub-pools selected in `kinds`.
    ///
    /// # Errors
    ///
    /// Returns [`StringError::InvalidArgument`] if `kinds` is empty.
    pub fn random_kind(&mut self, length: usize, kinds: KindSet) -> StringResult<String> {
        let pool = SymbolPool::from_kinds(kinds)?;
        self.random_with_pool(length, &pool)
    }
}

/// [`StringGenerator::random_string`] using the operating system entropy source.
pub fn random_string(length: usize) -> StringResult<String> {
    StringGenerator::new().random_string(length)
}

/// [`StringGenerator::random_ascii`] using the operating system entropy source.
pub fn random_ascii(length: usize) -> StringResult<String> {
    StringGenerator::new().random_ascii(length)
}

/// [`StringGenerator::random_alphabetic`] using the operating system entropy source.
pub fn random_alphabetic(length: usize) -> StringResult<String> {
    StringGenerator::new().random_alphabetic(length)
}

/// [`StringGenerator::random_numeric`] using the operating system entropy source.
pub fn random_numeric(length: usize) -> StringResult<String> {
    StringGenerator::new().random_numeric(length)
}

/// [`StringGenerator::random_alphanumeric`] using the operating system entropy source.
pub fn random_alphanumeric(length: usize) -> StringResult<String> {
    StringGenerator::new().random_alphanumeric(length)
}

/// [`StringGenerator::random_from_pool`] using the operating system entropy source.
pub fn random_from_pool(length: usize, pool: &[char]) -> StringResult<String> {
    StringGenerator::new().random_from_pool(length, pool)
}

/// [`StringGenerator::random_from_str_pool`] using the operating system entropy source.
pub fn random_from_str_pool(length: usize, pool: &str) -> StringResult<String> {
    StringGenerator::new().random_from_str_pool(length, pool)
}

/// [`StringGenerator::random_kind`] using the operating system entropy source.
pub fn random_kind(length: usize, kinds: KindSet) -> StringResult<String> {
    StringGenerator::new().random_kind(length, kinds)
}
