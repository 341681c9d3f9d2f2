//! Entropy source for idgen.
//!
//! Both the string generator and the UUID type draw their randomness through the
//! [`RandomSource`] trait instead of reaching for ambient global state. Production code uses
//! [`OsRandom`], which reads from the operating system's entropy pool on every call.
//!
//! ## Unbiased index selection
//! [`RandomSource::pick_index`] returns a uniformly distributed index in `[0, n)` for any `n`,
//! not only powers of two. It draws the minimal number of bits covering `n - 1` and redraws
//! values that fall outside the range. Modulo reduction is never used, as it would favour low
//! indices whenever `n` does not divide the draw range.
//!
//! ## Failure model
//! An unavailable entropy source is a process-level precondition failure: [`OsRandom`] panics
//! rather than returning an error. The only recoverable error is an invalid argument.

mod source;

pub use source::{OsRandom, RandomSource};

#[cfg(any(test, feature = "test-util"))]
pub use source::ReplaySource;

/// Error type for random sampling.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RandomError {
    /// Invalid argument provided
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type for random sampling.
pub type RandomResult<T> = Result<T, RandomError>;
