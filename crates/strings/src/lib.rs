//! Random string generation over configurable symbol pools.
//!
//! Every generated string is a sequence of `N` symbols, each drawn independently and uniformly
//! from a [`SymbolPool`]. Symbols are Unicode scalar values, so pools may hold multi-byte
//! characters; lengths are always counted in `char`s, never in UTF-8 bytes.
//!
//! ## Predefined pools
//! - Unicode printable (default for [`random_string`])
//! - ASCII printable, codepoints 32 to 127 inclusive
//! - Alphabetic (`A-Z`, `a-z`)
//! - Numeric (`0-9`)
//! - Alphanumeric (`0-9`, `A-Z`, `a-z`)
//!
//! Caller-supplied pools and [`KindSet`] combinations are built at call time.
//!
//! ## Example
//! ```
//! use idgen_strings::{random_alphanumeric, random_from_str_pool};
//!
//! let token = random_alphanumeric(21).unwrap();
//! assert_eq!(token.chars().count(), 21);
//!
//! let fancy = random_from_str_pool(8, "囧ABCxyz").unwrap();
//! assert_eq!(fancy.chars().count(), 8);
//! ```

mod generator;
mod kind;
mod pool;

pub use generator::{
    random_alphabetic, random_alphanumeric, random_ascii, random_from_pool,
    random_from_str_pool, random_kind, random_numeric, random_string, StringGenerator,
};
pub use kind::KindSet;
pub use pool::SymbolPool;

use idgen_random::RandomError;

/// Error type for string generation.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StringError {
    /// Invalid input provided
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl From<RandomError> for StringError {
    fn from(err: RandomError) -> Self {
        match err {
            RandomError::InvalidArgument(msg) => StringError::InvalidArgument(msg),
        }
    }
}

/// Result type for string generation.
pub type StringResult<T> = Result<T, StringError>;
