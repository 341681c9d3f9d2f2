//! Version 4 (random) UUIDs.
//!
//! [`Uuid4`] is a 16-byte value that is only ever created in one of two ways:
//! - [`Uuid4::generate`] fills the bytes from the entropy source and forces the version and
//!   variant bits, so every generated value is RFC 4122 compliant.
//! - [`Uuid4::parse`] copies the bytes out of validated text.
//!
//! ## Canonical text form
//! - Length: 36
//! - Layout: `8-4-4-4-12` lowercase hex digits, hyphens at indices 8, 13, 18 and 23
//! - Example: `cc2161ae-33c1-4cb1-aa53-e81000f20a30`
//!
//! ## Accepted input
//! Parsing accepts the hyphenated form or the bare 32-digit form, in either case. Hyphens are
//! only recognised at their canonical positions. Input is checked in a fixed order and the first
//! failing check determines the [`ParseError`]:
//! 1. length (32 hex digits once the hyphens are removed)
//! 2. hex digits
//! 3. version nibble, which must be `4`
//! 4. variant nibble, which must be one of `8`, `9`, `a`, `b`

mod uuid4;

pub use uuid4::Uuid4;

/// Reasons a string is not a valid version 4 UUID.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Not 32 hex digits once canonical hyphens are removed
    #[error("expected 32 hex digits, found {0} characters")]
    BadLength(usize),
    /// A character that is not a hex digit, at its position in the unhyphenated text
    #[error("invalid hex digit '{found}' at position {position}")]
    InvalidHex { position: usize, found: char },
    /// The version nibble is not `4`
    #[error("invalid version '{0}', expected '4'")]
    InvalidVersion(char),
    /// The variant nibble does not start with binary `10`
    #[error("invalid variant '{0}', expected one of 8, 9, a, b")]
    InvalidVariant(char),
}

/// Result type for UUID parsing.
pub type UuidResult<T> = Result<T, ParseError>;
