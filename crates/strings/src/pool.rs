//! Symbol pools.
//!
//! Predefined pools are described by static inclusive codepoint ranges so that large pools, the
//! Unicode printable one in particular, are indexed without being materialised.

use crate::{KindSet, StringError, StringResult};
use std::collections::HashSet;

type Span = (char, char);

const UNICODE_PRINTABLE: &[Span] = &[
    ('\u{20}', '\u{7e}'),
    ('\u{a0}', '\u{d7ff}'),
    // U+E000..=U+F8FF is the private use area
    ('\u{f900}', '\u{fdcf}'),
    // U+FDD0..=U+FDEF, U+FFFE and U+FFFF are noncharacters
    ('\u{fdf0}', '\u{fffd}'),
];
const ASCII_PRINTABLE: &[Span] = &[('\u{20}', '\u{7f}')];
const ALPHABETIC: &[Span] = &[('A', 'Z'), ('a', 'z')];
const NUMERIC: &[Span] = &[('0', '9')];
const ALPHANUMERIC: &[Span] = &[('0', '9'), ('A', 'Z'), ('a', 'z')];

const DIGITS: &[Span] = NUMERIC;
const LOWER: &[Span] = &[('a', 'z')];
const UPPER: &[Span] = &[('A', 'Z')];
const SYMBOLS: &[Span] = &[('!', '/'), (':', '@'), ('[', '`'), ('{', '~')];

#[derive(Clone, Debug, PartialEq, Eq)]
enum Symbols {
    Spans(&'static [Span]),
    List(Vec<char>),
}

/// An ordered, non-empty set of distinct symbols to sample from.
///
/// Once constructed a pool always holds at least one symbol, so sampling from it cannot hit the
/// empty-range precondition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolPool {
    symbols: Symbols,
    len: usize,
}

impl SymbolPool {
    fn from_spans(spans: &'static [Span]) -> Self {
        let len = spans
            .iter()
            .map(|&(lo, hi)| (hi as usize) - (lo as usize) + 1)
            .sum();
        Self {
            symbols: Symbols::Spans(spans),
            len,
        }
    }

    /// Printable Basic Multilingual Plane characters.
    ///
    /// Excludes C0/C1 controls, surrogates, the private use area and noncharacters.
    pub fn unicode() -> Self {
        Self::from_spans(UNICODE_PRINTABLE)
    }

    /// ASCII codepoints 32 to 127 inclusive.
    pub fn ascii() -> Self {
        Self::from_spans(ASCII_PRINTABLE)
    }

    pub fn alphabetic() -> Self {
        Self::from_spans(ALPHABETIC)
    }

    pub fn numeric() -> Self {
        Self::from_spans(NUMERIC)
    }

    pub fn alphanumeric() -> Self {
        Self::from_spans(ALPHANUMERIC)
    }

    /// Builds a pool from caller-supplied symbols.
    ///
    /// Duplicates are dropped, keeping the first occurrence, so each distinct symbol is equally
    /// likely to be drawn.
    ///
    /// # Errors
    ///
    /// Returns [`StringError::InvalidArgument`] if no symbols are supplied.
    pub fn from_symbols(symbols: impl IntoIterator<Item = char>) -> StringResult<Self> {
        let mut seen = HashSet::new();
        let list: Vec<char> = symbols.into_iter().filter(|c| seen.insert(*c)).collect();
        if list.is_empty() {
            tracing::debug!("rejected empty symbol pool");
            return Err(StringError::InvalidArgument(
                "symbol pool cannot be empty".into(),
            ));
        }
        Ok(Self {
            len: list.len(),
            symbols: Symbols::List(list),
        })
    }

    /// Builds the union of the sub-pools selected by `kinds`.
    ///
    /// Sub-pools are concatenated in the order digits, lowercase, uppercase, symbols.
    ///
    /// # Errors
    ///
    /// Returns [`StringError::InvalidArgument`] if `kinds` is empty.
    pub fn from_kinds(kinds: KindSet) -> StringResult<Self> {
        if kinds.is_empty() {
            return Err(StringError::InvalidArgument(
                "at least one character kind must be selected".into(),
            ));
        }

        let selected = [
            (KindSet::DIGITS, DIGITS),
            (KindSet::LOWER, LOWER),
            (KindSet::UPPER, UPPER),
            (KindSet::SYMBOLS, SYMBOLS),
        ];
        let symbols = selected
            .into_iter()
            .filter(|(kind, _)| kinds.contains(*kind))
            .flat_map(|(_, spans)| spans.iter().flat_map(|&(lo, hi)| lo..=hi));
        Self::from_symbols(symbols)
    }

    /// Number of distinct symbols in the pool.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`; present for API symmetry with [`len`](Self::len).
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the symbol at `index`, or `None` if it is out of range.
    pub fn get(&self, index: usize) -> Option<char> {
        match &self.symbols {
            Symbols::List(list) => list.get(index).copied(),
            Symbols::Spans(spans) => {
                let mut remaining = index;
                for &(lo, hi) in spans.iter() {
                    let width = (hi as usize) - (lo as usize) + 1;
                    if remaining < width {
                        return char::from_u32(lo as u32 + remaining as u32);
                    }
                    remaining -= width;
                }
                None
            }
        }
    }

    /// Returns true if `symbol` belongs to the pool.
    pub fn contains(&self, symbol: char) -> bool {
        match &self.symbols {
            Symbols::List(list) => list.contains(&symbol),
            Symbols::Spans(spans) => spans.iter().any(|&(lo, hi)| (lo..=hi).contains(&symbol)),
        }
    }
}
