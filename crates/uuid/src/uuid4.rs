//! The [`Uuid4`] value type.

use crate::{ParseError, UuidResult};
use idgen_random::{OsRandom, RandomSource};
use std::{fmt, str::FromStr};

/// Character indices of the hyphens in the canonical form.
const HYPHEN_POSITIONS: [usize; 4] = [8, 13, 18, 23];
const HYPHENATED_LEN: usize = 36;
const SIMPLE_LEN: usize = 32;

/// Unhyphenated index of the version nibble.
const VERSION_POSITION: usize = 12;
/// Unhyphenated index of the variant nibble.
const VARIANT_POSITION: usize = 16;

/// A version 4 UUID.
///
/// Immutable once constructed. Values coming out of [`Uuid4::generate`] always have byte 6's
/// high nibble set to `0x4` and byte 8's top two bits set to `10`.
///
/// # Display format
/// `Display` (and therefore `to_string()`) renders the canonical lowercase hyphenated form.
/// Rendering is stable: the same value always produces the same text.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Uuid4([u8; 16]);

impl Default for Uuid4 {
    fn default() -> Self {
        Self::generate()
    }
}

impl Uuid4 {
    /// Generates a new UUID from the operating system entropy source.
    ///
    /// # Panics
    ///
    /// Panics if the entropy source is unavailable.
    pub fn generate() -> Self {
        Self::generate_with(&mut OsRandom)
    }

    /// Generates a new UUID drawing its bytes from `source`.
    pub fn generate_with<R: RandomSource + ?Sized>(source: &mut R) -> Self {
        let mut bytes = [0u8; 16];
        source.fill_bytes(&mut bytes);
        bytes[6] = (bytes[6] & 0x0f) | 0x40;
        bytes[8] = (bytes[8] & 0x3f) | 0x80;
        Self(bytes)
    }

    /// Parses hyphenated or bare hex text into a UUID.
    ///
    /// # Arguments
    ///
    /// * `input` - 36-character hyphenated or 32-character unhyphenated text, any case.
    ///
    /// # Errors
    ///
    /// Returns the first failing check, in order: [`ParseError::BadLength`],
    /// [`ParseError::InvalidHex`], [`ParseError::InvalidVersion`],
    /// [`ParseError::InvalidVariant`].
    pub fn parse(input: &str) -> UuidResult<Self> {
        Self::decode(input).inspect_err(|err| {
            tracing::debug!(input, error = %err, "rejected UUID text");
        })
    }

    fn decode(input: &str) -> UuidResult<Self> {
        let chars: Vec<char> = input.chars().collect();

        let digits: Vec<char> = if chars.len() == HYPHENATED_LEN
            && HYPHEN_POSITIONS.iter().all(|&p| chars[p] == '-')
        {
            chars
                .iter()
                .enumerate()
                .filter(|(i, _)| !HYPHEN_POSITIONS.contains(i))
                .map(|(_, c)| *c)
                .collect()
        } else {
            chars
        };

        if digits.len() != SIMPLE_LEN {
            return Err(ParseError::BadLength(digits.len()));
        }

        let mut nibbles = [0u8; SIMPLE_LEN];
        for (position, (nibble, &found)) in nibbles.iter_mut().zip(&digits).enumerate() {
            let value = found
                .to_digit(16)
                .ok_or(ParseError::InvalidHex { position, found })?;
            *nibble = value as u8;
        }

        if nibbles[VERSION_POSITION] != 0x4 {
            return Err(ParseError::InvalidVersion(digits[VERSION_POSITION]));
        }
        if nibbles[VARIANT_POSITION] & 0xc != 0x8 {
            return Err(ParseError::InvalidVariant(digits[VARIANT_POSITION]));
        }

        let mut bytes = [0u8; 16];
        for (byte, pair) in bytes.iter_mut().zip(nibbles.chunks_exact(2)) {
            *byte = (pair[0] << 4) | pair[1];
        }
        Ok(Self(bytes))
    }

    /// Returns a copy of the 16 bytes.
    ///
    /// The array is returned by value, so changing it has no effect on this UUID.
    pub fn bytes(&self) -> [u8; 16] {
        self.0
    }

    /// Returns the version nibble, which is always 4.
    pub fn version(&self) -> u8 {
        self.0[6] >> 4
    }

    /// Returns the 32 lowercase hex digits without hyphens.
    pub fn simple(&self) -> String {
        self.as_uuid().simple().to_string()
    }

    /// Returns the same value as a [`uuid::Uuid`].
    pub fn as_uuid(&self) -> uuid::Uuid {
        uuid::Uuid::from_bytes(self.0)
    }
}

impl fmt::Display for Uuid4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_uuid().hyphenated())
    }
}

impl fmt::Debug for Uuid4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Uuid4")
            .field(&format_args!("{}", self))
            .finish()
    }
}

impl FromStr for Uuid4 {
    type Err = ParseError;

    /// Equivalent to [`Uuid4::parse`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid4::parse(s)
    }
}

impl AsRef<[u8]> for Uuid4 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Uuid4> for uuid::Uuid {
    fn from(value: Uuid4) -> Self {
        value.as_uuid()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Uuid4 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Uuid4 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        Uuid4::parse(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use idgen_random::ReplaySource;

    const CANONICAL: &str = "cc2161ae-33c1-4cb1-aa53-e81000f20a30";
    const SIMPLE: &str = "cc2161ae33c14cb1aa53e81000f20a30";

    #[test]
    fn test_generate_string_is_correct_length() {
        assert_eq!(Uuid4::generate().to_string().len(), 36);
    }

    #[test]
    fn test_generate_string_contains_correct_hyphens() {
        let text = Uuid4::generate().to_string();

        for (i, c) in text.char_indices() {
            if HYPHEN_POSITIONS.contains(&i) {
                assert_eq!(c, '-', "expected hyphen at {}", i);
            } else {
                assert!(c.is_ascii_hexdigit() && !c.is_ascii_uppercase());
            }
        }
    }

    #[test]
    fn test_generate_sets_version_and_variant_bits() {
        for _ in 0..100 {
            let bytes = Uuid4::generate().bytes();
            assert_eq!(bytes[6] >> 4, 0x4);
            assert_eq!(bytes[8] >> 6, 0b10);
        }
    }

    #[test]
    fn test_generate_forces_bits_over_replayed_bytes() {
        let ones = Uuid4::generate_with(&mut ReplaySource::new([0xff]));
        let zeros = Uuid4::generate_with(&mut ReplaySource::new([0x00]));

        assert_eq!(ones.to_string(), "ffffffff-ffff-4fff-bfff-ffffffffffff");
        assert_eq!(zeros.to_string(), "00000000-0000-4000-8000-000000000000");
    }

    #[test]
    fn test_generate_differs_between_calls() {
        assert_ne!(Uuid4::generate(), Uuid4::generate());
        assert_ne!(Uuid4::default(), Uuid4::default());
    }

    #[test]
    fn test_generated_values_parse_back() {
        let original = Uuid4::generate();
        let parsed = Uuid4::parse(&original.to_string()).unwrap();

        assert_eq!(original, parsed);
        assert_eq!(Uuid4::parse(&original.simple()).unwrap(), original);
    }

    #[test]
    fn test_to_string_is_stable() {
        let uuid = Uuid4::generate();

        assert_eq!(uuid.to_string(), uuid.to_string());
    }

    #[test]
    fn test_bytes_returns_correct_bytes() {
        let uuid = Uuid4::parse(CANONICAL).unwrap();
        let bytes = uuid.bytes();

        assert_eq!(bytes.len(), 16);
        assert_eq!(bytes, uuid.0);
        assert_eq!(bytes[0], 0xcc);
        assert_eq!(bytes[15], 0x30);
        assert_eq!(uuid.as_ref(), &bytes[..]);
    }

    #[test]
    fn test_bytes_not_internal_storage() {
        let uuid = Uuid4::generate();
        let before = uuid.bytes();
        let mut bytes = uuid.bytes();

        bytes[3] = bytes[3].wrapping_add(1);

        assert_ne!(bytes[3], uuid.bytes()[3]);
        assert_eq!(uuid.bytes(), before);
    }

    #[test]
    fn test_parse_hyphenated() {
        let uuid = Uuid4::parse(CANONICAL).unwrap();

        assert_eq!(uuid.to_string(), CANONICAL);
        assert_eq!(uuid.version(), 4);
    }

    #[test]
    fn test_parse_without_hyphens() {
        let uuid = Uuid4::parse(SIMPLE).unwrap();

        assert_eq!(uuid.to_string(), CANONICAL);
        assert_eq!(uuid.simple(), SIMPLE);
    }

    #[test]
    fn test_parse_uppercase_normalises() {
        let uuid = Uuid4::parse(&CANONICAL.to_uppercase()).unwrap();

        assert_eq!(uuid.to_string(), CANONICAL);
    }

    #[test]
    fn test_parse_rejects_invalid_version() {
        let result = Uuid4::parse("cc2161ae-33c1-bcb1-aa53-e81000f20a30");

        assert_eq!(result, Err(ParseError::InvalidVersion('b')));
    }

    #[test]
    fn test_parse_rejects_invalid_variant() {
        let result = Uuid4::parse("cc2161ae-33c1-4cb1-ca53-e81000f20a30");

        assert_eq!(result, Err(ParseError::InvalidVariant('c')));
    }

    #[test]
    fn test_parse_accepts_every_rfc_variant() {
        for variant in ['8', '9', 'a', 'b', 'A', 'B'] {
            let text = format!("cc2161ae-33c1-4cb1-{}a53-e81000f20a30", variant);
            assert!(Uuid4::parse(&text).is_ok(), "variant {} rejected", variant);
        }
    }

    #[test]
    fn test_parse_rejects_bad_length() {
        let result = Uuid4::parse("cc2161ae-33c1-4cb1-aa53-e81000f20a");

        assert_eq!(result, Err(ParseError::BadLength(34)));
        assert_eq!(Uuid4::parse(""), Err(ParseError::BadLength(0)));
    }

    #[test]
    fn test_parse_rejects_invalid_hex() {
        let result = Uuid4::parse("cc2161ae-33c1-4cb1-aa53-e81g00f20a30");

        assert_eq!(
            result,
            Err(ParseError::InvalidHex {
                position: 23,
                found: 'g'
            })
        );
    }

    #[test]
    fn test_parse_rejects_misplaced_hyphens() {
        // Right length, wrong hyphen layout: nothing is stripped
        let shifted = "cc2161ae3-3c1-4cb1-aa53-e81000f20a30";
        assert_eq!(Uuid4::parse(shifted), Err(ParseError::BadLength(36)));

        // A hyphen inside otherwise bare hex is just a bad digit
        let mut bare: Vec<char> = SIMPLE.chars().collect();
        bare[5] = '-';
        let bare: String = bare.into_iter().collect();
        assert_eq!(
            Uuid4::parse(&bare),
            Err(ParseError::InvalidHex {
                position: 5,
                found: '-'
            })
        );
    }

    #[test]
    fn test_parse_counts_characters_not_bytes() {
        let mut text: Vec<char> = SIMPLE.chars().collect();
        text[0] = '囧';
        let text: String = text.into_iter().collect();

        assert_eq!(
            Uuid4::parse(&text),
            Err(ParseError::InvalidHex {
                position: 0,
                found: '囧'
            })
        );
    }

    #[test]
    fn test_parse_check_order() {
        // Bad hex wins over bad version and variant
        assert!(matches!(
            Uuid4::parse("cc2161ae-33c1-bcb1-ca53-e81000f20a3g"),
            Err(ParseError::InvalidHex { .. })
        ));
        // Bad version wins over bad variant
        assert_eq!(
            Uuid4::parse("cc2161ae-33c1-bcb1-ca53-e81000f20a30"),
            Err(ParseError::InvalidVersion('b'))
        );
    }

    #[test]
    fn test_from_str_matches_parse() {
        let parsed: Uuid4 = CANONICAL.parse().unwrap();
        assert_eq!(parsed, Uuid4::parse(CANONICAL).unwrap());

        let result: Result<Uuid4, _> = "not-a-uuid".parse();
        assert!(result.is_err());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ParseError::BadLength(34).to_string(),
            "expected 32 hex digits, found 34 characters"
        );
        assert_eq!(
            ParseError::InvalidVariant('c').to_string(),
            "invalid variant 'c', expected one of 8, 9, a, b"
        );
    }

    #[test]
    fn test_debug_format() {
        let uuid = Uuid4::parse(CANONICAL).unwrap();

        assert_eq!(format!("{:?}", uuid), format!("Uuid4({})", CANONICAL));
    }

    #[test]
    fn test_converts_to_uuid_crate_type() {
        let uuid = Uuid4::parse(CANONICAL).unwrap();
        let converted: uuid::Uuid = uuid.into();

        assert_eq!(converted.hyphenated().to_string(), CANONICAL);
        assert_eq!(converted.get_version_num(), 4);
        assert_eq!(converted.get_variant(), uuid::Variant::RFC4122);
    }

    #[test]
    fn test_copy_and_equality() {
        let uuid1 = Uuid4::parse(CANONICAL).unwrap();
        let uuid2 = uuid1;

        assert_eq!(uuid1, uuid2);
    }

    #[test]
    fn test_concurrent_generation() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(Uuid4::generate))
            .collect();

        let values: Vec<Uuid4> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for value in &values {
            assert_eq!(value.version(), 4);
        }
        assert_ne!(values[0], values[1]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_uses_canonical_text() {
        let uuid = Uuid4::parse(SIMPLE).unwrap();
        let json = serde_json::to_string(&uuid).unwrap();

        assert_eq!(json, format!("\"{}\"", CANONICAL));
        assert_eq!(serde_json::from_str::<Uuid4>(&json).unwrap(), uuid);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_rejects_invalid_text() {
        let result = serde_json::from_str::<Uuid4>("\"cc2161ae-33c1-bcb1-aa53-e81000f20a30\"");

        let err = result.unwrap_err();
        assert!(err.to_string().contains("invalid version"));
    }
}
