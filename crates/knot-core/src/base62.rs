use crate::error::EncodeError;
use crate::mapping::MappingId;
use crate::shortcode::ShortCode;

/// The base-62 alphabet: digits, then lowercase, then uppercase.
///
/// Position in the alphabet is the digit value, so `'0'` is zero and `'Z'`
/// is sixty-one.
const ALPHABET: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

const BASE: i64 = 62;

/// Encoder from record identifiers to base-62 short codes.
///
/// The alphabet is immutable configuration owned by the encoder value.
/// Encoding is pure and deterministic: the same identifier always yields the
/// same code, and distinct identifiers always yield distinct codes (standard
/// positional notation), which is what backs the no-collision guarantee
/// without any random code generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Base62Encoder {
    alphabet: &'static [u8; 62],
}

impl Base62Encoder {
    /// Creates an encoder with the default alphabet.
    pub const fn new() -> Self {
        Self { alphabet: ALPHABET }
    }

    /// Encodes a strictly positive identifier as a base-62 short code.
    ///
    /// Zero and negative identifiers are rejected with
    /// [`EncodeError::NonPositiveId`]: engine-assigned identifiers start at
    /// one, so a non-positive input indicates a misconfigured storage engine
    /// rather than a recoverable condition.
    ///
    /// Output length grows logarithmically with the identifier: ids 1-61
    /// produce one character, 62-3843 two, and so on. There is no padding.
    pub fn encode(&self, id: MappingId) -> Result<ShortCode, EncodeError> {
        let mut n = id.get();
        if n <= 0 {
            return Err(EncodeError::NonPositiveId(n));
        }

        // Digits come out least-significant first; reverse for reading order.
        let mut digits = String::new();
        while n > 0 {
            let rem = (n % BASE) as usize;
            digits.push(self.alphabet[rem] as char);
            n /= BASE;
        }

        Ok(ShortCode::new(digits.chars().rev().collect::<String>()))
    }
}

impl Default for Base62Encoder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(raw: i64) -> Result<ShortCode, EncodeError> {
        Base62Encoder::new().encode(MappingId::new(raw))
    }

    #[test]
    fn known_vectors() {
        assert_eq!(encode(1).unwrap().as_str(), "1");
        assert_eq!(encode(10).unwrap().as_str(), "a");
        assert_eq!(encode(36).unwrap().as_str(), "A");
        assert_eq!(encode(61).unwrap().as_str(), "Z");
        assert_eq!(encode(62).unwrap().as_str(), "10");
        assert_eq!(encode(63).unwrap().as_str(), "11");
        assert_eq!(encode(3843).unwrap().as_str(), "ZZ");
        assert_eq!(encode(3844).unwrap().as_str(), "100");
    }

    #[test]
    fn rejects_zero_and_negative() {
        assert_eq!(encode(0).unwrap_err(), EncodeError::NonPositiveId(0));
        assert_eq!(encode(-5).unwrap_err(), EncodeError::NonPositiveId(-5));
    }

    #[test]
    fn deterministic() {
        let encoder = Base62Encoder::new();
        let a = encoder.encode(MappingId::new(123_456)).unwrap();
        let b = encoder.encode(MappingId::new(123_456)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn injective_over_sample_range() {
        use std::collections::HashSet;

        let encoder = Base62Encoder::new();
        let mut seen = HashSet::new();
        for raw in 1..=10_000i64 {
            let code = encoder.encode(MappingId::new(raw)).unwrap();
            assert!(seen.insert(code.as_str().to_owned()), "collision at {raw}");
        }
    }

    #[test]
    fn codes_stay_within_alphabet() {
        let encoder = Base62Encoder::new();
        for raw in [1i64, 61, 62, 3843, 3844, 916_132_831, i64::MAX] {
            let code = encoder.encode(MappingId::new(raw)).unwrap();
            assert!(code
                .as_str()
                .bytes()
                .all(|b| ALPHABET.contains(&b)));
        }
    }

    #[test]
    fn no_leading_zero_digit() {
        let encoder = Base62Encoder::new();
        for raw in 62i64..=4000 {
            let code = encoder.encode(MappingId::new(raw)).unwrap();
            assert_ne!(code.as_str().as_bytes()[0], b'0', "leading zero at {raw}");
        }
    }

    #[test]
    fn length_grows_logarithmically() {
        assert_eq!(encode(1).unwrap().as_str().len(), 1);
        assert_eq!(encode(61).unwrap().as_str().len(), 1);
        assert_eq!(encode(62).unwrap().as_str().len(), 2);
        assert_eq!(encode(3843).unwrap().as_str().len(), 2);
        assert_eq!(encode(3844).unwrap().as_str().len(), 3);
    }
}
