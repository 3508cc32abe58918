//! Fixed-width radix-36 transcoding over the alphabet `0-9A-Z`.
//!
//! Digits are written most-significant first and zero-padded to the
//! requested width. Decoding is case-sensitive: lowercase letters are
//! rejected rather than folded.

use crate::error::{CodecError, CodecResult};

/// The 36 symbols, in digit order.
pub const ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Radix of the encoding.
pub const RADIX: u64 = 36;

/// `36^width`, or `None` when it does not fit in a `u64`.
pub const fn capacity(width: usize) -> Option<u64> {
    let mut cap: u64 = 1;
    let mut i = 0;
    while i < width {
        cap = match cap.checked_mul(RADIX) {
            Some(c) => c,
            None => return None,
        };
        i += 1;
    }
    Some(cap)
}

/// Smallest number of base-36 digits able to hold every `bits`-bit value.
pub const fn min_width(bits: u32) -> usize {
    let mut width = 0;
    while width < 13 {
        match capacity(width) {
            Some(cap) if bits < 64 && cap >= (1u64 << bits) => return width,
            _ => width += 1,
        }
    }
    13
}

/// Encode `value` as exactly `width` base-36 digits.
pub fn encode(value: u64, width: usize) -> CodecResult<String> {
    if let Some(cap) = capacity(width) {
        if value >= cap {
            return Err(CodecError::OutOfRange {
                value,
                width,
                max: cap.saturating_sub(1),
            });
        }
    }

    let mut digits = vec![b'0'; width];
    let mut rest = value;
    for slot in digits.iter_mut().rev() {
        *slot = ALPHABET[(rest % RADIX) as usize];
        rest /= RADIX;
    }
    // Only the alphabet was written, so the bytes are ASCII.
    Ok(digits.into_iter().map(char::from).collect())
}

/// Decode a base-36 string, most-significant digit first.
pub fn decode(s: &str) -> CodecResult<u64> {
    if s.is_empty() {
        return Err(CodecError::EmptyInput);
    }

    let mut value: u64 = 0;
    for (position, character) in s.chars().enumerate() {
        let digit = digit_value(character)
            .ok_or(CodecError::InvalidCharacter { character, position })?;
        value = value
            .checked_mul(RADIX)
            .and_then(|v| v.checked_add(digit))
            .ok_or_else(|| CodecError::OutOfRange {
                value: u64::MAX,
                width: s.chars().count(),
                max: u64::MAX,
            })?;
    }
    Ok(value)
}

fn digit_value(c: char) -> Option<u64> {
    match c {
        '0'..='9' => Some(c as u64 - '0' as u64),
        'A'..='Z' => Some(c as u64 - 'A' as u64 + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_encodings() {
        let cases: &[(u64, usize, &str)] = &[
            (0, 1, "0"),
            (9, 1, "9"),
            (10, 1, "A"),
            (35, 1, "Z"),
            (36, 2, "10"),
            (71, 2, "1Z"),
            (5, 3, "005"),
            (0, 5, "00000"),
            (0xFF_FFFF, 5, "9ZLDR"),
            (0x7F_FFFF, 5, "4ZSOV"),
        ];
        for &(value, width, encoded) in cases {
            assert_eq!(encode(value, width).unwrap(), encoded, "encode({value}, {width})");
            assert_eq!(decode(encoded).unwrap(), value, "decode({encoded})");
        }
    }

    #[test]
    fn encode_rejects_values_past_capacity() {
        assert_eq!(
            encode(36, 1),
            Err(CodecError::OutOfRange {
                value: 36,
                width: 1,
                max: 35
            })
        );
        assert!(encode(1296, 2).is_err());
        assert_eq!(encode(1295, 2).unwrap(), "ZZ");
    }

    #[test]
    fn exhaustive_bijection_for_short_widths() {
        for width in 1..=3 {
            let cap = capacity(width).unwrap();
            let mut previous = String::new();
            for value in 0..cap {
                let s = encode(value, width).unwrap();
                assert_eq!(s.len(), width);
                // Zero-padded MSB-first digits sort like the numbers they encode.
                assert!(s > previous || value == 0);
                assert_eq!(decode(&s).unwrap(), value);
                previous = s;
            }
        }
    }

    #[test]
    fn decode_rejects_foreign_characters() {
        for input in ["abc", "!@#", "1 2", " 1", "\u{2318}", "Z\n", "a"] {
            assert!(
                matches!(decode(input), Err(CodecError::InvalidCharacter { .. })),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn decode_reports_position_of_first_bad_character() {
        assert_eq!(
            decode("12z4"),
            Err(CodecError::InvalidCharacter {
                character: 'z',
                position: 2
            })
        );
    }

    #[test]
    fn decode_rejects_empty() {
        assert_eq!(decode(""), Err(CodecError::EmptyInput));
    }

    #[test]
    fn decode_rejects_u64_overflow() {
        assert!(matches!(
            decode("ZZZZZZZZZZZZZZ"),
            Err(CodecError::OutOfRange { .. })
        ));
    }

    #[test]
    fn min_width_covers_bit_counts() {
        assert_eq!(min_width(0), 0);
        assert_eq!(min_width(5), 1);
        assert_eq!(min_width(6), 2);
        assert_eq!(min_width(11), 3);
        assert_eq!(min_width(16), 4);
        assert_eq!(min_width(24), 5);
    }

    #[test]
    fn capacity_saturates() {
        assert_eq!(capacity(0), Some(1));
        assert_eq!(capacity(2), Some(1296));
        assert_eq!(capacity(12), Some(36u64.pow(12)));
        assert_eq!(capacity(13), None);
    }
}
