//! Hex armoring for binary data
//!
//! Encodes raw bytes as printable lowercase hexadecimal, two characters per
//! byte. The armored form is:
//! - Free of whitespace (including newlines)
//! - Always of even length, exactly twice the byte length
//! - Safe to pass unescaped in a POSIX shell

use crate::error::{ErrorCategory, ErrorKind, HexboxError, Result};

/// Armor bytes as lowercase hex, concatenated in input order.
///
/// Total over all inputs, including the empty sequence (which armors to the
/// empty string).
pub fn encode(body: &[u8]) -> String {
    hex::encode(body)
}

/// Decode an armored hex string back into the original bytes.
///
/// Rejects input of odd length rather than truncating a trailing character,
/// and rejects any character that is not a hex digit. Uppercase digits are
/// accepted on input even though [`encode`] only emits lowercase.
pub fn decode(armored: &str) -> Result<Vec<u8>> {
    hex::decode(armored).map_err(|e| {
        let msg = match &e {
            hex::FromHexError::OddLength => {
                "hex input has odd length; likely truncated".to_string()
            }
            hex::FromHexError::InvalidHexCharacter { c, index } => {
                format!("invalid hex character {:?} at offset {}", c, index)
            }
            other => format!("hex decoding failed: {}", other),
        };
        HexboxError::with_kind_and_source(ErrorCategory::User, ErrorKind::MalformedHex, msg, e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_bytes() {
        let bytes = b"";
        let armored = encode(bytes);
        assert_eq!(armored, "");
        let decoded = decode(&armored).unwrap();
        assert_eq!(bytes, &decoded[..]);
    }

    #[test]
    fn test_simple_string() {
        let bytes = b"test";
        let armored = encode(bytes);
        let decoded = decode(&armored).unwrap();
        assert_eq!(bytes, &decoded[..]);
    }

    #[test]
    fn test_length_invariant() {
        for len in [0usize, 1, 2, 7, 100, 4096] {
            let bytes = vec![0xA5u8; len];
            assert_eq!(encode(&bytes).len(), 2 * len);
        }
    }

    #[test]
    fn test_large_data() {
        let bytes = vec![0x42u8; 100_000];
        let armored = encode(&bytes);
        let decoded = decode(&armored).unwrap();
        assert_eq!(bytes, decoded);
    }

    #[test]
    fn test_all_byte_values() {
        let bytes: Vec<u8> = (0..=255).collect();
        let armored = encode(&bytes);

        // Test for exact output - lowercase, no separators, input order.
        assert_eq!(
            armored,
            "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f\
             202122232425262728292a2b2c2d2e2f303132333435363738393a3b3c3d3e3f\
             404142434445464748494a4b4c4d4e4f505152535455565758595a5b5c5d5e5f\
             606162636465666768696a6b6c6d6e6f707172737475767778797a7b7c7d7e7f\
             808182838485868788898a8b8c8d8e8f909192939495969798999a9b9c9d9e9f\
             a0a1a2a3a4a5a6a7a8a9aaabacadaeafb0b1b2b3b4b5b6b7b8b9babbbcbdbebf\
             c0c1c2c3c4c5c6c7c8c9cacbcccdcecfd0d1d2d3d4d5d6d7d8d9dadbdcdddedf\
             e0e1e2e3e4e5e6e7e8e9eaebecedeeeff0f1f2f3f4f5f6f7f8f9fafbfcfdfeff"
        );

        let decoded = decode(&armored).unwrap();
        assert_eq!(bytes, decoded);
    }

    #[test]
    fn test_odd_length_rejected() {
        let err = decode("a").expect_err("expected odd length error");
        assert_eq!(err.kind, Some(ErrorKind::MalformedHex));

        let err = decode("0a0").expect_err("expected odd length error");
        assert_eq!(err.kind, Some(ErrorKind::MalformedHex));
    }

    #[test]
    fn test_non_hex_characters_rejected() {
        let err = decode("zz").expect_err("expected invalid character error");
        assert_eq!(err.kind, Some(ErrorKind::MalformedHex));

        let err = decode("0a 0b").expect_err("expected invalid character error");
        assert_eq!(err.kind, Some(ErrorKind::MalformedHex));
    }

    #[test]
    fn test_uppercase_accepted_on_decode() {
        let decoded = decode("DEADBEEF").unwrap();
        assert_eq!(decoded, vec![0xDE, 0xAD, 0xBE, 0xEF]);
    }

    #[test]
    fn test_lowercase_output() {
        let armored = encode(&[0xDE, 0xAD, 0xBE, 0xEF]);
        assert_eq!(armored, "deadbeef");
        assert!(!armored.chars().any(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn test_no_whitespace() {
        let armored = encode(b"test data with spaces");

        assert!(!armored.contains(' '));
        assert!(!armored.contains('\n'));
        assert!(!armored.contains('\t'));
    }
}
