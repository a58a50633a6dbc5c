//! String encryption/decryption facade
//!
//! Composes the keystream transform with hex armoring into the two
//! operations the presentation layer calls: text in, armored hex out, and
//! back. Both operations are pure, stateless, single-shot transformations;
//! they are safe to call from any thread.

use crate::error::{ErrorCategory, ErrorKind, HexboxError, Result};
use crate::hexarmor;
use crate::streamcrypt;

/// Built-in demo key used by the no-key entry points.
///
/// A fixed literal, cycled over the input. This exists so the tool works
/// out of the box for demonstration; anything needing an actual secret must
/// use the `_with` variants and supply its own key.
pub const BUILTIN_KEY: &[u8] = b"CRYPTOKEY";

/// Encrypt text with the built-in key, returning the armored hex form.
///
/// Total: every input (including the empty string) produces an even-length
/// lowercase hex string of exactly twice the UTF-8 byte length.
pub fn encrypt_string(text: &str) -> String {
    encrypt_string_with(text, BUILTIN_KEY).expect("built-in key is non-empty")
}

/// Decrypt an armored hex string produced with the built-in key.
pub fn decrypt_string(armored: &str) -> Result<String> {
    decrypt_string_with(armored, BUILTIN_KEY)
}

/// Encrypt text with a caller-supplied key, returning the armored hex form.
pub fn encrypt_string_with(text: &str, key: &[u8]) -> Result<String> {
    let transformed = streamcrypt::transform(text.as_bytes(), key)?;
    Ok(hexarmor::encode(&transformed))
}

/// Decrypt an armored hex string with a caller-supplied key.
///
/// Fails with [`ErrorKind::MalformedHex`] when the input is not valid hex of
/// even length, and with [`ErrorKind::InvalidEncoding`] when the recovered
/// bytes are not valid UTF-8. No partial result is ever returned.
pub fn decrypt_string_with(armored: &str, key: &[u8]) -> Result<String> {
    let transformed = hexarmor::decode(armored)?;
    let plaintext = streamcrypt::transform(&transformed, key)?;
    String::from_utf8(plaintext).map_err(|e| {
        HexboxError::with_kind_and_source(
            ErrorCategory::User,
            ErrorKind::InvalidEncoding,
            "recovered bytes are not valid UTF-8; wrong key or not text data",
            e,
        )
    })
}
