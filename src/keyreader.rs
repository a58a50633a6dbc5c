//! Key acquisition for file operations
//!
//! String operations use the built-in demo key, but file operations take a
//! key phrase from the user. This module abstracts where that key comes
//! from so the file operations stay independently testable.

use crate::error::{ErrorCategory, ErrorKind, HexboxError, Result};
use std::io::{self, IsTerminal, Read, Write};
use zeroize::Zeroizing;

/// Trait for reading keys from various sources
pub trait KeyReader {
    /// Read a key as arbitrary bytes (not necessarily UTF-8)
    ///
    /// Returns the key wrapped in `Zeroizing` to ensure it is securely
    /// wiped from memory when dropped. Emptiness is not checked here; the
    /// keystream transform is the single enforcement point for the
    /// non-empty-key requirement.
    fn read_key(&mut self) -> Result<Zeroizing<Vec<u8>>>;
}

/// Returns a fixed key (for testing and library callers)
pub struct ConstantKeyReader {
    key: Zeroizing<Vec<u8>>,
}

impl ConstantKeyReader {
    pub fn new(key: Vec<u8>) -> Self {
        Self {
            key: Zeroizing::new(key),
        }
    }
}

impl KeyReader for ConstantKeyReader {
    fn read_key(&mut self) -> Result<Zeroizing<Vec<u8>>> {
        Ok(Zeroizing::new((*self.key).clone()))
    }
}

/// Reads a key from any io::Read source
pub struct ReaderKeyReader {
    reader: Box<dyn Read>,
}

impl ReaderKeyReader {
    pub fn new(reader: Box<dyn Read>) -> Self {
        Self { reader }
    }
}

impl KeyReader for ReaderKeyReader {
    fn read_key(&mut self) -> Result<Zeroizing<Vec<u8>>> {
        let mut data = Zeroizing::new(Vec::new());
        self.reader.read_to_end(&mut data).map_err(|e| {
            HexboxError::with_kind_and_source(
                ErrorCategory::Internal,
                ErrorKind::Io,
                format!("error reading key: {}", e),
                e,
            )
        })?;
        Ok(data)
    }
}

/// Reads a key from the terminal with no echo
pub struct TerminalKeyReader;

impl TerminalKeyReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalKeyReader {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyReader for TerminalKeyReader {
    /// Read a key from the terminal.
    ///
    /// Note: Terminal input is limited to UTF-8 due to rpassword library
    /// constraints. For non-UTF-8 keys, use --key-stdin instead.
    fn read_key(&mut self) -> Result<Zeroizing<Vec<u8>>> {
        if !io::stdin().is_terminal() {
            return Err(HexboxError::with_kind(
                ErrorCategory::User,
                ErrorKind::KeyUnavailable,
                "cannot read key from terminal - stdin is not a terminal",
            ));
        }

        io::stderr().write_all(b"Key (hexbox): ").map_err(|e| {
            HexboxError::with_kind_and_source(
                ErrorCategory::Internal,
                ErrorKind::Io,
                format!("failed to write prompt: {}", e),
                e,
            )
        })?;
        io::stderr().flush().map_err(|e| {
            HexboxError::with_kind_and_source(
                ErrorCategory::Internal,
                ErrorKind::Io,
                format!("failed to flush prompt: {}", e),
                e,
            )
        })?;

        // Read key *without echo*
        // Note: rpassword returns String (UTF-8 only), not zeroized
        let key = rpassword::read_password().map_err(|e| {
            HexboxError::with_kind_and_source(
                ErrorCategory::Internal,
                ErrorKind::KeyUnavailable,
                format!("failure reading key: {}", e),
                e,
            )
        })?;

        Ok(Zeroizing::new(key.into_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_reader() {
        let mut reader = ConstantKeyReader::new(b"test123".to_vec());
        assert_eq!(&*reader.read_key().unwrap(), b"test123");
        assert_eq!(&*reader.read_key().unwrap(), b"test123");
    }

    /// Tests the terminal reader. This is ignored by default and must be run
    /// explicitly and with human input:
    ///
    /// cargo test test_terminal_reader_interactive -- --ignored --nocapture
    #[test]
    #[ignore]
    fn test_terminal_reader_interactive() {
        let mut reader = TerminalKeyReader::new();
        println!("\nPlease enter a test key:");
        let key = reader.read_key().unwrap();
        println!("You entered: {}", String::from_utf8_lossy(&key));
        assert!(!key.is_empty(), "Expected non-empty key");
    }

    #[test]
    fn test_reader_key_reader() {
        let data = b"mykey";
        let mut reader = ReaderKeyReader::new(Box::new(&data[..]));
        assert_eq!(&*reader.read_key().unwrap(), b"mykey");
    }

    #[test]
    fn test_reader_key_reader_empty() {
        let data = b"";
        let mut reader = ReaderKeyReader::new(Box::new(&data[..]));
        assert_eq!(&*reader.read_key().unwrap(), b"");
    }

    /// Verifies that ReaderKeyReader accepts arbitrary byte sequences, not
    /// just valid UTF-8. This enables --key-stdin to work with keys
    /// containing non-UTF-8 bytes.
    #[test]
    fn test_reader_key_reader_non_utf8() {
        let data: &[u8] = &[0xff, 0xfe, 0x00, 0x01];
        let mut reader = ReaderKeyReader::new(Box::new(data));
        assert_eq!(&*reader.read_key().unwrap(), data);
    }
}
