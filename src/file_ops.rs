//! File encryption/decryption operations
//!
//! High-level operations that read a whole file, run it through the
//! keystream transform, and write the result. Output is written atomically
//! (tempfile + fsync + rename), so a failed or interrupted operation never
//! leaves a partial output file behind.

use crate::error::{ErrorCategory, ErrorKind, HexboxError, Result};
use crate::hexarmor;
use crate::keyreader::KeyReader;
use crate::streamcrypt;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Encrypt a file with a key
///
/// Reads raw bytes from `input_path`, transforms them using a key from
/// `key_reader`, and writes the armored hex text to `output_path`.
///
/// The output file is created with mode 0o600 (read/write for owner only)
/// on Unix systems.
pub fn encrypt_file(
    input_path: &Path,
    output_path: &Path,
    key_reader: &mut dyn KeyReader,
) -> Result<()> {
    let plaintext = fs::read(input_path).map_err(|e| read_error(input_path, e))?;
    let key = key_reader.read_key()?;
    let transformed = streamcrypt::transform(&plaintext, &key)
        .map_err(|e| e.with_context("encryption failed"))?;
    let armored = hexarmor::encode(&transformed);
    write_file_atomic(output_path, armored.as_bytes())
        .map_err(|e| e.with_context(format!("failed to write to {}", output_path.display())))?;

    Ok(())
}

/// Decrypt a file with a key
///
/// Reads armored hex text from `input_path`, transforms it using a key from
/// `key_reader`, and writes the recovered raw bytes to `output_path`. The
/// recovered bytes are written as-is; only the string facade requires the
/// result to be UTF-8 text.
///
/// The output file is created with mode 0o600 (read/write for owner only)
/// on Unix systems.
pub fn decrypt_file(
    input_path: &Path,
    output_path: &Path,
    key_reader: &mut dyn KeyReader,
) -> Result<()> {
    let armored_bytes = fs::read(input_path).map_err(|e| read_error(input_path, e))?;
    let armored = String::from_utf8(armored_bytes).map_err(|e| {
        HexboxError::with_kind_and_source(
            ErrorCategory::User,
            ErrorKind::MalformedHex,
            "input file is not hex text (not valid UTF-8)",
            e,
        )
    })?;
    let key = key_reader.read_key()?;
    let transformed =
        hexarmor::decode(&armored).map_err(|e| e.with_context("failed to decode hex"))?;
    let plaintext = streamcrypt::transform(&transformed, &key)
        .map_err(|e| e.with_context("decryption failed"))?;
    write_file_atomic(output_path, &plaintext)
        .map_err(|e| e.with_context(format!("failed to write to {}", output_path.display())))?;
    Ok(())
}

/// Write file atomically with secure permissions (0o600 on Unix)
///
/// The contents are written to a tempfile in the destination directory,
/// flushed and fsynced, then renamed over the target. Either the old file
/// or the complete new file exists, never a partial one.
fn write_file_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp_file = tempfile::NamedTempFile::new_in(dir).map_err(|e| {
        HexboxError::with_kind_and_source(
            ErrorCategory::Internal,
            ErrorKind::Io,
            "failed to create tempfile",
            e,
        )
    })?;

    temp_file.write_all(contents).map_err(|e| {
        HexboxError::with_kind_and_source(
            ErrorCategory::Internal,
            ErrorKind::Io,
            "failed to write to tempfile",
            e,
        )
    })?;
    // Flush and fsync() such that the rename later, if it succeeds, will
    // always point to a valid file.
    temp_file.flush().map_err(|e| {
        HexboxError::with_kind_and_source(
            ErrorCategory::Internal,
            ErrorKind::Io,
            "failed to flush tempfile",
            e,
        )
    })?;
    temp_file.as_file().sync_all().map_err(|e| {
        HexboxError::with_kind_and_source(
            ErrorCategory::Internal,
            ErrorKind::Io,
            "failed to sync file prior to rename",
            e,
        )
    })?;

    // Persist with restrictive permissions before the rename makes the
    // file visible under the target name.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = temp_file
            .as_file()
            .metadata()
            .map_err(|e| {
                HexboxError::with_kind_and_source(
                    ErrorCategory::Internal,
                    ErrorKind::Io,
                    "failed to get tempfile metadata",
                    e,
                )
            })?
            .permissions();
        perms.set_mode(0o600);
        temp_file.as_file().set_permissions(perms).map_err(|e| {
            HexboxError::with_kind_and_source(
                ErrorCategory::Internal,
                ErrorKind::Io,
                "failed to set tempfile permissions",
                e,
            )
        })?;
    }
    temp_file.persist(path).map_err(|e| {
        HexboxError::with_kind_and_source(
            ErrorCategory::Internal,
            ErrorKind::Io,
            format!("failed to rename to target file {}", path.display()),
            e,
        )
    })?;
    Ok(())
}

fn read_error(path: &Path, err: io::Error) -> HexboxError {
    let category = if err.kind() == io::ErrorKind::NotFound {
        ErrorCategory::User
    } else {
        ErrorCategory::Internal
    };
    HexboxError::with_kind_and_source(
        category,
        ErrorKind::Io,
        format!("failed to read from {}", path.display()),
        err,
    )
}
