// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::aes_cbc::encrypt;
use crate::error::CipherError;
use crate::key::CipherKey;

const BYTES_PER_MB: u64 = 1024 * 1024;
const WRITE_CHUNK: usize = 1024 * 1024;

/// Paths written for one requested size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Size in megabytes as requested.
    pub size_mb: u64,
    /// `{size}MB.bin` with random contents.
    pub plain: PathBuf,
    /// `{size}MB.enc`, present unless encryption was disabled.
    pub encrypted: Option<PathBuf>,
}

/// Writes `size_bytes` random bytes to `path`, truncating any existing file.
pub fn write_random_file(path: &Path, size_bytes: u64) -> Result<(), CipherError> {
    let file = File::create(path).map_err(|e| CipherError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    let mut chunk = vec![0u8; WRITE_CHUNK];
    let mut remaining = size_bytes;

    while remaining > 0 {
        let len = remaining.min(WRITE_CHUNK as u64) as usize;
        getrandom::fill(&mut chunk[..len]).map_err(|_| CipherError::EntropyNotAvailable)?;
        writer
            .write_all(&chunk[..len])
            .map_err(|e| CipherError::io(path, e))?;
        remaining -= len as u64;
    }

    writer.flush().map_err(|e| CipherError::io(path, e))?;
    Ok(())
}

/// Encrypts `input` into `output` as IV || AES-256-CBC(PKCS#7(contents)).
pub fn encrypt_file(input: &Path, output: &Path, key: &CipherKey) -> Result<(), CipherError> {
    let plaintext = fs::read(input).map_err(|e| CipherError::io(input, e))?;
    let sealed = encrypt(key, &plaintext)?;
    fs::write(output, sealed).map_err(|e| CipherError::io(output, e))?;

    tracing::debug!(input = ?input, output = ?output, "Encrypted file");
    Ok(())
}

/// Writes `dir/{size}MB.bin` for each size and, when `encrypt` is set,
/// `dir/{size}MB.enc` under a fresh key per file.
///
/// Stops at the first failure.
pub fn generate_test_files(
    dir: &Path,
    sizes_mb: &[u64],
    encrypt: bool,
) -> Result<Vec<GeneratedFile>, CipherError> {
    fs::create_dir_all(dir).map_err(|e| CipherError::io(dir, e))?;

    let mut generated = Vec::with_capacity(sizes_mb.len());
    for &size_mb in sizes_mb {
        let size_bytes = size_mb
            .checked_mul(BYTES_PER_MB)
            .ok_or(CipherError::SizeOverflow(size_mb))?;
        let plain = dir.join(format!("{size_mb}MB.bin"));
        write_random_file(&plain, size_bytes)?;
        tracing::info!(path = ?plain, size_mb, "Generated random file");

        let encrypted = if encrypt {
            let path = dir.join(format!("{size_mb}MB.enc"));
            let key = CipherKey::generate()?;
            encrypt_file(&plain, &path, &key)?;
            tracing::info!(path = ?path, "Generated encrypted file");
            Some(path)
        } else {
            None
        };

        generated.push(GeneratedFile {
            size_mb,
            plain,
            encrypted,
        });
    }

    Ok(generated)
}
