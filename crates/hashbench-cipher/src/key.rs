// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::CipherError;

/// AES-256 key size in bytes.
pub const KEY_SIZE: usize = 32;

/// CBC initialization vector size in bytes.
pub const IV_SIZE: usize = 16;

/// Key and IV for one encryption call. Zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct CipherKey {
    key: [u8; KEY_SIZE],
    iv: [u8; IV_SIZE],
}

impl CipherKey {
    /// Fresh random key and IV from the OS CSPRNG.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::EntropyNotAvailable`] if `getrandom` fails.
    pub fn generate() -> Result<Self, CipherError> {
        let mut key = Self {
            key: [0u8; KEY_SIZE],
            iv: [0u8; IV_SIZE],
        };
        getrandom::fill(&mut key.key).map_err(|_| CipherError::EntropyNotAvailable)?;
        getrandom::fill(&mut key.iv).map_err(|_| CipherError::EntropyNotAvailable)?;
        Ok(key)
    }

    /// Uses caller-provided key and IV.
    pub fn from_parts(key: [u8; KEY_SIZE], iv: [u8; IV_SIZE]) -> Self {
        Self { key, iv }
    }

    /// The AES-256 key.
    pub fn key(&self) -> &[u8; KEY_SIZE] {
        &self.key
    }

    /// The CBC IV.
    pub fn iv(&self) -> &[u8; IV_SIZE] {
        &self.iv
    }
}

impl core::fmt::Debug for CipherKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("CipherKey([REDACTED])")
    }
}
