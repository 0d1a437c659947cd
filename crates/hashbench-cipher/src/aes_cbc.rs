// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use aes::Aes256;
use aes::cipher::block_padding::Pkcs7;
use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};

use crate::error::CipherError;
use crate::key::{CipherKey, IV_SIZE, KEY_SIZE};

/// AES block size in bytes.
pub const BLOCK_SIZE: usize = 16;

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// Encrypts `plaintext` under `key`.
///
/// Returns: IV (16 bytes) || ciphertext. The ciphertext is always one to
/// sixteen bytes longer than the plaintext because PKCS#7 pads whole blocks.
pub fn encrypt(key: &CipherKey, plaintext: &[u8]) -> Result<Vec<u8>, CipherError> {
    let cipher = Aes256CbcEnc::new_from_slices(key.key(), key.iv())
        .map_err(|_| CipherError::InvalidKeyLength)?;
    let ciphertext = cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext);

    let mut out = Vec::with_capacity(IV_SIZE + ciphertext.len());
    out.extend_from_slice(key.iv());
    out.extend_from_slice(&ciphertext);

    Ok(out)
}

/// Decrypts IV || ciphertext produced by [`encrypt`].
pub fn decrypt(key: &[u8; KEY_SIZE], sealed: &[u8]) -> Result<Vec<u8>, CipherError> {
    if sealed.len() < IV_SIZE + BLOCK_SIZE || (sealed.len() - IV_SIZE) % BLOCK_SIZE != 0 {
        return Err(CipherError::InvalidCiphertextLength(sealed.len()));
    }

    let (iv, ciphertext) = sealed.split_at(IV_SIZE);
    let cipher =
        Aes256CbcDec::new_from_slices(key, iv).map_err(|_| CipherError::InvalidKeyLength)?;

    cipher
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| CipherError::InvalidPadding)
}
