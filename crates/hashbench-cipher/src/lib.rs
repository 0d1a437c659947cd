// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # hashbench_cipher
//!
//! Produces benchmark inputs:
//!
//! - random binary files of a given size ([`write_random_file`])
//! - AES-256-CBC encrypted copies of them ([`encrypt_file`])
//!
//! ## Encrypted file format
//!
//! ```text
//! +----------+-----------------------------------------+
//! | IV (16B) | AES-256-CBC(key, IV, PKCS#7(plaintext)) |
//! +----------+-----------------------------------------+
//! ```
//!
//! The key is never written. Key and IV are explicit parameters of every
//! encryption call and are zeroized when the [`CipherKey`] is dropped.
//!
//! ## Example
//!
//! ```rust
//! use hashbench_cipher::{CipherKey, decrypt, encrypt};
//!
//! let key = CipherKey::generate().expect("Failed to generate key");
//! let sealed = encrypt(&key, b"benchmark input").expect("Failed to encrypt");
//!
//! assert_eq!(sealed.len(), 16 + 16);
//! assert_eq!(decrypt(key.key(), &sealed).expect("Failed to decrypt"), b"benchmark input");
//! ```

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod aes_cbc;
mod error;
mod files;
mod key;

pub use aes_cbc::{BLOCK_SIZE, decrypt, encrypt};
pub use error::CipherError;
pub use files::{GeneratedFile, encrypt_file, generate_test_files, write_random_file};
pub use key::{CipherKey, IV_SIZE, KEY_SIZE};
