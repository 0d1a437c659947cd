// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use zeroize::Zeroize;

use crate::key::CipherKey;

#[test]
fn test_generated_keys_differ() {
    let a = CipherKey::generate().expect("Failed to generate key");
    let b = CipherKey::generate().expect("Failed to generate key");

    assert_ne!(a.key(), b.key());
    assert_ne!(a.iv(), b.iv());
}

#[test]
fn test_zeroize_clears_key_and_iv() {
    let mut key = CipherKey::from_parts([0x11; 32], [0x22; 16]);

    key.zeroize();

    assert_eq!(key.key(), &[0u8; 32]);
    assert_eq!(key.iv(), &[0u8; 16]);
}

#[test]
fn test_debug_redacts_material() {
    let key = CipherKey::from_parts([0xAB; 32], [0xCD; 16]);
    let debug = format!("{key:?}");

    assert_eq!(debug, "CipherKey([REDACTED])");
    assert!(!debug.contains("171"));
}
