// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use proptest::prelude::*;

use crate::{Algorithm, Digest, HasherKind};

#[test]
fn test_same_buffer_hashes_to_same_digest() {
    let data = b"determinism check".repeat(1000);

    for algorithm in Algorithm::ALL {
        let hasher = algorithm.hasher(HasherKind::Bulk);
        assert_eq!(hasher.digest(&data), hasher.digest(&data), "{algorithm}");
    }
}

#[test]
fn test_digest_reader_matches_digest_for_both_kinds() {
    let data: Vec<u8> = (0..10_000u32).map(|i| (i % 251) as u8).collect();

    for algorithm in Algorithm::ALL {
        let expected = algorithm.bulk()(&data);

        for kind in [HasherKind::Bulk, HasherKind::Streaming] {
            let got = algorithm
                .hasher(kind)
                .digest_reader(data.as_slice(), 333)
                .expect("Failed to digest_reader(..)");
            assert_eq!(got, expected, "{algorithm} {kind:?}");
        }
    }
}

#[test]
fn test_zero_block_size_is_treated_as_one() {
    let hasher = Algorithm::Sha2.hasher(HasherKind::Streaming);

    assert_eq!(hasher.digest_chunked(b"abc", 0), hasher.digest(b"abc"));
    assert_eq!(
        hasher
            .digest_reader(&b"abc"[..], 0)
            .expect("Failed to digest_reader(..)"),
        hasher.digest(b"abc")
    );
}

#[test]
fn test_digest_display_is_lowercase_hex() {
    let digest = Digest::from_bytes(vec![0xde, 0xad, 0xbe, 0xef]);

    assert_eq!(digest.to_string(), "deadbeef");
    assert_eq!(format!("{digest:?}"), "Digest(deadbeef)");
    assert!(!digest.is_empty());
}

proptest! {
    #[test]
    fn streaming_matches_bulk_for_any_block_size(
        data in proptest::collection::vec(any::<u8>(), 0..4096),
        block_size in 1..=1024usize,
    ) {
        for algorithm in Algorithm::ALL {
            let bulk = algorithm.hasher(HasherKind::Bulk).digest(&data);
            let streamed = algorithm
                .hasher(HasherKind::Streaming)
                .digest_chunked(&data, block_size);

            prop_assert_eq!(bulk, streamed);
        }
    }
}
