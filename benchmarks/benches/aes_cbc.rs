// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use hashbench_cipher::{CipherKey, decrypt, encrypt};

fn benchmark_encrypt(c: &mut Criterion) {
    let key = CipherKey::generate().expect("key generation failed");
    let mut group = c.benchmark_group("aes256cbc_encrypt");

    for size in [64, 1024, 16384, 1024 * 1024].iter() {
        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(format!("{} bytes", size), size, |b, &size| {
            let data = vec![0u8; size];

            b.iter(|| encrypt(black_box(&key), black_box(&data)).expect("encrypt failed"));
        });
    }
    group.finish();
}

fn benchmark_decrypt(c: &mut Criterion) {
    let key = CipherKey::generate().expect("key generation failed");
    let mut group = c.benchmark_group("aes256cbc_decrypt");

    for size in [64, 1024, 16384, 1024 * 1024].iter() {
        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(format!("{} bytes", size), size, |b, &size| {
            let sealed = encrypt(&key, &vec![0u8; size]).expect("initial encrypt failed");

            b.iter(|| decrypt(black_box(key.key()), black_box(&sealed)).expect("decrypt failed"));
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_encrypt, benchmark_decrypt);
criterion_main!(benches);
