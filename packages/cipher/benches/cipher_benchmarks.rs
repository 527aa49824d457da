//! Throughput of the AES block cores and mode engines

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use cryptkit_cipher::block::BLOCK_SIZE;
use cryptkit_cipher::modes::{Cbc, Gcm};
use cryptkit_cipher::{Backend, Cipher, CipherContext, ModeEngine};
use tokio::runtime::Runtime;

const KEY: [u8; 32] = [0x5c; 32];

/// Raw block permutation, software vs detected backend
fn benchmark_block_cores(c: &mut Criterion) {
    let mut group = c.benchmark_group("aes_block");
    group.throughput(Throughput::Bytes(BLOCK_SIZE as u64));

    for backend in [Backend::Software, Backend::detect()] {
        let core = backend.block_core(&KEY).expect("valid key");
        group.bench_function(BenchmarkId::new("encrypt_block", backend.name()), |b| {
            let mut block = [0u8; BLOCK_SIZE];
            b.iter(|| {
                core.encrypt_block(&mut block);
                std::hint::black_box(&block);
            });
        });
    }
    group.finish();
}

/// CBC over growing inputs on both backends
fn benchmark_cbc(c: &mut Criterion) {
    let mut group = c.benchmark_group("aes_cbc_throughput");
    let sizes = [1024usize, 65536, 1_048_576];

    for size in sizes {
        group.throughput(Throughput::Bytes(size as u64));
        let data = vec![0u8; size];

        for backend in [Backend::Software, Backend::detect()] {
            let ctx = CipherContext::new(KEY.to_vec(), backend)
                .expect("valid key")
                .with_iv([0u8; 16]);
            group.bench_with_input(
                BenchmarkId::new(format!("encrypt_{}", backend.name()), size),
                &data,
                |b, data| {
                    b.iter(|| std::hint::black_box(Cbc.encrypt(&ctx, data).expect("encrypt")));
                },
            );
        }
    }
    group.finish();
}

/// GCM on the native engine
fn benchmark_gcm(c: &mut Criterion) {
    if !Backend::Native.is_available() {
        return;
    }
    let mut group = c.benchmark_group("aes_gcm_throughput");
    let ctx = CipherContext::new(KEY.to_vec(), Backend::Native)
        .expect("valid key")
        .with_iv([0u8; 12]);

    for size in [1024usize, 1_048_576] {
        group.throughput(Throughput::Bytes(size as u64));
        let data = vec![0u8; size];
        group.bench_with_input(BenchmarkId::new("seal", size), &data, |b, data| {
            b.iter(|| std::hint::black_box(Gcm.encrypt(&ctx, data).expect("seal")));
        });
    }
    group.finish();
}

/// Facade overhead on a small message
fn benchmark_builder(c: &mut Criterion) {
    let rt = Runtime::new().expect("tokio runtime");
    let iv = [0u8; 16];
    c.bench_function("aes_builder_hello_world", |b| {
        b.iter(|| {
            rt.block_on(async {
                let out = Cipher::aes()
                    .with_key(&KEY)
                    .with_iv(&iv)
                    .encrypt("Hello, World!")
                    .await
                    .expect("encrypt should succeed");
                std::hint::black_box(out);
            });
        });
    });
}

criterion_group!(
    benches,
    benchmark_block_cores,
    benchmark_cbc,
    benchmark_gcm,
    benchmark_builder
);
criterion_main!(benches);
