//! Benchmarks for rabincdc.
//!
//! Run with:
//!     cargo bench

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use rabincdc::{Chunker, ChunkerConfig};

/// Deterministic pseudo-random benchmark data.
fn lcg_bytes(n: usize, mut state: u64) -> Vec<u8> {
    let mut out = Vec::with_capacity(n);
    for _ in 0..n {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        out.push((state >> 33) as u8);
    }
    out
}

fn bench_chunker(c: &mut Criterion) {
    let mut group = c.benchmark_group("chunker");

    // Different data sizes
    for size in [64 * 1024, 1024 * 1024, 10 * 1024 * 1024] {
        let data = lcg_bytes(size, 0x9E3779B97F4A7C15);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(
            format!("random_{}kb", size / 1024),
            &data,
            |b, data| {
                b.iter(|| {
                    let chunker = Chunker::new(ChunkerConfig::default()).unwrap();
                    let chunks = chunker.chunk_bytes(black_box(data.clone()));
                    black_box(chunks.len())
                });
            },
        );

        // All zeros: no natural boundaries, every cut forced at max
        let zeros = vec![0u8; size];
        group.bench_with_input(format!("zeros_{}kb", size / 1024), &zeros, |b, data| {
            b.iter(|| {
                let chunker = Chunker::new(ChunkerConfig::default()).unwrap();
                let chunks = chunker.chunk_bytes(black_box(data.clone()));
                black_box(chunks.len())
            });
        });
    }

    group.finish();
}

fn bench_configs(c: &mut Criterion) {
    let mut group = c.benchmark_group("configs");
    let size = 1024 * 1024; // 1 MB
    let data = lcg_bytes(size, 0x9E3779B97F4A7C15);
    group.throughput(Throughput::Bytes(size as u64));

    // Small chunks
    group.bench_function("small_chunks", |b| {
        let config = ChunkerConfig::new(32, 2 * 1024, 8 * 1024, 32 * 1024).unwrap();
        b.iter(|| {
            let chunker = Chunker::new(config).unwrap();
            let chunks = chunker.chunk_bytes(black_box(data.clone()));
            black_box(chunks.len())
        });
    });

    // Large chunks
    group.bench_function("large_chunks", |b| {
        let config = ChunkerConfig::new(32, 16 * 1024, 64 * 1024, 256 * 1024).unwrap();
        b.iter(|| {
            let chunker = Chunker::new(config).unwrap();
            let chunks = chunker.chunk_bytes(black_box(data.clone()));
            black_box(chunks.len())
        });
    });

    // Wide window
    group.bench_function("wide_window", |b| {
        let config = ChunkerConfig::default().with_window_size(63);
        b.iter(|| {
            let chunker = Chunker::new(config).unwrap();
            let chunks = chunker.chunk_bytes(black_box(data.clone()));
            black_box(chunks.len())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_chunker, bench_configs);
criterion_main!(benches);
