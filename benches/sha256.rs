use sha256_trace::{digest, digest_with_trace};

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_sha256(c: &mut Criterion) {
    let mut group = c.benchmark_group("sha256");

    for len in [64usize, 1024, 16 * 1024] {
        let data = vec![0u8; len];
        group.throughput(Throughput::Bytes(len as u64));

        group.bench_with_input(BenchmarkId::new("digest", len), &data, |b, data| {
            b.iter(|| digest(black_box(data)))
        });

        group.bench_with_input(
            BenchmarkId::new("digest_with_trace", len),
            &data,
            |b, data| b.iter(|| digest_with_trace(black_box(data))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_sha256);
criterion_main!(benches);
