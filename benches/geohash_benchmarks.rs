use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lightning_geohash::{decode, encode, neighbor, neighbors_with, Direction, FanOutMode};
use std::hint::black_box;

fn bench_encode_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_decode");

    for precision in [5usize, 9, 12].iter() {
        group.throughput(Throughput::Elements(1));

        group.bench_with_input(
            BenchmarkId::new("encode", precision),
            precision,
            |b, &precision| {
                b.iter(|| encode(black_box(57.64911), black_box(10.40744), precision));
            },
        );

        let hash = encode(57.64911, 10.40744, *precision);
        group.bench_with_input(BenchmarkId::new("decode", precision), &hash, |b, hash| {
            b.iter(|| decode(black_box(hash)).unwrap());
        });
    }

    group.finish();
}

fn bench_neighbors(c: &mut Criterion) {
    let mut group = c.benchmark_group("neighbors");

    // "u000" forces border recursion on the bottom and left sides.
    for hash in ["u4pruydqqvj", "u000"].iter() {
        group.bench_with_input(BenchmarkId::new("single", hash), hash, |b, hash| {
            b.iter(|| neighbor(black_box(hash), Direction::Left).unwrap());
        });

        group.bench_with_input(BenchmarkId::new("sequential", hash), hash, |b, hash| {
            b.iter(|| neighbors_with(black_box(hash), FanOutMode::Sequential).unwrap());
        });

        group.bench_with_input(BenchmarkId::new("parallel", hash), hash, |b, hash| {
            b.iter(|| neighbors_with(black_box(hash), FanOutMode::Parallel).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_encode_decode, bench_neighbors);
criterion_main!(benches);
