use chunktree::{build, diff_leaves, DepthFirstOrder};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn content(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 31 % 251) as u8).collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for len in [64 * 1024, 1024 * 1024] {
        let data = content(len);
        group.bench_with_input(BenchmarkId::from_parameter(len), &data, |b, data| {
            b.iter(|| build(black_box(data.clone()), 1024).unwrap())
        });
    }
    group.finish();
}

fn bench_diff(c: &mut Criterion) {
    let data = content(1024 * 1024);
    let mut edited = data.clone();
    edited[512 * 1024] ^= 0xff;
    let old = build(data, 1024).unwrap();
    let new = build(edited, 1024).unwrap();

    c.bench_function("inconsistent_leaves", |b| {
        b.iter(|| old.inconsistent_leaves(black_box(&new)).unwrap())
    });
    c.bench_function("diff_leaves", |b| {
        b.iter(|| diff_leaves(old.root(), black_box(new.root())).unwrap())
    });
    c.bench_function("depth_first_pre", |b| {
        b.iter(|| old.depth_first(black_box(DepthFirstOrder::Pre)).len())
    });
}

criterion_group!(benches, bench_build, bench_diff);
criterion_main!(benches);
