use std::collections::{BTreeSet, HashSet};

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sparse_int_set::SparseSet;

fn sparse_sum(set: &SparseSet) -> i64 {
    set.iter().sum()
}

fn hash_set_sum(set: &HashSet<i64>) -> i64 {
    set.iter().sum()
}

fn btree_set_sum(set: &BTreeSet<i64>) -> i64 {
    set.iter().sum()
}

pub fn bench_iteration(c: &mut Criterion) {
    let values: Vec<i64> = (0..3000).map(|i| i * 64).collect();

    let sparse: SparseSet = values.iter().copied().collect();
    let hash_set: HashSet<i64> = values.iter().copied().collect();
    let btree_set: BTreeSet<i64> = values.iter().copied().collect();

    let mut group = c.benchmark_group("iteration");
    group.bench_function("sparse_int_set", |b| b.iter(|| sparse_sum(black_box(&sparse))));
    group.bench_function("HashSet", |b| b.iter(|| hash_set_sum(black_box(&hash_set))));
    group.bench_function("BTreeSet", |b| b.iter(|| btree_set_sum(black_box(&btree_set))));
    group.finish();
}

criterion_group!(benches, bench_iteration);
criterion_main!(benches);
