use std::collections::{BTreeSet, HashSet};

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sparse_int_set::SparseSet;

fn sparse_insert(in_block: usize) -> SparseSet {
    let mut set: SparseSet = Default::default();
    for block in 0..200 {
        let offset = block * 256;
        for i in 0..in_block {
            set.insert(offset + i as i64);
        }
    }
    set
}

fn hash_set_insert(in_block: usize) -> HashSet<i64> {
    let mut set = HashSet::new();
    for block in 0..200 {
        let offset = block * 256;
        for i in 0..in_block {
            set.insert(offset + i as i64);
        }
    }
    set
}

fn btree_set_insert(in_block: usize) -> BTreeSet<i64> {
    let mut set = BTreeSet::new();
    for block in 0..200 {
        let offset = block * 256;
        for i in 0..in_block {
            set.insert(offset + i as i64);
        }
    }
    set
}

pub fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for &density in &[4usize, 64, 200] {
        group.bench_function(format!("sparse_int_set/{density}"), |b| {
            b.iter(|| sparse_insert(black_box(density)))
        });
        group.bench_function(format!("HashSet/{density}"), |b| {
            b.iter(|| hash_set_insert(black_box(density)))
        });
        group.bench_function(format!("BTreeSet/{density}"), |b| {
            b.iter(|| btree_set_insert(black_box(density)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_insert);
criterion_main!(benches);
