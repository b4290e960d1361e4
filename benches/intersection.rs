use std::collections::HashSet;

use criterion::{criterion_group, criterion_main, Criterion};
use sparse_int_set::SparseSet;

const SETS: usize = 5;

/// All sets share every `index_mul`-th index, so the intersection is the
/// best case for a linked-list walk: every block lines up.
fn generate_indices(size: usize, index_mul: usize, sets: usize) -> Vec<Vec<i64>> {
    let indices: Vec<i64> = (0..size as i64).map(|i| i * index_mul as i64).collect();
    (0..sets).map(|_| indices.clone()).collect()
}

fn sparse_intersection(sets: &[SparseSet]) -> usize {
    let mut result = sets[0].clone();
    for s in &sets[1..] {
        result.intersection_with(s);
    }
    result.len()
}

fn hash_set_intersection(sets: &[HashSet<i64>]) -> usize {
    let (first, rest) = sets.split_first().unwrap();
    first
        .iter()
        .filter(|i| rest.iter().all(|o| o.contains(i)))
        .count()
}

pub fn bench_intersection(c: &mut Criterion) {
    for &index_mul in &[20usize, 200] {
        let mut group = c.benchmark_group(format!("intersection - index step {index_mul}"));
        for &size in &[100usize, 1000, 4000] {
            let indices = generate_indices(size, index_mul, SETS);

            let sparse_sets: Vec<SparseSet> =
                indices.iter().map(|ix| ix.iter().copied().collect()).collect();
            let hash_sets: Vec<HashSet<i64>> =
                indices.iter().map(|ix| ix.iter().copied().collect()).collect();

            group.bench_function(format!("sparse_int_set/{size}"), |b| {
                b.iter(|| sparse_intersection(&sparse_sets))
            });
            group.bench_function(format!("HashSet/{size}"), |b| {
                b.iter(|| hash_set_intersection(&hash_sets))
            });
        }
        group.finish();
    }
}

criterion_group!(benches, bench_intersection);
criterion_main!(benches);
