fn main() {
    use itertools::assert_equal;
    use sparse_int_set::SparseSet;

    let a: SparseSet = [1, 2, 3, 4].into_iter().collect();
    let b: SparseSet = [3, 4, 5, 6].into_iter().collect();
    let c: SparseSet = [4, 9, 10].into_iter().collect();

    // three-operand forms write into a fresh (or reused) destination
    let mut intersection = SparseSet::new();
    intersection.intersection(&a, &b);
    assert_equal(&intersection, [3, 4]);

    // two-operand in-place forms fold another set into an existing one
    let mut union = intersection;
    union.union_with(&c);
    assert_equal(&union, [3, 4, 9, 10]);

    // membership, min/max and draining in ascending order
    assert!(union.has(9));
    assert_eq!(union.min(), 3);
    assert_eq!(union.max(), 10);

    let mut drained = Vec::new();
    while let Some(x) = union.take_min() {
        drained.push(x);
    }
    assert_equal(drained, [3, 4, 9, 10]);

    // rendering
    let mut s: SparseSet = SparseSet::new();
    s.insert(-3);
    s.insert(0);
    s.insert(4);
    s.insert(5);
    assert_eq!(s.to_string(), "{-3 0 4 5}");
    assert_eq!(s.bit_string(), "110001.001");
}
