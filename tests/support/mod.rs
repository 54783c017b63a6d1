//! Shared helpers for integration tests.
#![allow(dead_code)]

/// Every permutation of `0..n` (Heap's algorithm).
pub fn permutations(n: usize) -> Vec<Vec<i32>> {
    fn heap(k: usize, v: &mut Vec<i32>, out: &mut Vec<Vec<i32>>) {
        if k <= 1 {
            out.push(v.clone());
            return;
        }
        for i in 0..k - 1 {
            heap(k - 1, v, out);
            if k % 2 == 0 {
                v.swap(i, k - 1);
            } else {
                v.swap(0, k - 1);
            }
        }
        heap(k - 1, v, out);
    }
    let mut v: Vec<i32> = (0..n as i32).collect();
    let mut out = Vec::new();
    heap(n, &mut v, &mut out);
    out
}

/// Spread ranks out into arbitrary (negative, sparse) distinct values.
pub fn spread(ranks: &[i32]) -> Vec<i32> {
    ranks.iter().map(|&r| r * 7919 - 20_000).collect()
}

/// Replay `ops` on `values` and return (A, B) as vectors.
pub fn replay_vecs(values: &[i32], ops: &[push_swap::Op]) -> (Vec<i32>, Vec<i32>) {
    let s = push_swap::replay(values, ops);
    (s.a().iter().copied().collect(), s.b().iter().copied().collect())
}
