//! Binary LSD radix sort over ranks, driven only through stack primitives.
//! One pass per bit: zero bits drain into B, one bits cycle to the bottom of A.
//! B is pre-split on the next bit before that bit's pass over A.

use std::collections::VecDeque;

use crate::rank::{assign_ranks, restore_values};
use crate::stacks::Stacks;

/// Highest bit index visited for `n` ranks: the number of right shifts that
/// bring `n` below 2 (`floor(log2(n))`, 0 for `n <= 1`).
#[inline]
pub fn bit_count(n: usize) -> u32 {
    if n <= 1 { 0 } else { n.ilog2() }
}

#[inline]
fn bit_is_set(rank: i32, bit: u32) -> bool {
    (rank >> bit) & 1 == 1
}

/// Adjacent top-to-bottom pairs of A that are out of order.
fn descents(a: &VecDeque<i32>) -> usize {
    a.iter().zip(a.iter().skip(1)).filter(|(x, y)| x > y).count()
}

/// Partition pass over A for `bit`. At most one step per element present at
/// the start; with `early_exit` the pass stops as soon as A is ascending.
///
/// The descent count is updated per step so the sortedness check stays O(1).
fn partition_a(stacks: &mut Stacks, bit: u32, early_exit: bool) {
    let mut out_of_order = descents(stacks.a());
    for _ in 0..stacks.a().len() {
        if early_exit && out_of_order == 0 {
            break;
        }
        let a = stacks.a();
        let Some(&top) = a.front() else {
            break;
        };
        if let Some(&next) = a.get(1) {
            if top > next {
                out_of_order -= 1;
            }
        }
        if bit_is_set(top, bit) {
            // top becomes the new bottom, right after the old bottom
            if a.len() >= 2 && a[a.len() - 1] > top {
                out_of_order += 1;
            }
            stacks.ra();
        } else {
            stacks.pb();
        }
    }
}

/// Redistribution pass over B for `bit`: ones go back to A, zeros rotate to
/// the bottom of B so their relative order is kept.
fn redistribute_b(stacks: &mut Stacks, bit: u32) {
    for _ in 0..stacks.b().len() {
        let Some(&top) = stacks.b().front() else {
            break;
        };
        if bit_is_set(top, bit) {
            stacks.pa();
        } else {
            stacks.rb();
        }
    }
}

/// Sort A through ranks and restore the true values. B must start empty.
pub fn radix_sort(stacks: &mut Stacks, early_exit: bool) {
    debug_assert!(stacks.b().is_empty());
    let table = assign_ranks(stacks);
    let max_bit = bit_count(stacks.a().len());

    for bit in 0..=max_bit {
        partition_a(stacks, bit, early_exit);
        if bit < max_bit {
            redistribute_b(stacks, bit + 1);
        }
    }
    while !stacks.b().is_empty() {
        stacks.pa();
    }

    restore_values(stacks, &table);
}
