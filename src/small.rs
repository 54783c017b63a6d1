//! Fixed-plan sorters for 2, 3 and 4–5 elements.

use crate::op::Op;
use crate::stacks::Stacks;

/// Two elements, known to be out of order: one swap.
pub fn sort_two(stacks: &mut Stacks) {
    stacks.sa();
}

/// Minimal plan for three distinct values at (top, middle, bottom).
///
/// Each of the six orderings maps to one fixed sequence of at most two ops.
pub fn triple_plan(top: i32, mid: i32, bottom: i32) -> &'static [Op] {
    match (top > mid, mid > bottom, top > bottom) {
        // 2 1 3
        (true, false, false) => &[Op::Sa],
        // 3 2 1
        (true, true, true) => &[Op::Sa, Op::Rra],
        // 3 1 2
        (true, false, true) => &[Op::Ra],
        // 2 3 1
        (false, true, true) => &[Op::Rra],
        // 1 3 2
        (false, true, false) => &[Op::Sa, Op::Ra],
        // 1 2 3 (the two remaining combinations cannot occur)
        _ => &[],
    }
}

/// Sort exactly three elements in A.
pub fn sort_three(stacks: &mut Stacks) {
    let a = stacks.a();
    debug_assert_eq!(a.len(), 3);
    let plan = triple_plan(a[0], a[1], a[2]);
    for &op in plan {
        stacks.apply(op);
    }
}

/// Index of the smallest value in A.
fn min_index(stacks: &Stacks) -> Option<usize> {
    stacks
        .a()
        .iter()
        .enumerate()
        .min_by_key(|&(_, v)| *v)
        .map(|(i, _)| i)
}

/// Bring the minimum of A to the top along the shorter direction.
/// Ties (index exactly half the size) go forward.
fn rotate_min_to_top(stacks: &mut Stacks) {
    let Some(idx) = min_index(stacks) else {
        return;
    };
    let len = stacks.a().len();
    if idx <= len / 2 {
        for _ in 0..idx {
            stacks.ra();
        }
    } else {
        for _ in idx..len {
            stacks.rra();
        }
    }
}

/// Sort four or five elements: park the `n - 3` smallest in B, solve the
/// remaining triple, then bring B back on top.
pub fn sort_small_batch(stacks: &mut Stacks) {
    let parked = stacks.a().len().saturating_sub(3);
    for _ in 0..parked {
        rotate_min_to_top(stacks);
        stacks.pb();
    }
    sort_three(stacks);
    while !stacks.b().is_empty() {
        stacks.pa();
    }
}
