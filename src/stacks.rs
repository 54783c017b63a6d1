//! Dual-stack state (A and B) and the primitives that mutate it.
//!
//! Every primitive appends exactly one entry to the operation log. The guards
//! (`swap`/`rotate` need two elements, `push` needs a non-empty source) only
//! suppress the state change, never the log entry.

use std::collections::VecDeque;

use crate::op::Op;

/// Stacks A and B plus the log of every primitive applied to them.
///
/// Index 0 of each deque is the top of the stack.
#[derive(Clone, Debug, Default)]
pub struct Stacks {
    a: VecDeque<i32>,
    b: VecDeque<i32>,
    log: Vec<Op>,
}

#[inline]
fn swap_top(s: &mut VecDeque<i32>) {
    if s.len() >= 2 {
        s.swap(0, 1);
    }
}

#[inline]
fn rotate(s: &mut VecDeque<i32>) {
    if s.len() >= 2 {
        s.rotate_left(1);
    }
}

#[inline]
fn reverse_rotate(s: &mut VecDeque<i32>) {
    if s.len() >= 2 {
        s.rotate_right(1);
    }
}

#[inline]
fn move_top(src: &mut VecDeque<i32>, dst: &mut VecDeque<i32>) {
    if let Some(v) = src.pop_front() {
        dst.push_front(v);
    }
}

impl Stacks {
    /// Load `values` into A (first value on top); B and the log start empty.
    pub fn new(values: &[i32]) -> Self {
        Stacks {
            a: values.iter().copied().collect(),
            b: VecDeque::with_capacity(values.len()),
            log: Vec::new(),
        }
    }

    /// Apply one primitive and record it.
    pub fn apply(&mut self, op: Op) {
        match op {
            Op::Sa => swap_top(&mut self.a),
            Op::Sb => swap_top(&mut self.b),
            Op::Ss => {
                swap_top(&mut self.a);
                swap_top(&mut self.b);
            }
            Op::Pa => move_top(&mut self.b, &mut self.a),
            Op::Pb => move_top(&mut self.a, &mut self.b),
            Op::Ra => rotate(&mut self.a),
            Op::Rb => rotate(&mut self.b),
            Op::Rr => {
                rotate(&mut self.a);
                rotate(&mut self.b);
            }
            Op::Rra => reverse_rotate(&mut self.a),
            Op::Rrb => reverse_rotate(&mut self.b),
            Op::Rrr => {
                reverse_rotate(&mut self.a);
                reverse_rotate(&mut self.b);
            }
        }
        self.log.push(op);
    }

    pub fn sa(&mut self) {
        self.apply(Op::Sa)
    }
    pub fn sb(&mut self) {
        self.apply(Op::Sb)
    }
    pub fn ss(&mut self) {
        self.apply(Op::Ss)
    }
    pub fn pa(&mut self) {
        self.apply(Op::Pa)
    }
    pub fn pb(&mut self) {
        self.apply(Op::Pb)
    }
    pub fn ra(&mut self) {
        self.apply(Op::Ra)
    }
    pub fn rb(&mut self) {
        self.apply(Op::Rb)
    }
    pub fn rr(&mut self) {
        self.apply(Op::Rr)
    }
    pub fn rra(&mut self) {
        self.apply(Op::Rra)
    }
    pub fn rrb(&mut self) {
        self.apply(Op::Rrb)
    }
    pub fn rrr(&mut self) {
        self.apply(Op::Rrr)
    }

    /// Stack A, top first.
    #[inline]
    pub fn a(&self) -> &VecDeque<i32> {
        &self.a
    }

    /// Stack B, top first.
    #[inline]
    pub fn b(&self) -> &VecDeque<i32> {
        &self.b
    }

    /// Rewrites values in place; used by the rank transform only, so nothing is logged.
    #[inline]
    pub(crate) fn a_mut(&mut self) -> &mut VecDeque<i32> {
        &mut self.a
    }

    /// Operations applied so far, in execution order.
    #[inline]
    pub fn log(&self) -> &[Op] {
        &self.log
    }

    pub fn into_log(self) -> Vec<Op> {
        self.log
    }

    /// Total element count across both stacks.
    #[inline]
    pub fn len(&self) -> usize {
        self.a.len() + self.b.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A is strictly ascending from top to bottom (trivially true below two elements).
    pub fn is_a_sorted(&self) -> bool {
        self.a.iter().zip(self.a.iter().skip(1)).all(|(x, y)| x < y)
    }

    /// A sorted and B empty: the end state of a sort session.
    pub fn is_solved(&self) -> bool {
        self.b.is_empty() && self.is_a_sorted()
    }
}
