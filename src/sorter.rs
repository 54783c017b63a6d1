//! Sort sessions: configuration, strategy dispatch and the public entry points.

use crate::op::Op;
use crate::radix::radix_sort;
use crate::small::{sort_small_batch, sort_three, sort_two};
use crate::stacks::Stacks;

/// Largest input accepted by default.
pub const DEFAULT_MAX_LEN: usize = 100_000;

/// Sort-time configuration.
#[derive(Clone, Debug)]
pub struct SortConfig {
    max_len: usize,
    early_exit: bool,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            max_len: DEFAULT_MAX_LEN,
            early_exit: true,
        }
    }
}

impl SortConfig {
    /// Capacity bound; longer inputs must be rejected before sorting.
    pub fn with_max_len(mut self, n: usize) -> Self {
        self.max_len = n;
        self
    }
    /// Stop a radix partition pass once A is already ascending (default: true).
    /// Turning it off never breaks correctness but usually costs extra ops.
    pub fn early_exit(mut self, yes: bool) -> Self {
        self.early_exit = yes;
        self
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }
    pub fn early_exit_enabled(&self) -> bool {
        self.early_exit
    }
}

/// Strategy chosen from the sequence length alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Two elements: one swap.
    Pair,
    /// Three elements: fixed per-ordering plan.
    Triple,
    /// Four or five elements: park minima in B, solve the triple.
    SmallBatch,
    /// Six or more: rank transform plus binary radix partition.
    Radix,
}

impl Strategy {
    pub fn for_len(n: usize) -> Self {
        match n {
            0..=2 => Strategy::Pair,
            3 => Strategy::Triple,
            4..=5 => Strategy::SmallBatch,
            _ => Strategy::Radix,
        }
    }
}

/// Run a full sort session and return the final stacks (A sorted, B empty,
/// the log holding every op emitted).
///
/// Values must be distinct. Already ascending input yields an empty log.
///
/// # Panics
/// If `values` is longer than the configured `max_len`.
pub fn sort_session(values: &[i32], cfg: &SortConfig) -> Stacks {
    assert!(
        values.len() <= cfg.max_len,
        "input of {} values exceeds capacity {}",
        values.len(),
        cfg.max_len
    );
    let mut stacks = Stacks::new(values);
    if stacks.is_a_sorted() {
        return stacks;
    }
    match Strategy::for_len(values.len()) {
        Strategy::Pair => sort_two(&mut stacks),
        Strategy::Triple => sort_three(&mut stacks),
        Strategy::SmallBatch => sort_small_batch(&mut stacks),
        Strategy::Radix => radix_sort(&mut stacks, cfg.early_exit),
    }
    debug_assert!(stacks.is_solved());
    stacks
}

/// Operation log that sorts `values`, using `cfg`.
pub fn sort_with(values: &[i32], cfg: &SortConfig) -> Vec<Op> {
    sort_session(values, cfg).into_log()
}

/// Operation log that sorts `values`, using the default configuration.
pub fn sort(values: &[i32]) -> Vec<Op> {
    sort_with(values, &SortConfig::default())
}
