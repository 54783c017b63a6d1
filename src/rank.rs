//! Rank transform: replace values in A by their dense 0-based rank.
//!
//! The strictly ascending copy of the input doubles as the side table used to
//! put the true values back once the ranks are sorted.

use crate::stacks::Stacks;

/// Ascending copy of the input values; index = rank.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RankTable {
    sorted: Vec<i32>,
}

impl RankTable {
    /// Build the table from distinct values.
    pub fn from_values(values: &[i32]) -> Self {
        let mut sorted = values.to_vec();
        sorted.sort_unstable();
        debug_assert!(
            sorted.windows(2).all(|w| w[0] < w[1]),
            "rank table requires distinct values"
        );
        RankTable { sorted }
    }

    /// Rank of `value`, or `None` if it was not part of the input.
    #[inline]
    pub fn rank_of(&self, value: i32) -> Option<usize> {
        self.sorted.binary_search(&value).ok()
    }

    /// Value stored at `rank`.
    #[inline]
    pub fn value_of(&self, rank: usize) -> Option<i32> {
        self.sorted.get(rank).copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }
}

/// Rewrite every element of A as its rank and return the side table.
///
/// Not a primitive: the operation log is untouched.
pub fn assign_ranks(stacks: &mut Stacks) -> RankTable {
    let values: Vec<i32> = stacks.a().iter().copied().collect();
    let table = RankTable::from_values(&values);
    for v in stacks.a_mut().iter_mut() {
        let rank = table
            .rank_of(*v)
            .unwrap_or_else(|| panic!("value {v} missing from rank table"));
        *v = i32::try_from(rank).unwrap_or_else(|_| panic!("rank {rank} exceeds i32"));
    }
    table
}

/// Substitute each rank in A with its original value, position for position.
///
/// # Panics
/// If A holds anything that is not a rank of `table`.
pub fn restore_values(stacks: &mut Stacks, table: &RankTable) {
    for v in stacks.a_mut().iter_mut() {
        let value = usize::try_from(*v)
            .ok()
            .and_then(|rank| table.value_of(rank))
            .unwrap_or_else(|| panic!("rank {v} outside table of {} values", table.len()));
        *v = value;
    }
}
