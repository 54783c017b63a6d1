//! Operation vocabulary: the canonical two-stack primitives.
//!
//! Names are the tokens written to the operation log, one per line.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One primitive stack operation.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Op {
    /// Swap the two topmost elements of A.
    Sa = 0,
    /// Swap the two topmost elements of B.
    Sb = 1,
    /// `sa` then `sb`, logged once.
    Ss = 2,
    /// Move the top of B onto A.
    Pa = 3,
    /// Move the top of A onto B.
    Pb = 4,
    /// Rotate A: top goes to the bottom.
    Ra = 5,
    /// Rotate B: top goes to the bottom.
    Rb = 6,
    /// `ra` then `rb`, logged once.
    Rr = 7,
    /// Reverse-rotate A: bottom comes to the top.
    Rra = 8,
    /// Reverse-rotate B: bottom comes to the top.
    Rrb = 9,
    /// `rra` then `rrb`, logged once.
    Rrr = 10,
}

/// Token that is not one of the canonical operation names.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown operation {0:?}")]
pub struct UnknownOp(pub String);

impl Op {
    /// Full vocabulary in canonical order.
    pub const ALL: [Op; 11] = [
        Op::Sa,
        Op::Sb,
        Op::Ss,
        Op::Pa,
        Op::Pb,
        Op::Ra,
        Op::Rb,
        Op::Rr,
        Op::Rra,
        Op::Rrb,
        Op::Rrr,
    ];

    /// Canonical log token.
    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            Op::Sa => "sa",
            Op::Sb => "sb",
            Op::Ss => "ss",
            Op::Pa => "pa",
            Op::Pb => "pb",
            Op::Ra => "ra",
            Op::Rb => "rb",
            Op::Rr => "rr",
            Op::Rra => "rra",
            Op::Rrb => "rrb",
            Op::Rrr => "rrr",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Op {
    type Err = UnknownOp;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Op::ALL
            .iter()
            .copied()
            .find(|op| op.name() == s)
            .ok_or_else(|| UnknownOp(s.to_owned()))
    }
}
