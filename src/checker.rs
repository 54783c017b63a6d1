//! Replay an operation log against the original input and judge the result.

use std::fmt;
use std::io::BufRead;

use thiserror::Error;

use crate::op::{Op, UnknownOp};
use crate::stacks::Stacks;

#[derive(Debug, Error)]
/// Errors returned while reading an operation log.
pub enum CheckError {
    /// Line that is not a canonical operation name (1-based).
    #[error("line {line}: {source}")]
    UnknownOp {
        line: usize,
        #[source]
        source: UnknownOp,
    },
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Outcome of a replay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// A ascending and B empty.
    Ok,
    /// Anything else.
    Ko,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Verdict::Ok => "OK",
            Verdict::Ko => "KO",
        })
    }
}

/// Read one operation per line. Lines must match a canonical name exactly.
pub fn read_ops<R: BufRead>(reader: R) -> Result<Vec<Op>, CheckError> {
    let mut ops = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let op = line
            .parse::<Op>()
            .map_err(|source| CheckError::UnknownOp { line: i + 1, source })?;
        ops.push(op);
    }
    Ok(ops)
}

/// Apply `ops` to fresh stacks loaded with `values`.
pub fn replay(values: &[i32], ops: &[Op]) -> Stacks {
    let mut stacks = Stacks::new(values);
    for &op in ops {
        stacks.apply(op);
    }
    stacks
}

pub fn verdict(stacks: &Stacks) -> Verdict {
    if stacks.is_solved() {
        Verdict::Ok
    } else {
        Verdict::Ko
    }
}
