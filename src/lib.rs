//! Two-stack sorting planner ("push_swap") in Rust (edition 2024).
//!
//! Given distinct integers loaded into stack A, produce a short sequence of
//! stack operations (`sa sb ss pa pb ra rb rr rra rrb rrr`) that leaves A
//! ascending and B empty. The operation log is the product; the sorted stack
//! is a side effect.
//!
//! - 2, 3 elements: fixed minimal plans
//! - 4–5 elements: park minima in B, solve the remaining triple
//! - 6+ elements: rank transform + binary radix partition across both stacks
//!
//! [`checker`] replays a log against the input to verify it.

pub mod checker;
pub mod input;
pub mod op;
pub mod radix;
pub mod rank;
pub mod small;
mod sorter;
pub mod stacks;

pub use checker::{CheckError, Verdict, read_ops, replay, verdict};
pub use input::{InputError, is_ascending, parse_args};
pub use op::{Op, UnknownOp};
pub use sorter::{DEFAULT_MAX_LEN, SortConfig, Strategy, sort, sort_session, sort_with};
pub use stacks::Stacks;
