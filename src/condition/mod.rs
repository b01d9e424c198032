//! Condition aggregation
//!
//! ## Layout
//!
//! ```text
//! root/
//!   a1/  trial_01.txt trial_02.txt ...   ──analyze_condition──> ConditionSummary
//!   b1/  ...
//!   a2/  ...
//!   b2/  ...
//!                                          ──build_suite──> ConditionSuite (canonical order)
//! ```
//!
//! Condition directories are matched to canonical labels by name, so the
//! label of every suite entry is the directory its summary came from.

mod analyzer;
mod suite;

pub use analyzer::{analyze_condition, summarize, ConditionSummary};
pub use suite::{build_suite, condition_index, ConditionSuite, CONDITION_KEYS};
