//! # trialstat: Behavioral Trial Statistics per Condition
//!
//! trialstat reads whitespace-delimited trial logs grouped into condition
//! subdirectories, reduces every trial to mean valid reaction time,
//! commission count and lapse count, aggregates trials per condition, and
//! renders bar-chart summaries.
//!
//! ## Pipeline
//!
//! ```text
//! build_suite ──> analyze_condition ──> read_trial ──> compute_trial_metrics
//!      │
//!      └──> ConditionSuite ──> render_charts / SuiteReport
//! ```
//!
//! - Reaction times are valid only inside the inclusive window `[100, 500]` ms
//! - Conditions are reported in the fixed order `a1, b1, a2, b2`
//! - Every failure aborts the run: no partial results
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use trialstat::config::AnalysisConfig;
//! use trialstat::condition::build_suite;
//!
//! let suite = build_suite("data/session", &AnalysisConfig::default())?;
//! for (label, summary) in suite.iter() {
//!     println!("{label}: {:.1} ms", summary.mean_of_means);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod chart;
pub mod cli;
pub mod condition;
pub mod config;
pub mod discovery;
pub mod error;
pub mod report;
pub mod trial;

pub use error::{Error, Result};
