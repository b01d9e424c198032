//! Trial files: parsing into Arrow tables and per-trial metrics
//!
//! ## Data flow
//!
//! ```text
//! trial.txt ──read_trial──> TrialTable (RecordBatch, 6 columns)
//!                               │
//!                               └──compute_trial_metrics──> TrialMetrics
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use trialstat::config::RtWindow;
//! use trialstat::trial::{compute_trial_metrics, parse_trial};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let table = parse_trial("1 0 150 150 1 0\n2 0 450 300 0 1\n")?;
//! let metrics = compute_trial_metrics(&table, &RtWindow::default())?;
//! assert_eq!(metrics.mean_rt, Some(300.0));
//! # Ok(())
//! # }
//! ```

mod metrics;
mod reader;

pub use metrics::{compute_trial_metrics, TrialMetrics};
pub use reader::{parse_trial, read_trial, trial_schema, TrialTable, TRIAL_COLUMNS};
