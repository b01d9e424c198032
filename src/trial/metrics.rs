//! Per-trial metrics
//!
//! RT filtering and sums run on Arrow compute kernels:
//! mask = (RT >= min) AND (RT <= max), then filter + sum.

use super::TrialTable;
use crate::config::RtWindow;
use crate::{Error, Result};
use arrow::array::{Array, AsArray, Float64Array, Int64Array};
use arrow::compute::kernels::aggregate::{sum, sum_checked};
use arrow::compute::kernels::boolean::and;
use arrow::compute::kernels::cmp::{gt_eq, lt_eq};
use arrow::compute::kernels::filter::filter;
use arrow::datatypes::Float64Type;

/// Reduced metrics for one trial file
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialMetrics {
    /// Mean RT over rows inside the window; `None` when no row qualifies
    pub mean_rt: Option<f64>,
    /// Sum of the `Commissions` column over all rows
    pub total_commissions: i64,
    /// Sum of the `Lapses` column over all rows
    pub total_lapses: i64,
    /// Rows whose RT fell inside the window
    pub valid_rt_count: usize,
}

/// Compute metrics for one parsed trial
///
/// Commission and lapse totals ignore the RT filter.
///
/// # Errors
/// Returns [`Error::Arrow`] if a compute kernel fails and
/// [`Error::InvalidInput`] if a count column overflows `i64`
pub fn compute_trial_metrics(table: &TrialTable, window: &RtWindow) -> Result<TrialMetrics> {
    let rt = table.rt();

    let lower = gt_eq(rt, &Float64Array::new_scalar(window.min()))?;
    let upper = lt_eq(rt, &Float64Array::new_scalar(window.max()))?;
    let mask = and(&lower, &upper)?;

    let valid = filter(rt, &mask)?;
    let valid = valid.as_primitive::<Float64Type>();

    #[allow(clippy::cast_precision_loss)]
    let mean_rt = if valid.is_empty() {
        None
    } else {
        sum(valid).map(|total| total / valid.len() as f64)
    };

    Ok(TrialMetrics {
        mean_rt,
        total_commissions: checked_total(table.commissions(), "Commissions")?,
        total_lapses: checked_total(table.lapses(), "Lapses")?,
        valid_rt_count: valid.len(),
    })
}

fn checked_total(column: &Int64Array, name: &str) -> Result<i64> {
    sum_checked(column)
        .map(Option::unwrap_or_default)
        .map_err(|e| Error::InvalidInput(format!("'{name}' total overflows i64: {e}")))
}
