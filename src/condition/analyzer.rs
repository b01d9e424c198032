//! Condition analyzer - fold per-trial metrics into one condition summary

use crate::config::{AnalysisConfig, MissingRtPolicy};
use crate::discovery::list_data_files;
use crate::trial::{compute_trial_metrics, read_trial, TrialMetrics};
use crate::{Error, Result};
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info, warn};

/// Summary statistics for one condition directory
///
/// Every field is zero when the directory holds no trial files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ConditionSummary {
    /// Mean of the per-trial mean RTs
    pub mean_of_means: f64,
    /// Commissions summed over all trials
    pub total_commissions: i64,
    /// `total_commissions / trial_count`
    pub mean_commissions: f64,
    /// Lapses summed over all trials
    pub total_lapses: i64,
    /// `total_lapses / trial_count`
    pub mean_lapses: f64,
    /// Number of trial files aggregated
    pub trial_count: usize,
    /// Trials with no RT inside the valid window
    pub trials_without_valid_rt: usize,
}

/// Aggregate all trial files in `dir`
///
/// # Errors
/// Returns error if the directory cannot be listed or any trial file fails
/// to read or parse; no partial summary is produced
pub fn analyze_condition<P: AsRef<Path>>(dir: P, config: &AnalysisConfig) -> Result<ConditionSummary> {
    let dir = dir.as_ref();
    let files = list_data_files(dir, &config.extension)?;

    let mut trials = Vec::with_capacity(files.len());
    for file in &files {
        let path = dir.join(file);
        let table = read_trial(&path)?;
        let metrics = compute_trial_metrics(&table, &config.rt_window)?;
        debug!(
            file = %path.display(),
            rows = table.num_rows(),
            mean_rt = ?metrics.mean_rt,
            commissions = metrics.total_commissions,
            lapses = metrics.total_lapses,
            "trial metrics"
        );
        if metrics.mean_rt.is_none() {
            warn!(
                file = %path.display(),
                policy = ?config.missing_rt,
                "trial has no RT inside [{}, {}]",
                config.rt_window.min(),
                config.rt_window.max()
            );
        }
        trials.push(metrics);
    }

    let summary = summarize(&trials, config.missing_rt)?;
    info!(
        condition = %dir.display(),
        trials = summary.trial_count,
        mean_of_means = summary.mean_of_means,
        "condition analyzed"
    );
    Ok(summary)
}

/// Fold per-trial metrics into a condition summary
///
/// Empty input gives the all-zero summary.
///
/// # Errors
/// Returns [`Error::InvalidInput`] if a commission or lapse total overflows `i64`
#[allow(clippy::cast_precision_loss)]
pub fn summarize(trials: &[TrialMetrics], policy: MissingRtPolicy) -> Result<ConditionSummary> {
    if trials.is_empty() {
        return Ok(ConditionSummary::default());
    }

    let trial_count = trials.len();
    let total_commissions = checked_total(trials.iter().map(|t| t.total_commissions), "commission")?;
    let total_lapses = checked_total(trials.iter().map(|t| t.total_lapses), "lapse")?;
    let trials_without_valid_rt = trials.iter().filter(|t| t.mean_rt.is_none()).count();

    let mean_of_means = match policy {
        MissingRtPolicy::Exclude => {
            let means: Vec<f64> = trials.iter().filter_map(|t| t.mean_rt).collect();
            if means.is_empty() {
                0.0
            } else {
                means.iter().sum::<f64>() / means.len() as f64
            }
        }
        MissingRtPolicy::Propagate => {
            trials
                .iter()
                .map(|t| t.mean_rt.unwrap_or(f64::NAN))
                .sum::<f64>()
                / trial_count as f64
        }
    };

    Ok(ConditionSummary {
        mean_of_means,
        total_commissions,
        mean_commissions: total_commissions as f64 / trial_count as f64,
        total_lapses,
        mean_lapses: total_lapses as f64 / trial_count as f64,
        trial_count,
        trials_without_valid_rt,
    })
}

fn checked_total(mut counts: impl Iterator<Item = i64>, what: &str) -> Result<i64> {
    counts.try_fold(0i64, |acc, n| {
        acc.checked_add(n)
            .ok_or_else(|| Error::InvalidInput(format!("condition {what} total overflows i64")))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(mean_rt: Option<f64>, commissions: i64, lapses: i64) -> TrialMetrics {
        TrialMetrics {
            mean_rt,
            total_commissions: commissions,
            total_lapses: lapses,
            valid_rt_count: usize::from(mean_rt.is_some()),
        }
    }

    #[test]
    fn test_empty_is_all_zero() {
        let summary = summarize(&[], MissingRtPolicy::Exclude).unwrap();
        assert_eq!(summary, ConditionSummary::default());
        assert!(summary.mean_of_means.abs() < f64::EPSILON);
    }

    #[test]
    fn test_means_and_totals() {
        let trials = [metrics(Some(300.0), 2, 1), metrics(Some(200.0), 1, 0)];
        let summary = summarize(&trials, MissingRtPolicy::Exclude).unwrap();
        assert!((summary.mean_of_means - 250.0).abs() < f64::EPSILON);
        assert_eq!(summary.total_commissions, 3);
        assert!((summary.mean_commissions - 1.5).abs() < f64::EPSILON);
        assert_eq!(summary.total_lapses, 1);
        assert!((summary.mean_lapses - 0.5).abs() < f64::EPSILON);
        assert_eq!(summary.trial_count, 2);
    }

    #[test]
    fn test_exclude_skips_undefined_trials_in_rt_only() {
        let trials = [metrics(Some(300.0), 0, 0), metrics(None, 4, 2)];
        let summary = summarize(&trials, MissingRtPolicy::Exclude).unwrap();
        assert!((summary.mean_of_means - 300.0).abs() < f64::EPSILON);
        assert_eq!(summary.trials_without_valid_rt, 1);
        // counts still averaged over both trials
        assert!((summary.mean_commissions - 2.0).abs() < f64::EPSILON);
        assert!((summary.mean_lapses - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_exclude_all_undefined_is_zero() {
        let summary = summarize(&[metrics(None, 1, 1)], MissingRtPolicy::Exclude).unwrap();
        assert!(summary.mean_of_means.abs() < f64::EPSILON);
    }

    #[test]
    fn test_total_overflow_is_error() {
        let trials = [metrics(Some(300.0), i64::MAX, 0), metrics(Some(300.0), 1, 0)];
        let err = summarize(&trials, MissingRtPolicy::Exclude).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(ref msg) if msg.contains("commission")));

        let trials = [metrics(None, 0, i64::MAX), metrics(None, 0, i64::MAX)];
        let err = summarize(&trials, MissingRtPolicy::Propagate).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(ref msg) if msg.contains("lapse")));
    }

    #[test]
    fn test_propagate_yields_nan() {
        let trials = [metrics(Some(300.0), 0, 0), metrics(None, 0, 0)];
        let summary = summarize(&trials, MissingRtPolicy::Propagate).unwrap();
        assert!(summary.mean_of_means.is_nan());
        assert_eq!(summary.trials_without_valid_rt, 1);
    }
}
