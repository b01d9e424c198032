//! Analysis configuration
//!
//! There is no configuration file: defaults live here and the CLI overrides
//! them through [`AnalysisConfigBuilder`].

use crate::{Error, Result};
use serde::Serialize;

/// Lower bound of the valid reaction-time window (ms, inclusive)
pub const DEFAULT_RT_MIN: f64 = 100.0;

/// Upper bound of the valid reaction-time window (ms, inclusive)
pub const DEFAULT_RT_MAX: f64 = 500.0;

/// Trial file extension filter
pub const DEFAULT_EXTENSION: &str = "txt";

/// Inclusive reaction-time window used to select valid RT samples
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RtWindow {
    min: f64,
    max: f64,
}

impl RtWindow {
    /// Create a window `[min, max]`
    ///
    /// # Errors
    /// Returns [`Error::InvalidInput`] if a bound is not finite or `min > max`
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(Error::InvalidInput(format!(
                "RT window bounds must be finite, got [{min}, {max}]"
            )));
        }
        if min > max {
            return Err(Error::InvalidInput(format!(
                "RT window lower bound {min} exceeds upper bound {max}"
            )));
        }
        Ok(Self { min, max })
    }

    /// Lower bound (inclusive)
    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound (inclusive)
    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// Whether `rt` falls inside the window
    #[must_use]
    pub fn contains(&self, rt: f64) -> bool {
        rt >= self.min && rt <= self.max
    }
}

impl Default for RtWindow {
    fn default() -> Self {
        Self {
            min: DEFAULT_RT_MIN,
            max: DEFAULT_RT_MAX,
        }
    }
}

/// What to do with a trial that has no RT inside the window
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingRtPolicy {
    /// Leave the trial out of the mean of means and count it separately
    #[default]
    Exclude,
    /// Feed NaN into the mean of means (the whole condition mean becomes NaN)
    Propagate,
}

/// Parameters for one analysis run
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    /// Valid RT window
    pub rt_window: RtWindow,
    /// Trial file name suffix
    pub extension: String,
    /// Handling of trials without a valid RT
    pub missing_rt: MissingRtPolicy,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            rt_window: RtWindow::default(),
            extension: DEFAULT_EXTENSION.to_string(),
            missing_rt: MissingRtPolicy::default(),
        }
    }
}

impl AnalysisConfig {
    /// Create a new config builder
    #[must_use]
    pub fn builder() -> AnalysisConfigBuilder {
        AnalysisConfigBuilder::default()
    }
}

/// Builder for [`AnalysisConfig`]
#[derive(Debug, Default)]
pub struct AnalysisConfigBuilder {
    rt_min: Option<f64>,
    rt_max: Option<f64>,
    extension: Option<String>,
    missing_rt: Option<MissingRtPolicy>,
}

impl AnalysisConfigBuilder {
    /// Set the inclusive lower RT bound
    #[must_use]
    pub const fn rt_min(mut self, min: f64) -> Self {
        self.rt_min = Some(min);
        self
    }

    /// Set the inclusive upper RT bound
    #[must_use]
    pub const fn rt_max(mut self, max: f64) -> Self {
        self.rt_max = Some(max);
        self
    }

    /// Set the trial file extension filter
    #[must_use]
    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }

    /// Set the missing-RT policy
    #[must_use]
    pub const fn missing_rt(mut self, policy: MissingRtPolicy) -> Self {
        self.missing_rt = Some(policy);
        self
    }

    /// Build the config
    ///
    /// # Errors
    ///
    /// Returns error if the RT window is invalid or the extension is empty
    pub fn build(self) -> Result<AnalysisConfig> {
        let rt_window = RtWindow::new(
            self.rt_min.unwrap_or(DEFAULT_RT_MIN),
            self.rt_max.unwrap_or(DEFAULT_RT_MAX),
        )?;

        let extension = self
            .extension
            .unwrap_or_else(|| DEFAULT_EXTENSION.to_string());
        if extension.is_empty() {
            return Err(Error::InvalidInput(
                "trial file extension must not be empty".to_string(),
            ));
        }

        Ok(AnalysisConfig {
            rt_window,
            extension,
            missing_rt: self.missing_rt.unwrap_or_default(),
        })
    }
}
