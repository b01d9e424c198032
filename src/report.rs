//! Suite report - what gets printed to stdout

use crate::condition::ConditionSuite;
use crate::config::{AnalysisConfig, MissingRtPolicy, RtWindow};
use crate::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// A condition suite plus the parameters that produced it
#[derive(Debug, Clone, Serialize)]
pub struct SuiteReport {
    generated_at: DateTime<Utc>,
    root: PathBuf,
    rt_window: RtWindow,
    missing_rt: MissingRtPolicy,
    conditions: ConditionSuite,
}

impl SuiteReport {
    /// Create a report stamped with the current time
    #[must_use]
    pub fn new(root: impl AsRef<Path>, config: &AnalysisConfig, conditions: ConditionSuite) -> Self {
        Self {
            generated_at: Utc::now(),
            root: root.as_ref().to_path_buf(),
            rt_window: config.rt_window,
            missing_rt: config.missing_rt,
            conditions,
        }
    }

    /// Timestamp of report creation
    #[must_use]
    pub const fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    /// Root directory the suite was read from
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The condition suite
    #[must_use]
    pub const fn conditions(&self) -> &ConditionSuite {
        &self.conditions
    }

    /// Pretty-printed JSON
    ///
    /// NaN means serialize as `null`.
    ///
    /// # Errors
    /// Returns [`crate::Error::Json`] if serialization fails
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for SuiteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "root: {}", self.root.display())?;
        writeln!(
            f,
            "valid RT window: [{}, {}] ms",
            self.rt_window.min(),
            self.rt_window.max()
        )?;
        write!(f, "{}", self.conditions)
    }
}
