//! Command-line interface

use crate::config::{AnalysisConfig, MissingRtPolicy, DEFAULT_EXTENSION, DEFAULT_RT_MAX, DEFAULT_RT_MIN};
use crate::Result;
use clap::Parser;
use std::path::PathBuf;

/// Per-condition reaction-time, commission and lapse statistics
#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Directory holding the condition subdirectories (a1, b1, a2, b2)
    #[arg(value_name = "ROOT")]
    pub root: PathBuf,

    /// Directory the chart PNGs are written to
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Trial file name suffix
    #[arg(long, default_value = DEFAULT_EXTENSION)]
    pub extension: String,

    /// Inclusive lower bound of the valid RT window (ms)
    #[arg(long, default_value_t = DEFAULT_RT_MIN)]
    pub rt_min: f64,

    /// Inclusive upper bound of the valid RT window (ms)
    #[arg(long, default_value_t = DEFAULT_RT_MAX)]
    pub rt_max: f64,

    /// Let trials without a valid RT turn the condition mean into NaN
    #[arg(long, default_value_t = false)]
    pub propagate_nan: bool,

    /// Print the summary as JSON instead of a table
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Skip chart rendering
    #[arg(long, default_value_t = false)]
    pub no_charts: bool,

    /// Enable debug logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Args {
    /// Analysis parameters selected by the flags
    ///
    /// # Errors
    /// Returns error if the RT window or extension is invalid
    pub fn analysis_config(&self) -> Result<AnalysisConfig> {
        let policy = if self.propagate_nan {
            MissingRtPolicy::Propagate
        } else {
            MissingRtPolicy::Exclude
        };
        AnalysisConfig::builder()
            .rt_min(self.rt_min)
            .rt_max(self.rt_max)
            .extension(self.extension.clone())
            .missing_rt(policy)
            .build()
    }
}
