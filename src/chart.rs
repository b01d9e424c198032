//! Bar-chart rendering (plotters, PNG)
//!
//! One chart per metric, one bar per condition in canonical order:
//!
//! | chart              | metric             | headroom | file                   |
//! |--------------------|--------------------|----------|------------------------|
//! | `MeanRt`           | `mean_of_means`    | 50       | `mean_rts.png`         |
//! | `MeanCommissions`  | `mean_commissions` | 1        | `mean_commissions.png` |
//! | `MeanLapses`       | `mean_lapses`      | 1        | `mean_lapses.png`      |

use crate::condition::{ConditionSuite, ConditionSummary};
use crate::{Error, Result};
use plotters::prelude::*;
use std::path::{Path, PathBuf};
use tracing::info;

/// Output size: 6x4 inches at 300 dpi
pub const CHART_SIZE: (u32, u32) = (1800, 1200);

/// The three summary charts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// Mean of per-trial mean RTs
    MeanRt,
    /// Mean commissions per trial
    MeanCommissions,
    /// Mean lapses per trial
    MeanLapses,
}

impl ChartKind {
    /// All charts, in render order
    pub const ALL: [Self; 3] = [Self::MeanRt, Self::MeanCommissions, Self::MeanLapses];

    /// Fixed output file name
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::MeanRt => "mean_rts.png",
            Self::MeanCommissions => "mean_commissions.png",
            Self::MeanLapses => "mean_lapses.png",
        }
    }

    /// Chart caption
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::MeanRt => "Mean Reaction Time by Condition",
            Self::MeanCommissions => "Mean Commissions by Condition",
            Self::MeanLapses => "Mean Lapses by Condition",
        }
    }

    /// Y-axis label
    #[must_use]
    pub const fn y_label(self) -> &'static str {
        match self {
            Self::MeanRt => "Mean RT (ms)",
            Self::MeanCommissions | Self::MeanLapses => "Mean Count",
        }
    }

    /// Space added above the tallest bar
    #[must_use]
    pub const fn headroom(self) -> f64 {
        match self {
            Self::MeanRt => 50.0,
            Self::MeanCommissions | Self::MeanLapses => 1.0,
        }
    }

    /// Bar fill color
    #[must_use]
    pub const fn color(self) -> RGBColor {
        match self {
            Self::MeanRt => RGBColor(70, 130, 180),          // steelblue
            Self::MeanCommissions => RGBColor(255, 165, 0),  // orange
            Self::MeanLapses => RGBColor(220, 20, 60),       // crimson
        }
    }

    /// The summary value this chart plots
    #[must_use]
    pub const fn value(self, summary: &ConditionSummary) -> f64 {
        match self {
            Self::MeanRt => summary.mean_of_means,
            Self::MeanCommissions => summary.mean_commissions,
            Self::MeanLapses => summary.mean_lapses,
        }
    }
}

/// Data for one bar chart
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    kind: ChartKind,
    labels: Vec<String>,
    values: Vec<f64>,
}

impl BarChart {
    /// Collect one bar per condition
    #[must_use]
    pub fn from_suite(kind: ChartKind, suite: &ConditionSuite) -> Self {
        let (labels, values) = suite
            .iter()
            .map(|(label, summary)| (label.to_string(), kind.value(summary)))
            .unzip();
        Self { kind, labels, values }
    }

    /// Chart kind
    #[must_use]
    pub const fn kind(&self) -> ChartKind {
        self.kind
    }

    /// Bar labels (x axis)
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Bar heights
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Y-axis upper bound: tallest bar plus headroom
    ///
    /// NaN bars are ignored; with no finite bar the bound is the headroom.
    #[must_use]
    pub fn y_upper_bound(&self) -> f64 {
        let max = self
            .values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(0.0_f64, f64::max);
        max + self.kind.headroom()
    }

    /// Draw the chart into a PNG at `path`, replacing any existing file
    ///
    /// # Errors
    /// Returns [`Error::InvalidInput`] for a chart without bars and
    /// [`Error::Chart`] if the drawing backend fails
    pub fn render(&self, path: &Path) -> Result<()> {
        if self.values.is_empty() {
            return Err(Error::InvalidInput(format!(
                "no conditions to plot in {}",
                self.kind.file_name()
            )));
        }

        let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
        root.fill(&WHITE).map_err(chart_error)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(self.kind.title(), ("sans-serif", 48))
            .margin(30)
            .x_label_area_size(90)
            .y_label_area_size(120)
            .build_cartesian_2d(
                (0..self.values.len()).into_segmented(),
                0.0..self.y_upper_bound(),
            )
            .map_err(chart_error)?;

        let labels = &self.labels;
        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(labels.len())
            .x_label_formatter(&|segment| match segment {
                SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => {
                    labels.get(*i).cloned().unwrap_or_default()
                }
                SegmentValue::Last => String::new(),
            })
            .x_desc("Condition")
            .y_desc(self.kind.y_label())
            .label_style(("sans-serif", 32))
            .axis_desc_style(("sans-serif", 36))
            .draw()
            .map_err(chart_error)?;

        chart
            .draw_series(
                Histogram::vertical(&chart)
                    .style(self.kind.color().filled())
                    .margin(40)
                    .data(self.values.iter().copied().enumerate()),
            )
            .map_err(chart_error)?;

        root.present().map_err(chart_error)?;
        info!(chart = self.kind.file_name(), path = %path.display(), "chart written");
        Ok(())
    }
}

/// Render all three charts into `out_dir`
///
/// Returns the written paths in [`ChartKind::ALL`] order.
///
/// # Errors
/// Returns [`Error::InvalidInput`] for an empty suite, or the first render failure
pub fn render_charts<P: AsRef<Path>>(suite: &ConditionSuite, out_dir: P) -> Result<Vec<PathBuf>> {
    if suite.is_empty() {
        return Err(Error::InvalidInput(
            "condition suite is empty; nothing to chart".to_string(),
        ));
    }

    ChartKind::ALL
        .iter()
        .map(|&kind| -> Result<PathBuf> {
            let path = out_dir.as_ref().join(kind.file_name());
            BarChart::from_suite(kind, suite).render(&path)?;
            Ok(path)
        })
        .collect()
}

fn chart_error<E: std::fmt::Display>(err: E) -> Error {
    Error::Chart(err.to_string())
}
