//! trialstat - summarize behavioral trial logs per condition and chart them

use anyhow::Context;
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;
use trialstat::chart::render_charts;
use trialstat::cli::Args;
use trialstat::condition::build_suite;
use trialstat::report::SuiteReport;

fn main() -> anyhow::Result<()> {
    // Missing ROOT: clap prints usage and exits nonzero
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = args.analysis_config()?;
    let suite = build_suite(&args.root, &config)
        .with_context(|| format!("Failed to summarize {}", args.root.display()))?;
    let report = SuiteReport::new(&args.root, &config, suite);

    if args.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{report}");
    }

    if args.no_charts {
        return Ok(());
    }
    if report.conditions().is_empty() {
        warn!(root = %args.root.display(), "no condition directories found; skipping charts");
        return Ok(());
    }
    render_charts(report.conditions(), &args.output_dir)
        .with_context(|| format!("Failed to write charts to {}", args.output_dir.display()))?;

    Ok(())
}
