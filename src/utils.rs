use time::macros::format_description;
use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::EnvFilter;

use crate::stats::RunSummary;

/// Installs the global subscriber. Logs go to stderr so stdout carries only
/// reports. `RUST_LOG` takes precedence over `verbose`.
pub fn setup_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(LocalTime::new(format_description!(
            "[hour]:[minute]:[second].[subsecond digits:3]"
        )))
        .with_writer(std::io::stderr)
        .init();
}

pub fn validate_args(args: &crate::args::Args) -> anyhow::Result<()> {
    if args.top == 0 {
        anyhow::bail!("--top must be greater than 0");
    }

    if args.every == 0 {
        anyhow::bail!("--every must be greater than 0");
    }

    Ok(())
}

pub fn format_summary(summary: &RunSummary) -> String {
    format!(
        "Lines read: {}, recorded: {}, skipped: {}, distinct TLDs: {}",
        summary.lines_read, summary.recorded, summary.malformed, summary.distinct
    )
}
