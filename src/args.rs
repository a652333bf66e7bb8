use clap::Parser;

use crate::report::{DEFAULT_SEPARATOR, DEFAULT_TOP};

#[derive(Parser, Debug)]
#[command(
    name = "tldstream",
    about = "Count top-level domains in a certificate transparency stream read from stdin",
    version,
    long_about = None
)]
pub struct Args {
    /// Number of top TLDs to display per report
    #[arg(short, long, default_value_t = DEFAULT_TOP)]
    pub top: usize,

    /// Emit a report after every N recorded lines
    #[arg(short, long, default_value_t = 1)]
    pub every: usize,

    /// Abort on the first malformed line instead of skipping it
    #[arg(long)]
    pub strict: bool,

    /// Separator between a TLD and its count
    #[arg(long, default_value = DEFAULT_SEPARATOR)]
    pub separator: String,

    /// Do not print a final report at end of input
    #[arg(long)]
    pub no_final: bool,

    /// Print a run summary to stderr at end of input
    #[arg(long)]
    pub summary: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
