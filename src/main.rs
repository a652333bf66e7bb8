use anyhow::Result;
use clap::Parser;
use std::io;
use tracing::error;

use tldstream::pipeline::{self, PipelineOptions};
use tldstream::utils::{format_summary, setup_logging, validate_args};
use tldstream::{Args, FrequencyTable};

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);
    validate_args(&args)?;

    let options = PipelineOptions::from(&args);
    let mut table = FrequencyTable::new();
    let stdin = io::stdin();
    let stdout = io::stdout();

    match pipeline::run(stdin.lock(), &mut stdout.lock(), &mut table, &options) {
        Ok(summary) => {
            if args.summary {
                eprintln!("{}", format_summary(&summary));
            }
            Ok(())
        }
        Err(e) => {
            error!(error = %format!("{:#}", e), "Stream processing failed");
            std::process::exit(1);
        }
    }
}
