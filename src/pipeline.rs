use anyhow::{Context, Result};
use std::borrow::Cow;
use std::io::{BufRead, Write};
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::args::Args;
use crate::domain;
use crate::report::{self, DEFAULT_SEPARATOR, DEFAULT_TOP};
use crate::stats::{rank, FrequencyTable, RunSummary};

/// What the host loop does with a line the core rejects.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum MalformedPolicy {
    /// Log it, count it and move on to the next line.
    #[default]
    Skip,
    /// Stop reading and return the error.
    Abort,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOptions {
    pub top: usize,
    pub every: usize,
    pub separator: String,
    pub policy: MalformedPolicy,
    pub final_report: bool,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            top: DEFAULT_TOP,
            every: 1,
            separator: DEFAULT_SEPARATOR.to_string(),
            policy: MalformedPolicy::Skip,
            final_report: true,
        }
    }
}

impl From<&Args> for PipelineOptions {
    fn from(args: &Args) -> Self {
        Self {
            top: args.top,
            every: args.every,
            separator: args.separator.clone(),
            policy: if args.strict {
                MalformedPolicy::Abort
            } else {
                MalformedPolicy::Skip
            },
            final_report: !args.no_final,
        }
    }
}

/// Feeds every line of `input` through parse, normalize and record, writing
/// a ranked report to `output` after every `options.every` recorded lines.
///
/// Lines are handled strictly in arrival order; the table reflects all prior
/// lines before each report. End of input is the only normal termination.
pub fn run<R: BufRead, W: Write>(
    mut input: R,
    output: &mut W,
    table: &mut FrequencyTable,
    options: &PipelineOptions,
) -> Result<RunSummary> {
    let start_time = Instant::now();
    info!(
        action = "start",
        component = "pipeline",
        top = options.top,
        every = options.every,
        policy = ?options.policy,
        "Reading certificate stream"
    );

    let every = options.every.max(1) as u64;
    let mut summary = RunSummary::default();
    let mut buf = Vec::new();
    let mut pending = false;

    loop {
        buf.clear();
        let read = input
            .read_until(b'\n', &mut buf)
            .context("Failed to read from input stream")?;
        if read == 0 {
            break;
        }
        summary.lines_read += 1;

        let line = String::from_utf8_lossy(&buf);
        if matches!(line, Cow::Owned(_)) {
            debug!(action = "decode", component = "line_reader", line_number = summary.lines_read, "Replaced invalid UTF-8 in line");
        }
        let line = line.trim_end_matches(['\n', '\r']);

        let tld = match domain::tld_of(line) {
            Ok(tld) => tld,
            Err(e) => match options.policy {
                MalformedPolicy::Skip => {
                    summary.malformed += 1;
                    warn!(action = "skip", component = "line_parser", line_number = summary.lines_read, error = %e, "Skipping malformed line");
                    continue;
                }
                MalformedPolicy::Abort => {
                    return Err(e).with_context(|| {
                        format!("Aborting on malformed line {}", summary.lines_read)
                    });
                }
            },
        };

        table.record(&tld);
        summary.recorded += 1;
        pending = true;
        debug!(action = "record", component = "frequency_table", tld = %tld, count = ?table.get(&tld), "Recorded TLD");

        if summary.recorded % every == 0 {
            emit_report(output, table, options)?;
            summary.reports += 1;
            pending = false;
        }
    }

    if pending && options.final_report {
        emit_report(output, table, options)?;
        summary.reports += 1;
    }

    summary.distinct = table.len();
    let total_time = start_time.elapsed();
    info!(
        action = "complete",
        component = "pipeline",
        lines_read = summary.lines_read,
        recorded = summary.recorded,
        malformed = summary.malformed,
        distinct = summary.distinct,
        duration_ms = total_time.as_millis(),
        "End of input"
    );
    Ok(summary)
}

fn emit_report<W: Write>(
    output: &mut W,
    table: &FrequencyTable,
    options: &PipelineOptions,
) -> Result<()> {
    let ranked = rank(table.snapshot());
    report::write_top(output, &ranked, options.top, &options.separator)
        .and_then(|_| output.flush())
        .context("Failed to write report")
}
