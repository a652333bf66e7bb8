//! End-to-end tests over the library pipeline and the compiled binary.

use std::io::Write;
use std::process::{Command, Stdio};
use std::str;

use tldstream::{run, FrequencyTable, PipelineOptions};

const CERTSTREAM_SAMPLE: &str = "\
[2018-04-01T14:11:38.783874] ct.googleapis.com/logs/argon2018/ - docs-beta.monetizesocial.com
[2018-04-01T14:11:40.243578] ct.googleapis.com/icarus/ - www.witze-dschungel.lima-city.de
[2018-04-01T14:11:40.184876] ct.googleapis.com/icarus/ - sallesdevillefagnan.fr
";

/// Runs the binary with `args`, feeding `input` on stdin.
fn run_binary(args: &[&str], input: &str) -> std::process::Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_tldstream"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute binary");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn test_sample_stream_counts_each_tld_once() {
    let mut table = FrequencyTable::new();
    let mut out = Vec::new();
    let summary = run(
        CERTSTREAM_SAMPLE.as_bytes(),
        &mut out,
        &mut table,
        &PipelineOptions::default(),
    )
    .unwrap();

    assert_eq!(summary.recorded, 3);
    assert_eq!(table.len(), 3);
    for tld in ["com", "de", "fr"] {
        assert_eq!(table.get(tld), Some(1), "count for {}", tld);
    }

    let last_block = str::from_utf8(&out)
        .unwrap()
        .trim_end()
        .rsplit("\n\n")
        .next()
        .unwrap()
        .to_string();
    assert_eq!(last_block, "com    1\nde    1\nfr    1");
}

#[test]
fn test_top_ten_of_longer_stream() {
    let mut input = String::new();
    for i in 0..15u32 {
        for _ in 0..(i + 1) {
            input.push_str(&format!("[ts] log/ - host.tld{:02}\n", i));
        }
    }

    let mut table = FrequencyTable::new();
    let mut out = Vec::new();
    let options = PipelineOptions {
        every: usize::MAX,
        ..PipelineOptions::default()
    };
    let summary = run(input.as_bytes(), &mut out, &mut table, &options).unwrap();

    assert_eq!(summary.reports, 1);
    let out = String::from_utf8(out).unwrap();
    let rows: Vec<&str> = out.lines().filter(|l| !l.is_empty()).collect();
    assert_eq!(rows.len(), 10);
    assert_eq!(rows[0], "tld14    15");
    assert_eq!(rows[9], "tld05    6");
}

#[test]
fn test_binary_reports_per_line() {
    let output = run_binary(&[], CERTSTREAM_SAMPLE);

    assert!(output.status.success());
    let stdout = str::from_utf8(&output.stdout).unwrap();
    assert_eq!(
        stdout,
        "com    1\n\ncom    1\nde    1\n\ncom    1\nde    1\nfr    1\n\n"
    );
}

#[test]
fn test_binary_skips_malformed_and_prints_summary() {
    let input = format!("garbage without delimiter\n{}", CERTSTREAM_SAMPLE);
    let output = run_binary(&["--every", "10", "--summary", "--top", "2"], &input);

    assert!(output.status.success());
    let stdout = str::from_utf8(&output.stdout).unwrap();
    assert_eq!(stdout, "com    1\nde    1\n\n");

    let stderr = str::from_utf8(&output.stderr).unwrap();
    assert!(
        stderr.contains("Lines read: 4, recorded: 3, skipped: 1, distinct TLDs: 3"),
        "stderr was: {}",
        stderr
    );
}

#[test]
fn test_binary_strict_mode_fails_on_malformed_line() {
    let input = format!("{}not a certstream line\n", CERTSTREAM_SAMPLE);
    let output = run_binary(&["--strict"], &input);

    assert!(!output.status.success());
    let stdout = str::from_utf8(&output.stdout).unwrap();
    assert!(stdout.contains("fr    1"));
}

#[test]
fn test_binary_rejects_zero_top() {
    let output = run_binary(&["--top", "0"], "");
    assert!(!output.status.success());
}

#[test]
fn test_binary_empty_input() {
    let output = run_binary(&[], "");
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}
