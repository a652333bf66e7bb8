use regex::Regex;
use std::sync::OnceLock;

use crate::errors::{Result, TldError};

/// Separator between the log prefix and the certificate's domain.
pub const DELIMITER: &str = " - ";

/// General ANSI CSI form: ESC `[`, any parameters, one final byte in `@`..=`~`.
const ANSI_CSI_PATTERN: &str = r"\x1b\[.*?[@-~]";

fn ansi_csi() -> &'static Regex {
    static ANSI_CSI: OnceLock<Regex> = OnceLock::new();
    ANSI_CSI.get_or_init(|| Regex::new(ANSI_CSI_PATTERN).expect("ANSI CSI pattern compiles"))
}

/// Returns the raw text after the last `.` of the domain in a
/// `<prefix> - <full-domain>` line.
///
/// Only the first `" - "` splits the line; everything after it is the domain
/// candidate. Trailing newlines and escape codes are left for [`clean_suffix`].
pub fn extract_suffix(line: &str) -> Result<&str> {
    let (_, full_domain) = line
        .split_once(DELIMITER)
        .ok_or_else(|| TldError::malformed(line))?;

    // rsplit always yields at least one item
    Ok(full_domain.rsplit('.').next().unwrap_or(full_domain))
}

/// Strips ANSI CSI sequences, newlines and spaces from a raw suffix.
pub fn clean_suffix(raw: &str) -> String {
    ansi_csi()
        .replace_all(raw, "")
        .chars()
        .filter(|c| *c != '\n' && *c != ' ')
        .collect()
}

/// Parses and normalizes one line into the TLD to record.
pub fn tld_of(line: &str) -> Result<String> {
    let tld = clean_suffix(extract_suffix(line)?);
    if tld.is_empty() {
        return Err(TldError::empty_suffix(line));
    }
    Ok(tld)
}
