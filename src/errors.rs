//! Errors raised by the line-processing core.
//!
//! The driver decides what to do with them (see `pipeline::MalformedPolicy`);
//! nothing in the core swallows a malformed line on its own.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TldError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TldError {
    /// The line has no `" - "` delimiter between prefix and domain.
    #[error("malformed line (missing \" - \" delimiter): {line:?}")]
    MalformedLine { line: String },

    /// The domain yielded nothing once terminal noise was stripped.
    #[error("empty TLD after normalization: {line:?}")]
    EmptySuffix { line: String },
}

impl TldError {
    pub fn malformed(line: &str) -> Self {
        TldError::MalformedLine {
            line: strip_terminator(line).to_string(),
        }
    }

    pub fn empty_suffix(line: &str) -> Self {
        TldError::EmptySuffix {
            line: strip_terminator(line).to_string(),
        }
    }

    /// The offending input line, without its terminator.
    pub fn line(&self) -> &str {
        match self {
            TldError::MalformedLine { line } | TldError::EmptySuffix { line } => line,
        }
    }
}

fn strip_terminator(line: &str) -> &str {
    line.trim_end_matches(['\n', '\r'])
}
