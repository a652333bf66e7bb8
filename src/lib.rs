pub mod args;
pub mod domain;
pub mod errors;
pub mod pipeline;
pub mod report;
pub mod stats;
pub mod utils;

pub use args::Args;
pub use errors::TldError;
pub use pipeline::{run, MalformedPolicy, PipelineOptions};
pub use stats::{rank, FrequencyTable, RunSummary};
