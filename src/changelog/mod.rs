//! Changelog generation: fetch the log, parse it, classify and format each commit.

pub mod rpm;

pub use rpm::RpmFormatter;

use tracing::{info, instrument};

use crate::domain::{parse_log, CommitRecord, OutputFormat};
use crate::error::Result;
use crate::git::LogSource;
use crate::options::RunConfiguration;

/// Turns parsed commits into changelog lines
pub trait ChangelogFormatter {
    /// Format `records` in the order given (newest first), returning output
    /// lines without trailing newlines.
    fn format(&self, records: &mut dyn Iterator<Item = CommitRecord>) -> Vec<String>;
}

/// Formatter for the configured output format
pub fn formatter_for(config: &RunConfiguration) -> Box<dyn ChangelogFormatter> {
    match config.format() {
        OutputFormat::Rpm => Box::new(RpmFormatter::new(
            config.rules().clone(),
            config.filter().clone(),
        )),
    }
}

/// Produce the changelog for `config` from `source`.
#[instrument(skip_all, fields(range = %config.range(), format = %config.format()))]
pub fn generate<S: LogSource + ?Sized>(config: &RunConfiguration, source: &S) -> Result<Vec<String>> {
    let output = source.log(config.range())?;
    let formatter = formatter_for(config);

    let mut records = parse_log(&output);
    let lines = formatter.format(&mut records);
    info!(lines = lines.len(), "changelog generated");

    Ok(lines)
}
