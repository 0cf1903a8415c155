// src/core/collector.rs
use crate::config::CollectorConfig;
use crate::core::report::{ReportOutcome, write_report};
use crate::core::scanner::collect;
use crate::utils::absolute_dir;
use anyhow::{Context as _, Result};
use std::fs::File;
use std::io::{BufWriter, Write as _};
use tracing::{debug, warn};

/// Runs the whole pipeline and writes the report next to the scanned code.
///
/// # Arguments
///
/// * `config` - Root directory, filters and preamble for this run
///
/// # Returns
///
/// * `Ok(ReportOutcome)` - How many files were written or skipped
///
/// # Errors
///
/// This function may return an error if:
/// * The root directory does not exist
/// * The output file cannot be created or written
///
/// Unreadable source files never fail the run.
#[inline]
pub fn collect_codebase(config: &CollectorConfig) -> Result<ReportOutcome> {
    let collection = collect(config)?;
    let output_path = absolute_dir(&config.root)?.join(&config.output);

    let file = File::create(&output_path)
        .with_context(|| format!("Failed to create report file: {}", output_path.display()))?;
    let mut writer = BufWriter::new(file);

    let outcome = write_report(&mut writer, config, &collection)
        .and_then(|outcome| writer.flush().map(|()| outcome))
        .with_context(|| format!("Failed to write report file: {}", output_path.display()))?;

    debug!(
        path = %output_path.display(),
        written = outcome.written,
        "report written"
    );
    if !outcome.skipped.is_empty() {
        warn!(skipped = outcome.skipped.len(), "some files could not be read");
    }

    Ok(outcome)
}

/// Same pipeline as [`collect_codebase`], rendered into memory.
///
/// # Errors
///
/// This function may return an error if the root directory does not exist.
#[inline]
pub fn render_report(config: &CollectorConfig) -> Result<(String, ReportOutcome)> {
    let collection = collect(config)?;
    let mut buffer = Vec::new();
    let outcome = write_report(&mut buffer, config, &collection)?;
    let report = String::from_utf8(buffer).context("Report is not valid UTF-8")?;
    Ok((report, outcome))
}
