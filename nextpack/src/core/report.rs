// src/core/report.rs
use crate::config::CollectorConfig;
use crate::models::{Collection, FileEntry, RenderMode, Stats};
use crate::utils::read_source;
use std::io::{self, Write};
use std::path::{Component, PathBuf};

const BANNER_WIDTH: usize = 80;
pub const TITLE: &str = "ESTRUCTURA DEL PROYECTO NEXT.JS 14";
pub const SUMMARY_TITLE: &str = "RESUMEN DEL PROYECTO NEXT.JS 14";
pub const CLIENT_ANNOTATION: &str = "# Client Component";

/// What happened to the files of a collection while writing the report.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReportOutcome {
    pub written: usize,
    /// Files whose content could not be read a second time, as shown on
    /// the console.
    pub skipped: Vec<PathBuf>,
}

/// Writes the full report for an already sorted collection.
///
/// A file that cannot be read is reported on the console and left out;
/// every other file still gets written.
///
/// # Errors
///
/// Only failures writing to `out` are returned.
#[inline]
pub fn write_report<W: Write>(
    out: &mut W,
    config: &CollectorConfig,
    collection: &Collection,
) -> io::Result<ReportOutcome> {
    let banner = "=".repeat(BANNER_WIDTH);
    let separator = "-".repeat(BANNER_WIDTH);
    let mut outcome = ReportOutcome::default();

    writeln!(out, "{}\n", config.preamble)?;
    writeln!(out, "{banner}\n{TITLE}\n{banner}\n")?;

    for (category, entries) in collection.sections() {
        writeln!(out, "\n\n{banner}\nSECCIÓN: {}\n{banner}\n", category.label())?;

        for entry in entries {
            match read_source(&entry.path) {
                Ok(content) => {
                    write_entry(out, entry, &content, &separator)?;
                    outcome.written = outcome.written.saturating_add(1);
                    println!("Procesado: {}", entry.relative_path.display());
                }
                Err(err) => {
                    let shown = display_path(config, entry);
                    println!("Error al procesar {}: {err}", shown.display());
                    outcome.skipped.push(shown);
                }
            }
        }
    }

    write_summary(out, &collection.stats, &banner)?;
    Ok(outcome)
}

/// Path of `entry` under the root as it was given, without `.` segments,
/// so a run from `.` reports `app/page.tsx`.
fn display_path(config: &CollectorConfig, entry: &FileEntry) -> PathBuf {
    config
        .root
        .components()
        .filter(|component| *component != Component::CurDir)
        .collect::<PathBuf>()
        .join(&entry.relative_path)
}

fn write_entry<W: Write>(
    out: &mut W,
    entry: &FileEntry,
    content: &str,
    separator: &str,
) -> io::Result<()> {
    writeln!(out, "\n### Archivo: {} ###", entry.relative_path.display())?;
    if RenderMode::detect(content).is_client() {
        writeln!(out, "{CLIENT_ANNOTATION}")?;
    }
    writeln!(out, "{separator}")?;
    out.write_all(content.as_bytes())?;
    writeln!(out, "\n{separator}")
}

fn write_summary<W: Write>(out: &mut W, stats: &Stats, banner: &str) -> io::Result<()> {
    writeln!(out, "\n\n{banner}\n{SUMMARY_TITLE}\n{banner}")?;
    writeln!(out)?;
    for (label, value) in stats.summary() {
        writeln!(out, "{label}: {value}")?;
    }
    Ok(())
}
