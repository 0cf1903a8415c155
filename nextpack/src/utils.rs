// src/utils.rs
use crate::models::Stats;
use anyhow::Result;
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Resolves `dir` against the current working directory.
///
/// # Errors
///
/// Fails when `dir` is relative and the working directory cannot be read.
pub fn absolute_dir(dir: &Path) -> Result<PathBuf> {
    if dir.is_absolute() {
        Ok(dir.to_path_buf())
    } else {
        Ok(env::current_dir()?.join(dir))
    }
}

/// Reads a source file as UTF-8 with `\r\n` and lone `\r` turned into `\n`.
pub fn read_source(path: &Path) -> io::Result<String> {
    fs::read_to_string(path).map(|content| normalize_newlines(&content))
}

pub fn normalize_newlines(content: &str) -> String {
    if !content.contains('\r') {
        return content.to_owned();
    }
    content.replace("\r\n", "\n").replace('\r', "\n")
}

pub fn print_summary(stats: &Stats) {
    for (label, value) in stats.summary() {
        println!("{label}: {value}");
    }
}
