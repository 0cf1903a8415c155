// src/cli.rs
use anyhow::{Context as _, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;

use crate::config::{CollectorConfig, load_settings, load_settings_file};
use crate::core::collector::collect_codebase;
use crate::core::scanner::collect;
use crate::utils::{absolute_dir, print_summary};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Project directory to scan (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub directory: PathBuf,

    /// Report file name, written inside the project directory
    #[arg(short, long)]
    pub output: Option<String>,

    /// Accepted file extensions (comma-separated, e.g. ".tsx,.ts")
    #[arg(short, long, value_delimiter = ',')]
    pub extensions: Option<Vec<String>>,

    /// File names always included regardless of extension (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub special_files: Option<Vec<String>>,

    /// Path fragments that exclude a file anywhere in its path (comma-separated)
    #[arg(short = 'x', long, value_delimiter = ',')]
    pub exclude_dirs: Option<Vec<String>>,

    /// File names never included (comma-separated)
    #[arg(short = 'X', long, value_delimiter = ',')]
    pub exclude_files: Option<Vec<String>>,

    /// Read the report preamble from this file
    #[arg(short, long)]
    pub preamble_file: Option<PathBuf>,

    /// Settings file (defaults to the nearest nextpack.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the summary counters without writing the report
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Builds the run configuration: built-in defaults, then the settings
/// file, then command-line flags.
///
/// # Errors
///
/// This function may return an error if:
/// * The settings file cannot be read or parsed
/// * The preamble file cannot be read
pub fn resolve_config(args: &Args) -> Result<CollectorConfig> {
    let mut config = CollectorConfig::new(args.directory.clone());

    let settings = match &args.config {
        Some(path) => Some(load_settings_file(path)?),
        None => load_settings(&absolute_dir(&args.directory)?)?,
    };
    if let Some(settings) = settings {
        settings.apply(&mut config);
    }

    if let Some(output) = &args.output {
        config.output.clone_from(output);
    }
    if let Some(extensions) = &args.extensions {
        config.extensions.clone_from(extensions);
    }
    if let Some(special_files) = &args.special_files {
        config.special_files.clone_from(special_files);
    }
    if let Some(exclude_dirs) = &args.exclude_dirs {
        config.exclude_dirs.clone_from(exclude_dirs);
    }
    if let Some(exclude_files) = &args.exclude_files {
        config.exclude_files.clone_from(exclude_files);
    }
    if let Some(path) = &args.preamble_file {
        config.preamble = fs::read_to_string(path)
            .with_context(|| format!("Failed to read preamble file: {}", path.display()))?;
    }

    Ok(config)
}

pub fn run(args: Args) -> Result<()> {
    let config = resolve_config(&args)?;

    if args.dry_run {
        let collection = collect(&config)?;
        print_summary(&collection.stats);
    } else {
        collect_codebase(&config)?;
        println!(
            "\n¡Proceso completado! El archivo {} ha sido generado.",
            config.output
        );
    }

    Ok(())
}
