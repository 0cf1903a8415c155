//! Bundles the source of a Next.js project into one annotated text report.
//!
//! Files are picked by extension and App Router naming conventions, sorted
//! into categories (app structure, components, hooks, API routes, ...) and
//! written section by section, followed by summary counters.
//!
//! ```no_run
//! use nextpack::{CollectorConfig, collect_codebase};
//!
//! fn main() -> anyhow::Result<()> {
//!     let outcome = collect_codebase(&CollectorConfig::new("."))?;
//!     println!("{} files written", outcome.written);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;

pub use crate::cli::{Args, resolve_config, run};
pub use crate::config::{CollectorConfig, FileSettings, load_settings, load_settings_file};
pub use crate::core::classifier::{Classification, classify, detect_render_mode};
pub use crate::core::collector::{collect_codebase, render_report};
pub use crate::core::report::{ReportOutcome, write_report};
pub use crate::core::scanner::{collect, should_include};
pub use crate::models::{Category, Collection, Counter, FileEntry, RenderMode, Stats};
