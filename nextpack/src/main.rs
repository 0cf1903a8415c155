// src/main.rs
use anyhow::Result;
use clap::Parser;
use nextpack::{Args, run};
use tracing::Level;

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    run(args)
}
