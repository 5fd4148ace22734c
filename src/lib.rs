pub mod cli;
pub mod error;
pub mod expander;
pub mod model;
pub mod writer;

use anyhow::Context;
use clap::Parser;

pub fn run() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // 1. ── Read ───────────────────────────────────────────────────────
    let source = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Reading {}", args.input.display()))?;
    tracing::info!("loaded {} bytes from {}", source.len(), args.input.display());

    // 2. ── Expand ─────────────────────────────────────────────────────
    // The whole result stays in memory; nothing touches the output path
    // until expansion has fully succeeded.
    let expanded = expander::run(&source).with_context(|| "Expanding shorthand source")?;

    // 3. ── Write ──────────────────────────────────────────────────────
    writer::emit(&expanded, &args.output)
        .with_context(|| format!("Writing {}", args.output.display()))?;
    tracing::info!("wrote {} bytes to {}", expanded.len(), args.output.display());

    Ok(())
}
