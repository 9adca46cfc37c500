//! Entry point for the zngvendor tool.
//!
//! This file handles high-level application flow:
//! 1. Parse command-line arguments using `clap`.
//! 2. Initialize logging with `tracing-subscriber`.
//! 3. Build the vendorer with the `X86` backend (the only supported architecture).
//! 4. Flatten and rewrite the vendor tree into the output directory.
//!
//! Error handling is done via `anyhow`.

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use zngvendor::arch::x86::X86;
use zngvendor::config::Config;
use zngvendor::vendor::Vendorer;

fn main() -> Result<()> {
    let config = Config::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .with_context(|| format!("invalid log level {}", config.log_level))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let vendor_dir = config
        .resolve_vendor_dir()
        .context("no vendor directory given and HOME is not set")?;

    let vendorer = Vendorer::new(X86);
    let summary = vendorer
        .run(&vendor_dir, &config.output_dir)
        .with_context(|| format!("failed to vendor {}", vendor_dir.display()))?;

    println!(
        "Vendored {} files into {}",
        summary.rewritten + summary.copied,
        config.output_dir.display()
    );
    Ok(())
}
