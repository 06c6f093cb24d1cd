// File: crates/traceplot/src/main.rs
// Summary: CLI entry point; errors propagate as a non-zero exit with a diagnostic.

use anyhow::{Context, Result};
use traceplot::Config;

fn main() -> Result<()> {
    let cfg = Config::from_args(std::env::args().skip(1))
        .context("usage: traceplot <input-trace> <output-image>")?;
    traceplot::run(&cfg)
}
