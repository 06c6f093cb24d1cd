// File: crates/traceplot/src/lib.rs
// Summary: One-shot pipeline: load raw f32 trace, render line plot, write image.

pub mod config;
pub mod loader;

use anyhow::{Context, Result};
use trace_core::{Chart, PlotOptions, Series};

pub use config::{Config, ConfigError};
pub use loader::{LoadError, TraceFile};

/// Fraction of the data span added above and below the trace.
const Y_PAD_FRAC: f64 = 0.02;

/// Run the load -> render -> write pipeline described by `cfg`.
pub fn run(cfg: &Config) -> Result<()> {
    let trace = TraceFile::open(&cfg.input)
        .with_context(|| format!("failed to load trace '{}'", cfg.input.display()))?;

    let mut chart = Chart::new();
    chart.add_series(Series::from_samples(trace.samples()));
    chart.autoscale_axes(Y_PAD_FRAC);

    let opts = PlotOptions::default();
    chart
        .render_to_file(&opts, &cfg.output)
        .with_context(|| format!("failed to write plot '{}'", cfg.output.display()))?;

    println!("Wrote {}", cfg.output.display());
    Ok(())
}
