// File: crates/trace-gen/src/main.rs
// Summary: Writes raw little-endian f32 trace dumps: per-sample error of
// truncated Maclaurin sine expansions against the library sine.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

const STEPS: usize = 10_000;

fn main() -> Result<()> {
    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("target/traces"));
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("failed to create '{}'", out_dir.display()))?;

    for terms in 1..=4u32 {
        let samples: Vec<f32> = (0..STEPS)
            .map(|i| {
                let theta = i as f32 / STEPS as f32 * std::f32::consts::TAU;
                maclaurin_sin(theta, terms) - theta.sin()
            })
            .collect();

        let path = out_dir.join(format!("maclaurin_{terms}_error.f32"));
        write_trace(&path, &samples)
            .with_context(|| format!("failed to write '{}'", path.display()))?;
        println!("Wrote {} ({} samples)", path.display(), samples.len());
    }

    Ok(())
}

/// Truncated Maclaurin expansion of sine:
/// sin x = x - x^3/3! + x^5/5! - ...
fn maclaurin_sin(theta: f32, terms: u32) -> f32 {
    let mut sum = 0.0f32;
    for k in 0..terms {
        let p = 2 * k + 1;
        let sign = if k % 2 == 0 { 1.0f32 } else { -1.0f32 };
        sum += sign * theta.powi(p as i32) / factorial(p) as f32;
    }
    sum
}

fn factorial(n: u32) -> u64 {
    (1..=n as u64).product()
}

fn write_trace(path: &Path, samples: &[f32]) -> std::io::Result<()> {
    let mut bytes = Vec::with_capacity(samples.len() * 4);
    for v in samples {
        bytes.extend_from_slice(&v.to_le_bytes());
    }
    std::fs::write(path, bytes)
}
