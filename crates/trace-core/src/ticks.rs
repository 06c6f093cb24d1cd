// File: crates/trace-core/src/ticks.rs
// Summary: Tick layout and label formatting helpers.

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Tick positions for a `[min, max]` range: `count` evenly spaced values,
/// endpoints included.
pub fn ticks(min: f64, max: f64, count: usize) -> Vec<f64> {
    linspace(min, max, count.max(2))
}

/// Short human-readable tick label. Ordinary magnitudes print as trimmed
/// decimals; very large/small values fall back to exponent form.
pub fn format_tick(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    let mag = v.abs();
    if mag >= 1e5 || mag < 1e-3 {
        return format!("{v:.1e}");
    }
    let s = format!("{v:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    s.to_string()
}
