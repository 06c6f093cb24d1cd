// File: crates/trace-core/src/axis.rs
// Summary: Axis model with ranges and tick label visibility.

#[derive(Clone, Copy, Debug)]
pub struct Axis {
    pub min: f64,
    pub max: f64,
    /// Whether tick label text is drawn along this axis. The tick marks and
    /// the axis line itself are always drawn.
    pub tick_labels: bool,
}

impl Axis {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max, tick_labels: true }
    }

    /// Default X axis: unit range, tick labels suppressed.
    pub fn default_x() -> Self {
        let mut a = Self::new(0.0, 1.0);
        a.tick_labels = false;
        a
    }

    /// Default Y axis: unit range, tick labels shown.
    pub fn default_y() -> Self {
        Self::new(0.0, 1.0)
    }
}
