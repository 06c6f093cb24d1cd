// File: crates/trace-core/tests/autoscale.rs
// Purpose: Validate axis fitting over sample-indexed series.

use trace_core::{Chart, Series};

#[test]
fn autoscale_spans_samples() {
    let mut chart = Chart::new();
    chart.add_series(Series::from_samples(vec![1.0f32, -2.5, 0.5, 3.0]));

    chart.autoscale_axes(0.0);

    // X spans the sample indices exactly
    assert!((chart.x_axis.min - 0.0).abs() < 1e-9);
    assert!((chart.x_axis.max - 3.0).abs() < 1e-9);

    // Y spans the data min/max
    assert!((chart.y_axis.min - (-2.5)).abs() < 1e-9);
    assert!((chart.y_axis.max - 3.0).abs() < 1e-9);
}

#[test]
fn autoscale_pads_y_only() {
    let mut chart = Chart::new();
    chart.add_series(Series::from_samples(vec![0.0f32, 10.0]));

    chart.autoscale_axes(0.02);

    assert!((chart.x_axis.min - 0.0).abs() < 1e-9);
    assert!((chart.x_axis.max - 1.0).abs() < 1e-9);
    assert!((chart.y_axis.min - (-0.2)).abs() < 1e-9);
    assert!((chart.y_axis.max - 10.2).abs() < 1e-9);
}

#[test]
fn autoscale_widens_constant_series() {
    let mut chart = Chart::new();
    chart.add_series(Series::from_samples(vec![4.0f32, 4.0, 4.0]));

    chart.autoscale_axes(0.02);

    // A flat trace still gets a finite, non-empty y range
    assert!(chart.y_axis.max > chart.y_axis.min);
    assert!(chart.y_axis.min <= 4.0 && 4.0 <= chart.y_axis.max);
}

#[test]
fn autoscale_single_sample() {
    let mut chart = Chart::new();
    chart.add_series(Series::from_samples(vec![7.0f32]));

    chart.autoscale_axes(0.02);

    assert!(chart.x_axis.max > chart.x_axis.min);
    assert!(chart.y_axis.max > chart.y_axis.min);
}

#[test]
fn autoscale_empty_chart_falls_back_to_unit_ranges() {
    let mut chart = Chart::new();
    chart.autoscale_axes(0.02);

    assert!((chart.x_axis.min - 0.0).abs() < 1e-9);
    assert!((chart.x_axis.max - 1.0).abs() < 1e-9);
    assert!((chart.y_axis.min - 0.0).abs() < 1e-9);
    assert!((chart.y_axis.max - 1.0).abs() < 1e-9);
}
