//! Shared figure fixtures for integration tests

use bookfig_rs::prelude::*;

/// An exponential decay sampled at integer points: the kind of curve most
/// chapter figures are built from.
pub fn decay_series(n: usize) -> (Vec<f64>, Vec<f64>) {
    let xs: Vec<f64> = (0..n).map(|i| i as f64).collect();
    let ys: Vec<f64> = xs.iter().map(|t| (-t / 5.0).exp()).collect();
    (xs, ys)
}

/// A representative single-axes figure: labeled decay curve with an error
/// band and a horizontal guide, styled from the default palette.
pub fn sample_figure() -> Figure {
    let style = StyleConfig::default();
    let mut fig = Figure::single();
    let axes = fig.primary_mut();
    axes.set_title("decay");
    axes.set_xlabel("t");
    axes.set_ylabel("y");

    let (xs, ys) = decay_series(20);
    axes.line(&xs, &ys, style.palette.darkest(), style.line_width)
        .expect("series lengths match");

    let lower: Vec<f64> = ys.iter().map(|y| y - 0.05).collect();
    let upper: Vec<f64> = ys.iter().map(|y| y + 0.05).collect();
    axes.band(&xs, &lower, &upper, style.palette.band(), style.band_alpha)
        .expect("band lengths match");

    axes.hline(0.5, style.palette.reference_line());
    fig
}
