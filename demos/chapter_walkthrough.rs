//! Demo: a complete chapter figure, start to finish
//!
//! Builds the kind of figure a chapter actually uses:
//!
//! - a measured curve in the darkest palette shade
//! - an error band (mean plus/minus two standard errors)
//! - dashed reference guides marking a target level and a cutover day
//! - an arrow annotation pointing at the cutover
//!
//! and saves it under the systematic name for chapter 3, producing
//! `figures/Chapter 3/CH03_F01_sweet.svg` and the matching `.png`.

use bookfig_rs::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("═══════════════════════════════════════════════════════");
    println!("  Chapter figure walkthrough");
    println!("═══════════════════════════════════════════════════════\n");

    // The base directory must exist before the exporter is built
    std::fs::create_dir_all(DEFAULT_BASE_DIR)?;
    let exporter = FigureExporter::with_default_dir(3)?;
    println!("figure directory: {}", exporter.fig_dir().display());

    // ====== Synthetic measurement: a ramp with noise-free means ======

    let days: Vec<f64> = (0..21).map(|d| d as f64).collect();
    let rate: Vec<f64> = days
        .iter()
        .map(|d| 0.10 + 0.04 * (1.0 - (-d / 6.0).exp()))
        .collect();
    let se: Vec<f64> = days.iter().map(|d| 0.004 + 0.0001 * d).collect();

    // ====== Build the figure ======

    let mut fig = Figure::single();
    let axes = fig.primary_mut();
    axes.set_xlabel("day");
    axes.set_ylabel("conversion rate");

    axes.line(&days, &rate, exporter.style().palette.darkest(), 1)?;
    exporter.error_band(axes, &rate, &se, Some(&days), None)?;

    // Target level and the day the ramp-up finished
    exporter.horizontal_line(axes, 0.14, None);
    exporter.vertical_line(axes, 12.0, None);
    exporter.arrow(axes, (17.0, 0.115), (12.2, 0.132));

    // ====== Save ======

    exporter.save_numbered(&fig, 1)?;
    for format in ImageFormat::ALL {
        println!("wrote {}", exporter.figure_path("F01", format).display());
    }

    Ok(())
}
