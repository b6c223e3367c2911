//! Demo: appendix naming and multi-panel figures
//!
//! Appendices are identified by label instead of number: the output
//! directory becomes `Appendix A` and filenames carry the raw label
//! (`CHA_...`), with no zero padding. The figure itself is a two-panel
//! comparison with a square-aspect panel.

use bookfig_rs::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    std::fs::create_dir_all(DEFAULT_BASE_DIR)?;
    let exporter = FigureExporter::with_default_dir("A")?;
    println!("figure directory: {}", exporter.fig_dir().display());

    let xs: Vec<f64> = (0..=100).map(|i| i as f64 / 10.0).collect();
    let slow: Vec<f64> = xs.iter().map(|x| 1.0 - (-x / 4.0).exp()).collect();
    let fast: Vec<f64> = xs.iter().map(|x| 1.0 - (-x / 1.5).exp()).collect();

    let mut fig = Figure::grid(1, 2)?;

    let left = fig.axes_mut(0);
    left.set_title("slow ramp");
    left.set_xlabel("t");
    left.set_ylabel("fraction converged");
    left.line(&xs, &slow, exporter.style().palette.darkest(), 1)?;
    exporter.horizontal_line(left, 0.95, None);

    let right = fig.axes_mut(1);
    right.set_title("fast ramp");
    right.set_xlabel("t");
    right.line(&xs, &fast, exporter.style().palette.darkest(), 1)?;
    exporter.horizontal_line(right, 0.95, None);
    exporter.aspect_square(right)?;

    // Writes CHA_ramps_sweet.svg and CHA_ramps_sweet.png
    exporter.save_figure(&fig, "ramps")?;
    for format in ImageFormat::ALL {
        println!("wrote {}", exporter.figure_path("ramps", format).display());
    }

    Ok(())
}
