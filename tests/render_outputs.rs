//! Integration tests: rendered output files
//!
//! These tests run whole figures through the renderer and check the files
//! that come out: both backends produce non-empty output, every drawing
//! operation survives the trip, and the aspect/bounds behavior holds
//! through the full pipeline.

use approx::assert_relative_eq;
use bookfig_rs::prelude::*;
use tempfile::tempdir;

mod common;
use common::{decay_series, sample_figure};

#[test]
fn test_saved_png_is_a_png() {
    let base = tempdir().unwrap();
    let exporter = FigureExporter::new(2, base.path()).unwrap();

    exporter.save_figure(&sample_figure(), "smoke").unwrap();

    let body = std::fs::read(exporter.figure_path("smoke", ImageFormat::Png)).unwrap();
    assert_eq!(&body[1..4], b"PNG");
}

#[test]
fn test_saved_svg_is_an_svg() {
    let base = tempdir().unwrap();
    let exporter = FigureExporter::new(2, base.path()).unwrap();

    exporter.save_figure(&sample_figure(), "smoke").unwrap();

    let body =
        std::fs::read_to_string(exporter.figure_path("smoke", ImageFormat::Svg)).unwrap();
    assert!(body.contains("<svg"));
    // The dashed guide and the band polygon both made it into the output
    assert!(body.contains("polygon"));
}

#[test]
fn test_every_drawing_operation_renders() {
    let base = tempdir().unwrap();
    let exporter = FigureExporter::new(4, base.path()).unwrap();

    let mut fig = Figure::single();
    let axes = fig.primary_mut();
    axes.set_xlabel("iteration");
    axes.set_ylabel("estimate");

    let (xs, ys) = decay_series(30);
    let se = vec![0.03; 30];
    axes.line(&xs, &ys, exporter.style().palette.darkest(), 1)
        .unwrap();
    axes.markers(&xs, &ys, exporter.style().palette.darkest(), 2)
        .unwrap();
    exporter
        .error_band(axes, &ys, &se, Some(&xs), None)
        .unwrap();
    exporter.horizontal_line(axes, 0.2, None);
    exporter.vertical_line(axes, 10.0, None);
    exporter.arrow(axes, (20.0, 0.8), (10.0, 0.2));

    exporter.save_numbered(&fig, 1).unwrap();

    for format in ImageFormat::ALL {
        let path = exporter.figure_path("F01", format);
        assert!(path.exists(), "missing {}", path.display());
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }
}

#[test]
fn test_grid_figure_renders_all_panels() {
    let base = tempdir().unwrap();
    let exporter = FigureExporter::new(4, base.path()).unwrap();

    let mut fig = Figure::grid(1, 2).unwrap();
    let (xs, ys) = decay_series(10);
    fig.axes_mut(0)
        .line(&xs, &ys, exporter.style().palette.darkest(), 1)
        .unwrap();
    fig.axes_mut(1)
        .line(&xs, &ys, exporter.style().palette.band(), 1)
        .unwrap();
    // Guide on the second panel only, the way subplot comparisons mark one side
    exporter.vertical_line(fig.axes_mut(1), 5.0, None);

    exporter.save_figure(&fig, "panels").unwrap();
    assert!(exporter.figure_path("panels", ImageFormat::Svg).exists());
}

#[test]
fn test_aspect_square_through_pipeline() {
    let base = tempdir().unwrap();
    let exporter = FigureExporter::new(6, base.path()).unwrap();

    let mut fig = Figure::single();
    let axes = fig.primary_mut();
    axes.line(
        &[0.0, 10.0],
        &[0.0, 5.0],
        exporter.style().palette.darkest(),
        1,
    )
    .unwrap();

    let ratio = exporter.aspect_square(axes).unwrap();
    assert_relative_eq!(ratio, 2.0);

    // The squared-up figure still renders to both formats
    exporter.save_figure(&fig, "square").unwrap();
    assert!(exporter.figure_path("square", ImageFormat::Png).exists());
}

#[test]
fn test_reference_lines_do_not_rescale_saved_figure() {
    let base = tempdir().unwrap();
    let exporter = FigureExporter::new(6, base.path()).unwrap();

    let mut fig = Figure::single();
    let axes = fig.primary_mut();
    let (xs, ys) = decay_series(10);
    axes.line(&xs, &ys, exporter.style().palette.darkest(), 1)
        .unwrap();

    let before = axes.display_bounds();
    // Guides far outside the data must not stretch the axes
    exporter.horizontal_line(axes, 1000.0, None);
    exporter.vertical_line(axes, -1000.0, None);
    assert_eq!(axes.display_bounds(), before);

    exporter.save_figure(&fig, "guides").unwrap();
    assert!(exporter.figure_path("guides", ImageFormat::Png).exists());
}
