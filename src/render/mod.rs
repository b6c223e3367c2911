//! Rendering figures to image files with `plotters`
//!
//! This module turns a recorded [`Figure`](crate::figure::Figure) into an
//! actual image. The backend is chosen from the file extension, exactly one
//! of:
//!
//! - `.svg`: vector output via `SVGBackend`
//! - anything else: raster output via `BitMapBackend`
//!
//! Layout (margins, label areas, caption space) is computed here at render
//! time, so a figure always comes out tightly laid out regardless of how it
//! was built.
//!
//! # Usage
//!
//! Callers normally go through
//! [`FigureExporter::save_figure`](crate::export::FigureExporter::save_figure),
//! which invokes this module once per output format. Direct rendering is
//! available for one-off files:
//!
//! ```rust,ignore
//! use bookfig_rs::render::render_figure;
//! use bookfig_rs::style::StyleConfig;
//!
//! render_figure(&figure, &StyleConfig::default(), "scratch.png".as_ref())?;
//! ```

use std::path::Path;

use plotters::chart::ChartContext;
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;

use crate::error::{render_err, FigureError};
use crate::figure::axes::{Axes, Bounds, PlotItem};
use crate::figure::Figure;
use crate::style::{ArrowStyle, StyleConfig};

// Pixel layout constants, sized for compact book figures
const BASE_MARGIN: i32 = 10;
const X_LABEL_AREA: i32 = 28;
const Y_LABEL_AREA: i32 = 40;

// Dash pattern for reference lines and dashed series
const DASH_SIZE: i32 = 4;
const DASH_SPACING: i32 = 3;

// Stroke width for dashed guide lines
const GUIDE_WIDTH: u32 = 1;

/// Render a figure to `path`, choosing the backend from the extension.
///
/// Overwrites any existing file at `path`.
///
/// # Errors
///
/// Fails if the target directory does not exist, the file cannot be
/// written, or the drawing backend reports an error.
pub fn render_figure(
    figure: &Figure,
    style: &StyleConfig,
    path: &Path,
) -> Result<(), FigureError> {
    let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("");

    let size = (style.width, style.height);
    match ext {
        "svg" => {
            let root = SVGBackend::new(path, size).into_drawing_area();
            draw_on_root(&root, figure, style)
        }
        _ => {
            let root = BitMapBackend::new(path, size).into_drawing_area();
            draw_on_root(&root, figure, style)
        }
    }
}

/// Draw the whole figure onto a root drawing area.
fn draw_on_root<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    figure: &Figure,
    style: &StyleConfig,
) -> Result<(), FigureError>
where
    DB::ErrorType: 'static,
{
    root.fill(&style.background).map_err(render_err)?;

    let cells = root.split_evenly((figure.rows(), figure.cols()));
    for (cell, axes) in cells.iter().zip(figure.axes()) {
        draw_axes(cell, axes, style)?;
    }

    root.present().map_err(render_err)?;
    Ok(())
}

/// Draw one axes panel into its grid cell.
fn draw_axes<DB: DrawingBackend>(
    cell: &DrawingArea<DB, Shift>,
    axes: &Axes,
    style: &StyleConfig,
) -> Result<(), FigureError>
where
    DB::ErrorType: 'static,
{
    let bounds = axes.display_bounds();
    let ((x0, x1), (y0, y1)) = bounds;

    let caption_size = style.font_size + 4.0;
    let (extra_x, extra_y) = aspect_margins(cell, axes, caption_size);

    let mut builder = ChartBuilder::on(cell);
    builder
        .margin_left(BASE_MARGIN + extra_x)
        .margin_right(BASE_MARGIN + extra_x)
        .margin_top(BASE_MARGIN + extra_y)
        .margin_bottom(BASE_MARGIN + extra_y)
        .x_label_area_size(X_LABEL_AREA)
        .y_label_area_size(Y_LABEL_AREA);
    if !axes.title().is_empty() {
        builder.caption(axes.title(), ("sans-serif", caption_size));
    }

    let mut chart = builder
        .build_cartesian_2d(x0..x1, y0..y1)
        .map_err(render_err)?;

    let label_font = ("sans-serif", style.font_size);
    let mut mesh = chart.configure_mesh();
    mesh.x_desc(axes.xlabel())
        .y_desc(axes.ylabel())
        .label_style(label_font)
        .axis_desc_style(label_font);
    if style.show_grid {
        mesh.draw().map_err(render_err)?;
    } else {
        mesh.disable_mesh().draw().map_err(render_err)?;
    }

    for item in axes.items() {
        match item {
            PlotItem::Line {
                points,
                color,
                width,
                dashed,
            } => {
                let stroke = color.stroke_width(*width);
                if *dashed {
                    chart
                        .draw_series(DashedLineSeries::new(
                            points.iter().copied(),
                            DASH_SIZE,
                            DASH_SPACING,
                            stroke,
                        ))
                        .map_err(render_err)?;
                } else {
                    chart
                        .draw_series(LineSeries::new(points.iter().copied(), stroke))
                        .map_err(render_err)?;
                }
            }

            PlotItem::Markers {
                points,
                color,
                size,
            } => {
                chart
                    .draw_series(
                        points
                            .iter()
                            .map(|&(x, y)| Circle::new((x, y), *size as i32, color.filled())),
                    )
                    .map_err(render_err)?;
            }

            PlotItem::Band {
                x,
                lower,
                upper,
                color,
                alpha,
            } => {
                // Upper edge forward, lower edge backward: one closed ring
                let mut ring: Vec<(f64, f64)> =
                    x.iter().copied().zip(upper.iter().copied()).collect();
                ring.extend(x.iter().copied().zip(lower.iter().copied()).rev());
                chart
                    .draw_series(std::iter::once(Polygon::new(
                        ring,
                        color.mix(*alpha).filled(),
                    )))
                    .map_err(render_err)?;
            }

            PlotItem::HLine { y, color } => {
                chart
                    .draw_series(DashedLineSeries::new(
                        [(x0, *y), (x1, *y)],
                        DASH_SIZE,
                        DASH_SPACING,
                        color.stroke_width(GUIDE_WIDTH),
                    ))
                    .map_err(render_err)?;
            }

            PlotItem::VLine { x, color } => {
                chart
                    .draw_series(DashedLineSeries::new(
                        [(*x, y0), (*x, y1)],
                        DASH_SIZE,
                        DASH_SPACING,
                        color.stroke_width(GUIDE_WIDTH),
                    ))
                    .map_err(render_err)?;
            }

            PlotItem::Arrow { from, to, color } => {
                draw_arrow(
                    &mut chart,
                    *from,
                    *to,
                    color.unwrap_or(style.arrow.color),
                    &style.arrow,
                    bounds,
                )?;
            }
        }
    }

    Ok(())
}

/// Extra margins that square up the plotting region for an aspect ratio.
///
/// Returns `(extra_x, extra_y)` to add on each side. The inner region is
/// estimated from the cell size minus label areas and caption space; the
/// result is approximate at the pixel level, which is all a display aspect
/// needs.
fn aspect_margins<DB: DrawingBackend>(
    cell: &DrawingArea<DB, Shift>,
    axes: &Axes,
    caption_size: f64,
) -> (i32, i32) {
    let aspect = match axes.aspect() {
        Some(a) if a.is_finite() && a > 0.0 => a,
        _ => return (0, 0),
    };

    let (w, h) = cell.dim_in_pixel();
    let caption_px = if axes.title().is_empty() {
        0.0
    } else {
        caption_size * 1.5
    };
    let inner_w = w as f64 - (Y_LABEL_AREA + 2 * BASE_MARGIN) as f64;
    let inner_h = h as f64 - (X_LABEL_AREA + 2 * BASE_MARGIN) as f64 - caption_px;
    if inner_w <= 1.0 || inner_h <= 1.0 {
        return (0, 0);
    }

    let ((x0, x1), (y0, y1)) = axes.display_bounds();
    let x_span = x1 - x0;
    let y_span = y1 - y0;
    if x_span <= 0.0 || y_span <= 0.0 {
        return (0, 0);
    }

    // Equal per-unit screen length requires inner_h / y_span to be `aspect`
    // times inner_w / x_span; shrink whichever dimension is in excess.
    let desired_h = aspect * inner_w * y_span / x_span;
    if desired_h <= inner_h {
        (0, ((inner_h - desired_h) / 2.0) as i32)
    } else {
        let desired_w = inner_h * x_span / (aspect * y_span);
        (((inner_w - desired_w) / 2.0) as i32, 0)
    }
}

/// Draw an annotation arrow: a shaft plus a filled triangular head.
///
/// Head geometry is specified in pixels, so the construction runs in pixel
/// space and converts back to data coordinates; the head stays symmetric
/// even when the two axes are scaled differently.
fn draw_arrow<DB: DrawingBackend>(
    chart: &mut ChartContext<'_, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    from: (f64, f64),
    to: (f64, f64),
    color: RGBColor,
    arrow: &ArrowStyle,
    bounds: Bounds,
) -> Result<(), FigureError>
where
    DB::ErrorType: 'static,
{
    let ((x0, x1), (y0, y1)) = bounds;
    let (pw, ph) = chart.plotting_area().dim_in_pixel();
    if pw == 0 || ph == 0 {
        return Ok(());
    }
    let x_per_px = (x1 - x0) / pw as f64;
    let y_per_px = (y1 - y0) / ph as f64;
    if x_per_px == 0.0 || y_per_px == 0.0 {
        return Ok(());
    }

    let tail = (from.0 / x_per_px, from.1 / y_per_px);
    let tip = (to.0 / x_per_px, to.1 / y_per_px);
    let (dx, dy) = (tip.0 - tail.0, tip.1 - tail.1);
    let len = (dx * dx + dy * dy).sqrt();
    if len < 1e-9 {
        return Ok(());
    }
    let (ux, uy) = (dx / len, dy / len);

    let head_len = (arrow.head_length as f64).min(len);
    let half_width = arrow.head_width as f64 / 2.0;
    let base = (tip.0 - ux * head_len, tip.1 - uy * head_len);
    let left = (base.0 - uy * half_width, base.1 + ux * half_width);
    let right = (base.0 + uy * half_width, base.1 - ux * half_width);

    let to_data = |p: (f64, f64)| (p.0 * x_per_px, p.1 * y_per_px);

    chart
        .draw_series(std::iter::once(PathElement::new(
            vec![from, to_data(base)],
            color.stroke_width(arrow.width),
        )))
        .map_err(render_err)?;
    chart
        .draw_series(std::iter::once(Polygon::new(
            vec![to, to_data(left), to_data(right)],
            color.filled(),
        )))
        .map_err(render_err)?;

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
