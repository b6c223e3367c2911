//! The figure exporter: one chapter, one style, one output directory
//!
//! [`FigureExporter`] is the crate's main entry point. Constructing one
//! derives the chapter output directory from a base directory plus the
//! chapter identifier, creates it if missing, and fixes the styling
//! configuration for the exporter's lifetime. The save operations then
//! write each figure under the systematic name
//! `{prefix}_{name}_sweet.{ext}`, once per format in
//! [`ImageFormat::ALL`].
//!
//! # Example
//!
//! ```rust,ignore
//! use bookfig_rs::export::FigureExporter;
//! use bookfig_rs::figure::Figure;
//!
//! let exporter = FigureExporter::new(3, "book_output")?;
//!
//! let mut fig = Figure::single();
//! let axes = fig.primary_mut();
//! axes.line(&[0.0, 1.0, 2.0], &[0.1, 0.3, 0.2],
//!           exporter.style().palette.darkest(), 1)?;
//! exporter.error_band(axes, &[0.1, 0.3, 0.2], &[0.02, 0.03, 0.02], None, None)?;
//! exporter.horizontal_line(axes, 0.25, None);
//!
//! // Writes book_output/Chapter 3/CH03_F01_sweet.svg and .png
//! exporter.save_numbered(&fig, 1)?;
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use plotters::style::RGBColor;

use crate::chapter::ChapterId;
use crate::error::FigureError;
use crate::export::format::ImageFormat;
use crate::figure::{Axes, Figure};
use crate::render::render_figure;
use crate::style::StyleConfig;

/// Default base directory when none is supplied.
///
/// Relative to the working directory; it must exist before construction
/// like any other base directory.
pub const DEFAULT_BASE_DIR: &str = "figures";

/// Factor applied to standard errors when building an error band.
///
/// Bands span the mean plus/minus two standard errors, an approximate 95%
/// interval.
const BAND_SE_FACTOR: f64 = 2.0;

/// Styling and export conventions scoped to one book section
///
/// Holds the chapter identifier, the derived output directory and the fixed
/// [`StyleConfig`]. All drawing helpers default their colors from the
/// configured palette; all save operations use the configured image
/// dimensions and fonts.
#[derive(Debug, Clone)]
pub struct FigureExporter {
    chapter: ChapterId,
    fig_dir: PathBuf,
    style: StyleConfig,
}

impl FigureExporter {
    /// Create an exporter for `chapter` under `base_dir` with the default
    /// style.
    ///
    /// Creates the chapter subdirectory (`"Chapter {n}"` or
    /// `"Appendix {s}"`) if it does not exist yet; repeated construction
    /// for the same chapter is idempotent.
    ///
    /// # Errors
    ///
    /// Fails with [`FigureError::MissingBaseDir`] if `base_dir` does not
    /// exist. Nothing is created in that case.
    pub fn new(
        chapter: impl Into<ChapterId>,
        base_dir: impl AsRef<Path>,
    ) -> Result<Self, FigureError> {
        Self::with_style(chapter, base_dir, StyleConfig::default())
    }

    /// Create an exporter under [`DEFAULT_BASE_DIR`].
    ///
    /// # Errors
    ///
    /// Same contract as [`FigureExporter::new`].
    pub fn with_default_dir(chapter: impl Into<ChapterId>) -> Result<Self, FigureError> {
        Self::new(chapter, DEFAULT_BASE_DIR)
    }

    /// Create an exporter with a caller-supplied style.
    ///
    /// The style is fixed for the exporter's lifetime and shared read-only
    /// by every drawing and export call.
    ///
    /// # Errors
    ///
    /// Same contract as [`FigureExporter::new`].
    pub fn with_style(
        chapter: impl Into<ChapterId>,
        base_dir: impl AsRef<Path>,
        style: StyleConfig,
    ) -> Result<Self, FigureError> {
        let base_dir = base_dir.as_ref();
        if !base_dir.is_dir() {
            return Err(FigureError::MissingBaseDir(base_dir.to_path_buf()));
        }

        let chapter = chapter.into();
        let fig_dir = base_dir.join(chapter.dir_name());
        fs::create_dir_all(&fig_dir)?;
        log::debug!("figure directory ready: {}", fig_dir.display());

        Ok(Self {
            chapter,
            fig_dir,
            style,
        })
    }

    pub fn chapter(&self) -> &ChapterId {
        &self.chapter
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// The derived chapter output directory.
    pub fn fig_dir(&self) -> &Path {
        &self.fig_dir
    }

    // ========================================================================
    // Saving
    // ========================================================================

    /// Full output path for a figure name in one format.
    ///
    /// The pattern is `{fig_dir}/{prefix}_{name}_sweet.{ext}` where the
    /// prefix is `CH{n:02}` for numeric chapters and `CH{s}` for appendix
    /// labels.
    pub fn figure_path(&self, name: &str, format: ImageFormat) -> PathBuf {
        self.fig_dir.join(format!(
            "{}_{}_sweet.{}",
            self.chapter.file_prefix(),
            name,
            format.extension()
        ))
    }

    /// Save a figure under an explicit name, once per output format.
    ///
    /// Writes the vector file first, then the raster file, overwriting any
    /// existing files of the same name.
    ///
    /// # Errors
    ///
    /// Fails on the first format whose file cannot be rendered or written;
    /// earlier formats may already be on disk at that point.
    pub fn save_figure(&self, figure: &Figure, name: &str) -> Result<(), FigureError> {
        for format in ImageFormat::ALL {
            let path = self.figure_path(name, format);
            render_figure(figure, &self.style, &path)?;
            log::debug!("wrote {}", path.display());
        }
        Ok(())
    }

    /// Save a figure by number: name `F{fig_num:02}`.
    ///
    /// `save_numbered(fig, 7)` writes exactly the same files as
    /// `save_figure(fig, "F07")`.
    ///
    /// # Errors
    ///
    /// Same contract as [`FigureExporter::save_figure`].
    pub fn save_numbered(&self, figure: &Figure, fig_num: u32) -> Result<(), FigureError> {
        self.save_figure(figure, &format!("F{fig_num:02}"))
    }

    // ========================================================================
    // Palette-aware drawing helpers
    // ========================================================================

    /// Draw a dashed horizontal reference line at height `y0`.
    ///
    /// Freezes the axis bounds first so the guide spans the plot without
    /// rescaling it. Default color: third palette shade.
    pub fn horizontal_line(&self, axes: &mut Axes, y0: f64, color: Option<RGBColor>) {
        axes.hline(y0, color.unwrap_or_else(|| self.style.palette.reference_line()));
    }

    /// Draw a dashed vertical reference line at position `x0`.
    ///
    /// Freezes the axis bounds first, like
    /// [`horizontal_line`](FigureExporter::horizontal_line). Default color:
    /// third palette shade.
    pub fn vertical_line(&self, axes: &mut Axes, x0: f64, color: Option<RGBColor>) {
        axes.vline(x0, color.unwrap_or_else(|| self.style.palette.reference_line()));
    }

    /// Draw an error band: mean plus/minus two standard errors.
    ///
    /// Fills the region between `m[i] - 2*se[i]` and `m[i] + 2*se[i]` at
    /// each x, using the configured band transparency. Default
    /// x-coordinates are the integer indices `0..m.len()`; default color is
    /// the second palette shade.
    ///
    /// # Errors
    ///
    /// Fails if the series are empty, have mismatched lengths, or contain
    /// non-finite values. Nothing is recorded on failure.
    pub fn error_band(
        &self,
        axes: &mut Axes,
        means: &[f64],
        std_errs: &[f64],
        x: Option<&[f64]>,
        color: Option<RGBColor>,
    ) -> Result<(), FigureError> {
        if means.is_empty() {
            return Err(FigureError::EmptyData("means"));
        }
        if means.len() != std_errs.len() {
            return Err(FigureError::LengthMismatch {
                left: "means",
                left_len: means.len(),
                right: "standard errors",
                right_len: std_errs.len(),
            });
        }
        if let Some(xs) = x {
            if xs.len() != means.len() {
                return Err(FigureError::LengthMismatch {
                    left: "x coordinates",
                    left_len: xs.len(),
                    right: "means",
                    right_len: means.len(),
                });
            }
        }
        if means.iter().any(|v| !v.is_finite()) {
            return Err(FigureError::NonFinite("means"));
        }
        if std_errs.iter().any(|v| !v.is_finite()) {
            return Err(FigureError::NonFinite("standard errors"));
        }

        let xs: Vec<f64> = match x {
            Some(xs) => xs.to_vec(),
            None => (0..means.len()).map(|i| i as f64).collect(),
        };
        let lower: Vec<f64> = means
            .iter()
            .zip(std_errs)
            .map(|(m, se)| m - BAND_SE_FACTOR * se)
            .collect();
        let upper: Vec<f64> = means
            .iter()
            .zip(std_errs)
            .map(|(m, se)| m + BAND_SE_FACTOR * se)
            .collect();

        axes.band(
            &xs,
            &lower,
            &upper,
            color.unwrap_or_else(|| self.style.palette.band()),
            self.style.band_alpha,
        )
    }

    /// Draw an annotation arrow with the configured arrow style.
    pub fn arrow(&self, axes: &mut Axes, from: (f64, f64), to: (f64, f64)) {
        axes.arrow(from, to, Some(self.style.arrow.color));
    }

    /// Force a square aspect ratio on `axes`.
    ///
    /// Sets the display aspect so one data unit renders with equal screen
    /// length on both axes, accounting for unequal coordinate ranges.
    /// Returns the ratio that was set.
    ///
    /// # Errors
    ///
    /// Fails with [`FigureError::EmptyAxes`] if the axes hold no data and
    /// no explicit bounds.
    pub fn aspect_square(&self, axes: &mut Axes) -> Result<f64, FigureError> {
        axes.aspect_square()
    }
}

// =================================================================================================
// Tests
// =================================================================================================
