//! A single set of axes: recorded plot items plus axis state
//!
//! There is no ambient "current plot". An [`Axes`] is a plain owned value
//! that records what to draw; nothing touches a drawing backend until the
//! figure is rendered at save time. This keeps every drawing operation
//! composable and testable without producing image files.
//!
//! # Axis bounds
//!
//! Bounds come in two flavors:
//!
//! - **data bounds**: the raw extent of line series, markers and error
//!   bands. Reference lines and arrows never contribute.
//! - **display bounds**: what the renderer actually uses. Either bounds
//!   frozen by [`Axes::freeze_bounds`] (or set explicitly), or the data
//!   bounds with 10% vertical padding.
//!
//! Reference-line operations freeze the bounds first, so a dashed guide
//! spans the plot as it currently stands instead of rescaling it.

use plotters::style::RGBColor;

use crate::error::FigureError;

/// Axis bounds as `((x_min, x_max), (y_min, y_max))`.
pub type Bounds = ((f64, f64), (f64, f64));

/// One recorded drawing operation.
///
/// Items are rendered in insertion order.
#[derive(Debug, Clone)]
pub(crate) enum PlotItem {
    /// Connected data series.
    Line {
        points: Vec<(f64, f64)>,
        color: RGBColor,
        width: u32,
        dashed: bool,
    },

    /// Circular markers at each point.
    Markers {
        points: Vec<(f64, f64)>,
        color: RGBColor,
        size: u32,
    },

    /// Filled region between a lower and an upper curve.
    Band {
        x: Vec<f64>,
        lower: Vec<f64>,
        upper: Vec<f64>,
        color: RGBColor,
        alpha: f64,
    },

    /// Dashed horizontal guide spanning the display x-bounds.
    HLine { y: f64, color: RGBColor },

    /// Dashed vertical guide spanning the display y-bounds.
    VLine { x: f64, color: RGBColor },

    /// Annotation arrow from tail to tip, in data coordinates.
    ///
    /// Geometry (shaft width, head size) comes from the figure style at
    /// render time; only a color override is stored here.
    Arrow {
        from: (f64, f64),
        to: (f64, f64),
        color: Option<RGBColor>,
    },
}

/// A single set of axes with recorded plot content
///
/// # Example
///
/// ```rust,ignore
/// use bookfig_rs::figure::Axes;
/// use bookfig_rs::style::palette::GRAY_DARKEST;
///
/// let mut axes = Axes::new();
/// axes.set_xlabel("day");
/// axes.set_ylabel("conversion rate");
/// axes.line(&[0.0, 1.0, 2.0], &[0.10, 0.12, 0.11], GRAY_DARKEST, 1)?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct Axes {
    title: String,
    xlabel: String,
    ylabel: String,
    items: Vec<PlotItem>,
    frozen_bounds: Option<Bounds>,
    aspect: Option<f64>,
}

impl Axes {
    /// Empty axes with no title, labels or content.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the axes title (drawn as a caption above the plot).
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Set the x-axis label.
    pub fn set_xlabel(&mut self, label: impl Into<String>) {
        self.xlabel = label.into();
    }

    /// Set the y-axis label.
    pub fn set_ylabel(&mut self, label: impl Into<String>) {
        self.ylabel = label.into();
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn xlabel(&self) -> &str {
        &self.xlabel
    }

    pub fn ylabel(&self) -> &str {
        &self.ylabel
    }

    /// True if no plot items have been recorded.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub(crate) fn items(&self) -> &[PlotItem] {
        &self.items
    }

    // ========================================================================
    // Data series
    // ========================================================================

    /// Record a solid line series.
    ///
    /// # Errors
    ///
    /// Fails if the series are empty or have different lengths.
    pub fn line(
        &mut self,
        xs: &[f64],
        ys: &[f64],
        color: RGBColor,
        width: u32,
    ) -> Result<(), FigureError> {
        let points = Self::zip_series(xs, ys)?;
        self.items.push(PlotItem::Line {
            points,
            color,
            width,
            dashed: false,
        });
        Ok(())
    }

    /// Record a dashed line series.
    ///
    /// # Errors
    ///
    /// Fails if the series are empty or have different lengths.
    pub fn dashed_line(
        &mut self,
        xs: &[f64],
        ys: &[f64],
        color: RGBColor,
        width: u32,
    ) -> Result<(), FigureError> {
        let points = Self::zip_series(xs, ys)?;
        self.items.push(PlotItem::Line {
            points,
            color,
            width,
            dashed: true,
        });
        Ok(())
    }

    /// Record circular markers at each `(x, y)` point.
    ///
    /// # Errors
    ///
    /// Fails if the series are empty or have different lengths.
    pub fn markers(
        &mut self,
        xs: &[f64],
        ys: &[f64],
        color: RGBColor,
        size: u32,
    ) -> Result<(), FigureError> {
        let points = Self::zip_series(xs, ys)?;
        self.items.push(PlotItem::Markers {
            points,
            color,
            size,
        });
        Ok(())
    }

    /// Record a filled band between `lower` and `upper` at each `x`.
    ///
    /// # Errors
    ///
    /// Fails if the series are empty, have mismatched lengths, or contain
    /// non-finite values (a band polygon cannot skip NaN gaps the way a
    /// line can).
    pub fn band(
        &mut self,
        x: &[f64],
        lower: &[f64],
        upper: &[f64],
        color: RGBColor,
        alpha: f64,
    ) -> Result<(), FigureError> {
        if x.is_empty() {
            return Err(FigureError::EmptyData("x coordinates"));
        }
        if x.len() != lower.len() {
            return Err(FigureError::LengthMismatch {
                left: "x coordinates",
                left_len: x.len(),
                right: "lower bounds",
                right_len: lower.len(),
            });
        }
        if x.len() != upper.len() {
            return Err(FigureError::LengthMismatch {
                left: "x coordinates",
                left_len: x.len(),
                right: "upper bounds",
                right_len: upper.len(),
            });
        }
        if x.iter().any(|v| !v.is_finite()) {
            return Err(FigureError::NonFinite("x coordinates"));
        }
        if lower.iter().chain(upper.iter()).any(|v| !v.is_finite()) {
            return Err(FigureError::NonFinite("band bounds"));
        }

        self.items.push(PlotItem::Band {
            x: x.to_vec(),
            lower: lower.to_vec(),
            upper: upper.to_vec(),
            color,
            alpha,
        });
        Ok(())
    }

    // ========================================================================
    // Reference lines and annotations
    // ========================================================================

    /// Record a dashed horizontal guide at height `y0`.
    ///
    /// Freezes the axis bounds first, so the guide spans the plot as it
    /// currently stands and never rescales it.
    pub fn hline(&mut self, y0: f64, color: RGBColor) {
        self.freeze_bounds();
        self.items.push(PlotItem::HLine { y: y0, color });
    }

    /// Record a dashed vertical guide at position `x0`.
    ///
    /// Freezes the axis bounds first, like [`Axes::hline`].
    pub fn vline(&mut self, x0: f64, color: RGBColor) {
        self.freeze_bounds();
        self.items.push(PlotItem::VLine { x: x0, color });
    }

    /// Record an annotation arrow from `from` to `to` in data coordinates.
    ///
    /// Shaft width, head geometry and default color come from the figure
    /// style at render time; pass `Some(color)` to override the color only.
    pub fn arrow(&mut self, from: (f64, f64), to: (f64, f64), color: Option<RGBColor>) {
        self.items.push(PlotItem::Arrow { from, to, color });
    }

    // ========================================================================
    // Bounds and aspect
    // ========================================================================

    /// Fix the axis bounds explicitly.
    ///
    /// Subsequent items are drawn against these bounds and cannot rescale
    /// the axes.
    pub fn set_bounds(&mut self, x: (f64, f64), y: (f64, f64)) {
        self.frozen_bounds = Some((x, y));
    }

    /// Capture the current display bounds as fixed limits.
    ///
    /// Idempotent: bounds already frozen stay as they are.
    pub fn freeze_bounds(&mut self) {
        if self.frozen_bounds.is_none() {
            self.frozen_bounds = Some(self.display_bounds());
        }
    }

    /// Raw extent of the recorded data items.
    ///
    /// Line series, markers and bands contribute; reference lines and
    /// arrows never do. Non-finite points are skipped. `None` until the
    /// axes hold at least one finite data point.
    pub fn data_bounds(&self) -> Option<Bounds> {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        let mut seen = false;

        let mut visit = |x: f64, y: f64| {
            if x.is_finite() && y.is_finite() {
                x_min = x_min.min(x);
                x_max = x_max.max(x);
                y_min = y_min.min(y);
                y_max = y_max.max(y);
                seen = true;
            }
        };

        for item in &self.items {
            match item {
                PlotItem::Line { points, .. } | PlotItem::Markers { points, .. } => {
                    for &(x, y) in points {
                        visit(x, y);
                    }
                }
                PlotItem::Band { x, lower, upper, .. } => {
                    for i in 0..x.len() {
                        visit(x[i], lower[i]);
                        visit(x[i], upper[i]);
                    }
                }
                PlotItem::HLine { .. } | PlotItem::VLine { .. } | PlotItem::Arrow { .. } => {}
            }
        }

        seen.then_some(((x_min, x_max), (y_min, y_max)))
    }

    /// Bounds the renderer uses.
    ///
    /// Frozen bounds win. Otherwise the data bounds with 10% vertical
    /// padding, zero spans widened to a unit, and `((0,1), (0,1))` for
    /// axes with no data at all.
    pub fn display_bounds(&self) -> Bounds {
        if let Some(bounds) = self.frozen_bounds {
            return bounds;
        }

        match self.data_bounds() {
            Some(((x0, x1), (y0, y1))) => {
                let (x0, x1) = widen_zero_span(x0, x1);
                let (y0, y1) = widen_zero_span(y0, y1);
                let y_pad = 0.1 * (y1 - y0);
                ((x0, x1), (y0 - y_pad, y1 + y_pad))
            }
            None => ((0.0, 1.0), (0.0, 1.0)),
        }
    }

    /// Display aspect ratio, if one was set.
    pub fn aspect(&self) -> Option<f64> {
        self.aspect
    }

    /// Set the display aspect ratio (y-unit screen length per x-unit).
    pub fn set_aspect(&mut self, aspect: f64) {
        self.aspect = Some(aspect);
    }

    /// Set the aspect ratio so one data unit renders with equal screen
    /// length on both axes.
    ///
    /// Reads the data-coordinate bounds and sets the ratio to
    /// `x_span / y_span`, which squares up the axes box even when the two
    /// coordinate ranges differ. Returns the ratio that was set.
    ///
    /// # Errors
    ///
    /// Fails with [`FigureError::EmptyAxes`] if the axes hold no data and
    /// no explicit bounds.
    pub fn aspect_square(&mut self) -> Result<f64, FigureError> {
        let ((x0, x1), (y0, y1)) = match self.frozen_bounds {
            Some(bounds) => bounds,
            None => self.data_bounds().ok_or(FigureError::EmptyAxes)?,
        };
        let (x0, x1) = widen_zero_span(x0, x1);
        let (y0, y1) = widen_zero_span(y0, y1);
        let ratio = (x1 - x0) / (y1 - y0);
        self.aspect = Some(ratio);
        Ok(ratio)
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn zip_series(xs: &[f64], ys: &[f64]) -> Result<Vec<(f64, f64)>, FigureError> {
        if xs.is_empty() {
            return Err(FigureError::EmptyData("x coordinates"));
        }
        if xs.len() != ys.len() {
            return Err(FigureError::LengthMismatch {
                left: "x coordinates",
                left_len: xs.len(),
                right: "y values",
                right_len: ys.len(),
            });
        }
        Ok(xs.iter().copied().zip(ys.iter().copied()).collect())
    }
}

/// Widen a degenerate (zero-span) range to a unit interval around it.
fn widen_zero_span(lo: f64, hi: f64) -> (f64, f64) {
    if hi > lo {
        (lo, hi)
    } else {
        (lo - 0.5, hi + 0.5)
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::style::palette::{GRAY_DARK, GRAY_DARKEST, GRAY_LIGHT};

    fn axes_with_line(xs: &[f64], ys: &[f64]) -> Axes {
        let mut axes = Axes::new();
        axes.line(xs, ys, GRAY_DARKEST, 1).unwrap();
        axes
    }

    #[test]
    fn test_line_length_mismatch_fails() {
        let mut axes = Axes::new();
        let err = axes
            .line(&[0.0, 1.0, 2.0], &[0.0, 1.0], GRAY_DARKEST, 1)
            .unwrap_err();
        assert!(matches!(err, FigureError::LengthMismatch { .. }));
        assert!(axes.is_empty());
    }

    #[test]
    fn test_line_empty_fails() {
        let mut axes = Axes::new();
        let err = axes.line(&[], &[], GRAY_DARKEST, 1).unwrap_err();
        assert!(matches!(err, FigureError::EmptyData(_)));
    }

    #[test]
    fn test_dashed_line_records_like_solid() {
        let mut axes = Axes::new();
        axes.dashed_line(&[0.0, 2.0], &[1.0, 3.0], GRAY_DARK, 1).unwrap();
        assert!(!axes.is_empty());
        let ((x0, x1), (y0, y1)) = axes.data_bounds().unwrap();
        assert_eq!((x0, x1), (0.0, 2.0));
        assert_eq!((y0, y1), (1.0, 3.0));
    }

    #[test]
    fn test_set_aspect_is_reported_back() {
        let mut axes = Axes::new();
        assert!(axes.aspect().is_none());
        axes.set_aspect(1.5);
        assert_eq!(axes.aspect(), Some(1.5));
    }

    #[test]
    fn test_data_bounds_from_line() {
        let axes = axes_with_line(&[0.0, 10.0], &[0.0, 5.0]);
        let ((x0, x1), (y0, y1)) = axes.data_bounds().unwrap();
        assert_eq!((x0, x1), (0.0, 10.0));
        assert_eq!((y0, y1), (0.0, 5.0));
    }

    #[test]
    fn test_data_bounds_include_band_extent() {
        let mut axes = axes_with_line(&[0.0, 1.0], &[1.0, 1.0]);
        axes.band(&[0.0, 1.0], &[-2.0, -2.0], &[4.0, 4.0], GRAY_DARK, 0.333)
            .unwrap();
        let (_, (y0, y1)) = axes.data_bounds().unwrap();
        assert_eq!((y0, y1), (-2.0, 4.0));
    }

    #[test]
    fn test_data_bounds_skip_non_finite_points() {
        let axes = axes_with_line(&[0.0, 1.0, 2.0], &[1.0, f64::NAN, 3.0]);
        let (_, (y0, y1)) = axes.data_bounds().unwrap();
        assert_eq!((y0, y1), (1.0, 3.0));
    }

    #[test]
    fn test_reference_lines_do_not_extend_bounds() {
        let mut axes = axes_with_line(&[0.0, 10.0], &[0.0, 5.0]);
        axes.hline(99.0, GRAY_LIGHT);
        axes.vline(-50.0, GRAY_LIGHT);
        let ((x0, x1), (y0, y1)) = axes.data_bounds().unwrap();
        assert_eq!((x0, x1), (0.0, 10.0));
        assert_eq!((y0, y1), (0.0, 5.0));
    }

    #[test]
    fn test_hline_freezes_display_bounds() {
        let mut axes = axes_with_line(&[0.0, 10.0], &[0.0, 5.0]);
        let before = axes.display_bounds();
        axes.hline(99.0, GRAY_LIGHT);
        // Adding more data after the guide must not rescale the axes
        axes.line(&[0.0, 100.0], &[0.0, 100.0], GRAY_DARKEST, 1).unwrap();
        assert_eq!(axes.display_bounds(), before);
    }

    #[test]
    fn test_display_bounds_pad_y_only() {
        let axes = axes_with_line(&[0.0, 10.0], &[0.0, 5.0]);
        let ((x0, x1), (y0, y1)) = axes.display_bounds();
        assert_eq!((x0, x1), (0.0, 10.0));
        assert_relative_eq!(y0, -0.5);
        assert_relative_eq!(y1, 5.5);
    }

    #[test]
    fn test_display_bounds_fallback_for_empty_axes() {
        let axes = Axes::new();
        assert_eq!(axes.display_bounds(), ((0.0, 1.0), (0.0, 1.0)));
    }

    #[test]
    fn test_display_bounds_widen_constant_series() {
        let axes = axes_with_line(&[0.0, 1.0], &[3.0, 3.0]);
        let (_, (y0, y1)) = axes.display_bounds();
        assert!(y0 < 3.0 && y1 > 3.0);
    }

    #[test]
    fn test_set_bounds_overrides_data() {
        let mut axes = axes_with_line(&[0.0, 10.0], &[0.0, 5.0]);
        axes.set_bounds((-1.0, 1.0), (-2.0, 2.0));
        assert_eq!(axes.display_bounds(), ((-1.0, 1.0), (-2.0, 2.0)));
    }

    #[test]
    fn test_aspect_square_ratio() {
        // x-range [0, 10] against y-range [0, 5] squares up at 2.0
        let mut axes = axes_with_line(&[0.0, 10.0], &[0.0, 5.0]);
        let ratio = axes.aspect_square().unwrap();
        assert_relative_eq!(ratio, 2.0);
        assert_relative_eq!(axes.aspect().unwrap(), 2.0);
    }

    #[test]
    fn test_aspect_square_uses_frozen_bounds_when_set() {
        let mut axes = Axes::new();
        axes.set_bounds((0.0, 4.0), (0.0, 1.0));
        let ratio = axes.aspect_square().unwrap();
        assert_relative_eq!(ratio, 4.0);
    }

    #[test]
    fn test_aspect_square_on_empty_axes_fails() {
        let mut axes = Axes::new();
        assert!(matches!(
            axes.aspect_square(),
            Err(FigureError::EmptyAxes)
        ));
    }

    #[test]
    fn test_band_validation() {
        let mut axes = Axes::new();

        let err = axes
            .band(&[], &[], &[], GRAY_DARK, 0.333)
            .unwrap_err();
        assert!(matches!(err, FigureError::EmptyData(_)));

        let err = axes
            .band(&[0.0, 1.0], &[0.0], &[1.0, 1.0], GRAY_DARK, 0.333)
            .unwrap_err();
        assert!(matches!(err, FigureError::LengthMismatch { .. }));

        let err = axes
            .band(&[0.0, 1.0], &[0.0, f64::NAN], &[1.0, 1.0], GRAY_DARK, 0.333)
            .unwrap_err();
        assert!(matches!(err, FigureError::NonFinite(_)));

        assert!(axes.is_empty());
    }
}
