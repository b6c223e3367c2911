//! Full styling bundle for a chapter's figures
//!
//! [`StyleConfig`] carries everything the renderer needs: the palette, the
//! error-band transparency, the arrow geometry, the label font size and the
//! image dimensions. It is fixed at exporter construction and shared
//! read-only by all drawing and export calls.

use plotters::prelude::*;

use crate::style::palette::{Palette, GRAY_DARKEST};

/// Geometry and color of annotation arrows
///
/// All lengths are in pixels of the rendered image.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrowStyle {
    /// Shaft stroke width (default: 1)
    pub width: u32,

    /// Arrow color (default: darkest palette shade)
    pub color: RGBColor,

    /// Width of the head triangle base (default: 5)
    pub head_width: u32,

    /// Length of the head triangle (default: 7)
    pub head_length: u32,
}

impl Default for ArrowStyle {
    fn default() -> Self {
        Self {
            width: 1,
            color: GRAY_DARKEST,
            head_width: 5,
            head_length: 7,
        }
    }
}

/// Styling configuration for all figures of one book section
///
/// # Fields
///
/// - `palette`: the fixed four-shade grayscale set
/// - `band_alpha`: transparency for error bands
/// - `arrow`: annotation arrow geometry
/// - `font_size`: label font size for two-dimensional plots, in points
/// - `width`, `height`: image dimensions in pixels
/// - `background`: image background color
/// - `line_width`: default stroke width for data series
/// - `show_grid`: whether to draw grid lines
///
/// # Example
///
/// ```rust,ignore
/// use bookfig_rs::style::StyleConfig;
///
/// let mut style = StyleConfig::default();
/// style.width = 960; // wider figure for a two-column layout
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StyleConfig {
    /// Grayscale palette (default: [`Palette::grayscale`])
    pub palette: Palette,

    /// Error-band fill transparency (default: 0.333)
    pub band_alpha: f64,

    /// Annotation arrow geometry (default: [`ArrowStyle::default`])
    pub arrow: ArrowStyle,

    /// Label font size in points (default: 7.0)
    pub font_size: f64,

    /// Image width in pixels (default: 640)
    pub width: u32,

    /// Image height in pixels (default: 480)
    pub height: u32,

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Default series stroke width in pixels (default: 1)
    pub line_width: u32,

    /// Draw grid lines (default: false, book figures stay clean)
    pub show_grid: bool,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            palette: Palette::grayscale(),
            band_alpha: 0.333,
            arrow: ArrowStyle::default(),
            font_size: 7.0,
            width: 640,
            height: 480,
            background: WHITE,
            line_width: 1,
            show_grid: false,
        }
    }
}

impl StyleConfig {
    /// Config with custom image dimensions, everything else default.
    pub fn with_dimensions(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Builder pattern: set the error-band transparency.
    pub fn band_alpha(mut self, alpha: f64) -> Self {
        self.band_alpha = alpha;
        self
    }

    /// Builder pattern: set the label font size.
    pub fn font_size(mut self, points: f64) -> Self {
        self.font_size = points;
        self
    }

    /// Builder pattern: enable grid lines.
    pub fn with_grid(mut self) -> Self {
        self.show_grid = true;
        self
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_band_alpha() {
        let style = StyleConfig::default();
        assert_eq!(style.band_alpha, 0.333);
    }

    #[test]
    fn test_default_font_size() {
        let style = StyleConfig::default();
        assert_eq!(style.font_size, 7.0);
    }

    #[test]
    fn test_default_arrow_geometry() {
        let arrow = ArrowStyle::default();
        assert_eq!(arrow.width, 1);
        assert_eq!(arrow.head_width, 5);
        assert_eq!(arrow.head_length, 7);
        assert_eq!(arrow.color, GRAY_DARKEST);
    }

    #[test]
    fn test_default_dimensions_and_background() {
        let style = StyleConfig::default();
        assert_eq!(style.width, 640);
        assert_eq!(style.height, 480);
        assert_eq!(style.background, WHITE);
        assert!(!style.show_grid);
    }

    #[test]
    fn test_builder_methods() {
        let style = StyleConfig::with_dimensions(960, 320)
            .band_alpha(0.5)
            .font_size(9.0)
            .with_grid();
        assert_eq!(style.width, 960);
        assert_eq!(style.height, 320);
        assert_eq!(style.band_alpha, 0.5);
        assert_eq!(style.font_size, 9.0);
        assert!(style.show_grid);
    }
}
