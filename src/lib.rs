//! bookfig-rs: Consistent styling and export for book chapter figures
//!
//! A small toolkit for producing the figures of a book's chapters and
//! appendices with one consistent look: a fixed four-shade grayscale
//! palette, dashed reference guides, error bands, arrow annotations and a
//! systematic file-naming convention that writes every figure to a
//! chapter-specific directory in two formats (SVG and PNG).
//!
//! # Architecture
//!
//! bookfig-rs is built on two principles:
//!
//! 1. **Explicit handles, no ambient state**
//!    - A [`figure::Figure`] owns its [`figure::Axes`]; drawing operations
//!      record plot items on an axes value you pass in
//!    - Rendering happens once, at save time, against a backend chosen by
//!      file extension
//!
//! 2. **Style fixed per chapter**
//!    - An [`export::FigureExporter`] binds one chapter identifier to one
//!      immutable [`style::StyleConfig`]
//!    - Every figure saved through it shares the same palette, band
//!      transparency, arrow geometry and font size
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use bookfig_rs::prelude::*;
//!
//! // 1. One exporter per chapter; the base directory must exist
//! let exporter = FigureExporter::new(3, "book_output")?;
//!
//! // 2. Build a figure
//! let mut fig = Figure::single();
//! let axes = fig.primary_mut();
//! axes.set_xlabel("day");
//! axes.set_ylabel("conversion rate");
//!
//! let days: Vec<f64> = (0..14).map(|d| d as f64).collect();
//! let rate: Vec<f64> = days.iter().map(|d| 0.1 + 0.01 * d).collect();
//! let se = vec![0.005; 14];
//!
//! axes.line(&days, &rate, exporter.style().palette.darkest(), 1)?;
//! exporter.error_band(axes, &rate, &se, Some(&days), None)?;
//! exporter.horizontal_line(axes, 0.1, None);
//!
//! // 3. Save: writes CH03_F02_sweet.svg and CH03_F02_sweet.png
//! exporter.save_numbered(&fig, 2)?;
//! ```
//!
//! # Modules
//!
//! - [`chapter`]: chapter/appendix identifiers and naming conventions
//! - [`style`]: palette and styling configuration
//! - [`figure`]: explicit figure/axes handles and drawing operations
//! - [`render`]: backend dispatch and drawing (plotters)
//! - [`export`]: the exporter, output formats, file naming
//! - [`error`]: the crate error type

pub mod chapter;
pub mod error;
pub mod export;
pub mod figure;
pub mod render;
pub mod style;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use bookfig_rs::prelude::*;
    //! ```
    pub use crate::chapter::ChapterId;
    pub use crate::error::FigureError;
    pub use crate::export::{FigureExporter, ImageFormat, DEFAULT_BASE_DIR};
    pub use crate::figure::{Axes, Figure};
    pub use crate::style::{ArrowStyle, Palette, StyleConfig};
}
