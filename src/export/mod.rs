//! Figure export: naming conventions and file output
//!
//! # Architecture
//!
//! ```text
//! export/
//! ├── mod.rs         ← This file
//! ├── format.rs      ← Output formats (SVG + PNG)
//! └── exporter.rs    ← FigureExporter (directories, filenames, saving)
//! ```
//!
//! # Conventions
//!
//! | Chapter | Directory     | Filename pattern          |
//! |---------|---------------|---------------------------|
//! | `3`     | `Chapter 3`   | `CH03_{name}_sweet.{ext}` |
//! | `"A"`   | `Appendix A`  | `CHA_{name}_sweet.{ext}`  |
//!
//! Each save writes one file per format in [`ImageFormat::ALL`]: vector
//! (SVG) first, raster (PNG) second.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use bookfig_rs::export::FigureExporter;
//!
//! let exporter = FigureExporter::new(3, "book_output")?;
//! exporter.save_numbered(&figure, 1)?; // CH03_F01_sweet.svg + .png
//! ```

pub mod exporter;
pub mod format;

pub use exporter::{FigureExporter, DEFAULT_BASE_DIR};
pub use format::ImageFormat;
