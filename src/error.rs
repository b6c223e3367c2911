//! Error types for figure construction, drawing and export
//!
//! All fallible operations in this crate return [`FigureError`]. The only
//! hard precondition lives in exporter construction (the base directory must
//! exist); everything else is data validation or an I/O / rendering failure
//! surfaced from the drawing backend.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by figure building and export operations
///
/// # Example
///
/// ```rust,ignore
/// use bookfig_rs::export::FigureExporter;
///
/// match FigureExporter::new(3, "/does/not/exist") {
///     Err(FigureError::MissingBaseDir(dir)) => eprintln!("create {} first", dir.display()),
///     _ => unreachable!(),
/// }
/// ```
#[derive(Debug, Error)]
pub enum FigureError {
    /// The base directory handed to the exporter does not exist.
    ///
    /// This is the single construction precondition: without a valid base
    /// path there is nowhere sensible to put chapter output, so construction
    /// fails immediately and creates nothing.
    #[error("base directory {} does not exist", .0.display())]
    MissingBaseDir(PathBuf),

    /// A data series required by a drawing operation was empty.
    #[error("empty data: {0} must not be empty")]
    EmptyData(&'static str),

    /// Two series that must run in lockstep have different lengths.
    #[error("data length mismatch: {left_len} {left} versus {right_len} {right}")]
    LengthMismatch {
        left: &'static str,
        left_len: usize,
        right: &'static str,
        right_len: usize,
    },

    /// NaN or infinity detected in an input series.
    #[error("invalid data: NaN or Inf detected in {0}")]
    NonFinite(&'static str),

    /// An operation needed axis bounds but the axes hold no data yet.
    #[error("axes have no data bounds: draw a series or set bounds first")]
    EmptyAxes,

    /// A figure grid was requested with a zero dimension.
    #[error("invalid figure grid: {rows} x {cols}")]
    InvalidGrid { rows: usize, cols: usize },

    /// Filesystem failure while creating directories or writing files.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Failure inside the drawing backend while rendering.
    ///
    /// Backend error types are generic over the backend, so the message is
    /// carried as text.
    #[error("rendering failed: {0}")]
    Render(String),
}

/// Map a backend error into [`FigureError::Render`].
pub(crate) fn render_err<E: std::error::Error>(err: E) -> FigureError {
    FigureError::Render(err.to_string())
}

// =================================================================================================
// Tests
// =================================================================================================
