//! Explicit figure and axes handles
//!
//! This module replaces the implicit "current figure" pattern of interactive
//! plotting tools with plain owned values. A [`Figure`] is a grid of
//! [`Axes`]; each axes records its plot items and axis state. Nothing is
//! drawn until the figure is rendered at save time.
//!
//! # Organization
//!
//! - **axes**: a single set of axes and its recorded plot items ([`Axes`])
//! - this file: the figure container ([`Figure`])
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use bookfig_rs::figure::Figure;
//! use bookfig_rs::style::palette::GRAY_DARKEST;
//!
//! // The common case: one set of axes
//! let mut fig = Figure::single();
//! fig.primary_mut().line(&[0.0, 1.0], &[0.0, 1.0], GRAY_DARKEST, 1)?;
//!
//! // Side-by-side panels
//! let mut panels = Figure::grid(1, 2)?;
//! panels.axes_mut(0).set_title("before");
//! panels.axes_mut(1).set_title("after");
//! ```

pub mod axes;

pub use axes::{Axes, Bounds};

use crate::error::FigureError;

/// A figure: one or more axes arranged in a grid
///
/// The grid is row-major: axes index `r * cols + c` is the panel at row
/// `r`, column `c`. Most figures are [`Figure::single`].
#[derive(Debug, Clone)]
pub struct Figure {
    rows: usize,
    cols: usize,
    axes: Vec<Axes>,
}

impl Figure {
    /// A figure with a single set of axes.
    pub fn single() -> Self {
        Self {
            rows: 1,
            cols: 1,
            axes: vec![Axes::new()],
        }
    }

    /// A figure with `rows x cols` empty axes panels.
    ///
    /// # Errors
    ///
    /// Fails if either dimension is zero.
    pub fn grid(rows: usize, cols: usize) -> Result<Self, FigureError> {
        if rows == 0 || cols == 0 {
            return Err(FigureError::InvalidGrid { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            axes: vec![Axes::new(); rows * cols],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// All axes panels in row-major order.
    pub fn axes(&self) -> &[Axes] {
        &self.axes
    }

    /// Mutable access to the panel at row-major index `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is out of range for the grid.
    pub fn axes_mut(&mut self, idx: usize) -> &mut Axes {
        &mut self.axes[idx]
    }

    /// Mutable access to the first (often only) panel.
    pub fn primary_mut(&mut self) -> &mut Axes {
        &mut self.axes[0]
    }

    /// The first (often only) panel.
    pub fn primary(&self) -> &Axes {
        &self.axes[0]
    }
}

impl Default for Figure {
    fn default() -> Self {
        Self::single()
    }
}

// =================================================================================================
// Tests
// =================================================================================================
