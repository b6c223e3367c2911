//! Styling configuration shared by all figures of one book section
//!
//! Every figure in a chapter uses the same fixed look: a four-shade
//! grayscale palette, one error-band transparency, one arrow geometry and
//! one label font size. The configuration is built once, at exporter
//! construction, and never mutated afterwards.
//!
//! # Organization
//!
//! - **palette**: the fixed grayscale color set ([`Palette`])
//! - **config**: the full style bundle ([`StyleConfig`], [`ArrowStyle`])
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use bookfig_rs::style::{Palette, StyleConfig};
//!
//! let style = StyleConfig::default();
//! assert_eq!(style.band_alpha, 0.333);
//! let mid = style.palette.shade(1); // second-darkest gray
//! ```

pub mod config;
pub mod palette;

pub use config::{ArrowStyle, StyleConfig};
pub use palette::Palette;
