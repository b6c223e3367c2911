//! Output image formats
//!
//! Every saved figure is written once per format in [`ImageFormat::ALL`]:
//! one vector file for print typesetting and one raster file for quick
//! previews.

use std::fmt;

/// Supported output image formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    /// Vector output (print quality)
    Svg,

    /// Raster output (previews, drafts)
    Png,
}

impl ImageFormat {
    /// The fixed export set, in write order: vector first, then raster.
    pub const ALL: [ImageFormat; 2] = [ImageFormat::Svg, ImageFormat::Png];

    /// File extension without the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Svg => "svg",
            ImageFormat::Png => "png",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

// =================================================================================================
// Tests
// =================================================================================================
