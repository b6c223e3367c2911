//! Chapter identifiers and the naming conventions derived from them
//!
//! A book section is identified either by a chapter number or by an appendix
//! label. The identifier determines two things:
//!
//! - the output subdirectory under the base directory
//!   (`"Chapter 3"`, `"Appendix A"`)
//! - the filename prefix used for every exported figure
//!   (`"CH03"` with zero padding for numbers, `"CHA"` as-is for labels)
//!
//! # Example
//!
//! ```rust,ignore
//! use bookfig_rs::chapter::ChapterId;
//!
//! let ch: ChapterId = 3.into();
//! assert_eq!(ch.dir_name(), "Chapter 3");
//! assert_eq!(ch.file_prefix(), "CH03");
//!
//! let app: ChapterId = "A".into();
//! assert_eq!(app.dir_name(), "Appendix A");
//! assert_eq!(app.file_prefix(), "CHA");
//! ```

use std::fmt;

/// Identifier for one book section
///
/// Numeric identifiers are chapters, string identifiers are appendices.
/// The two variants derive different directory names and filename prefixes,
/// see [`dir_name`](ChapterId::dir_name) and
/// [`file_prefix`](ChapterId::file_prefix).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ChapterId {
    /// Numbered chapter
    Number(u32),

    /// Lettered (or otherwise labelled) appendix
    Appendix(String),
}

impl ChapterId {
    /// Name of the output subdirectory for this section.
    ///
    /// Chapter numbers are NOT zero-padded here: the directory for chapter 3
    /// is `"Chapter 3"`, not `"Chapter 03"`.
    pub fn dir_name(&self) -> String {
        match self {
            ChapterId::Number(n) => format!("Chapter {n}"),
            ChapterId::Appendix(s) => format!("Appendix {s}"),
        }
    }

    /// Filename prefix for every figure exported for this section.
    ///
    /// Chapter numbers are zero-padded to two digits (`"CH03"`), appendix
    /// labels are used as-is (`"CHA"`).
    pub fn file_prefix(&self) -> String {
        match self {
            ChapterId::Number(n) => format!("CH{n:02}"),
            ChapterId::Appendix(s) => format!("CH{s}"),
        }
    }

    /// True for the appendix variant.
    pub fn is_appendix(&self) -> bool {
        matches!(self, ChapterId::Appendix(_))
    }
}

impl From<u32> for ChapterId {
    fn from(n: u32) -> Self {
        ChapterId::Number(n)
    }
}

impl From<&str> for ChapterId {
    fn from(s: &str) -> Self {
        ChapterId::Appendix(s.to_string())
    }
}

impl From<String> for ChapterId {
    fn from(s: String) -> Self {
        ChapterId::Appendix(s)
    }
}

impl fmt::Display for ChapterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChapterId::Number(n) => write!(f, "{n}"),
            ChapterId::Appendix(s) => write!(f, "{s}"),
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================
