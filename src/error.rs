//! Error types for dial construction.

use thiserror::Error;

/// Errors that can occur while building a dial.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DialError {
    /// The requested width/height/padding combination leaves no drawable
    /// area.
    #[error("width, height, or padding size makes zero sized box ({width}x{height}, padding {padding})")]
    InvalidDimension {
        width: u32,
        height: u32,
        padding: u32,
    },

    /// The tick label font exposes neither a bounding box nor an ascent
    /// metric, so labels cannot be placed.
    #[error("tick label font exposes neither a bounding box nor an ascent metric")]
    UnsupportedFont,
}

/// Result type for dial operations.
pub type DialResult<T> = Result<T, DialError>;
