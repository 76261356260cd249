//! Custom error types for xorpng.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Width and height of a pixel buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Main error type for the xorpng library.
#[derive(Error, Debug)]
pub enum Error {
    /// Neither generate mode nor a complete pair of XOR inputs was requested.
    #[error("missing arguments: both -i1 and -i2 are required unless -g is set")]
    Usage,

    /// Failed to open an input file.
    #[error("failed to open {path}: {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to create an output file.
    #[error("failed to create {path}: {source}")]
    FileCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input bytes are not a valid PNG.
    #[error("failed to decode PNG {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// PNG encoding or writing failed.
    #[error("failed to encode PNG to {target}: {source}")]
    Encode {
        target: String,
        #[source]
        source: image::ImageError,
    },

    /// XOR inputs differ in size.
    #[error("images have different dimensions: first is {first}, second is {second}")]
    DimensionMismatch {
        first: Dimensions,
        second: Dimensions,
    },

    /// Binary output would be written to an interactive terminal.
    #[error("output needs to be piped to a file, refusing to write PNG data to a terminal")]
    TerminalOutput,

    /// The operating system entropy source failed.
    #[error("secure random source unavailable: {reason}")]
    RandomSource { reason: String },

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: String, reason: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for xorpng operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch_names_both_sizes() {
        let err = Error::DimensionMismatch {
            first: Dimensions::new(10, 20),
            second: Dimensions::new(20, 10),
        };
        let message = err.to_string();
        assert!(message.contains("10x20"));
        assert!(message.contains("20x10"));
    }
}
