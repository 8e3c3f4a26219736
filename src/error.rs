//! Error handling for the isometric renderer
//!
//! One error type covers the whole pipeline. Rendering is a one-shot batch
//! pass, so every failure is surfaced to the caller and nothing is retried.

use std::path::Path;

/// Main error type for isovox
#[derive(Debug, thiserror::Error)]
pub enum IsoError {
    // Configuration Errors
    #[error("Invalid grid shape {shape:?}: {reason}")]
    InvalidShape {
        shape: (usize, usize, usize),
        reason: String,
    },

    #[error("Invalid config: {field} = {value} ({reason})")]
    InvalidConfig {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Config parse error in {context}: {error}")]
    ConfigParse { context: String, error: String },

    // Grid Errors
    #[error("Voxel position {pos:?} out of bounds for grid shape {shape:?}")]
    OutOfBounds {
        pos: (usize, usize, usize),
        shape: (usize, usize, usize),
    },

    #[error("Visibility mask shape {mask:?} does not match grid shape {grid:?}")]
    ShapeMismatch {
        grid: (usize, usize, usize),
        mask: (usize, usize, usize),
    },

    // Output Errors
    #[error("IO error for {path}: {error}")]
    IoError { path: String, error: String },

    #[error("Image output failed for {path}: {error}")]
    Output { path: String, error: String },
}

/// Type alias for Results in isovox
pub type IsoResult<T> = Result<T, IsoError>;

impl From<toml::de::Error> for IsoError {
    fn from(error: toml::de::Error) -> Self {
        IsoError::ConfigParse {
            context: "toml".to_string(),
            error: error.to_string(),
        }
    }
}

/// Attach the path that was being read or written to a lower-level error
pub trait PathContext<T> {
    fn path_context(self, path: &Path) -> IsoResult<T>;
}

impl<T> PathContext<T> for Result<T, std::io::Error> {
    fn path_context(self, path: &Path) -> IsoResult<T> {
        self.map_err(|e| IsoError::IoError {
            path: path.display().to_string(),
            error: e.to_string(),
        })
    }
}

impl<T> PathContext<T> for Result<T, image::ImageError> {
    fn path_context(self, path: &Path) -> IsoResult<T> {
        self.map_err(|e| IsoError::Output {
            path: path.display().to_string(),
            error: e.to_string(),
        })
    }
}
