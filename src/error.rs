//! Error types for the analysis pipeline.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised by a single analysis call. Both variants are fatal to the
/// call; there is no retry or partial-result path.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The input file is missing, unreadable, or not a decodable raster image.
    #[error("failed to load image {path}: {reason}")]
    ImageLoad { path: PathBuf, reason: String },

    /// Cost parameters that make the arithmetic undefined (negative values,
    /// or a zero yield/sheet count paired with a non-zero cost), plus other
    /// invalid caller-supplied setup such as an unreadable config file.
    #[error("invalid configuration: {0}")]
    Configuration(String),
}

impl AnalysisError {
    pub fn image_load(path: &Path, reason: impl Into<String>) -> Self {
        AnalysisError::ImageLoad {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        AnalysisError::Configuration(msg.into())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AnalysisError>;
