//! # Error Module
//!
//! Error types for the artwork auditor.
//!
//! ## Design Principles
//! - **Never panic** on project data - return errors instead
//! - **Include context** - paths, file names, what went wrong
//! - **Fail fast** - the first error in a batch aborts the whole operation;
//!   a partially generated asset set is worse than none for a build pipeline
//! - **Precondition errors surface before any work starts**

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error
#[derive(Error, Debug)]
pub enum ArtworkError {
    #[error("Scanning error: {0}")]
    Scan(#[from] ScanError),

    #[error("Image metrics error: {0}")]
    Metrics(#[from] MetricsError),

    #[error("Retina generation error: {0}")]
    Generate(#[from] GenerateError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unsupported operation: {0}")]
    Unsupported(&'static str),
}

/// Errors that occur while enumerating and reading project files
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Project root not found: {path}")]
    ProjectRootNotFound { path: PathBuf },

    #[error("'{path}' is a regular file - it must be a directory")]
    NotADirectory { path: PathBuf },

    #[error("Failed to read directory {path}: {source}")]
    ReadDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that occur while extracting image metrics
#[derive(Error, Debug)]
pub enum MetricsError {
    #[error("Failed to decode image {path}: {reason}")]
    Decode { path: PathBuf, reason: String },

    #[error("Image width must be greater than zero")]
    ZeroWidth,

    #[error("Image height must be greater than zero")]
    ZeroHeight,

    #[error("Image byte size must be greater than zero")]
    ZeroByteSize,

    #[error("Content type must be non-empty, e.g. image/png")]
    EmptyContentType,
}

/// Errors that occur during retina image generation
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Output path '{path}' is a regular file - it must be a directory")]
    OutputNotADirectory { path: PathBuf },

    #[error("'{path}' is already a high-density image; refusing to double-scale it")]
    AlreadyHighDensity { path: PathBuf },

    #[error("'{path}' is not inside the project root")]
    OutsideProjectRoot { path: PathBuf },

    #[error("Failed to read source image {path}: {source}")]
    ReadSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to scale image {path}: {reason}")]
    Scale { path: PathBuf, reason: String },

    #[error("Failed to write generated image {path}: {source}")]
    WriteImage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience Result type alias
pub type Result<T> = std::result::Result<T, ArtworkError>;
