//! Application errors.

use sketchpad_core::SurfaceError;
use sketchpad_render::RenderError;
use std::path::PathBuf;
use thiserror::Error;

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("IO error: {0}")]
    Io(String),
    #[error(transparent)]
    Surface(#[from] SurfaceError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("No drawing surface")]
    NoSurface,
    #[error("Window error: {0}")]
    Window(String),
}

/// Result type for application operations.
pub type AppResult<T> = Result<T, AppError>;
