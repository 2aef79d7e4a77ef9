//! File-based store for exported canvas images.

use crate::error::{AppError, AppResult};
use std::fs;
use std::path::{Path, PathBuf};

const FILE_PREFIX: &str = "sketch-";
const FILE_EXTENSION: &str = "png";

/// Stores exported PNGs as numbered files in a directory.
pub struct ExportStore {
    /// Directory exports are written to.
    base_path: PathBuf,
}

impl ExportStore {
    /// Create a store in `base_path`, creating the directory if needed.
    pub fn new(base_path: PathBuf) -> AppResult<Self> {
        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(|e| {
                AppError::Io(format!("Failed to create export directory: {}", e))
            })?;
        }
        Ok(Self { base_path })
    }

    /// Create a store in the default location.
    ///
    /// On Unix: `~/.local/share/sketchpad/exports/`
    /// On Windows: `%LOCALAPPDATA%\sketchpad\exports\`
    pub fn default_location() -> AppResult<Self> {
        let base = dirs::data_local_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| AppError::Io("Could not determine home directory".to_string()))?;

        Self::new(base.join("sketchpad").join("exports"))
    }

    /// Get the base path.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Write an encoded PNG under the next free number and return its path.
    pub fn save_png(&self, png_data: &[u8]) -> AppResult<PathBuf> {
        let next = match self.numbers()?.into_iter().max() {
            Some(n) => n
                .checked_add(1)
                .ok_or_else(|| AppError::Io("Export numbering exhausted".to_string()))?,
            None => 1,
        };
        let path = self
            .base_path
            .join(format!("{}{:04}.{}", FILE_PREFIX, next, FILE_EXTENSION));
        fs::write(&path, png_data)
            .map_err(|e| AppError::Io(format!("Failed to write {}: {}", path.display(), e)))?;
        log::info!("Exported PNG to: {}", path.display());
        Ok(path)
    }

    fn numbers(&self) -> AppResult<Vec<u32>> {
        let entries = fs::read_dir(&self.base_path)
            .map_err(|e| AppError::Io(format!("Failed to read export directory: {}", e)))?;

        Ok(entries
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| {
                let path = entry.path();
                if path.extension()? != FILE_EXTENSION {
                    return None;
                }
                path.file_stem()?
                    .to_str()?
                    .strip_prefix(FILE_PREFIX)?
                    .parse()
                    .ok()
            })
            .collect())
    }
}
