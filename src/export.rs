//! Writing the raster out as a PNG file.

use crate::config::OutputConfig;
use crate::draw::{Raster, RasterError};
use chrono::Local;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode raster: {0}")]
    Raster(#[from] RasterError),
}

/// Generate a filename based on the template and current time.
///
/// # Arguments
/// * `template` - Template string with chrono format specifiers
/// * `extension` - File extension (e.g., "png")
pub fn generate_filename(template: &str, extension: &str) -> String {
    let now = Local::now();
    format!("{}.{}", now.format(template), extension)
}

/// Expand a leading `~/` to the home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
    if let Ok(stripped) = path.strip_prefix("~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    path.to_path_buf()
}

/// Ensure the output directory exists, creating it if necessary.
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, ExportError> {
    if !directory.exists() {
        log::info!("Creating output directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }

    let canonical = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());
    Ok(canonical)
}

/// Timestamped PNG path inside the configured output directory.
pub fn default_output_path(config: &OutputConfig) -> Result<PathBuf, ExportError> {
    let directory = match &config.directory {
        Some(directory) => expand_tilde(directory),
        None => PathBuf::from("."),
    };
    let directory = ensure_directory_exists(&directory)?;
    Ok(directory.join(generate_filename(&config.filename_template, "png")))
}

/// Encode the raster as PNG at `path`, creating parent directories.
pub fn write_png(raster: &Raster, path: &Path) -> Result<(), ExportError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        ensure_directory_exists(parent)?;
    }

    let mut writer = BufWriter::new(File::create(path)?);
    raster.write_png(&mut writer)?;

    let viewport = raster.viewport();
    log::info!(
        "Saved {}x{} raster to {}",
        viewport.width,
        viewport.height,
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::Viewport;
    use tempfile::TempDir;

    const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n";

    #[test]
    fn test_generate_filename() {
        let filename = generate_filename("scribble_%Y", "png");
        assert!(filename.starts_with("scribble_"));
        assert!(filename.ends_with(".png"));
        assert_eq!(filename.len(), "scribble_2026.png".len());
    }

    #[test]
    fn test_expand_tilde() {
        let expanded = expand_tilde(Path::new("~/Pictures"));
        assert!(!expanded.starts_with("~"));

        let absolute = expand_tilde(Path::new("/absolute/path"));
        assert_eq!(absolute, PathBuf::from("/absolute/path"));
    }

    #[test]
    fn default_output_path_creates_directory() {
        let temp = TempDir::new().unwrap();
        let config = OutputConfig {
            directory: Some(temp.path().join("nested").join("out")),
            filename_template: "fixed".to_string(),
        };

        let path = default_output_path(&config).unwrap();
        assert!(temp.path().join("nested").join("out").is_dir());
        assert_eq!(path.file_name().unwrap(), "fixed.png");
    }

    #[test]
    fn write_png_produces_png_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("sub").join("canvas.png");
        let raster = Raster::new(Viewport::new(16, 8)).unwrap();

        write_png(&raster, &path).unwrap();

        let bytes = fs::read(&path).unwrap();
        assert!(bytes.starts_with(PNG_MAGIC));
    }
}
