//! Export format selection and saving exported images to disk.

use crate::config::ExportConfig;
use crate::draw::ImageFormat;
use crate::error::SketchError;
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

impl FromStr for ImageFormat {
    type Err = SketchError;

    /// Accepts `png` and `jpeg`, with `jpg` as an alias for `jpeg`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "png" => Ok(ImageFormat::Png),
            "jpeg" | "jpg" => Ok(ImageFormat::Jpeg),
            _ => Err(SketchError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Configuration for file saving.
#[derive(Debug, Clone)]
pub struct FileSaveConfig {
    /// Directory to save exports to.
    pub save_directory: PathBuf,
    /// Filename template (supports chrono format specifiers).
    pub filename_template: String,
    /// Image format, which also picks the extension.
    pub format: ImageFormat,
}

impl Default for FileSaveConfig {
    fn default() -> Self {
        Self::from_config(&ExportConfig::default())
    }
}

impl FileSaveConfig {
    pub fn from_config(config: &ExportConfig) -> Self {
        Self {
            save_directory: expand_tilde(&config.save_directory),
            filename_template: config.filename_template.clone(),
            format: config.default_format.to_image_format(),
        }
    }

    pub fn with_format(mut self, format: ImageFormat) -> Self {
        self.format = format;
        self
    }
}

/// Generate a filename based on the template and current time.
///
/// # Arguments
/// * `template` - Template string with chrono format specifiers
/// * `format` - Image format supplying the extension
pub fn generate_filename(template: &str, format: ImageFormat) -> String {
    let now = Local::now();
    let filename = now.format(template).to_string();
    format!("{}.{}", filename, format.extension())
}

/// Ensure the save directory exists, creating it if necessary.
///
/// Returns the canonicalized path when it can be resolved.
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, SketchError> {
    if !directory.exists() {
        log::info!("Creating export directory: {}", directory.display());
        fs::create_dir_all(directory).map_err(|source| SketchError::Save {
            path: directory.to_path_buf(),
            source,
        })?;
    }

    let canonical = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());

    Ok(canonical)
}

/// Save exported image bytes under a generated filename.
///
/// Returns the path of the written file.
pub fn save_export(image_data: &[u8], config: &FileSaveConfig) -> Result<PathBuf, SketchError> {
    let directory = ensure_directory_exists(&config.save_directory)?;
    let filename = generate_filename(&config.filename_template, config.format);
    let file_path = directory.join(&filename);
    write_export(image_data, &file_path)?;
    Ok(file_path)
}

/// Write exported image bytes to an explicit path.
pub fn write_export(image_data: &[u8], path: &Path) -> Result<(), SketchError> {
    log::info!(
        "Saving export to: {} ({} bytes)",
        path.display(),
        image_data.len()
    );

    fs::write(path, image_data).map_err(|source| SketchError::Save {
        path: path.to_path_buf(),
        source,
    })?;

    log::debug!("Export saved: {}", path.display());
    Ok(())
}

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}
