//! Configuration file support for sketchpad.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/sketchpad/config.toml`. Settings include the tool and style a
//! sketch starts with, arrowhead geometry, undo history behavior, and export options.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ExportFormatSpec;
pub use types::{ArrowConfig, DrawingConfig, ExportConfig, HistoryConfig};

use crate::action::LineStyle;
use crate::draw::Color;
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_tool = "marker"
/// default_color = "#ff0000"
/// default_size = 3.0
/// default_style = "dashed"
///
/// [arrow]
/// head_length_factor = 3.0
/// min_head_length = 10.0
///
/// [history]
/// preserve_redo_on_commit = false
///
/// [export]
/// save_directory = "~/Pictures/Sketchpad"
/// default_format = "png"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Tool and style defaults for new sketches
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Arrowhead geometry
    #[serde(default)]
    pub arrow: ArrowConfig,

    /// Undo/redo behavior
    #[serde(default)]
    pub history: HistoryConfig,

    /// Export format and file saving
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value, or replaced with
    /// the default when they cannot be parsed at all, and a warning is logged.
    ///
    /// Validated ranges:
    /// - `default_size`: 0.5 - 100.0
    /// - `text_scale`: 0.5 - 20.0
    /// - `arrow.head_length_factor`: 0.5 - 10.0
    /// - `arrow.min_head_length`: 0.0 - 100.0
    /// - `export.jpeg_quality`: 1 - 100
    pub fn validate_and_clamp(&mut self) {
        // Size: 0.5 - 100.0
        if self.drawing.default_size.is_nan() {
            log::warn!("Invalid default_size NaN, falling back to 5.0");
            self.drawing.default_size = 5.0;
        } else if !(0.5..=100.0).contains(&self.drawing.default_size) {
            log::warn!(
                "Invalid default_size {:.1}, clamping to 0.5-100.0 range",
                self.drawing.default_size
            );
            self.drawing.default_size = self.drawing.default_size.clamp(0.5, 100.0);
        }

        // Text scale: 0.5 - 20.0
        if !(0.5..=20.0).contains(&self.drawing.text_scale) {
            log::warn!(
                "Invalid text_scale {:.1}, clamping to 0.5-20.0 range",
                self.drawing.text_scale
            );
            self.drawing.text_scale = if self.drawing.text_scale.is_nan() {
                4.0
            } else {
                self.drawing.text_scale.clamp(0.5, 20.0)
            };
        }

        // Arrowhead factor: 0.5 - 10.0
        if !(0.5..=10.0).contains(&self.arrow.head_length_factor) {
            log::warn!(
                "Invalid arrow head_length_factor {:.1}, clamping to 0.5-10.0 range",
                self.arrow.head_length_factor
            );
            self.arrow.head_length_factor = if self.arrow.head_length_factor.is_nan() {
                3.0
            } else {
                self.arrow.head_length_factor.clamp(0.5, 10.0)
            };
        }

        // Arrowhead floor: 0.0 - 100.0
        if !(0.0..=100.0).contains(&self.arrow.min_head_length) {
            log::warn!(
                "Invalid arrow min_head_length {:.1}, clamping to 0.0-100.0 range",
                self.arrow.min_head_length
            );
            self.arrow.min_head_length = if self.arrow.min_head_length.is_nan() {
                10.0
            } else {
                self.arrow.min_head_length.clamp(0.0, 100.0)
            };
        }

        // JPEG quality: 1 - 100
        if !(1..=100).contains(&self.export.jpeg_quality) {
            log::warn!(
                "Invalid jpeg_quality {}, clamping to 1-100 range",
                self.export.jpeg_quality
            );
            self.export.jpeg_quality = self.export.jpeg_quality.clamp(1, 100);
        }

        if Color::parse(&self.drawing.default_color).is_none() {
            log::warn!(
                "Invalid default_color '{}', falling back to '#000000'",
                self.drawing.default_color
            );
            self.drawing.default_color = "#000000".to_string();
        }

        if self.drawing.default_style.parse::<LineStyle>().is_err() {
            log::warn!(
                "Invalid default_style '{}', falling back to 'solid'",
                self.drawing.default_style
            );
            self.drawing.default_style = LineStyle::Solid.to_string();
        }

        // Validate font weight is reasonable
        let valid_weight = matches!(
            self.drawing.font_weight.to_lowercase().as_str(),
            "normal" | "bold" | "light" | "ultralight" | "heavy" | "ultrabold"
        ) || self
            .drawing
            .font_weight
            .parse::<u32>()
            .is_ok_and(|w| (100..=900).contains(&w));

        if !valid_weight {
            log::warn!(
                "Invalid font_weight '{}', falling back to 'normal'",
                self.drawing.font_weight
            );
            self.drawing.font_weight = "normal".to_string();
        }

        // Validate font style
        if !matches!(
            self.drawing.font_style.to_lowercase().as_str(),
            "normal" | "italic" | "oblique"
        ) {
            log::warn!(
                "Invalid font_style '{}', falling back to 'normal'",
                self.drawing.font_style
            );
            self.drawing.font_style = "normal".to_string();
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/sketchpad/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("sketchpad");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined, or the file
    /// exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates configuration from an explicit path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or contains invalid TOML.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        // Validate and clamp values to acceptable ranges
        config.validate_and_clamp();

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// JSON schema describing the config file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}
