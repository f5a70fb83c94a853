//! Configuration type definitions.

use super::enums::ExportFormatSpec;
use crate::action::RedoPolicy;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing-related settings.
///
/// Controls the tool and style a new sketch starts with. Hosts can change
/// these at runtime through sketch options.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Tool selected when a sketch is activated (e.g., "marker", "line", "text")
    #[serde(default = "default_tool")]
    pub default_tool: String,

    /// Default color: `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb(...)` or a named color
    #[serde(default = "default_color")]
    pub default_color: String,

    /// Default stroke width in pixels (valid range: 0.5 - 100.0)
    #[serde(default = "default_size")]
    pub default_size: f64,

    /// Default dash style: "solid", "dashed" or "dotted"
    #[serde(default = "default_style")]
    pub default_style: String,

    /// Whether hosts should wire declarative tool-link controls to the sketch.
    /// The engine itself does not read this.
    #[serde(default = "default_tool_links")]
    pub tool_links: bool,

    /// Font family name for text rendering (e.g., "Sans", "Monospace", "JetBrains Mono")
    /// Falls back to "Sans" if the specified font is not available
    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// Font weight (e.g., "normal", "bold", "light", 400, 700)
    /// Can be a named weight or a numeric value (100-900)
    #[serde(default = "default_font_weight")]
    pub font_weight: String,

    /// Font style (e.g., "normal", "italic", "oblique")
    #[serde(default = "default_font_style")]
    pub font_style: String,

    /// Text height in pixels per unit of size (valid range: 0.5 - 20.0)
    #[serde(default = "default_text_scale")]
    pub text_scale: f64,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_tool: default_tool(),
            default_color: default_color(),
            default_size: default_size(),
            default_style: default_style(),
            tool_links: default_tool_links(),
            font_family: default_font_family(),
            font_weight: default_font_weight(),
            font_style: default_font_style(),
            text_scale: default_text_scale(),
        }
    }
}

/// Arrowhead settings for the arrow line tools.
///
/// Barb length is `size * head_length_factor`, but never shorter than
/// `min_head_length`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ArrowConfig {
    /// Barb length per pixel of stroke width (valid range: 0.5 - 10.0)
    #[serde(default = "default_head_length_factor")]
    pub head_length_factor: f64,

    /// Shortest barb length in pixels (valid range: 0.0 - 100.0)
    #[serde(default = "default_min_head_length")]
    pub min_head_length: f64,
}

impl Default for ArrowConfig {
    fn default() -> Self {
        Self {
            head_length_factor: default_head_length_factor(),
            min_head_length: default_min_head_length(),
        }
    }
}

/// Undo/redo history settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct HistoryConfig {
    /// Keep undone actions available for redo after a new action is drawn.
    /// Off by default: drawing something new discards the redo history.
    #[serde(default)]
    pub preserve_redo_on_commit: bool,
}

impl HistoryConfig {
    pub fn redo_policy(&self) -> RedoPolicy {
        if self.preserve_redo_on_commit {
            RedoPolicy::Preserve
        } else {
            RedoPolicy::ClearOnCommit
        }
    }
}

/// Export and file saving settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExportConfig {
    /// Directory exported images are saved to (supports `~/`)
    #[serde(default = "default_save_directory")]
    pub save_directory: String,

    /// Filename template with chrono format specifiers; the extension is appended
    #[serde(default = "default_filename_template")]
    pub filename_template: String,

    /// Format used when none is given: "png" or "jpeg"
    #[serde(default = "default_export_format")]
    pub default_format: ExportFormatSpec,

    /// JPEG quality (valid range: 1 - 100)
    #[serde(default = "default_jpeg_quality")]
    pub jpeg_quality: u8,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            save_directory: default_save_directory(),
            filename_template: default_filename_template(),
            default_format: default_export_format(),
            jpeg_quality: default_jpeg_quality(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_tool() -> String {
    "marker".to_string()
}

fn default_color() -> String {
    "#000000".to_string()
}

fn default_size() -> f64 {
    5.0
}

fn default_style() -> String {
    "solid".to_string()
}

fn default_tool_links() -> bool {
    true
}

fn default_font_family() -> String {
    "Sans".to_string()
}

fn default_font_weight() -> String {
    "normal".to_string()
}

fn default_font_style() -> String {
    "normal".to_string()
}

fn default_text_scale() -> f64 {
    4.0
}

fn default_head_length_factor() -> f64 {
    3.0
}

fn default_min_head_length() -> f64 {
    10.0
}

fn default_save_directory() -> String {
    "~/Pictures/Sketchpad".to_string()
}

fn default_filename_template() -> String {
    "sketch_%Y-%m-%d_%H%M%S".to_string()
}

fn default_export_format() -> ExportFormatSpec {
    ExportFormatSpec::Png
}

fn default_jpeg_quality() -> u8 {
    92
}
