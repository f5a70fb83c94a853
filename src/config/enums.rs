//! Configuration enum types.

use crate::draw::ImageFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Image format named in the config file.
///
/// # Examples
/// ```toml
/// [export]
/// default_format = "jpeg"   # "jpg" is accepted too
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormatSpec {
    /// Lossless PNG with transparency
    Png,
    /// JPEG flattened onto white
    #[serde(alias = "jpg")]
    Jpeg,
}

impl ExportFormatSpec {
    pub fn to_image_format(self) -> ImageFormat {
        match self {
            ExportFormatSpec::Png => ImageFormat::Png,
            ExportFormatSpec::Jpeg => ImageFormat::Jpeg,
        }
    }
}
