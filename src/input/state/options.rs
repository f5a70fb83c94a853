//! Sketch option names, value coercion, and change notifications.

use crate::error::SketchError;
use std::fmt;
use std::str::FromStr;

/// Options hosts can set on a sketch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionName {
    Color,
    Size,
    Tool,
    Style,
    Text,
}

impl OptionName {
    pub const ALL: [OptionName; 5] = [
        OptionName::Color,
        OptionName::Size,
        OptionName::Tool,
        OptionName::Style,
        OptionName::Text,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OptionName::Color => "color",
            OptionName::Size => "size",
            OptionName::Tool => "tool",
            OptionName::Style => "style",
            OptionName::Text => "text",
        }
    }
}

impl FromStr for OptionName {
    type Err = SketchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OptionName::ALL
            .into_iter()
            .find(|name| name.as_str() == s.trim())
            .ok_or_else(|| SketchError::UnknownOption(s.to_string()))
    }
}

impl fmt::Display for OptionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Notification queued whenever an option is set.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionChanged {
    pub option: OptionName,
    /// The new value, in its canonical string form
    pub value: String,
}

impl OptionChanged {
    /// Observer-facing event name, e.g. `sketch.changecolor`.
    pub fn event_name(&self) -> String {
        format!("sketch.change{}", self.option)
    }
}

/// Coerces a size option to a stroke width.
///
/// Accepts any positive finite number; anything else fails with
/// [`SketchError::InvalidSize`] instead of letting NaN reach the geometry.
pub fn parse_size(value: &str) -> Result<f64, SketchError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|size| size.is_finite() && *size > 0.0)
        .ok_or_else(|| SketchError::InvalidSize(value.to_string()))
}
