//! Drawing actions and the undo-capable action log.
//!
//! An [`Action`] is one drawing operation: the tool that produced it, the
//! style it was drawn with, and the ordered input points it was built from.
//! Committed actions live in an [`ActionLog`] in draw order.

mod history;

pub use history::{ActionLog, RedoPolicy};

use crate::draw::Color;
use crate::error::SketchError;
use crate::input::EventKind;
use crate::util;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A point in surface-local coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A recorded input point, tagged with the kind of event that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActionEvent {
    pub point: Point,
    pub kind: EventKind,
}

/// Stroke style applied to every stroked tool.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

impl LineStyle {
    /// Dash pattern for a stroke of the given width. Empty means a solid line.
    pub fn dash_pattern(self, size: f64) -> Vec<f64> {
        util::dash_pattern(self, size)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LineStyle::Solid => "solid",
            LineStyle::Dashed => "dashed",
            LineStyle::Dotted => "dotted",
        }
    }
}

impl FromStr for LineStyle {
    type Err = SketchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "solid" => Ok(LineStyle::Solid),
            "dashed" => Ok(LineStyle::Dashed),
            "dotted" => Ok(LineStyle::Dotted),
            _ => Err(SketchError::InvalidStyle(s.to_string())),
        }
    }
}

impl fmt::Display for LineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which arrowheads a line-family action renders with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ArrowEnds {
    pub start: bool,
    pub end: bool,
}

/// One drawing operation.
///
/// While a stroke session is live the action is a draft owned by that session;
/// once committed to an [`ActionLog`] it is never mutated again.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Action {
    /// Registry name of the tool that produced (and renders) this action
    pub tool: String,
    /// Stroke or fill color, captured when the action started
    pub color: Color,
    /// Stroke width in pixels
    pub size: f64,
    /// Dash style, captured when the action started
    pub style: LineStyle,
    /// Text payload for the text tool
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Ordered input points
    pub events: Vec<ActionEvent>,
    #[serde(default)]
    pub draw_start_arrow: bool,
    #[serde(default)]
    pub draw_end_arrow: bool,
}

impl Action {
    /// Creates an empty action for `tool` using the given style values.
    pub fn new(tool: impl Into<String>, color: Color, size: f64, style: LineStyle) -> Self {
        Self {
            tool: tool.into(),
            color,
            size,
            style,
            text: None,
            events: Vec::new(),
            draw_start_arrow: false,
            draw_end_arrow: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn first_point(&self) -> Option<Point> {
        self.events.first().map(|event| event.point)
    }

    pub fn last_point(&self) -> Option<Point> {
        self.events.last().map(|event| event.point)
    }

    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.events.iter().map(|event| event.point)
    }

    pub fn arrow_ends(&self) -> ArrowEnds {
        ArrowEnds {
            start: self.draw_start_arrow,
            end: self.draw_end_arrow,
        }
    }

    pub fn dash_pattern(&self) -> Vec<f64> {
        self.style.dash_pattern(self.size)
    }
}
