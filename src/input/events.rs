//! Pointer and touch event types, and their normalization to surface space.

use crate::action::Point;
use crate::error::SketchError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of input event, as delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    MouseDown,
    MouseMove,
    MouseUp,
    /// Pointer left the surface (also accepts "mouseout")
    #[serde(alias = "mouseout")]
    MouseLeave,
    TouchStart,
    TouchMove,
    TouchEnd,
    TouchCancel,
}

impl EventKind {
    /// Pointer-down or touch-start: begins a gesture.
    pub fn is_press(self) -> bool {
        matches!(self, EventKind::MouseDown | EventKind::TouchStart)
    }

    pub fn is_move(self) -> bool {
        matches!(self, EventKind::MouseMove | EventKind::TouchMove)
    }

    /// Any event that terminates a gesture, including leave and cancel.
    pub fn is_release(self) -> bool {
        matches!(
            self,
            EventKind::MouseUp | EventKind::MouseLeave | EventKind::TouchEnd | EventKind::TouchCancel
        )
    }

    /// A deliberate release (pointer-up or touch-end), excluding leave and cancel.
    pub fn is_lift(self) -> bool {
        matches!(self, EventKind::MouseUp | EventKind::TouchEnd)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::MouseDown => "mousedown",
            EventKind::MouseMove => "mousemove",
            EventKind::MouseUp => "mouseup",
            EventKind::MouseLeave => "mouseleave",
            EventKind::TouchStart => "touchstart",
            EventKind::TouchMove => "touchmove",
            EventKind::TouchEnd => "touchend",
            EventKind::TouchCancel => "touchcancel",
        }
    }
}

impl FromStr for EventKind {
    type Err = SketchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mousedown" => Ok(EventKind::MouseDown),
            "mousemove" => Ok(EventKind::MouseMove),
            "mouseup" => Ok(EventKind::MouseUp),
            "mouseleave" | "mouseout" => Ok(EventKind::MouseLeave),
            "touchstart" => Ok(EventKind::TouchStart),
            "touchmove" => Ok(EventKind::TouchMove),
            "touchend" => Ok(EventKind::TouchEnd),
            "touchcancel" => Ok(EventKind::TouchCancel),
            _ => Err(SketchError::UnknownEvent(s.to_string())),
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single touch contact in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchPoint {
    pub page_x: f64,
    pub page_y: f64,
}

/// An input event as the host receives it, in page coordinates.
///
/// Touch events carry their active contacts in `touches`; the first entry is
/// the primary touch. End and cancel events usually carry none, in which case
/// the event's own page coordinates are used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPointerEvent {
    pub kind: EventKind,
    #[serde(default)]
    pub page_x: f64,
    #[serde(default)]
    pub page_y: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub touches: Vec<TouchPoint>,
}

impl RawPointerEvent {
    pub fn mouse(kind: EventKind, page_x: f64, page_y: f64) -> Self {
        Self {
            kind,
            page_x,
            page_y,
            touches: Vec::new(),
        }
    }

    pub fn touch(kind: EventKind, touches: Vec<TouchPoint>) -> Self {
        Self {
            kind,
            page_x: 0.0,
            page_y: 0.0,
            touches,
        }
    }

    /// Reduces the event to the primary contact and translates it into
    /// surface-local coordinates by subtracting the surface's page offset.
    pub fn normalize(&self, surface_offset: Point) -> PointerEvent {
        let (page_x, page_y) = self
            .touches
            .first()
            .map_or((self.page_x, self.page_y), |touch| {
                (touch.page_x, touch.page_y)
            });

        PointerEvent {
            kind: self.kind,
            point: Point::new(page_x - surface_offset.x, page_y - surface_offset.y),
        }
    }
}

/// A normalized event in surface-local coordinates, ready for dispatch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: EventKind,
    pub point: Point,
}

impl PointerEvent {
    pub fn new(kind: EventKind, x: f64, y: f64) -> Self {
        Self {
            kind,
            point: Point::new(x, y),
        }
    }
}
