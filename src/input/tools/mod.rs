//! Built-in tools.
//!
//! Gesture tools share one event routine ([`track_drag`]); variants such as
//! the arrow lines and the eraser wrap another tool and delegate to it rather
//! than reimplementing it.

mod eraser;
mod history;
mod line;
mod marker;
mod shapes;
mod text;

pub use eraser::{ERASER_COLOR, EraserTool};
pub use history::{RedoTool, UndoTool};
pub use line::{ArrowLineTool, LineTool};
pub use marker::MarkerTool;
pub use shapes::{CircleTool, RectangleTool};
pub use text::TextTool;

use crate::action::LineStyle;
use crate::draw::{Canvas, Color};
use crate::input::events::PointerEvent;
use crate::input::state::{SketchState, StrokeFamily};

/// Drives a stroke session from pointer events.
///
/// Press starts a session, any release (up, leave, touch end or cancel)
/// commits it, and while a session is live every event's point is recorded,
/// including the press that opened it.
pub fn track_drag(event: &PointerEvent, state: &mut SketchState, family: StrokeFamily) {
    if event.kind.is_press() {
        state.begin_stroke(family);
    } else if event.kind.is_release() {
        state.end_stroke();
    }

    if state.is_painting() {
        state.record_point(event);
    }
}

/// Applies color, width and dash pattern for a stroke.
pub(crate) fn prepare_stroke(canvas: &mut dyn Canvas, color: Color, size: f64, style: LineStyle) {
    canvas.set_stroke_color(color);
    canvas.set_stroke_width(size);
    canvas.set_dash_pattern(&style.dash_pattern(size));
}
