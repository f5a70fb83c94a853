use super::MarkerTool;
use crate::action::Action;
use crate::draw::{BLACK, Canvas, Color, CompositeMode, CompositeScope};
use crate::error::SketchError;
use crate::input::events::PointerEvent;
use crate::input::state::SketchState;
use crate::input::tool::Tool;

/// Paint used for erasing; only its opacity matters under destination-out.
pub const ERASER_COLOR: Color = BLACK;

/// Freehand eraser: a marker stroke composited with destination-out.
///
/// Gestures are tracked by the wrapped marker. Drawing swaps the canvas into
/// destination-out for the stroke only; the previous mode comes back when the
/// scope drops, so later actions in the same redraw paint normally.
#[derive(Debug, Clone, Copy, Default)]
pub struct EraserTool {
    marker: MarkerTool,
}

impl EraserTool {
    pub fn new(marker: MarkerTool) -> Self {
        Self { marker }
    }
}

impl Tool for EraserTool {
    fn on_event(&self, event: &PointerEvent, state: &mut SketchState) {
        self.marker.on_event(event, state);
    }

    fn draw(&self, action: &Action, canvas: &mut dyn Canvas) -> Result<(), SketchError> {
        let mut scope = CompositeScope::new(canvas, CompositeMode::DestinationOut);
        self.marker.stroke_polyline(action, ERASER_COLOR, &mut *scope)
    }
}
