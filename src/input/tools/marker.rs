use super::{prepare_stroke, track_drag};
use crate::action::Action;
use crate::draw::{Canvas, Color, LineCap, LineJoin};
use crate::error::SketchError;
use crate::input::events::PointerEvent;
use crate::input::state::{SketchState, StrokeFamily};
use crate::input::tool::Tool;

/// Freehand pen: every drag position becomes a polyline vertex.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkerTool;

impl MarkerTool {
    /// Strokes the action's points as one continuous, round-jointed polyline.
    ///
    /// The path passes through every recorded point, the first included, so
    /// a single click still leaves a round dot.
    pub fn stroke_polyline(
        &self,
        action: &Action,
        color: Color,
        canvas: &mut dyn Canvas,
    ) -> Result<(), SketchError> {
        let Some(start) = action.first_point() else {
            return Ok(());
        };

        canvas.set_line_join(LineJoin::Round);
        canvas.set_line_cap(LineCap::Round);
        canvas.begin_path();
        canvas.move_to(start.x, start.y);
        for point in action.points() {
            canvas.line_to(point.x, point.y);
        }
        prepare_stroke(canvas, color, action.size, action.style);
        canvas.stroke()?;
        Ok(())
    }
}

impl Tool for MarkerTool {
    fn on_event(&self, event: &PointerEvent, state: &mut SketchState) {
        track_drag(event, state, StrokeFamily::Freehand);
    }

    fn draw(&self, action: &Action, canvas: &mut dyn Canvas) -> Result<(), SketchError> {
        self.stroke_polyline(action, action.color, canvas)
    }
}
