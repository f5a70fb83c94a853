use super::{prepare_stroke, track_drag};
use crate::action::Action;
use crate::draw::Canvas;
use crate::error::SketchError;
use crate::input::events::PointerEvent;
use crate::input::state::{SketchState, StrokeFamily};
use crate::input::tool::Tool;
use crate::util;
use std::f64::consts::PI;

/// Circle centred on the press point, passing through the drag point.
#[derive(Debug, Clone, Copy, Default)]
pub struct CircleTool;

impl Tool for CircleTool {
    fn on_event(&self, event: &PointerEvent, state: &mut SketchState) {
        track_drag(event, state, StrokeFamily::RubberBand);
    }

    fn draw(&self, action: &Action, canvas: &mut dyn Canvas) -> Result<(), SketchError> {
        let (Some(center), Some(edge)) = (action.first_point(), action.last_point()) else {
            return Ok(());
        };

        let radius = util::distance(center, edge);
        canvas.begin_path();
        canvas.arc(center.x, center.y, radius, 0.0, 2.0 * PI);
        prepare_stroke(canvas, action.color, action.size, action.style);
        canvas.stroke()?;
        Ok(())
    }
}

/// Axis-aligned rectangle spanned by the press and drag points.
#[derive(Debug, Clone, Copy, Default)]
pub struct RectangleTool;

impl Tool for RectangleTool {
    fn on_event(&self, event: &PointerEvent, state: &mut SketchState) {
        track_drag(event, state, StrokeFamily::RubberBand);
    }

    fn draw(&self, action: &Action, canvas: &mut dyn Canvas) -> Result<(), SketchError> {
        let (Some(corner), Some(opposite)) = (action.first_point(), action.last_point()) else {
            return Ok(());
        };

        canvas.begin_path();
        canvas.rect(
            corner.x,
            corner.y,
            opposite.x - corner.x,
            opposite.y - corner.y,
        );
        prepare_stroke(canvas, action.color, action.size, action.style);
        canvas.stroke()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{ActionEvent, LineStyle, Point};
    use crate::draw::{BLUE, DrawCommand, RecordingCanvas};
    use crate::input::events::EventKind;

    fn shape(tool: &str, points: &[(f64, f64)]) -> Action {
        let mut action = Action::new(tool, BLUE, 2.0, LineStyle::Solid);
        for &(x, y) in points {
            action.events.push(ActionEvent {
                point: Point::new(x, y),
                kind: EventKind::MouseMove,
            });
        }
        action
    }

    #[test]
    fn circle_radius_is_distance_to_last_point() {
        let mut canvas = RecordingCanvas::new(50, 50);
        CircleTool
            .draw(&shape("circle", &[(10.0, 10.0), (13.0, 14.0)]), &mut canvas)
            .unwrap();
        assert!(
            canvas
                .commands()
                .contains(&DrawCommand::Arc {
                    cx: 10.0,
                    cy: 10.0,
                    radius: 5.0,
                    start: 0.0,
                    end: 2.0 * PI,
                })
        );
    }

    #[test]
    fn rectangle_may_be_dragged_up_and_left() {
        let mut canvas = RecordingCanvas::new(50, 50);
        RectangleTool
            .draw(&shape("rectangle", &[(20.0, 20.0), (5.0, 10.0)]), &mut canvas)
            .unwrap();
        assert!(
            canvas
                .commands()
                .contains(&DrawCommand::Rect {
                    x: 20.0,
                    y: 20.0,
                    width: -15.0,
                    height: -10.0,
                })
        );
    }

    #[test]
    fn empty_shape_draws_nothing() {
        let mut canvas = RecordingCanvas::new(50, 50);
        RectangleTool
            .draw(&shape("rectangle", &[]), &mut canvas)
            .unwrap();
        assert!(canvas.commands().is_empty());
    }
}
