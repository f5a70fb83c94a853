use super::{prepare_stroke, track_drag};
use crate::action::{Action, ArrowEnds, Point};
use crate::config::ArrowConfig;
use crate::draw::{Canvas, LineCap};
use crate::error::SketchError;
use crate::input::events::PointerEvent;
use crate::input::state::{SketchState, StrokeFamily};
use crate::input::tool::Tool;
use crate::util;

/// Straight segment from the press point to the current drag point.
#[derive(Debug, Clone, Copy)]
pub struct LineTool {
    /// Arrowhead barb length per pixel of stroke width
    pub head_length_factor: f64,
    /// Shortest barb drawn, for thin strokes
    pub min_head_length: f64,
}

impl Default for LineTool {
    fn default() -> Self {
        Self::from_config(&ArrowConfig::default())
    }
}

impl LineTool {
    pub fn from_config(config: &ArrowConfig) -> Self {
        Self {
            head_length_factor: config.head_length_factor,
            min_head_length: config.min_head_length,
        }
    }

    /// Barb length for a stroke of the given width.
    pub fn head_length(&self, size: f64) -> f64 {
        (size * self.head_length_factor).max(self.min_head_length)
    }

    /// Strokes the segment from the first to the last point, then any
    /// requested arrowheads.
    pub fn stroke_segment(
        &self,
        action: &Action,
        ends: ArrowEnds,
        canvas: &mut dyn Canvas,
    ) -> Result<(), SketchError> {
        let (Some(from), Some(to)) = (action.first_point(), action.last_point()) else {
            return Ok(());
        };

        canvas.set_line_cap(LineCap::Round);
        canvas.begin_path();
        canvas.move_to(from.x, from.y);
        canvas.line_to(to.x, to.y);
        prepare_stroke(canvas, action.color, action.size, action.style);
        canvas.stroke()?;

        if !ends.start && !ends.end {
            return Ok(());
        }

        let head_length = self.head_length(action.size);
        canvas.begin_path();
        if ends.start {
            add_barbs(canvas, from, util::arrowhead_at_start(from, to, head_length));
        }
        if ends.end {
            add_barbs(canvas, to, util::arrowhead_at_end(from, to, head_length));
        }
        // Heads stay solid even on dashed shafts.
        canvas.set_dash_pattern(&[]);
        canvas.stroke()?;
        Ok(())
    }
}

fn add_barbs(canvas: &mut dyn Canvas, tip: Point, barbs: [Point; 2]) {
    for barb in barbs {
        canvas.move_to(tip.x, tip.y);
        canvas.line_to(barb.x, barb.y);
    }
}

impl Tool for LineTool {
    fn on_event(&self, event: &PointerEvent, state: &mut SketchState) {
        track_drag(event, state, StrokeFamily::RubberBand);
    }

    fn draw(&self, action: &Action, canvas: &mut dyn Canvas) -> Result<(), SketchError> {
        self.stroke_segment(action, action.arrow_ends(), canvas)
    }
}

/// A line with arrowheads forced on: wraps [`LineTool`] and delegates to it.
#[derive(Debug, Clone, Copy)]
pub struct ArrowLineTool {
    line: LineTool,
    ends: ArrowEnds,
}

impl ArrowLineTool {
    /// Arrowhead at the end point only.
    pub fn single(line: LineTool) -> Self {
        Self {
            line,
            ends: ArrowEnds {
                start: false,
                end: true,
            },
        }
    }

    /// Arrowheads at both ends.
    pub fn double(line: LineTool) -> Self {
        Self {
            line,
            ends: ArrowEnds {
                start: true,
                end: true,
            },
        }
    }
}

impl Tool for ArrowLineTool {
    fn on_event(&self, event: &PointerEvent, state: &mut SketchState) {
        self.line.on_event(event, state);
        state.mark_draft_arrows(self.ends);
    }

    fn draw(&self, action: &Action, canvas: &mut dyn Canvas) -> Result<(), SketchError> {
        let recorded = action.arrow_ends();
        let ends = ArrowEnds {
            start: recorded.start || self.ends.start,
            end: recorded.end || self.ends.end,
        };
        self.line.stroke_segment(action, ends, canvas)
    }
}
