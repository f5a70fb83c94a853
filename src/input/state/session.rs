//! In-progress drawing gestures.

use crate::action::{Action, ActionEvent, ArrowEnds};
use crate::input::events::PointerEvent;

/// How a gesture turns pointer moves into recorded points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeFamily {
    /// Every move appends a vertex, producing a polyline (marker, eraser).
    Freehand,
    /// Only the first point and the current drag point are kept
    /// (line, circle, rectangle).
    RubberBand,
}

/// One live gesture and the draft action it is building.
///
/// The draft's tool and style are fixed when the session starts; later option
/// changes on the sketch do not reach an in-progress stroke.
#[derive(Debug, Clone)]
pub struct StrokeSession {
    family: StrokeFamily,
    draft: Action,
}

impl StrokeSession {
    pub fn new(family: StrokeFamily, draft: Action) -> Self {
        Self { family, draft }
    }

    pub fn family(&self) -> StrokeFamily {
        self.family
    }

    pub fn draft(&self) -> &Action {
        &self.draft
    }

    /// Records a pointer position.
    ///
    /// Rubber-band sessions treat every point after the first two as a new
    /// position for the dragged endpoint and overwrite the last one.
    pub fn record(&mut self, event: &PointerEvent) {
        let recorded = ActionEvent {
            point: event.point,
            kind: event.kind,
        };

        let events = &mut self.draft.events;
        match self.family {
            StrokeFamily::RubberBand if events.len() > 1 => {
                let last = events.len() - 1;
                events[last] = recorded;
            }
            _ => events.push(recorded),
        }
    }

    /// Turns arrowheads on for the draft; never turns one off.
    pub fn mark_arrows(&mut self, ends: ArrowEnds) {
        self.draft.draw_start_arrow |= ends.start;
        self.draft.draw_end_arrow |= ends.end;
    }

    /// Ends the session, yielding its draft.
    pub fn finish(self) -> Action {
        self.draft
    }
}
