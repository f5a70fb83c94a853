//! Drawing state machine and per-surface sketch state.

use super::session::{StrokeFamily, StrokeSession};
use crate::action::{Action, ActionLog, ArrowEnds, LineStyle};
use crate::draw::Color;
use crate::input::events::PointerEvent;
use log::debug;

/// Current drawing mode state machine.
///
/// Tracks whether the user is idle or in the middle of a stroke.
#[derive(Debug, Default)]
pub enum DrawingState {
    /// Not actively drawing - waiting for a press
    #[default]
    Idle,
    /// Pointer held down; the session owns the draft action
    Drawing(StrokeSession),
}

/// Everything one surface's sketch knows between events.
///
/// Tools receive this by mutable reference on every event. The current
/// tool/color/size/style/text are read when a gesture starts; the log and
/// drawing state are what the redraw renders.
#[derive(Debug)]
pub struct SketchState {
    /// Registry name of the active tool
    pub tool: String,
    /// Current drawing color
    pub color: Color,
    /// Current stroke width in pixels
    pub size: f64,
    /// Current dash style
    pub style: LineStyle,
    /// Text placed by the text tool
    pub text: String,
    /// Committed/undone action history
    pub log: ActionLog,
    /// Idle, or the live stroke session
    pub state: DrawingState,
    /// Whether the surface needs to be redrawn
    pub needs_redraw: bool,
}

impl SketchState {
    /// Creates an idle state with an empty log.
    pub fn new(tool: String, color: Color, size: f64, style: LineStyle, log: ActionLog) -> Self {
        Self {
            tool,
            color,
            size,
            style,
            text: String::new(),
            log,
            state: DrawingState::Idle,
            needs_redraw: true,
        }
    }

    /// Whether a stroke session is live.
    pub fn is_painting(&self) -> bool {
        matches!(self.state, DrawingState::Drawing(_))
    }

    /// The live draft action, if a stroke session is in progress.
    pub fn draft(&self) -> Option<&Action> {
        match &self.state {
            DrawingState::Drawing(session) => Some(session.draft()),
            DrawingState::Idle => None,
        }
    }

    /// Builds an empty action from the current tool and style settings.
    pub fn new_action(&self) -> Action {
        Action::new(self.tool.clone(), self.color, self.size, self.style)
    }

    /// Starts a stroke session for the current tool.
    ///
    /// A press while a session is already live commits that session first;
    /// gestures are never dropped.
    pub fn begin_stroke(&mut self, family: StrokeFamily) {
        if self.is_painting() {
            debug!("Press during a live stroke; committing the previous stroke");
            self.end_stroke();
        }

        debug!(
            "Starting {:?} stroke with '{}' ({}, size {}, {})",
            family, self.tool, self.color, self.size, self.style
        );
        self.state = DrawingState::Drawing(StrokeSession::new(family, self.new_action()));
        self.needs_redraw = true;
    }

    /// Adds the event's point to the live draft; ignored while idle.
    pub fn record_point(&mut self, event: &PointerEvent) {
        if let DrawingState::Drawing(session) = &mut self.state {
            session.record(event);
            self.needs_redraw = true;
        }
    }

    /// Marks arrowheads on the live draft; ignored while idle.
    pub fn mark_draft_arrows(&mut self, ends: ArrowEnds) {
        if let DrawingState::Drawing(session) = &mut self.state {
            session.mark_arrows(ends);
        }
    }

    /// Ends the live session, committing its draft when it has any points.
    ///
    /// Leave and cancel events also come through here: there is no path that
    /// abandons a stroke without committing it.
    pub fn end_stroke(&mut self) {
        if let DrawingState::Drawing(session) = std::mem::take(&mut self.state) {
            let action = session.finish();
            let tool = action.tool.clone();
            let points = action.events.len();
            if self.log.commit(action) {
                debug!("Committed '{tool}' stroke with {points} point(s)");
            }
            self.needs_redraw = true;
        }
    }

    /// Commits a finished action directly, bypassing any stroke session.
    pub fn commit(&mut self, action: Action) -> bool {
        let committed = self.log.commit(action);
        if committed {
            self.needs_redraw = true;
        }
        committed
    }

    /// Undoes the most recent action; a no-op on an empty log.
    pub fn undo(&mut self) {
        if self.log.undo().is_some() {
            self.needs_redraw = true;
        } else {
            debug!("Nothing to undo");
        }
    }

    /// Redoes the most recently undone action; a no-op when nothing was undone.
    pub fn redo(&mut self) {
        if self.log.redo().is_some() {
            self.needs_redraw = true;
        } else {
            debug!("Nothing to redo");
        }
    }
}
