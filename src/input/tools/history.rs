//! Undo and redo as selectable tools: they act on release and draw nothing.

use crate::action::Action;
use crate::draw::Canvas;
use crate::error::SketchError;
use crate::input::events::PointerEvent;
use crate::input::state::SketchState;
use crate::input::tool::Tool;

#[derive(Debug, Clone, Copy, Default)]
pub struct UndoTool;

impl Tool for UndoTool {
    fn on_event(&self, event: &PointerEvent, state: &mut SketchState) {
        if event.kind.is_lift() {
            state.undo();
        }
    }

    fn draw(&self, _action: &Action, _canvas: &mut dyn Canvas) -> Result<(), SketchError> {
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RedoTool;

impl Tool for RedoTool {
    fn on_event(&self, event: &PointerEvent, state: &mut SketchState) {
        if event.kind.is_lift() {
            state.redo();
        }
    }

    fn draw(&self, _action: &Action, _canvas: &mut dyn Canvas) -> Result<(), SketchError> {
        Ok(())
    }
}
