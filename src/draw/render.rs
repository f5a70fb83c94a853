//! Full-surface redraw of the action log.

use super::Canvas;
use crate::action::Action;
use crate::error::SketchError;
use crate::input::ToolRegistry;

/// Re-renders the whole surface from the model.
///
/// Clears the canvas, draws every committed action oldest first (so later
/// actions paint over earlier ones), then draws the live draft, if any, on
/// top. Nothing is cached between calls: the output depends only on
/// `committed` and `draft`.
///
/// # Errors
/// Fails with [`SketchError::UnrecognizedTool`] if an action names a tool
/// missing from `tools`, or with the canvas error of a failed paint call.
pub fn redraw(
    canvas: &mut dyn Canvas,
    tools: &ToolRegistry,
    committed: &[Action],
    draft: Option<&Action>,
) -> Result<(), SketchError> {
    canvas.clear()?;
    render_actions(canvas, tools, committed)?;
    if let Some(draft) = draft {
        render_action(canvas, tools, draft)?;
    }
    Ok(())
}

/// Renders actions in order without clearing first.
pub fn render_actions(
    canvas: &mut dyn Canvas,
    tools: &ToolRegistry,
    actions: &[Action],
) -> Result<(), SketchError> {
    for action in actions {
        render_action(canvas, tools, action)?;
    }
    Ok(())
}

/// Renders one action with the tool that produced it.
pub fn render_action(
    canvas: &mut dyn Canvas,
    tools: &ToolRegistry,
    action: &Action,
) -> Result<(), SketchError> {
    tools.get(&action.tool)?.draw(action, canvas)
}
