//! Tool capability and the name → tool registry.

use super::events::PointerEvent;
use super::state::SketchState;
use super::tools::{
    ArrowLineTool, CircleTool, EraserTool, LineTool, MarkerTool, RectangleTool, RedoTool,
    TextTool, UndoTool,
};
use crate::action::Action;
use crate::config::Config;
use crate::draw::Canvas;
use crate::error::SketchError;
use std::collections::HashMap;

/// Registry names of the built-in tools.
pub mod names {
    pub const MARKER: &str = "marker";
    pub const LINE: &str = "line";
    pub const ARROW_LINE: &str = "arrow_line";
    pub const DOUBLE_ARROW_LINE: &str = "double_arrow_line";
    pub const CIRCLE: &str = "circle";
    pub const RECTANGLE: &str = "rectangle";
    pub const TEXT: &str = "text";
    pub const UNDO: &str = "undo";
    pub const REDO: &str = "redo";
    pub const ERASER: &str = "eraser";
}

/// A drawing tool: turns pointer events into actions and renders them back.
///
/// Tools hold no per-gesture state of their own. Everything a gesture builds
/// lives in the [`SketchState`] passed to `on_event`, so one tool instance
/// serves every surface.
pub trait Tool {
    /// Reacts to one normalized pointer event, mutating the sketch state.
    ///
    /// Implementations set `state.needs_redraw` when the event changed
    /// anything visible.
    fn on_event(&self, event: &PointerEvent, state: &mut SketchState);

    /// Renders an action this tool produced.
    fn draw(&self, action: &Action, canvas: &mut dyn Canvas) -> Result<(), SketchError>;
}

/// Mapping from tool name to tool implementation.
///
/// Populated at startup; hosts add their own tools with
/// [`register`](Self::register) before handing the registry to a sketch.
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Box<dyn Tool>>,
}

impl ToolRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding every built-in tool, configured from `config`.
    pub fn with_builtins(config: &Config) -> Self {
        let line = LineTool::from_config(&config.arrow);
        let mut registry = Self::new();

        registry.register(names::MARKER, MarkerTool);
        registry.register(names::LINE, line);
        registry.register(names::ARROW_LINE, ArrowLineTool::single(line));
        registry.register(names::DOUBLE_ARROW_LINE, ArrowLineTool::double(line));
        registry.register(names::CIRCLE, CircleTool);
        registry.register(names::RECTANGLE, RectangleTool);
        registry.register(names::TEXT, TextTool::from_config(&config.drawing));
        registry.register(names::UNDO, UndoTool);
        registry.register(names::REDO, RedoTool);
        registry.register(names::ERASER, EraserTool::new(MarkerTool));
        registry
    }

    /// Adds or replaces the tool registered under `name`.
    pub fn register(&mut self, name: impl Into<String>, tool: impl Tool + 'static) {
        let name = name.into();
        if self.tools.insert(name.clone(), Box::new(tool)).is_some() {
            log::debug!("Replaced tool '{name}'");
        }
    }

    /// Looks up a tool by name.
    pub fn get(&self, name: &str) -> Result<&dyn Tool, SketchError> {
        self.tools
            .get(name)
            .map(|tool| tool.as_ref())
            .ok_or_else(|| SketchError::UnrecognizedTool(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Registered tool names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tools.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
