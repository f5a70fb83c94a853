//! Input handling and the drawing engine.
//!
//! This module turns host pointer and touch events into drawing actions.
//! It holds the tool registry and built-in tools, the per-surface sketch
//! state and stroke state machine, and the [`Sketch`] engine that ties them
//! to a canvas.

pub mod events;
mod host;
mod sketch;
pub mod state;
pub mod tool;
pub mod tools;

// Re-export commonly used types at module level
pub use events::{EventKind, PointerEvent, RawPointerEvent, TouchPoint};
pub use host::{SketchHost, SurfaceId};
pub use sketch::Sketch;
pub use state::{DrawingState, OptionChanged, OptionName, SketchState};
pub use tool::{Tool, ToolRegistry};
