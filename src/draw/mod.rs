//! Rendering primitives: the Canvas capability and its backends.
//!
//! This module defines the drawing types the engine renders through:
//! - [`Canvas`]: the surface-local 2D drawing capability tools paint with
//! - [`CairoCanvas`]: Cairo image-surface backend with PNG/JPEG export
//! - [`RecordingCanvas`]: backend that records calls, for checking redraws
//! - [`Color`] and [`FontDescriptor`]: paint parameters
//! - [`redraw`]: the full-surface redraw of an action log

pub mod cairo_canvas;
pub mod canvas;
pub mod color;
pub mod font;
pub mod recording;
pub mod render;

// Re-export commonly used types at module level
pub use cairo_canvas::CairoCanvas;
pub use canvas::{Canvas, CompositeMode, CompositeScope, ImageFormat, LineCap, LineJoin};
pub use color::Color;
pub use font::FontDescriptor;
pub use recording::{DrawCommand, RecordingCanvas};
pub use render::{redraw, render_action, render_actions};

pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, RED, TRANSPARENT, WHITE, YELLOW};
