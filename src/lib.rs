//! Library exports for the sketchpad drawing engine.
//!
//! Exposes the action log, the tool registry and the drawing engine alongside
//! the Canvas capability they render through, so that host glue (event
//! binding, UI triggers) can drive a surface without reaching into internals.

pub mod action;
pub mod config;
pub mod draw;
pub mod error;
pub mod export;
pub mod input;
pub mod util;

pub use action::{Action, ActionLog, LineStyle, Point, RedoPolicy};
pub use config::Config;
pub use error::{CanvasError, SketchError};
pub use input::{Sketch, SketchHost};
