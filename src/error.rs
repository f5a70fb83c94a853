//! Error types surfaced by the drawing engine and canvas backends.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::input::SurfaceId;

/// Errors raised by a [`Canvas`](crate::draw::Canvas) backend.
#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("Cairo operation failed: {0}")]
    Cairo(String),

    #[error("I/O error while encoding surface: {0}")]
    Io(#[from] io::Error),

    #[error("Image encoding failed: {0}")]
    Encode(String),
}

impl From<cairo::Error> for CanvasError {
    fn from(err: cairo::Error) -> Self {
        CanvasError::Cairo(err.to_string())
    }
}

impl From<cairo::IoError> for CanvasError {
    fn from(err: cairo::IoError) -> Self {
        match err {
            cairo::IoError::Io(io) => CanvasError::Io(io),
            cairo::IoError::Cairo(err) => CanvasError::Cairo(err.to_string()),
        }
    }
}

/// Errors surfaced synchronously by the engine's public operations.
///
/// Empty commits and undo/redo on an empty history are not errors; those are
/// silent no-ops and never produce a value of this type.
#[derive(Debug, Error)]
pub enum SketchError {
    /// The requested tool name has no entry in the tool registry.
    #[error("Unrecognized tool '{0}'")]
    UnrecognizedTool(String),

    /// A size value could not be coerced to a positive finite number.
    #[error("Invalid size '{0}': expected a positive number")]
    InvalidSize(String),

    /// An engine entry point was invoked against anything but exactly one surface.
    #[error("Sketch can only be called on one surface at a time (got {count})")]
    MultiTarget { count: usize },

    #[error("Invalid color '{0}'")]
    InvalidColor(String),

    #[error("Invalid line style '{0}': expected solid, dashed or dotted")]
    InvalidStyle(String),

    #[error("Unknown option '{0}'")]
    UnknownOption(String),

    #[error("Unknown event kind '{0}'")]
    UnknownEvent(String),

    #[error("Unsupported export format '{0}': expected png or jpeg")]
    UnsupportedFormat(String),

    #[error("No sketch is active on surface {0}")]
    UnknownSurface(SurfaceId),

    #[error("Failed to save export to {}: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Canvas(#[from] CanvasError),
}
