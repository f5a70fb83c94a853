mod core;
mod options;
mod session;
#[cfg(test)]
mod tests;

pub use self::core::{DrawingState, SketchState};
pub use options::{OptionChanged, OptionName, parse_size};
pub use session::{StrokeFamily, StrokeSession};
