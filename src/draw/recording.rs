//! A canvas that records primitive calls instead of rasterising them.

use super::canvas::{Canvas, CompositeMode, ImageFormat, LineCap, LineJoin};
use super::{Color, FontDescriptor};
use crate::error::CanvasError;

/// One recorded call on a [`RecordingCanvas`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    BeginPath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    Arc {
        cx: f64,
        cy: f64,
        radius: f64,
        start: f64,
        end: f64,
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    Stroke,
    FillText {
        text: String,
        x: f64,
        y: f64,
    },
    SetDashPattern(Vec<f64>),
    SetStrokeColor(Color),
    SetFillColor(Color),
    SetStrokeWidth(f64),
    SetLineCap(LineCap),
    SetLineJoin(LineJoin),
    SetFont(FontDescriptor),
    SetCompositeMode(CompositeMode),
}

impl DrawCommand {
    /// Whether this call puts paint on the surface.
    pub fn is_paint(&self) -> bool {
        matches!(self, DrawCommand::Stroke | DrawCommand::FillText { .. })
    }
}

/// Canvas that keeps an ordered log of every call made on it.
///
/// Two renders of the same model produce equal command lists, which is how
/// redraw determinism is checked without a raster backend.
#[derive(Debug, Clone)]
pub struct RecordingCanvas {
    width: u32,
    height: u32,
    commands: Vec<DrawCommand>,
    composite: CompositeMode,
}

impl RecordingCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
            composite: CompositeMode::SourceOver,
        }
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drains the recorded commands.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Commands recorded since the most recent [`Canvas::clear`].
    pub fn commands_since_clear(&self) -> &[DrawCommand] {
        let start = self
            .commands
            .iter()
            .rposition(|command| *command == DrawCommand::Clear)
            .map_or(0, |index| index + 1);
        &self.commands[start..]
    }

    /// Whether nothing has been painted since the last clear.
    pub fn is_blank(&self) -> bool {
        !self.commands_since_clear().iter().any(DrawCommand::is_paint)
    }

    fn record(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self) -> Result<(), CanvasError> {
        self.composite = CompositeMode::SourceOver;
        self.record(DrawCommand::Clear);
        Ok(())
    }

    fn begin_path(&mut self) {
        self.record(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.record(DrawCommand::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.record(DrawCommand::LineTo(x, y));
    }

    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start: f64, end: f64) {
        self.record(DrawCommand::Arc {
            cx,
            cy,
            radius,
            start,
            end,
        });
    }

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.record(DrawCommand::Rect {
            x,
            y,
            width,
            height,
        });
    }

    fn stroke(&mut self) -> Result<(), CanvasError> {
        self.record(DrawCommand::Stroke);
        Ok(())
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), CanvasError> {
        self.record(DrawCommand::FillText {
            text: text.to_string(),
            x,
            y,
        });
        Ok(())
    }

    fn set_dash_pattern(&mut self, pattern: &[f64]) {
        self.record(DrawCommand::SetDashPattern(pattern.to_vec()));
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.record(DrawCommand::SetStrokeColor(color));
    }

    fn set_fill_color(&mut self, color: Color) {
        self.record(DrawCommand::SetFillColor(color));
    }

    fn set_stroke_width(&mut self, width: f64) {
        self.record(DrawCommand::SetStrokeWidth(width));
    }

    fn set_line_cap(&mut self, cap: LineCap) {
        self.record(DrawCommand::SetLineCap(cap));
    }

    fn set_line_join(&mut self, join: LineJoin) {
        self.record(DrawCommand::SetLineJoin(join));
    }

    fn set_font(&mut self, font: &FontDescriptor) {
        self.record(DrawCommand::SetFont(font.clone()));
    }

    fn composite_mode(&self) -> CompositeMode {
        self.composite
    }

    fn set_composite_mode(&mut self, mode: CompositeMode) {
        self.composite = mode;
        self.record(DrawCommand::SetCompositeMode(mode));
    }

    /// There are no pixels to encode; the export is a textual listing of the
    /// commands painted since the last clear.
    fn export_image(&mut self, _format: ImageFormat) -> Result<Vec<u8>, CanvasError> {
        let listing = self
            .commands_since_clear()
            .iter()
            .map(|command| format!("{command:?}"))
            .collect::<Vec<_>>()
            .join("\n");
        Ok(listing.into_bytes())
    }
}
