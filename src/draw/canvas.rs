//! The Canvas capability consumed by tools and the redraw algorithm.
//!
//! A canvas is a surface-local 2D drawing context with standard immediate-mode
//! semantics: paths are built with `begin_path`/`move_to`/`line_to`/`arc`/`rect`
//! and painted with `stroke`, state setters apply to subsequent paint calls.

use super::{Color, FontDescriptor};
use crate::error::CanvasError;
use std::ops::{Deref, DerefMut};

/// How new paint is combined with what is already on the surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CompositeMode {
    /// Paint over existing content ("source-over")
    #[default]
    SourceOver,
    /// Remove existing content where paint lands ("destination-out")
    DestinationOut,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}

/// Encoded image formats a canvas can export to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
}

impl ImageFormat {
    pub fn mime_type(self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpeg",
        }
    }
}

/// Surface-local 2D drawing capability.
///
/// All calls are synchronous. Paint operations report backend failures;
/// path construction and state setters cannot fail.
pub trait Canvas {
    /// Erases the whole surface to transparent and resets drawing state
    /// (stroke, fill, dash, composite mode) to its defaults.
    fn clear(&mut self) -> Result<(), CanvasError>;

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    /// Adds a circular arc centred on `(cx, cy)` from `start` to `end` radians.
    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start: f64, end: f64);
    /// Adds a rectangle; `width` and `height` may be negative.
    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Strokes the current path with the current stroke state.
    fn stroke(&mut self) -> Result<(), CanvasError>;
    /// Fills `text` with its alphabetic baseline starting at `(x, y)`.
    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), CanvasError>;

    /// Sets the dash pattern; an empty slice means a solid stroke.
    fn set_dash_pattern(&mut self, pattern: &[f64]);
    fn set_stroke_color(&mut self, color: Color);
    fn set_fill_color(&mut self, color: Color);
    fn set_stroke_width(&mut self, width: f64);
    fn set_line_cap(&mut self, cap: LineCap);
    fn set_line_join(&mut self, join: LineJoin);
    fn set_font(&mut self, font: &FontDescriptor);

    fn composite_mode(&self) -> CompositeMode;
    fn set_composite_mode(&mut self, mode: CompositeMode);

    /// Encodes the current surface contents.
    fn export_image(&mut self, format: ImageFormat) -> Result<Vec<u8>, CanvasError>;

    /// Encodes the current surface contents as a `data:` URL.
    fn export_to_data_url(&mut self, format: ImageFormat) -> Result<String, CanvasError> {
        use base64::{Engine, engine::general_purpose::STANDARD};

        let bytes = self.export_image(format)?;
        Ok(format!(
            "data:{};base64,{}",
            format.mime_type(),
            STANDARD.encode(bytes)
        ))
    }
}

/// Scoped override of a canvas' composite mode.
///
/// The previous mode is restored when the scope is dropped, including when
/// the drawing done through it returns early with an error.
pub struct CompositeScope<'a> {
    canvas: &'a mut dyn Canvas,
    previous: CompositeMode,
}

impl<'a> CompositeScope<'a> {
    pub fn new(canvas: &'a mut dyn Canvas, mode: CompositeMode) -> Self {
        let previous = canvas.composite_mode();
        canvas.set_composite_mode(mode);
        Self { canvas, previous }
    }
}

impl<'a> Deref for CompositeScope<'a> {
    type Target = dyn Canvas + 'a;

    fn deref(&self) -> &Self::Target {
        &*self.canvas
    }
}

impl<'a> DerefMut for CompositeScope<'a> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.canvas
    }
}

impl Drop for CompositeScope<'_> {
    fn drop(&mut self) {
        self.canvas.set_composite_mode(self.previous);
    }
}
