//! Cairo-backed implementation of the Canvas capability.

use super::canvas::{Canvas, CompositeMode, ImageFormat, LineCap, LineJoin};
use super::{BLACK, Color, FontDescriptor};
use crate::error::CanvasError;
use image::ExtendedColorType;
use image::codecs::jpeg::JpegEncoder;

/// Default JPEG quality, matching what browsers use for `toDataURL`.
pub const DEFAULT_JPEG_QUALITY: u8 = 92;

/// Canvas drawing onto an ARGB32 Cairo image surface.
///
/// Stroke and fill colors are tracked separately (Cairo has a single source)
/// and applied right before each paint call.
pub struct CairoCanvas {
    surface: cairo::ImageSurface,
    ctx: cairo::Context,
    stroke_color: Color,
    fill_color: Color,
    font: FontDescriptor,
    composite: CompositeMode,
    jpeg_quality: u8,
}

impl CairoCanvas {
    /// Creates a transparent surface of the given size.
    pub fn new(width: u32, height: u32) -> Result<Self, CanvasError> {
        let surface = cairo::ImageSurface::create(
            cairo::Format::ARgb32,
            width.min(i32::MAX as u32) as i32,
            height.min(i32::MAX as u32) as i32,
        )?;
        let ctx = cairo::Context::new(&surface)?;
        ctx.set_antialias(cairo::Antialias::Best);

        Ok(Self {
            surface,
            ctx,
            stroke_color: BLACK,
            fill_color: BLACK,
            font: FontDescriptor::default(),
            composite: CompositeMode::SourceOver,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        })
    }

    /// Sets the quality (1-100) used for JPEG exports.
    pub fn with_jpeg_quality(mut self, quality: u8) -> Self {
        self.jpeg_quality = quality.clamp(1, 100);
        self
    }

    pub fn width(&self) -> u32 {
        self.surface.width().max(0) as u32
    }

    pub fn height(&self) -> u32 {
        self.surface.height().max(0) as u32
    }

    /// Underlying image surface, for hosts that blit it elsewhere.
    pub fn surface(&self) -> &cairo::ImageSurface {
        &self.surface
    }

    /// Returns the premultiplied `[a, r, g, b]` channels of one pixel.
    pub fn pixel(&self, x: u32, y: u32) -> Result<Option<[u8; 4]>, CanvasError> {
        if x >= self.width() || y >= self.height() {
            return Ok(None);
        }
        let stride = self.surface.stride() as usize;
        let offset = y as usize * stride + x as usize * 4;
        let mut pixel = None;
        self.surface
            .with_data(|data| {
                pixel = data
                    .get(offset..offset + 4)
                    .map(|bytes| argb_channels([bytes[0], bytes[1], bytes[2], bytes[3]]));
            })
            .map_err(|err| CanvasError::Cairo(err.to_string()))?;
        Ok(pixel)
    }

    fn apply_source(&self, color: Color) {
        self.ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    }

    fn encode_png(&self) -> Result<Vec<u8>, CanvasError> {
        let mut buffer = Vec::new();
        self.surface.write_to_png(&mut buffer)?;
        Ok(buffer)
    }

    /// JPEG has no alpha channel, so transparent regions are flattened onto white.
    fn encode_jpeg(&self) -> Result<Vec<u8>, CanvasError> {
        let width = self.width();
        let height = self.height();
        let stride = self.surface.stride() as usize;
        let mut rgb = Vec::with_capacity(width as usize * height as usize * 3);

        self.surface
            .with_data(|data| {
                for row in data.chunks(stride).take(height as usize) {
                    for px in row[..width as usize * 4].chunks_exact(4) {
                        let [a, r, g, b] = argb_channels([px[0], px[1], px[2], px[3]]);
                        // Premultiplied source over opaque white.
                        let backdrop = 255 - a;
                        rgb.extend_from_slice(&[
                            r.saturating_add(backdrop),
                            g.saturating_add(backdrop),
                            b.saturating_add(backdrop),
                        ]);
                    }
                }
            })
            .map_err(|err| CanvasError::Cairo(err.to_string()))?;

        let mut buffer = Vec::new();
        JpegEncoder::new_with_quality(&mut buffer, self.jpeg_quality)
            .encode(&rgb, width, height, ExtendedColorType::Rgb8)
            .map_err(|err| CanvasError::Encode(err.to_string()))?;
        Ok(buffer)
    }
}

/// ARGB32 pixels are stored as native-endian `u32`s.
fn argb_channels(bytes: [u8; 4]) -> [u8; 4] {
    let value = u32::from_ne_bytes(bytes);
    [
        (value >> 24) as u8,
        (value >> 16) as u8,
        (value >> 8) as u8,
        value as u8,
    ]
}

impl Canvas for CairoCanvas {
    fn clear(&mut self) -> Result<(), CanvasError> {
        self.ctx.set_operator(cairo::Operator::Clear);
        self.ctx.paint()?;

        // Start every frame from default state.
        self.ctx.new_path();
        self.ctx.set_operator(cairo::Operator::Over);
        self.ctx.set_dash(&[], 0.0);
        self.ctx.set_line_width(1.0);
        self.ctx.set_line_cap(cairo::LineCap::Butt);
        self.ctx.set_line_join(cairo::LineJoin::Miter);
        self.stroke_color = BLACK;
        self.fill_color = BLACK;
        self.composite = CompositeMode::SourceOver;
        Ok(())
    }

    fn begin_path(&mut self) {
        self.ctx.new_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }

    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start: f64, end: f64) {
        self.ctx.arc(cx, cy, radius, start, end);
    }

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.rectangle(x, y, width, height);
    }

    fn stroke(&mut self) -> Result<(), CanvasError> {
        self.apply_source(self.stroke_color);
        // Keep the path around, like an HTML canvas does after stroke().
        self.ctx.stroke_preserve()?;
        Ok(())
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), CanvasError> {
        if text.is_empty() {
            return Ok(());
        }

        let layout = pangocairo::functions::create_layout(&self.ctx);
        let font_desc = pango::FontDescription::from_string(&self.font.to_pango_string());
        layout.set_font_description(Some(&font_desc));
        layout.set_text(text);

        // Pango positions from the top-left; the canvas contract is baseline.
        let baseline = layout.baseline() as f64 / pango::SCALE as f64;

        self.ctx.save()?;
        self.apply_source(self.fill_color);
        self.ctx.move_to(x, y - baseline);
        pangocairo::functions::show_layout(&self.ctx, &layout);
        // Text must not leave a sub-path behind for the next stroke.
        self.ctx.new_path();
        self.ctx.restore()?;
        Ok(())
    }

    fn set_dash_pattern(&mut self, pattern: &[f64]) {
        self.ctx.set_dash(pattern, 0.0);
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.stroke_color = color;
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    fn set_stroke_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn set_line_cap(&mut self, cap: LineCap) {
        self.ctx.set_line_cap(match cap {
            LineCap::Butt => cairo::LineCap::Butt,
            LineCap::Round => cairo::LineCap::Round,
            LineCap::Square => cairo::LineCap::Square,
        });
    }

    fn set_line_join(&mut self, join: LineJoin) {
        self.ctx.set_line_join(match join {
            LineJoin::Miter => cairo::LineJoin::Miter,
            LineJoin::Round => cairo::LineJoin::Round,
            LineJoin::Bevel => cairo::LineJoin::Bevel,
        });
    }

    fn set_font(&mut self, font: &FontDescriptor) {
        self.font = font.clone();
    }

    fn composite_mode(&self) -> CompositeMode {
        self.composite
    }

    fn set_composite_mode(&mut self, mode: CompositeMode) {
        self.composite = mode;
        self.ctx.set_operator(match mode {
            CompositeMode::SourceOver => cairo::Operator::Over,
            CompositeMode::DestinationOut => cairo::Operator::DestOut,
        });
    }

    fn export_image(&mut self, format: ImageFormat) -> Result<Vec<u8>, CanvasError> {
        self.surface.flush();
        match format {
            ImageFormat::Png => self.encode_png(),
            ImageFormat::Jpeg => self.encode_jpeg(),
        }
    }
}
