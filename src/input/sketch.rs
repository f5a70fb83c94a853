//! The drawing engine: one sketch per surface.

use super::events::{PointerEvent, RawPointerEvent};
use super::state::{OptionChanged, OptionName, SketchState, parse_size};
use super::tool::ToolRegistry;
use crate::action::{Action, ActionLog, LineStyle, Point};
use crate::config::Config;
use crate::draw::{self, Canvas, Color, ImageFormat};
use crate::error::SketchError;
use log::{debug, info};

/// Drawing engine bound to a single surface's canvas.
///
/// Owns the surface's [`SketchState`] and routes every pointer event to the
/// current tool, then re-renders the whole surface from the action log when
/// the tool reports a change. Rendering never mutates the log.
pub struct Sketch<C: Canvas> {
    canvas: C,
    tools: ToolRegistry,
    state: SketchState,
    tool_links: bool,
    /// Page position of the surface's top-left corner
    offset: Point,
    notifications: Vec<OptionChanged>,
}

impl<C: Canvas> Sketch<C> {
    /// Creates a sketch with the built-in tools, configured from `config`.
    pub fn new(canvas: C, config: &Config) -> Result<Self, SketchError> {
        Self::with_registry(canvas, ToolRegistry::with_builtins(config), config)
    }

    /// Creates a sketch using a caller-populated tool registry.
    ///
    /// Fails when the configured default tool is missing from `tools` or a
    /// configured default value does not parse.
    pub fn with_registry(
        canvas: C,
        tools: ToolRegistry,
        config: &Config,
    ) -> Result<Self, SketchError> {
        let drawing = &config.drawing;
        tools.get(&drawing.default_tool)?;
        let color: Color = drawing.default_color.parse()?;
        let size = drawing.default_size;
        if !(size.is_finite() && size > 0.0) {
            return Err(SketchError::InvalidSize(size.to_string()));
        }
        let style: LineStyle = drawing.default_style.parse()?;
        let log = ActionLog::with_policy(config.history.redo_policy());

        debug!(
            "New sketch: tool '{}', color {}, size {}, style {}, {:?}",
            drawing.default_tool,
            color,
            size,
            style,
            log.policy()
        );

        Ok(Self {
            canvas,
            tools,
            state: SketchState::new(drawing.default_tool.clone(), color, size, style, log),
            tool_links: drawing.tool_links,
            offset: Point::default(),
            notifications: Vec::new(),
        })
    }

    /// Sets one of `color`, `size`, `tool`, `style` or `text` from its string form.
    ///
    /// The value is validated before anything changes. Switching tools while a
    /// stroke is live commits that stroke. Every successful set queues an
    /// [`OptionChanged`] notification.
    pub fn set_option(&mut self, name: &str, value: &str) -> Result<(), SketchError> {
        let option: OptionName = name.parse()?;
        let canonical = match option {
            OptionName::Color => {
                let color: Color = value.parse()?;
                self.state.color = color;
                color.to_hex()
            }
            OptionName::Size => {
                let size = parse_size(value)?;
                self.state.size = size;
                size.to_string()
            }
            OptionName::Tool => {
                let tool = value.trim();
                self.tools.get(tool)?;
                if self.state.is_painting() && self.state.tool != tool {
                    debug!("Tool changed mid-stroke; committing the live stroke");
                    self.state.end_stroke();
                }
                self.state.tool = tool.to_string();
                tool.to_string()
            }
            OptionName::Style => {
                let style: LineStyle = value.parse()?;
                self.state.style = style;
                style.to_string()
            }
            OptionName::Text => {
                self.state.text = value.to_string();
                value.to_string()
            }
        };

        info!("Sketch option {option} set to {canonical:?}");
        self.notifications.push(OptionChanged {
            option,
            value: canonical,
        });
        self.redraw_if_needed()
    }

    /// Current value of an option, in the same form `set_option` accepts.
    pub fn option_value(&self, name: &str) -> Result<String, SketchError> {
        let option: OptionName = name.parse()?;
        Ok(match option {
            OptionName::Color => self.state.color.to_hex(),
            OptionName::Size => self.state.size.to_string(),
            OptionName::Tool => self.state.tool.clone(),
            OptionName::Style => self.state.style.to_string(),
            OptionName::Text => self.state.text.clone(),
        })
    }

    /// Routes one normalized event to the current tool and redraws if needed.
    pub fn dispatch_pointer_event(&mut self, event: &PointerEvent) -> Result<(), SketchError> {
        let tool = self.tools.get(&self.state.tool)?;
        tool.on_event(event, &mut self.state);
        self.redraw_if_needed()
    }

    /// Normalizes a raw page-space event against this surface, then dispatches it.
    pub fn handle_raw_event(&mut self, raw: &RawPointerEvent) -> Result<(), SketchError> {
        let event = raw.normalize(self.offset);
        self.dispatch_pointer_event(&event)
    }

    /// Clears the surface and renders the committed log, then the live draft.
    pub fn redraw(&mut self) -> Result<(), SketchError> {
        self.state.needs_redraw = false;
        draw::redraw(
            &mut self.canvas,
            &self.tools,
            self.state.log.committed(),
            self.state.draft(),
        )
    }

    fn redraw_if_needed(&mut self) -> Result<(), SketchError> {
        if self.state.needs_redraw {
            self.redraw()?;
        }
        Ok(())
    }

    /// Undoes the most recent action; a no-op on an empty log.
    pub fn undo(&mut self) -> Result<(), SketchError> {
        self.state.undo();
        self.redraw_if_needed()
    }

    /// Redoes the most recently undone action; a no-op when nothing was undone.
    pub fn redo(&mut self) -> Result<(), SketchError> {
        self.state.redo();
        self.redraw_if_needed()
    }

    /// Exports the surface as a `data:` URL.
    ///
    /// `format` is `png` or `jpeg` (`jpg` is accepted as an alias).
    pub fn download(&mut self, format: &str) -> Result<String, SketchError> {
        let format: ImageFormat = format.parse()?;
        let url = self.canvas.export_to_data_url(format)?;
        info!("Exported surface as {} data URL", format.mime_type());
        Ok(url)
    }

    /// Exports the surface as encoded image bytes.
    pub fn export(&mut self, format: ImageFormat) -> Result<Vec<u8>, SketchError> {
        Ok(self.canvas.export_image(format)?)
    }

    /// Drains queued option-change notifications, oldest first.
    pub fn take_notifications(&mut self) -> Vec<OptionChanged> {
        std::mem::take(&mut self.notifications)
    }

    /// Sets the surface's page offset used by [`handle_raw_event`](Self::handle_raw_event).
    pub fn set_surface_offset(&mut self, offset: Point) {
        self.offset = offset;
    }

    pub fn surface_offset(&self) -> Point {
        self.offset
    }

    /// Whether declarative tool-link glue should be wired for this sketch.
    pub fn tool_links(&self) -> bool {
        self.tool_links
    }

    pub fn state(&self) -> &SketchState {
        &self.state
    }

    pub fn committed(&self) -> &[Action] {
        self.state.log.committed()
    }

    pub fn draft(&self) -> Option<&Action> {
        self.state.draft()
    }

    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }

    /// Consumes the sketch, returning its canvas.
    pub fn into_canvas(self) -> C {
        self.canvas
    }
}
