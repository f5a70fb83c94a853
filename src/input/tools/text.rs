use crate::action::{Action, ActionEvent};
use crate::config::DrawingConfig;
use crate::draw::{Canvas, FontDescriptor};
use crate::error::SketchError;
use crate::input::events::PointerEvent;
use crate::input::state::SketchState;
use crate::input::tool::Tool;
use log::debug;

/// Places the sketch's current text where the pointer is released.
///
/// There is no drag phase: each lift commits a one-point action carrying the
/// text, so the placement is undoable like any stroke.
#[derive(Debug, Clone)]
pub struct TextTool {
    /// Family, weight and style; the pixel size comes from each action
    font: FontDescriptor,
    /// Font pixels per unit of action size
    text_scale: f64,
}

impl Default for TextTool {
    fn default() -> Self {
        Self::from_config(&DrawingConfig::default())
    }
}

impl TextTool {
    pub fn from_config(config: &DrawingConfig) -> Self {
        Self {
            font: FontDescriptor::new(
                config.font_family.clone(),
                config.font_weight.clone(),
                config.font_style.clone(),
                config.default_size * config.text_scale,
            ),
            text_scale: config.text_scale,
        }
    }

    /// Font used to render an action of the given size.
    pub fn font_for(&self, size: f64) -> FontDescriptor {
        self.font.with_size(size * self.text_scale)
    }
}

impl Tool for TextTool {
    fn on_event(&self, event: &PointerEvent, state: &mut SketchState) {
        if !event.kind.is_lift() {
            return;
        }

        let mut action = state.new_action();
        action.text = Some(state.text.clone());
        action.events.push(ActionEvent {
            point: event.point,
            kind: event.kind,
        });
        debug!(
            "Placing text {:?} at ({}, {})",
            state.text, event.point.x, event.point.y
        );
        state.commit(action);
    }

    fn draw(&self, action: &Action, canvas: &mut dyn Canvas) -> Result<(), SketchError> {
        let (Some(anchor), Some(text)) = (action.first_point(), action.text.as_deref()) else {
            return Ok(());
        };
        if text.is_empty() {
            return Ok(());
        }

        canvas.set_font(&self.font_for(action.size));
        canvas.set_fill_color(action.color);
        canvas.fill_text(text, anchor.x, anchor.y)?;
        Ok(())
    }
}
