//! Per-surface sketch ownership for hosts with several drawing surfaces.

use super::sketch::Sketch;
use crate::config::Config;
use crate::draw::Canvas;
use crate::error::SketchError;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Host-assigned identifier of a drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SurfaceId(pub u64);

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Owns one [`Sketch`] per activated surface.
///
/// Sketches never share state: each surface gets its own action log, options
/// and tool registry, and everything is dropped when the surface is
/// deactivated.
pub struct SketchHost<C: Canvas> {
    config: Config,
    sketches: HashMap<SurfaceId, Sketch<C>>,
}

impl<C: Canvas> SketchHost<C> {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            sketches: HashMap::new(),
        }
    }

    /// Creates a fresh sketch on `surface`, replacing any existing one.
    pub fn activate(&mut self, surface: SurfaceId, canvas: C) -> Result<&mut Sketch<C>, SketchError> {
        let mut sketch = Sketch::new(canvas, &self.config)?;
        sketch.redraw()?;
        if self.sketches.insert(surface, sketch).is_some() {
            debug!("Surface {surface} re-activated; previous sketch discarded");
        }
        info!("Activated sketch on surface {surface}");
        self.select(&[surface])
    }

    /// Destroys the sketch on `surface`, returning its canvas.
    pub fn deactivate(&mut self, surface: SurfaceId) -> Option<C> {
        let sketch = self.sketches.remove(&surface)?;
        info!("Deactivated sketch on surface {surface}");
        Some(sketch.into_canvas())
    }

    /// Resolves the engine for exactly one target surface.
    ///
    /// # Errors
    /// [`SketchError::MultiTarget`] when `targets` holds anything but one
    /// surface; [`SketchError::UnknownSurface`] when it was never activated.
    pub fn select(&mut self, targets: &[SurfaceId]) -> Result<&mut Sketch<C>, SketchError> {
        let [surface] = targets else {
            return Err(SketchError::MultiTarget {
                count: targets.len(),
            });
        };
        self.sketches
            .get_mut(surface)
            .ok_or(SketchError::UnknownSurface(*surface))
    }

    pub fn is_active(&self, surface: SurfaceId) -> bool {
        self.sketches.contains_key(&surface)
    }

    /// Activated surfaces, sorted.
    pub fn surfaces(&self) -> Vec<SurfaceId> {
        let mut surfaces: Vec<SurfaceId> = self.sketches.keys().copied().collect();
        surfaces.sort_unstable();
        surfaces
    }

    pub fn len(&self) -> usize {
        self.sketches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sketches.is_empty()
    }
}
