//! Utility functions for geometry, dash patterns, and color names.
//!
//! This module provides:
//! - Point distance and dash-pattern computation
//! - Arrowhead barb geometry for the line tools
//! - Color name lookup used by option parsing

use crate::action::{LineStyle, Point};
use crate::draw::{Color, color::*};
use std::f64::consts::PI;

// ============================================================================
// Geometry
// ============================================================================

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    ((b.x - a.x).powi(2) + (b.y - a.y).powi(2)).sqrt()
}

/// Computes the dash pattern for a stroke style at the given stroke width.
///
/// - `solid` → empty pattern (continuous stroke)
/// - `dashed` → `[3·size, 3·size]`
/// - `dotted` → `[1, 2·size]`
pub fn dash_pattern(style: LineStyle, size: f64) -> Vec<f64> {
    match style {
        LineStyle::Solid => Vec::new(),
        LineStyle::Dashed => vec![3.0 * size, 3.0 * size],
        LineStyle::Dotted => vec![1.0, 2.0 * size],
    }
}

// ============================================================================
// Arrowhead Geometry
// ============================================================================

/// Angle between each barb and the shaft.
const BARB_ANGLE: f64 = PI / 6.0;

/// Barb endpoints for an arrowhead at the END of the segment `from → to`.
///
/// The head sits on `to` and points away from `from`.
///
/// # Returns
/// Two points `[left, right]`; each barb is drawn from `to` to one of them.
pub fn arrowhead_at_end(from: Point, to: Point, head_length: f64) -> [Point; 2] {
    let angle = (to.y - from.y).atan2(to.x - from.x);
    barbs(to, angle, head_length)
}

/// Barb endpoints for an arrowhead at the BEGINNING of the segment `from → to`.
///
/// Mirror of [`arrowhead_at_end`]: the atan2 arguments are swapped so the head
/// sits on `from` and points away from `to`.
pub fn arrowhead_at_start(from: Point, to: Point, head_length: f64) -> [Point; 2] {
    let angle = (from.y - to.y).atan2(from.x - to.x);
    barbs(from, angle, head_length)
}

fn barbs(tip: Point, angle: f64, head_length: f64) -> [Point; 2] {
    [
        Point::new(
            tip.x - head_length * (angle - BARB_ANGLE).cos(),
            tip.y - head_length * (angle - BARB_ANGLE).sin(),
        ),
        Point::new(
            tip.x - head_length * (angle + BARB_ANGLE).cos(),
            tip.y - head_length * (angle + BARB_ANGLE).sin(),
        ),
    ]
}

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "yellow", "orange", "pink", "white", "black", "transparent"
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "pink" => Some(PINK),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        "transparent" => Some(TRANSPARENT),
        _ => None,
    }
}
