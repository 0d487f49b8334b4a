//! The injected 2D painting capability.
//!
//! The plot never talks to a concrete graphics API. The host hands it
//! something that fills and strokes shapes; anything from an HTML canvas
//! wrapper to an SVG writer to the in-memory recorder qualifies.

pub mod recording;

pub use recording::{PaintOp, RecordingSurface};

use glam::{DVec2, Vec4};

/// Immediate-mode 2D paint surface supplied by the host.
///
/// Coordinates are logical pixels with the origin at the top-left corner and
/// y growing downward; colors are RGBA in `[0,1]`. Calls take effect
/// synchronously and in order. The plot owns its surface exclusively, so
/// implementations need no interior locking.
pub trait PaintSurface {
    /// Fill an axis-aligned rectangle.
    fn fill_rect(&mut self, min: DVec2, size: DVec2, color: Vec4);

    /// Fill a convex quadrilateral given in perimeter order.
    fn fill_quad(&mut self, corners: [DVec2; 4], color: Vec4);

    /// Stroke the closed outline of a quadrilateral given in perimeter order.
    fn stroke_quad(&mut self, corners: [DVec2; 4], color: Vec4, width: f64);

    /// Fill a circle.
    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Vec4);

    /// Stroke a circle outline.
    fn stroke_circle(&mut self, center: DVec2, radius: f64, color: Vec4, width: f64);

    /// Stroke a straight line segment.
    fn stroke_line(&mut self, from: DVec2, to: DVec2, color: Vec4, width: f64);

    /// Draw a short text label with its left baseline at `pos`.
    fn draw_text(&mut self, text: &str, pos: DVec2, color: Vec4);
}
