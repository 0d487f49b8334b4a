//! Visual defaults for the plot.

use glam::Vec4;

/// Palette and stroke/marker metrics the painter reads.
///
/// Colors are RGBA in `[0,1]`, widths and radii in logical pixels. The
/// default is a light theme: near white background, translucent surface
/// cells with faint light grid lines, dark gray chrome.
#[derive(Debug, Clone)]
pub struct PlotTheme {
    pub background: Vec4,
    /// Grid line stroked around every surface cell.
    pub cell_stroke: Vec4,
    pub axis_color: Vec4,
    pub label_color: Vec4,
    /// Color of the static interaction hint.
    pub hint_color: Vec4,
    /// Outline drawn around train markers.
    pub point_outline: Vec4,
    /// Fill of test markers; their outline takes the mapped label color.
    pub test_point_fill: Vec4,

    /// Alpha applied to every surface cell fill.
    pub surface_alpha: f32,
    pub cell_stroke_width: f64,
    pub axis_width: f64,
    pub point_radius: f64,
    pub point_outline_width: f64,
}

impl Default for PlotTheme {
    fn default() -> Self {
        Self {
            background: Vec4::new(0.98, 0.98, 0.98, 1.0),
            cell_stroke: Vec4::new(1.0, 1.0, 1.0, 0.4),
            axis_color: Vec4::new(0.35, 0.35, 0.35, 1.0),
            label_color: Vec4::new(0.3, 0.3, 0.3, 1.0),
            hint_color: Vec4::new(0.55, 0.55, 0.55, 1.0),
            point_outline: Vec4::new(0.15, 0.15, 0.15, 1.0),
            test_point_fill: Vec4::ONE,
            surface_alpha: 0.8,
            cell_stroke_width: 1.0,
            axis_width: 1.0,
            point_radius: 3.0,
            point_outline_width: 1.0,
        }
    }
}
