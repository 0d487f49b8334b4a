//! Scalar-to-color mapping.

use glam::Vec4;

/// Maps a normalized scalar in `[-1,1]` to an RGBA color.
///
/// The plot treats the mapping as opaque; hosts inject whatever ramp suits
/// their data. Inputs outside `[-1,1]` must be handled (clamping is the
/// expected behavior).
pub trait ColorMapper {
    fn map_value(&self, t: f64) -> Vec4;
}

/// Gradient of evenly spaced stops, interpolated linearly between neighbors.
#[derive(Debug, Clone)]
pub struct LinearColorMap {
    stops: Vec<Vec4>,
}

impl LinearColorMap {
    /// Gradient over the given stops, spread evenly across `[-1,1]`.
    pub fn new(stops: Vec<Vec4>) -> Self {
        Self { stops }
    }

    /// Diverging blue to neutral gray to orange, suited to signed labels.
    pub fn diverging() -> Self {
        Self::new(vec![
            Vec4::new(0.03, 0.47, 0.74, 1.0),
            Vec4::new(0.91, 0.92, 0.92, 1.0),
            Vec4::new(0.96, 0.58, 0.13, 1.0),
        ])
    }
}

impl Default for LinearColorMap {
    fn default() -> Self {
        Self::diverging()
    }
}

impl ColorMapper for LinearColorMap {
    fn map_value(&self, t: f64) -> Vec4 {
        match self.stops.len() {
            0 => Vec4::ONE,
            1 => self.stops[0],
            n => {
                let t = (t.clamp(-1.0, 1.0) + 1.0) * 0.5;
                let pos = t * (n - 1) as f64;
                let idx = (pos.floor() as usize).min(n - 2);
                let frac = (pos - idx as f64) as f32;
                self.stops[idx].lerp(self.stops[idx + 1], frac)
            }
        }
    }
}
