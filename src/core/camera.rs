//! Orbit camera for the pseudo-3D view.
//!
//! The camera is two angles over the unit cube: `azimuth` yaws the ground
//! plane, `elevation` tilts the view above (or below) the horizon. Projection
//! is a weak perspective: rotate, divide by distance from a fixed eye, scale
//! into screen space.

use glam::DVec2;

/// Eye distance used by the perspective divide, in cube units.
pub const CAMERA_DISTANCE: f64 = 3.0;

/// Projection scale as a fraction of the surface width.
pub const SCALE_FRACTION: f64 = 0.25;

/// Fraction of the surface height where the cube center lands. Sits below
/// the geometric middle so axis labels fit underneath the surface.
pub const VERTICAL_CENTER: f64 = 0.62;

/// Elevation clamp in radians. Short of the +-pi/2 poles, where the yawed
/// depth axis would degenerate.
pub const MAX_ELEVATION: f64 = 1.45;

const DEFAULT_AZIMUTH: f64 = -std::f64::consts::FRAC_PI_4;
const DEFAULT_ELEVATION: f64 = 0.6;
const DEFAULT_ROTATE_SENSITIVITY: f64 = 0.01;

/// A cube point mapped onto the screen.
///
/// `depth` is the camera-space z before the perspective divide: larger means
/// nearer the viewer. It exists only for paint ordering within one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedPoint {
    pub screen: DVec2,
    pub depth: f64,
}

/// View angles plus the screen mapping they feed.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Yaw around the vertical axis, radians. Unbounded; trig wraps it.
    pub azimuth: f64,
    /// Altitude above the horizon, radians. Kept within [`MAX_ELEVATION`].
    pub elevation: f64,
    /// Radians of orbit per pixel of pointer drag.
    pub rotate_sensitivity: f64,
    /// Logical surface size in pixels.
    pub width: f64,
    pub height: f64,
    /// Pixels per cube unit before the perspective factor.
    pub scale: f64,
}

impl Camera {
    /// Camera over a surface of the given logical size, at the default
    /// three-quarter overhead view.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            azimuth: DEFAULT_AZIMUTH,
            elevation: DEFAULT_ELEVATION,
            rotate_sensitivity: DEFAULT_ROTATE_SENSITIVITY,
            width,
            height,
            scale: width * SCALE_FRACTION,
        }
    }

    /// Project a point of the `[-1,1]` cube onto the screen.
    ///
    /// The ground plane is yawed by `azimuth`, then the yawed depth axis and
    /// the height axis are tilted by `elevation`; what ends up pointing at
    /// the viewer becomes `depth` and drives the perspective divide.
    pub fn project(&self, x: f64, y: f64, z: f64) -> ProjectedPoint {
        let (sin_a, cos_a) = self.azimuth.sin_cos();
        let (sin_e, cos_e) = self.elevation.sin_cos();

        let x1 = x * cos_a - y * sin_a;
        let y1 = x * sin_a + y * cos_a;

        // Screen-vertical mixes height with the yawed depth axis; the
        // remainder of the pair points at the viewer.
        let y2 = y1 * sin_e + z * cos_e;
        let z2 = z * sin_e - y1 * cos_e;

        let factor = CAMERA_DISTANCE / (CAMERA_DISTANCE - z2);
        ProjectedPoint {
            screen: DVec2::new(
                self.width * 0.5 + x1 * self.scale * factor,
                // Screen y grows downward.
                self.height * VERTICAL_CENTER - y2 * self.scale * factor,
            ),
            depth: z2,
        }
    }

    /// Orbit by a screen-space pointer delta, in pixels.
    pub fn rotate(&mut self, delta: DVec2) {
        self.azimuth += delta.x * self.rotate_sensitivity;
        self.elevation = (self.elevation + delta.y * self.rotate_sensitivity)
            .clamp(-MAX_ELEVATION, MAX_ELEVATION);
    }
}

/// Pointer-drag state for orbiting a [`Camera`].
///
/// Two states: idle and dragging. A press starts a drag at the pressed
/// position; every move while dragging orbits by the delta since the last
/// move; a release ends the drag wherever the pointer happens to be.
#[derive(Debug, Default)]
pub struct CameraController {
    pub dragging: bool,
    pub last_pos: DVec2,
}

impl CameraController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle pointer press: begin dragging from `position`.
    pub fn mouse_press(&mut self, position: DVec2) {
        self.last_pos = position;
        self.dragging = true;
    }

    /// Handle pointer release. Position does not matter; releases outside
    /// the surface must end the drag too.
    pub fn mouse_release(&mut self) {
        self.dragging = false;
    }

    /// Handle pointer movement. Returns whether the camera changed.
    pub fn mouse_move(&mut self, position: DVec2, camera: &mut Camera) -> bool {
        if !self.dragging {
            return false;
        }
        let delta = position - self.last_pos;
        camera.rotate(delta);
        self.last_pos = position;
        true
    }
}
