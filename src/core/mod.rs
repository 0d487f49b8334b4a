//! Core view math: the orbit camera and domain normalization.

pub mod camera;
pub mod domain;

pub use camera::{
    Camera, CameraController, ProjectedPoint, CAMERA_DISTANCE, MAX_ELEVATION, SCALE_FRACTION,
    VERTICAL_CENTER,
};
pub use domain::{AxisDomain, ScalarRange};
