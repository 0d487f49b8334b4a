//! Interactive pseudo-3D surface and scatter plotting over an injected 2D
//! paint surface.
//!
//! A height-mapped grid surface and two classified point sets (train/test)
//! are viewed through an orbit camera driven by pointer drag. The pipeline
//! is small and CPU-side: normalize data coordinates onto the unit cube,
//! project through azimuth/elevation rotation with a weak perspective
//! divide, tessellate the field into depth-averaged quads, then paint
//! back-to-front with the classic painter's algorithm. No z-buffer, no
//! incremental redraw: every trigger repaints the whole frame synchronously.
//!
//! The plot has no concrete graphics dependency. Hosts inject the drawing
//! surface ([`PaintSurface`]), the color ramp ([`ColorMapper`]), and the
//! pointer-event source ([`EventSource`]); the crate ships a recording
//! surface and a linear gradient so it is usable headless out of the box.

pub mod config;
pub mod core;
pub mod event;
pub mod paint;
pub mod plot;
pub mod plots;
pub mod styling;

pub use self::config::PlotConfig;
pub use self::core::{
    AxisDomain, Camera, CameraController, ProjectedPoint, ScalarRange, CAMERA_DISTANCE,
    MAX_ELEVATION, VERTICAL_CENTER,
};
pub use self::event::{
    EventSource, EventSubscription, NullEventSource, PointerEvent, SharedEventSource,
    SubscriptionId,
};
pub use self::paint::{PaintOp, PaintSurface, RecordingSurface};
pub use self::plot::{OrbitPlot, PlotError};
pub use self::plots::{
    display_value, DataPoint, FieldStatistics, PointClass, ScalarField, SurfaceCell,
};
pub use self::styling::{ColorMapper, LinearColorMap, PlotTheme};
