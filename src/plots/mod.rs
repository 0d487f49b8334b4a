//! Data layers: the sampled surface and the classified point sets.

pub mod points;
pub mod surface;

pub use points::{DataPoint, PointClass, PointLayer};
pub use surface::{display_value, FieldStatistics, ScalarField, SurfaceCell, SurfaceLayer};
