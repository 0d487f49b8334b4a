//! Styling: theme palette and color mapping.

pub mod colormap;
pub mod theme;

pub use colormap::{ColorMapper, LinearColorMap};
pub use theme::PlotTheme;
