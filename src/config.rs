//! Construction-time options for the plot.

use crate::core::AxisDomain;
use crate::styling::PlotTheme;

/// Options consumed by [`crate::OrbitPlot::new`].
///
/// The drawing surface is square, `width` by `width` logical pixels. Domains
/// bound the data the plot will accept; off-domain points are dropped on
/// update.
#[derive(Debug, Clone)]
pub struct PlotConfig {
    /// Logical side length of the square surface, in pixels.
    pub width: u32,
    /// Samples per side of the scalar field grid.
    pub num_samples: usize,
    pub x_domain: AxisDomain,
    pub y_domain: AxisDomain,
    /// Device pixel density hint for hosts that allocate backing stores.
    /// The plot itself paints in logical pixels.
    pub pixel_ratio: f64,
    /// Grid stride of the surface mesh. Larger is coarser and cheaper.
    pub mesh_step: usize,
    pub x_label: String,
    pub y_label: String,
    /// Label of the vertical (scalar) axis.
    pub value_label: String,
    pub theme: PlotTheme,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 300,
            num_samples: 50,
            x_domain: AxisDomain::new(-6.0, 6.0),
            y_domain: AxisDomain::new(-6.0, 6.0),
            pixel_ratio: 1.0,
            mesh_step: 2,
            x_label: "x".to_string(),
            y_label: "y".to_string(),
            value_label: "f".to_string(),
            theme: PlotTheme::default(),
        }
    }
}

impl PlotConfig {
    pub fn new(width: u32, num_samples: usize, x_domain: AxisDomain, y_domain: AxisDomain) -> Self {
        Self {
            width,
            num_samples,
            x_domain,
            y_domain,
            ..Self::default()
        }
    }

    pub fn with_mesh_step(mut self, mesh_step: usize) -> Self {
        self.mesh_step = mesh_step.max(1);
        self
    }

    pub fn with_pixel_ratio(mut self, pixel_ratio: f64) -> Self {
        self.pixel_ratio = pixel_ratio;
        self
    }

    pub fn with_labels(
        mut self,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
        value_label: impl Into<String>,
    ) -> Self {
        self.x_label = x_label.into();
        self.y_label = y_label.into();
        self.value_label = value_label.into();
        self
    }

    pub fn with_theme(mut self, theme: PlotTheme) -> Self {
        self.theme = theme;
        self
    }
}
