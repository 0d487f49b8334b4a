//! Sampled scalar field and its screen-space tessellation.

use crate::core::{AxisDomain, Camera, ProjectedPoint, ScalarRange};

/// Square grid of scalar samples over the data domain.
///
/// Row-major, indexed `[row][col]`, with rows running along the x domain and
/// columns along the y domain. The grid corner `(0,0)` sits at
/// `(x_domain.min, y_domain.min)`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarField {
    values: Vec<Vec<f64>>,
}

/// Aggregate numbers describing a field.
///
/// `min`/`max` cover finite samples only and are NaN when there are none.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldStatistics {
    pub rows: usize,
    pub cols: usize,
    pub finite_count: usize,
    pub min: f64,
    pub max: f64,
}

impl ScalarField {
    /// Wrap an existing grid of samples.
    pub fn new(values: Vec<Vec<f64>>) -> Self {
        Self { values }
    }

    /// Sample `f(x, y)` on an `n x n` grid spanning the given domains.
    pub fn from_fn<F>(n: usize, x_domain: AxisDomain, y_domain: AxisDomain, f: F) -> Self
    where
        F: Fn(f64, f64) -> f64,
    {
        if n == 0 {
            return Self { values: Vec::new() };
        }
        let last = (n - 1).max(1) as f64;
        let values = (0..n)
            .map(|i| {
                let x = x_domain.lerp(i as f64 / last);
                (0..n).map(|j| f(x, y_domain.lerp(j as f64 / last))).collect()
            })
            .collect();
        Self { values }
    }

    pub fn rows(&self) -> usize {
        self.values.len()
    }

    /// Length of the first row, or 0 for an empty grid.
    pub fn cols(&self) -> usize {
        self.values.first().map_or(0, Vec::len)
    }

    /// Lengths of every row, in order. Useful for shape validation.
    pub fn row_lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.values.iter().map(Vec::len)
    }

    pub fn value(&self, row: usize, col: usize) -> f64 {
        self.values[row][col]
    }

    /// All samples in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().flat_map(|row| row.iter().copied())
    }

    pub fn statistics(&self) -> FieldStatistics {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut finite_count = 0;
        for v in self.iter() {
            if v.is_finite() {
                finite_count += 1;
                min = min.min(v);
                max = max.max(v);
            }
        }
        if finite_count == 0 {
            min = f64::NAN;
            max = f64::NAN;
        }
        FieldStatistics {
            rows: self.rows(),
            cols: self.cols(),
            finite_count,
            min,
            max,
        }
    }
}

/// Transform applied to every sampled value and point label before display.
///
/// With `discretize` set, values collapse onto their sign (`+1` for `v >= 0`,
/// else `-1`), turning a regression surface into a two-class decision view.
pub fn display_value(v: f64, discretize: bool) -> f64 {
    if discretize {
        if v >= 0.0 {
            1.0
        } else {
            -1.0
        }
    } else {
        v
    }
}

/// One projected mesh quad.
///
/// Ephemeral: rebuilt on every render from the current field and camera.
#[derive(Debug, Clone)]
pub struct SurfaceCell {
    /// Corners in perimeter order, so the quad outline never self-crosses.
    pub corners: [ProjectedPoint; 4],
    /// Mean corner depth; the painter sorts ascending on this.
    pub depth: f64,
    /// Mean display value of the corners; drives the fill color.
    pub value: f64,
}

/// Height-field layer: the current scalar field plus its mesh settings.
#[derive(Debug, Clone)]
pub struct SurfaceLayer {
    field: Option<ScalarField>,
    /// Sign-collapse display values (see [`display_value`]).
    pub discretize: bool,
    /// Grid stride of the mesh. Larger is coarser and cheaper; never 0.
    pub mesh_step: usize,
}

impl SurfaceLayer {
    pub fn new(mesh_step: usize) -> Self {
        Self {
            field: None,
            discretize: false,
            mesh_step: mesh_step.max(1),
        }
    }

    pub fn field(&self) -> Option<&ScalarField> {
        self.field.as_ref()
    }

    /// Swap in a new field and display mode. Shape checking is the caller's
    /// contract; the layer stores what it is given.
    pub fn replace(&mut self, field: ScalarField, discretize: bool) {
        self.field = Some(field);
        self.discretize = discretize;
    }

    /// Build depth/value-averaged quads for the current camera.
    ///
    /// Cells tile the grid at `mesh_step`; the last `(n-1) % mesh_step` rows
    /// and columns fall outside the tiling and are not covered.
    pub fn tessellate(
        &self,
        camera: &Camera,
        x_domain: AxisDomain,
        y_domain: AxisDomain,
        range: ScalarRange,
    ) -> Vec<SurfaceCell> {
        let Some(field) = &self.field else {
            return Vec::new();
        };
        let n = field.rows();
        if n < 2 {
            return Vec::new();
        }
        let step = self.mesh_step.max(1);
        let last = (n - 1) as f64;
        let per_side = (n - 1) / step;
        let mut cells = Vec::with_capacity(per_side * per_side);

        let mut i = 0;
        while i + step < n {
            let mut j = 0;
            while j + step < n {
                let quad = [(i, j), (i + step, j), (i + step, j + step), (i, j + step)];
                let mut depth_sum = 0.0;
                let mut value_sum = 0.0;
                let corners = quad.map(|(ci, cj)| {
                    let v = display_value(field.value(ci, cj), self.discretize);
                    let x = x_domain.lerp(ci as f64 / last);
                    let y = y_domain.lerp(cj as f64 / last);
                    let projected = camera.project(
                        x_domain.normalize(x),
                        y_domain.normalize(y),
                        range.normalize(v),
                    );
                    value_sum += v;
                    depth_sum += projected.depth;
                    projected
                });
                cells.push(SurfaceCell {
                    corners,
                    depth: depth_sum / 4.0,
                    value: value_sum / 4.0,
                });
                j += step;
            }
            i += step;
        }
        log::trace!(
            target: "orbitplot",
            "tessellated {} cell(s) from a {}x{} field at step {}",
            cells.len(),
            n,
            n,
            step
        );
        cells
    }
}
