//! Data-domain normalization onto the unit plotting cube.
//!
//! Everything the projector sees lives in `[-1,1]`: axis coordinates are
//! mapped through their declared domain, scalar values through the derived
//! display range.

/// Inclusive data range of one spatial axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisDomain {
    pub min: f64,
    pub max: f64,
}

impl AxisDomain {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Width of the domain. Negative if the bounds are reversed.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Whether `value` falls inside the domain (inclusive on both ends).
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Position at parameter `t`, with `t=0` at `min` and `t=1` at `max`.
    pub fn lerp(&self, t: f64) -> f64 {
        self.min + t * self.span()
    }

    /// Linearly map `value` into `[-1,1]`.
    ///
    /// Values outside the domain map outside `[-1,1]`; a degenerate domain
    /// maps everything to 0.
    pub fn normalize(&self, value: f64) -> f64 {
        let span = self.span();
        if span.abs() < f64::EPSILON {
            return 0.0;
        }
        -1.0 + 2.0 * (value - self.min) / span
    }
}

/// Display range for scalar values, padded so extremes never sit on the
/// color ramp's endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalarRange {
    pub min: f64,
    pub max: f64,
}

impl Default for ScalarRange {
    fn default() -> Self {
        Self {
            min: -1.0,
            max: 1.0,
        }
    }
}

impl ScalarRange {
    /// Fraction of the raw width added as padding on each end.
    pub const PADDING: f64 = 0.08;

    /// Widths below this are treated as degenerate.
    const DEGENERATE_EPS: f64 = 1e-9;

    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Derive a padded range from raw display values.
    ///
    /// Non-finite values are skipped. No finite values at all falls back to
    /// `[-1,1]`; a degenerate spread is widened by 1 on each side so the
    /// range stays strictly ordered.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for v in values {
            if v.is_finite() {
                min = min.min(v);
                max = max.max(v);
            }
        }
        if min > max {
            return Self::default();
        }
        if max - min < Self::DEGENERATE_EPS {
            Self {
                min: min - 1.0,
                max: max + 1.0,
            }
        } else {
            let pad = Self::PADDING * (max - min);
            Self {
                min: min - pad,
                max: max + pad,
            }
        }
    }

    /// Clamp `value` into the range, then map it linearly into `[-1,1]`.
    ///
    /// A degenerate range maps everything to 0.
    pub fn normalize(&self, value: f64) -> f64 {
        let width = self.max - self.min;
        if width.abs() < Self::DEGENERATE_EPS {
            return 0.0;
        }
        let v = value.clamp(self.min, self.max);
        -1.0 + 2.0 * (v - self.min) / width
    }
}
