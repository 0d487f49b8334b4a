//! Classified point sets.

use crate::core::AxisDomain;
use serde::{Deserialize, Serialize};

/// Role of a point set in the view.
///
/// Train markers are filled in the mapped label color; test markers are
/// white with a colored outline, so held-out data reads apart at a glance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointClass {
    Train,
    Test,
}

/// A labeled 2D sample in data coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
    /// Scalar label, typically in `[-1,1]`.
    pub label: f64,
}

impl DataPoint {
    pub fn new(x: f64, y: f64, label: f64) -> Self {
        Self { x, y, label }
    }
}

/// One stored point set.
///
/// Replacement is wholesale and last-writer-wins; points outside the plot's
/// domain are dropped at the door so everything stored is renderable.
#[derive(Debug, Clone)]
pub struct PointLayer {
    pub class: PointClass,
    points: Vec<DataPoint>,
}

impl PointLayer {
    pub fn new(class: PointClass) -> Self {
        Self {
            class,
            points: Vec::new(),
        }
    }

    /// Replace the stored set with `points`, keeping only those inside the
    /// given domains.
    pub fn replace(&mut self, mut points: Vec<DataPoint>, x_domain: AxisDomain, y_domain: AxisDomain) {
        let received = points.len();
        points.retain(|p| x_domain.contains(p.x) && y_domain.contains(p.y));
        if points.len() < received {
            log::debug!(
                target: "orbitplot",
                "dropped {} off-domain point(s) from a {:?} set of {}",
                received - points.len(),
                self.class,
                received
            );
        }
        self.points = points;
    }

    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    /// Labels of the stored points, in storage order.
    pub fn labels(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.label)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_filters_off_domain_points() {
        let domain = AxisDomain::new(-6.0, 6.0);
        let mut layer = PointLayer::new(PointClass::Train);
        layer.replace(
            vec![
                DataPoint::new(0.0, 0.0, 1.0),
                DataPoint::new(7.0, 0.0, 1.0),
                DataPoint::new(0.0, -6.5, -1.0),
                DataPoint::new(-6.0, 6.0, -1.0),
            ],
            domain,
            domain,
        );
        assert_eq!(layer.len(), 2);
        assert!(layer.points().iter().all(|p| domain.contains(p.x) && domain.contains(p.y)));
    }

    #[test]
    fn test_replace_is_wholesale() {
        let domain = AxisDomain::new(-1.0, 1.0);
        let mut layer = PointLayer::new(PointClass::Test);
        layer.replace(vec![DataPoint::new(0.5, 0.5, 1.0)], domain, domain);
        layer.replace(vec![DataPoint::new(-0.5, 0.0, -1.0)], domain, domain);
        assert_eq!(layer.len(), 1);
        assert_eq!(layer.points()[0].x, -0.5);
    }

    #[test]
    fn test_point_ingest_from_json() {
        let raw = r#"[{"x":1.5,"y":-2.0,"label":1.0},{"x":0.0,"y":0.0,"label":-1.0}]"#;
        let points: Vec<DataPoint> = serde_json::from_str(raw).unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0], DataPoint::new(1.5, -2.0, 1.0));
    }
}
