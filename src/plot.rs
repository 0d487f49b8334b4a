//! The interactive surface/scatter plot component.

use crate::config::PlotConfig;
use crate::core::{Camera, CameraController, ScalarRange};
use crate::event::{EventSubscription, PointerEvent, SharedEventSource};
use crate::paint::PaintSurface;
use crate::plots::{display_value, DataPoint, PointClass, PointLayer, ScalarField, SurfaceLayer};
use crate::styling::ColorMapper;
use glam::DVec2;
use thiserror::Error;

/// Errors surfaced by the plot component.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlotError {
    /// The supplied field does not match the configured grid size. The
    /// update is rejected wholesale; prior field and render state stay put.
    #[error("scalar field must be {expected}x{expected}, got {rows}x{cols}")]
    DimensionMismatch {
        expected: usize,
        rows: usize,
        cols: usize,
    },
    #[error("surface width must be nonzero")]
    ZeroWidth,
    #[error("need at least two samples per side, got {0}")]
    TooFewSamples(usize),
}

/// Static interaction hint painted under the surface.
const HINT_TEXT: &str = "drag to rotate";

/// Interactive pseudo-3D view of a scalar field with classified points.
///
/// The plot owns its drawing surface exclusively and repaints the whole
/// frame synchronously inside whichever call changed the state: a data
/// update or a pointer event. Rendering is idempotent; there is no partial
/// redraw and no retained frame state beyond the camera and the data layers.
pub struct OrbitPlot {
    config: PlotConfig,
    camera: Camera,
    controller: CameraController,
    mesh: SurfaceLayer,
    train: PointLayer,
    test: PointLayer,
    range: ScalarRange,
    surface: Box<dyn PaintSurface>,
    colors: Box<dyn ColorMapper>,
    _subscription: EventSubscription,
}

impl std::fmt::Debug for OrbitPlot {
    // Manual impl: the boxed `PaintSurface` and `ColorMapper` trait objects
    // carry no `Debug` bound, so they are elided.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrbitPlot")
            .field("config", &self.config)
            .field("camera", &self.camera)
            .field("controller", &self.controller)
            .field("mesh", &self.mesh)
            .field("train", &self.train)
            .field("test", &self.test)
            .field("range", &self.range)
            .finish_non_exhaustive()
    }
}

impl OrbitPlot {
    /// Build the plot over a host-allocated square surface, subscribe for
    /// pointer events, and paint the first frame.
    pub fn new(
        config: PlotConfig,
        surface: Box<dyn PaintSurface>,
        colors: Box<dyn ColorMapper>,
        events: &SharedEventSource,
    ) -> Result<Self, PlotError> {
        if config.width == 0 {
            return Err(PlotError::ZeroWidth);
        }
        if config.num_samples < 2 {
            return Err(PlotError::TooFewSamples(config.num_samples));
        }

        let side = f64::from(config.width);
        let mut plot = Self {
            camera: Camera::new(side, side),
            controller: CameraController::new(),
            mesh: SurfaceLayer::new(config.mesh_step),
            train: PointLayer::new(PointClass::Train),
            test: PointLayer::new(PointClass::Test),
            range: ScalarRange::default(),
            surface,
            colors,
            _subscription: EventSubscription::acquire(events),
            config,
        };
        log::debug!(
            target: "orbitplot",
            "plot created: {}px square, {} samples/side, mesh step {}",
            plot.config.width,
            plot.config.num_samples,
            plot.mesh.mesh_step
        );
        plot.render();
        Ok(plot)
    }

    /// Replace the train point set. Off-domain points are dropped, the
    /// scalar range re-derived, and the frame repainted.
    pub fn update_points(&mut self, points: Vec<DataPoint>) {
        self.train
            .replace(points, self.config.x_domain, self.config.y_domain);
        self.update_scalar_range();
        self.render();
    }

    /// Replace the test point set. Same treatment as [`Self::update_points`].
    pub fn update_test_points(&mut self, points: Vec<DataPoint>) {
        self.test
            .replace(points, self.config.x_domain, self.config.y_domain);
        self.update_scalar_range();
        self.render();
    }

    /// Replace the scalar field and display mode.
    ///
    /// The field must be exactly `num_samples` by `num_samples`; anything
    /// else is rejected without touching the current field, range, or frame.
    pub fn update_background(
        &mut self,
        field: ScalarField,
        discretize: bool,
    ) -> Result<(), PlotError> {
        let expected = self.config.num_samples;
        let rows = field.rows();
        let cols = field
            .row_lengths()
            .find(|&len| len != expected)
            .unwrap_or(expected);
        if rows != expected || cols != expected {
            log::debug!(
                target: "orbitplot",
                "rejected field: expected {expected}x{expected}, got {rows}x{cols}"
            );
            return Err(PlotError::DimensionMismatch {
                expected,
                rows,
                cols,
            });
        }

        self.mesh.replace(field, discretize);
        self.update_scalar_range();
        self.render();
        Ok(())
    }

    /// Feed one host pointer event. Returns whether the frame was repainted.
    pub fn handle_event(&mut self, event: PointerEvent) -> bool {
        match event {
            PointerEvent::Down { position } => {
                self.controller.mouse_press(position);
                false
            }
            PointerEvent::Move { position } => {
                if self.controller.mouse_move(position, &mut self.camera) {
                    self.render();
                    true
                } else {
                    false
                }
            }
            PointerEvent::Up => {
                self.controller.mouse_release();
                false
            }
        }
    }

    /// Repaint the whole frame from current state.
    pub fn render(&mut self) {
        let size = DVec2::new(self.camera.width, self.camera.height);
        self.surface
            .fill_rect(DVec2::ZERO, size, self.config.theme.background);

        if self.mesh.field().is_none() {
            self.draw_axes();
            log::trace!(target: "orbitplot", "rendered axes only (no field)");
            return;
        }

        self.draw_surface();
        self.draw_axes();
        self.draw_points(PointClass::Train);
        self.draw_points(PointClass::Test);
        self.surface.draw_text(
            HINT_TEXT,
            DVec2::new(8.0, self.camera.height - 8.0),
            self.config.theme.hint_color,
        );
    }

    /// Paint the tessellated field back-to-front.
    fn draw_surface(&mut self) {
        let mut cells = self.mesh.tessellate(
            &self.camera,
            self.config.x_domain,
            self.config.y_domain,
            self.range,
        );
        // Ascending depth puts the most distant cells first, so nearer
        // geometry paints over them.
        cells.sort_by(|a, b| a.depth.total_cmp(&b.depth));

        for cell in &cells {
            let mut fill = self.colors.map_value(self.range.normalize(cell.value));
            fill.w = self.config.theme.surface_alpha;
            let corners = cell.corners.map(|c| c.screen);
            self.surface.fill_quad(corners, fill);
            self.surface.stroke_quad(
                corners,
                self.config.theme.cell_stroke,
                self.config.theme.cell_stroke_width,
            );
        }
        log::trace!(target: "orbitplot", "painted {} surface cell(s)", cells.len());
    }

    /// Three segments from the cube's origin corner along x, y, and the
    /// scalar axis, each with its label.
    fn draw_axes(&mut self) {
        let origin = self.camera.project(-1.0, -1.0, -1.0);
        let axes = [
            (self.camera.project(1.0, -1.0, -1.0), &self.config.x_label),
            (self.camera.project(-1.0, 1.0, -1.0), &self.config.y_label),
            (
                self.camera.project(-1.0, -1.0, 1.0),
                &self.config.value_label,
            ),
        ];
        for (end, label) in axes {
            self.surface.stroke_line(
                origin.screen,
                end.screen,
                self.config.theme.axis_color,
                self.config.theme.axis_width,
            );
            self.surface.draw_text(
                label,
                end.screen + DVec2::new(4.0, -4.0),
                self.config.theme.label_color,
            );
        }
    }

    /// Paint one point set. Train markers fill with the mapped label color
    /// and take a dark outline; test markers fill white and take the mapped
    /// color as outline.
    fn draw_points(&mut self, class: PointClass) {
        let layer = match class {
            PointClass::Train => &self.train,
            PointClass::Test => &self.test,
        };
        let theme = &self.config.theme;
        for point in layer.points() {
            let value = display_value(point.label, self.mesh.discretize);
            let t = self.range.normalize(value);
            let projected = self.camera.project(
                self.config.x_domain.normalize(point.x),
                self.config.y_domain.normalize(point.y),
                t,
            );
            let mapped = self.colors.map_value(t);
            match class {
                PointClass::Train => {
                    self.surface
                        .fill_circle(projected.screen, theme.point_radius, mapped);
                    self.surface.stroke_circle(
                        projected.screen,
                        theme.point_radius,
                        theme.point_outline,
                        theme.point_outline_width,
                    );
                }
                PointClass::Test => {
                    self.surface.fill_circle(
                        projected.screen,
                        theme.point_radius,
                        theme.test_point_fill,
                    );
                    self.surface.stroke_circle(
                        projected.screen,
                        theme.point_radius,
                        mapped,
                        theme.point_outline_width,
                    );
                }
            }
        }
    }

    /// Re-derive the padded display range from the field and all point
    /// labels. Without a field the prior range is retained.
    fn update_scalar_range(&mut self) {
        let Some(field) = self.mesh.field() else {
            return;
        };
        let discretize = self.mesh.discretize;
        self.range = ScalarRange::from_values(
            field
                .iter()
                .chain(self.train.labels())
                .chain(self.test.labels())
                .map(|v| display_value(v, discretize)),
        );
        log::trace!(
            target: "orbitplot",
            "scalar range [{:.3}, {:.3}]",
            self.range.min,
            self.range.max
        );
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn config(&self) -> &PlotConfig {
        &self.config
    }

    pub fn scalar_range(&self) -> ScalarRange {
        self.range
    }

    pub fn field(&self) -> Option<&ScalarField> {
        self.mesh.field()
    }

    pub fn train_points(&self) -> &[DataPoint] {
        self.train.points()
    }

    pub fn test_points(&self) -> &[DataPoint] {
        self.test.points()
    }

    /// Whether a drag is in progress.
    pub fn dragging(&self) -> bool {
        self.controller.dragging
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::NullEventSource;
    use crate::paint::{PaintOp, RecordingSurface};
    use crate::styling::LinearColorMap;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn test_plot(num_samples: usize) -> (OrbitPlot, RecordingSurface) {
        let recorder = RecordingSurface::new();
        let events: SharedEventSource = Rc::new(RefCell::new(NullEventSource::default()));
        let config = PlotConfig {
            num_samples,
            ..PlotConfig::default()
        };
        let plot = OrbitPlot::new(
            config,
            Box::new(recorder.clone()),
            Box::new(LinearColorMap::default()),
            &events,
        )
        .unwrap();
        (plot, recorder)
    }

    #[test]
    fn test_initial_render_is_axes_only() {
        let (_plot, recorder) = test_plot(10);
        let ops = recorder.take_ops();
        assert!(matches!(ops[0], PaintOp::FillRect { .. }));
        let lines = ops.iter().filter(|op| matches!(op, PaintOp::StrokeLine { .. })).count();
        let quads = ops.iter().filter(|op| matches!(op, PaintOp::FillQuad { .. })).count();
        assert_eq!(lines, 3);
        assert_eq!(quads, 0);
    }

    #[test]
    fn test_construction_rejects_bad_config() {
        let events: SharedEventSource = Rc::new(RefCell::new(NullEventSource::default()));
        let zero = PlotConfig {
            width: 0,
            ..PlotConfig::default()
        };
        let err = OrbitPlot::new(
            zero,
            Box::new(RecordingSurface::new()),
            Box::new(LinearColorMap::default()),
            &events,
        )
        .unwrap_err();
        assert_eq!(err, PlotError::ZeroWidth);

        let sparse = PlotConfig {
            num_samples: 1,
            ..PlotConfig::default()
        };
        let err = OrbitPlot::new(
            sparse,
            Box::new(RecordingSurface::new()),
            Box::new(LinearColorMap::default()),
            &events,
        )
        .unwrap_err();
        assert_eq!(err, PlotError::TooFewSamples(1));
    }

    #[test]
    fn test_wrong_field_shape_is_rejected_without_painting() {
        let (mut plot, recorder) = test_plot(10);
        recorder.take_ops();

        let nine_by_ten = ScalarField::new(vec![vec![0.0; 10]; 9]);
        let err = plot.update_background(nine_by_ten, false).unwrap_err();
        assert_eq!(
            err,
            PlotError::DimensionMismatch {
                expected: 10,
                rows: 9,
                cols: 10
            }
        );
        assert!(plot.field().is_none());
        assert!(recorder.is_empty());
    }

    #[test]
    fn test_ragged_field_reports_offending_row() {
        let (mut plot, _recorder) = test_plot(3);
        let mut rows = vec![vec![0.0; 3]; 3];
        rows[1] = vec![0.0; 2];
        let err = plot.update_background(ScalarField::new(rows), false).unwrap_err();
        assert_eq!(
            err,
            PlotError::DimensionMismatch {
                expected: 3,
                rows: 3,
                cols: 2
            }
        );
    }

    #[test]
    fn test_full_frame_paints_in_layer_order() {
        let (mut plot, recorder) = test_plot(3);
        plot.update_background(ScalarField::new(vec![vec![0.5; 3]; 3]), false)
            .unwrap();
        plot.update_points(vec![DataPoint::new(0.0, 0.0, 1.0)]);

        let ops = recorder.take_ops();
        // Take the for-this-frame slice: everything after the last FillRect.
        let frame_start = ops
            .iter()
            .rposition(|op| matches!(op, PaintOp::FillRect { .. }))
            .unwrap();
        let frame = &ops[frame_start..];

        let first_quad = frame.iter().position(|op| matches!(op, PaintOp::FillQuad { .. }));
        let first_line = frame.iter().position(|op| matches!(op, PaintOp::StrokeLine { .. }));
        let first_circle = frame.iter().position(|op| matches!(op, PaintOp::FillCircle { .. }));
        assert!(first_quad.unwrap() < first_line.unwrap());
        assert!(first_line.unwrap() < first_circle.unwrap());
        // The hint label closes the frame.
        assert!(matches!(frame.last().unwrap(), PaintOp::Text { text, .. } if text == HINT_TEXT));
    }
}
