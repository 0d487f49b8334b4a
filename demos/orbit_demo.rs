//! Headless demo: build a plot over a recording surface, feed it a saddle
//! field and some labeled points, orbit the camera with a simulated drag,
//! and report what was painted.
//!
//! Run with `RUST_LOG=orbitplot=debug cargo run --example orbit_demo` to see
//! the component's own logging alongside the summary.

use glam::DVec2;
use orbitplot::{
    AxisDomain, DataPoint, LinearColorMap, NullEventSource, OrbitPlot, PaintOp, PlotConfig,
    PointerEvent, RecordingSurface, ScalarField, SharedEventSource,
};
use std::cell::RefCell;
use std::error::Error;
use std::rc::Rc;

fn count(ops: &[PaintOp], pred: fn(&PaintOp) -> bool) -> usize {
    ops.iter().filter(|op| pred(op)).count()
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let domain = AxisDomain::new(-6.0, 6.0);
    let config = PlotConfig::new(300, 50, domain, domain).with_labels("x1", "x2", "score");

    let recorder = RecordingSurface::new();
    let events: SharedEventSource = Rc::new(RefCell::new(NullEventSource::default()));
    let mut plot = OrbitPlot::new(
        config,
        Box::new(recorder.clone()),
        Box::new(LinearColorMap::default()),
        &events,
    )?;

    // A saddle: positive along one diagonal, negative along the other.
    let field = ScalarField::from_fn(50, domain, domain, |x, y| (x * y / 12.0).tanh());
    let stats = field.statistics();
    println!(
        "field: {}x{} samples, values in [{:.2}, {:.2}]",
        stats.rows, stats.cols, stats.min, stats.max
    );
    plot.update_background(field, false)?;

    plot.update_points(vec![
        DataPoint::new(-4.0, -3.5, 1.0),
        DataPoint::new(3.0, 4.5, 1.0),
        DataPoint::new(-3.5, 4.0, -1.0),
        DataPoint::new(4.0, -3.0, -1.0),
    ]);
    plot.update_test_points(vec![
        DataPoint::new(1.0, 1.5, 1.0),
        DataPoint::new(-1.5, 2.0, -1.0),
    ]);

    // Orbit roughly a quarter turn with a horizontal drag in ten steps.
    recorder.take_ops();
    plot.handle_event(PointerEvent::Down {
        position: DVec2::new(150.0, 150.0),
    });
    for step in 1..=10 {
        plot.handle_event(PointerEvent::Move {
            position: DVec2::new(150.0 + f64::from(step) * 15.7, 150.0),
        });
    }
    plot.handle_event(PointerEvent::Up);

    let ops = recorder.take_ops();
    let frame_start = ops
        .iter()
        .rposition(|op| matches!(op, PaintOp::FillRect { .. }))
        .unwrap_or(0);
    let frame = &ops[frame_start..];
    println!(
        "last frame: {} surface cells, {} axis lines, {} markers, {} text labels",
        count(frame, |op| matches!(op, PaintOp::FillQuad { .. })),
        count(frame, |op| matches!(op, PaintOp::StrokeLine { .. })),
        count(frame, |op| matches!(op, PaintOp::FillCircle { .. })),
        count(frame, |op| matches!(op, PaintOp::Text { .. })),
    );

    let range = plot.scalar_range();
    println!(
        "camera: azimuth {:.1} deg, elevation {:.1} deg; display range [{:.2}, {:.2}]",
        plot.camera().azimuth.to_degrees(),
        plot.camera().elevation.to_degrees(),
        range.min,
        range.max
    );

    Ok(())
}
