//! Paint surface that records calls instead of rasterizing.

use super::PaintSurface;
use glam::{DVec2, Vec4};
use std::cell::RefCell;
use std::rc::Rc;

/// One recorded paint call, field-for-field what the surface received.
#[derive(Debug, Clone, PartialEq)]
pub enum PaintOp {
    FillRect {
        min: DVec2,
        size: DVec2,
        color: Vec4,
    },
    FillQuad {
        corners: [DVec2; 4],
        color: Vec4,
    },
    StrokeQuad {
        corners: [DVec2; 4],
        color: Vec4,
        width: f64,
    },
    FillCircle {
        center: DVec2,
        radius: f64,
        color: Vec4,
    },
    StrokeCircle {
        center: DVec2,
        radius: f64,
        color: Vec4,
        width: f64,
    },
    StrokeLine {
        from: DVec2,
        to: DVec2,
        color: Vec4,
        width: f64,
    },
    Text {
        text: String,
        pos: DVec2,
        color: Vec4,
    },
}

/// In-memory [`PaintSurface`] that appends every call to an op log.
///
/// Clones share the same log, so a host (or test) can keep one handle while
/// the plot owns another and still read the stream the plot produced.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    ops: Rc<RefCell<Vec<PaintOp>>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the calls recorded so far.
    pub fn ops(&self) -> Vec<PaintOp> {
        self.ops.borrow().clone()
    }

    /// Drain the log, returning the calls recorded since the last drain.
    pub fn take_ops(&self) -> Vec<PaintOp> {
        self.ops.borrow_mut().drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.ops.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.borrow().is_empty()
    }

    fn push(&self, op: PaintOp) {
        self.ops.borrow_mut().push(op);
    }
}

impl PaintSurface for RecordingSurface {
    fn fill_rect(&mut self, min: DVec2, size: DVec2, color: Vec4) {
        self.push(PaintOp::FillRect { min, size, color });
    }

    fn fill_quad(&mut self, corners: [DVec2; 4], color: Vec4) {
        self.push(PaintOp::FillQuad { corners, color });
    }

    fn stroke_quad(&mut self, corners: [DVec2; 4], color: Vec4, width: f64) {
        self.push(PaintOp::StrokeQuad {
            corners,
            color,
            width,
        });
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Vec4) {
        self.push(PaintOp::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn stroke_circle(&mut self, center: DVec2, radius: f64, color: Vec4, width: f64) {
        self.push(PaintOp::StrokeCircle {
            center,
            radius,
            color,
            width,
        });
    }

    fn stroke_line(&mut self, from: DVec2, to: DVec2, color: Vec4, width: f64) {
        self.push(PaintOp::StrokeLine {
            from,
            to,
            color,
            width,
        });
    }

    fn draw_text(&mut self, text: &str, pos: DVec2, color: Vec4) {
        self.push(PaintOp::Text {
            text: text.to_string(),
            pos,
            color,
        });
    }
}
