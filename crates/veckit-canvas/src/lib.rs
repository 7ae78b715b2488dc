//! # VecKit Canvas
//!
//! Drawing context abstraction for the VecKit drawing engine.
//!
//! ## Features
//!
//! - **DrawingContext**: the capability set a rendering backend must provide
//!   (move/line/curve/arc primitives, transform stack, fill and stroke)
//! - **Transform**: 2D affine matrix with inversion
//! - **RecordingContext**: a backend that logs every call as a [`DrawOp`]
//!   while tracking the pen position through the transform stack
//!
//! ## Architecture
//!
//! ```text
//! path / shape interpreters
//!    └── DrawingContext (trait)
//!           └── RecordingContext
//!                  ├── DrawOp log
//!                  ├── Transform Stack
//!                  └── Pen Position
//! ```

use serde::{Deserialize, Serialize};
use tracing::warn;
use veckit_geometry::Point;

// ==================== Transform ====================

/// 2D affine transformation matrix.
/// Represents: [a c e]
///             [b d f]
///             [0 0 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
    pub f: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    /// Create identity transform.
    pub fn identity() -> Self {
        Self {
            a: 1.0, b: 0.0,
            c: 0.0, d: 1.0,
            e: 0.0, f: 0.0,
        }
    }

    /// Create translation transform.
    pub fn translate(tx: f32, ty: f32) -> Self {
        Self {
            a: 1.0, b: 0.0,
            c: 0.0, d: 1.0,
            e: tx, f: ty,
        }
    }

    /// Create scale transform.
    pub fn scale(sx: f32, sy: f32) -> Self {
        Self {
            a: sx, b: 0.0,
            c: 0.0, d: sy,
            e: 0.0, f: 0.0,
        }
    }

    /// Create rotation transform (radians).
    pub fn rotate(angle: f32) -> Self {
        let cos = angle.cos();
        let sin = angle.sin();
        Self {
            a: cos, b: sin,
            c: -sin, d: cos,
            e: 0.0, f: 0.0,
        }
    }

    /// Multiply two transforms.
    pub fn multiply(&self, other: &Transform) -> Self {
        Transform {
            a: self.a * other.a + self.c * other.b,
            b: self.b * other.a + self.d * other.b,
            c: self.a * other.c + self.c * other.d,
            d: self.b * other.c + self.d * other.d,
            e: self.a * other.e + self.c * other.f + self.e,
            f: self.b * other.e + self.d * other.f + self.f,
        }
    }

    /// Transform a point.
    pub fn apply(&self, point: Point) -> Point {
        Point::new(
            self.a * point.x + self.c * point.y + self.e,
            self.b * point.x + self.d * point.y + self.f,
        )
    }

    /// Invert the transform. Returns `None` for a singular matrix.
    pub fn invert(&self) -> Option<Transform> {
        let det = self.a * self.d - self.b * self.c;
        if det == 0.0 {
            return None;
        }
        let inv_det = 1.0 / det;
        Some(Transform {
            a: self.d * inv_det,
            b: -self.b * inv_det,
            c: -self.c * inv_det,
            d: self.a * inv_det,
            e: (self.c * self.f - self.d * self.e) * inv_det,
            f: (self.b * self.e - self.a * self.f) * inv_det,
        })
    }
}

// ==================== Draw Ops ====================

/// One recorded drawing-context call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawOp {
    MoveTo { x: f32, y: f32 },
    RelMoveTo { dx: f32, dy: f32 },
    LineTo { x: f32, y: f32 },
    RelLineTo { dx: f32, dy: f32 },
    CurveTo { c1: Point, c2: Point, end: Point },
    RelCurveTo { c1: Point, c2: Point, end: Point },
    Arc { center: Point, radius: f32, start_angle: f32, end_angle: f32 },
    ArcNegative { center: Point, radius: f32, start_angle: f32, end_angle: f32 },
    Rectangle { x: f32, y: f32, width: f32, height: f32 },
    ClosePath,
    Save,
    Restore,
    Translate { tx: f32, ty: f32 },
    Rotate { angle: f32 },
    Scale { sx: f32, sy: f32 },
    SetSourceRgb { r: f32, g: f32, b: f32 },
    SetLineWidth { width: f32 },
    Fill,
    FillPreserve,
    Stroke,
}

// ==================== Drawing Context ====================

/// The drawing capability set consumed by the VecKit interpreters.
///
/// Coordinates are in user space under the context's current transform.
/// `rel_*` variants take offsets from the current pen position. The context
/// owns the pen position; [`DrawingContext::current_point`] is the source of
/// truth for it.
pub trait DrawingContext {
    fn move_to(&mut self, x: f32, y: f32);
    fn rel_move_to(&mut self, dx: f32, dy: f32);
    fn line_to(&mut self, x: f32, y: f32);
    fn rel_line_to(&mut self, dx: f32, dy: f32);

    /// Draw a cubic bezier to `end` with control points `c1` and `c2`.
    fn curve_to(&mut self, c1: Point, c2: Point, end: Point);
    /// Like [`DrawingContext::curve_to`], with all points relative to the
    /// current pen position.
    fn rel_curve_to(&mut self, c1: Point, c2: Point, end: Point);

    /// Draw a circular arc in the positive angle direction.
    fn arc(&mut self, center: Point, radius: f32, start_angle: f32, end_angle: f32);
    /// Draw a circular arc in the negative angle direction.
    fn arc_negative(&mut self, center: Point, radius: f32, start_angle: f32, end_angle: f32);

    fn rectangle(&mut self, x: f32, y: f32, width: f32, height: f32);
    fn close_path(&mut self);

    /// Current pen position in user space. The origin if no pen position has
    /// been established yet.
    fn current_point(&self) -> Point;

    /// Push the transform state. Each `save` must be paired with a
    /// [`DrawingContext::restore`].
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, tx: f32, ty: f32);
    fn rotate(&mut self, angle: f32);
    fn scale(&mut self, sx: f32, sy: f32);

    fn set_source_rgb(&mut self, r: f32, g: f32, b: f32);
    fn set_line_width(&mut self, width: f32);

    /// Fill the current path and clear it.
    fn fill(&mut self);
    /// Fill the current path, keeping it for a following stroke.
    fn fill_preserve(&mut self);
    /// Stroke the current path and clear it.
    fn stroke(&mut self);
}

// ==================== Recording Context ====================

/// A [`DrawingContext`] that records every call instead of painting.
///
/// The pen position is tracked in device space and reported through the
/// inverse of the current transform, so relative commands keep working inside
/// a save/translate/rotate/scale scope exactly as they would against a real
/// backend.
#[derive(Debug, Default)]
pub struct RecordingContext {
    ops: Vec<DrawOp>,
    ctm: Transform,
    saved: Vec<Transform>,
    /// Pen position in device space.
    pen: Option<Point>,
    /// First point of the current subpath, in device space.
    subpath_start: Option<Point>,
}

impl RecordingContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded call log, in issue order.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Consume the context, returning the recorded call log.
    pub fn into_ops(self) -> Vec<DrawOp> {
        self.ops
    }

    fn to_device(&self, point: Point) -> Point {
        self.ctm.apply(point)
    }

    fn to_user(&self, point: Point) -> Point {
        match self.ctm.invert() {
            Some(inverse) => inverse.apply(point),
            None => {
                warn!("current transform is singular, reporting device coordinates");
                point
            }
        }
    }

    /// Move the pen to `point` (user space) without starting a subpath.
    fn track_pen(&mut self, point: Point) {
        self.pen = Some(self.to_device(point));
        if self.subpath_start.is_none() {
            self.subpath_start = self.pen;
        }
    }

    fn clear_path(&mut self) {
        self.pen = None;
        self.subpath_start = None;
    }
}

impl DrawingContext for RecordingContext {
    fn move_to(&mut self, x: f32, y: f32) {
        self.ops.push(DrawOp::MoveTo { x, y });
        let device = self.to_device(Point::new(x, y));
        self.pen = Some(device);
        self.subpath_start = Some(device);
    }

    fn rel_move_to(&mut self, dx: f32, dy: f32) {
        self.ops.push(DrawOp::RelMoveTo { dx, dy });
        let target = self.current_point() + Point::new(dx, dy);
        let device = self.to_device(target);
        self.pen = Some(device);
        self.subpath_start = Some(device);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.ops.push(DrawOp::LineTo { x, y });
        self.track_pen(Point::new(x, y));
    }

    fn rel_line_to(&mut self, dx: f32, dy: f32) {
        self.ops.push(DrawOp::RelLineTo { dx, dy });
        let target = self.current_point() + Point::new(dx, dy);
        self.track_pen(target);
    }

    fn curve_to(&mut self, c1: Point, c2: Point, end: Point) {
        self.ops.push(DrawOp::CurveTo { c1, c2, end });
        self.track_pen(end);
    }

    fn rel_curve_to(&mut self, c1: Point, c2: Point, end: Point) {
        self.ops.push(DrawOp::RelCurveTo { c1, c2, end });
        let target = self.current_point() + end;
        self.track_pen(target);
    }

    fn arc(&mut self, center: Point, radius: f32, start_angle: f32, end_angle: f32) {
        self.ops.push(DrawOp::Arc { center, radius, start_angle, end_angle });
        let end = center + Point::new(radius * end_angle.cos(), radius * end_angle.sin());
        self.track_pen(end);
    }

    fn arc_negative(&mut self, center: Point, radius: f32, start_angle: f32, end_angle: f32) {
        self.ops.push(DrawOp::ArcNegative { center, radius, start_angle, end_angle });
        let end = center + Point::new(radius * end_angle.cos(), radius * end_angle.sin());
        self.track_pen(end);
    }

    fn rectangle(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.ops.push(DrawOp::Rectangle { x, y, width, height });
        let device = self.to_device(Point::new(x, y));
        self.pen = Some(device);
        self.subpath_start = Some(device);
    }

    fn close_path(&mut self) {
        self.ops.push(DrawOp::ClosePath);
        self.pen = self.subpath_start;
    }

    fn current_point(&self) -> Point {
        match self.pen {
            Some(device) => self.to_user(device),
            None => Point::ORIGIN,
        }
    }

    fn save(&mut self) {
        self.ops.push(DrawOp::Save);
        self.saved.push(self.ctm);
    }

    fn restore(&mut self) {
        self.ops.push(DrawOp::Restore);
        match self.saved.pop() {
            Some(ctm) => self.ctm = ctm,
            None => warn!("restore without matching save"),
        }
    }

    fn translate(&mut self, tx: f32, ty: f32) {
        self.ops.push(DrawOp::Translate { tx, ty });
        self.ctm = self.ctm.multiply(&Transform::translate(tx, ty));
    }

    fn rotate(&mut self, angle: f32) {
        self.ops.push(DrawOp::Rotate { angle });
        self.ctm = self.ctm.multiply(&Transform::rotate(angle));
    }

    fn scale(&mut self, sx: f32, sy: f32) {
        self.ops.push(DrawOp::Scale { sx, sy });
        self.ctm = self.ctm.multiply(&Transform::scale(sx, sy));
    }

    fn set_source_rgb(&mut self, r: f32, g: f32, b: f32) {
        self.ops.push(DrawOp::SetSourceRgb { r, g, b });
    }

    fn set_line_width(&mut self, width: f32) {
        self.ops.push(DrawOp::SetLineWidth { width });
    }

    fn fill(&mut self) {
        self.ops.push(DrawOp::Fill);
        self.clear_path();
    }

    fn fill_preserve(&mut self) {
        self.ops.push(DrawOp::FillPreserve);
    }

    fn stroke(&mut self) {
        self.ops.push(DrawOp::Stroke);
        self.clear_path();
    }
}
