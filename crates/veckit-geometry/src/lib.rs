//! # VecKit Geometry
//!
//! 2D geometry primitives for the VecKit drawing engine.
//!
//! ## Features
//!
//! - **Point**: immutable 2D point value type
//! - **Reflection**: point reflection used by smooth curve commands
//! - **Rotation**: rotation about the origin
//! - **Arc math**: endpoint-to-center elliptical arc parameterization

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};
use tracing::debug;

// ==================== Point ====================

/// An immutable 2D point.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Reflect this point through `pivot`.
    ///
    /// Returns the point on the opposite side of `pivot`, at the same
    /// distance: `(2 * pivot.x - x, 2 * pivot.y - y)`. Smooth curve commands
    /// use this to synthesize the missing control point from the previous
    /// curve's control point.
    pub fn reflect_through(self, pivot: Point) -> Point {
        Point::new(2.0 * pivot.x - self.x, 2.0 * pivot.y - self.y)
    }

    /// Rotate this point about the origin by `angle` radians.
    pub fn rotate(self, angle: f32) -> Point {
        let (sin, cos) = angle.sin_cos();
        Point::new(self.x * cos - self.y * sin, self.y * cos + self.x * sin)
    }

    /// Distance from the origin.
    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

/// Angle between the positive x axis and `point`, as seen from `center`.
pub fn point_angle(center: Point, point: Point) -> f32 {
    (point.y - center.y).atan2(point.x - center.x)
}

// ==================== Elliptical Arc ====================

/// Center parameterization of an elliptical arc.
///
/// All coordinates live in the arc's local frame: the origin is the arc's
/// start point, the ellipse's x-axis rotation has been removed, and the
/// y axis is compressed by `radius_ratio` so the ellipse becomes a circle of
/// radius `radius`. A renderer replays the frame with translate(start),
/// rotate(`rotation`), scale(1, `radius_ratio`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CenterArc {
    /// Arc center in the local frame.
    pub center: Point,
    /// Circle radius in the local frame (rx, grown if the endpoints were out
    /// of reach).
    pub radius: f32,
    /// ry / rx.
    pub radius_ratio: f32,
    /// X-axis rotation in radians.
    pub rotation: f32,
    /// Angle from the center to the start point.
    pub start_angle: f32,
    /// Angle from the center to the end point.
    pub end_angle: f32,
}

/// Result of arc parameterization: a real arc, or a degenerate straight line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ArcGeometry {
    /// Degenerate arc: a straight line to the endpoint (relative to the start
    /// point).
    Line(Point),
    /// A drawable arc.
    Arc(CenterArc),
}

/// Convert an endpoint-parameterized elliptical arc to center parameters.
///
/// `end` is the arc's endpoint relative to its start point, `rotation` is the
/// x-axis rotation in radians. If either radius is zero the arc degenerates
/// to a straight line. Radii too small to span the endpoints are grown
/// uniformly to the minimum solvable value, never shrunk.
pub fn endpoint_to_center(
    end: Point,
    rx: f32,
    ry: f32,
    rotation: f32,
    large_arc: bool,
    sweep: bool,
) -> ArcGeometry {
    if rx == 0.0 || ry == 0.0 {
        return ArcGeometry::Line(end);
    }

    let radius_ratio = ry / rx;

    // Into the local frame: undo the rotation, then squash y so the ellipse
    // becomes a circle.
    let local = end.rotate(-rotation);
    let local = Point::new(local.x, local.y / radius_ratio);
    let chord_angle = point_angle(Point::ORIGIN, local);
    let chord_length = local.length();

    let radius = rx.max(chord_length / 2.0);
    if radius > rx {
        debug!(rx, grown = radius, "arc radii too small, growing to reach endpoints");
    }

    // Center via perpendicular bisector of the chord, offset sign chosen by
    // the flag combination.
    let cx = chord_length / 2.0;
    let cy = (radius * radius - cx * cx).sqrt();
    let cy = if large_arc == sweep { -cy } else { cy };

    let end_local = Point::new(chord_length, 0.0).rotate(chord_angle);
    let center = Point::new(cx, cy).rotate(chord_angle);

    ArcGeometry::Arc(CenterArc {
        center,
        radius,
        radius_ratio,
        rotation,
        start_angle: point_angle(center, Point::ORIGIN),
        end_angle: point_angle(center, end_local),
    })
}
