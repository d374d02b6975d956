//! Geometry primitives for meander construction.
//!
//! A path is an ordered sequence of [`PathPrimitive`]s, each either a circular
//! arc or a straight segment. Arcs are defined by center, radius, start/end
//! angles in radians, and a sweep direction; traversal runs from the start
//! angle to the end angle in that direction. Both primitive kinds expose
//! endpoint and tangent queries so builders can maintain tangent continuity.

use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Tolerance for geometric comparisons, in millimeters (radians for angles).
pub const EPSILON: f64 = 1e-6;

/// A 2D point in board coordinates, millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point with the given X and Y coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Calculates the distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Whether this point coincides with another within [`EPSILON`].
    pub fn almost_eq(&self, other: &Point) -> bool {
        self.distance_to(other) < EPSILON
    }

    /// Rotates this point about the origin by `angle` radians, then shifts it
    /// by `offset`. Used to place local-frame geometry into board coordinates.
    pub fn placed(&self, angle: f64, offset: Point) -> Point {
        let (sin_a, cos_a) = angle.sin_cos();
        Point {
            x: offset.x + self.x * cos_a - self.y * sin_a,
            y: offset.y + self.x * sin_a + self.y * cos_a,
        }
    }

    /// Reflects this point across the line through `origin` at `axis_angle`.
    pub fn mirrored(&self, origin: Point, axis_angle: f64) -> Point {
        let (sin_a, cos_a) = (2.0 * axis_angle).sin_cos();
        let dx = self.x - origin.x;
        let dy = self.y - origin.y;
        Point {
            x: origin.x + dx * cos_a + dy * sin_a,
            y: origin.y + dx * sin_a - dy * cos_a,
        }
    }
}

/// Sweep direction of an arc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArcDirection {
    /// Clockwise: the traversal angle decreases.
    Cw,
    /// Counter-clockwise: the traversal angle increases.
    Ccw,
}

impl ArcDirection {
    /// The opposite sweep direction.
    pub fn reversed(self) -> Self {
        match self {
            ArcDirection::Cw => ArcDirection::Ccw,
            ArcDirection::Ccw => ArcDirection::Cw,
        }
    }
}

/// A circular arc traversed from `start_angle` to `end_angle` in `direction`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcSegment {
    pub center: Point,
    pub radius: f64,
    /// Angle of the traversal start point, radians from the +x axis.
    pub start_angle: f64,
    /// Angle of the traversal end point, radians from the +x axis.
    pub end_angle: f64,
    pub direction: ArcDirection,
}

impl ArcSegment {
    /// Creates a new arc segment.
    pub fn new(
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        direction: ArcDirection,
    ) -> Self {
        debug_assert!(
            radius.is_finite() && radius > 0.0,
            "arc radius must be positive and finite, got {radius}"
        );
        Self {
            center,
            radius,
            start_angle,
            end_angle,
            direction,
        }
    }

    /// The point on the arc's circle at the given angle.
    pub fn point_at(&self, angle: f64) -> Point {
        let (sin_a, cos_a) = angle.sin_cos();
        Point {
            x: self.center.x + self.radius * cos_a,
            y: self.center.y + self.radius * sin_a,
        }
    }

    /// The traversal start point.
    pub fn start_point(&self) -> Point {
        self.point_at(self.start_angle)
    }

    /// The traversal end point.
    pub fn end_point(&self) -> Point {
        self.point_at(self.end_angle)
    }

    /// The point halfway along the traversal. Together with the start and end
    /// points this gives the three-point arc form some hosts consume.
    pub fn mid_point(&self) -> Point {
        let half = self.sweep_angle() / 2.0;
        let angle = match self.direction {
            ArcDirection::Ccw => self.start_angle + half,
            ArcDirection::Cw => self.start_angle - half,
        };
        self.point_at(angle)
    }

    /// Magnitude of the swept angle, in `(0, TAU]` for non-degenerate arcs.
    pub fn sweep_angle(&self) -> f64 {
        let raw = match self.direction {
            ArcDirection::Ccw => self.end_angle - self.start_angle,
            ArcDirection::Cw => self.start_angle - self.end_angle,
        };
        raw.rem_euclid(TAU)
    }

    /// Arc length along the traversal.
    pub fn length(&self) -> f64 {
        self.radius * self.sweep_angle()
    }

    /// Unit tangent of the traversal at the given angle.
    fn tangent_at(&self, angle: f64) -> Point {
        let (sin_a, cos_a) = angle.sin_cos();
        match self.direction {
            ArcDirection::Ccw => Point::new(-sin_a, cos_a),
            ArcDirection::Cw => Point::new(sin_a, -cos_a),
        }
    }

    /// Unit tangent at the traversal start point.
    pub fn start_tangent(&self) -> Point {
        self.tangent_at(self.start_angle)
    }

    /// Unit tangent at the traversal end point.
    pub fn end_tangent(&self) -> Point {
        self.tangent_at(self.end_angle)
    }

    /// The same arc traversed in the opposite direction.
    pub fn reversed(&self) -> Self {
        Self {
            center: self.center,
            radius: self.radius,
            start_angle: self.end_angle,
            end_angle: self.start_angle,
            direction: self.direction.reversed(),
        }
    }

    /// Rotates the arc about the origin by `angle`, then shifts it by `offset`.
    pub fn placed(&self, angle: f64, offset: Point) -> Self {
        Self {
            center: self.center.placed(angle, offset),
            radius: self.radius,
            start_angle: self.start_angle + angle,
            end_angle: self.end_angle + angle,
            direction: self.direction,
        }
    }

    /// Reflects the arc across the line through `origin` at `axis_angle`.
    /// Traversal order is preserved; the sweep direction flips.
    pub fn mirrored(&self, origin: Point, axis_angle: f64) -> Self {
        Self {
            center: self.center.mirrored(origin, axis_angle),
            radius: self.radius,
            start_angle: 2.0 * axis_angle - self.start_angle,
            end_angle: 2.0 * axis_angle - self.end_angle,
            direction: self.direction.reversed(),
        }
    }
}

/// A straight segment from `from` to `to`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub from: Point,
    pub to: Point,
}

impl LineSegment {
    /// Creates a new line segment.
    pub fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }

    /// Segment length.
    pub fn length(&self) -> f64 {
        self.from.distance_to(&self.to)
    }

    /// Unit direction from `from` to `to`. Degenerate segments yield the zero
    /// vector; builders never produce them.
    pub fn direction(&self) -> Point {
        let len = self.length();
        if len == 0.0 {
            return Point::new(0.0, 0.0);
        }
        Point::new((self.to.x - self.from.x) / len, (self.to.y - self.from.y) / len)
    }

    /// The same segment traversed in the opposite direction.
    pub fn reversed(&self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }

    /// Rotates the segment about the origin by `angle`, then shifts it by
    /// `offset`.
    pub fn placed(&self, angle: f64, offset: Point) -> Self {
        Self {
            from: self.from.placed(angle, offset),
            to: self.to.placed(angle, offset),
        }
    }

    /// Reflects the segment across the line through `origin` at `axis_angle`.
    pub fn mirrored(&self, origin: Point, axis_angle: f64) -> Self {
        Self {
            from: self.from.mirrored(origin, axis_angle),
            to: self.to.mirrored(origin, axis_angle),
        }
    }
}

/// A path primitive: a circular arc or a straight segment. Carries no width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathPrimitive {
    Arc(ArcSegment),
    Line(LineSegment),
}

impl PathPrimitive {
    /// The traversal start point.
    pub fn start_point(&self) -> Point {
        match self {
            PathPrimitive::Arc(arc) => arc.start_point(),
            PathPrimitive::Line(line) => line.from,
        }
    }

    /// The traversal end point.
    pub fn end_point(&self) -> Point {
        match self {
            PathPrimitive::Arc(arc) => arc.end_point(),
            PathPrimitive::Line(line) => line.to,
        }
    }

    /// Unit tangent at the traversal start point.
    pub fn start_tangent(&self) -> Point {
        match self {
            PathPrimitive::Arc(arc) => arc.start_tangent(),
            PathPrimitive::Line(line) => line.direction(),
        }
    }

    /// Unit tangent at the traversal end point.
    pub fn end_tangent(&self) -> Point {
        match self {
            PathPrimitive::Arc(arc) => arc.end_tangent(),
            PathPrimitive::Line(line) => line.direction(),
        }
    }

    /// Length along the traversal.
    pub fn length(&self) -> f64 {
        match self {
            PathPrimitive::Arc(arc) => arc.length(),
            PathPrimitive::Line(line) => line.length(),
        }
    }

    /// The same primitive traversed in the opposite direction.
    pub fn reversed(&self) -> Self {
        match self {
            PathPrimitive::Arc(arc) => PathPrimitive::Arc(arc.reversed()),
            PathPrimitive::Line(line) => PathPrimitive::Line(line.reversed()),
        }
    }

    /// Rotates the primitive about the origin by `angle`, then shifts it by
    /// `offset`.
    pub fn placed(&self, angle: f64, offset: Point) -> Self {
        match self {
            PathPrimitive::Arc(arc) => PathPrimitive::Arc(arc.placed(angle, offset)),
            PathPrimitive::Line(line) => PathPrimitive::Line(line.placed(angle, offset)),
        }
    }

    /// Reflects the primitive across the line through `origin` at
    /// `axis_angle`.
    pub fn mirrored(&self, origin: Point, axis_angle: f64) -> Self {
        match self {
            PathPrimitive::Arc(arc) => PathPrimitive::Arc(arc.mirrored(origin, axis_angle)),
            PathPrimitive::Line(line) => PathPrimitive::Line(line.mirrored(origin, axis_angle)),
        }
    }
}
