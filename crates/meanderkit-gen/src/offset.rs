//! Parallel offset envelopes for meander centerlines.
//!
//! Offsetting a tangent-continuous arc/line chain is exact: arcs become
//! concentric arcs with the same angular span and sweep direction, lines
//! become parallel lines. Adjacent offset primitives share endpoints by
//! construction, so the envelope stays tangent-continuous. An offset that
//! would push an arc to zero or negative radius is rejected as a collapse.

use crate::params::NormalizedParams;
use crate::path::Centerline;
use meanderkit_core::{
    ArcDirection, ArcSegment, GeometryError, LineSegment, PathPrimitive, Point, EPSILON,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Which side of the centerline an envelope runs on, relative to the
/// traversal direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
    /// Both sides, joined into a single closed loop with straight caps
    /// across the path ends.
    Both,
}

/// A centerline-shaped sequence offset from a source centerline.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    pub primitives: Vec<PathPrimitive>,
    pub side: Side,
    /// Whether the primitives form a closed loop.
    pub closed: bool,
}

impl Envelope {
    /// Total length of the envelope primitives.
    pub fn total_length(&self) -> f64 {
        self.primitives.iter().map(|p| p.length()).sum()
    }
}

/// Offsets a centerline by `distance` on the given side.
///
/// `Side::Left` and `Side::Right` produce an open envelope running parallel
/// to the centerline. `Side::Both` produces a closed boundary: the left side
/// traversed forward, a cap across the path end, the right side reversed,
/// and a cap back across the path start — usable as a board edge cut around
/// the trace.
pub fn offset_centerline(
    centerline: &Centerline,
    distance: f64,
    side: Side,
) -> Result<Envelope, GeometryError> {
    debug_assert!(
        distance.is_finite() && distance > 0.0,
        "offset distance must be positive and finite, got {distance}"
    );

    match side {
        Side::Left | Side::Right => {
            let primitives = offset_side(centerline, distance, side == Side::Left)?;
            Ok(Envelope {
                primitives,
                side,
                closed: false,
            })
        }
        Side::Both => {
            let left = offset_side(centerline, distance, true)?;
            let right = offset_side(centerline, distance, false)?;
            let mut primitives = Vec::with_capacity(left.len() + right.len() + 2);

            let left_start = left.first().map(|p| p.start_point());
            let left_end = left.last().map(|p| p.end_point());
            let right_start = right.first().map(|p| p.start_point());
            let right_end = right.last().map(|p| p.end_point());

            primitives.extend(left);
            if let (Some(from), Some(to)) = (left_end, right_end) {
                primitives.push(PathPrimitive::Line(LineSegment::new(from, to)));
            }
            primitives.extend(right.iter().rev().map(|p| p.reversed()));
            if let (Some(from), Some(to)) = (right_start, left_start) {
                primitives.push(PathPrimitive::Line(LineSegment::new(from, to)));
            }

            debug!(
                "Built closed envelope at distance {:.4}: {} primitives",
                distance,
                primitives.len()
            );

            Ok(Envelope {
                primitives,
                side,
                closed: true,
            })
        }
    }
}

/// The conductor outline: both sides of the centerline at half the trace
/// width, closed across the trace ends.
pub fn conductor_envelope(
    centerline: &Centerline,
    params: &NormalizedParams,
) -> Result<Envelope, GeometryError> {
    offset_centerline(centerline, params.trace_width / 2.0, Side::Both)
}

/// The board-outline boundary: both sides at half the trace width plus the
/// edge cut clearance, closed across the trace ends.
pub fn board_outline(
    centerline: &Centerline,
    params: &NormalizedParams,
) -> Result<Envelope, GeometryError> {
    let distance = params.trace_width / 2.0 + params.edge_cut_clearance;
    offset_centerline(centerline, distance, Side::Both)
}

fn offset_side(
    centerline: &Centerline,
    distance: f64,
    left: bool,
) -> Result<Vec<PathPrimitive>, GeometryError> {
    centerline
        .primitives
        .iter()
        .map(|p| offset_primitive(p, distance, left))
        .collect()
}

fn offset_primitive(
    primitive: &PathPrimitive,
    distance: f64,
    left: bool,
) -> Result<PathPrimitive, GeometryError> {
    match primitive {
        PathPrimitive::Line(line) => {
            let dir = line.direction();
            // Unit normal to the left of the traversal direction.
            let (nx, ny) = (-dir.y, dir.x);
            let sign = if left { 1.0 } else { -1.0 };
            let shift = Point::new(sign * nx * distance, sign * ny * distance);
            Ok(PathPrimitive::Line(LineSegment::new(
                Point::new(line.from.x + shift.x, line.from.y + shift.y),
                Point::new(line.to.x + shift.x, line.to.y + shift.y),
            )))
        }
        PathPrimitive::Arc(arc) => {
            // For a counter-clockwise arc the center lies to the left of the
            // traversal, so the left offset moves toward the center.
            let toward_center = match arc.direction {
                ArcDirection::Ccw => left,
                ArcDirection::Cw => !left,
            };
            let radius = if toward_center {
                arc.radius - distance
            } else {
                arc.radius + distance
            };
            if radius <= EPSILON {
                return Err(GeometryError::OffsetCollapse { radius, distance });
            }
            Ok(PathPrimitive::Arc(ArcSegment::new(
                arc.center,
                radius,
                arc.start_angle,
                arc.end_angle,
                arc.direction,
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::MeanderParams;
    use crate::path::MeanderBuilder;
    use std::f64::consts::PI;

    fn sample() -> (Centerline, NormalizedParams) {
        let params = MeanderParams {
            amplitude: 2.0,
            period: 4.0,
            repeat_count: 3,
            trace_width: 0.3,
            clearance: 0.2,
            start: Point::new(0.0, 0.0),
            end: Point::new(12.0, 0.0),
            ..Default::default()
        }
        .normalize()
        .unwrap();
        let centerline = MeanderBuilder::new(params.clone()).centerline().unwrap();
        (centerline, params)
    }

    #[test]
    fn test_open_offset_is_concentric() {
        let (centerline, _) = sample();
        let envelope = offset_centerline(&centerline, 0.25, Side::Left).unwrap();
        assert_eq!(envelope.primitives.len(), centerline.primitives.len());
        assert!(!envelope.closed);
        for (source, offset) in centerline.primitives.iter().zip(&envelope.primitives) {
            let (PathPrimitive::Arc(src), PathPrimitive::Arc(off)) = (source, offset) else {
                panic!("expected arcs");
            };
            assert!(src.center.almost_eq(&off.center));
            assert_eq!(src.direction, off.direction);
            assert!((src.sweep_angle() - off.sweep_angle()).abs() < 1e-12);
            // Alternating turns put the center alternately left and right of
            // the traversal, so a one-sided offset alternates radius.
            let expected = match src.direction {
                ArcDirection::Cw => 1.25,
                ArcDirection::Ccw => 0.75,
            };
            assert!((off.radius - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_offset_endpoints_stay_joined() {
        let (centerline, _) = sample();
        for side in [Side::Left, Side::Right] {
            let envelope = offset_centerline(&centerline, 0.3, side).unwrap();
            for pair in envelope.primitives.windows(2) {
                assert!(pair[0].end_point().almost_eq(&pair[1].start_point()));
            }
        }
    }

    #[test]
    fn test_line_offset_is_parallel() {
        let line = PathPrimitive::Line(LineSegment::new(Point::new(0.0, 1.0), Point::new(2.0, 1.0)));
        let left = offset_primitive(&line, 0.5, true).unwrap();
        let right = offset_primitive(&line, 0.5, false).unwrap();
        assert!(left.start_point().almost_eq(&Point::new(0.0, 1.5)));
        assert!(right.start_point().almost_eq(&Point::new(0.0, 0.5)));
        assert!((left.length() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_closed_envelope_shape() {
        let (centerline, params) = sample();
        let envelope = board_outline(&centerline, &params).unwrap();
        assert!(envelope.closed);
        // Six arcs per side plus two caps.
        assert_eq!(envelope.primitives.len(), 14);
        // The loop closes: every junction shared, including last-to-first.
        let count = envelope.primitives.len();
        for i in 0..count {
            let here = envelope.primitives[i].end_point();
            let next = envelope.primitives[(i + 1) % count].start_point();
            assert!(here.almost_eq(&next));
        }
        // Caps cross the path ends with length twice the offset distance.
        let distance = params.trace_width / 2.0 + params.edge_cut_clearance;
        let caps: Vec<f64> = envelope
            .primitives
            .iter()
            .filter_map(|p| match p {
                PathPrimitive::Line(line) => Some(line.length()),
                PathPrimitive::Arc(_) => None,
            })
            .collect();
        assert_eq!(caps.len(), 2);
        for cap in caps {
            assert!((cap - 2.0 * distance).abs() < 1e-9);
        }
    }

    #[test]
    fn test_offset_collapse() {
        let (centerline, _) = sample();
        // Turn radius is 1.0; offsetting by 1.2 collapses the inner arcs.
        let result = offset_centerline(&centerline, 1.2, Side::Both);
        match result {
            Err(GeometryError::OffsetCollapse { radius, distance }) => {
                assert!(radius <= 0.0);
                assert!((distance - 1.2).abs() < 1e-12);
            }
            other => panic!("expected OffsetCollapse, got {other:?}"),
        }
    }

    #[test]
    fn test_conductor_envelope_lengths() {
        let (centerline, params) = sample();
        let envelope = conductor_envelope(&centerline, &params).unwrap();
        // Inner and outer arcs average back to the centerline radius, so the
        // two sides together are twice the centerline arc length.
        let caps = 2.0 * params.trace_width;
        assert!(
            (envelope.total_length() - (2.0 * centerline.total_length() + caps)).abs() < 1e-9
        );
        assert!((envelope.total_length() - (12.0 * PI + 0.6)).abs() < 1e-9);
    }
}
