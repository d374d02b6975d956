//! Meander centerline construction.
//!
//! The centerline is a chain of alternating 180 degree turns of radius
//! `amplitude / 2`, built in a local frame whose x axis runs from the start
//! anchor to the end anchor, then placed into board coordinates. Turn
//! junctions lie on the anchor axis with tangents perpendicular to it, so
//! every junction is tangent-continuous.
//!
//! A turn advancing exactly its diameter along the axis is a single
//! semicircular arc. When the period leaves extra advance, or when the anchor
//! distance exceeds the chain span, the surplus is absorbed as straight runs
//! at the turn apexes: the turn splits into a quarter arc, a straight run
//! parallel to the axis at lateral offset `amplitude / 2`, and a second
//! quarter arc. The anchor-distance remainder goes half into the first turn
//! and half into the last, so the path starts and ends exactly on the
//! anchors.

use crate::params::NormalizedParams;
use meanderkit_core::{
    ArcDirection, ArcSegment, GeometryError, LineSegment, PathPrimitive, Point, TraceLayer,
    EPSILON,
};
use std::f64::consts::{FRAC_PI_2, PI};
use tracing::debug;

/// Apex runs shorter than this are snapped to zero so turns degenerate to
/// clean semicircles instead of emitting unplaceable micro-segments. Kept
/// well below [`EPSILON`] so the snap never moves the path off the anchors.
const MIN_APEX_RUN: f64 = 1e-9;

/// An ordered, tangent-continuous sequence of path primitives, expressed on a
/// particular copper layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Centerline {
    pub primitives: Vec<PathPrimitive>,
    /// The copper layer this centerline is currently expressed on.
    pub layer: TraceLayer,
}

impl Centerline {
    /// The first point of the path, if any.
    pub fn start_point(&self) -> Option<Point> {
        self.primitives.first().map(|p| p.start_point())
    }

    /// The last point of the path, if any.
    pub fn end_point(&self) -> Option<Point> {
        self.primitives.last().map(|p| p.end_point())
    }

    /// Total path length.
    pub fn total_length(&self) -> f64 {
        self.primitives.iter().map(|p| p.length()).sum()
    }

    /// Whether every adjacent primitive pair shares its endpoint and tangent
    /// direction within [`EPSILON`].
    pub fn is_tangent_continuous(&self) -> bool {
        self.primitives.windows(2).all(|pair| {
            let end = pair[0].end_point();
            let start = pair[1].start_point();
            let out = pair[0].end_tangent();
            let incoming = pair[1].start_tangent();
            let dot = out.x * incoming.x + out.y * incoming.y;
            end.almost_eq(&start) && dot > 1.0 - EPSILON
        })
    }
}

/// Builds meander centerlines from validated parameters.
#[derive(Debug)]
pub struct MeanderBuilder {
    params: NormalizedParams,
}

impl MeanderBuilder {
    /// Creates a builder for the given parameters.
    pub fn new(params: NormalizedParams) -> Self {
        Self { params }
    }

    /// Constructs the centerline between the two anchors.
    ///
    /// The result is always expressed on the front layer; use
    /// [`crate::mirror::project`] to move it to the back.
    pub fn centerline(&self) -> Result<Centerline, GeometryError> {
        let params = &self.params;
        let axis_length = params.axis_length();
        if axis_length < EPSILON {
            return Err(GeometryError::AnchorsCoincident {
                x: params.start.x,
                y: params.start.y,
            });
        }

        let span = params.chain_span();
        if axis_length + EPSILON < span {
            return Err(GeometryError::AxisDegenerate {
                available: axis_length,
                required: span,
            });
        }
        let remainder = (axis_length - span).max(0.0);

        let radius = params.turn_radius;
        // Extra axis advance per turn beyond the turn diameter.
        let base_run = ((params.period - 4.0 * radius) / 2.0).max(0.0);
        let turns = 2 * params.repeat_count as usize;

        let mut primitives = Vec::new();
        let mut cursor = 0.0;
        for index in 0..turns {
            let mut apex_run = base_run;
            if index == 0 {
                apex_run += remainder / 2.0;
            }
            if index == turns - 1 {
                apex_run += remainder / 2.0;
            }
            if apex_run < MIN_APEX_RUN {
                apex_run = 0.0;
            }
            let upward = index % 2 == 0;
            push_turn(&mut primitives, cursor, radius, apex_run, upward);
            cursor += 2.0 * radius + apex_run;
        }

        // Place the local-frame chain into board coordinates.
        let axis_angle = (params.end.y - params.start.y).atan2(params.end.x - params.start.x);
        let primitives: Vec<PathPrimitive> = primitives
            .iter()
            .map(|p| p.placed(axis_angle, params.start))
            .collect();

        debug!(
            "Built meander centerline: {} periods, {} primitives, remainder {:.4}",
            params.repeat_count,
            primitives.len(),
            remainder
        );

        Ok(Centerline {
            primitives,
            layer: TraceLayer::Front,
        })
    }
}

/// Appends one 180 degree turn starting at `(x, 0)` in the local frame.
///
/// An upward turn sweeps clockwise over `y = +radius`, a downward turn
/// counter-clockwise under `y = -radius`. With a zero apex run the turn is a
/// single semicircle; otherwise it splits into two quarter arcs around a
/// straight apex run.
fn push_turn(primitives: &mut Vec<PathPrimitive>, x: f64, radius: f64, apex_run: f64, upward: bool) {
    let direction = if upward {
        ArcDirection::Cw
    } else {
        ArcDirection::Ccw
    };
    let apex_y = if upward { radius } else { -radius };

    if apex_run <= 0.0 {
        primitives.push(PathPrimitive::Arc(ArcSegment::new(
            Point::new(x + radius, 0.0),
            radius,
            PI,
            0.0,
            direction,
        )));
        return;
    }

    let apex_angle = if upward { FRAC_PI_2 } else { 3.0 * FRAC_PI_2 };
    primitives.push(PathPrimitive::Arc(ArcSegment::new(
        Point::new(x + radius, 0.0),
        radius,
        PI,
        apex_angle,
        direction,
    )));
    primitives.push(PathPrimitive::Line(LineSegment::new(
        Point::new(x + radius, apex_y),
        Point::new(x + radius + apex_run, apex_y),
    )));
    primitives.push(PathPrimitive::Arc(ArcSegment::new(
        Point::new(x + radius + apex_run, 0.0),
        radius,
        apex_angle,
        0.0,
        direction,
    )));
}
