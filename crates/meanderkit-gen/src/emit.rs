//! Conversion of centerlines and envelopes into placeable board primitives.
//!
//! The emitter walks the centerline in traversal order, tagging each
//! primitive with the trace width and the resolved copper layer, then appends
//! envelope primitives on the outline layer with zero width (cut lines carry
//! no copper). Output order is deterministic so downstream consumers can
//! connect primitives by shared endpoints instead of searching.

use crate::offset::Envelope;
use crate::params::NormalizedParams;
use crate::path::Centerline;
use meanderkit_core::{BoardLayer, PathPrimitive, Point};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A path primitive tagged with the width and board layer it is placed with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TracePrimitive {
    pub primitive: PathPrimitive,
    /// Stroke width; zero for outline primitives.
    pub width: f64,
    pub layer: BoardLayer,
}

/// The complete, ordered primitive list handed to the board-insertion
/// collaborator. Owns no reference back to the parameters or centerline.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EmittedTrace {
    pub primitives: Vec<TracePrimitive>,
}

impl EmittedTrace {
    /// Total length over all primitives, outline included.
    pub fn total_length(&self) -> f64 {
        self.primitives.iter().map(|p| p.primitive.length()).sum()
    }

    /// Primitives on the given board layer, in emission order.
    pub fn layer_primitives(&self, layer: BoardLayer) -> impl Iterator<Item = &TracePrimitive> {
        self.primitives.iter().filter(move |p| p.layer == layer)
    }

    /// Axis-aligned bounding box over all primitives, grown by half of each
    /// primitive's stroke width. Arcs contribute their start, mid, and end
    /// points. Returns `None` for an empty trace.
    pub fn bounding_box(&self) -> Option<(Point, Point)> {
        if self.primitives.is_empty() {
            return None;
        }
        let mut min = Point::new(f64::MAX, f64::MAX);
        let mut max = Point::new(f64::MIN, f64::MIN);
        for tagged in &self.primitives {
            let half_width = tagged.width / 2.0;
            let points = match &tagged.primitive {
                PathPrimitive::Arc(arc) => {
                    vec![arc.start_point(), arc.mid_point(), arc.end_point()]
                }
                PathPrimitive::Line(line) => vec![line.from, line.to],
            };
            for p in points {
                min.x = min.x.min(p.x - half_width);
                min.y = min.y.min(p.y - half_width);
                max.x = max.x.max(p.x + half_width);
                max.y = max.y.max(p.y + half_width);
            }
        }
        Some((min, max))
    }
}

/// Emits a centerline, and optionally its board-outline envelope, as tagged
/// board primitives.
pub fn emit(
    centerline: &Centerline,
    envelope: Option<&Envelope>,
    params: &NormalizedParams,
) -> EmittedTrace {
    let copper = centerline.layer.copper();
    let mut primitives: Vec<TracePrimitive> = centerline
        .primitives
        .iter()
        .map(|p| TracePrimitive {
            primitive: *p,
            width: params.trace_width,
            layer: copper,
        })
        .collect();

    if let Some(envelope) = envelope {
        primitives.extend(envelope.primitives.iter().map(|p| TracePrimitive {
            primitive: *p,
            width: 0.0,
            layer: BoardLayer::EdgeCuts,
        }));
    }

    debug!(
        "Emitted {} primitives on {} (outline: {})",
        primitives.len(),
        copper,
        envelope.is_some()
    );

    EmittedTrace { primitives }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::offset::board_outline;
    use crate::params::MeanderParams;
    use crate::path::MeanderBuilder;
    use meanderkit_core::TraceLayer;

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
    fn test_emit_tags_copper_primitives() {
        let (centerline, params) = sample();
        let trace = emit(&centerline, None, &params);
        assert_eq!(trace.primitives.len(), 6);
        for tagged in &trace.primitives {
            assert_eq!(tagged.layer, BoardLayer::FrontCopper);
            assert_eq!(tagged.width, 0.3);
        }
    }

    #[test]
    fn test_emit_preserves_traversal_order() {
        let (centerline, params) = sample();
        let trace = emit(&centerline, None, &params);
        for (source, emitted) in centerline.primitives.iter().zip(&trace.primitives) {
            assert_eq!(*source, emitted.primitive);
        }
    }

    #[test]
    fn test_emit_appends_zero_width_outline() {
        let (centerline, params) = sample();
        let outline = board_outline(&centerline, &params).unwrap();
        let trace = emit(&centerline, Some(&outline), &params);
        assert_eq!(trace.primitives.len(), 6 + outline.primitives.len());
        let cuts: Vec<_> = trace.layer_primitives(BoardLayer::EdgeCuts).collect();
        assert_eq!(cuts.len(), outline.primitives.len());
        for cut in cuts {
            assert_eq!(cut.width, 0.0);
        }
        // Copper comes first, outline after.
        assert_eq!(trace.primitives[5].layer, BoardLayer::FrontCopper);
        assert_eq!(trace.primitives[6].layer, BoardLayer::EdgeCuts);
    }

    #[test]
    fn test_back_layer_resolution() {
        let (centerline, params) = sample();
        let back = Centerline {
            layer: TraceLayer::Back,
            ..centerline
        };
        let trace = emit(&back, None, &params);
        assert!(trace
            .primitives
            .iter()
            .all(|p| p.layer == BoardLayer::BackCopper));
    }

    #[test]
    fn test_bounding_box_covers_wave_and_width() {
        let (centerline, params) = sample();
        let trace = emit(&centerline, None, &params);
        let (min, max) = trace.bounding_box().unwrap();
        // Wave spans y in [-1, 1] plus half the 0.3 width.
        assert!((min.x + 0.15).abs() < 1e-9);
        assert!((max.x - 12.15).abs() < 1e-9);
        assert!((min.y + 1.15).abs() < 1e-9);
        assert!((max.y - 1.15).abs() < 1e-9);
    }

    #[test]
    fn test_empty_trace_has_no_bounding_box() {
        assert_eq!(EmittedTrace::default().bounding_box(), None);
    }

    #[test]
    fn test_emission_is_deterministic() {
        let (centerline, params) = sample();
        let outline = board_outline(&centerline, &params).unwrap();
        let a = emit(&centerline, Some(&outline), &params);
        let b = emit(&centerline, Some(&outline), &params);
        assert_eq!(a, b);
    }
}
