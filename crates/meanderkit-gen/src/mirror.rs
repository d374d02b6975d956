//! Layer projection for meander centerlines.
//!
//! A serpentine placed on the back of the board must be the mirror image of
//! the front-layer one so both look identical when the board is flipped. The
//! mirror axis is the line through the path's own endpoints (the anchor
//! axis), so the anchors themselves stay fixed.

use crate::path::Centerline;
use meanderkit_core::TraceLayer;
use tracing::debug;

/// Expresses a centerline on the requested copper layer.
///
/// Projecting onto the layer the centerline is already on is the identity.
/// Projecting onto the other layer mirrors every primitive across the anchor
/// axis, flipping sweep directions and lateral offsets; lengths and radii are
/// unchanged. Projecting twice returns the original geometry.
pub fn project(centerline: &Centerline, layer: TraceLayer) -> Centerline {
    if centerline.layer == layer {
        return centerline.clone();
    }

    let (Some(first), Some(last)) = (centerline.start_point(), centerline.end_point()) else {
        // Nothing to mirror; just relabel.
        return Centerline {
            primitives: Vec::new(),
            layer,
        };
    };

    let axis_angle = (last.y - first.y).atan2(last.x - first.x);
    let primitives = centerline
        .primitives
        .iter()
        .map(|p| p.mirrored(first, axis_angle))
        .collect();

    debug!(
        "Projected centerline from {} to {} across axis at {:.4} rad",
        centerline.layer, layer, axis_angle
    );

    Centerline { primitives, layer }
}
