//! Flat flex-cable ribbons: parallel conductors sharing one meander shape.
//!
//! A ribbon is several conductors per copper layer, each a lateral offset of
//! one base centerline between one anchor pair, enclosed by a single board
//! outline. Conductor counts and widths are independent per layer, as flex
//! cables commonly route power on one side and signals on the other.

use crate::emit::{EmittedTrace, TracePrimitive};
use crate::mirror::project;
use crate::offset::{offset_centerline, Side};
use crate::params::MeanderParams;
use crate::path::{Centerline, MeanderBuilder};
use meanderkit_core::{BoardLayer, Result, TraceLayer, ValidationError, EPSILON};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Parameters for one ribbon generation.
///
/// The embedded meander parameters describe the base centerline; its
/// `trace_width` is the front conductor width and its `layer` is ignored
/// (a ribbon always populates both sides when `back_count` is nonzero).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RibbonParams {
    pub meander: MeanderParams,
    /// Number of conductors on the front copper layer.
    pub front_count: u32,
    /// Number of conductors on the back copper layer; zero for none.
    pub back_count: u32,
    /// Width of the back conductors.
    pub back_width: f64,
    /// Center-to-center spacing between adjacent conductors.
    pub pitch: f64,
}

impl Default for RibbonParams {
    fn default() -> Self {
        Self {
            meander: MeanderParams::default(),
            front_count: 2,
            back_count: 2,
            back_width: 0.2,
            pitch: 0.8,
        }
    }
}

impl RibbonParams {
    fn validate(&self) -> std::result::Result<(), ValidationError> {
        if self.front_count == 0 {
            return Err(ValidationError::NoFrontConductors);
        }
        if !(self.pitch > 0.0) || !self.pitch.is_finite() {
            return Err(ValidationError::NonPositive {
                name: "pitch",
                value: self.pitch,
            });
        }
        if self.back_count > 0 && (!(self.back_width > 0.0) || !self.back_width.is_finite()) {
            return Err(ValidationError::NonPositive {
                name: "back_width",
                value: self.back_width,
            });
        }

        let mut widest = self.meander.trace_width;
        if self.back_count > 0 {
            widest = widest.max(self.back_width);
        }
        let minimum = widest + self.meander.clearance;
        if self.pitch + EPSILON < minimum {
            return Err(ValidationError::PitchTooSmall {
                pitch: self.pitch,
                minimum,
            });
        }
        Ok(())
    }

    /// Lateral span between the outermost conductor centers.
    fn conductor_span(&self) -> f64 {
        let widest_count = self.front_count.max(self.back_count);
        (widest_count.saturating_sub(1)) as f64 * self.pitch
    }

    fn widest_conductor(&self) -> f64 {
        let mut widest = self.meander.trace_width;
        if self.back_count > 0 {
            widest = widest.max(self.back_width);
        }
        widest
    }
}

/// Generates a complete ribbon: front conductors, back conductors, and the
/// enclosing board outline when edge cuts are requested.
pub fn generate_ribbon(params: &RibbonParams) -> Result<EmittedTrace> {
    params.validate()?;
    let normalized = params.meander.normalize()?;
    let base = MeanderBuilder::new(normalized.clone()).centerline()?;

    let mut primitives = Vec::new();

    for offset in conductor_offsets(params.front_count, params.pitch) {
        let conductor = lateral_conductor(&base, offset)?;
        primitives.extend(conductor.primitives.iter().map(|p| TracePrimitive {
            primitive: *p,
            width: normalized.trace_width,
            layer: BoardLayer::FrontCopper,
        }));
    }

    if params.back_count > 0 {
        let back_base = project(&base, TraceLayer::Back);
        for offset in conductor_offsets(params.back_count, params.pitch) {
            let conductor = lateral_conductor(&back_base, offset)?;
            primitives.extend(conductor.primitives.iter().map(|p| TracePrimitive {
                primitive: *p,
                width: params.back_width,
                layer: BoardLayer::BackCopper,
            }));
        }
    }

    if normalized.edge_cuts {
        let distance = params.conductor_span() / 2.0
            + params.widest_conductor() / 2.0
            + normalized.edge_cut_clearance;
        let outline = offset_centerline(&base, distance, Side::Both)?;
        primitives.extend(outline.primitives.iter().map(|p| TracePrimitive {
            primitive: *p,
            width: 0.0,
            layer: BoardLayer::EdgeCuts,
        }));
    }

    debug!(
        "Generated ribbon: {} front, {} back conductors, {} primitives",
        params.front_count,
        params.back_count,
        primitives.len()
    );

    Ok(EmittedTrace { primitives })
}

/// Signed lateral conductor positions, ascending and centered on the base
/// centerline.
fn conductor_offsets(count: u32, pitch: f64) -> Vec<f64> {
    let mid = (count.saturating_sub(1)) as f64 / 2.0;
    (0..count).map(|i| (i as f64 - mid) * pitch).collect()
}

/// The base centerline shifted laterally by a signed offset; positive moves
/// to the left of the traversal direction.
fn lateral_conductor(base: &Centerline, offset: f64) -> Result<Centerline> {
    if offset.abs() < EPSILON {
        return Ok(base.clone());
    }
    let side = if offset > 0.0 { Side::Left } else { Side::Right };
    let envelope = offset_centerline(base, offset.abs(), side)?;
    Ok(Centerline {
        primitives: envelope.primitives,
        layer: base.layer,
    })
}
