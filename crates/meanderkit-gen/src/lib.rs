//! # MeanderKit Generator
//!
//! Serpentine (meander) trace generation for flexible printed circuits.
//! Turns a small set of user parameters and two anchor points into a
//! tangent-continuous chain of arc and line primitives, optionally with a
//! parallel board-outline boundary, ready to hand to a host board editor.
//!
//! ## Pipeline
//!
//! ```text
//! MeanderParams (host dialog)
//!   └── normalize          validation + derived turn radius
//! MeanderBuilder
//!   └── centerline         alternating 180 degree turns between the anchors
//! project                  mirror across the anchor axis for back placement
//! offset / board_outline   concentric envelopes, closed edge-cut boundary
//! emit                     width/layer tagged primitives, deterministic order
//! ```
//!
//! The whole pipeline is pure: no I/O, no shared state, same inputs give
//! bit-for-bit identical output. [`generate`] runs it end to end; the stages
//! are public for hosts that need intermediate geometry (live previews,
//! custom envelopes).
//!
//! ## Usage
//!
//! ```rust,ignore
//! use meanderkit_gen::{generate, MeanderParams};
//!
//! let trace = generate(&MeanderParams::default())?;
//! for primitive in &trace.primitives {
//!     board.place(primitive.primitive, primitive.width, primitive.layer);
//! }
//! ```

pub mod emit;
pub mod mirror;
pub mod offset;
pub mod params;
pub mod path;
pub mod preview;
pub mod ribbon;

pub use emit::{emit, EmittedTrace, TracePrimitive};
pub use mirror::project;
pub use offset::{board_outline, conductor_envelope, offset_centerline, Envelope, Side};
pub use params::{MeanderParams, NormalizedParams};
pub use path::{Centerline, MeanderBuilder};
pub use preview::SvgPreview;
pub use ribbon::{generate_ribbon, RibbonParams};

use meanderkit_core::Result;
use tracing::debug;

/// Runs the full generation pipeline for one meander.
///
/// Either a complete, internally consistent trace is returned or an error;
/// no partial output is ever produced.
pub fn generate(params: &MeanderParams) -> Result<EmittedTrace> {
    let normalized = params.normalize()?;
    let centerline = MeanderBuilder::new(normalized.clone()).centerline()?;
    let centerline = project(&centerline, normalized.layer);

    let envelope = if normalized.edge_cuts {
        Some(board_outline(&centerline, &normalized)?)
    } else {
        None
    };

    let trace = emit(&centerline, envelope.as_ref(), &normalized);
    debug!(
        "Generated meander on {}: {} primitives",
        normalized.layer,
        trace.primitives.len()
    );
    Ok(trace)
}
