//! # MeanderKit
//!
//! Serpentine (meander) conductor geometry for flexible printed circuits:
//! parameters and two anchor points in, placeable board primitives out.
//!
//! This facade re-exports the public API of the member crates:
//!
//! - `meanderkit-core` — geometry primitives, layers, errors, units.
//! - `meanderkit-gen` — the generation pipeline and preview renderer.
//!
//! Most hosts only need [`generate`] (one meander trace, optionally with an
//! edge-cut boundary) or [`generate_ribbon`] (a flat flex cable with several
//! parallel conductors).

pub use meanderkit_core::{
    format_length, get_unit_label, parse_length, ArcDirection, ArcSegment, BoardLayer, Error,
    GeometryError, LineSegment, MeasurementSystem, PathPrimitive, Point, Result, TraceLayer,
    ValidationError, EPSILON,
};

pub use meanderkit_gen::{
    board_outline, conductor_envelope, emit, generate, generate_ribbon, offset_centerline,
    project, Centerline, EmittedTrace, Envelope, MeanderBuilder, MeanderParams, NormalizedParams,
    RibbonParams, Side, SvgPreview, TracePrimitive,
};
