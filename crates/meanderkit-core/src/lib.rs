//! # MeanderKit Core
//!
//! Core types for serpentine (meander) trace generation: 2D geometry
//! primitives, board layers, error types, and unit handling.
//!
//! Everything in this crate is a plain value type. Geometry is expressed in
//! millimeters with angles in radians; conversions from host dialog input
//! (including imperial lengths) live in [`units`].

pub mod error;
pub mod geometry;
pub mod layer;
pub mod units;

pub use error::{Error, GeometryError, Result, ValidationError};
pub use geometry::{ArcDirection, ArcSegment, LineSegment, PathPrimitive, Point, EPSILON};
pub use layer::{BoardLayer, TraceLayer};
pub use units::{format_length, get_unit_label, parse_length, MeasurementSystem};
