//! Error types for meander generation.
//!
//! Validation errors are raised before any geometry is built; geometry errors
//! are raised during path or envelope construction. Every variant carries the
//! offending value and the threshold it violated so a host dialog can show an
//! actionable message.

use thiserror::Error;

/// Errors raised while validating user-supplied parameters.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A length or count parameter that must be strictly positive was not.
    #[error("Parameter '{name}' must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    /// A clearance parameter was negative.
    #[error("Parameter '{name}' must not be negative, got {value}")]
    NegativeClearance { name: &'static str, value: f64 },

    /// The repeat count was zero.
    #[error("Repeat count must be at least 1")]
    ZeroRepeatCount,

    /// The period cannot fit two turns of the derived radius.
    #[error("Period {period} is too short for the requested amplitude, minimum is {minimum}")]
    PeriodTooShort { period: f64, minimum: f64 },

    /// The derived turn radius cannot accommodate the trace plus clearance.
    #[error(
        "Turn radius {radius} cannot accommodate the trace, needs at least {required} \
         (half trace width plus clearance)"
    )]
    GeometryInfeasible { radius: f64, required: f64 },

    /// A ribbon was requested without any front conductor.
    #[error("Ribbon needs at least one front conductor")]
    NoFrontConductors,

    /// The ribbon pitch cannot keep adjacent conductors clear of each other.
    #[error("Pitch {pitch} is too small for the conductor widths, minimum is {minimum}")]
    PitchTooSmall { pitch: f64, minimum: f64 },
}

/// Errors raised while constructing path or envelope geometry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Start and end anchors coincide; no axis can be derived.
    #[error("Anchors coincide at ({x}, {y}), a meander needs two distinct anchor points")]
    AnchorsCoincident { x: f64, y: f64 },

    /// The anchor axis is shorter than the span of the requested periods.
    #[error("Anchor axis is too short: {available} available, {required} required")]
    AxisDegenerate { available: f64, required: f64 },

    /// An offset would collapse an arc to zero or negative radius.
    #[error("Offset by {distance} collapses an arc to radius {radius}")]
    OffsetCollapse { radius: f64, distance: f64 },
}

/// Umbrella error type for the generation pipeline.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A parameter validation error occurred.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A geometry construction error occurred.
    #[error("Geometry error: {0}")]
    Geometry(#[from] GeometryError),
}

/// Result type alias for meander generation.
pub type Result<T> = std::result::Result<T, Error>;
