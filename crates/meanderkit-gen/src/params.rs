//! User-facing generation parameters and their validated form.
//!
//! [`MeanderParams`] is what a host dialog fills in; it serializes with serde
//! so hosts can persist last-used values as explicit configuration instead of
//! process-global state. [`MeanderParams::normalize`] checks every range and
//! feasibility constraint and produces a [`NormalizedParams`], the only type
//! the downstream builders accept.

use meanderkit_core::{Point, TraceLayer, ValidationError, EPSILON};
use serde::{Deserialize, Serialize};

/// Parameters for one meander generation between two anchor points.
///
/// All lengths are millimeters. The turn radius is derived, not chosen: every
/// turn has radius `amplitude / 2`, so the wave spans `amplitude` peak to
/// peak around the anchor axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeanderParams {
    /// Peak-to-peak lateral extent of the wave.
    pub amplitude: f64,
    /// Axis advance per full period (one up-turn plus one down-turn).
    pub period: f64,
    /// Number of full periods.
    pub repeat_count: u32,
    /// Conductor width.
    pub trace_width: f64,
    /// Required copper-to-copper clearance inside a turn.
    pub clearance: f64,
    /// Path start anchor.
    pub start: Point,
    /// Path end anchor.
    pub end: Point,
    /// Copper layer to place the trace on.
    pub layer: TraceLayer,
    /// Whether to also generate a board-outline boundary around the trace.
    pub edge_cuts: bool,
    /// Gap between the conductor edge and the board outline.
    pub edge_cut_clearance: f64,
}

impl Default for MeanderParams {
    fn default() -> Self {
        Self {
            amplitude: 2.0,
            period: 4.0,
            repeat_count: 5,
            trace_width: 0.3,
            clearance: 0.2,
            start: Point::new(0.0, 0.0),
            end: Point::new(20.0, 0.0),
            layer: TraceLayer::Front,
            edge_cuts: true,
            edge_cut_clearance: 0.3,
        }
    }
}

impl MeanderParams {
    /// Validates the parameters and derives the turn radius.
    ///
    /// Checks, in order: positivity of the lengths and the repeat count,
    /// clearance signs, turn feasibility (`radius >= trace_width / 2 +
    /// clearance`), and period compatibility (`period >= 2 * amplitude`,
    /// since a 180 degree turn of radius `amplitude / 2` spans `amplitude`
    /// of axis advance and a period holds two turns).
    pub fn normalize(&self) -> Result<NormalizedParams, ValidationError> {
        for (name, value) in [
            ("amplitude", self.amplitude),
            ("period", self.period),
            ("trace_width", self.trace_width),
        ] {
            if !(value > 0.0) || !value.is_finite() {
                return Err(ValidationError::NonPositive { name, value });
            }
        }
        if self.repeat_count == 0 {
            return Err(ValidationError::ZeroRepeatCount);
        }
        if !(self.clearance >= 0.0) {
            return Err(ValidationError::NegativeClearance {
                name: "clearance",
                value: self.clearance,
            });
        }
        if self.edge_cuts && !(self.edge_cut_clearance >= 0.0) {
            return Err(ValidationError::NegativeClearance {
                name: "edge_cut_clearance",
                value: self.edge_cut_clearance,
            });
        }

        let turn_radius = self.amplitude / 2.0;
        let required = self.trace_width / 2.0 + self.clearance;
        if turn_radius + EPSILON < required {
            return Err(ValidationError::GeometryInfeasible {
                radius: turn_radius,
                required,
            });
        }

        let minimum_period = 2.0 * self.amplitude;
        if self.period + EPSILON < minimum_period {
            return Err(ValidationError::PeriodTooShort {
                period: self.period,
                minimum: minimum_period,
            });
        }

        Ok(NormalizedParams {
            amplitude: self.amplitude,
            period: self.period,
            repeat_count: self.repeat_count,
            trace_width: self.trace_width,
            clearance: self.clearance,
            start: self.start,
            end: self.end,
            layer: self.layer,
            edge_cuts: self.edge_cuts,
            edge_cut_clearance: self.edge_cut_clearance,
            turn_radius,
        })
    }
}

/// Validated parameters plus derived values. Only obtainable through
/// [`MeanderParams::normalize`].
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedParams {
    pub amplitude: f64,
    pub period: f64,
    pub repeat_count: u32,
    pub trace_width: f64,
    pub clearance: f64,
    pub start: Point,
    pub end: Point,
    pub layer: TraceLayer,
    pub edge_cuts: bool,
    pub edge_cut_clearance: f64,
    /// Derived turn radius, `amplitude / 2`.
    pub turn_radius: f64,
}

impl NormalizedParams {
    /// Straight-line distance between the anchors.
    pub fn axis_length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }

    /// Axis advance of the full chain, `repeat_count * period`.
    pub fn chain_span(&self) -> f64 {
        self.repeat_count as f64 * self.period
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params_normalize() {
        let normalized = MeanderParams::default().normalize().unwrap();
        assert_eq!(normalized.turn_radius, 1.0);
        assert_eq!(normalized.chain_span(), 20.0);
    }

    #[test]
    fn test_rejects_non_positive_lengths() {
        let params = MeanderParams {
            amplitude: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            params.normalize(),
            Err(ValidationError::NonPositive { name: "amplitude", .. })
        ));

        let params = MeanderParams {
            period: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            params.normalize(),
            Err(ValidationError::NonPositive { name: "period", .. })
        ));

        let params = MeanderParams {
            trace_width: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            params.normalize(),
            Err(ValidationError::NonPositive { name: "trace_width", .. })
        ));
    }

    #[test]
    fn test_rejects_zero_repeat_count() {
        let params = MeanderParams {
            repeat_count: 0,
            ..Default::default()
        };
        assert_eq!(params.normalize(), Err(ValidationError::ZeroRepeatCount));
    }

    #[test]
    fn test_rejects_negative_clearances() {
        let params = MeanderParams {
            clearance: -0.1,
            ..Default::default()
        };
        assert!(matches!(
            params.normalize(),
            Err(ValidationError::NegativeClearance { name: "clearance", .. })
        ));

        let params = MeanderParams {
            edge_cut_clearance: -0.1,
            ..Default::default()
        };
        assert!(matches!(
            params.normalize(),
            Err(ValidationError::NegativeClearance {
                name: "edge_cut_clearance",
                ..
            })
        ));

        // A negative edge cut clearance is ignored when edge cuts are off.
        let params = MeanderParams {
            edge_cuts: false,
            edge_cut_clearance: -0.1,
            ..Default::default()
        };
        assert!(params.normalize().is_ok());
    }

    #[test]
    fn test_infeasible_turn() {
        // Radius 0.1 cannot hold half of 0.3 width plus 0.1 clearance.
        let params = MeanderParams {
            amplitude: 0.2,
            period: 0.4,
            trace_width: 0.3,
            clearance: 0.1,
            ..Default::default()
        };
        match params.normalize() {
            Err(ValidationError::GeometryInfeasible { radius, required }) => {
                assert!((radius - 0.1).abs() < 1e-12);
                assert!((required - 0.25).abs() < 1e-12);
            }
            other => panic!("expected GeometryInfeasible, got {other:?}"),
        }
    }

    #[test]
    fn test_period_too_short() {
        let params = MeanderParams {
            amplitude: 2.0,
            period: 3.0,
            ..Default::default()
        };
        assert_eq!(
            params.normalize(),
            Err(ValidationError::PeriodTooShort {
                period: 3.0,
                minimum: 4.0,
            })
        );
    }

    #[test]
    fn test_params_serde_round_trip() {
        let params = MeanderParams {
            layer: TraceLayer::Back,
            repeat_count: 3,
            ..Default::default()
        };
        let json = serde_json::to_string(&params).unwrap();
        let back: MeanderParams = serde_json::from_str(&json).unwrap();
        assert_eq!(back, params);
    }
}
