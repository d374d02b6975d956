//! Board layer identifiers.
//!
//! [`TraceLayer`] is what the user selects in the host dialog; [`BoardLayer`]
//! is the layer an emitted primitive lands on, including the outline layer
//! used for edge cuts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Copper layer requested for a generated trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceLayer {
    /// Front copper.
    Front,
    /// Back copper.
    Back,
}

impl TraceLayer {
    /// The copper layer on the other side of the board.
    pub fn opposite(self) -> Self {
        match self {
            Self::Front => Self::Back,
            Self::Back => Self::Front,
        }
    }

    /// The board layer copper primitives on this side are emitted onto.
    pub fn copper(self) -> BoardLayer {
        match self {
            Self::Front => BoardLayer::FrontCopper,
            Self::Back => BoardLayer::BackCopper,
        }
    }
}

impl Default for TraceLayer {
    fn default() -> Self {
        Self::Front
    }
}

impl fmt::Display for TraceLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Front => write!(f, "Front"),
            Self::Back => write!(f, "Back"),
        }
    }
}

impl FromStr for TraceLayer {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "front" | "f" | "f.cu" => Ok(Self::Front),
            "back" | "b" | "b.cu" => Ok(Self::Back),
            _ => Err(format!("Unknown trace layer: {}", s)),
        }
    }
}

/// Board layer an emitted primitive is placed onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoardLayer {
    /// Front copper.
    FrontCopper,
    /// Back copper.
    BackCopper,
    /// Board outline (cut lines, not copper).
    EdgeCuts,
}

impl fmt::Display for BoardLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FrontCopper => write!(f, "F.Cu"),
            Self::BackCopper => write!(f, "B.Cu"),
            Self::EdgeCuts => write!(f, "Edge.Cuts"),
        }
    }
}

impl FromStr for BoardLayer {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "f.cu" | "f_copper" | "front_copper" => Ok(Self::FrontCopper),
            "b.cu" | "b_copper" | "back_copper" => Ok(Self::BackCopper),
            "edge.cuts" | "edgecuts" | "edge_cuts" => Ok(Self::EdgeCuts),
            _ => Err(format!("Unknown board layer: {}", s)),
        }
    }
}
